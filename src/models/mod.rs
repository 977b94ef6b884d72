// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Session, ScholarshipMatch, FeedbackRating, MatchSummary};
pub use requests::{LoginRequest, RegisterRequest, ProfileInput, FeedbackRequest};
pub use responses::{AuthResponse, ErrorBody};
