//! ScholarMatch client - session flow for the scholarship-matching app
//!
//! This library drives the client side of the user journey: authentication,
//! profile submission, match retrieval, and feedback. It owns the session
//! state machine and the typed calls to the matching backend.

pub mod config;
pub mod core;
pub mod models;
pub mod services;
pub mod ui;

// Re-export commonly used types
pub use crate::core::{FlowError, FlowOutcome, FlowState, MessageKind, SessionFlow, UserIntent};
pub use crate::models::{FeedbackRating, MatchSummary, ProfileInput, ScholarshipMatch, Session};
pub use crate::services::{BackendClient, BackendError};
