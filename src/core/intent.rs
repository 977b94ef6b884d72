use crate::models::{FeedbackRating, ProfileInput, ScholarshipMatch};

/// A user action the flow controller knows how to dispatch
///
/// Decouples the state machine from any particular front-end: the terminal
/// loop and the tests both funnel through the same dispatch table.
#[derive(Debug, Clone)]
pub enum UserIntent {
    Login { email: String, password: String },
    Register { name: String, email: String, password: String },
    SubmitProfile(ProfileInput),
    SubmitFeedback { scholarship_id: i64, rating: FeedbackRating },
    Logout,
}

impl UserIntent {
    /// Short name used in log events
    pub fn name(&self) -> &'static str {
        match self {
            UserIntent::Login { .. } => "login",
            UserIntent::Register { .. } => "register",
            UserIntent::SubmitProfile(_) => "submit_profile",
            UserIntent::SubmitFeedback { .. } => "submit_feedback",
            UserIntent::Logout => "logout",
        }
    }
}

/// Successful result of dispatching one intent
#[derive(Debug, Clone, PartialEq)]
pub enum FlowOutcome {
    /// Session opened; profile entry is next
    LoggedIn { display_name: String },
    /// Account created and session opened; profile entry is next
    Registered { display_name: String },
    /// Profile stored and the fresh match list retrieved
    MatchesReady(Vec<ScholarshipMatch>),
    /// Feedback recorded; nothing else changed
    FeedbackRecorded { scholarship_id: i64 },
    /// Session cleared
    LoggedOut,
}
