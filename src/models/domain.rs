use serde::{Deserialize, Serialize};

/// Authenticated user identity held for the lifetime of the session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(rename = "displayName")]
    pub display_name: String,
}

/// One scholarship the backend matched against the submitted profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScholarshipMatch {
    pub id: i64,
    pub name: String,
    pub amount: i64,
    pub confidence: u8,
    #[serde(default)]
    pub description: String,
    pub deadline: chrono::NaiveDate,
    pub apply_url: String,
}

/// Binary relevance signal attached to feedback on a single match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackRating {
    Positive,
    Negative,
}

impl FeedbackRating {
    /// Wire encoding used by the feedback endpoint: 1 for positive, 0 for negative
    pub fn as_signal(self) -> u8 {
        match self {
            FeedbackRating::Positive => 1,
            FeedbackRating::Negative => 0,
        }
    }
}

/// Header stats shown above the rendered match list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchSummary {
    pub count: usize,
    pub total_value: i64,
}

impl MatchSummary {
    /// Count and combined dollar value of a match list
    pub fn of(matches: &[ScholarshipMatch]) -> Self {
        Self {
            count: matches.len(),
            total_value: matches.iter().map(|m| m.amount).sum(),
        }
    }
}
