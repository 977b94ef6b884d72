use serde::{Deserialize, Serialize};
use validator::Validate;

/// Credentials for POST /api/login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// New-account payload for POST /api/register
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Profile payload for PUT /api/profile/{userId}
///
/// Field names follow the backend's snake_case contract. The range rules
/// carry the exact messages shown when a value is out of bounds; free-text
/// fields are accepted as typed.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ProfileInput {
    #[validate(range(min = 16, max = 65, message = "Please enter a valid age between 16 and 65"))]
    pub age: u32,
    pub country: String,
    pub education_level: String,
    #[validate(range(min = 0.0, max = 4.0, message = "Please enter a valid GPA between 0.0 and 4.0"))]
    pub gpa: f64,
    pub field_of_study: String,
    pub financial_need: String,
}

/// Feedback payload for POST /api/feedback
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackRequest {
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(rename = "scholarshipId")]
    pub scholarship_id: i64,
    pub rating: u8,
}
