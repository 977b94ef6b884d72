use crate::models::{
    AuthResponse, ErrorBody, FeedbackRating, FeedbackRequest, LoginRequest, ProfileInput,
    RegisterRequest, ScholarshipMatch, Session,
};
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;

/// Fallback texts used when a denial arrives without a readable error body
const LOGIN_FALLBACK: &str = "Login failed";
const REGISTER_FALLBACK: &str = "Registration failed";
const PROFILE_FALLBACK: &str = "Profile update failed. Please try again.";
const MATCHES_FALLBACK: &str = "Could not retrieve your matches. Please try again.";
const FEEDBACK_FALLBACK: &str = "Feedback submission failed. Please try again.";

/// Errors that can occur when talking to the matching backend
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("{message}")]
    Rejected { message: String },

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Matching backend API client
///
/// Handles all communication with the scholarship backend including:
/// - Credential checks (login and registration)
/// - Profile updates
/// - Match retrieval
/// - Feedback recording
pub struct BackendClient {
    base_url: String,
    client: Client,
}

impl BackendClient {
    /// Create a new backend client with a per-request deadline
    pub fn new(base_url: String, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { base_url, client }
    }

    /// Check credentials and open a session
    pub async fn login(&self, email: &str, password: &str) -> Result<Session, BackendError> {
        let url = format!("{}/api/login", self.base_url.trim_end_matches('/'));

        tracing::debug!("Checking credentials at: {}", url);

        let response = self
            .client
            .post(&url)
            .json(&LoginRequest {
                email: email.to_string(),
                password: password.to_string(),
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = Self::denial_message(response, LOGIN_FALLBACK).await;
            tracing::info!("Login rejected ({}): {}", status, message);
            return Err(BackendError::Rejected { message });
        }

        let body: AuthResponse = response.json().await?;
        if !body.success {
            return Err(BackendError::Rejected {
                message: body.error.unwrap_or_else(|| LOGIN_FALLBACK.to_string()),
            });
        }

        let user_id = body
            .user_id
            .ok_or_else(|| BackendError::InvalidResponse("Login response missing userId".into()))?;

        Ok(Session {
            user_id,
            display_name: body.name.unwrap_or_default(),
        })
    }

    /// Create an account; the supplied name becomes the session display name
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<Session, BackendError> {
        let url = format!("{}/api/register", self.base_url.trim_end_matches('/'));

        tracing::debug!("Registering account at: {}", url);

        let response = self
            .client
            .post(&url)
            .json(&RegisterRequest {
                name: name.to_string(),
                email: email.to_string(),
                password: password.to_string(),
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = Self::denial_message(response, REGISTER_FALLBACK).await;
            tracing::info!("Registration rejected ({}): {}", status, message);
            return Err(BackendError::Rejected { message });
        }

        let body: AuthResponse = response.json().await?;
        if !body.success {
            return Err(BackendError::Rejected {
                message: body.error.unwrap_or_else(|| REGISTER_FALLBACK.to_string()),
            });
        }

        let user_id = body.user_id.ok_or_else(|| {
            BackendError::InvalidResponse("Register response missing userId".into())
        })?;

        Ok(Session {
            user_id,
            display_name: name.to_string(),
        })
    }

    /// Store the profile for a user
    ///
    /// A 2xx status is the acknowledgement; the response body carries no
    /// contract and is not read.
    pub async fn update_profile(
        &self,
        user_id: &str,
        profile: &ProfileInput,
    ) -> Result<(), BackendError> {
        let url = format!(
            "{}/api/profile/{}",
            self.base_url.trim_end_matches('/'),
            urlencoding::encode(user_id)
        );

        tracing::debug!("Updating profile at: {}", url);

        let response = self.client.put(&url).json(profile).send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Profile update rejected for {}: {}", user_id, status);
            return Err(BackendError::Rejected {
                message: PROFILE_FALLBACK.to_string(),
            });
        }

        Ok(())
    }

    /// Retrieve the matched scholarships for a user
    ///
    /// The returned list replaces whatever the caller held before; nothing
    /// is merged or cached on this side.
    pub async fn fetch_matches(
        &self,
        user_id: &str,
    ) -> Result<Vec<ScholarshipMatch>, BackendError> {
        let url = format!(
            "{}/api/matches/{}",
            self.base_url.trim_end_matches('/'),
            urlencoding::encode(user_id)
        );

        tracing::debug!("Fetching matches from: {}", url);

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let message = Self::denial_message(response, MATCHES_FALLBACK).await;
            tracing::warn!("Match retrieval failed for {} ({}): {}", user_id, status, message);
            return Err(BackendError::Rejected { message });
        }

        let matches: Vec<ScholarshipMatch> = response.json().await?;

        tracing::debug!("Retrieved {} matches for user {}", matches.len(), user_id);

        Ok(matches)
    }

    /// Record a positive or negative signal for one scholarship
    pub async fn submit_feedback(
        &self,
        user_id: &str,
        scholarship_id: i64,
        rating: FeedbackRating,
    ) -> Result<(), BackendError> {
        let url = format!("{}/api/feedback", self.base_url.trim_end_matches('/'));

        let request = FeedbackRequest {
            user_id: user_id.to_string(),
            scholarship_id,
            rating: rating.as_signal(),
        };

        let response = self.client.post(&url).json(&request).send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Feedback rejected for scholarship {}: {}", scholarship_id, status);
            return Err(BackendError::Rejected {
                message: FEEDBACK_FALLBACK.to_string(),
            });
        }

        tracing::debug!("Recorded feedback: {} -> {:?}", scholarship_id, rating);

        Ok(())
    }

    /// Best-effort extraction of the server's error text from a denial body
    async fn denial_message(response: reqwest::Response, fallback: &str) -> String {
        response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.error)
            .unwrap_or_else(|| fallback.to_string())
    }
}
