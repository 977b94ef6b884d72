use crate::core::intent::{FlowOutcome, UserIntent};
use crate::core::validate;
use crate::models::{FeedbackRating, ProfileInput, ScholarshipMatch, Session};
use crate::services::{BackendClient, BackendError};
use thiserror::Error;

/// Where the user is in the journey
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowState {
    Unauthenticated,
    ProfileIncomplete,
    MatchesDisplayed,
}

/// Message class of a failure, used by front-ends to phrase retry hints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    /// Input problem caught locally; fix the named field and resubmit
    Validation,
    /// The server understood the request and refused it
    Rejection,
    /// The backend could not be reached; retry without changing input
    Transport,
}

/// Errors surfaced by the session flow controller
///
/// `Display` is the exact user-facing text. Structured details for the log
/// live in the variant fields and never reach the user.
#[derive(Debug, Error)]
pub enum FlowError {
    #[error("{message}")]
    Validation { field: &'static str, message: String },

    #[error("{message}")]
    Rejected { message: String },

    #[error("Network error. Please check your connection.")]
    Transport { detail: String },

    #[error("Please log in first.")]
    SessionRequired,

    #[error("Already signed in. Log out to switch accounts.")]
    AlreadyAuthenticated,
}

impl FlowError {
    /// Which message class this failure belongs to
    pub fn kind(&self) -> MessageKind {
        match self {
            FlowError::Validation { .. }
            | FlowError::SessionRequired
            | FlowError::AlreadyAuthenticated => MessageKind::Validation,
            FlowError::Rejected { .. } => MessageKind::Rejection,
            FlowError::Transport { .. } => MessageKind::Transport,
        }
    }
}

impl From<BackendError> for FlowError {
    fn from(err: BackendError) -> Self {
        match err {
            BackendError::Rejected { message } => FlowError::Rejected { message },
            BackendError::Transport(source) => FlowError::Transport {
                detail: source.to_string(),
            },
            BackendError::InvalidResponse(detail) => FlowError::Transport { detail },
        }
    }
}

/// Session flow controller - the single owner of the authenticated session
///
/// # State machine
/// 1. `Unauthenticated` -> `ProfileIncomplete` via login or register
/// 2. `ProfileIncomplete` -> `MatchesDisplayed` via profile submission
/// 3. any state -> `Unauthenticated` via logout
///
/// Every operation takes `&mut self`, so the borrow checker guarantees no
/// two state-mutating operations interleave. Failed operations leave the
/// state exactly as it was.
pub struct SessionFlow {
    backend: BackendClient,
    state: FlowState,
    session: Option<Session>,
    matches: Vec<ScholarshipMatch>,
}

impl SessionFlow {
    pub fn new(backend: BackendClient) -> Self {
        Self {
            backend,
            state: FlowState::Unauthenticated,
            session: None,
            matches: Vec::new(),
        }
    }

    /// Current stage of the journey
    pub fn state(&self) -> FlowState {
        self.state
    }

    /// The authenticated identity, if any
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Matches from the most recent successful retrieval
    ///
    /// Replaced wholesale on every fetch, cleared on logout, never merged.
    pub fn matches(&self) -> &[ScholarshipMatch] {
        &self.matches
    }

    /// Route one intent to its handler
    pub async fn dispatch(&mut self, intent: UserIntent) -> Result<FlowOutcome, FlowError> {
        tracing::debug!("Dispatching intent: {}", intent.name());

        match intent {
            UserIntent::Login { email, password } => self.login(&email, &password).await,
            UserIntent::Register { name, email, password } => {
                self.register(&name, &email, &password).await
            }
            UserIntent::SubmitProfile(profile) => self.submit_profile(profile).await,
            UserIntent::SubmitFeedback { scholarship_id, rating } => {
                self.submit_feedback(scholarship_id, rating).await
            }
            UserIntent::Logout => Ok(self.logout()),
        }
    }

    /// Check credentials and open a session
    ///
    /// Local validation runs first; an empty field never reaches the
    /// network.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<FlowOutcome, FlowError> {
        self.require_unauthenticated()?;
        validate::login_input(email, password)?;

        tracing::info!("Logging in");
        let session = self.backend.login(email, password).await?;

        tracing::info!("Session opened for user {}", session.user_id);
        let display_name = session.display_name.clone();
        self.session = Some(session);
        self.state = FlowState::ProfileIncomplete;

        Ok(FlowOutcome::LoggedIn { display_name })
    }

    /// Create an account and open a session
    pub async fn register(
        &mut self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<FlowOutcome, FlowError> {
        self.require_unauthenticated()?;
        validate::register_input(name, email, password)?;

        tracing::info!("Registering new account");
        let session = self.backend.register(name, email, password).await?;

        tracing::info!("Account created with user id {}", session.user_id);
        let display_name = session.display_name.clone();
        self.session = Some(session);
        self.state = FlowState::ProfileIncomplete;

        Ok(FlowOutcome::Registered { display_name })
    }

    /// Store the profile, then fetch the match list
    ///
    /// The two backend calls form an ordered pipeline with short-circuit:
    /// match retrieval never runs unless the update was acknowledged. A
    /// retrieval failure after a successful update is not rolled back; the
    /// update is idempotent and the user can resubmit.
    pub async fn submit_profile(
        &mut self,
        profile: ProfileInput,
    ) -> Result<FlowOutcome, FlowError> {
        let user_id = self.require_session()?.user_id.clone();
        validate::profile_input(&profile)?;

        tracing::info!("Analyzing profile for user {}", user_id);
        self.backend.update_profile(&user_id, &profile).await?;

        tracing::info!("Profile stored, calculating scholarship matches");
        let matches = self.backend.fetch_matches(&user_id).await?;

        tracing::info!("Retrieved {} matches for user {}", matches.len(), user_id);
        self.matches = matches.clone();
        self.state = FlowState::MatchesDisplayed;

        Ok(FlowOutcome::MatchesReady(matches))
    }

    /// Record feedback for one scholarship; no state transition
    pub async fn submit_feedback(
        &mut self,
        scholarship_id: i64,
        rating: FeedbackRating,
    ) -> Result<FlowOutcome, FlowError> {
        let user_id = self.require_session()?.user_id.clone();

        tracing::info!(
            "Submitting {:?} feedback for scholarship {}",
            rating,
            scholarship_id
        );
        self.backend
            .submit_feedback(&user_id, scholarship_id, rating)
            .await?;

        Ok(FlowOutcome::FeedbackRecorded { scholarship_id })
    }

    /// Clear the session and return to the start; safe to call repeatedly
    pub fn logout(&mut self) -> FlowOutcome {
        if self.session.take().is_some() {
            tracing::info!("Session cleared");
        }
        self.matches.clear();
        self.state = FlowState::Unauthenticated;

        FlowOutcome::LoggedOut
    }

    fn require_session(&self) -> Result<&Session, FlowError> {
        self.session.as_ref().ok_or(FlowError::SessionRequired)
    }

    fn require_unauthenticated(&self) -> Result<(), FlowError> {
        if self.session.is_some() {
            return Err(FlowError::AlreadyAuthenticated);
        }
        Ok(())
    }
}
