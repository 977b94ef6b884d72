// Core flow exports
pub mod flow;
pub mod intent;
pub mod validate;

pub use flow::{SessionFlow, FlowState, FlowError, MessageKind};
pub use intent::{UserIntent, FlowOutcome};
pub use validate::{login_input, register_input, profile_input, looks_like_email};
