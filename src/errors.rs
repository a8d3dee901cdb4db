//! Error types for skill dispatch.

use thiserror::Error;

/// Errors surfaced while dispatching a request.
#[derive(Debug, Error)]
pub enum SkillError {
    /// No registered handler claimed the request. The host platform's
    /// fallback path owns this case.
    #[error("no handler registered for the incoming request")]
    UnhandledRequest,

    /// A multi-valued slot whose name is missing from the required-slot
    /// table. The table is assumed to cover every slot the interaction
    /// model defines.
    #[error("slot '{slot}' not present in the required-slot table")]
    UnknownRequiredSlot { slot: String },
}
