//! Request router — ordered predicate dispatch over registered handlers.
//!
//! The host SDK's polymorphic handler dispatch becomes an explicit ordered
//! list of handler objects built at startup: the first handler whose
//! `can_handle` predicate returns true gets the request. Registration order
//! is the tie-break, so overlapping predicates resolve deterministically.

use serde_json::Map;

use crate::envelope::{DialogState, Intent, Request, RequestEnvelope};
use crate::errors::SkillError;
use crate::response::{Response, ResponseEnvelope};
use crate::session::SessionAttributes;

/// One incoming request plus the accessors handlers dispatch on.
pub struct HandlerInput<'a> {
    envelope: &'a RequestEnvelope,
}

impl<'a> HandlerInput<'a> {
    pub fn new(envelope: &'a RequestEnvelope) -> Self {
        Self { envelope }
    }

    pub fn envelope(&self) -> &'a RequestEnvelope {
        self.envelope
    }

    /// True for a launch request.
    pub fn is_launch_request(&self) -> bool {
        matches!(self.envelope.request, Request::Launch)
    }

    /// True when the request is an intent request with the given name.
    pub fn is_intent_name(&self, name: &str) -> bool {
        self.intent().map_or(false, |intent| intent.name == name)
    }

    /// The current intent, when this is an intent request.
    pub fn intent(&self) -> Option<&'a Intent> {
        match &self.envelope.request {
            Request::Intent { intent, .. } => Some(intent),
            _ => None,
        }
    }

    /// Dialog state reported by the platform, when present.
    pub fn dialog_state(&self) -> Option<DialogState> {
        match &self.envelope.request {
            Request::Intent { dialog_state, .. } => *dialog_state,
            _ => None,
        }
    }

    /// True when the user already granted the requested permissions.
    pub fn has_consent_token(&self) -> bool {
        self.envelope.has_consent_token()
    }

    /// View over the session attributes (empty when the session block is
    /// absent).
    pub fn session_attributes(&self) -> SessionAttributes<'a> {
        SessionAttributes::new(self.envelope.session.as_ref().map(|s| &s.attributes))
    }
}

/// A registered request handler.
pub trait RequestHandler: Send + Sync {
    /// Whether this handler claims the request.
    fn can_handle(&self, input: &HandlerInput<'_>) -> bool;

    /// Produce the response payload.
    fn handle(&self, input: &HandlerInput<'_>) -> Result<Response, SkillError>;

    /// Name used in logs.
    fn name(&self) -> &'static str;
}

/// Ordered handler list; the first matching handler wins.
#[derive(Default)]
pub struct SkillRouter {
    handlers: Vec<Box<dyn RequestHandler>>,
}

impl SkillRouter {
    /// Create a new empty router.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a handler. Dispatch checks handlers in registration order.
    pub fn register(&mut self, handler: Box<dyn RequestHandler>) {
        self.handlers.push(handler);
    }

    /// Dispatch the envelope to the first handler that claims it, and wrap
    /// the payload in the wire envelope with the session attributes echoed
    /// unchanged.
    ///
    /// Returns [`SkillError::UnhandledRequest`] when no handler matches;
    /// the host's fallback path owns that case.
    pub fn dispatch(&self, envelope: &RequestEnvelope) -> Result<ResponseEnvelope, SkillError> {
        let input = HandlerInput::new(envelope);

        for handler in &self.handlers {
            if handler.can_handle(&input) {
                log::debug!("Router: dispatching request to '{}'", handler.name());
                let response = handler.handle(&input)?;
                let session_attributes = envelope
                    .session
                    .as_ref()
                    .map(|s| s.attributes.clone())
                    .unwrap_or_else(Map::new);
                return Ok(ResponseEnvelope::new(session_attributes, response));
            }
        }

        log::warn!("Router: no handler matched the request");
        Err(SkillError::UnhandledRequest)
    }

    /// Number of registered handlers.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Check if the router has no handlers.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl std::fmt::Debug for SkillRouter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SkillRouter")
            .field(
                "handlers",
                &self.handlers.iter().map(|h| h.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
