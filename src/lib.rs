//! # The Foodie — voice-skill request handler
//!
//! Request dispatch for "The Foodie", a food-recommendation voice skill.
//! The host platform hands over a JSON request envelope (launch, intent, or
//! session-ended); the router gives it to the first matching handler, which
//! normalizes the intent's slots, decides whether any required slot is
//! still ambiguous, and answers with spoken text plus a dialog directive
//! (delegate, or elicit one named slot).
//!
//! The HTTP/Lambda invocation wrapper is the host's concern; this crate
//! starts at the parsed envelope and ends at the response payload:
//!
//! ```
//! use foodie_skill::{default_skill, RequestEnvelope};
//!
//! let envelope: RequestEnvelope = serde_json::from_value(serde_json::json!({
//!     "request": { "type": "LaunchRequest" }
//! })).unwrap();
//!
//! let skill = default_skill();
//! let out = skill.dispatch(&envelope).unwrap();
//! assert!(out.response.output_speech.is_some());
//! ```

pub mod envelope;
pub mod errors;
pub mod handlers;
pub mod response;
pub mod router;
pub mod session;
pub mod slots;
pub mod speech;

pub use envelope::RequestEnvelope;
pub use errors::SkillError;
pub use handlers::default_skill;
pub use response::{Response, ResponseEnvelope};
pub use router::{HandlerInput, RequestHandler, SkillRouter};
pub use slots::{disambiguate, slot_values, Disambiguation, ResolvedValue, SlotRecord};
