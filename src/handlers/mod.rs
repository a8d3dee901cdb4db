//! Request handlers for The Foodie skill.
//!
//! One handler per request shape, registered in a fixed order; the router
//! gives each request to the first handler whose predicate matches.

mod cancel_stop;
mod launch;
mod recommendation;

pub use cancel_stop::CancelAndStopIntentHandler;
pub use launch::{LaunchRequestHandler, LaunchRequestWithConsentTokenHandler};
pub use recommendation::RecommendationIntentHandler;

use crate::router::SkillRouter;

/// Build the router with the skill's handlers in their shipped order.
///
/// The plain launch handler precedes the consent-token variant, so the
/// variant never fires; the order is kept as the skill shipped it.
pub fn default_skill() -> SkillRouter {
    let mut router = SkillRouter::new();
    router.register(Box::new(LaunchRequestHandler));
    router.register(Box::new(LaunchRequestWithConsentTokenHandler));
    router.register(Box::new(RecommendationIntentHandler));
    router.register(Box::new(CancelAndStopIntentHandler));
    router
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
