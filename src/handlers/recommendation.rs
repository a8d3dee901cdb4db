//! Recommendation intent — the slot-filling loop.

use crate::envelope::DialogState;
use crate::errors::SkillError;
use crate::response::{Directive, Response, ResponseBuilder};
use crate::router::{HandlerInput, RequestHandler};
use crate::slots::{disambiguate, slot_values};

/// Drives the recommendation dialog: as long as a required slot resolves to
/// several candidates, asks the user to pick one; once everything is
/// unambiguous, hands slot-filling back to the platform.
pub struct RecommendationIntentHandler;

impl RequestHandler for RecommendationIntentHandler {
    fn can_handle(&self, input: &HandlerInput<'_>) -> bool {
        input.is_intent_name("RecommendationIntent")
            && input.dialog_state() != Some(DialogState::Completed)
    }

    fn handle(&self, input: &HandlerInput<'_>) -> Result<Response, SkillError> {
        log::info!("In RecommendationIntentHandler");
        // can_handle only matches intent requests.
        let Some(intent) = input.intent() else {
            return Err(SkillError::UnhandledRequest);
        };

        let records = slot_values(&intent.slots);

        match disambiguate(&records)? {
            Some(result) => Ok(ResponseBuilder::new()
                .speak(&result.prompt)
                .ask(&result.prompt)
                .add_directive(Directive::ElicitSlot {
                    slot_to_elicit: result.slot_name,
                    updated_intent: None,
                })
                .build()),
            None => Ok(ResponseBuilder::new()
                .add_directive(Directive::Delegate {
                    updated_intent: Some(intent.clone()),
                })
                .build()),
        }
    }

    fn name(&self) -> &'static str {
        "RecommendationIntentHandler"
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
