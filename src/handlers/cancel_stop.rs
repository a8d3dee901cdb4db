//! Cancel and stop intents.

use crate::errors::SkillError;
use crate::response::{Card, Response, ResponseBuilder};
use crate::router::{HandlerInput, RequestHandler};

/// Says goodbye on either of the built-in cancel/stop intents.
pub struct CancelAndStopIntentHandler;

impl RequestHandler for CancelAndStopIntentHandler {
    fn can_handle(&self, input: &HandlerInput<'_>) -> bool {
        input.is_intent_name("AMAZON.CancelIntent") || input.is_intent_name("AMAZON.StopIntent")
    }

    fn handle(&self, _input: &HandlerInput<'_>) -> Result<Response, SkillError> {
        log::info!("In CancelAndStopIntentHandler");
        let speech = "Goodbye!";

        Ok(ResponseBuilder::new()
            .speak(speech)
            .set_card(Card::Simple {
                title: "The Foodie".to_string(),
                content: speech.to_string(),
            })
            .build())
    }

    fn name(&self) -> &'static str {
        "CancelAndStopIntentHandler"
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
