//! Launch request handlers.

use crate::errors::SkillError;
use crate::response::{Card, Response, ResponseBuilder};
use crate::router::{HandlerInput, RequestHandler};
use crate::speech::{follow_up_prompt, welcome_message, PERMISSIONS};

/// Greets the user and asks for the location permission.
pub struct LaunchRequestHandler;

impl RequestHandler for LaunchRequestHandler {
    fn can_handle(&self, input: &HandlerInput<'_>) -> bool {
        input.is_launch_request()
    }

    fn handle(&self, input: &HandlerInput<'_>) -> Result<Response, SkillError> {
        log::info!("In LaunchRequestHandler");
        let attrs = input.session_attributes();
        let speech = format!("{} {}", welcome_message(&attrs), follow_up_prompt(&attrs));

        Ok(ResponseBuilder::new()
            .speak(&speech)
            .ask(&speech)
            .set_card(Card::AskForPermissionsConsent {
                permissions: PERMISSIONS.iter().map(|p| p.to_string()).collect(),
            })
            .build())
    }

    fn name(&self) -> &'static str {
        "LaunchRequestHandler"
    }
}

/// Launch variant for users who already granted the location consent:
/// same speech, no permission card.
pub struct LaunchRequestWithConsentTokenHandler;

impl RequestHandler for LaunchRequestWithConsentTokenHandler {
    fn can_handle(&self, input: &HandlerInput<'_>) -> bool {
        input.is_launch_request() && input.has_consent_token()
    }

    fn handle(&self, input: &HandlerInput<'_>) -> Result<Response, SkillError> {
        log::info!("In LaunchRequestWithConsentTokenHandler");
        let attrs = input.session_attributes();
        let speech = format!("{} {}", welcome_message(&attrs), follow_up_prompt(&attrs));

        Ok(ResponseBuilder::new().speak(&speech).ask(&speech).build())
    }

    fn name(&self) -> &'static str {
        "LaunchRequestWithConsentTokenHandler"
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
