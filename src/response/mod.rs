//! Response payload data model and builder.
//!
//! The wire shape the voice platform expects back: spoken output (SSML),
//! an optional card, an optional re-prompt, and dialog directives. The
//! [`ResponseBuilder`] mirrors the host SDK's `response_builder` surface
//! so handlers read the way skill code usually does.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::envelope::Intent;

/// Top-level response envelope returned to the host.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    pub version: String,
    #[serde(default)]
    pub session_attributes: Map<String, Value>,
    pub response: Response,
}

impl ResponseEnvelope {
    /// Wrap a response payload, echoing the session attributes unchanged.
    pub fn new(session_attributes: Map<String, Value>, response: Response) -> Self {
        Self {
            version: "1.0".to_string(),
            session_attributes,
            response,
        }
    }
}

/// The response payload proper.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_speech: Option<OutputSpeech>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card: Option<Card>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reprompt: Option<Reprompt>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub directives: Vec<Directive>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub should_end_session: Option<bool>,
}

/// Spoken output. Speak/ask text is wrapped in a `<speak>` envelope once.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum OutputSpeech {
    #[serde(rename = "SSML")]
    Ssml { ssml: String },
}

impl OutputSpeech {
    /// Wrap spoken text in the SSML envelope.
    pub fn ssml(text: &str) -> Self {
        OutputSpeech::Ssml {
            ssml: format!("<speak>{}</speak>", text),
        }
    }
}

/// Speech replayed when the user stays silent past the timeout.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reprompt {
    pub output_speech: OutputSpeech,
}

/// Visual card shown in the companion app.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Card {
    #[serde(rename = "Simple")]
    Simple { title: String, content: String },
    /// Asks the user to grant the named permission scopes.
    #[serde(rename = "AskForPermissionsConsent")]
    AskForPermissionsConsent { permissions: Vec<String> },
}

/// Instruction telling the platform what to do with the dialog next.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Directive {
    /// Hand slot-filling back to the platform's dialog model.
    #[serde(rename = "Dialog.Delegate", rename_all = "camelCase")]
    Delegate {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        updated_intent: Option<Intent>,
    },
    /// Ask the user to fill one named slot.
    #[serde(rename = "Dialog.ElicitSlot", rename_all = "camelCase")]
    ElicitSlot {
        slot_to_elicit: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        updated_intent: Option<Intent>,
    },
}

/// Builder over [`Response`], mirroring the host SDK surface.
#[derive(Debug, Default)]
pub struct ResponseBuilder {
    response: Response,
}

impl ResponseBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the spoken output.
    pub fn speak(mut self, text: &str) -> Self {
        self.response.output_speech = Some(OutputSpeech::ssml(text));
        self
    }

    /// Set the re-prompt and keep the session open for the answer.
    pub fn ask(mut self, text: &str) -> Self {
        self.response.reprompt = Some(Reprompt {
            output_speech: OutputSpeech::ssml(text),
        });
        self.response.should_end_session = Some(false);
        self
    }

    pub fn set_card(mut self, card: Card) -> Self {
        self.response.card = Some(card);
        self
    }

    pub fn add_directive(mut self, directive: Directive) -> Self {
        self.response.directives.push(directive);
        self
    }

    pub fn set_should_end_session(mut self, end: bool) -> Self {
        self.response.should_end_session = Some(end);
        self
    }

    pub fn build(self) -> Response {
        self.response
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_speak_wraps_ssml_once() {
        let response = ResponseBuilder::new().speak("Hello there.").build();
        let OutputSpeech::Ssml { ssml } = response.output_speech.unwrap();
        assert_eq!(ssml, "<speak>Hello there.</speak>");
    }

    #[test]
    fn test_ask_sets_reprompt_and_keeps_session_open() {
        let response = ResponseBuilder::new().ask("Which one?").build();
        assert_eq!(response.should_end_session, Some(false));
        let OutputSpeech::Ssml { ssml } = response.reprompt.unwrap().output_speech;
        assert_eq!(ssml, "<speak>Which one?</speak>");
    }

    #[test]
    fn test_card_wire_tags() {
        let simple = serde_json::to_value(Card::Simple {
            title: "The Foodie".to_string(),
            content: "Goodbye!".to_string(),
        })
        .unwrap();
        assert_eq!(simple["type"], "Simple");
        assert_eq!(simple["title"], "The Foodie");

        let consent = serde_json::to_value(Card::AskForPermissionsConsent {
            permissions: vec!["read::alexa:device:all:address".to_string()],
        })
        .unwrap();
        assert_eq!(consent["type"], "AskForPermissionsConsent");
        assert_eq!(consent["permissions"][0], "read::alexa:device:all:address");
    }

    #[test]
    fn test_directive_wire_tags() {
        let delegate = serde_json::to_value(Directive::Delegate {
            updated_intent: None,
        })
        .unwrap();
        assert_eq!(delegate, json!({ "type": "Dialog.Delegate" }));

        let elicit = serde_json::to_value(Directive::ElicitSlot {
            slot_to_elicit: "cuisine".to_string(),
            updated_intent: None,
        })
        .unwrap();
        assert_eq!(
            elicit,
            json!({ "type": "Dialog.ElicitSlot", "slotToElicit": "cuisine" })
        );
    }

    #[test]
    fn test_envelope_serialization() {
        let mut attributes = Map::new();
        attributes.insert("timeOfDay".to_string(), json!("dinner"));

        let envelope = ResponseEnvelope::new(
            attributes,
            ResponseBuilder::new().speak("Goodbye!").build(),
        );
        let value = serde_json::to_value(&envelope).unwrap();

        assert_eq!(value["version"], "1.0");
        assert_eq!(value["sessionAttributes"]["timeOfDay"], "dinner");
        assert_eq!(value["response"]["outputSpeech"]["type"], "SSML");
        // Unset fields stay off the wire.
        assert!(value["response"].get("card").is_none());
        assert!(value["response"].get("directives").is_none());
    }
}
