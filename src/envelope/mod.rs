//! Request envelope data model.
//!
//! serde model of the JSON the voice platform posts per invocation: the
//! request block (launch, intent, or session-ended), the intent's filled
//! slots with their entity-resolution results, and the nested session and
//! context blocks. Wire field names are camelCase; enum tags carry the
//! platform's literal spellings.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Top-level request envelope.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestEnvelope {
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub session: Option<Session>,
    #[serde(default)]
    pub context: Option<Context>,
    pub request: Request,
}

impl RequestEnvelope {
    /// True when a consent token is present under
    /// `context.System.user.permissions.consentToken`.
    pub fn has_consent_token(&self) -> bool {
        self.context
            .as_ref()
            .and_then(|c| c.system.as_ref())
            .and_then(|s| s.user.as_ref())
            .and_then(|u| u.permissions.as_ref())
            .and_then(|p| p.consent_token.as_ref())
            .is_some()
    }
}

/// The request block, discriminated by its `type` tag.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum Request {
    /// Skill opened with no intent.
    #[serde(rename = "LaunchRequest")]
    Launch,
    /// A recognized intent with its filled slots.
    #[serde(rename = "IntentRequest", rename_all = "camelCase")]
    Intent {
        intent: Intent,
        #[serde(default)]
        dialog_state: Option<DialogState>,
    },
    /// Session closed by the user or the platform.
    #[serde(rename = "SessionEndedRequest")]
    SessionEnded,
    /// Request types this crate does not dispatch on.
    #[serde(other)]
    Unknown,
}

/// A recognized intent and its filled slots.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Intent {
    pub name: String,
    #[serde(default)]
    pub slots: HashMap<String, Slot>,
}

/// One filled slot, possibly with entity-resolution results attached.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slot {
    pub name: String,
    /// The raw utterance captured for this slot, when the user said one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolutions: Option<Resolutions>,
}

/// Entity-resolution results for one slot, one entry per authority.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resolutions {
    #[serde(default)]
    pub resolutions_per_authority: Vec<ResolutionAuthority>,
}

/// One authority's verdict: a status code plus the canonical candidates.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolutionAuthority {
    #[serde(default)]
    pub authority: String,
    pub status: ResolutionStatus,
    #[serde(default)]
    pub values: Vec<ResolvedValueWrapper>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolutionStatus {
    pub code: StatusCode,
}

/// Wire nesting: each candidate sits under a `value` key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolvedValueWrapper {
    pub value: ResolvedEntity,
}

/// A canonical catalog entry matched by entity resolution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolvedEntity {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// Entity-resolution outcome reported per authority.
///
/// Codes outside the documented set deserialize as [`StatusCode::Other`]
/// and are treated as unrecognized downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusCode {
    #[serde(rename = "ER_SUCCESS_MATCH")]
    ExactMatch,
    #[serde(rename = "ER_SUCCESS_NO_MATCH")]
    NoMatch,
    #[serde(rename = "ER_ERROR_TIMEOUT")]
    Timeout,
    #[serde(rename = "ER_ERROR_EXCEPTION")]
    Exception,
    #[serde(other)]
    Other,
}

/// Platform-tracked progress of a multi-turn slot-filling conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DialogState {
    Started,
    InProgress,
    Completed,
}

/// Session block: host-owned attributes scoped to this conversation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    #[serde(default)]
    pub new: bool,
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default)]
    pub attributes: Map<String, Value>,
}

/// Context block. Only the consent-token path is read.
#[derive(Debug, Clone, Deserialize)]
pub struct Context {
    #[serde(rename = "System")]
    pub system: Option<System>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct System {
    #[serde(default)]
    pub user: Option<SystemUser>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SystemUser {
    #[serde(default)]
    pub permissions: Option<Permissions>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Permissions {
    #[serde(default)]
    pub consent_token: Option<String>,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_launch_request() {
        let envelope: RequestEnvelope = serde_json::from_value(json!({
            "version": "1.0",
            "session": {
                "new": true,
                "sessionId": "amzn1.echo-api.session.abc",
                "attributes": {}
            },
            "request": {
                "type": "LaunchRequest",
                "requestId": "amzn1.echo-api.request.abc",
                "timestamp": "2019-03-01T18:09:45Z"
            }
        }))
        .unwrap();

        assert!(matches!(envelope.request, Request::Launch));
        assert!(!envelope.has_consent_token());
        let session = envelope.session.unwrap();
        assert!(session.new);
        assert!(session.attributes.is_empty());
    }

    #[test]
    fn test_deserialize_intent_request_with_resolutions() {
        let envelope: RequestEnvelope = serde_json::from_value(json!({
            "version": "1.0",
            "request": {
                "type": "IntentRequest",
                "dialogState": "IN_PROGRESS",
                "intent": {
                    "name": "RecommendationIntent",
                    "slots": {
                        "cuisine": {
                            "name": "cuisine",
                            "value": "italian",
                            "resolutions": {
                                "resolutionsPerAuthority": [{
                                    "authority": "amzn1.er-authority.echo-sdk.cuisine",
                                    "status": { "code": "ER_SUCCESS_MATCH" },
                                    "values": [
                                        { "value": { "name": "Italian", "id": "IT" } },
                                        { "value": { "name": "Sicilian" } }
                                    ]
                                }]
                            }
                        }
                    }
                }
            }
        }))
        .unwrap();

        let Request::Intent {
            intent,
            dialog_state,
        } = envelope.request
        else {
            panic!("expected an intent request");
        };
        assert_eq!(intent.name, "RecommendationIntent");
        assert_eq!(dialog_state, Some(DialogState::InProgress));

        let slot = &intent.slots["cuisine"];
        assert_eq!(slot.value.as_deref(), Some("italian"));
        let authority = &slot.resolutions.as_ref().unwrap().resolutions_per_authority[0];
        assert_eq!(authority.status.code, StatusCode::ExactMatch);
        assert_eq!(authority.values[0].value.name, "Italian");
        assert_eq!(authority.values[1].value.name, "Sicilian");
        assert_eq!(authority.values[1].value.id, None);
    }

    #[test]
    fn test_deserialize_unknown_request_type() {
        let envelope: RequestEnvelope = serde_json::from_value(json!({
            "request": { "type": "Connections.Response" }
        }))
        .unwrap();
        assert!(matches!(envelope.request, Request::Unknown));
    }

    #[test]
    fn test_deserialize_unknown_status_code() {
        let status: ResolutionStatus =
            serde_json::from_value(json!({ "code": "ER_SOMETHING_NEW" })).unwrap();
        assert_eq!(status.code, StatusCode::Other);
    }

    #[test]
    fn test_dialog_state_wire_names() {
        let state: DialogState = serde_json::from_value(json!("COMPLETED")).unwrap();
        assert_eq!(state, DialogState::Completed);
        let state: DialogState = serde_json::from_value(json!("STARTED")).unwrap();
        assert_eq!(state, DialogState::Started);
    }

    #[test]
    fn test_consent_token_lookup() {
        let envelope: RequestEnvelope = serde_json::from_value(json!({
            "context": {
                "System": {
                    "user": {
                        "userId": "amzn1.ask.account.abc",
                        "permissions": { "consentToken": "token-123" }
                    }
                }
            },
            "request": { "type": "LaunchRequest" }
        }))
        .unwrap();
        assert!(envelope.has_consent_token());

        let envelope: RequestEnvelope = serde_json::from_value(json!({
            "context": { "System": { "user": { "userId": "amzn1.ask.account.abc" } } },
            "request": { "type": "LaunchRequest" }
        }))
        .unwrap();
        assert!(!envelope.has_consent_token());
    }

    #[test]
    fn test_intent_without_slots_defaults_empty() {
        let intent: Intent =
            serde_json::from_value(json!({ "name": "AMAZON.CancelIntent" })).unwrap();
        assert!(intent.slots.is_empty());
    }
}
