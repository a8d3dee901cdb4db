//! Slot extraction — platform slot objects to normalized records.

use std::collections::HashMap;

use crate::envelope::{Slot, StatusCode};

use super::{ResolvedValue, SlotRecord};

/// Normalize the platform's filled slots into [`SlotRecord`]s.
///
/// Per slot: no resolution block keeps the raw value; an exact match keeps
/// every candidate's canonical name and marks the record validated; a
/// no-match keeps the raw value unvalidated. Only the first authority is
/// consulted. Any other resolution status drops the slot from the result.
pub fn slot_values(filled_slots: &HashMap<String, Slot>) -> HashMap<String, SlotRecord> {
    let mut records = HashMap::new();

    for (name, slot) in filled_slots {
        let record = match &slot.resolutions {
            Some(resolutions) => {
                let Some(authority) = resolutions.resolutions_per_authority.first() else {
                    log::debug!("slot '{}': resolution block without authorities, dropped", name);
                    continue;
                };
                match authority.status.code {
                    StatusCode::ExactMatch => SlotRecord {
                        synonym: slot.value.clone(),
                        resolved: ResolvedValue::List(
                            authority
                                .values
                                .iter()
                                .map(|v| v.value.name.clone())
                                .collect(),
                        ),
                        is_validated: true,
                    },
                    StatusCode::NoMatch => SlotRecord {
                        synonym: slot.value.clone(),
                        resolved: scalar_or_empty(slot.value.as_deref()),
                        is_validated: false,
                    },
                    _ => {
                        log::debug!(
                            "slot '{}': resolution status {:?} not handled, dropped",
                            name,
                            authority.status.code
                        );
                        continue;
                    }
                }
            }
            None => SlotRecord {
                synonym: slot.value.clone(),
                resolved: scalar_or_empty(slot.value.as_deref()),
                is_validated: false,
            },
        };
        records.insert(name.clone(), record);
    }

    records
}

fn scalar_or_empty(value: Option<&str>) -> ResolvedValue {
    match value {
        Some(value) => ResolvedValue::Scalar(value.to_string()),
        None => ResolvedValue::Empty,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
