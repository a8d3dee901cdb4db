//! Disambiguation — pick the next required slot to clarify.

use std::collections::HashMap;

use crate::errors::SkillError;

use super::{SlotRecord, REQUIRED_SLOTS};

/// A slot that still needs clarification, plus the prompt asking for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Disambiguation {
    /// Slot to elicit next.
    pub slot_name: String,
    /// Spoken prompt naming every candidate.
    pub prompt: String,
}

/// Find the first required slot whose resolution is still multi-valued.
///
/// Map iteration order is the tie-break: the first qualifying entry wins,
/// not the most important one. Returns `Ok(None)` when every slot is
/// unambiguous.
///
/// A multi-valued slot missing from [`REQUIRED_SLOTS`] is a lookup error;
/// the lookup only happens after the multi-valued check, so unlisted slots
/// with scalar or empty resolutions pass through untouched.
pub fn disambiguate(
    slots: &HashMap<String, SlotRecord>,
) -> Result<Option<Disambiguation>, SkillError> {
    for (name, record) in slots {
        let Some(values) = record.resolved.as_list() else {
            continue;
        };
        if values.len() <= 1 {
            continue;
        }
        let required = REQUIRED_SLOTS
            .get(name.as_str())
            .copied()
            .ok_or_else(|| SkillError::UnknownRequiredSlot { slot: name.clone() })?;
        if required {
            return Ok(Some(Disambiguation {
                slot_name: name.clone(),
                prompt: format!("Which one would you like {}?", values.join(" or ")),
            }));
        }
    }

    Ok(None)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
