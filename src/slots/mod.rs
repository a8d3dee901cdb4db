//! Slot normalization and disambiguation.
//!
//! [`extract`] maps the platform's entity-resolution output into
//! [`SlotRecord`]s; [`disambiguate`] picks the first required slot whose
//! resolution is still multi-valued and needs the user to choose.

pub mod disambiguate;
pub mod extract;

pub use disambiguate::{disambiguate, Disambiguation};
pub use extract::slot_values;

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Resolution outcome carried by a [`SlotRecord`].
///
/// Invariant: `List` appears only when entity resolution reported an exact
/// match. A `Scalar` or `Empty` value means the slot needs no clarification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedValue {
    /// No spoken value and nothing resolved.
    Empty,
    /// The raw utterance, carried through unresolved.
    Scalar(String),
    /// Canonical catalog values, in authority order.
    List(Vec<String>),
}

impl ResolvedValue {
    /// The candidate list, when resolution was multi-valued.
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            ResolvedValue::List(values) => Some(values),
            _ => None,
        }
    }
}

/// Normalized view of one filled slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotRecord {
    /// What the user actually said for this slot.
    pub synonym: Option<String>,
    /// Resolution outcome.
    pub resolved: ResolvedValue,
    /// True only when entity resolution reported an exact match.
    pub is_validated: bool,
}

/// Slots the recommendation dialog must fill, keyed by slot name.
///
/// Built once at first use, immutable, shared read-only across requests.
pub static REQUIRED_SLOTS: Lazy<HashMap<&'static str, bool>> = Lazy::new(|| {
    HashMap::from([
        ("allergies", true),
        ("meal", true),
        ("cuisine", true),
        ("diet", true),
        ("deliveryOption", true),
        ("timeOfDay", true),
    ])
});
