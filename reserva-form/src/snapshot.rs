use std::collections::BTreeMap;

use serde::Serialize;

use crate::state::FormPhase;

/// Read-only derived view handed to the rendering layer after each edit.
///
/// `field_errors` and `invalid_fields` only list fields that are both touched
/// and invalid, keyed by their stable field keys.
#[derive(Debug, Clone, Serialize)]
pub struct FormSnapshot {
    pub phase: FormPhase,
    pub filtered_destinations: Vec<String>,
    pub total_price: i32,
    pub field_errors: BTreeMap<String, String>,
    pub invalid_fields: Vec<String>,
}
