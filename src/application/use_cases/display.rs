// ============================================================
// DISPLAY PROJECTOR
// ============================================================
// Redacted, human-presentable view of a profile record

use crate::domain::fields::DISPLAY_FIELDS;
use crate::domain::profile::Profile;

/// One presentable field of the active profile
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayField {
    pub name: String,
    pub value: String,
}

/// Mask a field value for display.
///
/// Card-number-like fields (name contains "num") longer than 4 chars
/// keep only their last 4; anything cvv-like is fully blanked. The cvv
/// rule runs last so it wins over the num rule.
pub fn mask_value(name: &str, value: &str) -> String {
    let mut masked = value.to_string();

    if name.contains("num") && value.chars().count() > 4 {
        let tail: String = value
            .chars()
            .skip(value.chars().count() - 4)
            .collect();
        masked = format!("****{}", tail);
    }
    if name.contains("cvv") {
        masked = "***".to_string();
    }

    masked
}

/// Project a profile onto the display allow-list, in allow-list order.
/// Absent or empty fields are omitted.
pub fn project(profile: &Profile) -> Vec<DisplayField> {
    DISPLAY_FIELDS
        .iter()
        .filter_map(|field| {
            let name = field.as_str();
            match profile.get(name) {
                Some(value) if !value.is_empty() => Some(DisplayField {
                    name: name.to_string(),
                    value: mask_value(name, value),
                }),
                _ => None,
            }
        })
        .collect()
}
