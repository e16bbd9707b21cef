//! Validation for the `[avatars]` section.

use std::collections::HashSet;

use crate::schema::IntroConfig;

/// Presets are optional, but when given they must be usable as a catalog:
/// no blank entries and no repeats.
pub(crate) fn validate_avatars(errors: &mut Vec<String>, config: &IntroConfig) {
    let mut seen = HashSet::new();
    for (i, preset) in config.avatars.presets.iter().enumerate() {
        if preset.trim().is_empty() {
            errors.push(format!("avatars.presets[{i}] is blank"));
        } else if !seen.insert(preset.as_str()) {
            errors.push(format!("avatars.presets[{i}] duplicates '{preset}'"));
        }
    }
}
