//! Rules text shown above the table.

use std::fs;
use std::path::Path;

use crate::variant::Variant;

/// Reads `<dir>/<rules_key>.txt` for `variant`.
///
/// A missing or unreadable file is logged and yields an empty string, so the
/// table still renders without it.
#[must_use]
pub fn load_rules(dir: impl AsRef<Path>, variant: Variant) -> String {
    let path = dir
        .as_ref()
        .join(variant.rules().rules_key)
        .with_extension("txt");

    match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) => {
            log::warn!("could not read rules from {}: {err}", path.display());
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_rules_file_is_empty() {
        let text = load_rules("this/path/does/not/exist", Variant::Blackjack);
        assert!(text.is_empty());
    }

    #[test]
    fn bundled_rules_are_found() {
        let dir = concat!(env!("CARGO_MANIFEST_DIR"), "/rules");
        for variant in Variant::ALL {
            assert!(!load_rules(dir, variant).is_empty(), "{variant}");
        }
    }
}
