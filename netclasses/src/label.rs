//! Net class label normalization.
//!
//! KiCad net class names in these projects follow a `prefix_identifier[ma]`
//! convention, e.g. `pwr_supply_ma`. The label keeps only the identifier.

use once_cell::sync::Lazy;
use regex::Regex;

/// Matches the longest `..._` prefix or a trailing `ma`, in a single pass.
///
/// `$` is end of text only, so a `ma` followed by a trailing newline is kept.
static LABEL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^.*_|ma$").unwrap_or_else(|e| panic!("invalid label pattern: {e}"))
});

/// Strip everything up to the last underscore and a trailing `ma` from a net class name.
pub fn normalize_label(name: &str) -> String {
    LABEL_PATTERN.replace_all(name, "").into_owned()
}
