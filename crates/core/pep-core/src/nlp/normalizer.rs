//! Text normalization shared by every scorer

use once_cell::sync::Lazy;
use regex::Regex;

static NON_ALPHA: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-zA-Z\s]").expect("static pattern compiles"));

/// Lowercase `text`, drop everything that is not an ASCII letter or whitespace,
/// and collapse runs of whitespace into single spaces.
///
/// Dropped characters are deleted, not replaced, so `"don't"` becomes `"dont"`
/// and `"well-being"` becomes `"wellbeing"`.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let stripped = NON_ALPHA.replace_all(&lowered, "");
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}
