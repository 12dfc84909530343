//! Query sanitization for the remote search backend.

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

/// The remote search backend cannot parse braces or brackets; each one is
/// replaced by a single space.
static UNSEARCHABLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[{}\[\]]").expect("bracket character class is a valid pattern"));

/// Sanitize a debounced query string for transmission.
///
/// Runs once per issued request, never on the raw keystroke buffer. Returns
/// `Cow::Borrowed` when the query needs no changes.
pub fn sanitize(query: &str) -> Cow<'_, str> {
    UNSEARCHABLE.replace_all(query, " ")
}
