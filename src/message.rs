//! Status message selection for the results banner.

use crate::config::Messages;
use crate::template;

/// The four mutually exclusive outcomes of a search cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    /// The search box is empty.
    EnterSearch,
    /// The query is shorter than the configured minimum.
    TooShort,
    /// The query ran but nothing qualified for display.
    NoResults,
    /// One or more articles are displayed.
    ResultsFound,
}

impl MessageKind {
    /// Style tag appended to the banner's base class for presentation purposes.
    pub fn style_tag(self) -> &'static str {
        match self {
            Self::EnterSearch => "message-enter_search",
            Self::TooShort => "message-minlength",
            Self::NoResults => "message-no_results",
            Self::ResultsFound => "message-results",
        }
    }
}

/// A selected status message, ready for banner substitution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: MessageKind,
    pub text: String,
    pub css_class: String,
}

/// Select the status message for a completed cycle.
///
/// Evaluated in priority order: empty query, too-short query, zero results,
/// results found. The found variant is singular for exactly one displayed
/// article and plural otherwise.
pub fn select(
    query_len: usize,
    min_query_length: usize,
    result_count: usize,
    messages: &Messages,
) -> StatusMessage {
    let (kind, text) = if query_len == 0 {
        (MessageKind::EnterSearch, messages.enter_search.clone())
    } else if query_len < min_query_length {
        let text = template::render_pairs(
            &messages.not_long_enough,
            &[("minLength", &min_query_length.to_string())],
        );
        (MessageKind::TooShort, text)
    } else if result_count == 0 {
        (MessageKind::NoResults, messages.no_results_found.clone())
    } else {
        let variant = if result_count == 1 {
            &messages.result_found
        } else {
            &messages.results_found
        };
        let text = template::render_pairs(variant, &[("count", &result_count.to_string())]);
        (MessageKind::ResultsFound, text)
    };

    StatusMessage {
        kind,
        css_class: format!("results-found {}", kind.style_tag()),
        text,
    }
}
