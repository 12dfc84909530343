//! Composition of the final result-region markup.

use crate::config::SearchConfig;
use crate::filter;
use crate::message;
use crate::template;
use crate::types::{ArticleRecord, CollectionWhitelist};

/// Build the complete markup for the result region.
///
/// The banner always leads; the wrapped item list follows only when at least
/// one article survives filtering. The status message is chosen from the
/// trimmed query length and the *displayed* count, so the banner and the
/// list can never disagree.
pub fn results_html(
    config: &SearchConfig,
    whitelist: &CollectionWhitelist,
    query: &str,
    items: &[ArticleRecord],
) -> String {
    let displayed = filter::filter_articles(items, whitelist, config.result_limit);
    let status = message::select(
        query.trim().len(),
        config.min_query_length,
        displayed.len(),
        &config.messages,
    );

    let mut output = template::render_pairs(
        &config.templates.results_found,
        &[
            ("css_class", &status.css_class),
            ("text", &status.text),
            ("count", &displayed.len().to_string()),
        ],
    );

    if !displayed.is_empty() {
        output.push_str(&config.templates.before);
        for article in &displayed {
            output.push_str(&template::render(&config.templates.item, &article.fields()));
        }
        output.push_str(&config.templates.after);
    }

    output
}
