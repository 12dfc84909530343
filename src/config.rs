//! Widget configuration, loaded once at startup and read-only thereafter.

use crate::error::Result;
use crate::types::{CollectionId, CollectionWhitelist};
use anyhow::Context as _;
use serde::Deserialize;
use std::time::Duration;

/// Configuration for a single search widget.
///
/// Every field has a default, so a partial TOML document (or an empty one)
/// yields a usable configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchConfig {
    /// Queries shorter than this (after trimming) do not trigger a request.
    pub min_query_length: usize,
    /// Quiet period after the last keystroke before a search fires.
    pub debounce_delay_ms: u64,
    /// Maximum number of articles to display.
    pub result_limit: usize,
    /// Collection whitelist. Empty means show articles from any collection.
    pub collections: Vec<CollectionId>,
    pub templates: Templates,
    pub messages: Messages,
    /// Lowers the default tracing level to DEBUG when set.
    pub debug: bool,
}

/// Markup templates. Placeholders use `{fieldName}` tokens.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Templates {
    /// CSS class of the element wrapping the result region.
    pub wrap_class: String,
    /// Emitted before the item list.
    pub before: String,
    /// Emitted after the item list.
    pub after: String,
    /// Rendered once per displayed article, with the article's fields.
    pub item: String,
    /// Status banner; receives `{css_class}`, `{text}` and `{count}`.
    pub results_found: String,
}

/// Status message texts for the four outcomes of a search cycle.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Messages {
    pub enter_search: String,
    /// Receives `{minLength}`.
    pub not_long_enough: String,
    pub no_results_found: String,
    /// Singular variant; receives `{count}`.
    pub result_found: String,
    /// Plural variant; receives `{count}`.
    pub results_found: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            min_query_length: 3,
            debounce_delay_ms: 500,
            result_limit: 5,
            collections: Vec::new(),
            templates: Templates::default(),
            messages: Messages::default(),
            debug: false,
        }
    }
}

impl Default for Templates {
    fn default() -> Self {
        Self {
            wrap_class: "docs-search-wrap".to_string(),
            before: r#"<ul class="docs-search-results">"#.to_string(),
            after: "</ul>".to_string(),
            item: r#"<li><a href="{url}" target="_blank">{name}</a><p>{preview}</p></li>"#
                .to_string(),
            results_found: r#"<p class="{css_class}">{text}</p>"#.to_string(),
        }
    }
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            enter_search: "Enter a search term to find help articles.".to_string(),
            not_long_enough:
                "Keep typing! Search terms must be at least {minLength} characters long."
                    .to_string(),
            no_results_found: "No articles found. Try a different search term.".to_string(),
            result_found: "{count} article found:".to_string(),
            results_found: "{count} articles found:".to_string(),
        }
    }
}

impl SearchConfig {
    /// Parse a configuration from a TOML document.
    pub fn from_toml_str(input: &str) -> Result<Self> {
        let config: Self = toml::from_str(input).context("invalid search configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Check invariants that serde defaults cannot express.
    pub fn validate(&self) -> Result<()> {
        anyhow::ensure!(self.result_limit >= 1, "result_limit must be at least 1");
        Ok(())
    }

    pub fn debounce_delay(&self) -> Duration {
        Duration::from_millis(self.debounce_delay_ms)
    }

    /// The configured collections as a whitelist set.
    pub fn whitelist(&self) -> CollectionWhitelist {
        self.collections.iter().cloned().collect()
    }
}
