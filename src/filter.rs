//! Display policy for raw article lists: collection whitelist, then limit.

use crate::types::{ArticleRecord, CollectionWhitelist};

/// Select the ordered subset of articles to display.
///
/// Input order is preserved. Articles outside the whitelist are excluded
/// before the limit is applied, so they never count toward it. An empty
/// whitelist keeps every article, subject only to the limit.
pub fn filter_articles<'a>(
    items: &'a [ArticleRecord],
    whitelist: &CollectionWhitelist,
    limit: usize,
) -> Vec<&'a ArticleRecord> {
    items
        .iter()
        .filter(|article| whitelist.allows(&article.collection_id))
        .take(limit)
        .collect()
}
