//! Page metadata plus the root block sequence.

use crate::block::Block;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The top-level document: one editable page.
///
/// `slug` is the externally addressable export name (`<slug>.html`,
/// `<slug>.jsx`) and is distinct from `id`, which is the stable lookup
/// key inside the page collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub blocks: Vec<Block>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Page {
    /// New empty page stamped with the current time.
    pub fn new(id: String, title: &str, slug: &str) -> Self {
        let now = Utc::now();
        Self {
            id,
            title: title.to_string(),
            slug: slug.to_string(),
            blocks: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Refresh `updated_at`. Called after every mutation.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamps_serialize_as_iso8601() {
        let page = Page::new("p-1".to_string(), "Home", "home");
        let json = serde_json::to_value(&page).unwrap();

        let created = json["createdAt"].as_str().unwrap();
        assert!(created.contains('T'), "expected ISO 8601, got {created}");
        assert_eq!(json["slug"], "home");
        assert!(json["blocks"].as_array().unwrap().is_empty());
    }
}
