//! Image catalog backing the random-image endpoints
//!
//! A fixed label→URL mapping, built once at startup and never mutated.

use rand::Rng;

/// Read-only label→URL catalog
#[derive(Debug, Clone)]
pub struct ImageCatalog {
    entries: Vec<(String, String)>,
}

impl ImageCatalog {
    /// Create a catalog from label/URL pairs
    pub fn new(entries: impl IntoIterator<Item = (String, String)>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// The default picture set served by `/json` and `/random`
    pub fn builtin() -> Self {
        Self::new([
            ("streets".to_string(), "https://iili.io/JV1pSV.jpg".to_string()),
            ("bread".to_string(), "https://iili.io/Jj9MWG.jpg".to_string()),
        ])
    }

    /// Look up the URL for a label
    pub fn get(&self, label: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, url)| url.as_str())
    }

    /// Pick one entry uniformly at random
    pub fn pick<R: Rng>(&self, rng: &mut R) -> Option<(&str, &str)> {
        if self.entries.is_empty() {
            return None;
        }
        let index = rng.random_range(0..self.entries.len());
        self.entries
            .get(index)
            .map(|(label, url)| (label.as_str(), url.as_str()))
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the catalog holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
