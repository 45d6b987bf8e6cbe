use serde::{Deserialize, Serialize};

/// The fixed list of bookable destinations, in display order.
///
/// The catalog is immutable for the lifetime of a form session. Filtering
/// never reorders entries; the filtered view always preserves catalog order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DestinationCatalog {
    entries: Vec<String>,
}

impl Default for DestinationCatalog {
    fn default() -> Self {
        Self {
            entries: vec![
                "Barcelona".to_string(),
                "Madrid".to_string(),
                "Valencia".to_string(),
                "Sevilla".to_string(),
                "Bilbao".to_string(),
                "Mallorca".to_string(),
            ],
        }
    }
}

impl DestinationCatalog {
    /// Build a catalog from a custom entry list.
    pub fn new(entries: Vec<String>) -> Result<Self, CatalogError> {
        if entries.is_empty() {
            return Err(CatalogError::EmptyCatalog);
        }
        if let Some(blank) = entries.iter().find(|e| e.trim().is_empty()) {
            return Err(CatalogError::BlankEntry(blank.clone()));
        }
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Case-insensitive substring filter over the catalog.
    ///
    /// An empty term yields the full catalog. The result keeps catalog order.
    pub fn filter(&self, term: &str) -> Vec<String> {
        if term.is_empty() {
            return self.entries.clone();
        }

        let needle = term.to_lowercase();
        self.entries
            .iter()
            .filter(|entry| entry.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Destination catalog must not be empty")]
    EmptyCatalog,

    #[error("Destination catalog entry is blank: {0:?}")]
    BlankEntry(String),
}
