use crate::models::destination::Destination;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

const MAX_SEASON_RATING: u8 = 10;

#[derive(Debug)]
pub enum CatalogError {
    Io(String),
    Parse(String),
    InvalidRecord { id: String, reason: String },
    DuplicateId(String),
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::Io(err) => write!(f, "Failed to read catalog: {}", err),
            CatalogError::Parse(err) => write!(f, "Failed to parse catalog: {}", err),
            CatalogError::InvalidRecord { id, reason } => {
                write!(f, "Invalid destination '{}': {}", id, reason)
            }
            CatalogError::DuplicateId(id) => write!(f, "Duplicate destination id '{}'", id),
        }
    }
}

impl std::error::Error for CatalogError {}

/// Validated, read-only destination catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    destinations: Vec<Destination>,
}

impl Catalog {
    pub fn new(destinations: Vec<Destination>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for destination in &destinations {
            validate_destination(destination)?;
            if !seen.insert(destination.id.as_str()) {
                return Err(CatalogError::DuplicateId(destination.id.clone()));
            }
        }

        Ok(Self { destinations })
    }

    /// Parse a `{"destinations": [...]}` document. A missing required field
    /// fails the whole catalog.
    pub fn from_json_str(raw: &str) -> Result<Self, CatalogError> {
        let document: Catalog =
            serde_json::from_str(raw).map_err(|e| CatalogError::Parse(e.to_string()))?;
        Self::new(document.destinations)
    }

    pub fn destinations(&self) -> &[Destination] {
        &self.destinations
    }

    pub fn len(&self) -> usize {
        self.destinations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.destinations.is_empty()
    }
}

fn validate_destination(destination: &Destination) -> Result<(), CatalogError> {
    let invalid = |reason: &str| CatalogError::InvalidRecord {
        id: destination.id.clone(),
        reason: reason.to_string(),
    };

    if destination.id.trim().is_empty() {
        return Err(invalid("id must not be blank"));
    }
    if !destination.daily_cost.is_finite() || destination.daily_cost <= 0.0 {
        return Err(invalid("avg_daily_cost must be a positive number"));
    }
    if destination.tags.is_empty() {
        return Err(invalid("tags must not be empty"));
    }
    let (x, y) = destination.coordinates;
    if !x.is_finite() || !y.is_finite() {
        return Err(invalid("coords must be finite"));
    }
    if destination
        .season_scores
        .values()
        .any(|rating| *rating > MAX_SEASON_RATING)
    {
        return Err(invalid("best_season_score ratings must be within 0..=10"));
    }

    Ok(())
}

/// Load and validate the catalog file once at startup.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Arc<Catalog>, CatalogError> {
    let path = path.as_ref();
    println!("Loading destination catalog from {}", path.display());

    let raw = std::fs::read_to_string(path)
        .map_err(|e| CatalogError::Io(format!("{}: {}", path.display(), e)))?;
    let catalog = Catalog::from_json_str(&raw)?;

    log::info!("Loaded {} destinations", catalog.len());
    Ok(Arc::new(catalog))
}
