use crate::services::itinerary_generation_service::ItineraryGenerationConfig;
use crate::services::planning_service::PlannerConfig;

const HOST: &str = "0.0.0.0";
const PORT: u16 = 8080;
const CATALOG_PATH: &str = "data/destinations.json";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// JSON catalog loaded at startup
    pub catalog_path: String,
    /// Fixed activity-selection seed, for reproducible itineraries
    pub planner_seed: Option<u64>,
    /// Daily budget at or below which season plans get the free park rule
    pub frugal_budget_threshold: f64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: HOST.to_string(),
            port: PORT,
            catalog_path: CATALOG_PATH.to_string(),
            planner_seed: None,
            frugal_budget_threshold: ItineraryGenerationConfig::default().frugal_budget_threshold,
        }
    }
}

impl AppConfig {
    /// Create config from environment variables or use defaults
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            host: std::env::var("HOST").unwrap_or(defaults.host),
            port: std::env::var("PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.port),
            catalog_path: std::env::var("CATALOG_PATH").unwrap_or(defaults.catalog_path),
            planner_seed: std::env::var("PLANNER_SEED")
                .ok()
                .and_then(|s| s.parse().ok()),
            frugal_budget_threshold: std::env::var("FRUGAL_BUDGET_THRESHOLD")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.frugal_budget_threshold),
        }
    }

    pub fn planner_config(&self) -> PlannerConfig {
        PlannerConfig {
            seed: self.planner_seed,
            itinerary: ItineraryGenerationConfig {
                frugal_budget_threshold: self.frugal_budget_threshold,
            },
        }
    }
}
