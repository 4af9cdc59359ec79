use crate::db::catalog::Catalog;
use crate::models::preferences::{PlanningStrategy, PreferenceError, UserPreferences};
use crate::services::activity_selector::{build_activity_pool, ActivitySelector};
use crate::services::distance_service::{DistanceService, DEFAULT_ORIGIN_COORDS};
use crate::services::itinerary_generation_service::{
    DayPlan, ItineraryGenerationConfig, ItineraryGenerator,
};
use crate::services::search_scoring::{DestinationScorer, ScoredDestination};
use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlannerConfig {
    /// Fixed seed for activity selection. `None` draws from OS entropy.
    pub seed: Option<u64>,
    pub itinerary: ItineraryGenerationConfig,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlanningResult {
    pub plan_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub strategy: &'static str,
    pub ranked: Vec<ScoredDestination>,
    pub best: Option<ScoredDestination>,
    pub itinerary: Vec<DayPlan>,
}

impl PlanningResult {
    fn new(strategy: &PlanningStrategy) -> Self {
        Self {
            plan_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            strategy: strategy.name(),
            ranked: Vec::new(),
            best: None,
            itinerary: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.best.is_none()
    }
}

/// Runs scoring, activity selection and itinerary generation over a shared,
/// read-only catalog.
pub struct TravelPlanner {
    catalog: Arc<Catalog>,
    config: PlannerConfig,
    itinerary_generator: ItineraryGenerator,
}

impl TravelPlanner {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self::with_config(catalog, PlannerConfig::default())
    }

    pub fn with_config(catalog: Arc<Catalog>, config: PlannerConfig) -> Self {
        let itinerary_generator = ItineraryGenerator::with_config(config.itinerary.clone());
        Self {
            catalog,
            config,
            itinerary_generator,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Plan with a generator seeded from the planner config.
    pub fn plan(&self, prefs: &UserPreferences) -> Result<PlanningResult, PreferenceError> {
        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        self.plan_with_rng(prefs, &mut rng)
    }

    pub fn plan_with_rng<R: Rng + ?Sized>(
        &self,
        prefs: &UserPreferences,
        rng: &mut R,
    ) -> Result<PlanningResult, PreferenceError> {
        prefs.validate()?;
        let strategy = prefs.strategy()?;
        let destinations = self.catalog.destinations();

        let flight_costs = match &strategy {
            PlanningStrategy::OriginAware { origin_city, .. } => {
                if prefs.origin_city.is_some() && !DistanceService::is_known_origin(origin_city) {
                    log::warn!(
                        "Unknown origin city '{}', using default coordinates {:?}",
                        origin_city,
                        DEFAULT_ORIGIN_COORDS
                    );
                }
                DistanceService::estimate_flight_costs(destinations, origin_city)
            }
            PlanningStrategy::SeasonAware { .. } => HashMap::new(),
        };

        let scorer = DestinationScorer::new(&strategy);
        let ranked = scorer.filter_and_score(destinations, prefs, &strategy, &flight_costs);

        let mut result = PlanningResult::new(&strategy);
        let best = match ranked.first() {
            Some(best) => best.clone(),
            None => {
                log::info!(
                    "No destinations within daily budget {} ({} in catalog)",
                    prefs.budget,
                    destinations.len()
                );
                return Ok(result);
            }
        };

        let pool = build_activity_pool(&best.destination, prefs, &strategy);
        let activities = ActivitySelector::new(rng)
            .select(&pool, ItineraryGenerator::activities_needed(prefs.duration));
        let itinerary = self
            .itinerary_generator
            .generate_itinerary(&best, &activities, prefs, &strategy);

        log::info!(
            "Planned {} day(s) in {} (utility {:.4}, {} candidate(s), {})",
            prefs.duration,
            best.destination.name,
            best.utility_score,
            ranked.len(),
            strategy.name()
        );

        result.ranked = ranked;
        result.best = Some(best);
        result.itinerary = itinerary;
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn catalog() -> Arc<Catalog> {
        let document = json!({
            "destinations": [
                {
                    "id": "A",
                    "name": "Alpha",
                    "country": "X",
                    "avg_daily_cost": 100,
                    "tags": ["food"],
                    "coords": [0, 0],
                    "activities": { "food": ["X", "Y"] },
                    "hotel_reco": "Inn"
                }
            ]
        });
        Arc::new(Catalog::from_json_str(&document.to_string()).unwrap())
    }

    fn prefs(budget: f64) -> UserPreferences {
        UserPreferences::new(budget, 1, vec!["food".to_string()])
    }

    #[test]
    fn test_seeded_planner_is_reproducible() {
        let config = PlannerConfig {
            seed: Some(9),
            ..PlannerConfig::default()
        };
        let planner = TravelPlanner::with_config(catalog(), config);
        let first = planner.plan(&prefs(150.0)).unwrap();
        let second = planner.plan(&prefs(150.0)).unwrap();
        assert_eq!(first.itinerary, second.itinerary);
        assert_ne!(first.plan_id, second.plan_id);
    }

    #[test]
    fn test_invalid_preferences_are_rejected() {
        let planner = TravelPlanner::new(catalog());
        assert!(matches!(
            planner.plan(&UserPreferences::new(150.0, 1, Vec::new())),
            Err(PreferenceError::NoInterests)
        ));
    }

    #[test]
    fn test_oversized_duration_is_rejected_before_planning() {
        let planner = TravelPlanner::new(catalog());
        assert_eq!(
            planner.plan(&UserPreferences::new(150.0, u32::MAX, vec!["food".to_string()])).err(),
            Some(PreferenceError::InvalidDuration)
        );
    }

    #[test]
    fn test_empty_result_when_nothing_is_affordable() {
        let planner = TravelPlanner::new(catalog());
        let result = planner.plan(&prefs(50.0)).unwrap();
        assert!(result.is_empty());
        assert!(result.ranked.is_empty());
        assert!(result.itinerary.is_empty());
        assert_eq!(result.strategy, "origin_aware");
    }
}
