use crate::models::destination::Destination;
use crate::models::preferences::{PlanningStrategy, UserPreferences};
use crate::services::distance_service::{DistanceService, SEASON_REFERENCE_POINT};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Rating used when no season key matches the requested season.
const DEFAULT_SEASON_RATING: u8 = 5;
const MAX_SEASON_RATING: f64 = 10.0;
const NO_INTEREST_MATCH: f64 = 0.5;
const OVER_BUDGET_FIT: f64 = 0.1;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ScoringWeights {
    /// Weight for tag overlap with the traveler's interests
    pub interest_weight: f64,
    /// Weight for how close the daily cost sits to the budget ceiling
    pub budget_weight: f64,
    /// Weight for season suitability (season-aware only)
    pub season_weight: f64,
    /// Weight for proximity on the planning plane
    pub distance_weight: f64,
}

impl ScoringWeights {
    pub fn origin_aware() -> Self {
        Self {
            interest_weight: 0.55,
            budget_weight: 0.40,
            season_weight: 0.0,
            distance_weight: 0.05,
        }
    }

    pub fn season_aware() -> Self {
        Self {
            interest_weight: 0.40,
            budget_weight: 0.30,
            season_weight: 0.20,
            distance_weight: 0.10,
        }
    }

    pub fn for_strategy(strategy: &PlanningStrategy) -> Self {
        match strategy {
            PlanningStrategy::OriginAware { .. } => Self::origin_aware(),
            PlanningStrategy::SeasonAware { .. } => Self::season_aware(),
        }
    }

    pub fn total(&self) -> f64 {
        self.interest_weight + self.budget_weight + self.season_weight + self.distance_weight
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ScoreBreakdown {
    pub interest_match: f64,
    pub budget_fit: f64,
    pub distance_score: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub season_score: Option<f64>,
    /// Season key the rating was read from, or the raw season on fallback.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub season_key: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ScoredDestination {
    pub destination: Destination,
    pub utility_score: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_flight_cost: Option<u32>,
    pub score_breakdown: ScoreBreakdown,
}

pub struct DestinationScorer {
    pub weights: ScoringWeights,
}

impl DestinationScorer {
    pub fn new(strategy: &PlanningStrategy) -> Self {
        Self {
            weights: ScoringWeights::for_strategy(strategy),
        }
    }

    /// Every destination whose daily cost fits the budget, catalog order kept.
    pub fn filter_by_budget(destinations: &[Destination], budget: f64) -> Vec<&Destination> {
        destinations
            .iter()
            .filter(|destination| destination.daily_cost <= budget)
            .collect()
    }

    pub fn interest_match(destination: &Destination, interests: &HashSet<&str>) -> f64 {
        if interests.is_empty() {
            return NO_INTEREST_MATCH;
        }

        let common = interests
            .iter()
            .filter(|interest| destination.has_tag(interest))
            .count();
        common as f64 / interests.len() as f64
    }

    /// Spending closer to the ceiling scores higher.
    pub fn budget_fit(daily_cost: f64, budget: f64) -> f64 {
        if daily_cost <= budget && budget > 0.0 {
            (daily_cost / budget).min(1.0)
        } else {
            OVER_BUDGET_FIT
        }
    }

    /// Resolve the season rating by case-insensitive substring match in either
    /// direction, first key in ascending order wins.
    pub fn season_rating(destination: &Destination, season: &str) -> (String, u8) {
        let wanted = season.to_lowercase();

        destination
            .season_scores
            .iter()
            .find(|(key, _)| {
                let key = key.to_lowercase();
                wanted.contains(&key) || key.contains(&wanted)
            })
            .map(|(key, rating)| (key.clone(), *rating))
            .unwrap_or_else(|| (season.to_string(), DEFAULT_SEASON_RATING))
    }

    pub fn score_destination(
        &self,
        destination: &Destination,
        prefs: &UserPreferences,
        strategy: &PlanningStrategy,
        estimated_flight_cost: Option<u32>,
    ) -> ScoredDestination {
        let interests: HashSet<&str> = prefs.interests.iter().map(String::as_str).collect();
        let interest_match = Self::interest_match(destination, &interests);
        let budget_fit = Self::budget_fit(destination.daily_cost, prefs.budget);

        let (distance_score, season_score, season_key) = match strategy {
            PlanningStrategy::OriginAware { origin_city, .. } => {
                let origin = DistanceService::origin_coordinates(origin_city);
                let distance = DistanceService::euclidean_distance(origin, destination.coordinates);
                (DistanceService::distance_score(distance), None, None)
            }
            PlanningStrategy::SeasonAware { season } => {
                let distance = DistanceService::euclidean_distance(
                    SEASON_REFERENCE_POINT,
                    destination.coordinates,
                );
                let (key, rating) = Self::season_rating(destination, season);
                (
                    DistanceService::distance_score(distance),
                    Some(f64::from(rating) / MAX_SEASON_RATING),
                    Some(key),
                )
            }
        };

        let utility_score = interest_match * self.weights.interest_weight
            + budget_fit * self.weights.budget_weight
            + season_score.unwrap_or(0.0) * self.weights.season_weight
            + distance_score * self.weights.distance_weight;

        ScoredDestination {
            destination: destination.clone(),
            utility_score,
            estimated_flight_cost,
            score_breakdown: ScoreBreakdown {
                interest_match,
                budget_fit,
                distance_score,
                season_score,
                season_key,
            },
        }
    }

    /// Budget-filter, score and rank. Ties keep catalog order.
    pub fn filter_and_score(
        &self,
        destinations: &[Destination],
        prefs: &UserPreferences,
        strategy: &PlanningStrategy,
        flight_costs: &HashMap<String, u32>,
    ) -> Vec<ScoredDestination> {
        let affordable = Self::filter_by_budget(destinations, prefs.budget);
        log::debug!(
            "{}/{} destinations within daily budget {}",
            affordable.len(),
            destinations.len(),
            prefs.budget
        );

        let mut scored: Vec<ScoredDestination> = affordable
            .into_iter()
            .map(|destination| {
                let flight_cost = flight_costs.get(&destination.id).copied();
                self.score_destination(destination, prefs, strategy, flight_cost)
            })
            .collect();

        // sort_by is stable
        scored.sort_by(|a, b| {
            b.utility_score
                .partial_cmp(&a.utility_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        scored
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::preferences::{AirlinePreference, TransportPreference};
    use std::collections::BTreeMap;

    fn destination(id: &str, cost: f64, tags: &[&str], coords: (f64, f64)) -> Destination {
        Destination {
            id: id.to_string(),
            name: id.to_uppercase(),
            country: "Testland".to_string(),
            daily_cost: cost,
            tags: tags.iter().map(|t| t.to_string()).collect(),
            coordinates: coords,
            activities_by_tag: HashMap::new(),
            hotel_recommendation: "Hotel".to_string(),
            local_transport: Vec::new(),
            season_scores: BTreeMap::new(),
        }
    }

    fn origin_strategy(city: &str) -> PlanningStrategy {
        PlanningStrategy::OriginAware {
            origin_city: city.to_string(),
            transport: TransportPreference::Taxi,
            airline: AirlinePreference::Cheap,
        }
    }

    fn prefs(budget: f64, interests: &[&str]) -> UserPreferences {
        UserPreferences::new(budget, 1, interests.iter().map(|t| t.to_string()).collect())
    }

    #[test]
    fn test_weights_sum_to_one() {
        assert!((ScoringWeights::origin_aware().total() - 1.0).abs() < 1e-9);
        assert!((ScoringWeights::season_aware().total() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_budget_filter_keeps_exactly_affordable() {
        let catalog = vec![
            destination("a", 100.0, &["food"], (0.0, 0.0)),
            destination("b", 150.0, &["food"], (0.0, 0.0)),
            destination("c", 151.0, &["food"], (0.0, 0.0)),
        ];

        let ids: Vec<&str> = DestinationScorer::filter_by_budget(&catalog, 150.0)
            .iter()
            .map(|d| d.id.as_str())
            .collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn test_budget_fit() {
        assert!((DestinationScorer::budget_fit(100.0, 150.0) - 0.6667).abs() < 1e-3);
        assert_eq!(DestinationScorer::budget_fit(150.0, 150.0), 1.0);
        assert_eq!(DestinationScorer::budget_fit(200.0, 150.0), 0.1);
    }

    #[test]
    fn test_interest_match() {
        let dest = destination("a", 100.0, &["food", "art"], (0.0, 0.0));
        let interests: HashSet<&str> = ["food", "beach"].into_iter().collect();
        assert_eq!(DestinationScorer::interest_match(&dest, &interests), 0.5);
        assert_eq!(DestinationScorer::interest_match(&dest, &HashSet::new()), 0.5);
    }

    #[test]
    fn test_season_rating_lookup() {
        let mut dest = destination("a", 100.0, &["food"], (0.0, 0.0));
        dest.season_scores.insert("spring".to_string(), 10);
        dest.season_scores.insert("winter".to_string(), 4);

        assert_eq!(
            DestinationScorer::season_rating(&dest, "Late WINTER"),
            ("winter".to_string(), 4)
        );
        assert_eq!(
            DestinationScorer::season_rating(&dest, "Spr"),
            ("spring".to_string(), 10)
        );
        assert_eq!(
            DestinationScorer::season_rating(&dest, "March"),
            ("March".to_string(), 5)
        );
    }

    #[test]
    fn test_origin_aware_score() {
        let dest = destination("a", 100.0, &["food"], (0.0, 0.0));
        let strategy = origin_strategy("Nowhere");
        let scorer = DestinationScorer::new(&strategy);

        let scored = scorer.score_destination(&dest, &prefs(150.0, &["food"]), &strategy, Some(300));

        // default origin (65, 55): distance 85.14, distance score 0.574
        let distance = (65.0f64.powi(2) + 55.0f64.powi(2)).sqrt();
        let expected = 0.55 + 0.40 * (100.0 / 150.0) + 0.05 * (1.0 - distance * 0.005);
        assert!((scored.utility_score - expected).abs() < 1e-9);
        assert_eq!(scored.estimated_flight_cost, Some(300));
        assert_eq!(scored.score_breakdown.season_score, None);
    }

    #[test]
    fn test_season_aware_score() {
        let mut dest = destination("a", 60.0, &["beach", "food"], (50.0, 50.0));
        dest.season_scores.insert("summer".to_string(), 8);
        let strategy = PlanningStrategy::SeasonAware {
            season: "summer".to_string(),
        };
        let scorer = DestinationScorer::new(&strategy);

        let scored = scorer.score_destination(&dest, &prefs(120.0, &["beach"]), &strategy, None);

        let expected = 0.40 * 1.0 + 0.30 * 0.5 + 0.20 * 0.8 + 0.10 * 1.0;
        assert!((scored.utility_score - expected).abs() < 1e-9);
        assert_eq!(scored.score_breakdown.season_key.as_deref(), Some("summer"));
    }

    #[test]
    fn test_ranking_is_descending_and_stable() {
        let catalog = vec![
            destination("first", 100.0, &["art"], (65.0, 55.0)),
            destination("best", 100.0, &["food"], (65.0, 55.0)),
            destination("second", 100.0, &["art"], (65.0, 55.0)),
            destination("pricey", 500.0, &["food"], (65.0, 55.0)),
        ];
        let strategy = origin_strategy("Karachi");
        let scorer = DestinationScorer::new(&strategy);

        let ranked = scorer.filter_and_score(
            &catalog,
            &prefs(150.0, &["food"]),
            &strategy,
            &HashMap::new(),
        );
        let ids: Vec<&str> = ranked.iter().map(|s| s.destination.id.as_str()).collect();
        assert_eq!(ids, vec!["best", "first", "second"]);
        assert_eq!(ranked[1].utility_score, ranked[2].utility_score);
    }

    #[test]
    fn test_utility_stays_within_unit_interval() {
        let catalog = vec![
            destination("near", 1.0, &["food"], (65.0, 55.0)),
            destination("far", 3000.0, &["food", "art"], (-900.0, 900.0)),
        ];
        for strategy in [
            origin_strategy("Gwadar"),
            PlanningStrategy::SeasonAware {
                season: "autumn".to_string(),
            },
        ] {
            let scorer = DestinationScorer::new(&strategy);
            for scored in scorer.filter_and_score(
                &catalog,
                &prefs(3000.0, &["food", "art", "beach"]),
                &strategy,
                &HashMap::new(),
            ) {
                assert!((0.0..=1.0).contains(&scored.utility_score));
            }
        }
    }
}
