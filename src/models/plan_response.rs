use crate::services::planning_service::PlanningResult;
use crate::services::search_scoring::ScoredDestination;
use serde::Serialize;

const TOP_ALTERNATIVES: usize = 3;
const NO_TRANSPORT: &str = "N/A";

/// Headline figures for the recommended destination
#[derive(Debug, Serialize)]
pub struct TripRecommendation {
    pub id: String,
    pub name: String,
    pub country: String,
    pub utility_score: f64,
    pub daily_cost: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_flight_cost: Option<u32>,
    pub primary_transport: String,
    pub hotel_recommendation: String,
}

#[derive(Debug, Serialize)]
pub struct AlternativeSummary {
    pub rank: usize,
    pub id: String,
    pub name: String,
    pub utility_score: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_flight_cost: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct PlanResponse {
    #[serde(flatten)]
    pub result: PlanningResult,
    pub recommendation: Option<TripRecommendation>,
    pub top_alternatives: Vec<AlternativeSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl TripRecommendation {
    pub fn from_scored(scored: &ScoredDestination) -> Self {
        let destination = &scored.destination;
        Self {
            id: destination.id.clone(),
            name: destination.name.clone(),
            country: destination.country.clone(),
            utility_score: scored.utility_score,
            daily_cost: destination.daily_cost,
            estimated_flight_cost: scored.estimated_flight_cost,
            primary_transport: destination
                .primary_transport()
                .unwrap_or_else(|| NO_TRANSPORT.to_string()),
            hotel_recommendation: destination.hotel_recommendation.clone(),
        }
    }
}

impl From<PlanningResult> for PlanResponse {
    fn from(result: PlanningResult) -> Self {
        let recommendation = result.best.as_ref().map(TripRecommendation::from_scored);
        let top_alternatives = result
            .ranked
            .iter()
            .take(TOP_ALTERNATIVES)
            .enumerate()
            .map(|(i, scored)| AlternativeSummary {
                rank: i + 1,
                id: scored.destination.id.clone(),
                name: scored.destination.name.clone(),
                utility_score: scored.utility_score,
                estimated_flight_cost: scored.estimated_flight_cost,
            })
            .collect();
        let message = if result.is_empty() {
            Some("No destinations found matching your budget criteria.".to_string())
        } else {
            None
        };

        Self {
            result,
            recommendation,
            top_alternatives,
            message,
        }
    }
}

