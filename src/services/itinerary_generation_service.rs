use crate::models::preferences::{
    AirlinePreference, PlanningStrategy, TransportPreference, UserPreferences,
};
use crate::services::search_scoring::ScoredDestination;

const FRUGAL_BUDGET_THRESHOLD: f64 = 120.0;
const PREMIUM_ECONOMY_MULTIPLIER: f64 = 1.5;
const BEACH_INTEREST: &str = "beach";
const NIGHTLIFE_INTEREST: &str = "nightlife";
const WINTER_SEASON: &str = "winter";

/// Activity slots filled each day, in order.
pub const DAY_SLOTS: [&str; 2] = ["Morning", "Afternoon"];

/// One day of an itinerary: ordered directive and activity lines.
pub type DayPlan = Vec<String>;

#[derive(Debug, Clone, PartialEq)]
pub struct ItineraryGenerationConfig {
    /// Daily budgets at or below this get the free park/viewpoint rule.
    pub frugal_budget_threshold: f64,
}

impl Default for ItineraryGenerationConfig {
    fn default() -> Self {
        Self {
            frugal_budget_threshold: FRUGAL_BUDGET_THRESHOLD,
        }
    }
}

#[derive(Default)]
pub struct ItineraryGenerator {
    config: ItineraryGenerationConfig,
}

impl ItineraryGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ItineraryGenerationConfig) -> Self {
        Self { config }
    }

    /// Number of activities a trip of `duration` days can consume.
    pub fn activities_needed(duration: u32) -> usize {
        duration as usize * DAY_SLOTS.len()
    }

    /// Build one plan per day from the fixed rule set.
    ///
    /// Activities are consumed by a single cursor across the whole trip, so
    /// once they run out the remaining slots are left out.
    pub fn generate_itinerary(
        &self,
        scored: &ScoredDestination,
        activities: &[String],
        prefs: &UserPreferences,
        strategy: &PlanningStrategy,
    ) -> Vec<DayPlan> {
        let mut cursor = activities.iter();
        let mut itinerary = Vec::new();

        for day in 1..=prefs.duration {
            let mut plan = DayPlan::new();

            match strategy {
                PlanningStrategy::OriginAware {
                    origin_city,
                    transport,
                    airline,
                } => {
                    if day == 1 {
                        self.add_flight_directives(&mut plan, scored, origin_city, *airline);
                    }
                    plan.push(Self::transport_directive(*transport).to_string());
                }
                PlanningStrategy::SeasonAware { season } => {
                    self.add_season_rules(&mut plan, day, prefs, season);
                }
            }

            for slot in DAY_SLOTS {
                if let Some(activity) = cursor.next() {
                    plan.push(format!("{}: {}", slot, activity));
                }
            }

            if prefs.has_interest(NIGHTLIFE_INTEREST) {
                plan.push("Evening: Explore local nightlife.".to_string());
            } else {
                plan.push("Evening: Relaxing dinner at hotel.".to_string());
            }

            itinerary.push(plan);
        }

        log::debug!(
            "Generated {}-day itinerary for {}",
            itinerary.len(),
            scored.destination.name
        );

        itinerary
    }

    fn add_flight_directives(
        &self,
        plan: &mut DayPlan,
        scored: &ScoredDestination,
        origin_city: &str,
        airline: AirlinePreference,
    ) {
        plan.push(format!(
            "FLIGHT: Depart from {} -> Arrive in {}.",
            origin_city, scored.destination.name
        ));

        let flight_cost = scored.estimated_flight_cost.unwrap_or_default();
        match airline {
            AirlinePreference::Comfortable => plan.push(format!(
                "TIP: Book premium economy for the flight (~${:.1}).",
                f64::from(flight_cost) * PREMIUM_ECONOMY_MULTIPLIER
            )),
            AirlinePreference::Cheap => plan.push(format!(
                "TIP: Look for budget flight deals (~${}).",
                flight_cost
            )),
        }
    }

    pub fn transport_directive(transport: TransportPreference) -> &'static str {
        match transport {
            TransportPreference::RentalCar => "TRANSPORT: Pick up Rental Car.",
            TransportPreference::Metro => "TRANSPORT: Buy a Day Pass for Metro.",
            TransportPreference::Walk => "TRANSPORT: Wear comfortable shoes for walking.",
            TransportPreference::Taxi => "TRANSPORT: Use Taxi/Uber.",
        }
    }

    fn add_season_rules(
        &self,
        plan: &mut DayPlan,
        day: u32,
        prefs: &UserPreferences,
        season: &str,
    ) {
        if prefs.budget <= self.config.frugal_budget_threshold {
            plan.push("RULE: Budget day - find a free park or viewpoint.".to_string());
        }
        if day == 1 && prefs.has_interest(BEACH_INTEREST) {
            plan.push("RULE: Beach day - keep the afternoon free for the coast.".to_string());
        }
        if season.to_lowercase().contains(WINTER_SEASON) {
            plan.push("RULE: Winter season - favour indoor activities like museums.".to_string());
        }
    }
}
