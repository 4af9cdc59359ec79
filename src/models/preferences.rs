use serde::{Deserialize, Serialize};

/// Origin label used when a request names neither an origin city nor a
/// season. It is not in the city table, so it resolves to the default
/// coordinates.
pub const DEFAULT_ORIGIN_LABEL: &str = "Pakistan";
/// Longest trip the planner accepts, in days.
pub const MAX_DURATION_DAYS: u32 = 60;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransportPreference {
    #[serde(rename = "rental car")]
    RentalCar,
    #[serde(rename = "metro")]
    Metro,
    #[serde(rename = "walk")]
    Walk,
    #[default]
    #[serde(rename = "taxi", other)]
    Taxi,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
pub enum AirlinePreference {
    Comfortable,
    #[default]
    #[serde(other)]
    Cheap,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct UserPreferences {
    /// Maximum daily spend.
    pub budget: f64,
    /// Trip length in days.
    pub duration: u32,
    /// Interest tags in declaration order.
    pub interests: Vec<String>,
    pub origin_city: Option<String>,
    #[serde(rename = "inside_city", default)]
    pub transport: TransportPreference,
    #[serde(rename = "airline_pref", default)]
    pub airline: AirlinePreference,
    #[serde(alias = "month")]
    pub season: Option<String>,
}

/// Scoring and rule set a planning run follows.
#[derive(Debug, Clone, PartialEq)]
pub enum PlanningStrategy {
    OriginAware {
        origin_city: String,
        transport: TransportPreference,
        airline: AirlinePreference,
    },
    SeasonAware {
        season: String,
    },
}

impl PlanningStrategy {
    pub fn name(&self) -> &'static str {
        match self {
            PlanningStrategy::OriginAware { .. } => "origin_aware",
            PlanningStrategy::SeasonAware { .. } => "season_aware",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PreferenceError {
    InvalidBudget(f64),
    InvalidDuration,
    NoInterests,
    BlankSeason,
    AmbiguousStrategy,
}

impl std::fmt::Display for PreferenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PreferenceError::InvalidBudget(budget) => {
                write!(f, "Budget must be a positive number, got {}", budget)
            }
            PreferenceError::InvalidDuration => write!(
                f,
                "Duration must be between 1 and {} days",
                MAX_DURATION_DAYS
            ),
            PreferenceError::NoInterests => write!(f, "Please select at least one interest"),
            PreferenceError::BlankSeason => write!(f, "Season must not be blank"),
            PreferenceError::AmbiguousStrategy => {
                write!(f, "Provide either an origin city or a season, not both")
            }
        }
    }
}

impl std::error::Error for PreferenceError {}

impl UserPreferences {
    pub fn new(budget: f64, duration: u32, interests: Vec<String>) -> Self {
        Self {
            budget,
            duration,
            interests,
            origin_city: None,
            transport: TransportPreference::default(),
            airline: AirlinePreference::default(),
            season: None,
        }
    }

    pub fn has_interest(&self, tag: &str) -> bool {
        self.interests.iter().any(|interest| interest == tag)
    }

    /// Check the input contract the planner relies on.
    pub fn validate(&self) -> Result<(), PreferenceError> {
        if !self.budget.is_finite() || self.budget <= 0.0 {
            return Err(PreferenceError::InvalidBudget(self.budget));
        }
        if self.duration == 0 || self.duration > MAX_DURATION_DAYS {
            return Err(PreferenceError::InvalidDuration);
        }
        if self.interests.is_empty() {
            return Err(PreferenceError::NoInterests);
        }
        if let Some(season) = &self.season {
            if season.trim().is_empty() {
                return Err(PreferenceError::BlankSeason);
            }
        }
        Ok(())
    }

    /// Pick the strategy from whichever optional fields are populated.
    pub fn strategy(&self) -> Result<PlanningStrategy, PreferenceError> {
        match (&self.origin_city, &self.season) {
            (Some(_), Some(_)) => Err(PreferenceError::AmbiguousStrategy),
            (None, Some(season)) => Ok(PlanningStrategy::SeasonAware {
                season: season.clone(),
            }),
            (origin_city, None) => Ok(PlanningStrategy::OriginAware {
                origin_city: origin_city
                    .clone()
                    .unwrap_or_else(|| DEFAULT_ORIGIN_LABEL.to_string()),
                transport: self.transport,
                airline: self.airline,
            }),
        }
    }
}
