use crate::models::destination::{Destination, CULTURE_TAG, HISTORY_TAG};
use crate::models::preferences::{PlanningStrategy, UserPreferences};
use rand::seq::SliceRandom;
use rand::Rng;

/// Substituted whenever there is nothing left to pick from.
pub const FILLER_ACTIVITY: &str = "Relaxing Walk";

/// Candidate activities for the traveler's interests, in interest order.
///
/// Falls back to the destination's culture list (and history, for the
/// season-aware strategy), then to [`FILLER_ACTIVITY`].
pub fn build_activity_pool(
    destination: &Destination,
    prefs: &UserPreferences,
    strategy: &PlanningStrategy,
) -> Vec<String> {
    let mut pool: Vec<String> = prefs
        .interests
        .iter()
        .flat_map(|interest| destination.activities_for(interest).iter().cloned())
        .collect();

    if pool.is_empty() {
        pool.extend(destination.activities_for(CULTURE_TAG).iter().cloned());
        if let PlanningStrategy::SeasonAware { .. } = strategy {
            pool.extend(destination.activities_for(HISTORY_TAG).iter().cloned());
        }
        if !pool.is_empty() {
            log::debug!(
                "No activities match interests at {}, using {} fallback activities",
                destination.name,
                pool.len()
            );
        }
    }

    if pool.is_empty() {
        log::debug!("No fallback activities at {}, using filler", destination.name);
        pool.push(FILLER_ACTIVITY.to_string());
    }

    pool
}

/// Picks a bounded activity sequence from a pool using the injected RNG.
pub struct ActivitySelector<'a, R: Rng + ?Sized> {
    rng: &'a mut R,
}

impl<'a, R: Rng + ?Sized> ActivitySelector<'a, R> {
    pub fn new(rng: &'a mut R) -> Self {
        Self { rng }
    }

    /// Up to `count` activities, unique until the pool runs out.
    ///
    /// Shortfalls are padded with random re-picks from the pool, so padded
    /// entries may repeat earlier ones. An empty pool pads with the filler.
    pub fn select(&mut self, pool: &[String], count: usize) -> Vec<String> {
        let mut shuffled: Vec<&String> = pool.iter().collect();
        shuffled.shuffle(&mut *self.rng);

        let mut selected: Vec<String> = Vec::new();
        for activity in shuffled {
            if selected.len() >= count {
                break;
            }
            if !selected.contains(activity) {
                selected.push(activity.clone());
            }
        }

        let unique = selected.len();
        while selected.len() < count {
            let pick = pool
                .choose(&mut *self.rng)
                .cloned()
                .unwrap_or_else(|| FILLER_ACTIVITY.to_string());
            selected.push(pick);
        }

        if unique < count {
            log::debug!(
                "Activity pool exhausted after {} unique picks, padded to {}",
                unique,
                count
            );
        }

        selected
    }
}
