use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Point in the abstract planning plane. Not geographic lat/lng.
pub type Point = (f64, f64);

pub const CULTURE_TAG: &str = "culture";
pub const HISTORY_TAG: &str = "history";

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Destination {
    pub id: String,
    pub name: String,
    pub country: String,
    #[serde(rename = "avg_daily_cost")]
    pub daily_cost: f64,
    pub tags: BTreeSet<String>,
    #[serde(rename = "coords")]
    pub coordinates: Point,
    #[serde(rename = "activities")]
    pub activities_by_tag: HashMap<String, Vec<String>>,
    #[serde(rename = "hotel_reco")]
    pub hotel_recommendation: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub local_transport: Vec<String>,
    #[serde(
        rename = "best_season_score",
        default,
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub season_scores: BTreeMap<String, u8>,
}

impl Destination {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    /// Activities listed under `tag`, empty when the tag has none.
    pub fn activities_for(&self, tag: &str) -> &[String] {
        self.activities_by_tag
            .get(tag)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// First transport label, title-cased for display.
    pub fn primary_transport(&self) -> Option<String> {
        self.local_transport.first().map(|mode| title_case(mode))
    }
}

fn title_case(label: &str) -> String {
    label
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
