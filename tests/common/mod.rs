#![allow(dead_code)]

use actix_web::{web, App};
use std::sync::Arc;

use travel_guide_api::{
    db::catalog::Catalog,
    routes,
    services::planning_service::{PlannerConfig, TravelPlanner},
};

pub const TEST_SEED: u64 = 2024;

pub fn sample_catalog_json() -> serde_json::Value {
    serde_json::json!({
        "destinations": [
            {
                "id": "kyoto_jp",
                "name": "Kyoto",
                "country": "Japan",
                "avg_daily_cost": 150,
                "best_season_score": {"spring": 10, "summer": 7, "autumn": 9, "winter": 5},
                "tags": ["culture", "history", "gardens", "food", "art"],
                "coords": [10, 50],
                "activities": {
                    "history": ["Fushimi Inari-taisha Shrine", "Nijo Castle"],
                    "culture": ["Traditional Tea Ceremony", "Gion District Stroll"],
                    "food": ["Nishiki Market Exploration"],
                    "gardens": ["Kinkaku-ji (Golden Pavilion)", "Ryoan-ji Rock Garden (Free)"]
                },
                "hotel_reco": "Traditional Ryokan in Gion",
                "local_transport": ["metro", "bus"]
            },
            {
                "id": "rio_br",
                "name": "Rio de Janeiro",
                "country": "Brazil",
                "avg_daily_cost": 90,
                "best_season_score": {"spring": 8, "summer": 10, "autumn": 8, "winter": 7},
                "tags": ["beach", "nightlife", "adventure", "vibrant"],
                "coords": [70, 20],
                "activities": {
                    "adventure": ["Hike Sugarloaf Mountain", "Hang gliding"],
                    "beach": ["Ipanema Beach", "Copacabana Volleyball"],
                    "nightlife": ["Samba in Lapa"],
                    "history": ["Christ the Redeemer Statue"]
                },
                "hotel_reco": "Beachfront hotel in Copacabana"
            },
            {
                "id": "amsterdam_nl",
                "name": "Amsterdam",
                "country": "Netherlands",
                "avg_daily_cost": 120,
                "best_season_score": {"spring": 9, "summer": 9, "autumn": 7, "winter": 4},
                "tags": ["art", "history", "biking", "museums", "food"],
                "coords": [30, 80],
                "activities": {
                    "art": ["Rijksmuseum", "Van Gogh Museum"],
                    "history": ["Anne Frank House", "Westerkerk"],
                    "biking": ["Canal Bike Tour (Free/Cheap)"],
                    "nightlife": ["Brown Cafés pub crawl"]
                },
                "hotel_reco": "Canal-side Boutique Hotel",
                "local_transport": ["bicycle", "tram"]
            }
        ]
    })
}

pub fn catalog_from(document: serde_json::Value) -> Arc<Catalog> {
    Arc::new(Catalog::from_json_str(&document.to_string()).expect("test catalog must be valid"))
}

pub fn seeded_planner(document: serde_json::Value) -> TravelPlanner {
    TravelPlanner::with_config(
        catalog_from(document),
        PlannerConfig {
            seed: Some(TEST_SEED),
            ..PlannerConfig::default()
        },
    )
}

pub struct TestApp {
    pub planner: Arc<TravelPlanner>,
}

impl TestApp {
    pub fn new() -> Self {
        Self {
            planner: Arc::new(seeded_planner(sample_catalog_json())),
        }
    }

    pub fn create_app(
        &self,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(self.planner.clone()))
            .configure(routes::configure)
    }
}
