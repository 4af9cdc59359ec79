use actix_web::{web, HttpResponse, Responder};
use serde::Serialize;
use std::collections::HashMap;
use std::env;
use std::sync::Arc;

use crate::services::planning_service::TravelPlanner;

#[derive(Serialize)]
struct HealthStatus {
    status: String,
    services: HashMap<String, ServiceStatus>,
    environment: String,
    version: String,
}

#[derive(Serialize, Clone)]
struct ServiceStatus {
    status: String,
    details: Option<String>,
}

pub async fn health_check(planner: web::Data<Arc<TravelPlanner>>) -> impl Responder {
    let mut health = HealthStatus {
        status: "ok".to_string(),
        services: HashMap::new(),
        environment: env::var("RUST_ENV").unwrap_or("development".to_string()),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    let catalog_result = check_catalog(&planner);
    health
        .services
        .insert("catalog".to_string(), catalog_result.clone());

    if catalog_result.status != "ok" {
        health.status = "degraded".to_string();
    }

    HttpResponse::Ok().json(health)
}

fn check_catalog(planner: &TravelPlanner) -> ServiceStatus {
    let catalog = planner.catalog();
    if catalog.is_empty() {
        ServiceStatus {
            status: "error".to_string(),
            details: Some("Destination catalog is empty".to_string()),
        }
    } else {
        ServiceStatus {
            status: "ok".to_string(),
            details: Some(format!("{} destinations loaded", catalog.len())),
        }
    }
}
