use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;

use crate::services::{distance_service::DistanceService, planning_service::TravelPlanner};

#[derive(serde::Deserialize)]
pub struct QueryParams {
    limit: Option<u16>,
    tag: Option<String>,
}

/*
    /api/destinations
*/
pub async fn get_destinations(
    planner: web::Data<Arc<TravelPlanner>>,
    params: web::Query<QueryParams>,
) -> impl Responder {
    let limit = params.limit.map(usize::from).unwrap_or(usize::MAX);
    let destinations: Vec<_> = planner
        .catalog()
        .destinations()
        .iter()
        .filter(|destination| match &params.tag {
            Some(tag) if !tag.is_empty() => destination.has_tag(tag),
            _ => true,
        })
        .take(limit)
        .collect();

    HttpResponse::Ok().json(destinations)
}

/*
    /api/origins
*/
pub async fn get_origins() -> impl Responder {
    HttpResponse::Ok().json(DistanceService::origin_cities())
}
