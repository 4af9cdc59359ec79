use crate::{
    models::{plan_response::PlanResponse, preferences::UserPreferences},
    services::planning_service::TravelPlanner,
};
use actix_web::{web, HttpResponse, Responder};
use serde_json::json;
use std::sync::Arc;

/*
    /api/plan
*/
pub async fn create_plan(
    planner: web::Data<Arc<TravelPlanner>>,
    input: web::Json<UserPreferences>,
) -> impl Responder {
    let prefs = input.into_inner();
    log::debug!("Planning request: {:?}", prefs);

    match planner.plan(&prefs) {
        Ok(result) => HttpResponse::Ok().json(PlanResponse::from(result)),
        Err(err) => {
            log::warn!("Rejected planning request: {}", err);
            HttpResponse::BadRequest().json(json!({ "error": err.to_string() }))
        }
    }
}
