pub mod destination;
pub mod health;
pub mod plan;

use actix_web::web;

/// Register every public route on an app or scope.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/api")
                .route(
                    "/destinations",
                    web::get().to(destination::get_destinations),
                )
                .route("/origins", web::get().to(destination::get_origins))
                .route("/plan", web::post().to(plan::create_plan)),
        );
}
