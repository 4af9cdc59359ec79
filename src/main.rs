use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;

use travel_guide_api::{
    config::AppConfig, db, routes, services::planning_service::TravelPlanner,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    println!("Application starting...");

    if cfg!(debug_assertions) {
        dotenv::dotenv().ok();
    } else {
        println!("Release mode");
    }

    env_logger::init_from_env(Env::default().default_filter_or("info"));
    println!("Logger initialized");

    let config = AppConfig::from_env();

    let catalog = db::catalog::load_catalog(&config.catalog_path).map_err(|e| {
        eprintln!("FATAL: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
    })?;

    if let Some(seed) = config.planner_seed {
        println!("Planner seeded with {}", seed);
    }
    let planner = Arc::new(TravelPlanner::with_config(catalog, config.planner_config()));

    println!("Attempting to bind to {}:{}", config.host, config.port);
    println!("Starting HTTP server...");

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .app_data(web::Data::new(planner.clone()))
            .configure(routes::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
