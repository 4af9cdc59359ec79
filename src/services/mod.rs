pub mod activity_selector;
pub mod distance_service;
pub mod itinerary_generation_service;
pub mod planning_service;
pub mod search_scoring;
