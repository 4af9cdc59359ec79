pub mod destination;
pub mod plan_response;
pub mod preferences;
