//! Pathfinder API: scores the personality questionnaire into Big-Five (OCEAN)
//! trait scores for the downstream cluster classifier.

pub mod config;
pub mod errors;
pub mod personality;
pub mod routes;
