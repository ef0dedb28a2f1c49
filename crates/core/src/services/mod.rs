pub mod categorization_service;
pub mod health_service;
pub mod import_service;
pub mod level_service;
pub mod projection_service;
pub mod scenario_service;
