pub mod auth_service;
pub mod course_service;
pub mod dashboard_service;
