pub mod analytics_service;
pub mod sync_service;
pub mod timeline_service;
