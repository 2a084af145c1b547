pub mod analytics;
pub mod asset;
pub mod cash;
pub mod dashboard;
pub mod document;
pub mod investment;
pub mod settings;
pub mod timeline;
pub mod wealth;
