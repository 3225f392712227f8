pub mod api;
pub mod cache;
pub mod configuration;
pub mod domain;
pub mod startup;
pub mod stores;
