pub mod models;
pub mod rest_api;
pub mod roster;
pub mod stats;
pub mod tracker;
pub mod validation;
