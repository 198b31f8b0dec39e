pub mod data;
pub mod models;
pub mod routes;
pub mod services;
