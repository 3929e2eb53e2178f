pub mod app;
pub mod config;
pub mod pages;
pub mod routes;
pub mod types;
pub mod utils;
