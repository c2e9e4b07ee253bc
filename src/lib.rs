pub mod app;
pub mod config;
pub mod db;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod render;
pub mod services;
pub mod templates_structs;
