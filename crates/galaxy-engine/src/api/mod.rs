pub mod config;
pub mod controller;
pub mod types;
pub mod viewer;
