//! User Dashboard
//!
//! Browser CRUD dashboard for user records served by a remote REST API.

pub mod api;
pub mod app;
pub mod components;
pub mod config;
pub mod controller;
pub mod logging;
pub mod models;
pub mod store;
