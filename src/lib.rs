//! hello-service: HTTP greeting service backed by a MongoDB connection
//! established at startup.
pub mod config;
pub mod error;
pub mod handlers;
pub mod observability;
pub mod services;
pub mod startup;
