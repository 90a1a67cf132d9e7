//! HTTP server module for the analysis backend.
//!
//! This module provides an axum-based HTTP server that exposes the watering
//! analyzer as a stateless REST API. It reuses the service layer and DTOs
//! from the core library; it owns no storage, so the web and mobile clients
//! supply the event history with each request.

pub mod handlers;

pub mod router;

pub mod state;

pub mod error;

pub mod dto;

pub use router::create_router;

pub use state::AppState;
