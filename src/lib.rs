//! # Leafbook Analysis Backend
//!
//! Watering-schedule analysis engine for the Leafbook plant-care journal.
//!
//! This crate infers whether a user's real watering cadence has drifted from
//! their configured schedule. Given the chronological history of watering
//! events for a plant, it computes the intervals between consecutive
//! waterings, discards anomalous gaps (vacations, missed waterings) with an
//! IQR-based outlier filter, and recommends a new interval together with a
//! 0-100 confidence score. The optional HTTP layer exposes the analysis as a
//! stateless REST endpoint for the web and mobile clients.
//!
//! ## Features
//!
//! - **Interval inference**: robust median of observed watering intervals
//! - **Outlier rejection**: 1.5×IQR filtering with quartiles computed by
//!   half-splitting (deterministic, no interpolation)
//! - **Confidence scoring**: consistency (inverse standard deviation) plus a
//!   sample-size bonus, clamped to 0-100
//! - **Suggestion drafting**: value objects ready for the caller to persist
//! - **HTTP API**: optional axum endpoint behind the `http-server` feature
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: Data Transfer Objects (DTOs) and identifier newtypes
//! - [`models`]: domain value types (events, results, policy knobs)
//! - [`services`]: analysis logic and order-statistic helpers
//! - [`config`]: environment-based configuration
//! - [`http`]: axum-based HTTP server and request handlers
//!
//! The analyzer itself is a pure, synchronous function: no I/O, no shared
//! state, no wall-clock reads. Everything upstream (fetching events from the
//! database) and downstream (persisting suggestions) belongs to the caller.

pub mod api;

pub mod config;
pub mod error;
pub mod models;

pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
