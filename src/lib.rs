//! Location API - read-only countries, states and cities service
//!
//! This library provides the lookup service, HTTP handlers and router
//! for location-api, which serves a static geographic hierarchy filtered
//! to an allow-list of countries.

pub mod api;
pub mod cli;
pub mod config;
pub mod initialization;
pub mod models;
pub mod services;
pub mod utils;

use crate::{
    api::{cities, countries, health, hierarchy, states},
    config::Config,
    services::location::LocationService,
};
use axum::routing::{get, Router};
use std::sync::Arc;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub location_service: Arc<LocationService>,
}

impl AppState {
    pub fn new(config: Config, location_service: LocationService) -> Self {
        Self {
            config: Arc::new(config),
            location_service: Arc::new(location_service),
        }
    }
}

pub fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(health::health))
        .route("/health", get(health::health))
        .route("/countries", get(countries::get_countries))
        .route("/states", get(states::get_states))
        .route("/cities", get(cities::get_cities))
        .route("/all", get(hierarchy::get_all))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
