use crate::models::country::CountryHierarchy;
use crate::AppState;
use axum::{extract::State, Json};

/// Full nested export of the allowed countries. Walks the whole allowed
/// table on every call.
pub async fn get_all(State(app_state): State<AppState>) -> Json<Vec<CountryHierarchy>> {
    Json(
        app_state
            .location_service
            .hierarchy(&app_state.config.allowed_countries),
    )
}
