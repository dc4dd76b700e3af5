use crate::models::country::Country;
use crate::AppState;
use axum::{extract::State, Json};

pub async fn get_countries(State(app_state): State<AppState>) -> Json<Vec<Country>> {
    Json(
        app_state
            .location_service
            .countries(&app_state.config.allowed_countries),
    )
}
