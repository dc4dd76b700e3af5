use super::{error::ApiError, required, QueryPairs};
use crate::models::state::State as Subdivision;
use crate::AppState;
use axum::{
    extract::{Query, State},
    Json,
};

pub async fn get_states(
    State(app_state): State<AppState>,
    Query(params): Query<QueryPairs>,
) -> Result<Json<Vec<Subdivision>>, ApiError> {
    let country_code = required(&params, "countryCode")
        .ok_or(ApiError::MissingParameter("countryCode required"))?;

    Ok(Json(app_state.location_service.states_of(&country_code)))
}
