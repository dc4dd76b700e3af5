use super::{error::ApiError, required, QueryPairs};
use crate::models::city::City;
use crate::AppState;
use axum::{
    extract::{Query, State},
    Json,
};

pub async fn get_cities(
    State(app_state): State<AppState>,
    Query(params): Query<QueryPairs>,
) -> Result<Json<Vec<City>>, ApiError> {
    let (Some(country_code), Some(state_code)) = (
        required(&params, "countryCode"),
        required(&params, "stateCode"),
    ) else {
        return Err(ApiError::MissingParameter(
            "countryCode and stateCode required",
        ));
    };

    Ok(Json(
        app_state
            .location_service
            .cities_of(&country_code, &state_code),
    ))
}
