use crate::{
    config::{PlaceStatus, ResponseShape},
    types::{
        app_state::AppState,
        place_details_response::{
            LegacyPlaceDetailsResponse, LegacyPlaceDetailsResult, PlaceDetailsError,
            PlaceDetailsResponse, NOT_FOUND_MESSAGE, NOT_FOUND_STATUS,
        },
    },
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
#[cfg(test)]
use axum_macros::debug_handler;
use tracing::debug;

#[cfg_attr(test, debug_handler)]
pub async fn get_place_details(
    State(state): State<AppState>,
    Path(place_id): Path<String>,
) -> Response {
    // The requested id is logged for visibility but never varies the payload.
    debug!("Serving canned place details for place id: {}", place_id);

    if let PlaceStatus::NotFound = state.place_status {
        return (
            StatusCode::NOT_FOUND,
            Json(PlaceDetailsResponse {
                formatted_address: None,
                id: None,
                error: Some(PlaceDetailsError {
                    code: 404,
                    message: NOT_FOUND_MESSAGE.to_string(),
                    status: NOT_FOUND_STATUS.to_string(),
                }),
            }),
        )
            .into_response();
    }

    match state.shape {
        ResponseShape::Flat => (
            StatusCode::OK,
            Json(PlaceDetailsResponse {
                formatted_address: Some(state.formatted_address),
                id: Some(state.place_id),
                error: None,
            }),
        )
            .into_response(),
        ResponseShape::Nested => (
            StatusCode::OK,
            Json(LegacyPlaceDetailsResponse {
                result: Some(LegacyPlaceDetailsResult {
                    formatted_address: state.formatted_address,
                    place_id: state.place_id,
                }),
                status: None,
            }),
        )
            .into_response(),
    }
}
