use crate::{
    config::PlaceStatus,
    types::{
        app_state::AppState,
        place_details_response::{
            LegacyPlaceDetailsResponse, LegacyPlaceDetailsResult, NOT_FOUND_STATUS,
        },
    },
};
use axum::{
    extract::{RawQuery, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::debug;

pub async fn get_legacy_place_details(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Response {
    debug!("Serving canned legacy place details, query: {:?}", query);

    match state.place_status {
        // The legacy API reports missing places in-band with a 200.
        PlaceStatus::NotFound => (
            StatusCode::OK,
            Json(LegacyPlaceDetailsResponse {
                result: None,
                status: Some(NOT_FOUND_STATUS.to_string()),
            }),
        )
            .into_response(),
        PlaceStatus::Ok => (
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
