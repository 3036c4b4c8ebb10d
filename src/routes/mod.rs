use axum::{routing::get, Router};

use crate::{config::MockVariant, types::app_state::AppState};

mod get_legacy_place_details;
mod get_place_details;
mod health;

// Exactly one place-details route is mounted per instance; the other path
// family stays unrouted and gets the framework's 404.
pub fn apply_routes(app: Router<AppState>, variant: MockVariant) -> Router<AppState> {
    let app = app.route("/health", get(health::check));

    match variant {
        MockVariant::V1 | MockVariant::V1Nested => app.route(
            "/v1/places/:place_id",
            get(get_place_details::get_place_details),
        ),
        MockVariant::Legacy => app.route(
            "/maps/api/place/details/json",
            get(get_legacy_place_details::get_legacy_place_details),
        ),
    }
}
