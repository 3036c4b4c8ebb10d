use crate::{config::AppConfig, routes::apply_routes, types::app_state::AppState};
use axum::Router;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub fn gen_app(config: AppConfig) -> Router {
    let cors_middleware = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let state = AppState {
        shape: config.variant.response_shape(),
        place_status: config.place_status,
        formatted_address: config.formatted_address,
        place_id: config.place_id,
    };

    apply_routes(Router::new(), config.variant)
        .layer(cors_middleware)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
