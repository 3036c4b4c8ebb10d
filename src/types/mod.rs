pub mod app_state;
pub mod place_details_response;
