use crate::config::{PlaceStatus, ResponseShape};

#[derive(Clone)]
pub struct AppState {
    pub shape: ResponseShape,
    pub place_status: PlaceStatus,
    pub formatted_address: String,
    pub place_id: String,
}
