use serde::{Deserialize, Serialize};

pub const NOT_FOUND_STATUS: &str = "NOT_FOUND";
pub const NOT_FOUND_MESSAGE: &str = "The provided Place ID is no longer valid.";

/// Body served on the v1 places route, shaped like `places.googleapis.com`.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceDetailsResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatted_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<PlaceDetailsError>,
}

#[derive(Serialize, Deserialize)]
pub struct PlaceDetailsError {
    pub code: u16,
    pub message: String,
    pub status: String,
}

/// Body served on the legacy details route, and by v1 instances configured
/// for the nested shape.
#[derive(Serialize, Deserialize)]
pub struct LegacyPlaceDetailsResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<LegacyPlaceDetailsResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct LegacyPlaceDetailsResult {
    pub formatted_address: String,
    pub place_id: String,
}
