use std::env;
use std::fmt;

pub const DEFAULT_FORMATTED_ADDRESS: &str = "1 Hello Street Vic Australia 3123";
pub const DEFAULT_PLACE_ID: &str = "place_id_123";

/// Which of the historical mock endpoints this instance stands up.
///
/// The v1 route was served with two different body shapes over time, so the
/// shape is part of the variant rather than a property of the route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MockVariant {
    /// `GET /v1/places/:place_id` answering with the flat v1 body.
    V1,
    /// `GET /v1/places/:place_id` answering with the nested legacy body.
    V1Nested,
    /// `GET /maps/api/place/details/json` answering with the nested legacy body.
    Legacy,
}

/// Body shape of a successful place-details response.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResponseShape {
    Flat,
    Nested,
}

/// Lookup outcome the instance simulates for every place id it is asked for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaceStatus {
    Ok,
    NotFound,
}

impl MockVariant {
    pub fn parse(value: &str) -> Result<Self, ConfigError> {
        match value {
            "v1" => Ok(MockVariant::V1),
            "v1-nested" => Ok(MockVariant::V1Nested),
            "legacy" => Ok(MockVariant::Legacy),
            _ => Err(ConfigError::UnknownVariant(value.to_string())),
        }
    }

    pub fn response_shape(&self) -> ResponseShape {
        match self {
            MockVariant::V1 => ResponseShape::Flat,
            MockVariant::V1Nested | MockVariant::Legacy => ResponseShape::Nested,
        }
    }
}

impl PlaceStatus {
    pub fn parse(value: &str) -> Result<Self, ConfigError> {
        match value {
            "ok" => Ok(PlaceStatus::Ok),
            "not-found" => Ok(PlaceStatus::NotFound),
            _ => Err(ConfigError::UnknownPlaceStatus(value.to_string())),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    UnknownVariant(String),
    UnknownPlaceStatus(String),
    InvalidPort(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConfigError::UnknownVariant(value) => write!(
                f,
                "Unknown MOCK_VARIANT \"{}\", expected one of: v1, v1-nested, legacy",
                value
            ),
            ConfigError::UnknownPlaceStatus(value) => write!(
                f,
                "Unknown MOCK_PLACE_STATUS \"{}\", expected one of: ok, not-found",
                value
            ),
            ConfigError::InvalidPort(value) => {
                write!(f, "PORT \"{}\" is not a valid port number", value)
            }
        }
    }
}

/// Instance configuration, resolved once at startup.
///
/// Environment variables:
/// - `HOST`: bind address (default `0.0.0.0`)
/// - `PORT`: listen port (default `5000`)
/// - `MOCK_VARIANT`: `v1`, `v1-nested` or `legacy` (default `v1`)
/// - `MOCK_PLACE_STATUS`: `ok` or `not-found` (default `ok`)
/// - `MOCK_FORMATTED_ADDRESS`: address literal served in every response
/// - `MOCK_PLACE_ID`: place id literal served in every response
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub variant: MockVariant,
    pub place_status: PlaceStatus,
    pub formatted_address: String,
    pub place_id: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match env::var("PORT") {
            Ok(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            Err(_) => 5000,
        };

        let variant = match env::var("MOCK_VARIANT") {
            Ok(raw) => MockVariant::parse(&raw)?,
            Err(_) => MockVariant::V1,
        };

        let place_status = match env::var("MOCK_PLACE_STATUS") {
            Ok(raw) => PlaceStatus::parse(&raw)?,
            Err(_) => PlaceStatus::Ok,
        };

        Ok(AppConfig {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port,
            variant,
            place_status,
            formatted_address: env::var("MOCK_FORMATTED_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_FORMATTED_ADDRESS.to_string()),
            place_id: env::var("MOCK_PLACE_ID").unwrap_or_else(|_| DEFAULT_PLACE_ID.to_string()),
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            host: "0.0.0.0".to_string(),
            port: 5000,
            variant: MockVariant::V1,
            place_status: PlaceStatus::Ok,
            formatted_address: DEFAULT_FORMATTED_ADDRESS.to_string(),
            place_id: DEFAULT_PLACE_ID.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values() {
        let config = AppConfig::default();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 5000);
        assert_eq!(config.variant, MockVariant::V1);
        assert_eq!(config.place_status, PlaceStatus::Ok);
        assert_eq!(config.formatted_address, "1 Hello Street Vic Australia 3123");
        assert_eq!(config.place_id, "place_id_123");
    }

    #[test]
    fn addr_formatting() {
        let config = AppConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
            ..Default::default()
        };

        assert_eq!(config.addr(), "127.0.0.1:8080");
    }

    #[test]
    fn parses_every_variant() {
        assert_eq!(MockVariant::parse("v1").unwrap(), MockVariant::V1);
        assert_eq!(MockVariant::parse("v1-nested").unwrap(), MockVariant::V1Nested);
        assert_eq!(MockVariant::parse("legacy").unwrap(), MockVariant::Legacy);
    }

    #[test]
    fn rejects_unknown_variant() {
        let err = MockVariant::parse("v2").unwrap_err();

        assert!(err.to_string().contains("v2"));
        assert!(err.to_string().contains("MOCK_VARIANT"));
    }

    #[test]
    fn parses_place_status() {
        assert_eq!(PlaceStatus::parse("ok").unwrap(), PlaceStatus::Ok);
        assert_eq!(PlaceStatus::parse("not-found").unwrap(), PlaceStatus::NotFound);
        assert!(PlaceStatus::parse("gone").is_err());
    }

    #[test]
    fn shape_follows_variant() {
        assert_eq!(MockVariant::V1.response_shape(), ResponseShape::Flat);
        assert_eq!(MockVariant::V1Nested.response_shape(), ResponseShape::Nested);
        assert_eq!(MockVariant::Legacy.response_shape(), ResponseShape::Nested);
    }
}
