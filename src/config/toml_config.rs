use crate::core::directory::{seed_bikes, BikeDirectory};
use crate::core::{BikeId, BikeRecord, BikeStatus};
use crate::utils::error::{AppError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;
use std::sync::LazyLock;
use url::Url;

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").unwrap());

pub const DEFAULT_BIND: &str = "127.0.0.1:3000";
pub const DEFAULT_BOOK_URL: &str = "https://book.oahu.bike";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub booking: BookingConfig,
    /// Fixture bikes. When absent the built-in seed list is used.
    pub bikes: Option<Vec<BikeFixture>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingConfig {
    #[serde(default = "default_book_url")]
    pub base_url: String,
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            base_url: default_book_url(),
        }
    }
}

fn default_bind() -> String {
    DEFAULT_BIND.to_string()
}

fn default_book_url() -> String {
    DEFAULT_BOOK_URL.to_string()
}

/// Ids may be written as `id = "7"` or `id = 7` in TOML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FixtureId {
    Text(String),
    Number(i64),
}

impl From<FixtureId> for BikeId {
    fn from(value: FixtureId) -> Self {
        match value {
            FixtureId::Text(text) => BikeId::from(text),
            FixtureId::Number(number) => BikeId::from(number),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BikeFixture {
    pub id: FixtureId,
    pub status: BikeStatus,
    pub hotel_slug: Option<String>,
    pub model: String,
    pub location_name: String,
}

impl From<BikeFixture> for BikeRecord {
    fn from(fixture: BikeFixture) -> Self {
        BikeRecord {
            id: fixture.id.into(),
            status: fixture.status,
            hotel_slug: fixture.hotel_slug.filter(|slug| !slug.is_empty()),
            model: fixture.model,
            location_name: fixture.location_name,
        }
    }
}

impl AppConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// Parses TOML after replacing `${VAR}` placeholders from the environment.
    /// Unset variables are left verbatim so validation reports them.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    fn substitute_env_vars(content: &str) -> Result<String> {
        let result = PLACEHOLDER.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn bind_addr(&self) -> Result<SocketAddr> {
        validation::validate_socket_addr("server.bind", &self.server.bind)
    }

    pub fn booking_url(&self) -> Result<Url> {
        validation::validate_url("booking.base_url", &self.booking.base_url)?;
        Ok(Url::parse(&self.booking.base_url)?)
    }

    pub fn bike_records(&self) -> Vec<BikeRecord> {
        match &self.bikes {
            Some(fixtures) => fixtures.iter().cloned().map(BikeRecord::from).collect(),
            None => seed_bikes(),
        }
    }

    pub fn build_directory(&self) -> Result<BikeDirectory> {
        BikeDirectory::new(self.bike_records())
    }

    fn validate_bikes(&self) -> Result<()> {
        let records = self.bike_records();

        for (index, bike) in records.iter().enumerate() {
            validation::validate_non_empty_string(&format!("bikes[{}].id", index), bike.id.as_str())?;
            validation::validate_non_empty_string(&format!("bikes[{}].model", index), &bike.model)?;
            validation::validate_non_empty_string(
                &format!("bikes[{}].location_name", index),
                &bike.location_name,
            )?;
            if let Some(slug) = &bike.hotel_slug {
                validation::validate_slug(&format!("bikes[{}].hotel_slug", index), slug)?;
            }
        }

        if let Some(id) = validation::find_duplicate(records.iter().map(|r| r.id.as_str())) {
            return Err(AppError::DuplicateBikeId { id: id.to_string() });
        }

        Ok(())
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        self.bind_addr()?;
        validation::validate_url("booking.base_url", &self.booking.base_url)?;
        self.validate_bikes()?;

        tracing::debug!("Configuration validation passed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_without_file() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.bind_addr().unwrap().port(), 3000);
        assert_eq!(config.booking_url().unwrap().as_str(), "https://book.oahu.bike/");
        assert_eq!(config.bike_records().len(), 6);
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = AppConfig::from_toml_str("").unwrap();
        assert_eq!(config.server.bind, DEFAULT_BIND);
        assert_eq!(config.booking.base_url, DEFAULT_BOOK_URL);
        assert!(config.bikes.is_none());
    }

    #[test]
    fn test_parse_fixture_bikes() {
        let toml_content = r#"
[server]
bind = "0.0.0.0:8080"

[booking]
base_url = "https://book.example.com/items"

[[bikes]]
id = 7
status = "available"
model = "Cruiser"
location_name = "Ala Moana Beach Park"

[[bikes]]
id = "8"
status = "rented"
hotel_slug = "monarch"
model = "RadExpand 5"
location_name = "Monarch Valet Area"
"#;

        let config = AppConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_ok());

        let directory = config.build_directory().unwrap();
        assert_eq!(directory.len(), 2);
        assert!(directory.is_available(7));
        assert!(directory.get_by_id("7").unwrap().hotel_slug.is_none());
        assert_eq!(
            directory.get_by_id("8").unwrap().hotel_slug.as_deref(),
            Some("monarch")
        );
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("BIKE_QR_TEST_BOOK_URL", "https://book.test.example");

        let config = AppConfig::from_toml_str(
            r#"
[booking]
base_url = "${BIKE_QR_TEST_BOOK_URL}"
"#,
        )
        .unwrap();
        assert_eq!(config.booking.base_url, "https://book.test.example");

        std::env::remove_var("BIKE_QR_TEST_BOOK_URL");
    }

    #[test]
    fn test_unset_placeholder_fails_validation() {
        let config = AppConfig::from_toml_str(
            r#"
[booking]
base_url = "${BIKE_QR_TEST_SURELY_UNSET}"
"#,
        )
        .unwrap();
        assert_eq!(config.booking.base_url, "${BIKE_QR_TEST_SURELY_UNSET}");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_bad_slug_rejected() {
        let config = AppConfig::from_toml_str(
            r#"
[[bikes]]
id = "1"
status = "rented"
hotel_slug = "../etc"
model = "RadExpand 5"
location_name = "Lobby"
"#,
        )
        .unwrap();
        match config.validate() {
            Err(AppError::InvalidConfigValueError { field, .. }) => {
                assert_eq!(field, "bikes[0].hotel_slug")
            }
            other => panic!("expected invalid slug, got {:?}", other),
        }
    }

    #[test]
    fn test_duplicate_fixture_ids_rejected() {
        let config = AppConfig::from_toml_str(
            r#"
[[bikes]]
id = 1
status = "available"
model = "A"
location_name = "Dock"

[[bikes]]
id = "1"
status = "rented"
model = "B"
location_name = "Dock"
"#,
        )
        .unwrap();
        assert!(matches!(
            config.validate(),
            Err(AppError::DuplicateBikeId { .. })
        ));
        assert!(config.build_directory().is_err());
    }

    #[test]
    fn test_unknown_status_is_parse_error() {
        let result = AppConfig::from_toml_str(
            r#"
[[bikes]]
id = "1"
status = "stolen"
model = "A"
location_name = "Dock"
"#,
        );
        assert!(matches!(result, Err(AppError::TomlParseError(_))));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[server]\nbind = \"127.0.0.1:4100\"\n")
            .unwrap();

        let config = AppConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.bind_addr().unwrap().port(), 4100);
    }

    #[test]
    fn test_example_config_parses() {
        let config = AppConfig::from_toml_str(include_str!("../../bike-qr.example.toml")).unwrap();

        assert!(config.validate().is_ok());
        assert_eq!(config.booking.base_url, DEFAULT_BOOK_URL);
        let directory = config.build_directory().unwrap();
        assert_eq!(directory.len(), 3);
        assert!(directory.is_available(7));
    }

    #[test]
    fn test_empty_hotel_slug_fixture_means_no_hotel() {
        let config = AppConfig::from_toml_str(
            r#"
[[bikes]]
id = "4"
status = "rented"
hotel_slug = ""
model = "RadExpand 5"
location_name = "McCully Recreation Center"
"#,
        )
        .unwrap();
        assert!(config.validate().is_ok());

        let directory = config.build_directory().unwrap();
        assert!(directory.get_by_id("4").unwrap().hotel_slug.is_none());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = AppConfig::from_file("/nonexistent/bike-qr.toml");
        assert!(matches!(result, Err(AppError::IoError(_))));
    }
}
