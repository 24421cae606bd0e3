use crate::error::{config_error, env_error, NormalizerResult};
use crate::schema::SheetSchema;
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;
use std::time::Duration;
use url::Url;

/// Default host serving the two workbooks
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5173";

/// Default resource path of the payroll workbook
pub const DEFAULT_PAYROLL_PATH: &str = "/payroll.xlsx";

/// Default resource path of the appointment workbook
pub const DEFAULT_APPOINTMENTS_PATH: &str = "/appointments.xlsx";

/// Default schema override file
pub const SCHEMA_FILE: &str = "config/schema.toml";

/// Main configuration structure for the normalizer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL the workbook resources are fetched from
    pub base_url: String,
    /// Resource path of the payroll workbook
    pub payroll_path: String,
    /// Resource path of the appointment workbook
    pub appointments_path: String,
    /// Timeout for each workbook fetch, in seconds
    pub fetch_timeout_secs: u64,
    /// Workbook layout
    pub schema: SheetSchema,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            payroll_path: DEFAULT_PAYROLL_PATH.to_string(),
            appointments_path: DEFAULT_APPOINTMENTS_PATH.to_string(),
            fetch_timeout_secs: 30,
            schema: SheetSchema::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment and the schema file
    pub fn load() -> NormalizerResult<Self> {
        // Load .env file if it exists
        dotenv().ok();

        let base_url =
            env::var("NORMALIZER_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let payroll_path =
            env::var("PAYROLL_PATH").unwrap_or_else(|_| DEFAULT_PAYROLL_PATH.to_string());
        let appointments_path =
            env::var("APPOINTMENTS_PATH").unwrap_or_else(|_| DEFAULT_APPOINTMENTS_PATH.to_string());

        let fetch_timeout_secs = match env::var("FETCH_TIMEOUT_SECS") {
            Ok(value) => value
                .parse::<u64>()
                .map_err(|_| env_error("FETCH_TIMEOUT_SECS"))?,
            Err(_) => 30,
        };

        let schema = Self::load_schema(Path::new(SCHEMA_FILE))?;

        let config = Config {
            base_url,
            payroll_path,
            appointments_path,
            fetch_timeout_secs,
            schema,
        };

        // Fail early on a malformed base URL
        config.payroll_url()?;
        Ok(config)
    }

    /// Read schema overrides from a TOML file, defaults when the file is absent
    pub fn load_schema(path: &Path) -> NormalizerResult<SheetSchema> {
        if !path.exists() {
            return Ok(SheetSchema::default());
        }
        let content = fs::read_to_string(path)?;
        let schema = toml::from_str::<SheetSchema>(&content)?;
        Ok(schema)
    }

    /// Full URL of the payroll workbook
    pub fn payroll_url(&self) -> NormalizerResult<Url> {
        self.resource_url(&self.payroll_path)
    }

    /// Full URL of the appointment workbook
    pub fn appointments_url(&self) -> NormalizerResult<Url> {
        self.resource_url(&self.appointments_path)
    }

    fn resource_url(&self, path: &str) -> NormalizerResult<Url> {
        let base = Url::parse(&self.base_url)
            .map_err(|e| config_error(&format!("Invalid base URL '{}': {}", self.base_url, e)))?;
        base.join(path)
            .map_err(|e| config_error(&format!("Invalid resource path '{}': {}", path, e)))
    }

    /// Fetch timeout as a duration
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }
}
