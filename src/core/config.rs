use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::shared::constants::{
    DEFAULT_MAP_ATTRIBUTION, DEFAULT_MAP_TILE_URL, DEFAULT_MAP_ZOOM, DEFAULT_STORAGE_KEY,
};

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub geocoding: GeocodingConfig,
    pub storage: StorageConfig,
    pub map: MapConfig,
    pub swagger: SwaggerConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
    /// Heading of the search page
    pub page_title: String,
}

/// Forward-geocoding provider settings.
///
/// The access key only lives in the server process; it is never sent to
/// the page and never logged.
#[derive(Clone)]
pub struct GeocodingConfig {
    pub base_url: String,
    pub access_key: String,
    pub timeout: Option<Duration>,
}

impl std::fmt::Debug for GeocodingConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeocodingConfig")
            .field("base_url", &self.base_url)
            .field("access_key", &"***")
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    File,
    Memory,
}

#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    /// Location of the key-value file (file backend only)
    pub path: PathBuf,
    /// Key under which the location list is stored
    pub key: String,
}

#[derive(Debug, Clone)]
pub struct MapConfig {
    pub zoom: u8,
    pub tile_url: String,
    pub attribution: String,
}

#[derive(Debug, Clone)]
pub struct SwaggerConfig {
    pub username: Option<String>,
    pub password: Option<String>,
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if exists, ignore if not found (optional for production)
        if let Err(e) = dotenvy::dotenv() {
            if !e.to_string().contains("not found") {
                eprintln!("Warning: Error loading .env file: {}", e);
            }
        }

        Ok(Config {
            app: AppConfig::from_env()?,
            geocoding: GeocodingConfig::from_env()?,
            storage: StorageConfig::from_env()?,
            map: MapConfig::from_env()?,
            swagger: SwaggerConfig::from_env()?,
        })
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|e| format!("Invalid PORT: {}", e))?;

        // Parse CORS allowed origins from comma-separated string
        let cors_allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let page_title =
            env::var("PAGE_TITLE").unwrap_or_else(|_| "Location Search".to_string());

        Ok(Self {
            host,
            port,
            cors_allowed_origins,
            page_title,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl GeocodingConfig {
    const DEFAULT_BASE_URL: &'static str = "http://api.positionstack.com/v1";

    pub fn from_env() -> Result<Self, String> {
        let access_key = env::var("POSITIONSTACK_ACCESS_KEY")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| {
                "POSITIONSTACK_ACCESS_KEY environment variable is required".to_string()
            })?;

        let base_url = env::var("POSITIONSTACK_BASE_URL")
            .unwrap_or_else(|_| Self::DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        // No timeout unless explicitly configured
        let timeout = match env::var("GEOCODING_TIMEOUT_SECS") {
            Ok(raw) if !raw.trim().is_empty() => Some(Duration::from_secs(
                raw.trim()
                    .parse::<u64>()
                    .map_err(|_| "GEOCODING_TIMEOUT_SECS must be a valid number".to_string())?,
            )),
            _ => None,
        };

        Ok(Self {
            base_url,
            access_key,
            timeout,
        })
    }
}

impl StorageConfig {
    const DEFAULT_PATH: &'static str = "data/storage.json";

    pub fn from_env() -> Result<Self, String> {
        let backend = match env::var("STORAGE_BACKEND")
            .unwrap_or_else(|_| "file".to_string())
            .to_lowercase()
            .as_str()
        {
            "file" => StorageBackend::File,
            "memory" => StorageBackend::Memory,
            other => {
                return Err(format!(
                    "STORAGE_BACKEND must be 'file' or 'memory', got '{}'",
                    other
                ))
            }
        };

        let path = PathBuf::from(
            env::var("STORAGE_PATH").unwrap_or_else(|_| Self::DEFAULT_PATH.to_string()),
        );

        let key = env::var("STORAGE_KEY")
            .ok()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_STORAGE_KEY.to_string());

        Ok(Self { backend, path, key })
    }
}

impl MapConfig {
    pub fn from_env() -> Result<Self, String> {
        let zoom = env::var("MAP_ZOOM")
            .unwrap_or_else(|_| DEFAULT_MAP_ZOOM.to_string())
            .parse::<u8>()
            .map_err(|_| "MAP_ZOOM must be a valid number".to_string())?;

        if zoom > 19 {
            return Err("MAP_ZOOM must be between 0 and 19".to_string());
        }

        let tile_url =
            env::var("MAP_TILE_URL").unwrap_or_else(|_| DEFAULT_MAP_TILE_URL.to_string());
        let attribution =
            env::var("MAP_ATTRIBUTION").unwrap_or_else(|_| DEFAULT_MAP_ATTRIBUTION.to_string());

        Ok(Self {
            zoom,
            tile_url,
            attribution,
        })
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            zoom: DEFAULT_MAP_ZOOM,
            tile_url: DEFAULT_MAP_TILE_URL.to_string(),
            attribution: DEFAULT_MAP_ATTRIBUTION.to_string(),
        }
    }
}

impl SwaggerConfig {
    pub fn from_env() -> Result<Self, String> {
        // Only use credentials if they are non-empty
        let username = env::var("SWAGGER_USERNAME").ok().filter(|s| !s.is_empty());
        let password = env::var("SWAGGER_PASSWORD").ok().filter(|s| !s.is_empty());
        let title =
            env::var("SWAGGER_TITLE").unwrap_or_else(|_| "Location Search API".to_string());
        let version = env::var("SWAGGER_VERSION").unwrap_or_else(|_| "0.1.0".to_string());
        let description = env::var("SWAGGER_DESCRIPTION")
            .unwrap_or_else(|_| "Forward geocoding search with a persisted location list".to_string());

        Ok(Self {
            username,
            password,
            title,
            version,
            description,
        })
    }

    /// Returns credentials in "username:password" format if auth is enabled
    pub fn credentials(&self) -> Option<String> {
        match (&self.username, &self.password) {
            (Some(user), Some(pass)) => Some(format!("{}:{}", user, pass)),
            _ => None,
        }
    }
}
