use sqlx::postgres::PgConnectOptions;
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub database: DatabaseConfig,
    pub sync: SyncConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub user: String,
    pub password: Option<String>,
    pub host: String,
    pub port: u16,
    pub name: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout_secs: u64,
    pub idle_timeout_secs: u64,
    pub max_lifetime_secs: u64,
}

/// Settings for the province synchronization routine
#[derive(Debug, Clone)]
pub struct SyncConfig {
    /// Remote endpoint returning the JSON province list
    pub source_url: String,
    /// Run delete+insert inside one transaction instead of statement by statement
    pub transactional: bool,
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
            database: DatabaseConfig::from_env()?,
            sync: SyncConfig::from_env()?,
        })
    }
}

impl AppConfig {
    const DEFAULT_HOST: &'static str = "0.0.0.0";
    const DEFAULT_PORT: u16 = 8080;

    pub fn from_env() -> Result<Self, String> {
        let host = env::var("HOST").unwrap_or_else(|_| Self::DEFAULT_HOST.to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| Self::DEFAULT_PORT.to_string())
            .parse::<u16>()
            .map_err(|e| format!("Invalid PORT: {}", e))?;

        Ok(Self { host, port })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl DatabaseConfig {
    // Default values for database connection pool (conservative defaults for small-medium apps)
    const DEFAULT_MAX_CONNECTIONS: u32 = 10;
    const DEFAULT_MIN_CONNECTIONS: u32 = 1;
    const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 5;
    const DEFAULT_IDLE_TIMEOUT_SECS: u64 = 600; // 10 minutes
    const DEFAULT_MAX_LIFETIME_SECS: u64 = 1800; // 30 minutes

    pub fn from_env() -> Result<Self, String> {
        let user = required("DB_USER")?;
        let password = env::var("DB_PASSWORD").ok().filter(|s| !s.is_empty());
        let host = required("DB_HOST")?;
        let port = required("DB_PORT")?
            .parse::<u16>()
            .map_err(|e| format!("Invalid DB_PORT: {}", e))?;
        let name = required("DB_NAME")?;

        let max_connections = env::var("DB_MAX_CONNECTIONS")
            .unwrap_or_else(|_| Self::DEFAULT_MAX_CONNECTIONS.to_string())
            .parse::<u32>()
            .map_err(|_| "DB_MAX_CONNECTIONS must be a valid number".to_string())?;

        let min_connections = env::var("DB_MIN_CONNECTIONS")
            .unwrap_or_else(|_| Self::DEFAULT_MIN_CONNECTIONS.to_string())
            .parse::<u32>()
            .map_err(|_| "DB_MIN_CONNECTIONS must be a valid number".to_string())?;

        let acquire_timeout_secs = env::var("DB_ACQUIRE_TIMEOUT_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_ACQUIRE_TIMEOUT_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "DB_ACQUIRE_TIMEOUT_SECS must be a valid number".to_string())?;

        let idle_timeout_secs = env::var("DB_IDLE_TIMEOUT_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_IDLE_TIMEOUT_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "DB_IDLE_TIMEOUT_SECS must be a valid number".to_string())?;

        let max_lifetime_secs = env::var("DB_MAX_LIFETIME_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_MAX_LIFETIME_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "DB_MAX_LIFETIME_SECS must be a valid number".to_string())?;

        Ok(Self {
            user,
            password,
            host,
            port,
            name,
            max_connections,
            min_connections,
            acquire_timeout_secs,
            idle_timeout_secs,
            max_lifetime_secs,
        })
    }

    /// Build connect options from the individual parts; credentials are
    /// passed as-is, never spliced into a URL
    pub fn connect_options(&self) -> PgConnectOptions {
        let options = PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .database(&self.name);

        match &self.password {
            Some(password) => options.password(password),
            None => options,
        }
    }

    /// Connection target without credentials, safe for logs
    pub fn redacted_target(&self) -> String {
        format!("{}:{}/{}", self.host, self.port, self.name)
    }
}

impl SyncConfig {
    pub const DEFAULT_SOURCE_URL: &'static str =
        "https://emsifa.github.io/api-wilayah-indonesia/api/provinces.json";

    pub fn from_env() -> Result<Self, String> {
        let source_url = env::var("PROVINCE_SOURCE_URL")
            .ok()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| Self::DEFAULT_SOURCE_URL.to_string());

        let transactional = transactional_flag(env::var("PROVINCE_SYNC_TRANSACTIONAL").ok())?;

        Ok(Self {
            source_url,
            transactional,
        })
    }
}

fn required(key: &str) -> Result<String, String> {
    env::var(key)
        .ok()
        .filter(|s| !s.is_empty())
        .ok_or_else(|| format!("{} environment variable is required", key))
}

/// Unset or blank means the default (non-transactional)
fn transactional_flag(raw: Option<String>) -> Result<bool, String> {
    match raw.filter(|s| !s.trim().is_empty()) {
        Some(raw) => parse_bool(&raw).ok_or_else(|| {
            "PROVINCE_SYNC_TRANSACTIONAL must be true/false, 1/0 or yes/no".to_string()
        }),
        None => Ok(false),
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn database_config(password: Option<&str>) -> DatabaseConfig {
        DatabaseConfig {
            user: "wilayah".to_string(),
            password: password.map(String::from),
            host: "db.internal".to_string(),
            port: 5432,
            name: "regions".to_string(),
            max_connections: 10,
            min_connections: 1,
            acquire_timeout_secs: 5,
            idle_timeout_secs: 600,
            max_lifetime_secs: 1800,
        }
    }

    #[test]
    fn test_connect_options_without_password() {
        let options = database_config(None).connect_options();

        assert_eq!(options.get_host(), "db.internal");
        assert_eq!(options.get_port(), 5432);
        assert_eq!(options.get_username(), "wilayah");
        assert_eq!(options.get_database(), Some("regions"));
    }

    #[test]
    fn test_connect_options_with_url_reserved_characters_in_password() {
        let config = database_config(Some("pa#ss/w?rd@x"));
        let options = config.connect_options();

        // Reserved characters must not leak into host, port or database
        assert_eq!(options.get_host(), "db.internal");
        assert_eq!(options.get_port(), 5432);
        assert_eq!(options.get_username(), "wilayah");
        assert_eq!(options.get_database(), Some("regions"));
        assert!(!config.redacted_target().contains("pa#ss"));
    }

    #[test]
    fn test_transactional_flag() {
        assert_eq!(transactional_flag(None), Ok(false));
        assert_eq!(transactional_flag(Some(String::new())), Ok(false));
        assert_eq!(transactional_flag(Some("  ".to_string())), Ok(false));
        assert_eq!(transactional_flag(Some("true".to_string())), Ok(true));
        assert!(transactional_flag(Some("sometimes".to_string())).is_err());
    }

    #[test]
    fn test_parse_bool() {
        assert_eq!(parse_bool("true"), Some(true));
        assert_eq!(parse_bool(" YES "), Some(true));
        assert_eq!(parse_bool("0"), Some(false));
        assert_eq!(parse_bool("maybe"), None);
    }

    #[test]
    fn test_server_address() {
        let app = AppConfig {
            host: "0.0.0.0".to_string(),
            port: 8080,
        };
        assert_eq!(app.server_address(), "0.0.0.0:8080");
    }
}
