use crate::utils::DEFAULT_BCRYPT_COST;
use std::env;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 3001;
pub const DEFAULT_FRONTEND_URL: &str = "http://localhost:3000";
pub const DEFAULT_RATE_LIMIT_MAX: u64 = 100;
pub const DEFAULT_RATE_LIMIT_WINDOW_SECS: u64 = 15 * 60; // 15 minutos

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} has an invalid value: {value}")]
    Invalid { name: &'static str, value: String },
}

/// Configuração do processo, lida uma única vez no startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub supabase_url: String,
    pub supabase_key: String,
    pub jwt_secret: String,
    pub host: String,
    pub port: u16,
    pub allowed_origins: Vec<String>,
    /// Valor bruto de `APP_ENV`; `None` quando não definido
    pub environment: Option<String>,
    pub bcrypt_cost: u32,
    pub rate_limit_max: u64,
    pub rate_limit_window: Duration,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Monta a configuração a partir de qualquer fonte chave/valor
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &'static str| {
            lookup(name)
                .filter(|v| !v.trim().is_empty())
                .ok_or(ConfigError::Missing(name))
        };

        let allowed_origins = lookup("FRONTEND_URLS")
            .map(|urls| parse_origins(&urls))
            .filter(|origins| !origins.is_empty())
            .unwrap_or_else(|| vec![DEFAULT_FRONTEND_URL.to_string()]);

        Ok(Self {
            supabase_url: required("SUPABASE_URL")?,
            supabase_key: required("SUPABASE_ANON_KEY")?,
            jwt_secret: required("JWT_SECRET")?,
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parse_or("PORT", lookup("PORT"), DEFAULT_PORT)?,
            allowed_origins,
            environment: lookup("APP_ENV").filter(|v| !v.is_empty()),
            bcrypt_cost: parse_or("BCRYPT_COST", lookup("BCRYPT_COST"), DEFAULT_BCRYPT_COST)?,
            rate_limit_max: parse_or(
                "RATE_LIMIT_MAX",
                lookup("RATE_LIMIT_MAX"),
                DEFAULT_RATE_LIMIT_MAX,
            )?,
            rate_limit_window: Duration::from_secs(parse_or(
                "RATE_LIMIT_WINDOW_SECS",
                lookup("RATE_LIMIT_WINDOW_SECS"),
                DEFAULT_RATE_LIMIT_WINDOW_SECS,
            )?),
        })
    }

    /// Nome do ambiente reportado em `/api/test`
    pub fn environment_name(&self) -> &str {
        self.environment.as_deref().unwrap_or("development")
    }

    /// Detalhes de erro só vão para o cliente com `APP_ENV=development` explícito
    pub fn expose_errors(&self) -> bool {
        self.environment.as_deref() == Some("development")
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_or<T: std::str::FromStr>(
    name: &'static str,
    raw: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
    }
}
