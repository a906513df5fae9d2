use std::{net::SocketAddr, str::FromStr};

use anyhow::Context;
use serde::Deserialize;

const DEFAULT_RECIPE_API_URL: &str = "http://www.recipepuppy.com/api/";

#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    pub issuer: String,
    pub audience: String,
    pub ttl_minutes: i64,
    pub refresh_ttl_minutes: i64,
}

/// Where recipe searches are forwarded to.
#[derive(Debug, Clone, Deserialize)]
pub struct RecipeApiConfig {
    pub base_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub db_max_connections: u32,
    pub static_dir: String,
    pub jwt: JwtConfig,
    pub recipe_api: RecipeApiConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL is not set")?;
        let jwt = JwtConfig {
            secret: std::env::var("JWT_SECRET").context("JWT_SECRET is not set")?,
            issuer: std::env::var("JWT_ISSUER").unwrap_or_else(|_| "recipebox".into()),
            audience: std::env::var("JWT_AUDIENCE").unwrap_or_else(|_| "recipebox-users".into()),
            ttl_minutes: parse_or("JWT_TTL_MINUTES", 60),
            refresh_ttl_minutes: parse_or("JWT_REFRESH_TTL_MINUTES", 60 * 24 * 14),
        };
        let recipe_api = RecipeApiConfig {
            base_url: std::env::var("RECIPE_API_URL")
                .unwrap_or_else(|_| DEFAULT_RECIPE_API_URL.into()),
        };

        // PORT wins over APP_PORT so the usual PaaS convention works.
        let port = std::env::var("PORT")
            .or_else(|_| std::env::var("APP_PORT"))
            .unwrap_or_else(|_| "8080".into())
            .parse::<u16>()
            .context("PORT must be a valid port number")?;

        Ok(Self {
            host: std::env::var("APP_HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port,
            database_url,
            db_max_connections: parse_or("DB_MAX_CONNECTIONS", 10),
            static_dir: std::env::var("STATIC_DIR").unwrap_or_else(|_| "public".into()),
            jwt,
            recipe_api,
        })
    }

    pub fn listen_addr(&self) -> anyhow::Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("invalid listen address {}:{}", self.host, self.port))
    }
}

fn parse_or<T: FromStr>(key: &str, default: T) -> T {
    match std::env::var(key) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            tracing::warn!(key, value = %raw, "invalid value, using default");
            default
        }),
        Err(_) => default,
    }
}
