use std::net::SocketAddr;

use anyhow::Context;
use axum::http::HeaderValue;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cors {
    Disabled,
    AnyOrigin,
    Origin(HeaderValue),
}

impl Cors {
    pub fn layer(&self) -> Option<CorsLayer> {
        let origin = match self {
            Cors::Disabled => return None,
            Cors::AnyOrigin => AllowOrigin::from(Any),
            Cors::Origin(origin) => AllowOrigin::exact(origin.clone()),
        };
        Some(
            CorsLayer::new()
                .allow_origin(origin)
                .allow_methods(Any)
                .allow_headers(Any),
        )
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub cors: Cors,
}

impl Config {
    /// Reads `BIND_ADDR` and `CORS_ALLOW_ORIGIN`, after loading `.env` if present.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| dotenv::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let bind_addr = lookup("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_owned());
        let bind_addr = bind_addr
            .parse::<SocketAddr>()
            .with_context(|| format!("BIND_ADDR {bind_addr:?} is not a socket address"))?;

        let cors = match lookup("CORS_ALLOW_ORIGIN").as_deref() {
            None | Some("") => Cors::Disabled,
            Some("*") => Cors::AnyOrigin,
            Some(origin) => Cors::Origin(
                HeaderValue::from_str(origin)
                    .with_context(|| format!("CORS_ALLOW_ORIGIN {origin:?} is not a valid origin"))?,
            ),
        };

        Ok(Config { bind_addr, cors })
    }
}
