use std::env;
use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use tokio::sync::RwLock;

use crate::integration::{self, Env};
use crate::state::AppState;

mod handler;
pub mod service;

type Result<T> = std::result::Result<T, Error>;
pub type Service = Arc<dyn Registrar + Send + Sync>;

pub const WORKER_PATH: &str = "/service-worker.js";

pub fn api<S>(s: AppState) -> Router<S> {
    Router::new()
        .route(WORKER_PATH, get(handler::api::worker))
        .with_state(s)
}

/// Offline-capability hook invoked once at startup.
#[async_trait::async_trait]
pub trait Registrar {
    async fn register(&self) -> Result<Registration>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Registration {
    Installed { cache: String, assets: usize },
    Skipped,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub enabled: bool,
    pub static_dir: PathBuf,
}

impl Config {
    pub fn new(enabled: bool, static_dir: impl Into<PathBuf>) -> Self {
        Self {
            enabled,
            static_dir: static_dir.into(),
        }
    }

    pub fn env(app_env: &Env, static_dir: impl Into<PathBuf>) -> integration::Result<Self> {
        Self::from_lookup(app_env, static_dir, |key: &str| env::var(key))
    }

    /// Offline support defaults to on in production only.
    pub fn from_lookup<F>(
        app_env: &Env,
        static_dir: impl Into<PathBuf>,
        lookup: F,
    ) -> integration::Result<Self>
    where
        F: Fn(&str) -> std::result::Result<String, env::VarError>,
    {
        let enabled = match lookup("OFFLINE_ENABLED") {
            Ok(v) => v.parse::<bool>()?,
            Err(env::VarError::NotPresent) => matches!(app_env, Env::Production),
            Err(e) => return Err(e.into()),
        };
        Ok(Self::new(enabled, static_dir))
    }
}

/// Slot holding the installed service worker script.
#[derive(Clone, Default)]
pub struct Worker(Arc<RwLock<Option<Arc<str>>>>);

impl Worker {
    pub async fn install(&self, script: impl Into<Arc<str>>) {
        *self.0.write().await = Some(script.into());
    }

    pub async fn script(&self) -> Option<Arc<str>> {
        self.0.read().await.clone()
    }
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("precached asset is missing: {0}")]
    MissingAsset(String, #[source] std::io::Error),
    #[error("service worker is not registered")]
    NotRegistered,

    #[error(transparent)]
    _Manifest(#[from] serde_json::Error),
}

impl From<Error> for StatusCode {
    fn from(e: Error) -> Self {
        match e {
            Error::NotRegistered => Self::NOT_FOUND,
            Error::MissingAsset(..) | Error::_Manifest(_) => Self::INTERNAL_SERVER_ERROR,
        }
    }
}
