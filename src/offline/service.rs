use log::{debug, info, warn};
use serde::Serialize;

use super::{Config, Error, Registrar, Registration, Worker};

const TEMPLATE: &str = include_str!("service-worker.js");
const PRECACHE_SLOT: &str = "__PRECACHE__";
const CACHE_PREFIX: &str = "auth-app";

pub const PRECACHE_URLS: [&str; 4] = [
    "/",
    "/static/index.css",
    "/static/auth.css",
    "/static/register-sw.js",
];

#[derive(Serialize)]
struct Precache<'a> {
    cache: &'a str,
    urls: &'a [&'a str],
}

pub fn cache_name() -> String {
    format!("{CACHE_PREFIX}-v{}", env!("CARGO_PKG_VERSION"))
}

/// Installs the service worker script browsers register against.
pub struct ServiceWorker {
    config: Config,
    worker: Worker,
}

impl ServiceWorker {
    pub fn new(config: Config, worker: Worker) -> Self {
        Self { config, worker }
    }

    async fn install(&self) -> super::Result<Registration> {
        if !self.config.enabled {
            debug!("Offline support disabled, skipping service worker");
            return Ok(Registration::Skipped);
        }

        for url in PRECACHE_URLS {
            if let Some(file) = url.strip_prefix("/static/") {
                tokio::fs::metadata(self.config.static_dir.join(file))
                    .await
                    .map_err(|e| Error::MissingAsset(url.to_owned(), e))?;
            }
        }

        let cache = cache_name();
        let precache = serde_json::to_string(&Precache {
            cache: &cache,
            urls: &PRECACHE_URLS,
        })?;

        self.worker
            .install(TEMPLATE.replace(PRECACHE_SLOT, &precache))
            .await;

        Ok(Registration::Installed {
            cache,
            assets: PRECACHE_URLS.len(),
        })
    }
}

#[async_trait::async_trait]
impl Registrar for ServiceWorker {
    async fn register(&self) -> super::Result<Registration> {
        let registration = self.install().await;

        match &registration {
            Ok(Registration::Installed { cache, assets }) => {
                info!("Content is cached for offline use ({cache}, {assets} assets)")
            }
            Ok(Registration::Skipped) => {}
            Err(e) => warn!("Error during service worker registration: {e}"),
        }

        registration
    }
}
