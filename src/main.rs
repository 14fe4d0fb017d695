use std::process::ExitCode;
use std::sync::Arc;

use log::{error, info};
use maud::Render;

use auth_app::document::HostDocument;
use auth_app::integration::{self, Config};
use auth_app::markup::Shell;
use auth_app::offline::{self, Worker, service::ServiceWorker};
use auth_app::state::AppState;
use auth_app::{app, startup};

#[tokio::main]
async fn main() -> ExitCode {
    if let Err(e) = integration::init_logger() {
        eprintln!("Failed to initialize logger: {e}");
        return ExitCode::FAILURE;
    }

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Fatal startup error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> auth_app::Result<()> {
    let config = Config::env()?;

    let document = match &config.index_html {
        Some(path) => HostDocument::load(path).await?,
        None => HostDocument::from(Shell::new(config.offline.enabled).render()),
    };

    let worker = Worker::default();
    let registrar: offline::Service =
        Arc::new(ServiceWorker::new(config.offline.clone(), worker.clone()));

    let page = startup::boot(&document, registrar)?;
    let router = app(AppState::new(page, worker), &config)?;

    let addr = config.env.addr();
    info!("Listening on {addr}");

    let served = match config.env.ssl_config()? {
        Some(tls) => {
            axum_server::bind_openssl(addr, tls)
                .serve(router.into_make_service())
                .await
        }
        None => {
            axum_server::bind(addr)
                .serve(router.into_make_service())
                .await
        }
    };
    served.map_err(integration::Error::from)?;

    Ok(())
}
