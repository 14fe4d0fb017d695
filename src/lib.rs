use axum::Router;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use log::error;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub mod auth;
pub mod document;
pub mod integration;
pub mod markup;
pub mod offline;
pub mod startup;
pub mod state;

pub type Result<T> = std::result::Result<T, Error>;

pub fn app(state: AppState, config: &integration::Config) -> Result<Router> {
    let cors = CorsLayer::new()
        .allow_origin(config.env.allow_origin()?)
        .allow_methods(config.env.allow_methods())
        .allow_headers(config.env.allow_headers());

    Ok(Router::new()
        .merge(auth::pages(state.clone()))
        .merge(offline::api(state))
        .nest_service("/static", ServeDir::new(&config.static_dir))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        ))
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    _Document(#[from] document::Error),

    #[error(transparent)]
    _Offline(#[from] offline::Error),

    #[error(transparent)]
    _Integration(#[from] integration::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        error!("{self}");

        let status = match self {
            Self::_Offline(e) => StatusCode::from(e),
            Self::_Document(_) | Self::_Integration(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, status.canonical_reason().unwrap_or_default()).into_response()
    }
}
