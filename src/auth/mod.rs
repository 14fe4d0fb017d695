use axum::Router;
use axum::routing::get;

use crate::state::AppState;

mod handler;
pub mod markup;

pub fn pages<S>(s: AppState) -> Router<S> {
    Router::new()
        .route("/", get(handler::pages::login))
        .route("/login", get(handler::pages::login))
        .with_state(s)
}

/// Identity providers offered on the login chooser.
///
/// Labels only: no provider is wired to an authorization flow.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Provider {
    Google,
    Atlassian,
    Github,
}

impl Provider {
    pub const ALL: [Provider; 3] = [Provider::Google, Provider::Atlassian, Provider::Github];

    pub fn label(&self) -> &'static str {
        match self {
            Provider::Google => "Google",
            Provider::Atlassian => "Atlassian",
            Provider::Github => "Github",
        }
    }
}
