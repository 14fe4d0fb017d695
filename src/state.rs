use axum::extract::FromRef;

use crate::document::Page;
use crate::offline::Worker;

#[derive(Clone, FromRef)]
pub struct AppState {
    pub page: Page,
    pub worker: Worker,
}

impl AppState {
    pub fn new(page: Page, worker: Worker) -> Self {
        Self { page, worker }
    }
}
