pub(super) mod api {
    use axum::extract::State;
    use axum::http::header::{CACHE_CONTROL, CONTENT_TYPE};
    use axum::response::IntoResponse;
    use log::debug;

    use crate::offline::{self, Worker};

    pub async fn worker(worker: State<Worker>) -> crate::Result<impl IntoResponse> {
        let script = worker.script().await.ok_or(offline::Error::NotRegistered)?;
        debug!("Serving service worker script");

        Ok((
            [
                (CONTENT_TYPE, "application/javascript"),
                (CACHE_CONTROL, "no-cache"),
            ],
            script.to_string(),
        ))
    }
}
