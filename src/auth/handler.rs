pub(super) mod pages {
    use axum::extract::State;

    use crate::document::Page;

    pub async fn login(page: State<Page>) -> Page {
        page.0
    }
}
