use log::info;

use crate::auth::markup::Login;
use crate::document::{HostDocument, Page, ROOT};
use crate::offline;

/// Mounts the login view into the host document, then fires the offline
/// registration without waiting on it.
///
/// A missing mount container is fatal and nothing gets registered.
pub fn boot(document: &HostDocument, registrar: offline::Service) -> crate::Result<Page> {
    let page = document.mount(ROOT, &Login)?;
    info!("Mounted login view into #{ROOT}");

    tokio::spawn(async move {
        let _ = registrar.register().await;
    });

    Ok(page)
}
