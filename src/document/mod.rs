use std::path::Path;
use std::sync::Arc;

use axum::response::{Html as HtmlResponse, IntoResponse, Response};
use log::debug;
use maud::{Markup, Render};
use scraper::node::Text;
use scraper::{Html, Node};

/// Id of the container the login view is mounted into.
pub const ROOT: &str = "root";

// Noncharacters never appear in a served host document.
const SLOT: &str = "\u{FDD0}mount\u{FDD0}";

const VOID_ELEMENTS: [&str; 14] = [
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

// Children of these are parsed as text, never as markup.
const RAW_TEXT_ELEMENTS: [&str; 9] = [
    "script", "style", "textarea", "title", "xmp", "iframe", "noembed", "noframes", "plaintext",
];

type Result<T> = std::result::Result<T, Error>;

/// Host HTML the view gets attached to.
#[derive(Clone, Debug)]
pub struct HostDocument(String);

impl HostDocument {
    pub fn new(html: impl Into<String>) -> Self {
        Self(html.into())
    }

    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading host document from {}", path.display());
        let html = tokio::fs::read_to_string(path).await?;
        Ok(Self(html))
    }

    /// Replaces the content of the element with `container_id` by the
    /// rendered `view` and returns the whole serialized document.
    pub fn mount(&self, container_id: &str, view: &impl Render) -> Result<Page> {
        let mut html = Html::parse_document(&self.0);

        let (node_id, tag) = html
            .tree
            .root()
            .descendants()
            .filter_map(|n| n.value().as_element().map(|e| (n.id(), e)))
            .find(|(_, e)| e.id() == Some(container_id))
            .map(|(id, e)| (id, e.name().to_owned()))
            .ok_or_else(|| Error::ContainerNotFound(container_id.to_owned()))?;

        if VOID_ELEMENTS.contains(&tag.as_str()) || RAW_TEXT_ELEMENTS.contains(&tag.as_str()) {
            return Err(Error::NotAContainer(tag));
        }

        let Some(mut container) = html.tree.get_mut(node_id) else {
            return Err(Error::ContainerNotFound(container_id.to_owned()));
        };
        while let Some(mut child) = container.first_child() {
            child.detach();
        }
        container.append(Node::Text(Text { text: SLOT.into() }));

        let mounted = html
            .html()
            .replacen(SLOT, &view.render().into_string(), 1);

        Ok(Page(mounted.into()))
    }
}

impl From<Markup> for HostDocument {
    fn from(markup: Markup) -> Self {
        Self(markup.into_string())
    }
}

/// Document with the view mounted, served as is.
#[derive(Clone, Debug)]
pub struct Page(Arc<str>);

impl Page {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl IntoResponse for Page {
    fn into_response(self) -> Response {
        HtmlResponse(self.0.to_string()).into_response()
    }
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("mount container #{0} not found in host document")]
    ContainerNotFound(String),
    #[error("<{0}> cannot hold mounted markup")]
    NotAContainer(String),

    #[error(transparent)]
    _Io(#[from] std::io::Error),
}
