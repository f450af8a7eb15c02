//! HTTP surface: the suggestion endpoint and the static page that drives it.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Query, State},
    http::Uri,
    response::Html,
    routing::get,
};
use tokio::net::TcpListener;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::vocabulary::Vocabulary;

const INDEX_HTML: &str = include_str!("../static/index.html");

/// Builds the router serving `GET /` and `GET /api/`.
pub fn router(vocabulary: Arc<Vocabulary>) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/api/", get(suggest))
        .route("/api", get(suggest))
        .with_state(vocabulary)
}

/// Binds `addr` and serves until `shutdown` resolves.
pub async fn serve<F>(addr: SocketAddr, vocabulary: Arc<Vocabulary>, shutdown: F) -> Result<()>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    let (listener, local_addr) = bind_listener(addr).await?;
    info!("Listening on http://{}", local_addr);

    axum::serve(listener, router(vocabulary))
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("Server shut down");
    Ok(())
}

/// Binds `addr`, reporting the address actually bound (port 0 picks a free one).
async fn bind_listener(addr: SocketAddr) -> Result<(TcpListener, SocketAddr)> {
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| Error::Bind { addr, source })?;
    let local_addr = listener
        .local_addr()
        .map_err(|source| Error::Bind { addr, source })?;
    Ok((listener, local_addr))
}

async fn index_page() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn suggest(State(vocabulary): State<Arc<Vocabulary>>, uri: Uri) -> Json<Vec<String>> {
    let prefix = search_prefix(&uri);
    let suggestions = vocabulary.suggest(&prefix);
    debug!("Prefix {:?} matched {} terms", prefix, suggestions.len());
    Json(suggestions)
}

/// The first `search` value in the query string, or the empty prefix when
/// there is none. Later repeats of `search` are ignored.
fn search_prefix(uri: &Uri) -> String {
    Query::<Vec<(String, String)>>::try_from_uri(uri)
        .map(|Query(pairs)| pairs)
        .unwrap_or_default()
        .into_iter()
        .find(|(key, _)| key == "search")
        .map(|(_, value)| value)
        .unwrap_or_default()
}
