/// Front-end page
use crate::error::ServerError;
use axum::response::{Html, IntoResponse, Response};
use std::io::ErrorKind;
use std::path::Path;

/// GET / - Serve the HTML document at `index_path`, 404 when it is absent
pub async fn serve_index(index_path: &Path) -> Response {
    match tokio::fs::read_to_string(index_path).await {
        Ok(contents) => Html(contents).into_response(),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %index_path.display(), "Index page missing");
            ServerError::NotFound("index.html not found".to_string()).into_response()
        }
        Err(e) => ServerError::Io(e).into_response(),
    }
}
