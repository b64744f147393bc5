//! Browser bootstrap handlers
//!
//! Serve the landing page and the script that loads the Maps JavaScript SDK.

use axum::{
    extract::State,
    http::header,
    response::{Html, IntoResponse},
};
use infrastructure::IndexPage;

use crate::{error::ApiError, state::AppState};

/// Landing page in the configured variant
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    match state.index_page {
        IndexPage::Static => Ok(static_index(State(state)).await),
        IndexPage::Templated => templated_index(State(state)).await,
    }
}

/// Landing page shipped with the server
pub async fn static_index(State(state): State<AppState>) -> Html<String> {
    Html(state.pages.static_index().to_string())
}

/// Landing page with the API key embedded
pub async fn templated_index(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    Ok(Html(state.pages.render_templated_index()?))
}

/// Script that appends the Maps SDK `<script>` tag to `document.head`
pub async fn maps_loader(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript")],
        state.pages.maps_loader_js().to_string(),
    )
}
