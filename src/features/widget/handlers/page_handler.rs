use std::sync::Arc;

use axum::{extract::State, response::Html};

use crate::core::error::Result;
use crate::features::widget::services::PageService;

/// Search page with the map and the stored location table
pub async fn index(State(service): State<Arc<PageService>>) -> Result<Html<String>> {
    Ok(Html(service.render_index().await?))
}
