use askama::Template;
use axum::http::header::{HeaderMap, HeaderValue};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::error;

use crate::shell::{self, METADATA};

#[derive(Template)]
#[template(path = "pages/home.html")]
struct HomeTemplate;

pub async fn health_check() -> Json<serde_json::Value> {
    Json(json!({ "status": "healthy" }))
}

/// GET `/`. Full document for regular navigation; for htmx requests only
/// the page fragment is returned, with the document title in `HX-Title`.
pub async fn home(headers: HeaderMap) -> Response {
    let is_htmx = headers.contains_key("hx-request");

    if is_htmx {
        let mut response = HomeTemplate.into_response();
        response
            .headers_mut()
            .insert("HX-Title", HeaderValue::from_static(METADATA.title));
        return response;
    }

    match HomeTemplate.render() {
        Ok(fragment) => shell::wrap(&fragment).into_response(),
        Err(err) => {
            error!("Failed to render home page: {}", err);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
