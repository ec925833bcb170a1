use axum::{
    Router,
    extract::State,
    http::header,
    response::IntoResponse,
    routing::get,
};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    error::{DocsError, Result},
    openapi::{SharedDescriptor, to_yaml},
};

pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";
pub const OPENAPI_YAML_PATH: &str = "/api-docs/openapi.yaml";
pub const SCALAR_PATH: &str = "/scalar";

/// Routes serving a frozen descriptor: JSON, YAML and the Scalar UI.
pub fn docs_router(doc: SharedDescriptor) -> Router {
    let scalar = Scalar::with_url(SCALAR_PATH, doc.as_ref().clone());

    Router::new()
        .route(OPENAPI_JSON_PATH, get(openapi_json))
        .route(OPENAPI_YAML_PATH, get(openapi_yaml))
        .with_state(doc)
        .merge(scalar)
}

pub async fn openapi_json(State(doc): State<SharedDescriptor>) -> Result<impl IntoResponse> {
    let body =
        serde_json::to_vec(doc.as_ref()).map_err(|e| DocsError::Serialization(e.to_string()))?;
    Ok(([(header::CONTENT_TYPE, "application/json")], body))
}

pub async fn openapi_yaml(State(doc): State<SharedDescriptor>) -> Result<impl IntoResponse> {
    let body = to_yaml(&doc)?;
    Ok(([(header::CONTENT_TYPE, "application/yaml")], body))
}
