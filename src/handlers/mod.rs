pub mod docs;

pub use docs::{OPENAPI_JSON_PATH, OPENAPI_YAML_PATH, SCALAR_PATH, docs_router};
