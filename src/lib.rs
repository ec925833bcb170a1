pub mod config;
pub mod error;
pub mod openapi;

#[cfg(feature = "server")]
pub mod handlers;

pub use config::{ContactConfig, DocsConfig, ServerConfig};
pub use error::{DocsError, ErrorResponse, Result};
#[cfg(feature = "server")]
pub use handlers::{OPENAPI_JSON_PATH, OPENAPI_YAML_PATH, SCALAR_PATH, docs_router};
pub use openapi::{
    ApiDoc, BEARER_SECURITY_SCHEME, BearerSecurityScheme, DescriptorBuilder, OPENAPI_VERSION,
    SharedDescriptor, build, to_json, to_yaml, validate,
};

pub mod prelude {
    pub use crate::{
        config::DocsConfig,
        error::{DocsError, Result},
        openapi::{BEARER_SECURITY_SCHEME, DescriptorBuilder, SharedDescriptor, build},
    };

    #[cfg(feature = "server")]
    pub use crate::handlers::docs_router;
}
