//! The service's OpenAPI descriptor.
//!
//! [`build`] returns the literal document. [`DescriptorBuilder`] starts from it
//! and lets startup code merge endpoint documentation and extra security
//! schemes before the document is frozen behind a [`SharedDescriptor`].

use std::sync::Arc;

use serde_json::Value;
use utoipa::{
    Modify, OpenApi,
    openapi::{
        Components,
        security::{HttpAuthScheme, HttpBuilder, SecurityRequirement, SecurityScheme},
    },
};

use crate::{
    config::DocsConfig,
    error::{DocsError, Result},
};

/// Name under which the bearer-token scheme is registered.
///
/// Per-endpoint `security(...)` declarations must use this exact name.
pub const BEARER_SECURITY_SCHEME: &str = "BearerAuth";

pub const OPENAPI_VERSION: &str = "3.1.0";

/// Read-only handle to the frozen document, shared by every reader.
pub type SharedDescriptor = Arc<utoipa::openapi::OpenApi>;

/// HTTP bearer (JWT) security scheme, also required globally.
pub struct BearerSecurityScheme;

impl BearerSecurityScheme {
    pub fn scheme() -> SecurityScheme {
        SecurityScheme::Http(
            HttpBuilder::new()
                .scheme(HttpAuthScheme::Bearer)
                .bearer_format("JWT")
                .build(),
        )
    }
}

impl Modify for BearerSecurityScheme {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi
            .components
            .get_or_insert_with(Components::default)
            .add_security_scheme(BEARER_SECURITY_SCHEME, Self::scheme());

        openapi
            .security
            .get_or_insert_with(Vec::new)
            .push(SecurityRequirement::new(
                BEARER_SECURITY_SCHEME,
                Vec::<String>::new(),
            ));
    }
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Project API",
        version = "v1",
        description = "REST API documentation for the Project service.",
        contact(name = "Support Team", email = "support@example.com"),
        license(name = "Apache 2.0")
    ),
    servers(
        (url = "/", description = "Default Server")
    ),
    modifiers(&BearerSecurityScheme)
)]
pub struct ApiDoc;

/// Builds the service's documentation descriptor from compile-time literals.
pub fn build() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}

/// Startup-time assembly of the descriptor.
///
/// Conflicting scheme registrations fail immediately; dangling security
/// requirements are reported by [`DescriptorBuilder::build`].
#[derive(Clone)]
pub struct DescriptorBuilder {
    doc: utoipa::openapi::OpenApi,
}

impl Default for DescriptorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DescriptorBuilder {
    pub fn new() -> Self {
        Self { doc: build() }
    }

    pub fn from_config(config: &DocsConfig) -> Self {
        let mut doc = build();
        doc.info = config.info();
        doc.servers = Some(config.servers());
        Self { doc }
    }

    pub fn security_scheme(
        mut self,
        name: impl Into<String>,
        scheme: SecurityScheme,
    ) -> Result<Self> {
        let name = name.into();
        let components = self.doc.components.get_or_insert_with(Components::default);

        match components.security_schemes.get(&name) {
            Some(existing) if *existing == scheme => {
                tracing::debug!(scheme = %name, "security scheme already registered");
            }
            Some(_) => return Err(DocsError::DuplicateSecurityScheme(name)),
            None => {
                tracing::debug!(scheme = %name, "registered security scheme");
                components.security_schemes.insert(name, scheme);
            }
        }

        Ok(self)
    }

    /// Appends a global security requirement on `name`.
    pub fn require(self, name: impl Into<String>) -> Self {
        self.require_all(SecurityRequirement::new(name, Vec::<String>::new()))
    }

    /// Appends a global requirement as-is; all schemes it names must be
    /// satisfied together.
    pub fn require_all(mut self, requirement: SecurityRequirement) -> Self {
        let security = self.doc.security.get_or_insert_with(Vec::new);
        if !security.contains(&requirement) {
            security.push(requirement);
        }
        self
    }

    /// Merges paths, schemas, tags and security from another document.
    pub fn merge(mut self, mut other: utoipa::openapi::OpenApi) -> Result<Self> {
        let schemes = other
            .components
            .as_mut()
            .map(|c| std::mem::take(&mut c.security_schemes))
            .unwrap_or_default();
        let requirements = other.security.take().unwrap_or_default();

        for (name, scheme) in schemes {
            self = self.security_scheme(name, scheme)?;
        }
        for requirement in requirements {
            self = self.require_all(requirement);
        }

        tracing::debug!(paths = other.paths.paths.len(), "merged documentation");
        self.doc.merge(other);
        Ok(self)
    }

    pub fn build(self) -> Result<utoipa::openapi::OpenApi> {
        validate(&self.doc)?;
        tracing::info!(
            title = %self.doc.info.title,
            version = %self.doc.info.version,
            paths = self.doc.paths.paths.len(),
            "built API descriptor"
        );
        Ok(self.doc)
    }

    pub fn build_shared(self) -> Result<SharedDescriptor> {
        self.build().map(Arc::new)
    }
}

/// Checks that every global requirement names only registered schemes.
pub fn validate(doc: &utoipa::openapi::OpenApi) -> Result<()> {
    let registered = doc.components.as_ref().map(|c| &c.security_schemes);
    for req in doc.security.iter().flatten() {
        for name in requirement_names(req)? {
            if !registered.is_some_and(|schemes| schemes.contains_key(&name)) {
                return Err(DocsError::UnknownSecurityScheme(name));
            }
        }
    }

    Ok(())
}

pub fn to_json(doc: &utoipa::openapi::OpenApi) -> Result<String> {
    doc.to_pretty_json()
        .map_err(|e| DocsError::Serialization(e.to_string()))
}

pub fn to_yaml(doc: &utoipa::openapi::OpenApi) -> Result<String> {
    doc.to_yaml()
        .map_err(|e| DocsError::Serialization(e.to_string()))
}

// SecurityRequirement keeps its map private; its serialized form is
// `{ "<scheme>": [scopes] }`.
fn requirement_names(req: &SecurityRequirement) -> Result<Vec<String>> {
    match serde_json::to_value(req) {
        Ok(Value::Object(map)) => Ok(map.keys().cloned().collect()),
        Ok(other) => Err(DocsError::Serialization(format!(
            "security requirement is not an object: {other}"
        ))),
        Err(e) => Err(DocsError::Serialization(e.to_string())),
    }
}
