use std::path::Path;

use serde::{Deserialize, Serialize};
use utoipa::openapi::{
    ContactBuilder, Info, InfoBuilder, License, Server, ServerBuilder,
};

use crate::error::{DocsError, Result};

pub const DEFAULT_TITLE: &str = "Project API";
pub const DEFAULT_VERSION: &str = "v1";
pub const DEFAULT_DESCRIPTION: &str = "REST API documentation for the Project service.";
pub const DEFAULT_LICENSE: &str = "Apache 2.0";

/// Metadata rendered into the `info` and `servers` sections of the document.
///
/// Every field has a default, so a config file only needs the keys it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocsConfig {
    pub title: String,
    pub version: String,
    pub description: String,
    pub license_name: String,
    pub contact: Option<ContactConfig>,
    pub servers: Vec<ServerConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactConfig {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    pub url: String,
    pub description: String,
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            version: DEFAULT_VERSION.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
            license_name: DEFAULT_LICENSE.to_string(),
            contact: Some(ContactConfig {
                name: "Support Team".to_string(),
                email: "support@example.com".to_string(),
            }),
            servers: vec![ServerConfig {
                url: "/".to_string(),
                description: "Default Server".to_string(),
            }],
        }
    }
}

impl DocsConfig {
    pub fn new(title: String, version: String) -> Self {
        Self {
            title,
            version,
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: String) -> Self {
        self.description = description;
        self
    }

    pub fn with_license(mut self, license_name: String) -> Self {
        self.license_name = license_name;
        self
    }

    pub fn with_contact(mut self, name: String, email: String) -> Self {
        self.contact = Some(ContactConfig { name, email });
        self
    }

    pub fn without_contact(mut self) -> Self {
        self.contact = None;
        self
    }

    /// Replaces the server list with a single entry.
    pub fn with_server(mut self, url: String, description: String) -> Self {
        self.servers = vec![ServerConfig { url, description }];
        self
    }

    pub fn add_server(mut self, url: String, description: String) -> Self {
        self.servers.push(ServerConfig { url, description });
        self
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| DocsError::Config(e.to_string()))
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| DocsError::Config(format!("{}: {e}", path.display())))?;
        Self::from_json_str(&raw)
    }

    pub(crate) fn info(&self) -> Info {
        let contact = self.contact.as_ref().map(|c| {
            ContactBuilder::new()
                .name(Some(c.name.clone()))
                .email(Some(c.email.clone()))
                .build()
        });

        InfoBuilder::new()
            .title(self.title.clone())
            .version(self.version.clone())
            .description(Some(self.description.clone()))
            .contact(contact)
            .license(Some(License::new(self.license_name.clone())))
            .build()
    }

    pub(crate) fn servers(&self) -> Vec<Server> {
        self.servers
            .iter()
            .map(|s| {
                ServerBuilder::new()
                    .url(s.url.clone())
                    .description(Some(s.description.clone()))
                    .build()
            })
            .collect()
    }
}
