use std::collections::HashSet;

use serde::Serialize;

use crate::error::CatalogError;
use crate::model::RequestDescriptor;

/// A named group of requests. Names follow `NN. Title (N endpoints)`.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct Module {
    pub name: String,
    #[serde(rename = "item")]
    pub requests: Vec<RequestDescriptor>,
}

impl Module {
    pub fn new(name: impl Into<String>, requests: Vec<RequestDescriptor>) -> Self {
        Self {
            name: name.into(),
            requests,
        }
    }

    pub fn declared_count(&self) -> Option<usize> {
        parse_count_label(&self.name)
    }

    /// Leading sequence number, e.g. `4` for `04. Contracts (24 endpoints)`.
    pub fn sequence(&self) -> Option<u32> {
        let (number, _) = self.name.split_once('.')?;
        number.trim().parse().ok()
    }

    /// The name without its sequence prefix and count label.
    pub fn title(&self) -> &str {
        let mut title = self.name.as_str();
        if self.sequence().is_some() {
            if let Some((_, rest)) = title.split_once('.') {
                title = rest;
            }
        }
        if let Some(idx) = title.rfind(" (") {
            if parse_count_label(&title[idx..]).is_some() {
                title = &title[..idx];
            }
        }
        title.trim()
    }

    pub fn find(&self, request: &str) -> Option<&RequestDescriptor> {
        self.requests
            .iter()
            .find(|r| r.name.eq_ignore_ascii_case(request))
    }

    pub fn check_count(&self) -> Result<(), CatalogError> {
        let declared = self
            .declared_count()
            .ok_or_else(|| CatalogError::MissingCountLabel {
                module: self.name.clone(),
            })?;
        if declared != self.requests.len() {
            return Err(CatalogError::CountMismatch {
                module: self.name.clone(),
                declared,
                actual: self.requests.len(),
            });
        }
        Ok(())
    }

    /// Count label, non-empty unique request names and well-formed paths.
    pub fn validate(&self) -> Result<(), CatalogError> {
        self.check_count()?;

        let mut seen = HashSet::new();
        for request in &self.requests {
            if request.name.trim().is_empty() {
                return Err(CatalogError::EmptyName {
                    module: self.name.clone(),
                });
            }
            if !seen.insert(request.name.as_str()) {
                return Err(CatalogError::DuplicateRequest {
                    module: self.name.clone(),
                    request: request.name.clone(),
                });
            }
            let path = request.url.relative();
            if !path.starts_with('/') || request.url.path.join("/") != path.trim_matches('/') {
                return Err(CatalogError::InvalidPath {
                    request: request.name.clone(),
                    path: path.to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Reads `N` out of a trailing `(N endpoints)` label.
pub fn parse_count_label(name: &str) -> Option<usize> {
    let inner = name.trim_end().strip_suffix(')')?;
    let start = inner.rfind('(')?;
    let label = &inner[start + 1..];
    let number = label
        .strip_suffix(" endpoints")
        .or_else(|| label.strip_suffix(" endpoint"))?;
    number.trim().parse().ok()
}
