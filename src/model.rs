use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use serde::ser::{Error as _, SerializeMap, Serializer};
use serde_json::Value;

use crate::error::CatalogError;
use crate::module::Module;
use crate::post_action::{Event, PostAction};

pub const SCHEMA_V2_1: &str =
    "https://schema.getpostman.com/json/collection/v2.1.0/collection.json";

/// Variable reference every request URL is rooted at.
pub const BASE_URL_REF: &str = "{{baseUrl}}";

pub const TOKEN_VARIABLE: &str = "token";

#[derive(Debug, Serialize, Clone)]
pub struct Collection {
    pub info: Info,
    pub auth: Auth,
    #[serde(rename = "variable")]
    pub variables: Vec<Variable>,
    #[serde(rename = "item")]
    pub modules: Vec<Module>,
}

impl Collection {
    pub fn endpoint_count(&self) -> usize {
        self.modules.iter().map(|m| m.requests.len()).sum()
    }

    pub fn requests(&self) -> impl Iterator<Item = (&Module, &RequestDescriptor)> {
        self.modules
            .iter()
            .flat_map(|m| m.requests.iter().map(move |r| (m, r)))
    }

    pub fn variable(&self, key: &str) -> Option<&str> {
        self.variables
            .iter()
            .find(|v| v.key == key)
            .map(|v| v.value.as_str())
    }
}

#[derive(Debug, Serialize, Clone)]
pub struct Info {
    #[serde(rename = "_postman_id")]
    pub id: String,
    pub name: String,
    pub description: String,
    pub schema: String,
}

/// Authorization scheme, either collection-wide or as a per-request override.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Auth {
    Bearer { token_variable: String },
    NoAuth,
}

impl Auth {
    pub fn bearer() -> Self {
        Auth::Bearer {
            token_variable: TOKEN_VARIABLE.to_string(),
        }
    }
}

impl Serialize for Auth {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Auth::Bearer { token_variable } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("type", "bearer")?;
                map.serialize_entry(
                    "bearer",
                    &[Variable::string(
                        TOKEN_VARIABLE,
                        format!("{{{{{token_variable}}}}}"),
                    )],
                )?;
                map.end()
            }
            Auth::NoAuth => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("type", "noauth")?;
                map.end()
            }
        }
    }
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct Variable {
    pub key: String,
    pub value: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl Variable {
    pub fn string(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            kind: "string".to_string(),
        }
    }
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
    Patch,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
            Method::Patch => "PATCH",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(Method::Get),
            "POST" => Ok(Method::Post),
            "PUT" => Ok(Method::Put),
            "DELETE" => Ok(Method::Delete),
            "PATCH" => Ok(Method::Patch),
            _ => Err(CatalogError::UnknownMethod(s.to_string())),
        }
    }
}

/// Request URL: the raw template plus its host and path decomposition.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct Url {
    pub raw: String,
    pub host: Vec<String>,
    pub path: Vec<String>,
}

impl Url {
    pub fn new(path: &str) -> Self {
        Self {
            raw: format!("{BASE_URL_REF}{path}"),
            host: vec![BASE_URL_REF.to_string()],
            path: split_path(path),
        }
    }

    /// The raw URL with the base-URL reference removed.
    pub fn relative(&self) -> &str {
        self.raw.strip_prefix(BASE_URL_REF).unwrap_or(&self.raw)
    }
}

/// Splits a path on `/`, dropping the empty segments a leading or trailing
/// slash would produce. Query strings stay attached to their segment.
pub fn split_path(path: &str) -> Vec<String> {
    path.trim_matches('/')
        .split('/')
        .map(str::to_owned)
        .collect()
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct Header {
    pub key: String,
    pub value: String,
}

impl Header {
    pub fn json_content_type() -> Self {
        Self {
            key: "Content-Type".to_string(),
            value: "application/json".to_string(),
        }
    }

    pub fn is_json_content_type(&self) -> bool {
        self.key.eq_ignore_ascii_case("content-type") && self.value == "application/json"
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    Json(Value),
    Form(Vec<FormField>),
}

impl Body {
    /// The raw text a JSON body is persisted as.
    pub fn json_text(&self) -> Option<Result<String, serde_json::Error>> {
        match self {
            Body::Json(value) => Some(serde_json::to_string_pretty(value)),
            Body::Form(_) => None,
        }
    }
}

impl Serialize for Body {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        match self {
            Body::Json(value) => {
                let raw = serde_json::to_string_pretty(value).map_err(S::Error::custom)?;
                map.serialize_entry("mode", "raw")?;
                map.serialize_entry("raw", &raw)?;
            }
            Body::Form(fields) => {
                map.serialize_entry("mode", "formdata")?;
                map.serialize_entry("formdata", fields)?;
            }
        }
        map.end()
    }
}

/// One multipart field. File fields never carry pre-bound content.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FormField {
    Text { key: String, value: String },
    File { key: String, src: Vec<String> },
}

impl FormField {
    pub fn text(key: impl Into<String>, value: impl Into<String>) -> Self {
        FormField::Text {
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn file(key: impl Into<String>) -> Self {
        FormField::File {
            key: key.into(),
            src: Vec::new(),
        }
    }
}

/// A single templated HTTP call. Constructors live in [`crate::request`].
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescriptor {
    pub name: String,
    pub method: Method,
    pub url: Url,
    pub headers: Vec<Header>,
    /// `None` inherits the collection-level auth.
    pub auth: Option<Auth>,
    pub body: Option<Body>,
    pub description: Option<String>,
    pub post_actions: Vec<PostAction>,
}

#[derive(Serialize)]
struct ItemRepr<'a> {
    name: &'a str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    event: Vec<Event>,
    request: RequestRepr<'a>,
    response: &'a [Value],
}

#[derive(Serialize)]
struct RequestRepr<'a> {
    method: Method,
    header: &'a [Header],
    url: &'a Url,
    #[serde(skip_serializing_if = "Option::is_none")]
    body: Option<&'a Body>,
    #[serde(skip_serializing_if = "Option::is_none")]
    auth: Option<&'a Auth>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
}

impl Serialize for RequestDescriptor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        ItemRepr {
            name: &self.name,
            event: self.post_actions.iter().map(PostAction::to_event).collect(),
            request: RequestRepr {
                method: self.method,
                header: &self.headers,
                url: &self.url,
                body: self.body.as_ref(),
                auth: self.auth.as_ref(),
                description: self.description.as_deref(),
            },
            response: &[],
        }
        .serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_method_parse() {
        assert_eq!("get".parse::<Method>().unwrap(), Method::Get);
        assert_eq!("PATCH".parse::<Method>().unwrap(), Method::Patch);
        assert_eq!(
            "HEAD".parse::<Method>(),
            Err(CatalogError::UnknownMethod("HEAD".to_string()))
        );
    }

    #[test]
    fn test_split_path_keeps_query() {
        assert_eq!(
            split_path("/velocity/usage-report/export?startDate=2024-01-01"),
            vec!["velocity", "usage-report", "export?startDate=2024-01-01"]
        );
        assert_eq!(split_path("/auth/login/"), vec!["auth", "login"]);
    }

    #[test]
    fn test_url_relative() {
        let url = Url::new("/roles/1");
        assert_eq!(url.raw, "{{baseUrl}}/roles/1");
        assert_eq!(url.host, vec!["{{baseUrl}}"]);
        assert_eq!(url.relative(), "/roles/1");
    }

    #[test]
    fn test_auth_serialization() {
        assert_eq!(
            serde_json::to_value(Auth::bearer()).unwrap(),
            json!({
                "type": "bearer",
                "bearer": [{"key": "token", "value": "{{token}}", "type": "string"}]
            })
        );
        assert_eq!(
            serde_json::to_value(Auth::NoAuth).unwrap(),
            json!({"type": "noauth"})
        );
    }

    #[test]
    fn test_form_body_serialization() {
        let body = Body::Form(vec![
            FormField::file("file"),
            FormField::text("distributorId", "1"),
        ]);
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({
                "mode": "formdata",
                "formdata": [
                    {"type": "file", "key": "file", "src": []},
                    {"type": "text", "key": "distributorId", "value": "1"}
                ]
            })
        );
    }

    #[test]
    fn test_json_body_is_indented_in_literal_order() {
        let body = Body::Json(json!({"name": "New Role", "description": "Role description"}));
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["mode"], "raw");
        assert_eq!(
            value["raw"],
            "{\n  \"name\": \"New Role\",\n  \"description\": \"Role description\"\n}"
        );
    }
}
