use serde_json::Value;

use crate::model::{Auth, Body, FormField, Header, Method, RequestDescriptor, Url};
use crate::post_action::PostAction;

impl RequestDescriptor {
    /// A bodiless request that inherits the collection auth.
    pub fn new(name: impl Into<String>, method: Method, path: &str) -> Self {
        Self {
            name: name.into(),
            method,
            url: Url::new(path),
            headers: Vec::new(),
            auth: None,
            body: None,
            description: None,
            post_actions: Vec::new(),
        }
    }

    /// Attaches an example JSON body and declares its content type.
    pub fn json(mut self, body: Value) -> Self {
        self.headers = vec![Header::json_content_type()];
        self.body = Some(Body::Json(body));
        self
    }

    /// Multipart bodies carry no explicit headers; the client sets the boundary.
    pub fn form(mut self, fields: Vec<FormField>) -> Self {
        self.headers.clear();
        self.body = Some(Body::Form(fields));
        self
    }

    pub fn public(self) -> Self {
        self.with_auth(Auth::NoAuth)
    }

    pub fn with_auth(mut self, auth: Auth) -> Self {
        self.auth = Some(auth);
        self
    }

    pub fn describe(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        self.description = (!text.is_empty()).then_some(text);
        self
    }

    pub fn on_response(mut self, action: PostAction) -> Self {
        self.post_actions.push(action);
        self
    }

    pub fn requires_auth(&self) -> bool {
        self.auth != Some(Auth::NoAuth)
    }

    pub fn is_multipart(&self) -> bool {
        matches!(self.body, Some(Body::Form(_)))
    }
}

/// Flat form of the descriptor factory: every optional piece as a parameter.
pub fn create_request(
    name: &str,
    method: Method,
    path: &str,
    body: Option<Value>,
    auth_required: bool,
    description: &str,
) -> RequestDescriptor {
    let mut request = RequestDescriptor::new(name, method, path).describe(description);
    if let Some(body) = body.filter(|b| !b.is_null()) {
        request = request.json(body);
    }
    if !auth_required {
        request = request.public();
    }
    request
}

pub fn get(name: &str, path: &str) -> RequestDescriptor {
    RequestDescriptor::new(name, Method::Get, path)
}

pub fn post(name: &str, path: &str) -> RequestDescriptor {
    RequestDescriptor::new(name, Method::Post, path)
}

pub fn put(name: &str, path: &str) -> RequestDescriptor {
    RequestDescriptor::new(name, Method::Put, path)
}

pub fn delete(name: &str, path: &str) -> RequestDescriptor {
    RequestDescriptor::new(name, Method::Delete, path)
}

pub fn patch(name: &str, path: &str) -> RequestDescriptor {
    RequestDescriptor::new(name, Method::Patch, path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_get_defaults() {
        let req = create_request(
            "Get All Users",
            Method::Get,
            "/users?pageNumber=1&pageSize=10",
            None,
            true,
            "",
        );

        assert_eq!(req.url.path, vec!["users?pageNumber=1&pageSize=10"]);
        assert_eq!(req.url.raw, "{{baseUrl}}/users?pageNumber=1&pageSize=10");
        assert!(req.headers.is_empty());
        assert!(req.body.is_none());
        assert!(req.auth.is_none());
        assert!(req.description.is_none());
        assert!(req.requires_auth());
    }

    #[test]
    fn test_json_body_sets_content_type() {
        let req = post("Create Role", "/roles").json(json!({"name": "New Role"}));

        assert_eq!(req.headers, vec![Header::json_content_type()]);
        let text = req.body.as_ref().and_then(Body::json_text).unwrap().unwrap();
        assert_eq!(text, "{\n  \"name\": \"New Role\"\n}");
    }

    #[test]
    fn test_public_sets_noauth() {
        let req = create_request("Get Countries", Method::Get, "/lookup/countries", None, false, "");
        assert_eq!(req.auth, Some(Auth::NoAuth));
        assert!(!req.requires_auth());
    }

    #[test]
    fn test_description_only_when_non_empty() {
        assert_eq!(
            get("Logout", "/auth/logout").describe("Logout current user").description,
            Some("Logout current user".to_string())
        );
        assert_eq!(get("Logout", "/auth/logout").describe("").description, None);
    }

    #[test]
    fn test_form_clears_headers() {
        let req = post("Upload", "/velocity/jobs/1/upload")
            .json(json!({}))
            .form(vec![FormField::file("file")]);
        assert!(req.headers.is_empty());
        assert!(req.is_multipart());
    }

    #[test]
    fn test_method_helpers() {
        assert_eq!(patch("Patch User", "/users/1").method, Method::Patch);
        assert_eq!(delete("Delete User", "/users/1").method, Method::Delete);
        assert_eq!(put("Activate User", "/users/1/activate").method, Method::Put);
    }

    #[test]
    fn test_factory_is_deterministic() {
        let a = create_request("Update Price", Method::Put, "/contracts/1/prices/1", Some(json!({"price": 89.99})), true, "");
        let b = create_request("Update Price", Method::Put, "/contracts/1/prices/1", Some(json!({"price": 89.99})), true, "");
        assert_eq!(a, b);
    }
}
