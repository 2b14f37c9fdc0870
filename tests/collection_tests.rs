use npp_collection::{
    Auth, Body, GeneratorConfig, Header, Method, Module, PostAction, VariableScope, VariableStore,
    build_collection, create_request, render,
};
use serde_json::{Value, json};

fn collection() -> npp_collection::Collection {
    build_collection(&GeneratorConfig::default()).unwrap()
}

fn rendered() -> Value {
    serde_json::from_str(&render(&collection()).unwrap()).unwrap()
}

#[test]
fn test_catalog_shape() {
    let collection = collection();
    assert_eq!(collection.modules.len(), 23);
    assert_eq!(collection.endpoint_count(), 189);
    assert_eq!(collection.modules[0].name, "01. Authentication (7 endpoints)");
    assert_eq!(collection.modules[22].name, "23. Proposal Products (4 endpoints)");
}

#[test]
fn test_every_module_count_label_matches() {
    for module in &collection().modules {
        assert_eq!(
            module.declared_count(),
            Some(module.requests.len()),
            "{}",
            module.name
        );
    }
}

#[test]
fn test_segments_rebuild_raw_url() {
    for (_, request) in collection().requests() {
        let suffix = request.url.raw.strip_prefix("{{baseUrl}}/").unwrap();
        assert_eq!(request.url.path.join("/"), suffix, "{}", request.name);
        assert_eq!(request.url.host, vec!["{{baseUrl}}"]);
    }
}

#[test]
fn test_headers_follow_body() {
    for (module, request) in collection().requests() {
        match &request.body {
            Some(Body::Json(_)) => {
                assert_eq!(request.headers.len(), 1, "{}", request.name);
                assert!(request.headers[0].is_json_content_type());
            }
            Some(Body::Form(_)) | None => {
                assert!(request.headers.is_empty(), "{} / {}", module.name, request.name);
            }
        }
    }
}

#[test]
fn test_auth_override_only_when_public() {
    let collection = collection();
    let value = rendered();
    let modules = value["item"].as_array().unwrap();

    for (module, module_json) in collection.modules.iter().zip(modules) {
        let items = module_json["item"].as_array().unwrap();
        for (request, item) in module.requests.iter().zip(items) {
            let auth = item["request"].get("auth");
            if request.requires_auth() {
                assert!(auth.is_none(), "{}", request.name);
            } else {
                assert_eq!(auth, Some(&json!({"type": "noauth"})), "{}", request.name);
            }
        }
    }
}

#[test]
fn test_top_level_layout() {
    let value = rendered();
    let keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["info", "auth", "variable", "item"]);

    assert_eq!(value["info"]["_postman_id"], "npp-contract-mgmt-2026");
    assert_eq!(
        value["info"]["schema"],
        "https://schema.getpostman.com/json/collection/v2.1.0/collection.json"
    );
    assert_eq!(
        value["auth"],
        json!({"type": "bearer", "bearer": [{"key": "token", "value": "{{token}}", "type": "string"}]})
    );
    assert_eq!(
        value["variable"],
        json!([
            {"key": "baseUrl", "value": "http://34.9.77.60:8081/api", "type": "string"},
            {"key": "token", "value": "", "type": "string"}
        ])
    );
}

#[test]
fn test_request_layout() {
    let value = rendered();
    let item = &value["item"][2]["item"][2];
    assert_eq!(item["name"], "Create Role");
    assert_eq!(item["response"], json!([]));

    let keys: Vec<&str> = item["request"]
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(keys, vec!["method", "header", "url", "body"]);
    assert_eq!(item["request"]["method"], "POST");
    assert_eq!(
        item["request"]["header"],
        json!([{"key": "Content-Type", "value": "application/json"}])
    );
    assert_eq!(
        item["request"]["body"]["raw"],
        "{\n  \"name\": \"New Role\",\n  \"description\": \"Role description\"\n}"
    );
}

#[test]
fn test_get_all_users_descriptor() {
    let collection = collection();
    let users = &collection.modules[1];
    let request = users.find("Get All Users").unwrap();

    assert_eq!(request.method, Method::Get);
    assert_eq!(request.url.path, vec!["users?pageNumber=1&pageSize=10"]);
    assert!(request.body.is_none());
    assert!(request.headers.is_empty());
    assert!(request.auth.is_none());

    let built = create_request(
        "Get All Users",
        Method::Get,
        "/users?pageNumber=1&pageSize=10",
        None,
        true,
        "",
    );
    assert_eq!(request, &built);
}

#[test]
fn test_json_body_descriptor() {
    let request = create_request(
        "Create Role",
        Method::Post,
        "/roles",
        Some(json!({"name": "New Role"})),
        true,
        "",
    );
    assert_eq!(request.headers, vec![Header::json_content_type()]);

    let item = serde_json::to_value(&request).unwrap();
    assert_eq!(
        item["request"]["body"],
        json!({"mode": "raw", "raw": "{\n  \"name\": \"New Role\"\n}"})
    );
}

#[test]
fn test_lookup_count_drift_is_detected() {
    let collection = collection();
    let lookup = collection.modules.iter().find(|m| m.sequence() == Some(16)).unwrap();
    assert_eq!(lookup.requests.len(), 10);

    let ok = Module::new("16. Lookup (10 endpoints)", lookup.requests.clone());
    assert!(ok.check_count().is_ok());

    let drifted = Module::new("16. Lookup (10 endpoints)", lookup.requests[..9].to_vec());
    assert!(drifted.check_count().is_err());
}

#[test]
fn test_lookups_are_public() {
    let collection = collection();
    let lookup = collection.modules.iter().find(|m| m.sequence() == Some(16)).unwrap();
    assert!(lookup.requests.iter().all(|r| r.auth == Some(Auth::NoAuth)));
}

#[test]
fn test_login_captures_token() {
    let collection = collection();
    let login = collection.modules[0].find("Login").unwrap();

    assert_eq!(login.auth, Some(Auth::NoAuth));
    assert_eq!(login.post_actions, vec![PostAction::capture_token()]);

    let item = serde_json::to_value(login).unwrap();
    assert_eq!(item["event"][0]["listen"], "test");
    assert_eq!(item["event"][0]["script"]["type"], "text/javascript");
    assert_eq!(
        item["event"][0]["script"]["exec"][2],
        "    pm.environment.set('token', jsonData.token);"
    );

    let mut store = VariableStore::from_collection(&collection);
    assert_eq!(store.resolve("token"), Some(""));

    let action = &login.post_actions[0];
    assert!(!action.apply(500, &json!({"token": "abc123"}), &mut store));
    assert_eq!(store.resolve("token"), Some(""));

    assert!(action.apply(200, &json!({"token": "abc123"}), &mut store));
    assert_eq!(store.get(VariableScope::Environment, "token"), Some("abc123"));
    assert_eq!(store.get(VariableScope::Collection, "token"), Some("abc123"));
}

#[test]
fn test_only_login_has_post_actions() {
    let collection = collection();
    let with_actions: Vec<&str> = collection
        .requests()
        .filter(|(_, r)| !r.post_actions.is_empty())
        .map(|(_, r)| r.name.as_str())
        .collect();
    assert_eq!(with_actions, vec!["Login"]);
}

#[test]
fn test_velocity_upload_is_multipart() {
    let value = rendered();
    let upload = &value["item"][12]["item"][3];

    assert_eq!(upload["name"], "Upload Velocity File (CSV/Excel)");
    assert_eq!(upload["request"]["header"], json!([]));
    assert_eq!(upload["request"]["body"]["mode"], "formdata");
    assert_eq!(
        upload["request"]["body"]["formdata"],
        json!([
            {"type": "file", "key": "file", "src": []},
            {"type": "text", "key": "distributorId", "value": "1"}
        ])
    );
}

#[test]
fn test_render_is_deterministic() {
    let first = render(&collection()).unwrap();
    let second = render(&collection()).unwrap();
    assert_eq!(first, second);
    assert!(first.starts_with("{\n  \"info\": {"));
    assert!(!first.ends_with('\n'));
}
