//! Post-response actions.
//!
//! A [`PostAction`] tells the consuming client to pull a field out of a JSON
//! response and store it as a variable, so later requests in the same session
//! can reference it. The action is persisted as a client-side test script;
//! [`PostAction::apply`] runs the same instruction in-process against a
//! [`VariableStore`].

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use crate::model::{Collection, TOKEN_VARIABLE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum VariableScope {
    Environment,
    Collection,
}

impl VariableScope {
    fn script_target(&self) -> &'static str {
        match self {
            VariableScope::Environment => "pm.environment",
            VariableScope::Collection => "pm.collectionVariables",
        }
    }
}

/// Capture `field` from a JSON response with status `status` into `variable`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostAction {
    pub status: u16,
    pub field: String,
    pub variable: String,
    pub scopes: Vec<VariableScope>,
}

impl PostAction {
    /// Saves the login token for every following request.
    pub fn capture_token() -> Self {
        Self {
            status: 200,
            field: TOKEN_VARIABLE.to_string(),
            variable: TOKEN_VARIABLE.to_string(),
            scopes: vec![VariableScope::Environment, VariableScope::Collection],
        }
    }

    pub fn script_lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!("if (pm.response.code === {}) {{", self.status),
            "    var jsonData = pm.response.json();".to_string(),
        ];
        for scope in &self.scopes {
            lines.push(format!(
                "    {}.set('{}', jsonData.{});",
                scope.script_target(),
                self.variable,
                self.field
            ));
        }
        lines.push("}".to_string());
        lines
    }

    pub fn to_event(&self) -> Event {
        Event {
            listen: "test".to_string(),
            script: Script {
                exec: self.script_lines(),
                kind: "text/javascript".to_string(),
            },
        }
    }

    /// Interprets the action against a response. Returns whether anything
    /// was stored; on a status mismatch or a missing field the store is left
    /// untouched.
    pub fn apply(&self, status: u16, body: &Value, store: &mut VariableStore) -> bool {
        if status != self.status {
            return false;
        }
        let Some(found) = body.get(&self.field) else {
            return false;
        };
        let value = match found {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        for scope in &self.scopes {
            store.set(*scope, &self.variable, value.clone());
        }
        true
    }
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct Event {
    pub listen: String,
    pub script: Script,
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct Script {
    pub exec: Vec<String>,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Variables as a consuming client holds them during a session.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct VariableStore {
    environment: BTreeMap<String, String>,
    collection: BTreeMap<String, String>,
}

impl VariableStore {
    /// Seeds the collection scope with the collection's declared defaults.
    pub fn from_collection(collection: &Collection) -> Self {
        let mut store = Self::default();
        for var in &collection.variables {
            store.set(VariableScope::Collection, &var.key, var.value.clone());
        }
        store
    }

    pub fn set(&mut self, scope: VariableScope, name: &str, value: String) {
        self.scope_mut(scope).insert(name.to_string(), value);
    }

    pub fn get(&self, scope: VariableScope, name: &str) -> Option<&str> {
        let map = match scope {
            VariableScope::Environment => &self.environment,
            VariableScope::Collection => &self.collection,
        };
        map.get(name).map(String::as_str)
    }

    /// Environment values shadow collection values.
    pub fn resolve(&self, name: &str) -> Option<&str> {
        self.get(VariableScope::Environment, name)
            .or_else(|| self.get(VariableScope::Collection, name))
    }

    fn scope_mut(&mut self, scope: VariableScope) -> &mut BTreeMap<String, String> {
        match scope {
            VariableScope::Environment => &mut self.environment,
            VariableScope::Collection => &mut self.collection,
        }
    }
}
