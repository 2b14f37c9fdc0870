use std::collections::HashSet;

use tracing::{debug, info};

use crate::catalog::{self, ModuleSpec};
use crate::config::GeneratorConfig;
use crate::error::CatalogError;
use crate::model::{Auth, Collection, Info, SCHEMA_V2_1, TOKEN_VARIABLE, Variable};
use crate::module::Module;

pub const COLLECTION_ID: &str = "npp-contract-mgmt-2026";

/// Builds the full, validated collection from the static catalog.
pub fn build_collection(config: &GeneratorConfig) -> Result<Collection, CatalogError> {
    let modules = assemble_modules(catalog::MODULES)?;
    Ok(collection_from_modules(config, modules))
}

/// Assembles and validates every module, failing on the first defect.
pub fn assemble_modules(specs: &[ModuleSpec]) -> Result<Vec<Module>, CatalogError> {
    let mut names = HashSet::new();
    let mut modules = Vec::with_capacity(specs.len());
    for spec in specs {
        let module = spec.assemble();
        module.validate()?;
        if !names.insert(spec.name) {
            return Err(CatalogError::DuplicateModule(spec.name.to_string()));
        }
        debug!(module = %module.name, endpoints = module.requests.len(), "assembled module");
        modules.push(module);
    }
    Ok(modules)
}

pub fn collection_from_modules(config: &GeneratorConfig, modules: Vec<Module>) -> Collection {
    let total: usize = modules.iter().map(|m| m.requests.len()).sum();
    info!(modules = modules.len(), endpoints = total, "built collection");

    Collection {
        info: Info {
            id: COLLECTION_ID.to_string(),
            name: format!("NPP Contract Management API - Complete Collection ({total} Endpoints)"),
            description: describe(total, &config.base_url),
            schema: SCHEMA_V2_1.to_string(),
        },
        auth: Auth::bearer(),
        variables: vec![
            Variable::string("baseUrl", config.base_url.clone()),
            Variable::string(TOKEN_VARIABLE, ""),
        ],
        modules,
    }
}

fn describe(total: usize, base_url: &str) -> String {
    format!(
        "Complete Postman collection for NPP Contract Management API with all {total} endpoints.\n\n\
         Base URL: {base_url}\n\n\
         How to use:\n\
         1. Import this collection into Postman\n\
         2. Run 'Login' request first to get JWT token\n\
         3. Token will be automatically saved and used for all subsequent requests\n\
         4. All requests have sample bodies pre-filled"
    )
}
