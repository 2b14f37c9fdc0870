//! Generator for the NPP Contract Management API request collection.
//!
//! The catalog in [`catalog`] lists every endpoint as a [`RequestDescriptor`]
//! grouped into [`Module`]s; [`build_collection`] validates and assembles it
//! and [`write_collection`] persists it as a Postman v2.1 collection file.

pub mod catalog;
pub mod collection;
pub mod config;
pub mod error;
pub mod model;
pub mod module;
pub mod post_action;
pub mod request;
pub mod writer;

pub use collection::{assemble_modules, build_collection};
pub use config::GeneratorConfig;
pub use error::{CatalogError, WriteError};
pub use model::{Auth, Body, Collection, FormField, Header, Method, RequestDescriptor, Url};
pub use module::Module;
pub use post_action::{PostAction, VariableScope, VariableStore};
pub use request::create_request;
pub use writer::{render, write_collection};
