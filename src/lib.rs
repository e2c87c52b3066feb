//! Dashboard templates: validate a template's data requirements against a
//! project's data collections, then instantiate it as a concrete dashboard.
pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

pub use application::compatibility_validator::{validate, CompatibilityValidator};
pub use application::instantiation_engine::InstantiationEngine;
pub use domain::column_type::is_compatible;
pub use domain::error::InstantiationError;
