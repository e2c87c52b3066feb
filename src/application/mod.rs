// Application layer - Compatibility validation, instantiation and the use cases around them
pub mod compatibility_validator;
pub mod config_rewriter;
pub mod instantiation_engine;
pub mod repositories;
pub mod template_service;
