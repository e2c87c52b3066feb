// Domain layer - Templates, data sources and the compatibility rules between them
pub mod column_type;
pub mod dashboard;
pub mod data_source;
pub mod error;
pub mod template;
pub mod validation;
