// Project data source descriptor, as supplied by the schema probe
use super::template::DcType;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectDataSource {
    pub dc_id: String,
    pub dc_tag: String,
    pub dc_type: DcType,
    pub workflow_id: String,
    /// Column name -> physical type name
    #[serde(default)]
    pub column_schema: BTreeMap<String, String>,
}

impl ProjectDataSource {
    pub fn new(dc_id: &str, dc_tag: &str, dc_type: DcType, workflow_id: &str) -> Self {
        Self {
            dc_id: dc_id.to_string(),
            dc_tag: dc_tag.to_string(),
            dc_type,
            workflow_id: workflow_id.to_string(),
            column_schema: BTreeMap::new(),
        }
    }

    pub fn with_column(mut self, name: &str, column_type: &str) -> Self {
        self.column_schema.insert(name.to_string(), column_type.to_string());
        self
    }

    pub fn column_type(&self, name: &str) -> Option<&str> {
        self.column_schema.get(name).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_lookup() {
        let source = ProjectDataSource::new("DC1", "iris_table", DcType::Table, "WF1")
            .with_column("sepal.length", "float64")
            .with_column("variety", "str");

        assert_eq!(source.column_type("variety"), Some("str"));
        assert_eq!(source.column_type("petal.width"), None);
    }
}
