// Dashboard template domain model
use super::error::InstantiationError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::{HashMap, HashSet};
use std::fmt;

/// Kind of data collection a requirement or data source describes.
///
/// Kinds outside the well-known ones are kept verbatim; only equality matters
/// when matching a requirement against a data source.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DcType {
    Table,
    Genomic,
    Report,
    Other(String),
}

impl DcType {
    pub fn as_str(&self) -> &str {
        match self {
            DcType::Table => "table",
            DcType::Genomic => "genomic",
            DcType::Report => "report",
            DcType::Other(kind) => kind,
        }
    }
}

impl From<String> for DcType {
    fn from(kind: String) -> Self {
        match kind.as_str() {
            "table" => DcType::Table,
            "genomic" => DcType::Genomic,
            "report" => DcType::Report,
            _ => DcType::Other(kind),
        }
    }
}

impl From<DcType> for String {
    fn from(kind: DcType) -> Self {
        match kind {
            DcType::Other(kind) => kind,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for DcType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnRequirement {
    pub name: String,
    #[serde(rename = "type")]
    pub column_type: String,
    #[serde(default)]
    pub optional: bool,
}

impl ColumnRequirement {
    pub fn required(name: &str, column_type: &str) -> Self {
        Self {
            name: name.to_string(),
            column_type: column_type.to_string(),
            optional: false,
        }
    }

    pub fn optional(name: &str, column_type: &str) -> Self {
        Self {
            optional: true,
            ..Self::required(name, column_type)
        }
    }
}

/// What a template expects from the data collection bound to `dc_tag`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataCollectionRequirement {
    pub dc_tag: String,
    pub dc_type: DcType,
    #[serde(default)]
    pub required_columns: Vec<ColumnRequirement>,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentDescriptor {
    pub index: String,
    pub component_type: String,
    pub dc_tag: String,
    #[serde(default)]
    pub config: Value,
}

/// Grid placement of one component. Only `i` is interpreted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutEntry {
    pub i: String,
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl LayoutEntry {
    pub fn new(i: &str, x: i32, y: i32, w: i32, h: i32) -> Self {
        Self {
            i: i.to_string(),
            x,
            y,
            w,
            h,
            extra: Map::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateMetadata {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardTemplate {
    pub template_metadata: TemplateMetadata,
    #[serde(default)]
    pub schema_requirements: Vec<DataCollectionRequirement>,
    #[serde(default)]
    pub components: Vec<ComponentDescriptor>,
    #[serde(default)]
    pub layout: Vec<LayoutEntry>,
}

impl DashboardTemplate {
    pub fn name(&self) -> &str {
        &self.template_metadata.name
    }

    pub fn requirement(&self, dc_tag: &str) -> Option<&DataCollectionRequirement> {
        self.schema_requirements.iter().find(|r| r.dc_tag == dc_tag)
    }

    /// Check the structural invariants a template must hold before it can be
    /// instantiated: every component tag is declared, component indices are
    /// unique, and layout entries reference each component exactly once.
    pub fn check_integrity(&self) -> Result<(), InstantiationError> {
        let declared: HashSet<&str> = self
            .schema_requirements
            .iter()
            .map(|r| r.dc_tag.as_str())
            .collect();

        let mut indices = HashSet::new();
        for component in &self.components {
            if !declared.contains(component.dc_tag.as_str()) {
                return Err(InstantiationError::undeclared_tag(&component.dc_tag));
            }
            if !indices.insert(component.index.as_str()) {
                return Err(InstantiationError::Integrity(format!(
                    "duplicate component index: {}",
                    component.index
                )));
            }
        }

        let mut references: HashMap<&str, usize> = HashMap::new();
        for entry in &self.layout {
            if !indices.contains(entry.i.as_str()) {
                return Err(InstantiationError::Integrity(format!(
                    "layout references unknown component: {}",
                    entry.i
                )));
            }
            *references.entry(entry.i.as_str()).or_default() += 1;
        }

        for component in &self.components {
            if references.get(component.index.as_str()) != Some(&1) {
                return Err(InstantiationError::Integrity(format!(
                    "layout must reference each component exactly once: {}",
                    component.index
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn template() -> DashboardTemplate {
        DashboardTemplate {
            template_metadata: TemplateMetadata {
                name: "iris".to_string(),
                description: String::new(),
                version: "1.0".to_string(),
                tags: vec![],
            },
            schema_requirements: vec![DataCollectionRequirement {
                dc_tag: "iris_table".to_string(),
                dc_type: DcType::Table,
                required_columns: vec![ColumnRequirement::required("sepal.length", "float64")],
                description: String::new(),
            }],
            components: vec![ComponentDescriptor {
                index: "c1".to_string(),
                component_type: "figure".to_string(),
                dc_tag: "iris_table".to_string(),
                config: json!({"visu_type": "scatter"}),
            }],
            layout: vec![LayoutEntry::new("c1", 0, 0, 6, 4)],
        }
    }

    #[test]
    fn test_well_formed_template_passes() {
        assert!(template().check_integrity().is_ok());
    }

    #[test]
    fn test_undeclared_tag() {
        let mut t = template();
        t.components[0].dc_tag = "metadata".to_string();

        let err = t.check_integrity().unwrap_err();
        assert_eq!(
            err,
            InstantiationError::Integrity("component references undeclared tag: metadata".to_string())
        );
    }

    #[test]
    fn test_duplicate_component_index() {
        let mut t = template();
        t.components.push(t.components[0].clone());
        t.layout.push(LayoutEntry::new("c1", 6, 0, 6, 4));

        let err = t.check_integrity().unwrap_err();
        assert_eq!(err.to_string(), "integrity error: duplicate component index: c1");
    }

    #[test]
    fn test_layout_must_cover_components() {
        let mut t = template();
        t.layout.clear();
        assert!(t.check_integrity().is_err());

        let mut t = template();
        t.layout.push(LayoutEntry::new("c1", 6, 0, 6, 4));
        assert!(t.check_integrity().is_err());

        let mut t = template();
        t.layout[0].i = "ghost".to_string();
        assert!(t.check_integrity().is_err());
    }

    #[test]
    fn test_deserialize_from_json() {
        let raw = json!({
            "template_metadata": {"name": "iris", "version": "1.0"},
            "schema_requirements": [{
                "dc_tag": "iris_table",
                "dc_type": "table",
                "required_columns": [
                    {"name": "sepal.length", "type": "float64"},
                    {"name": "petal.width", "type": "float64", "optional": true}
                ]
            }],
            "components": [{
                "index": "c1",
                "component_type": "card",
                "dc_tag": "iris_table",
                "config": {"column_name": "sepal.length"}
            }],
            "layout": [{"i": "c1", "x": 0, "y": 0, "w": 3, "h": 2, "static": false}]
        });

        let t: DashboardTemplate = serde_json::from_value(raw).unwrap();
        assert_eq!(t.name(), "iris");
        assert_eq!(t.schema_requirements[0].dc_type, DcType::Table);
        assert!(t.schema_requirements[0].required_columns[1].optional);
        assert_eq!(t.layout[0].extra.get("static"), Some(&json!(false)));
        assert!(t.requirement("iris_table").is_some());
    }

    #[test]
    fn test_unrecognised_collection_kind_is_kept() {
        let raw = json!({
            "template_metadata": {"name": "qc"},
            "schema_requirements": [{"dc_tag": "qc_report", "dc_type": "multiqc"}]
        });

        let t: DashboardTemplate = serde_json::from_value(raw).unwrap();
        let kind = &t.schema_requirements[0].dc_type;

        assert_eq!(kind, &DcType::Other("multiqc".to_string()));
        assert_eq!(kind.to_string(), "multiqc");
        assert_eq!(serde_json::to_value(kind).unwrap(), json!("multiqc"));
        assert_eq!(DcType::from("table".to_string()), DcType::Table);
    }
}
