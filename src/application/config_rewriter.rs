// Rewrites tag and index references embedded in component configs
use crate::domain::validation::DcMapping;
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};

/// Component types whose config may point at other components or tags.
const REFERENCE_CARRYING_TYPES: &[&str] = &["interactive"];

/// Lookup tables built once per instantiation.
pub struct Substitutions<'a> {
    pub indices: &'a HashMap<String, String>,
    pub mappings: &'a BTreeMap<String, DcMapping>,
}

pub fn carries_references(component_type: &str) -> bool {
    REFERENCE_CARRYING_TYPES.contains(&component_type)
}

/// Resolve a component config. Configs of kinds not known to carry
/// references are returned verbatim.
pub fn resolve_config(component_type: &str, config: &Value, subs: &Substitutions<'_>) -> Value {
    if !carries_references(component_type) {
        return config.clone();
    }

    let mut resolved = config.clone();
    rewrite(&mut resolved, subs);
    resolved
}

fn rewrite(value: &mut Value, subs: &Substitutions<'_>) {
    match value {
        Value::Object(map) => {
            if let Some(Value::String(old)) = map.get_mut("target_index") {
                substitute_index(old, subs);
            }
            if let Some(Value::Array(targets)) = map.get_mut("target_indices") {
                for target in targets.iter_mut() {
                    if let Value::String(old) = target {
                        substitute_index(old, subs);
                    }
                }
            }

            let mapping = map
                .get("dc_tag")
                .and_then(Value::as_str)
                .and_then(|tag| subs.mappings.get(tag));
            if let Some(mapping) = mapping {
                map.insert("dc_id".to_string(), Value::String(mapping.dc_id.clone()));
                map.insert("wf_id".to_string(), Value::String(mapping.workflow_id.clone()));
            }

            for (key, nested) in map.iter_mut() {
                if key != "target_index" && key != "target_indices" {
                    rewrite(nested, subs);
                }
            }
        }
        Value::Array(items) => {
            for item in items.iter_mut() {
                rewrite(item, subs);
            }
        }
        _ => {}
    }
}

fn substitute_index(old: &mut String, subs: &Substitutions<'_>) {
    match subs.indices.get(old.as_str()) {
        Some(new) => *old = new.clone(),
        None => tracing::debug!("Leaving unknown component reference {} untouched", old),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn tables() -> (HashMap<String, String>, BTreeMap<String, DcMapping>) {
        let mut indices = HashMap::new();
        indices.insert("fig-1".to_string(), "new-fig".to_string());
        indices.insert("card-1".to_string(), "new-card".to_string());

        let mut mappings = BTreeMap::new();
        mappings.insert(
            "iris_table".to_string(),
            DcMapping {
                dc_id: "DC1".to_string(),
                workflow_id: "WF1".to_string(),
            },
        );
        (indices, mappings)
    }

    #[test]
    fn test_plain_components_copied_verbatim() {
        let (indices, mappings) = tables();
        let subs = Substitutions { indices: &indices, mappings: &mappings };
        let config = json!({"target_index": "fig-1", "dc_tag": "iris_table"});

        assert_eq!(resolve_config("figure", &config, &subs), config);
    }

    #[test]
    fn test_interactive_references_rewritten() {
        let (indices, mappings) = tables();
        let subs = Substitutions { indices: &indices, mappings: &mappings };
        let config = json!({
            "interactive_type": "RangeSlider",
            "column_name": "sepal.length",
            "target_indices": ["fig-1", "card-1", "elsewhere"],
            "filters": [{"dc_tag": "iris_table", "target_index": "fig-1"}]
        });

        let resolved = resolve_config("interactive", &config, &subs);

        assert_eq!(
            resolved,
            json!({
                "interactive_type": "RangeSlider",
                "column_name": "sepal.length",
                "target_indices": ["new-fig", "new-card", "elsewhere"],
                "filters": [{
                    "dc_tag": "iris_table",
                    "dc_id": "DC1",
                    "wf_id": "WF1",
                    "target_index": "new-fig"
                }]
            })
        );
    }

    #[test]
    fn test_unknown_tag_left_alone() {
        let (indices, mappings) = tables();
        let subs = Substitutions { indices: &indices, mappings: &mappings };
        let config = json!({"dc_tag": "metadata"});

        assert_eq!(resolve_config("interactive", &config, &subs), config);
    }
}
