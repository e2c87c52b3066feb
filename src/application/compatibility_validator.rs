// Compatibility validator - Checks a template's schema requirements against a project
use crate::domain::column_type::is_compatible;
use crate::domain::data_source::ProjectDataSource;
use crate::domain::template::{DashboardTemplate, DataCollectionRequirement};
use crate::domain::validation::{DcMapping, Severity, ValidationIssue, ValidationResult};
use std::collections::HashMap;

/// Validates one template against the data sources of a target project.
///
/// Every requirement and every column is evaluated, so a single call returns
/// the complete report. The validator holds no state beyond the borrowed
/// template; identical inputs always produce identical reports.
pub struct CompatibilityValidator<'a> {
    template: &'a DashboardTemplate,
}

impl<'a> CompatibilityValidator<'a> {
    pub fn new(template: &'a DashboardTemplate) -> Self {
        Self { template }
    }

    pub fn validate(&self, data_sources: &[ProjectDataSource]) -> ValidationResult {
        let mut result = ValidationResult::default();

        let sources_by_tag = match index_by_tag(data_sources) {
            Ok(index) => index,
            Err(issue) => {
                tracing::warn!(
                    "Refusing to validate template {}: {}",
                    self.template.name(),
                    issue
                );
                result.record(&issue);
                return result.finish();
            }
        };

        for requirement in &self.template.schema_requirements {
            let source = sources_by_tag.get(requirement.dc_tag.as_str()).copied();
            let issues = check_requirement(requirement, source);

            let mut fatal = false;
            for issue in &issues {
                tracing::debug!("{}: {}", self.template.name(), issue);
                fatal |= issue.severity() == Severity::Error;
                result.record(issue);
            }

            if fatal {
                continue;
            }
            if let Some(source) = source {
                result.mappings.insert(
                    requirement.dc_tag.clone(),
                    DcMapping {
                        dc_id: source.dc_id.clone(),
                        workflow_id: source.workflow_id.clone(),
                    },
                );
            }
        }

        let result = result.finish();
        tracing::info!(
            "Validated template {}: valid={}, {} errors, {} warnings",
            self.template.name(),
            result.valid,
            result.errors.len(),
            result.warnings.len()
        );
        result
    }
}

/// Validate `template` against `data_sources`.
pub fn validate(template: &DashboardTemplate, data_sources: &[ProjectDataSource]) -> ValidationResult {
    CompatibilityValidator::new(template).validate(data_sources)
}

/// Build the tag lookup, failing on the first tag supplied twice.
fn index_by_tag(
    data_sources: &[ProjectDataSource],
) -> Result<HashMap<&str, &ProjectDataSource>, ValidationIssue> {
    let mut index = HashMap::with_capacity(data_sources.len());
    for source in data_sources {
        if index.insert(source.dc_tag.as_str(), source).is_some() {
            return Err(ValidationIssue::DuplicateTag {
                tag: source.dc_tag.clone(),
            });
        }
    }
    Ok(index)
}

/// Issues for a single requirement, in column declaration order.
fn check_requirement(
    requirement: &DataCollectionRequirement,
    source: Option<&ProjectDataSource>,
) -> Vec<ValidationIssue> {
    let tag = &requirement.dc_tag;

    let Some(source) = source else {
        return vec![ValidationIssue::MissingDataCollection { tag: tag.clone() }];
    };

    // Column checks are meaningless once the collection kind is wrong
    if source.dc_type != requirement.dc_type {
        return vec![ValidationIssue::CollectionTypeMismatch {
            tag: tag.clone(),
            expected: requirement.dc_type.clone(),
            actual: source.dc_type.clone(),
        }];
    }

    let mut issues = Vec::new();
    for column in &requirement.required_columns {
        match source.column_type(&column.name) {
            None if column.optional => issues.push(ValidationIssue::MissingOptionalColumn {
                tag: tag.clone(),
                column: column.name.clone(),
            }),
            None => issues.push(ValidationIssue::MissingRequiredColumn {
                tag: tag.clone(),
                column: column.name.clone(),
            }),
            Some(actual) if !is_compatible(actual, &column.column_type) => {
                issues.push(ValidationIssue::ColumnTypeMismatch {
                    tag: tag.clone(),
                    column: column.name.clone(),
                    expected: column.column_type.clone(),
                    actual: actual.to_string(),
                })
            }
            Some(_) => {}
        }
    }
    issues
}
