// Compatibility report domain model
use super::template::DcType;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

/// One finding produced while checking a template against a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    DuplicateTag {
        tag: String,
    },
    MissingDataCollection {
        tag: String,
    },
    CollectionTypeMismatch {
        tag: String,
        expected: DcType,
        actual: DcType,
    },
    MissingRequiredColumn {
        tag: String,
        column: String,
    },
    MissingOptionalColumn {
        tag: String,
        column: String,
    },
    ColumnTypeMismatch {
        tag: String,
        column: String,
        expected: String,
        actual: String,
    },
}

impl ValidationIssue {
    pub fn severity(&self) -> Severity {
        match self {
            ValidationIssue::MissingOptionalColumn { .. } => Severity::Warning,
            _ => Severity::Error,
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationIssue::DuplicateTag { tag } => {
                write!(f, "duplicate data source tag: {}", tag)
            }
            ValidationIssue::MissingDataCollection { tag } => {
                write!(f, "missing data collection: {}", tag)
            }
            ValidationIssue::CollectionTypeMismatch { tag, expected, actual } => {
                write!(f, "type mismatch for {}: expected {}, got {}", tag, expected, actual)
            }
            ValidationIssue::MissingRequiredColumn { tag, column } => {
                write!(f, "missing required column: {}.{}", tag, column)
            }
            ValidationIssue::MissingOptionalColumn { tag, column } => {
                write!(f, "missing optional column: {}.{}", tag, column)
            }
            ValidationIssue::ColumnTypeMismatch {
                tag,
                column,
                expected,
                actual,
            } => write!(
                f,
                "type mismatch at {}.{}: expected {}, got {}",
                tag, column, expected, actual
            ),
        }
    }
}

/// Concrete binding of a template tag to a project data collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DcMapping {
    pub dc_id: String,
    pub workflow_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    /// Only tags whose requirement was fully satisfied.
    pub mappings: BTreeMap<String, DcMapping>,
}

impl ValidationResult {
    /// Route an issue to the error or warning list.
    pub fn record(&mut self, issue: &ValidationIssue) {
        match issue.severity() {
            Severity::Error => self.errors.push(issue.to_string()),
            Severity::Warning => self.warnings.push(issue.to_string()),
        }
    }

    pub fn mapping(&self, dc_tag: &str) -> Option<&DcMapping> {
        self.mappings.get(dc_tag)
    }

    /// Seal the report: it is valid iff no error was recorded.
    pub fn finish(mut self) -> Self {
        self.valid = self.errors.is_empty();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_messages() {
        let issue = ValidationIssue::CollectionTypeMismatch {
            tag: "iris_table".to_string(),
            expected: DcType::Table,
            actual: DcType::Report,
        };
        assert_eq!(issue.to_string(), "type mismatch for iris_table: expected table, got report");

        let issue = ValidationIssue::ColumnTypeMismatch {
            tag: "iris_table".to_string(),
            column: "variety".to_string(),
            expected: "str".to_string(),
            actual: "int64".to_string(),
        };
        assert_eq!(
            issue.to_string(),
            "type mismatch at iris_table.variety: expected str, got int64"
        );
    }

    #[test]
    fn test_record_routes_by_severity() {
        let mut result = ValidationResult::default();
        result.record(&ValidationIssue::MissingOptionalColumn {
            tag: "t".to_string(),
            column: "c".to_string(),
        });
        assert!(result.clone().finish().valid);

        result.record(&ValidationIssue::MissingRequiredColumn {
            tag: "t".to_string(),
            column: "d".to_string(),
        });
        let result = result.finish();

        assert!(!result.valid);
        assert_eq!(result.warnings, vec!["missing optional column: t.c"]);
        assert_eq!(result.errors, vec!["missing required column: t.d"]);
    }
}
