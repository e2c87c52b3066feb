// Column type compatibility rules

const NUMERIC_TYPES: &[&str] = &[
    "int8", "int16", "int32", "int64", "uint8", "uint16", "uint32", "uint64", "float32", "float64",
];

const STRING_TYPES: &[&str] = &["str", "utf8", "categorical"];

/// Family a column type name belongs to, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeFamily {
    Numeric,
    String,
}

impl TypeFamily {
    pub fn of(type_name: &str) -> Option<Self> {
        if NUMERIC_TYPES.contains(&type_name) {
            Some(TypeFamily::Numeric)
        } else if STRING_TYPES.contains(&type_name) {
            Some(TypeFamily::String)
        } else {
            None
        }
    }
}

/// Whether a column of `actual` type satisfies a requirement of `expected` type.
///
/// Exact names always match. Otherwise both names must belong to the same
/// family; names outside every family only match themselves.
pub fn is_compatible(actual: &str, expected: &str) -> bool {
    if actual == expected {
        return true;
    }

    match (TypeFamily::of(actual), TypeFamily::of(expected)) {
        (Some(a), Some(e)) => a == e,
        _ => false,
    }
}
