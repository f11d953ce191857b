//! Vector definition validator
//!
//! Checks a [`VectorDef`] for structural and naming errors before any artifact
//! is generated. A finding with [`Severity::Error`] must block generation —
//! the run writes either a complete consistent artifact set or nothing.

use crate::names::to_constant_name;
use crate::schema::{SchemaSet, VectorDef};

/// The implicit leading field of every wire message. User fields must not
/// shadow it.
pub const RESERVED_WIRE_FIELD: &str = "timestamp";

/// A single validation problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Human-readable description of the problem.
    pub message: String,
    /// Location in the input that caused it (e.g. `fields[1]`).
    pub location: String,
    /// Whether this blocks generation (`Error`) or is advisory (`Warning`).
    pub severity: Severity,
}

/// Severity of a [`ValidationError`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Severity {
    /// Blocks generation — the artifact set would be inconsistent or invalid.
    Error,
    /// Advisory — generation proceeds but the output may surprise.
    Warning,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tag = match self.severity {
            Severity::Error => "ERROR",
            Severity::Warning => "WARN",
        };
        write!(f, "[{}] {}: {}", tag, self.location, self.message)
    }
}

/// Validate a single [`VectorDef`] and return all problems found.
///
/// An empty `Vec` means generation may proceed. Any entry with
/// [`Severity::Error`] must abort the run before a file is written.
pub fn validate(def: &VectorDef) -> Vec<ValidationError> {
    let mut errors: Vec<ValidationError> = Vec::new();

    validate_title(def, &mut errors);
    validate_fields(def, &mut errors);

    errors
}

/// Validate every vector in a schema set, plus cross-vector uniqueness.
///
/// Locations are prefixed with `vectors[i]` so findings can be traced back to
/// the `vectors.toml` entry that caused them.
pub fn validate_set(set: &SchemaSet) -> Vec<ValidationError> {
    let mut errors: Vec<ValidationError> = Vec::new();

    if set.vectors.is_empty() {
        errors.push(ValidationError {
            message: "schema contains no vector definitions".to_string(),
            location: "vectors".to_string(),
            severity: Severity::Error,
        });
    }

    let mut seen_snakes: Vec<String> = Vec::new();
    for (idx, def) in set.vectors.iter().enumerate() {
        let loc = format!("vectors[{idx}]");

        for mut e in validate(def) {
            e.location = format!("{loc}.{}", e.location);
            errors.push(e);
        }

        // Two vectors with the same snake name would fight over output files.
        let snake = crate::names::DerivedNames::from_title(&def.title).snake;
        if !snake.is_empty() {
            if seen_snakes.contains(&snake) {
                errors.push(ValidationError {
                    message: format!("duplicate vector title — '{snake}' is already generated"),
                    location: format!("{loc}.title"),
                    severity: Severity::Error,
                });
            } else {
                seen_snakes.push(snake);
            }
        }
    }

    errors
}

/// Returns `true` if `validate()` produces no `Error`-severity findings.
pub fn is_valid(def: &VectorDef) -> bool {
    !validate(def).iter().any(|e| e.severity == Severity::Error)
}

// ── Internal validators ──────────────────────────────────────────────────────

fn validate_title(def: &VectorDef, errors: &mut Vec<ValidationError>) {
    let words: Vec<&str> = def.title.split_whitespace().collect();

    if words.is_empty() {
        errors.push(ValidationError {
            message: "title phrase must not be empty".to_string(),
            location: "title".to_string(),
            severity: Severity::Error,
        });
        return;
    }

    for word in words {
        let ok = word.chars().next().map(|c| c.is_alphabetic()).unwrap_or(false)
            && word.chars().all(|c| c.is_alphanumeric());
        if !ok {
            errors.push(ValidationError {
                message: format!(
                    "title word '{word}' is not usable as an identifier fragment"
                ),
                location: "title".to_string(),
                severity: Severity::Error,
            });
        }
    }
}

fn validate_fields(def: &VectorDef, errors: &mut Vec<ValidationError>) {
    if def.fields.is_empty() {
        errors.push(ValidationError {
            message: "field list must not be empty".to_string(),
            location: "fields".to_string(),
            severity: Severity::Error,
        });
        return;
    }

    let mut seen_names: Vec<&str> = Vec::new();
    // constant name -> field it was first derived from
    let mut seen_constants: Vec<(String, &str)> = Vec::new();

    for (idx, field) in def.fields.iter().enumerate() {
        let loc = format!("fields[{idx}]");

        if field.is_empty() {
            errors.push(ValidationError {
                message: "field name must not be empty".to_string(),
                location: loc,
                severity: Severity::Error,
            });
            continue;
        }

        if !is_identifier(field) {
            errors.push(ValidationError {
                message: format!(
                    "field name '{field}' is not a valid identifier \
                     (expected letters, digits, and underscores, not starting with a digit)"
                ),
                location: loc.clone(),
                severity: Severity::Error,
            });
            continue;
        }

        if field.chars().any(|c| c.is_uppercase()) {
            errors.push(ValidationError {
                message: format!("field name '{field}' should be lower snake_case"),
                location: loc.clone(),
                severity: Severity::Warning,
            });
        }

        if field == RESERVED_WIRE_FIELD {
            errors.push(ValidationError {
                message: format!(
                    "field name '{RESERVED_WIRE_FIELD}' is reserved — the wire message \
                     already carries a leading timestamp field"
                ),
                location: loc.clone(),
                severity: Severity::Error,
            });
        }

        if seen_names.contains(&field.as_str()) {
            errors.push(ValidationError {
                message: format!("duplicate field name '{field}'"),
                location: loc.clone(),
                severity: Severity::Error,
            });
        } else {
            seen_names.push(field.as_str());
        }

        let constant = to_constant_name(field);
        let collision = seen_constants
            .iter()
            .find(|(c, other)| *c == constant && *other != field.as_str())
            .map(|(_, other)| other.to_string());
        if let Some(other) = collision {
            errors.push(ValidationError {
                message: format!(
                    "field '{field}' derives constant '{constant}' which collides \
                     with field '{other}'"
                ),
                location: loc,
                severity: Severity::Error,
            });
        } else {
            seen_constants.push((constant, field.as_str()));
        }
    }
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_')
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_def() -> VectorDef {
        VectorDef::new("driving command", ["steering_angle", "throttle", "brake"])
    }

    fn has_error(errs: &[ValidationError], needle: &str) -> bool {
        errs.iter()
            .any(|e| e.severity == Severity::Error && e.message.contains(needle))
    }

    #[test]
    fn valid_def_has_no_errors() {
        let errs = validate(&valid_def());
        assert!(errs.is_empty(), "Unexpected findings: {errs:?}");
    }

    #[test]
    fn is_valid_returns_true_for_clean_def() {
        assert!(is_valid(&valid_def()));
    }

    #[test]
    fn detects_empty_title() {
        let errs = validate(&VectorDef::new("  ", ["x"]));
        assert!(has_error(&errs, "title phrase must not be empty"), "{errs:?}");
    }

    #[test]
    fn detects_non_identifier_title_word() {
        let errs = validate(&VectorDef::new("driving-command", ["x"]));
        assert!(has_error(&errs, "not usable as an identifier"), "{errs:?}");
    }

    #[test]
    fn detects_empty_field_list() {
        let errs = validate(&VectorDef::new("foo", Vec::<String>::new()));
        assert!(has_error(&errs, "field list must not be empty"), "{errs:?}");
    }

    #[test]
    fn detects_duplicate_field_names() {
        let errs = validate(&VectorDef::new("foo", ["throttle", "throttle"]));
        assert!(has_error(&errs, "duplicate field name"), "{errs:?}");
    }

    #[test]
    fn detects_constant_name_collision() {
        let errs = validate(&VectorDef::new(
            "foo",
            ["steering_angle", "steering__angle"],
        ));
        assert!(has_error(&errs, "collides"), "{errs:?}");
    }

    #[test]
    fn detects_reserved_timestamp_field() {
        let errs = validate(&VectorDef::new("foo", ["timestamp", "x"]));
        assert!(has_error(&errs, "reserved"), "{errs:?}");
    }

    #[test]
    fn detects_invalid_field_identifier() {
        let errs = validate(&VectorDef::new("foo", ["1st_field"]));
        assert!(has_error(&errs, "not a valid identifier"), "{errs:?}");
    }

    #[test]
    fn warns_on_upper_case_field() {
        let errs = validate(&VectorDef::new("foo", ["steeringAngle"]));
        let has_warn = errs
            .iter()
            .any(|e| e.severity == Severity::Warning && e.message.contains("snake_case"));
        assert!(has_warn, "{errs:?}");
        assert!(is_valid(&VectorDef::new("foo", ["steeringAngle"])));
    }

    #[test]
    fn validate_set_rejects_empty_schema() {
        let errs = validate_set(&SchemaSet { vectors: vec![] });
        assert!(has_error(&errs, "no vector definitions"), "{errs:?}");
    }

    #[test]
    fn validate_set_detects_duplicate_titles() {
        let set = SchemaSet {
            vectors: vec![
                VectorDef::new("driving command", ["x"]),
                VectorDef::new("Driving Command", ["y"]),
            ],
        };
        let errs = validate_set(&set);
        assert!(has_error(&errs, "duplicate vector title"), "{errs:?}");
    }

    #[test]
    fn validate_set_prefixes_locations() {
        let set = SchemaSet {
            vectors: vec![VectorDef::new("foo", Vec::<String>::new())],
        };
        let errs = validate_set(&set);
        assert!(
            errs.iter().any(|e| e.location == "vectors[0].fields"),
            "{errs:?}"
        );
    }

    #[test]
    fn display_format() {
        let e = ValidationError {
            message: "something wrong".to_string(),
            location: "fields[0]".to_string(),
            severity: Severity::Error,
        };
        let s = format!("{e}");
        assert!(s.contains("[ERROR]"), "Display should show [ERROR]:\n{s}");
        assert!(s.contains("fields[0]"), "Display should show location:\n{s}");
    }
}
