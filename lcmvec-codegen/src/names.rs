//! Naming deriver
//!
//! Every identifier in the generated bundle comes from one of two pure
//! functions: [`DerivedNames::from_title`] for the type-level names and
//! [`to_constant_name`] for the per-field row index constants. Generators
//! consume these by reference and never re-derive names ad hoc, which is what
//! keeps the five artifacts mutually consistent.

/// The identifier conventions derived once from a title phrase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedNames {
    /// Type identifier, e.g. `DrivingCommand`.
    pub camel: String,
    /// Wire-schema / file identifier, e.g. `driving_command`.
    pub snake: String,
    /// Channel / constant identifier, e.g. `DRIVING_COMMAND`.
    pub screaming_snake: String,
}

impl DerivedNames {
    /// Derive all three conventions from a whitespace-separated title phrase.
    ///
    /// # Examples
    /// ```
    /// # use lcmvec_codegen::names::DerivedNames;
    /// let names = DerivedNames::from_title("driving command");
    /// assert_eq!(names.camel, "DrivingCommand");
    /// assert_eq!(names.snake, "driving_command");
    /// assert_eq!(names.screaming_snake, "DRIVING_COMMAND");
    /// ```
    pub fn from_title(title: &str) -> Self {
        let words: Vec<&str> = title.split_whitespace().collect();
        Self {
            camel: words.iter().map(|w| capitalize_first(w)).collect(),
            snake: words
                .iter()
                .map(|w| w.to_lowercase())
                .collect::<Vec<_>>()
                .join("_"),
            screaming_snake: words
                .iter()
                .map(|w| w.to_uppercase())
                .collect::<Vec<_>>()
                .join("_"),
        }
    }
}

/// Derive the row index constant name for a field.
///
/// `k` + each underscore-separated segment with its first letter capitalized.
/// Distinct field names can collide here (`steering_angle` vs
/// `steering__angle`); the validator rejects such inputs before generation.
///
/// # Examples
/// ```
/// # use lcmvec_codegen::names::to_constant_name;
/// assert_eq!(to_constant_name("steering_angle"), "kSteeringAngle");
/// assert_eq!(to_constant_name("throttle"), "kThrottle");
/// ```
pub fn to_constant_name(field: &str) -> String {
    let mut out = String::from("k");
    for segment in field.split('_') {
        out.push_str(&capitalize_first(segment));
    }
    out
}

/// Upper-case the first letter, leaving the remaining letters as given.
fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => {
            let upper: String = first.to_uppercase().collect();
            upper + chars.as_str()
        }
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_word_title() {
        let names = DerivedNames::from_title("throttle");
        assert_eq!(names.camel, "Throttle");
        assert_eq!(names.snake, "throttle");
        assert_eq!(names.screaming_snake, "THROTTLE");
    }

    #[test]
    fn multi_word_title() {
        let names = DerivedNames::from_title("euler floating joint state");
        assert_eq!(names.camel, "EulerFloatingJointState");
        assert_eq!(names.snake, "euler_floating_joint_state");
        assert_eq!(names.screaming_snake, "EULER_FLOATING_JOINT_STATE");
    }

    #[test]
    fn camel_preserves_interior_case() {
        // Only the first letter of each word is touched.
        let names = DerivedNames::from_title("simpleCar state");
        assert_eq!(names.camel, "SimpleCarState");
    }

    #[test]
    fn extra_whitespace_ignored() {
        let names = DerivedNames::from_title("  driving   command ");
        assert_eq!(names.snake, "driving_command");
    }

    #[test]
    fn derivation_is_deterministic() {
        let a = DerivedNames::from_title("driving command");
        let b = DerivedNames::from_title("driving command");
        assert_eq!(a, b);
    }

    #[test]
    fn constant_name_single_segment() {
        assert_eq!(to_constant_name("brake"), "kBrake");
    }

    #[test]
    fn constant_name_multi_segment() {
        assert_eq!(to_constant_name("steering_angle"), "kSteeringAngle");
        assert_eq!(to_constant_name("base_roll_rate"), "kBaseRollRate");
    }

    #[test]
    fn constant_name_collision_across_distinct_fields() {
        // This is the injectivity hazard the validator guards against.
        assert_eq!(
            to_constant_name("steering_angle"),
            to_constant_name("steering__angle")
        );
    }
}
