//! Rendering seam and bundle assembly
//!
//! Backends turn a [`VectorIr`] into named text artifacts. The schema and
//! consistency logic lives in the IR; everything syntax-specific sits behind
//! [`Backend`], so adding a target language means adding a backend, not
//! touching the model.

use crate::cxx::CxxBackend;
use crate::ir::VectorIr;
use crate::lcm;
use crate::schema::VectorDef;
use crate::validate::{validate, Severity, ValidationError};

// ── Artifacts ────────────────────────────────────────────────────────────────

/// Where an artifact belongs; callers route each kind to its own destination
/// directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    /// C++ headers and sources.
    Source,
    /// The `.lcm` wire-schema definition.
    WireSchema,
}

/// One generated output document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// File name without directory, e.g. `driving_command.h`.
    pub file_name: String,
    pub kind: ArtifactKind,
    pub contents: String,
}

// ── Render context ───────────────────────────────────────────────────────────

/// Caller-injected configuration the backends substitute into their output.
///
/// The core never discovers any of these values itself (no repository-root
/// lookups); the defaults reproduce the reference project layout.
#[derive(Debug, Clone)]
pub struct RenderContext {
    /// Enclosing C++ namespace path, outermost first.
    pub namespace: Vec<String>,
    /// Export/visibility macro placed on generated classes.
    pub export_macro: String,
    /// Header that defines the export macro.
    pub export_include: String,
    /// Include prefix under which the generated headers live.
    pub include_prefix: String,
    /// LCM package name, also the C++ namespace of the wire message type.
    pub wire_package: String,
    /// Tag written into the "generated by" comment of every artifact.
    pub generated_by: String,
}

impl Default for RenderContext {
    fn default() -> Self {
        Self {
            namespace: vec!["drake".to_string(), "cars".to_string()],
            export_macro: "DRAKECARS_EXPORT".to_string(),
            export_include: "drake/drakeCars_export.h".to_string(),
            include_prefix: "drake/examples/Cars/gen".to_string(),
            wire_package: "drake".to_string(),
            generated_by: "lcmvec generate".to_string(),
        }
    }
}

// ── Backend trait ────────────────────────────────────────────────────────────

/// A per-target-language renderer. Pure: same IR and context, same artifacts.
pub trait Backend {
    fn name(&self) -> &'static str;
    fn render(&self, ir: &VectorIr, ctx: &RenderContext) -> Vec<Artifact>;
}

// ── Bundle assembly ──────────────────────────────────────────────────────────

/// Why a generation run produced no artifacts.
#[derive(Debug)]
pub enum BundleError {
    /// The definition failed validation. Holds every finding, not just the
    /// first, so callers can report them all at once.
    Invalid(Vec<ValidationError>),
}

impl std::fmt::Display for BundleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BundleError::Invalid(errors) => {
                let n = errors
                    .iter()
                    .filter(|e| e.severity == Severity::Error)
                    .count();
                write!(f, "vector definition failed validation ({n} error(s))")
            }
        }
    }
}

impl std::error::Error for BundleError {}

/// Generate the complete artifact set for one vector definition.
///
/// Validates first and refuses to render anything when an `Error`-severity
/// finding exists, so a caller can never write a partial or inconsistent
/// bundle. On success the set holds exactly five artifacts: vector header,
/// vector source, translator header, translator source, and the wire schema.
pub fn generate_bundle(
    def: &VectorDef,
    ctx: &RenderContext,
) -> Result<Vec<Artifact>, BundleError> {
    let findings = validate(def);
    if findings.iter().any(|e| e.severity == Severity::Error) {
        return Err(BundleError::Invalid(findings));
    }

    let ir = VectorIr::new(def);
    let mut artifacts = CxxBackend.render(&ir, ctx);
    artifacts.push(lcm::generate_wire_schema(&ir, ctx));
    Ok(artifacts)
}

// ── Tests ────────────────────────────────────────────────────────────────────
