//! lcmvec Codegen — LCM vector type bundles from a title and field list
//!
//! This library turns a declarative vector description (a human title phrase
//! plus an ordered list of snake_case field names) into a mutually-consistent
//! set of artifacts:
//!
//! - **Vector header** — index-table struct, zeroing default constructor,
//!   accessor pair per field, free `encode`/`decode` functions
//! - **Vector source** — out-of-line storage for the index constants
//! - **Translator header/source** — the boundary adapter between
//!   `VectorBase` objects and raw LCM message bytes
//! - **Wire schema** — the `.lcm` message definition (`timestamp` plus one
//!   `double` per field)
//!
//! All naming flows through [`names::DerivedNames`] and row positions through
//! [`ir::VectorIr`], so regenerating with the same input always yields a
//! byte-identical, internally consistent bundle.
//!
//! # Usage
//!
//! ```rust
//! use lcmvec_codegen::{generate_bundle, RenderContext, VectorDef};
//!
//! let def = VectorDef::new("driving command", ["steering_angle", "throttle", "brake"]);
//! let artifacts = generate_bundle(&def, &RenderContext::default()).unwrap();
//!
//! assert_eq!(artifacts.len(), 5);
//! let header = artifacts.iter().find(|a| a.file_name == "driving_command.h").unwrap();
//! assert!(header.contents.contains("static const int kSteeringAngle = 0;"));
//! ```

pub mod cxx;
pub mod ir;
pub mod lcm;
pub mod names;
pub mod render;
pub mod schema;
pub mod validate;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use cxx::CxxBackend;
pub use ir::{FieldIr, VectorIr};
pub use lcm::generate_wire_schema;
pub use names::{to_constant_name, DerivedNames};
pub use render::{generate_bundle, Artifact, ArtifactKind, Backend, BundleError, RenderContext};
pub use schema::{SchemaSet, VectorDef};
pub use validate::{is_valid, validate, validate_set, Severity, ValidationError};
