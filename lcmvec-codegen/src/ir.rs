//! Intermediate representation
//!
//! A validated [`VectorDef`](crate::schema::VectorDef) is lowered once into a
//! [`VectorIr`] — a type with named, indexed fields — and every rendering
//! backend is a pure function of that value. Row indices and constant names
//! are fixed here and nowhere else.

use crate::names::{to_constant_name, DerivedNames};
use crate::schema::VectorDef;

/// One coordinate of the vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIr {
    /// The verbatim field name, also the wire-message field name and the
    /// getter name (`set_` + name for the setter).
    pub name: String,
    /// Row index constant name, e.g. `kSteeringAngle`.
    pub constant: String,
    /// 0-based row index — the single addressing scheme shared by the index
    /// table, the accessors, and the encode/decode mappings.
    pub index: usize,
}

/// The shared read-only model every generator consumes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VectorIr {
    pub names: DerivedNames,
    pub fields: Vec<FieldIr>,
}

impl VectorIr {
    /// Lower a definition into IR. Assumes the definition already passed
    /// [`validate`](crate::validate::validate); naming collisions present in
    /// the input are carried through unchecked here.
    pub fn new(def: &VectorDef) -> Self {
        Self {
            names: DerivedNames::from_title(&def.title),
            fields: def
                .fields
                .iter()
                .enumerate()
                .map(|(index, name)| FieldIr {
                    name: name.clone(),
                    constant: to_constant_name(name),
                    index,
                })
                .collect(),
        }
    }

    /// Total row count, the value of the generated `kNumCoordinates` constant.
    pub fn num_coordinates(&self) -> usize {
        self.fields.len()
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────
