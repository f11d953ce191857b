//! Wire schema generator
//!
//! Emits the `.lcm` message definition: a leading `int64_t timestamp`
//! (milliseconds) followed by one `double` per coordinate, in field-list
//! order. The field order here and the row indices in the generated C++ come
//! from the same [`VectorIr`], which is what keeps encode/decode correct
//! without per-field lookups.

use crate::ir::VectorIr;
use crate::render::{Artifact, ArtifactKind, RenderContext};

pub fn generate_wire_schema(ir: &VectorIr, ctx: &RenderContext) -> Artifact {
    let snake = &ir.names.snake;
    let mut out = String::new();

    out.push_str(&format!(
        "// This file is generated by {}. Do not edit.\n",
        ctx.generated_by
    ));
    out.push_str(&format!("package {};\n\n", ctx.wire_package));
    out.push_str(&format!("struct lcmt_{snake}_t\n{{\n"));
    out.push_str("  int64_t timestamp;\n\n");
    for field in &ir.fields {
        out.push_str(&format!("  double {};\n", field.name));
    }
    out.push_str("}\n");

    Artifact {
        file_name: format!("lcmt_{snake}_t.lcm"),
        kind: ArtifactKind::WireSchema,
        contents: out,
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────
