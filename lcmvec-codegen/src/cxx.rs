//! C++ rendering backend
//!
//! Renders a [`VectorIr`] into the four C++ artifacts: the vector type header
//! (index table, default constructor, accessors, free `encode`/`decode`
//! functions), the out-of-line constant storage source, and the translator
//! declaration/definition pair. Every identifier comes from the IR; nothing is
//! re-derived here.

use crate::ir::VectorIr;
use crate::render::{Artifact, ArtifactKind, Backend, RenderContext};

pub struct CxxBackend;

impl Backend for CxxBackend {
    fn name(&self) -> &'static str {
        "cxx"
    }

    fn render(&self, ir: &VectorIr, ctx: &RenderContext) -> Vec<Artifact> {
        let snake = &ir.names.snake;
        vec![
            Artifact {
                file_name: format!("{snake}.h"),
                kind: ArtifactKind::Source,
                contents: vector_header(ir, ctx),
            },
            Artifact {
                file_name: format!("{snake}.cc"),
                kind: ArtifactKind::Source,
                contents: vector_source(ir, ctx),
            },
            Artifact {
                file_name: format!("{snake}_translator.h"),
                kind: ArtifactKind::Source,
                contents: translator_header(ir, ctx),
            },
            Artifact {
                file_name: format!("{snake}_translator.cc"),
                kind: ArtifactKind::Source,
                contents: translator_source(ir, ctx),
            },
        ]
    }
}

// ── Shared fragments ─────────────────────────────────────────────────────────

fn generated_banner(ctx: &RenderContext) -> String {
    format!(
        "// This file is generated by a script.  Do not edit!\n// See {}.\n",
        ctx.generated_by
    )
}

fn namespace_open(ctx: &RenderContext) -> String {
    let mut out = String::new();
    for ns in &ctx.namespace {
        out.push_str(&format!("namespace {ns} {{\n"));
    }
    out
}

fn namespace_close(ctx: &RenderContext) -> String {
    let mut out = String::new();
    for ns in ctx.namespace.iter().rev() {
        out.push_str(&format!("}}  // namespace {ns}\n"));
    }
    out
}

fn indices_name(ir: &VectorIr) -> String {
    format!("{}Indices", ir.names.camel)
}

/// Fully qualified C++ name of the wire message type.
fn message_type(ir: &VectorIr, ctx: &RenderContext) -> String {
    format!("{}::lcmt_{}_t", ctx.wire_package, ir.names.snake)
}

fn message_include(ir: &VectorIr, ctx: &RenderContext) -> String {
    format!("lcmtypes/{}/lcmt_{}_t.hpp", ctx.wire_package, ir.names.snake)
}

// ── Index table ──────────────────────────────────────────────────────────────

fn emit_indices(ir: &VectorIr, ctx: &RenderContext) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "/// Describes the row indices of a %{}.\n",
        ir.names.camel
    ));
    out.push_str(&format!(
        "struct {} {} {{\n",
        ctx.export_macro,
        indices_name(ir)
    ));
    out.push_str("  /// The total number of rows (coordinates).\n");
    out.push_str(&format!(
        "  static const int kNumCoordinates = {};\n\n",
        ir.num_coordinates()
    ));
    out.push_str("  // The index of each individual coordinate.\n");
    for field in &ir.fields {
        out.push_str(&format!(
            "  static const int {} = {};\n",
            field.constant, field.index
        ));
    }
    out.push_str("};\n");
    out
}

fn emit_indices_storage(ir: &VectorIr) -> String {
    let indices = indices_name(ir);
    let mut out = format!("const int {indices}::kNumCoordinates;\n");
    for field in &ir.fields {
        out.push_str(&format!("const int {indices}::{};\n", field.constant));
    }
    out
}

// ── Vector class body ────────────────────────────────────────────────────────

fn emit_default_ctor(ir: &VectorIr) -> String {
    format!(
        "  /// Default constructor.  Sets all rows to zero.\n\
         \x20 {}() : systems::BasicVector<T>(K::kNumCoordinates) {{\n\
         \x20   this->SetFromVector(VectorX<T>::Zero(K::kNumCoordinates));\n\
         \x20 }}\n",
        ir.names.camel
    )
}

fn emit_accessors(ir: &VectorIr) -> String {
    let mut out = String::new();
    out.push_str("  /// @name Getters and Setters\n  //@{\n");
    for field in &ir.fields {
        let name = &field.name;
        let constant = &field.constant;
        out.push_str(&format!(
            "  const T {name}() const {{ return this->GetAtIndex(K::{constant}); }}\n"
        ));
        out.push_str(&format!(
            "  void set_{name}(const T& {name}) {{\n    this->SetAtIndex(K::{constant}, {name});\n  }}\n"
        ));
    }
    out.push_str("  //@}\n");
    out
}

fn emit_lcm_concept(ir: &VectorIr, ctx: &RenderContext) -> String {
    format!(
        "  /// @name Implement the LCMVector concept\n\
         \x20 //@{{\n\
         \x20 typedef {} LCMMessageType;\n\
         \x20 static std::string channel() {{ return \"{}\"; }}\n\
         \x20 //@}}\n",
        message_type(ir, ctx),
        ir.names.screaming_snake
    )
}

// ── Encode / decode ──────────────────────────────────────────────────────────

fn emit_encode(ir: &VectorIr, ctx: &RenderContext) -> String {
    let camel = &ir.names.camel;
    let mut out = String::new();
    out.push_str(&format!(
        "/// Converts a {camel} and a timestamp in seconds into its wire message.\n\
         /// Sub-millisecond timestamp precision is truncated.\n"
    ));
    out.push_str("template <typename ScalarType>\n");
    out.push_str(&format!(
        "bool encode(const double& t, const {camel}<ScalarType>& wrap,\n\
         \x20           // NOLINTNEXTLINE(runtime/references)\n\
         \x20           {}& msg) {{\n",
        message_type(ir, ctx)
    ));
    out.push_str("  msg.timestamp = static_cast<int64_t>(t * 1000);\n");
    for field in &ir.fields {
        out.push_str(&format!("  msg.{0} = wrap.{0}();\n", field.name));
    }
    out.push_str("  return true;\n}\n");
    out
}

fn emit_decode(ir: &VectorIr, ctx: &RenderContext) -> String {
    let camel = &ir.names.camel;
    let mut out = String::new();
    out.push_str(&format!(
        "/// Converts a wire message back into a {camel} and a timestamp in seconds.\n"
    ));
    out.push_str("template <typename ScalarType>\n");
    out.push_str(&format!(
        "bool decode(const {}& msg,\n\
         \x20           // NOLINTNEXTLINE(runtime/references)\n\
         \x20           double& t,\n\
         \x20           // NOLINTNEXTLINE(runtime/references)\n\
         \x20           {camel}<ScalarType>& wrap) {{\n",
        message_type(ir, ctx)
    ));
    out.push_str("  t = static_cast<double>(msg.timestamp) / 1000.0;\n");
    for field in &ir.fields {
        out.push_str(&format!("  wrap.set_{0}(msg.{0});\n", field.name));
    }
    out.push_str("  return true;\n}\n");
    out
}

// ── Vector files ─────────────────────────────────────────────────────────────

fn vector_header(ir: &VectorIr, ctx: &RenderContext) -> String {
    let camel = &ir.names.camel;
    let mut out = String::new();

    out.push_str("#pragma once\n\n");
    out.push_str(&generated_banner(ctx));
    out.push('\n');
    out.push_str("#include <stdexcept>\n#include <string>\n\n");
    out.push_str("#include <Eigen/Core>\n\n");
    out.push_str(&format!("#include \"{}\"\n", ctx.export_include));
    out.push_str("#include \"drake/systems/framework/basic_vector.h\"\n");
    out.push_str(&format!("#include \"{}\"\n\n", message_include(ir, ctx)));
    out.push_str(&namespace_open(ctx));
    out.push('\n');

    out.push_str(&emit_indices(ir, ctx));
    out.push('\n');

    out.push_str("/// Specializes BasicVector with specific getters and setters.\n");
    out.push_str("template <typename T>\n");
    out.push_str(&format!(
        "class {camel} : public systems::BasicVector<T> {{\n public:\n"
    ));
    out.push_str("  // An abbreviation for our row index constants.\n");
    out.push_str(&format!("  typedef {} K;\n\n", indices_name(ir)));
    out.push_str(&emit_default_ctor(ir));
    out.push('\n');
    out.push_str(&emit_accessors(ir));
    out.push('\n');
    out.push_str(&emit_lcm_concept(ir, ctx));
    out.push_str("};\n\n");

    out.push_str(&emit_encode(ir, ctx));
    out.push('\n');
    out.push_str(&emit_decode(ir, ctx));
    out.push('\n');
    out.push_str(&namespace_close(ctx));
    out
}

fn vector_source(ir: &VectorIr, ctx: &RenderContext) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "#include \"{}/{}.h\"\n\n",
        ctx.include_prefix, ir.names.snake
    ));
    out.push_str(&generated_banner(ctx));
    out.push('\n');
    out.push_str(&namespace_open(ctx));
    out.push('\n');
    out.push_str(&emit_indices_storage(ir));
    out.push('\n');
    out.push_str(&namespace_close(ctx));
    out
}

// ── Translator files ─────────────────────────────────────────────────────────

fn translator_name(ir: &VectorIr) -> String {
    format!("{}Translator", ir.names.camel)
}

fn translator_header(ir: &VectorIr, ctx: &RenderContext) -> String {
    let translator = translator_name(ir);
    let mut out = String::new();

    out.push_str("#pragma once\n\n");
    out.push_str(&generated_banner(ctx));
    out.push('\n');
    out.push_str(&format!("#include \"{}\"\n", ctx.export_include));
    out.push_str(&format!(
        "#include \"{}/{}.h\"\n",
        ctx.include_prefix, ir.names.snake
    ));
    out.push_str("#include \"drake/systems/lcm/lcm_and_vector_base_translator.h\"\n");
    out.push_str(&format!("#include \"{}\"\n\n", message_include(ir, ctx)));
    out.push_str(&namespace_open(ctx));
    out.push('\n');

    out.push_str(&format!(
        "/**\n\
         \x20* Translates between LCM message objects and VectorBase objects for the\n\
         \x20* {} type.\n\
         \x20*/\n",
        ir.names.camel
    ));
    out.push_str(&format!(
        "class {} {translator}\n    : public systems::lcm::LcmAndVectorBaseTranslator {{\n public:\n",
        ctx.export_macro
    ));
    out.push_str(&format!(
        "  {translator}()\n      : LcmAndVectorBaseTranslator({}::kNumCoordinates) {{}}\n",
        indices_name(ir)
    ));
    out.push_str(
        "  std::unique_ptr<systems::BasicVector<double>> AllocateOutputVector()\n\
         \x20     const override;\n",
    );
    out.push_str(
        "  void TranslateLcmToVectorBase(\n\
         \x20     const void* lcm_message_bytes, int lcm_message_length,\n\
         \x20     systems::VectorBase<double>* vector_base) const override;\n",
    );
    out.push_str(
        "  void TranslateVectorBaseToLcm(\n\
         \x20     const systems::VectorBase<double>& vector_base,\n\
         \x20     std::vector<uint8_t>* lcm_message_bytes) const override;\n",
    );
    out.push_str("};\n\n");
    out.push_str(&namespace_close(ctx));
    out
}

fn emit_allocate_output_vector(ir: &VectorIr) -> String {
    format!(
        "std::unique_ptr<systems::BasicVector<double>>\n\
         {}::AllocateOutputVector() const {{\n\
         \x20 return std::make_unique<{}<double>>();\n\
         }}\n",
        translator_name(ir),
        ir.names.camel
    )
}

fn emit_serialize(ir: &VectorIr, ctx: &RenderContext) -> String {
    let camel = &ir.names.camel;
    let mut out = String::new();
    out.push_str(&format!(
        "void {}::TranslateVectorBaseToLcm(\n\
         \x20   const systems::VectorBase<double>& vector_base,\n\
         \x20   std::vector<uint8_t>* lcm_message_bytes) const {{\n",
        translator_name(ir)
    ));
    out.push_str(&format!(
        "  const auto* const vector =\n\
         \x20     dynamic_cast<const {camel}<double>*>(&vector_base);\n\
         \x20 DRAKE_ABORT_UNLESS(vector != nullptr);\n"
    ));
    out.push_str(&format!("  {} message;\n", message_type(ir, ctx)));
    // This path carries no logical time; zero the field so the encoded
    // bytes are deterministic.
    out.push_str("  message.timestamp = 0;\n");
    for field in &ir.fields {
        out.push_str(&format!("  message.{0} = vector->{0}();\n", field.name));
    }
    out.push_str(
        "  const int lcm_message_length = message.getEncodedSize();\n\
         \x20 lcm_message_bytes->resize(lcm_message_length);\n\
         \x20 message.encode(lcm_message_bytes->data(), 0, lcm_message_length);\n}\n",
    );
    out
}

fn emit_deserialize(ir: &VectorIr, ctx: &RenderContext) -> String {
    let camel = &ir.names.camel;
    let mut out = String::new();
    out.push_str(&format!(
        "void {}::TranslateLcmToVectorBase(\n\
         \x20   const void* lcm_message_bytes, int lcm_message_length,\n\
         \x20   systems::VectorBase<double>* vector_base) const {{\n",
        translator_name(ir)
    ));
    out.push_str("  DRAKE_ABORT_UNLESS(vector_base != nullptr);\n");
    out.push_str(&format!(
        "  auto* const my_vector = dynamic_cast<{camel}<double>*>(vector_base);\n\
         \x20 DRAKE_ABORT_UNLESS(my_vector != nullptr);\n\n"
    ));
    out.push_str(&format!("  {} message;\n", message_type(ir, ctx)));
    out.push_str(&format!(
        "  int status = message.decode(lcm_message_bytes, 0, lcm_message_length);\n\
         \x20 if (status < 0) {{\n\
         \x20   throw std::runtime_error(\"Failed to decode LCM message {}.\");\n\
         \x20 }}\n",
        ir.names.snake
    ));
    for field in &ir.fields {
        out.push_str(&format!("  my_vector->set_{0}(message.{0});\n", field.name));
    }
    out.push_str("}\n");
    out
}

fn translator_source(ir: &VectorIr, ctx: &RenderContext) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "#include \"{}/{}_translator.h\"\n\n",
        ctx.include_prefix, ir.names.snake
    ));
    out.push_str(&generated_banner(ctx));
    out.push('\n');
    out.push_str("#include <stdexcept>\n\n");
    out.push_str("#include \"drake/common/drake_assert.h\"\n\n");
    out.push_str(&namespace_open(ctx));
    out.push('\n');
    out.push_str(&emit_allocate_output_vector(ir));
    out.push('\n');
    out.push_str(&emit_serialize(ir, ctx));
    out.push('\n');
    out.push_str(&emit_deserialize(ir, ctx));
    out.push('\n');
    out.push_str(&namespace_close(ctx));
    out
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::VectorDef;

    fn ir() -> VectorIr {
        VectorIr::new(&VectorDef::new(
            "driving command",
            ["steering_angle", "throttle", "brake"],
        ))
    }

    fn ctx() -> RenderContext {
        RenderContext::default()
    }

    fn header() -> String {
        vector_header(&ir(), &ctx())
    }

    #[test]
    fn index_table_counts_and_positions() {
        let out = header();
        assert!(
            out.contains("static const int kNumCoordinates = 3;"),
            "Missing count constant:\n{out}"
        );
        assert!(
            out.contains("static const int kSteeringAngle = 0;"),
            "Missing kSteeringAngle:\n{out}"
        );
        assert!(
            out.contains("static const int kThrottle = 1;"),
            "Missing kThrottle:\n{out}"
        );
        assert!(
            out.contains("static const int kBrake = 2;"),
            "Missing kBrake:\n{out}"
        );
    }

    #[test]
    fn accessors_reference_index_constants() {
        let out = header();
        assert!(
            out.contains(
                "const T steering_angle() const { return this->GetAtIndex(K::kSteeringAngle); }"
            ),
            "Getter must read through the index table:\n{out}"
        );
        assert!(
            out.contains("this->SetAtIndex(K::kSteeringAngle, steering_angle);"),
            "Setter must write through the index table:\n{out}"
        );
        // No hardcoded row positions outside the indices struct.
        assert!(
            !out.contains("GetAtIndex(0)"),
            "Accessors must not hardcode indices:\n{out}"
        );
    }

    #[test]
    fn default_ctor_zeroes_all_rows() {
        let out = header();
        assert!(
            out.contains("DrivingCommand() : systems::BasicVector<T>(K::kNumCoordinates)"),
            "Missing default ctor:\n{out}"
        );
        assert!(
            out.contains("SetFromVector(VectorX<T>::Zero(K::kNumCoordinates))"),
            "Ctor must zero-initialize:\n{out}"
        );
    }

    #[test]
    fn lcm_concept_names_channel_and_message() {
        let out = header();
        assert!(
            out.contains("typedef drake::lcmt_driving_command_t LCMMessageType;"),
            "Missing message typedef:\n{out}"
        );
        assert!(
            out.contains("static std::string channel() { return \"DRIVING_COMMAND\"; }"),
            "Missing channel name:\n{out}"
        );
    }

    #[test]
    fn encode_converts_seconds_to_milliseconds() {
        let out = header();
        assert!(
            out.contains("msg.timestamp = static_cast<int64_t>(t * 1000);"),
            "Missing timestamp scale conversion:\n{out}"
        );
        assert!(
            out.contains("msg.steering_angle = wrap.steering_angle();"),
            "Missing encode field copy:\n{out}"
        );
    }

    #[test]
    fn decode_inverts_encode_field_for_field() {
        let out = header();
        assert!(
            out.contains("t = static_cast<double>(msg.timestamp) / 1000.0;"),
            "Missing timestamp back-conversion:\n{out}"
        );
        for field in ["steering_angle", "throttle", "brake"] {
            assert!(
                out.contains(&format!("wrap.set_{field}(msg.{field});")),
                "Missing decode copy for {field}:\n{out}"
            );
        }
    }

    #[test]
    fn header_carries_generated_banner_and_guard() {
        let out = header();
        assert!(out.starts_with("#pragma once\n"), "Missing pragma once:\n{out}");
        assert!(
            out.contains("generated by a script.  Do not edit!"),
            "Missing generated banner:\n{out}"
        );
        assert!(
            out.contains("See lcmvec generate."),
            "Missing generator tag:\n{out}"
        );
    }

    #[test]
    fn namespaces_open_and_close_in_order() {
        let out = header();
        assert!(out.contains("namespace drake {\nnamespace cars {"), "{out}");
        assert!(
            out.trim_end()
                .ends_with("}  // namespace cars\n}  // namespace drake"),
            "{out}"
        );
    }

    #[test]
    fn storage_defines_every_constant_out_of_line() {
        let out = vector_source(&ir(), &ctx());
        assert!(
            out.contains("const int DrivingCommandIndices::kNumCoordinates;"),
            "{out}"
        );
        for constant in ["kSteeringAngle", "kThrottle", "kBrake"] {
            assert!(
                out.contains(&format!("const int DrivingCommandIndices::{constant};")),
                "Missing storage for {constant}:\n{out}"
            );
        }
        assert!(
            out.contains("#include \"drake/examples/Cars/gen/driving_command.h\""),
            "Storage file must include its own header:\n{out}"
        );
    }

    #[test]
    fn translator_decl_fixes_row_count_at_construction() {
        let out = translator_header(&ir(), &ctx());
        assert!(
            out.contains("class DRAKECARS_EXPORT DrivingCommandTranslator"),
            "{out}"
        );
        assert!(
            out.contains("LcmAndVectorBaseTranslator(DrivingCommandIndices::kNumCoordinates)"),
            "Translator must take its row count from the index table:\n{out}"
        );
    }

    #[test]
    fn translator_allocates_concrete_vector() {
        let out = translator_source(&ir(), &ctx());
        assert!(
            out.contains("return std::make_unique<DrivingCommand<double>>();"),
            "{out}"
        );
    }

    #[test]
    fn serialize_aborts_on_type_mismatch() {
        let out = translator_source(&ir(), &ctx());
        assert!(
            out.contains("dynamic_cast<const DrivingCommand<double>*>(&vector_base)"),
            "{out}"
        );
        assert!(
            out.contains("DRAKE_ABORT_UNLESS(vector != nullptr);"),
            "Type mismatch must abort:\n{out}"
        );
    }

    #[test]
    fn serialize_zeroes_timestamp_and_copies_fields() {
        let out = translator_source(&ir(), &ctx());
        assert!(out.contains("message.timestamp = 0;"), "{out}");
        for field in ["steering_angle", "throttle", "brake"] {
            assert!(
                out.contains(&format!("message.{field} = vector->{field}();")),
                "Missing serialize copy for {field}:\n{out}"
            );
        }
        assert!(
            out.contains("message.encode(lcm_message_bytes->data(), 0, lcm_message_length);"),
            "{out}"
        );
    }

    #[test]
    fn deserialize_reports_malformed_bytes() {
        let out = translator_source(&ir(), &ctx());
        assert!(
            out.contains("if (status < 0) {"),
            "Decode status must be checked:\n{out}"
        );
        assert!(
            out.contains("Failed to decode LCM message driving_command."),
            "{out}"
        );
        assert!(
            out.contains("my_vector->set_brake(message.brake);"),
            "{out}"
        );
    }

    #[test]
    fn context_overrides_flow_through() {
        let ctx = RenderContext {
            namespace: vec!["acme".to_string()],
            export_macro: "ACME_EXPORT".to_string(),
            export_include: "acme/acme_export.h".to_string(),
            include_prefix: "acme/gen".to_string(),
            wire_package: "acme".to_string(),
            generated_by: "tools/make_vectors".to_string(),
        };
        let out = vector_header(&ir(), &ctx);
        assert!(out.contains("namespace acme {"), "{out}");
        assert!(out.contains("struct ACME_EXPORT DrivingCommandIndices"), "{out}");
        assert!(
            out.contains("#include \"lcmtypes/acme/lcmt_driving_command_t.hpp\""),
            "{out}"
        );
        assert!(out.contains("See tools/make_vectors."), "{out}");

        let src = vector_source(&ir(), &ctx);
        assert!(src.contains("#include \"acme/gen/driving_command.h\""), "{src}");
    }

    #[test]
    fn render_emits_four_source_artifacts() {
        let artifacts = CxxBackend.render(&ir(), &ctx());
        assert_eq!(artifacts.len(), 4);
        assert!(artifacts.iter().all(|a| a.kind == ArtifactKind::Source));
    }
}
