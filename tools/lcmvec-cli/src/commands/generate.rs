//! `lcmvec generate` subcommand
//!
//! Reads a schema description and emits the full artifact bundle:
//! - `<snake>.h` / `<snake>.cc` — the vector type and its constant storage
//! - `<snake>_translator.h` / `<snake>_translator.cc` — the LCM translator
//! - `lcmt_<snake>_t.lcm` — the wire-schema definition
//!
//! # Usage
//!
//! ```text
//! lcmvec generate --title "driving command" steering_angle throttle brake
//! lcmvec generate --schema vectors.toml --cxx-dir gen --lcm-dir lcmtypes
//! lcmvec generate --check --schema vectors.toml     # validate only (CI)
//! lcmvec generate --dry-run --title "foo" x y       # print, don't write
//! ```
//!
//! The artifact set is written all-or-nothing: every file is staged to a
//! temporary sibling first and only renamed into place once the whole set
//! staged cleanly.

use crate::error::{CliError, CliResult};
use anyhow::Context;
use clap::Args;
use colored::Colorize;
use lcmvec_codegen::{
    generate_bundle, validate_set, ArtifactKind, RenderContext, SchemaSet, Severity,
    ValidationError, VectorDef,
};
use std::path::{Path, PathBuf};

/// Generate C++ vector type, translator, and wire schema from a schema description
#[derive(Debug, Args)]
pub struct GenerateCommand {
    /// Path to a vectors.toml schema file (alternative to --title)
    #[arg(long)]
    pub schema: Option<PathBuf>,

    /// Title phrase, from which all type names are derived
    #[arg(long)]
    pub title: Option<String>,

    /// Field names for the vector, in row order (with --title)
    #[arg(value_name = "FIELD")]
    pub fields: Vec<String>,

    /// Output directory for C++ files
    #[arg(long, default_value = ".")]
    pub cxx_dir: PathBuf,

    /// Output directory for the .lcm wire schema
    #[arg(long, default_value = ".")]
    pub lcm_dir: PathBuf,

    /// Enclosing C++ namespace path
    #[arg(long, default_value = "drake::cars")]
    pub namespace: String,

    /// Export macro placed on generated classes
    #[arg(long, default_value = "DRAKECARS_EXPORT")]
    pub export_macro: String,

    /// Header that defines the export macro
    #[arg(long, default_value = "drake/drakeCars_export.h")]
    pub export_include: String,

    /// Include prefix under which the generated headers live
    #[arg(long, default_value = "drake/examples/Cars/gen")]
    pub include_prefix: String,

    /// LCM package name for the wire message
    #[arg(long, default_value = "drake")]
    pub wire_package: String,

    /// Tag written into the "generated by" comment of every artifact
    #[arg(long, default_value = "lcmvec generate")]
    pub generated_by: String,

    /// Validate the schema without writing files (exit 1 if errors found)
    #[arg(long)]
    pub check: bool,

    /// Print generated output to stdout instead of writing files
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    pub fn execute(self) -> CliResult<()> {
        // ── Load schema ────────────────────────────────────────────────────
        let set = self.load_schema_set()?;
        let ctx = self.render_context();

        // ── Validate ───────────────────────────────────────────────────────
        let findings = validate_set(&set);
        let has_errors = print_validation_results(&findings);
        if has_errors {
            return Err(CliError::ValidationFailed);
        }

        if self.check {
            println!(
                "{} {} vector definition(s) validated successfully",
                "✓".green(),
                set.vectors.len()
            );
            return Ok(());
        }

        // ── Generate ───────────────────────────────────────────────────────
        let mut outputs: Vec<(PathBuf, String)> = Vec::new();
        for def in &set.vectors {
            let artifacts = generate_bundle(def, &ctx).map_err(anyhow::Error::new)?;
            for artifact in artifacts {
                let dir = match artifact.kind {
                    ArtifactKind::Source => &self.cxx_dir,
                    ArtifactKind::WireSchema => &self.lcm_dir,
                };
                outputs.push((dir.join(&artifact.file_name), artifact.contents));
            }
        }

        if self.dry_run {
            for (path, contents) in &outputs {
                println!("{}  {}", "──".dimmed(), path.display());
                println!("{contents}");
            }
            return Ok(());
        }

        // ── Write files ────────────────────────────────────────────────────
        write_artifact_set(&outputs)?;
        for (path, _) in &outputs {
            println!("  {} {} written", "→".cyan(), path.display());
        }
        println!(
            "{} {} vector type(s) processed",
            "✓".green(),
            set.vectors.len()
        );

        Ok(())
    }

    /// Resolve the two input modes into one schema set.
    fn load_schema_set(&self) -> CliResult<SchemaSet> {
        match (&self.schema, &self.title) {
            (Some(_), Some(_)) => Err(CliError::InvalidInvocation {
                message: "--schema and --title are mutually exclusive".to_string(),
            }),
            (Some(path), None) => {
                if !self.fields.is_empty() {
                    return Err(CliError::InvalidInvocation {
                        message: "FIELD arguments are only valid with --title".to_string(),
                    });
                }
                if !path.exists() {
                    return Err(CliError::SchemaNotFound {
                        path: path.display().to_string(),
                    });
                }
                let src = std::fs::read_to_string(path)
                    .with_context(|| format!("reading {}", path.display()))?;
                Ok(SchemaSet::from_toml(&src)?)
            }
            (None, Some(title)) => Ok(SchemaSet {
                vectors: vec![VectorDef::new(title.clone(), self.fields.clone())],
            }),
            (None, None) => Err(CliError::InvalidInvocation {
                message: "no schema input given".to_string(),
            }),
        }
    }

    fn render_context(&self) -> RenderContext {
        RenderContext {
            namespace: self
                .namespace
                .split("::")
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
            export_macro: self.export_macro.clone(),
            export_include: self.export_include.clone(),
            include_prefix: self.include_prefix.clone(),
            wire_package: self.wire_package.clone(),
            generated_by: self.generated_by.clone(),
        }
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Print validation results and return `true` if any errors were found.
fn print_validation_results(findings: &[ValidationError]) -> bool {
    let mut has_errors = false;
    for e in findings {
        match e.severity {
            Severity::Error => {
                eprintln!("{} [{}] {}", "✗".red(), e.location, e.message);
                has_errors = true;
            }
            Severity::Warning => {
                eprintln!("{} [{}] {}", "!".yellow(), e.location, e.message);
            }
        }
    }
    has_errors
}

/// Write the whole artifact set or nothing.
///
/// Contents are staged to `<path>.tmp` siblings; the renames into place only
/// start after every staged write succeeded, and staged files are removed on
/// failure.
fn write_artifact_set(files: &[(PathBuf, String)]) -> CliResult<()> {
    let mut staged: Vec<PathBuf> = Vec::with_capacity(files.len());

    let result = (|| -> CliResult<()> {
        for (path, contents) in files {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)
                        .with_context(|| format!("creating directory: {}", parent.display()))?;
                }
            }
            let tmp = staging_path(path);
            std::fs::write(&tmp, contents)
                .with_context(|| format!("writing {}", tmp.display()))?;
            staged.push(tmp);
        }
        for ((path, _), tmp) in files.iter().zip(staged.iter()) {
            std::fs::rename(tmp, path)
                .with_context(|| format!("renaming {} into place", path.display()))?;
        }
        Ok(())
    })();

    if result.is_err() {
        for tmp in &staged {
            let _ = std::fs::remove_file(tmp);
        }
    }
    result
}

fn staging_path(path: &Path) -> PathBuf {
    let mut os = path.as_os_str().to_os_string();
    os.push(".tmp");
    PathBuf::from(os)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
