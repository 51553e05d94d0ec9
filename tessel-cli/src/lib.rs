use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tessel_codegen::CodegenOptions;
use tessel_markup::{linearize, parse_str, parse_template};
use tracing::{debug, info};

pub mod split;

pub use split::{Interpolation, SplitError, SplitTemplate, split_template};

/// How an input file is fed to the parser.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum InputMode {
    /// `${ expr }` interpolations split the file into fragments.
    #[default]
    Template,
    /// The whole file is one literal fragment.
    Plain,
}

/// Placeholder as it appears in a JSON tree dump.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Placeholder {
    pub field: usize,
    pub expr: String,
}

/// Read `input` and split it according to `mode`.
pub fn load_template(input: &Path, mode: InputMode) -> Result<SplitTemplate> {
    let src =
        fs::read_to_string(input).with_context(|| format!("failed to read {}", input.display()))?;
    let split = match mode {
        InputMode::Plain => SplitTemplate {
            fragments: vec![src],
            expressions: Vec::new(),
        },
        InputMode::Template => split_template(&src)
            .with_context(|| format!("failed to split {}", input.display()))?,
    };
    debug!(
        fragments = split.fragments.len(),
        placeholders = split.expressions.len(),
        "loaded template"
    );
    Ok(split)
}

/// Parse `input` and render the tree as JSON.
pub fn tree_cmd(input: &Path, mode: InputMode, pretty: bool) -> Result<String> {
    let split = load_template(input, mode)?;
    let json = match mode {
        InputMode::Plain => {
            let tree = parse_str(&split.fragments[0])
                .with_context(|| format!("failed to parse {}", input.display()))?;
            to_json(&tree, pretty)?
        }
        InputMode::Template => {
            let values: Vec<Placeholder> = split
                .expressions
                .iter()
                .enumerate()
                .map(|(field, e)| Placeholder {
                    field,
                    expr: e.source.clone(),
                })
                .collect();
            let tree = parse_template(&split.fragments, &values)
                .with_context(|| format!("failed to parse {}", input.display()))?;
            to_json(&tree, pretty)?
        }
    };
    Ok(json)
}

fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}

/// The linearized event stream of `input`, one event per line.
pub fn events_cmd(input: &Path, mode: InputMode) -> Result<String> {
    let split = load_template(input, mode)?;
    Ok(linearize(&split.fragments).to_string())
}

/// Compile `input` into a Rust expression written to `out_dir/<stem>.rs`.
///
/// The output is meant to be `include!`d where the placeholder expressions
/// are in scope.
pub fn build_cmd(
    input: &Path,
    mode: InputMode,
    out_dir: Option<&Path>,
    runtime: Option<&str>,
) -> Result<PathBuf> {
    let split = load_template(input, mode)?;
    let opts = match runtime {
        Some(path) => CodegenOptions::with_runtime(path)?,
        None => CodegenOptions::default(),
    };

    let tokens = match mode {
        InputMode::Plain => tessel_codegen::compile_str(&split.fragments[0], &opts),
        InputMode::Template => {
            let sources: Vec<&str> = split.expressions.iter().map(|e| e.source.as_str()).collect();
            let exprs = tessel_codegen::parse_expressions(&sources)?;
            tessel_codegen::compile_template(&split.fragments, &exprs, &opts)
        }
    }
    .with_context(|| format!("failed to compile {}", input.display()))?;

    let name = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("template");

    let out_dir = out_dir
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from("target/tessel-gen"));
    fs::create_dir_all(&out_dir)
        .with_context(|| format!("failed to create {}", out_dir.display()))?;

    let out_path = out_dir.join(format!("{}.rs", name));
    fs::write(&out_path, format!("{tokens}\n"))
        .with_context(|| format!("failed to write {}", out_path.display()))?;

    info!(path = %out_path.display(), "generated");
    Ok(out_path)
}
