//! Rust construction code for parsed templates.
//!
//! Placeholders are `syn` expressions; every node becomes a `VNode` struct
//! literal under a configurable runtime path. The runtime itself is not
//! part of this crate.

pub mod emit;

use proc_macro2::TokenStream;
use syn::{Expr, Path};
use tessel_markup::{MarkupError, build_tree, linearize, parse_template};
use thiserror::Error;
use tracing::debug;

pub use emit::{emit_child, emit_node, emit_prop_value, emit_props, emit_tree};

#[derive(Debug, Error)]
pub enum CodegenError {
    #[error(transparent)]
    Markup(#[from] MarkupError),

    #[error("placeholder {position} (`{source_text}`) is not a valid expression: {source}")]
    InvalidExpression {
        position: usize,
        source_text: String,
        #[source]
        source: syn::Error,
    },

    #[error("`{path}` is not a valid runtime path: {source}")]
    InvalidRuntimePath {
        path: String,
        #[source]
        source: syn::Error,
    },
}

pub type CodegenResult<T> = Result<T, CodegenError>;

#[derive(Clone)]
pub struct CodegenOptions {
    /// Module that provides `VNode`, `Child` and `Props`.
    pub runtime: Path,
}

impl Default for CodegenOptions {
    fn default() -> Self {
        Self {
            runtime: syn::parse_quote!(::tessel::vdom),
        }
    }
}

impl CodegenOptions {
    pub fn with_runtime(path: &str) -> CodegenResult<Self> {
        let runtime = syn::parse_str::<Path>(path).map_err(|source| {
            CodegenError::InvalidRuntimePath {
                path: path.to_string(),
                source,
            }
        })?;
        Ok(Self { runtime })
    }
}

/// Parse placeholder sources into expressions, in order.
pub fn parse_expressions<S: AsRef<str>>(sources: &[S]) -> CodegenResult<Vec<Expr>> {
    sources
        .iter()
        .enumerate()
        .map(|(position, src)| {
            let src = src.as_ref();
            syn::parse_str::<Expr>(src).map_err(|source| CodegenError::InvalidExpression {
                position,
                source_text: src.to_string(),
                source,
            })
        })
        .collect()
}

/// Template-literal form: fragments with one expression per boundary.
pub fn compile_template<S: AsRef<str>>(
    fragments: &[S],
    exprs: &[Expr],
    opts: &CodegenOptions,
) -> CodegenResult<TokenStream> {
    let tree = parse_template(fragments, exprs)?;
    debug!(roots = tree.len(), fields = exprs.len(), "emitting template");
    Ok(emit_tree(&tree, opts))
}

/// Plain-string form. Empty markup compiles to an empty `Vec`.
pub fn compile_str(source: &str, opts: &CodegenOptions) -> CodegenResult<TokenStream> {
    let tree = build_tree::<Expr>(&linearize(&[source]), &[])?;
    debug!(roots = tree.len(), "emitting plain markup");
    Ok(emit_tree(&tree, opts))
}
