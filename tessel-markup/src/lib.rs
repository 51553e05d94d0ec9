//! Template markup parsing without a DOM.
//!
//! A template arrives as literal fragments with placeholder values spliced
//! between them. [`linearize`] turns the fragments into a flat [`Events`]
//! stream, and [`build_tree`] resolves that stream against the values into
//! a [`Tree`] of element descriptors. Placeholder values are carried through
//! untouched.

pub mod error;
pub mod event;
pub mod linearize;
pub mod node;
pub mod tree;

pub use error::{MarkupError, MarkupResult};
pub use event::{Event, Events, FieldIndex, PropValue, Slot};
pub use linearize::linearize;
pub use node::{Child, NoValue, Node, Part, PropMap, PropSource, Tag, Tree};
pub use tree::build_tree;

/// Parse a template split at its placeholders.
///
/// `values` must hold exactly one value per boundary between fragments, and
/// the template must yield at least one top-level node.
pub fn parse_template<S, V>(fragments: &[S], values: &[V]) -> MarkupResult<Tree<V>>
where
    S: AsRef<str>,
    V: Clone,
{
    let expected = fragments.len().saturating_sub(1);
    if values.len() != expected {
        return Err(MarkupError::FieldCountMismatch {
            fragments: fragments.len(),
            expected,
            found: values.len(),
        });
    }
    let events = linearize(fragments);
    let tree = build_tree(&events, values)?;
    if tree.is_empty() {
        return Err(MarkupError::EmptyTemplate);
    }
    Ok(tree)
}

/// Parse a plain string with no placeholders. Empty input gives an empty
/// fragment.
pub fn parse_str(source: &str) -> MarkupResult<Tree<NoValue>> {
    build_tree(&linearize(&[source]), &[])
}
