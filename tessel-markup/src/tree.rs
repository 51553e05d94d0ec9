use tracing::trace;

use crate::error::{MarkupError, MarkupResult};
use crate::event::{Event, Events, FieldIndex, PropValue, Slot};
use crate::node::{Child, Node, Part, PropMap, PropSource, Tag, Tree};

/// Resolve an event stream against the placeholder values.
///
/// The stream is read as the children of an implicit root. One top-level
/// child comes back as [`Tree::Single`]; zero or several come back as a
/// [`Tree::Fragment`] in source order.
pub fn build_tree<V: Clone>(events: &Events, values: &[V]) -> MarkupResult<Tree<V>> {
    let root = build_level(events, values)?;
    let mut children = root.children;
    trace!(roots = children.len(), "built tree");
    Ok(if children.len() == 1 {
        Tree::Single(children.remove(0))
    } else {
        Tree::Fragment(children)
    })
}

fn build_level<V: Clone>(events: &Events, values: &[V]) -> MarkupResult<Node<V>> {
    let mut tag = Tag::Name(String::new());
    let mut props = Vec::new();
    let mut children = Vec::new();
    // named attributes since the last spread
    let mut current: Option<PropMap<V>> = None;

    for event in events {
        match event {
            Event::SetTag(slot) => {
                tag = match slot {
                    Slot::Text(name) => Tag::Name(name.clone()),
                    Slot::Field(field) => Tag::Field(resolve(*field, values)?),
                };
            }
            Event::AssignSpreadProps(field) => {
                if let Some(map) = current.take() {
                    props.push(PropSource::Named(map));
                }
                props.push(PropSource::Spread(resolve(*field, values)?));
            }
            Event::SetProp { name, value } => {
                let part = resolve_part(value, values)?;
                current.get_or_insert_with(PropMap::new).set(name, vec![part]);
            }
            Event::AppendProp { name, value } => {
                let part = resolve_part(value, values)?;
                current
                    .as_mut()
                    .and_then(|map| map.get_mut(name))
                    .ok_or_else(|| MarkupError::DanglingAttribute { name: name.clone() })?
                    .push(part);
            }
            Event::Recurse(nested) => children.push(Child::Node(build_level(nested, values)?)),
            Event::AppendChild(Slot::Text(text)) => children.push(Child::Text(text.clone())),
            Event::AppendChild(Slot::Field(field)) => {
                children.push(Child::Field(resolve(*field, values)?))
            }
        }
    }

    if let Some(map) = current {
        props.push(PropSource::Named(map));
    }

    Ok(Node {
        tag,
        props,
        children,
    })
}

fn resolve<V: Clone>(field: FieldIndex, values: &[V]) -> MarkupResult<V> {
    values
        .get(field.position())
        .cloned()
        .ok_or(MarkupError::FieldOutOfRange {
            index: field.get(),
            len: values.len(),
        })
}

fn resolve_part<V: Clone>(value: &PropValue, values: &[V]) -> MarkupResult<Part<V>> {
    Ok(match value {
        PropValue::Text(text) => Part::Text(text.clone()),
        PropValue::Field(field) => Part::Field(resolve(*field, values)?),
        PropValue::True => Part::True,
    })
}
