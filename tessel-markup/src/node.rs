use serde::{Serialize, Serializer};

/// Element tag: a literal name, or a placeholder value (component reference).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Tag<V> {
    Name(String),
    Field(V),
}

/// One part of an attribute value, kept in written order.
#[derive(Debug, Clone, PartialEq)]
pub enum Part<V> {
    Text(String),
    Field(V),
    True,
}

/// Named attributes in insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct PropMap<V> {
    entries: Vec<(String, Vec<Part<V>>)>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PropSource<V> {
    Named(PropMap<V>),
    Spread(V),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Child<V> {
    Node(Node<V>),
    Text(String),
    Field(V),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node<V> {
    pub tag: Tag<V>,
    pub props: Vec<PropSource<V>>,
    pub children: Vec<Child<V>>,
}

/// Result of a parse: one root, or a fragment of zero or several siblings.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Tree<V> {
    Single(Child<V>),
    Fragment(Vec<Child<V>>),
}

/// Value type for templates without placeholders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoValue {}

impl<V> PropMap<V> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Start `name` with a fresh part list. An existing entry keeps its
    /// position and loses its old parts.
    pub fn set(&mut self, name: &str, parts: Vec<Part<V>>) {
        match self.entries.iter().position(|(key, _)| key == name) {
            Some(at) => self.entries[at].1 = parts,
            None => self.entries.push((name.to_string(), parts)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&[Part<V>]> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, parts)| parts.as_slice())
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Vec<Part<V>>> {
        self.entries
            .iter_mut()
            .find(|(key, _)| key == name)
            .map(|(_, parts)| parts)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Part<V>])> {
        self.entries
            .iter()
            .map(|(key, parts)| (key.as_str(), parts.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<V> Default for PropMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Node<V> {
    /// Parts of the last named attribute called `name`. Spread sources are
    /// opaque and never searched.
    pub fn prop(&self, name: &str) -> Option<&[Part<V>]> {
        self.props.iter().rev().find_map(|source| match source {
            PropSource::Named(map) => map.get(name),
            PropSource::Spread(_) => None,
        })
    }
}

impl<V> Tree<V> {
    pub fn len(&self) -> usize {
        match self {
            Tree::Single(_) => 1,
            Tree::Fragment(children) => children.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn into_children(self) -> Vec<Child<V>> {
        match self {
            Tree::Single(child) => vec![child],
            Tree::Fragment(children) => children,
        }
    }
}

impl<V: Serialize> Serialize for Part<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Part::Text(text) => serializer.serialize_str(text),
            Part::Field(value) => value.serialize(serializer),
            Part::True => serializer.serialize_bool(true),
        }
    }
}

impl<V: Serialize> Serialize for PropMap<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.entries.iter().map(|(key, parts)| (key, parts)))
    }
}

impl Serialize for NoValue {
    fn serialize<S: Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
        match *self {}
    }
}
