use std::fmt;
use std::num::NonZeroUsize;

/// 1-based reference to a placeholder value.
///
/// Index `k` refers to `values[k - 1]`; placeholder `i` (0-based, sitting
/// between `fragments[i]` and `fragments[i + 1]`) is `FieldIndex::from_position(i)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldIndex(NonZeroUsize);

impl FieldIndex {
    pub fn new(index: usize) -> Option<Self> {
        NonZeroUsize::new(index).map(Self)
    }

    pub fn from_position(position: usize) -> Self {
        Self(NonZeroUsize::MIN.saturating_add(position))
    }

    pub fn get(self) -> usize {
        self.0.get()
    }

    /// 0-based position in the value list.
    pub fn position(self) -> usize {
        self.0.get() - 1
    }
}

impl fmt::Display for FieldIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.0)
    }
}

/// Payload of a child or tag event: literal text or a placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Slot {
    Text(String),
    Field(FieldIndex),
}

/// Payload of an attribute event. `True` marks a bare boolean attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropValue {
    Text(String),
    Field(FieldIndex),
    True,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    AppendChild(Slot),
    Recurse(Events),
    SetTag(Slot),
    AssignSpreadProps(FieldIndex),
    SetProp { name: String, value: PropValue },
    AppendProp { name: String, value: PropValue },
}

/// Flat event stream for one nesting level; nested elements live in
/// [`Event::Recurse`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Events(Vec<Event>);

impl Events {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, event: Event) {
        self.0.push(event);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Event> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Every field referenced by this stream and its nested streams, in
    /// source order.
    pub fn field_indices(&self) -> Vec<FieldIndex> {
        let mut out = Vec::new();
        collect_fields(self, &mut out);
        out
    }

    fn write_indented(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        for event in &self.0 {
            let pad = "  ".repeat(depth);
            match event {
                Event::Recurse(nested) => {
                    writeln!(f, "{pad}Recurse")?;
                    nested.write_indented(f, depth + 1)?;
                }
                Event::AppendChild(slot) => writeln!(f, "{pad}AppendChild {slot}")?,
                Event::SetTag(slot) => writeln!(f, "{pad}SetTag {slot}")?,
                Event::AssignSpreadProps(field) => writeln!(f, "{pad}AssignSpreadProps {field}")?,
                Event::SetProp { name, value } => writeln!(f, "{pad}SetProp {name} = {value}")?,
                Event::AppendProp { name, value } => {
                    writeln!(f, "{pad}AppendProp {name} += {value}")?
                }
            }
        }
        Ok(())
    }
}

fn collect_fields(events: &Events, out: &mut Vec<FieldIndex>) {
    for event in events.iter() {
        match event {
            Event::Recurse(nested) => collect_fields(nested, out),
            Event::AppendChild(Slot::Field(f)) | Event::SetTag(Slot::Field(f)) => out.push(*f),
            Event::AssignSpreadProps(f) => out.push(*f),
            Event::SetProp { value: PropValue::Field(f), .. }
            | Event::AppendProp { value: PropValue::Field(f), .. } => out.push(*f),
            _ => {}
        }
    }
}

impl From<Vec<Event>> for Events {
    fn from(events: Vec<Event>) -> Self {
        Self(events)
    }
}

impl<'a> IntoIterator for &'a Events {
    type Item = &'a Event;
    type IntoIter = std::slice::Iter<'a, Event>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slot::Text(text) => write!(f, "{text:?}"),
            Slot::Field(field) => write!(f, "{field}"),
        }
    }
}

impl fmt::Display for PropValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropValue::Text(text) => write!(f, "{text:?}"),
            PropValue::Field(field) => write!(f, "{field}"),
            PropValue::True => f.write_str("true"),
        }
    }
}

/// One event per line, nested streams indented by two spaces.
impl fmt::Display for Events {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_indented(f, 0)
    }
}
