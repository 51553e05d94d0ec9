use tracing::{debug, trace};

use crate::event::{Event, Events, FieldIndex, PropValue, Slot};

/// Lexer modes. A tag opened with `<` starts in `TagName`; `Slash` swallows
/// everything up to the `>` that ends a closing or self-closing tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Slash,
    Text,
    Whitespace,
    TagName,
    Comment,
    PropSet,
    PropAppend,
}

struct Linearizer {
    mode: Mode,
    buffer: String,
    quote: Option<char>,
    prop_name: String,
    /// Open element streams; `frames[0]` is the implicit root.
    frames: Vec<Events>,
}

/// Turn the literal fragments of a template into a flat event stream.
///
/// Placeholder `i` sits between `fragments[i]` and `fragments[i + 1]`; the
/// linearizer only records where it occurred, never its value. Malformed
/// input is absorbed: whatever is pending at the end is committed and any
/// element still open is closed.
pub fn linearize<S: AsRef<str>>(fragments: &[S]) -> Events {
    let mut lin = Linearizer::new();
    for (i, fragment) in fragments.iter().enumerate() {
        if i > 0 {
            if lin.mode == Mode::Text {
                lin.commit(None);
            }
            lin.commit(Some(FieldIndex::from_position(i - 1)));
        }
        lin.feed(fragment.as_ref());
    }
    lin.finish()
}

impl Linearizer {
    fn new() -> Self {
        Self {
            mode: Mode::Text,
            buffer: String::new(),
            quote: None,
            prop_name: String::new(),
            frames: vec![Events::new()],
        }
    }

    fn emit(&mut self, event: Event) {
        if let Some(frame) = self.frames.last_mut() {
            frame.push(event);
        }
    }

    fn feed(&mut self, fragment: &str) {
        for (at, ch) in fragment.char_indices() {
            match self.mode {
                Mode::Text => {
                    if ch == '<' {
                        self.commit(None);
                        self.frames.push(Events::new());
                        self.mode = Mode::TagName;
                    } else {
                        self.buffer.push(ch);
                    }
                }
                Mode::Comment => {
                    if self.buffer == "--" && ch == '>' {
                        self.mode = Mode::Text;
                        self.buffer.clear();
                    } else {
                        // keep the last two characters, newest first
                        let prev = self.buffer.chars().next();
                        self.buffer.clear();
                        self.buffer.push(ch);
                        self.buffer.extend(prev);
                    }
                }
                _ if self.quote.is_some() => {
                    if self.quote == Some(ch) {
                        self.quote = None;
                    } else {
                        self.buffer.push(ch);
                    }
                }
                _ if ch == '"' || ch == '\'' => self.quote = Some(ch),
                _ if ch == '>' => {
                    self.commit(None);
                    self.mode = Mode::Text;
                }
                Mode::Slash => {}
                _ if ch == '=' => {
                    self.mode = Mode::PropSet;
                    self.prop_name = std::mem::take(&mut self.buffer);
                }
                _ if ch == '/'
                    && (matches!(self.mode, Mode::Whitespace | Mode::TagName)
                        || fragment[at + 1..].starts_with('>')) =>
                {
                    self.commit(None);
                    if self.mode == Mode::TagName {
                        // `</x>`: drop the stream opened by `<`, then close its parent
                        self.frames.pop();
                    }
                    self.close_element();
                    self.mode = Mode::Slash;
                }
                _ if matches!(ch, ' ' | '\t' | '\n' | '\r') => {
                    self.commit(None);
                    self.mode = Mode::Whitespace;
                }
                _ => self.buffer.push(ch),
            }

            if self.mode == Mode::TagName && self.buffer == "!--" {
                self.mode = Mode::Comment;
                self.frames.pop();
            }
        }
    }

    fn commit(&mut self, field: Option<FieldIndex>) {
        match self.mode {
            Mode::Text => match field {
                Some(f) => self.emit(Event::AppendChild(Slot::Field(f))),
                None => {
                    let text = trim_indentation(&self.buffer);
                    if !text.is_empty() {
                        let text = text.to_string();
                        self.emit(Event::AppendChild(Slot::Text(text)));
                    }
                }
            },
            Mode::TagName => {
                let slot = match field {
                    Some(f) => Some(Slot::Field(f)),
                    None if !self.buffer.is_empty() => Some(Slot::Text(self.buffer.clone())),
                    None => None,
                };
                if let Some(slot) = slot {
                    self.emit(Event::SetTag(slot));
                    self.mode = Mode::Whitespace;
                }
            }
            Mode::Whitespace => match field {
                Some(f) if self.buffer == "..." => self.emit(Event::AssignSpreadProps(f)),
                None if !self.buffer.is_empty() => {
                    let name = self.buffer.clone();
                    self.emit(Event::SetProp {
                        name,
                        value: PropValue::True,
                    });
                }
                _ => {}
            },
            Mode::PropSet | Mode::PropAppend => {
                if !self.buffer.is_empty() || (field.is_none() && self.mode == Mode::PropSet) {
                    let value = PropValue::Text(self.buffer.clone());
                    self.emit_prop(value);
                }
                if let Some(f) = field {
                    self.emit_prop(PropValue::Field(f));
                }
            }
            Mode::Slash | Mode::Comment => {}
        }
        self.buffer.clear();
    }

    /// First part of a value starts the attribute, later parts extend it.
    fn emit_prop(&mut self, value: PropValue) {
        let name = self.prop_name.clone();
        let event = if self.mode == Mode::PropSet {
            Event::SetProp { name, value }
        } else {
            Event::AppendProp { name, value }
        };
        self.emit(event);
        self.mode = Mode::PropAppend;
    }

    fn close_element(&mut self) {
        if self.frames.len() < 2 {
            debug!("ignoring closing tag with no open element");
            return;
        }
        if let Some(element) = self.frames.pop() {
            self.emit(Event::Recurse(element));
        }
    }

    fn finish(mut self) -> Events {
        self.commit(None);
        if self.quote.is_some() || self.mode == Mode::Comment {
            debug!(mode = ?self.mode, "input ended inside a quote or comment");
        }
        while self.frames.len() > 1 {
            debug!(open = self.frames.len() - 1, "closing unterminated element");
            self.close_element();
        }
        let events = self.frames.pop().unwrap_or_default();
        trace!(events = events.len(), "linearized template");
        events
    }
}

/// Strip a leading and a trailing whitespace run, but only when the run
/// contains a newline. Interior whitespace is kept.
fn trim_indentation(text: &str) -> &str {
    let lead = text.len() - text.trim_start().len();
    let text = if text[..lead].contains('\n') {
        &text[lead..]
    } else {
        text
    };
    let body = text.trim_end().len();
    if text[body..].contains('\n') {
        &text[..body]
    } else {
        text
    }
}
