//! Parsed YAML documents
//!
//! Rules never look at `serde_yaml` values directly. A document is converted
//! into a [`Node`] tree whose mappings keep the parser's key order and whose
//! keys are always strings, so every rule pattern-matches on a small closed
//! set of variants.
//!
//! Before conversion the event stream is checked for alias fan-out, so a
//! small file cannot expand into an arbitrarily large tree.

use std::borrow::Cow;
use std::collections::HashMap;
use thiserror::Error;
use yaml_rust2::parser::{Event, EventReceiver, Parser};

/// Largest number of nodes a single anchor may expand into through aliases
pub const MAX_ALIAS_COUNT: usize = 50;

/// A node of a parsed YAML document
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Sequence(Vec<Node>),
    /// Entries in document order
    Mapping(Vec<(String, Node)>),
}

/// The YAML parser rejected the text
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ParseError {
    pub message: String,
}

/// Parse a single YAML document.
///
/// Anchors and aliases are expanded. A document in which one anchor expands
/// into more than [`MAX_ALIAS_COUNT`] nodes is rejected. Duplicate keys and
/// streams with more than one document are parse errors. An empty document
/// parses as [`Node::Null`].
pub fn parse(text: &str) -> Result<Node, ParseError> {
    check_alias_count(text)?;

    serde_yaml::from_str::<serde_yaml::Value>(text)
        .map(Node::from)
        .map_err(|e| ParseError {
            message: e.to_string(),
        })
}

fn check_alias_count(text: &str) -> Result<(), ParseError> {
    let mut counter = AliasCounter::default();

    // Syntax errors are reported by the main parse
    let _ = Parser::new_from_str(text).load(&mut counter, false);

    if counter.exceeded {
        return Err(ParseError {
            message: "Excessive alias count indicates a resource exhaustion attack".to_string(),
        });
    }
    Ok(())
}

/// Tracks how many nodes every anchor expands into.
///
/// An anchor's weight is the largest alias expansion found inside it (at
/// least 1). Each alias to it adds one reference; the anchor fails once
/// `references * weight` exceeds [`MAX_ALIAS_COUNT`].
#[derive(Default)]
struct AliasCounter {
    /// anchor id -> (references so far, weight)
    anchors: HashMap<usize, (usize, usize)>,
    /// open collections: anchor id (0 when none), heaviest expansion inside
    open: Vec<(usize, usize)>,
    exceeded: bool,
}

impl EventReceiver for AliasCounter {
    fn on_event(&mut self, ev: Event) {
        if self.exceeded {
            return;
        }

        match ev {
            Event::Alias(id) => {
                let Some((references, weight)) = self.anchors.get_mut(&id) else {
                    return;
                };
                *references += 1;
                let expansion = *references * *weight;

                if expansion > MAX_ALIAS_COUNT {
                    self.exceeded = true;
                } else if let Some(frame) = self.open.last_mut() {
                    frame.1 = frame.1.max(expansion);
                }
            }
            Event::Scalar(_, _, id, ..) if id > 0 => {
                self.anchors.insert(id, (0, 1));
            }
            Event::SequenceStart(id, ..) | Event::MappingStart(id, ..) => {
                self.open.push((id, 0));
            }
            Event::SequenceEnd | Event::MappingEnd => {
                if let Some((id, heaviest)) = self.open.pop() {
                    if let Some(parent) = self.open.last_mut() {
                        parent.1 = parent.1.max(heaviest);
                    }
                    if id > 0 {
                        self.anchors.insert(id, (0, heaviest.max(1)));
                    }
                }
            }
            _ => {}
        }
    }
}

impl Node {
    /// Loose truthiness: `null`, `false`, `0`, `NaN` and `""` are falsy,
    /// every sequence and mapping (even empty) is truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Node::Null => false,
            Node::Bool(b) => *b,
            Node::Number(n) => *n != 0.0 && !n.is_nan(),
            Node::String(s) => !s.is_empty(),
            Node::Sequence(_) | Node::Mapping(_) => true,
        }
    }

    /// Mappings and sequences both have fields (sequence fields are indices)
    pub fn is_object(&self) -> bool {
        matches!(self, Node::Sequence(_) | Node::Mapping(_))
    }

    /// Look up a mapping key. Any other variant has no keys.
    pub fn get(&self, key: &str) -> Option<&Node> {
        match self {
            Node::Mapping(entries) => entries.iter().find(|(k, _)| k == key).map(|(_, v)| v),
            _ => None,
        }
    }

    pub fn has_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Whether `key` is present with a truthy value
    pub fn truthy(&self, key: &str) -> bool {
        self.get(key).is_some_and(Node::is_truthy)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Node::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[Node]> {
        match self {
            Node::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// Own fields in order: mapping entries, or sequence elements keyed by
    /// their index. Scalars have none.
    pub fn entries(&self) -> Vec<(Cow<'_, str>, &Node)> {
        match self {
            Node::Mapping(entries) => entries
                .iter()
                .map(|(k, v)| (Cow::Borrowed(k.as_str()), v))
                .collect(),
            Node::Sequence(items) => items
                .iter()
                .enumerate()
                .map(|(i, v)| (Cow::Owned(i.to_string()), v))
                .collect(),
            _ => Vec::new(),
        }
    }
}

impl From<serde_yaml::Value> for Node {
    fn from(value: serde_yaml::Value) -> Self {
        use serde_yaml::Value;

        match value {
            Value::Null => Node::Null,
            Value::Bool(b) => Node::Bool(b),
            Value::Number(n) => Node::Number(n.as_f64().unwrap_or(f64::NAN)),
            Value::String(s) => Node::String(s),
            Value::Sequence(items) => Node::Sequence(items.into_iter().map(Node::from).collect()),
            Value::Mapping(mapping) => {
                let mut entries: Vec<(String, Node)> = Vec::with_capacity(mapping.len());
                for (key, value) in mapping {
                    let key = key_to_string(&key);
                    let value = Node::from(value);
                    match entries.iter_mut().find(|(k, _)| *k == key) {
                        Some(slot) => slot.1 = value,
                        None => entries.push((key, value)),
                    }
                }
                Node::Mapping(entries)
            }
            Value::Tagged(tagged) => Node::from(tagged.value),
        }
    }
}

fn key_to_string(key: &serde_yaml::Value) -> String {
    use serde_yaml::Value;

    match key {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Tagged(tagged) => key_to_string(&tagged.value),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_default(),
    }
}
