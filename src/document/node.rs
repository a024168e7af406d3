//! Generic document model shared by the JSON and YAML branches.
//!
//! Mappings are an ordered list of entries: the order is exactly the order
//! in which the parser produced the keys, and nothing in this module
//! reorders them except [`Node::sort_keys`]. Keys are unique because both
//! parsers guarantee it (serde_json keeps the first position and the last
//! value of a repeated key, serde_yaml rejects duplicates).

use std::fmt;

/// Numeric scalar, kept in the representation the parser chose
#[derive(Debug, Clone, PartialEq)]
pub enum Number {
    Int(i64),
    UInt(u64),
    Float(f64),
    /// JSON number that fits none of the above, kept as written
    /// (integers beyond 64 bits, floats beyond f64 range)
    Raw(String),
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(n) => write!(f, "{}", n),
            Number::UInt(n) => write!(f, "{}", n),
            Number::Float(n) => write!(f, "{:?}", n),
            Number::Raw(s) => f.write_str(s),
        }
    }
}

/// A parsed document node
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Sequence(Vec<Node>),
    /// Ordered key/value entries
    Mapping(Vec<(Node, Node)>),
    /// YAML explicit tag, stored without the leading `!`
    Tagged(String, Box<Node>),
}

impl Node {
    /// Look up a mapping entry by string key
    pub fn get(&self, key: &str) -> Option<&Node> {
        match self {
            Node::Mapping(entries) => entries
                .iter()
                .find(|(k, _)| matches!(k, Node::String(s) if s == key))
                .map(|(_, v)| v),
            Node::Tagged(_, inner) => inner.get(key),
            _ => None,
        }
    }

    /// Keys of a mapping in stored order (string keys only)
    pub fn keys(&self) -> Vec<&str> {
        match self {
            Node::Mapping(entries) => entries
                .iter()
                .filter_map(|(k, _)| match k {
                    Node::String(s) => Some(s.as_str()),
                    _ => None,
                })
                .collect(),
            Node::Tagged(_, inner) => inner.keys(),
            _ => Vec::new(),
        }
    }

    /// Text used to order and to stringify keys
    pub fn key_text(&self) -> String {
        match self {
            Node::Null => "null".to_string(),
            Node::Bool(b) => b.to_string(),
            Node::Number(n) => n.to_string(),
            Node::String(s) => s.clone(),
            Node::Tagged(tag, inner) => format!("!{} {}", tag, inner.key_text()),
            other => format!("{:?}", other),
        }
    }

    /// Recursively sort every mapping by key text
    ///
    /// The sort is stable, so keys with identical text keep their
    /// relative order.
    pub fn sort_keys(&mut self) {
        match self {
            Node::Mapping(entries) => {
                entries.sort_by_cached_key(|(k, _)| k.key_text());
                for (k, v) in entries.iter_mut() {
                    k.sort_keys();
                    v.sort_keys();
                }
            }
            Node::Sequence(items) => items.iter_mut().for_each(Node::sort_keys),
            Node::Tagged(_, inner) => inner.sort_keys(),
            _ => {}
        }
    }
}

impl From<serde_json::Value> for Node {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => Node::Null,
            Value::Bool(b) => Node::Bool(b),
            Value::Number(n) => Node::Number(json_number(&n)),
            Value::String(s) => Node::String(s),
            Value::Array(items) => Node::Sequence(items.into_iter().map(Node::from).collect()),
            // preserve_order makes this iterate in source order
            Value::Object(map) => Node::Mapping(
                map.into_iter()
                    .map(|(k, v)| (Node::String(k), Node::from(v)))
                    .collect(),
            ),
        }
    }
}

fn json_number(n: &serde_json::Number) -> Number {
    if let Some(u) = n.as_u64() {
        return Number::UInt(u);
    }
    if let Some(i) = n.as_i64() {
        return Number::Int(i);
    }

    // arbitrary_precision: to_string() is the source text
    let text = n.to_string();
    let is_integer = !text.contains(['.', 'e', 'E']);
    match n.as_f64() {
        Some(f) if f.is_finite() && !is_integer => Number::Float(f),
        _ => Number::Raw(text),
    }
}

impl From<Node> for serde_json::Value {
    fn from(node: Node) -> Self {
        use serde_json::Value;

        match node {
            Node::Null => Value::Null,
            Node::Bool(b) => Value::Bool(b),
            Node::Number(Number::Int(i)) => Value::from(i),
            Node::Number(Number::UInt(u)) => Value::from(u),
            // JSON has no NaN/inf; those only come from YAML sources
            Node::Number(Number::Float(f)) => serde_json::Number::from_f64(f)
                .map(Value::Number)
                .unwrap_or_else(|| Value::String(Number::Float(f).to_string())),
            Node::Number(Number::Raw(text)) => match text.parse::<serde_json::Number>() {
                Ok(n) => Value::Number(n),
                Err(_) => Value::String(text),
            },
            Node::String(s) => Value::String(s),
            Node::Sequence(items) => Value::Array(items.into_iter().map(Value::from).collect()),
            Node::Mapping(entries) => Value::Object(
                entries
                    .into_iter()
                    .map(|(k, v)| {
                        let key = match k {
                            Node::String(s) => s,
                            other => other.key_text(),
                        };
                        (key, Value::from(v))
                    })
                    .collect(),
            ),
            Node::Tagged(_, inner) => Value::from(*inner),
        }
    }
}

impl From<serde_yaml::Value> for Node {
    fn from(value: serde_yaml::Value) -> Self {
        use serde_yaml::Value;

        match value {
            Value::Null => Node::Null,
            Value::Bool(b) => Node::Bool(b),
            Value::Number(n) => Node::Number(yaml_number(&n)),
            Value::String(s) => Node::String(s),
            Value::Sequence(items) => Node::Sequence(items.into_iter().map(Node::from).collect()),
            // serde_yaml::Mapping is insertion ordered
            Value::Mapping(map) => Node::Mapping(
                map.into_iter()
                    .map(|(k, v)| (Node::from(k), Node::from(v)))
                    .collect(),
            ),
            Value::Tagged(tagged) => {
                let tagged = *tagged;
                let tag = tagged.tag.to_string();
                let tag = tag.strip_prefix('!').unwrap_or(&tag).to_string();
                Node::Tagged(tag, Box::new(Node::from(tagged.value)))
            }
        }
    }
}

fn yaml_number(n: &serde_yaml::Number) -> Number {
    if let Some(u) = n.as_u64() {
        Number::UInt(u)
    } else if let Some(i) = n.as_i64() {
        Number::Int(i)
    } else {
        Number::Float(n.as_f64().unwrap_or(f64::NAN))
    }
}

impl From<Node> for serde_yaml::Value {
    fn from(node: Node) -> Self {
        use serde_yaml::value::{Tag, TaggedValue};
        use serde_yaml::{Mapping, Value};

        match node {
            Node::Null => Value::Null,
            Node::Bool(b) => Value::Bool(b),
            Node::Number(Number::Int(i)) => Value::Number(i.into()),
            Node::Number(Number::UInt(u)) => Value::Number(u.into()),
            Node::Number(Number::Float(f)) => Value::Number(f.into()),
            // YAML numbers are 64-bit; keep out-of-range values readable
            Node::Number(Number::Raw(text)) => match text.parse::<f64>() {
                Ok(f) if f.is_finite() => Value::Number(f.into()),
                _ => Value::String(text),
            },
            Node::String(s) => Value::String(s),
            Node::Sequence(items) => Value::Sequence(items.into_iter().map(Value::from).collect()),
            Node::Mapping(entries) => {
                let mut map = Mapping::with_capacity(entries.len());
                for (k, v) in entries {
                    map.insert(Value::from(k), Value::from(v));
                }
                Value::Mapping(map)
            }
            Node::Tagged(tag, inner) => Value::Tagged(Box::new(TaggedValue {
                tag: Tag::new(tag),
                value: Value::from(*inner),
            })),
        }
    }
}
