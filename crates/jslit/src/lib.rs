//! Rendering of JavaScript literals for generated snippets.
//!
//! This crate turns Rust values into fragments of JavaScript source: quoted
//! string literals, value literals, anonymous function literals, and object
//! literals. Object literal keys are always emitted in lexicographic order so
//! that generated snippets are deterministic regardless of the order options
//! were supplied in.

use std::{collections::BTreeMap, fmt::Write as _};

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

/// Matches keys that can appear unquoted in a JavaScript object literal.
static IDENT_KEY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").expect("static regex"));

/// Render a double-quoted JavaScript string literal.
///
/// JSON string escaping is a strict subset of JavaScript's, so the rendered
/// literal is valid in both.
pub fn string(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| format!("\"{}\"", s))
}

/// Render a JSON value as a JavaScript literal.
///
/// Objects are emitted with keys in lexicographic order; keys that are valid
/// identifiers are left unquoted.
pub fn value(v: &Value) -> String {
    match v {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => string(s),
        Value::Array(items) => {
            let parts: Vec<String> = items.iter().map(value).collect();
            format!("[{}]", parts.join(", "))
        }
        Value::Object(map) => {
            let mut entries: Vec<(&String, &Value)> = map.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));
            let mut out = String::from("{");
            for (i, (k, v)) in entries.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                let _ignored = write!(&mut out, "{}:{}", key(k), value(v));
            }
            out.push('}');
            out
        }
    }
}

/// Render an object-literal key, quoting it only when necessary.
pub fn key(k: &str) -> String {
    if IDENT_KEY.is_match(k) {
        k.to_string()
    } else {
        string(k)
    }
}

/// Render an anonymous function literal: `function (args) {body}`.
pub fn function(args: &str, body: &str) -> String {
    format!("function ({}) {{{}}}", args, body)
}

/// One entry value in an [`ObjectBuilder`].
#[derive(Debug, Clone)]
enum Term {
    /// A raw JavaScript fragment emitted verbatim (callbacks, constructor
    /// calls, element lookups).
    Code(String),
    /// A JSON value rendered through [`value`].
    Value(Value),
}

/// Builder for JavaScript object literals with deterministic key order.
///
/// Entries may be inserted in any order; `build` emits them sorted by key.
#[derive(Debug, Clone, Default)]
pub struct ObjectBuilder {
    /// Accumulated entries, keyed by emitted object key.
    entries: BTreeMap<String, Term>,
}

impl ObjectBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a raw code fragment under `key`.
    pub fn code(&mut self, key: &str, code: impl Into<String>) -> &mut Self {
        self.entries.insert(key.to_string(), Term::Code(code.into()));
        self
    }

    /// Insert a raw code fragment when `code` is `Some`.
    pub fn opt_code(&mut self, key: &str, code: Option<String>) -> &mut Self {
        if let Some(c) = code {
            self.code(key, c);
        }
        self
    }

    /// Insert a JSON value under `key`.
    pub fn value(&mut self, key: &str, v: impl Into<Value>) -> &mut Self {
        self.entries.insert(key.to_string(), Term::Value(v.into()));
        self
    }

    /// Insert a JSON value when `v` is `Some`.
    pub fn opt_value(&mut self, key: &str, v: Option<impl Into<Value>>) -> &mut Self {
        if let Some(v) = v {
            self.value(key, v);
        }
        self
    }

    /// True when no entries have been inserted.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Emit the object literal, keys in lexicographic order.
    pub fn build(&self) -> String {
        let mut out = String::from("{");
        for (i, (k, term)) in self.entries.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            let rendered = match term {
                Term::Code(c) => c.clone(),
                Term::Value(v) => value(v),
            };
            let _ignored = write!(&mut out, "{}:{}", key(k), rendered);
        }
        out.push('}');
        out
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn string_escapes_quotes() {
        assert_eq!(string(r#"say "hi""#), r#""say \"hi\"""#);
        assert_eq!(string("#foo"), "\"#foo\"");
    }

    #[test]
    fn value_literals() {
        assert_eq!(value(&json!(null)), "null");
        assert_eq!(value(&json!(true)), "true");
        assert_eq!(value(&json!(42)), "42");
        assert_eq!(value(&json!("a")), "\"a\"");
        assert_eq!(value(&json!([1, 2])), "[1, 2]");
    }

    #[test]
    fn object_keys_sorted_and_quoted_when_needed() {
        let v = json!({"zeta": 1, "alpha": "x", "data-id": 2});
        assert_eq!(value(&v), "{alpha:\"x\", \"data-id\":2, zeta:1}");
    }

    #[test]
    fn builder_sorts_mixed_entries() {
        let mut b = ObjectBuilder::new();
        b.value("update", "#content")
            .code("success", "function () {doIt();}")
            .value("method", "post");
        assert_eq!(
            b.build(),
            "{method:\"post\", success:function () {doIt();}, update:\"#content\"}"
        );
    }

    #[test]
    fn builder_empty() {
        assert!(ObjectBuilder::new().is_empty());
        assert_eq!(ObjectBuilder::new().build(), "{}");
    }

    #[test]
    fn function_literal() {
        assert_eq!(function("event", "doIt();"), "function (event) {doIt();}");
    }
}
