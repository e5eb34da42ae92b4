//! Dialect abstraction and shared emission helpers.
//!
//! A [`Dialect`] turns one action plus its options into a line of JavaScript
//! in a specific library's syntax. Dialects are stateless; the current
//! selection is passed in by the compiler.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::options::{
    DragOptions, DropOptions, EffectOptions, EventOptions, RequestOptions, SerializeOptions,
    SliderOptions, SortableOptions,
};

mod jquery;
mod mootools;
mod prototype;

pub use jquery::Jquery;
pub use mootools::Mootools;
pub use prototype::Prototype;

/// One target-library syntax. Object safe so a compiler can hold any dialect
/// chosen at construction time.
pub trait Dialect {
    /// Short lowercase name of the target library.
    fn name(&self) -> &'static str;

    /// Translate a CSS-like selector into the dialect's wrapper expression.
    fn select_expr(&self, selector: &str) -> String;

    /// Bind `callback` to `event` on the current selection.
    fn event(
        &self,
        selection: &str,
        event: &str,
        callback: &str,
        options: &EventOptions,
    ) -> String;

    /// Register `callback` to run once the DOM is ready.
    fn dom_ready(&self, callback: &str) -> String;

    /// Iterate the current selection, running `callback` per element.
    fn each(&self, selection: &str, callback: &str) -> String;

    /// Run a named visual effect on the current selection.
    fn effect(&self, selection: &str, name: &str, options: &EffectOptions) -> String;

    /// Emit an ajax request to `url`.
    fn request(&self, url: &str, options: &RequestOptions) -> String;

    /// Make the current selection a sortable list.
    fn sortable(&self, selection: &str, options: &SortableOptions) -> String;

    /// Make the current selection draggable.
    fn drag(&self, selection: &str, options: &DragOptions) -> String;

    /// Make the current selection a drop target.
    fn drop_target(&self, selection: &str, options: &DropOptions) -> String;

    /// Attach slider behavior to the current selection.
    fn slider(&self, selection: &str, options: &SliderOptions) -> String;

    /// Serialize the form the current selection refers to (or contains).
    fn serialize_form(&self, selection: &str, options: &SerializeOptions) -> String;
}

/// Matches a bare id selector such as `#content`.
static SIMPLE_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#[A-Za-z][A-Za-z0-9_-]*$").expect("static regex"));

/// Return the id name when `selector` is a bare `#id` selector.
pub(crate) fn simple_id(selector: &str) -> Option<&str> {
    if SIMPLE_ID.is_match(selector) {
        Some(&selector[1..])
    } else {
        None
    }
}

/// Wrap a callback body in a function literal with the given parameter list,
/// or pass it through verbatim when wrapping is disabled.
pub(crate) fn callback(body: &str, args: &str, wrap: bool) -> String {
    if wrap {
        jslit::function(args, body)
    } else {
        body.to_string()
    }
}

/// Terminate an expression as a statement unless `inline` is requested.
pub(crate) fn terminate(expr: String, inline: bool) -> String {
    if inline { expr } else { format!("{};", expr) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_id_matches_bare_ids_only() {
        assert_eq!(simple_id("#content"), Some("content"));
        assert_eq!(simple_id("#nav-main"), Some("nav-main"));
        assert_eq!(simple_id("ul"), None);
        assert_eq!(simple_id("#a b"), None);
        assert_eq!(simple_id("#1up"), None);
    }

    #[test]
    fn callback_respects_wrap_flag() {
        assert_eq!(callback("go();", "event", true), "function (event) {go();}");
        assert_eq!(callback("handler", "event", false), "handler");
    }
}
