use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{
    ParseLibraryError,
    dialect::{Dialect, Jquery, Mootools, Prototype},
    options::{
        DragOptions, DropOptions, EffectOptions, EventOptions, RequestOptions, SerializeOptions,
        SliderOptions, SortableOptions,
    },
};

/// The supported target libraries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Library {
    /// jQuery.
    JQuery,
    /// MooTools.
    MooTools,
    /// Prototype with script.aculo.us.
    Prototype,
}

impl Library {
    /// Instantiate the dialect for this library.
    fn dialect(self) -> Box<dyn Dialect> {
        match self {
            Self::JQuery => Box::new(Jquery),
            Self::MooTools => Box::new(Mootools),
            Self::Prototype => Box::new(Prototype),
        }
    }
}

impl FromStr for Library {
    type Err = ParseLibraryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "jquery" => Ok(Self::JQuery),
            "mootools" => Ok(Self::MooTools),
            "prototype" => Ok(Self::Prototype),
            _ => Err(ParseLibraryError {
                name: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Library {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::JQuery => "jquery",
            Self::MooTools => "mootools",
            Self::Prototype => "prototype",
        };
        write!(f, "{}", name)
    }
}

/// Selector-to-snippet compiler for one target library.
///
/// The dialect is resolved once at construction; the only mutable state is
/// the current selection, set by [`Compiler::select`] and consumed by every
/// selection-based action. Actions never fail: invalid option combinations
/// log a warning and degrade to partial or empty output.
pub struct Compiler {
    /// The dialect doing the actual emission.
    dialect: Box<dyn Dialect>,
    /// Translated selection expression, if one has been set.
    selection: Option<String>,
}

impl Compiler {
    /// Create a compiler for the given library.
    pub fn new(library: Library) -> Self {
        Self {
            dialect: library.dialect(),
            selection: None,
        }
    }

    /// Set the current selection from a CSS-like selector. Returns `self`
    /// for chaining.
    pub fn select(&mut self, selector: &str) -> &mut Self {
        self.selection = Some(self.dialect.select_expr(selector));
        self
    }

    /// The translated selection expression, if one has been set.
    pub fn selection(&self) -> Option<&str> {
        self.selection.as_deref()
    }

    /// The translated selection, or `null` (with a warning) when the action
    /// needs one and none has been set.
    fn required_selection(&self, action: &str) -> String {
        match &self.selection {
            Some(s) => s.clone(),
            None => {
                warn!(
                    dialect = self.dialect.name(),
                    action, "no selection set; emitting null"
                );
                "null".to_string()
            }
        }
    }

    /// Bind `callback` to `event` on the current selection.
    pub fn event(&self, event: &str, callback: &str, options: &EventOptions) -> String {
        self.dialect
            .event(&self.required_selection("event"), event, callback, options)
    }

    /// Register `callback` to run once the DOM is ready.
    pub fn dom_ready(&self, callback: &str) -> String {
        self.dialect.dom_ready(callback)
    }

    /// Iterate the current selection with `callback`.
    pub fn each(&self, callback: &str) -> String {
        self.dialect.each(&self.required_selection("each"), callback)
    }

    /// Run a named visual effect on the current selection.
    pub fn effect(&self, name: &str, options: &EffectOptions) -> String {
        self.dialect
            .effect(&self.required_selection("effect"), name, options)
    }

    /// Emit an ajax request to `url`.
    pub fn request(&self, url: &str, options: &RequestOptions) -> String {
        self.dialect.request(url, options)
    }

    /// Make the current selection a sortable list.
    pub fn sortable(&self, options: &SortableOptions) -> String {
        self.dialect
            .sortable(&self.required_selection("sortable"), options)
    }

    /// Make the current selection draggable.
    pub fn drag(&self, options: &DragOptions) -> String {
        self.dialect.drag(&self.required_selection("drag"), options)
    }

    /// Make the current selection a drop target.
    pub fn drop_target(&self, options: &DropOptions) -> String {
        self.dialect
            .drop_target(&self.required_selection("drop_target"), options)
    }

    /// Attach slider behavior to the current selection.
    pub fn slider(&self, options: &SliderOptions) -> String {
        self.dialect
            .slider(&self.required_selection("slider"), options)
    }

    /// Serialize the form the current selection refers to or sits inside.
    pub fn serialize_form(&self, options: &SerializeOptions) -> String {
        self.dialect
            .serialize_form(&self.required_selection("serialize_form"), options)
    }
}

impl fmt::Debug for Compiler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Compiler")
            .field("dialect", &self.dialect.name())
            .field("selection", &self.selection)
            .finish()
    }
}
