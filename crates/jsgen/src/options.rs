//! Typed option vocabularies for each compiler action.
//!
//! All structs deserialize from a JSON mapping with every field optional.
//! Unknown keys are ignored so that callers can pass option sets written for
//! a richer dialect without the others rejecting them.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::defaults;

/// Named animation speed accepted by `effect`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speed {
    /// Short animation; dialect decides the concrete duration.
    Fast,
    /// Long animation; dialect decides the concrete duration.
    Slow,
}

/// Options for `event`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventOptions {
    /// Wrap the callback in a function literal. When false the callback is
    /// emitted verbatim and `stop` has no effect.
    #[serde(default = "defaults::default_true")]
    pub wrap: bool,
    /// Prepend the dialect's event-cancellation statement inside the wrapped
    /// callback body.
    #[serde(default = "defaults::default_true")]
    pub stop: bool,
}

impl Default for EventOptions {
    fn default() -> Self {
        Self {
            wrap: true,
            stop: true,
        }
    }
}

/// Options for `effect`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EffectOptions {
    /// Animation speed; omitted means the library default.
    #[serde(default)]
    pub speed: Option<Speed>,
}

impl EffectOptions {
    /// Convenience constructor for a speed-only option set.
    pub fn speed(speed: Speed) -> Self {
        Self { speed: Some(speed) }
    }
}

/// Options for `request`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RequestOptions {
    /// HTTP method, e.g. `"post"`. Library default when omitted.
    #[serde(default)]
    pub method: Option<String>,
    /// Request payload, rendered as a JavaScript literal.
    #[serde(default)]
    pub data: Option<Value>,
    /// Selector of the element to update with the response. Implies a
    /// default success handler where the dialect needs one.
    #[serde(default)]
    pub update: Option<String>,
    /// Expected response type (jQuery only; other dialects ignore it).
    #[serde(default)]
    pub data_type: Option<String>,
    /// Callback run before the request is sent.
    #[serde(default)]
    pub before: Option<String>,
    /// Callback run on success.
    #[serde(default)]
    pub success: Option<String>,
    /// Callback run on failure.
    #[serde(default)]
    pub error: Option<String>,
    /// Callback run on completion, success or not.
    #[serde(default)]
    pub complete: Option<String>,
    /// Wrap callback options in function literals.
    #[serde(default = "defaults::default_true")]
    pub wrap_callbacks: bool,
}

/// Options for `sortable`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SortableOptions {
    /// Callback when a sort interaction starts.
    #[serde(default)]
    pub start: Option<String>,
    /// Callback fired during sorting.
    #[serde(default)]
    pub sort: Option<String>,
    /// Callback when sorting completes.
    #[serde(default)]
    pub complete: Option<String>,
    /// Drag distance in pixels before sorting begins.
    #[serde(default)]
    pub distance: Option<i64>,
    /// Selector constraining the sort region.
    #[serde(default)]
    pub containment: Option<String>,
    /// Wrap callback options in function literals.
    #[serde(default = "defaults::default_true")]
    pub wrap_callbacks: bool,
}

/// Options for `drag`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DragOptions {
    /// Callback when a drag starts.
    #[serde(default)]
    pub start: Option<String>,
    /// Callback fired while dragging.
    #[serde(default)]
    pub drag: Option<String>,
    /// Callback when the drag stops.
    #[serde(default)]
    pub stop: Option<String>,
    /// `[x, y]` pixel grid the dragged element snaps to.
    #[serde(default)]
    pub snap_grid: Option<Vec<i64>>,
    /// Selector of the element the drag is contained within.
    #[serde(default)]
    pub container: Option<String>,
    /// Wrap callback options in function literals.
    #[serde(default = "defaults::default_true")]
    pub wrap_callbacks: bool,
}

/// Options for `drop_target`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DropOptions {
    /// Selector limiting which draggables are accepted.
    #[serde(default)]
    pub accept: Option<String>,
    /// Callback when an accepted draggable is dropped.
    #[serde(default)]
    pub drop: Option<String>,
    /// Callback when a draggable hovers over the target.
    #[serde(default)]
    pub hover: Option<String>,
    /// Callback when a draggable leaves the target.
    #[serde(default)]
    pub leave: Option<String>,
    /// Selector of the companion draggable. Required by MooTools, where drop
    /// targets are configured on the drag side.
    #[serde(default)]
    pub drag: Option<String>,
    /// Wrap callback options in function literals.
    #[serde(default = "defaults::default_true")]
    pub wrap_callbacks: bool,
}

/// Options for `slider`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SliderOptions {
    /// Selector of the slider handle. Required by MooTools and Prototype.
    #[serde(default)]
    pub handle: Option<String>,
    /// Callback fired as the value changes.
    #[serde(default)]
    pub change: Option<String>,
    /// Callback when the interaction completes.
    #[serde(default)]
    pub complete: Option<String>,
    /// Minimum value of the range.
    #[serde(default)]
    pub min: Option<i64>,
    /// Maximum value of the range.
    #[serde(default)]
    pub max: Option<i64>,
    /// Step increment.
    #[serde(default)]
    pub step: Option<i64>,
    /// Initial value.
    #[serde(default)]
    pub value: Option<i64>,
    /// Slider orientation, `"horizontal"` or `"vertical"`.
    #[serde(default)]
    pub direction: Option<String>,
    /// Wrap callback options in function literals.
    #[serde(default = "defaults::default_true")]
    pub wrap_callbacks: bool,
}

/// Options for `serialize_form`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SerializeOptions {
    /// The current selection is itself a form; serialize it directly instead
    /// of locating its containing form.
    #[serde(default)]
    pub is_form: bool,
    /// Emit an expression without the trailing statement terminator, for
    /// embedding inside a larger snippet.
    #[serde(default)]
    pub inline: bool,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn defaults_are_permissive() {
        let o: EventOptions = serde_json::from_value(json!({})).unwrap();
        assert!(o.wrap);
        assert!(o.stop);
        let o: RequestOptions = serde_json::from_value(json!({})).unwrap();
        assert!(o.wrap_callbacks);
        assert!(o.method.is_none());
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let o: EffectOptions =
            serde_json::from_value(json!({"speed": "fast", "easing": "bounce"})).unwrap();
        assert_eq!(o.speed, Some(Speed::Fast));
    }

    #[test]
    fn speed_parses_lowercase() {
        let s: Speed = serde_json::from_value(json!("slow")).unwrap();
        assert_eq!(s, Speed::Slow);
        assert!(serde_json::from_value::<Speed>(json!("medium")).is_err());
    }
}
