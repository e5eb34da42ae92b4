//! MooTools dialect.

use jslit::ObjectBuilder;
use tracing::warn;

use crate::{
    dialect::{Dialect, callback, simple_id, terminate},
    options::{
        DragOptions, DropOptions, EffectOptions, EventOptions, RequestOptions, SerializeOptions,
        SliderOptions, SortableOptions, Speed,
    },
};

/// MooTools syntax: `$()` for single elements, `$$()` for collections,
/// constructor classes for the interaction behaviors.
#[derive(Debug, Clone, Copy, Default)]
pub struct Mootools;

/// MooTools duration keyword for a named speed.
fn duration(speed: Speed) -> &'static str {
    match speed {
        Speed::Fast => "short",
        Speed::Slow => "long",
    }
}

impl Dialect for Mootools {
    fn name(&self) -> &'static str {
        "mootools"
    }

    fn select_expr(&self, selector: &str) -> String {
        match selector {
            "document" | "window" => format!("$({})", selector),
            _ => match simple_id(selector) {
                Some(id) => format!("$({})", jslit::string(id)),
                None => format!("$$({})", jslit::string(selector)),
            },
        }
    }

    fn event(
        &self,
        selection: &str,
        event: &str,
        callback_body: &str,
        options: &EventOptions,
    ) -> String {
        let cb = if options.wrap {
            let mut body = String::new();
            if options.stop {
                body.push_str("event.stop();\n");
            }
            body.push_str(callback_body);
            jslit::function("event", &body)
        } else {
            callback_body.to_string()
        };
        format!("{}.addEvent({}, {});", selection, jslit::string(event), cb)
    }

    fn dom_ready(&self, callback_body: &str) -> String {
        format!(
            "window.addEvent(\"domready\", {});",
            jslit::function("", callback_body)
        )
    }

    fn each(&self, selection: &str, callback_body: &str) -> String {
        format!(
            "{}.each({});",
            selection,
            jslit::function("item, index", callback_body)
        )
    }

    fn effect(&self, selection: &str, name: &str, options: &EffectOptions) -> String {
        let call = match name {
            "fadeIn" => "fade(\"in\")".to_string(),
            "fadeOut" => "fade(\"out\")".to_string(),
            "slideIn" | "slideDown" => "slide(\"in\")".to_string(),
            "slideOut" | "slideUp" => "slide(\"out\")".to_string(),
            other => format!("{}()", other),
        };
        match options.speed {
            // Fx reads duration from the element, so it is chained ahead of
            // the effect call.
            Some(speed) => format!(
                "{}.set(\"duration\", \"{}\").{};",
                selection,
                duration(speed),
                call
            ),
            None => format!("{}.{};", selection, call),
        }
    }

    fn request(&self, url: &str, options: &RequestOptions) -> String {
        let wrap = options.wrap_callbacks;
        let mut obj = ObjectBuilder::new();
        obj.value("url", url);
        obj.opt_value("method", options.method.clone());
        if let Some(data) = &options.data {
            obj.value("data", data.clone());
        }
        if let Some(update) = &options.update {
            obj.code("update", self.select_expr(update));
        }
        obj.opt_code(
            "onRequest",
            options.before.as_ref().map(|c| callback(c, "", wrap)),
        );
        obj.opt_code(
            "onSuccess",
            options
                .success
                .as_ref()
                .map(|c| callback(c, "responseText, responseXML", wrap)),
        );
        obj.opt_code(
            "onComplete",
            options.complete.as_ref().map(|c| callback(c, "", wrap)),
        );
        obj.opt_code(
            "onFailure",
            options.error.as_ref().map(|c| callback(c, "", wrap)),
        );
        let class = if options.update.is_some() {
            "Request.HTML"
        } else {
            "Request"
        };
        format!("var jsRequest = new {}({}).send();", class, obj.build())
    }

    fn sortable(&self, selection: &str, options: &SortableOptions) -> String {
        let wrap = options.wrap_callbacks;
        let mut obj = ObjectBuilder::new();
        obj.opt_value("snap", options.distance);
        obj.opt_code(
            "onStart",
            options.start.as_ref().map(|c| callback(c, "element", wrap)),
        );
        obj.opt_code(
            "onSort",
            options.sort.as_ref().map(|c| callback(c, "element", wrap)),
        );
        obj.opt_code(
            "onComplete",
            options
                .complete
                .as_ref()
                .map(|c| callback(c, "element", wrap)),
        );
        format!("var jsSortable = new Sortables({}, {});", selection, obj.build())
    }

    fn drag(&self, selection: &str, options: &DragOptions) -> String {
        let wrap = options.wrap_callbacks;
        let mut obj = ObjectBuilder::new();
        obj.opt_value("snap", options.snap_grid.clone());
        if let Some(container) = &options.container {
            obj.code("container", self.select_expr(container));
        }
        obj.opt_code(
            "onStart",
            options.start.as_ref().map(|c| callback(c, "element", wrap)),
        );
        obj.opt_code(
            "onDrag",
            options.drag.as_ref().map(|c| callback(c, "element", wrap)),
        );
        obj.opt_code(
            "onComplete",
            options.stop.as_ref().map(|c| callback(c, "element", wrap)),
        );
        format!("var jsDrag = new Drag({}, {});", selection, obj.build())
    }

    fn drop_target(&self, selection: &str, options: &DropOptions) -> String {
        // Drop targets are configured on the drag side via Drag.Move.
        let Some(drag) = &options.drag else {
            warn!(dialect = self.name(), "drop_target requires a 'drag' selector");
            return String::new();
        };
        let wrap = options.wrap_callbacks;
        let mut obj = ObjectBuilder::new();
        obj.code("droppables", selection);
        obj.opt_code(
            "onEnter",
            options
                .hover
                .as_ref()
                .map(|c| callback(c, "element, droppable", wrap)),
        );
        obj.opt_code(
            "onLeave",
            options
                .leave
                .as_ref()
                .map(|c| callback(c, "element, droppable", wrap)),
        );
        obj.opt_code(
            "onDrop",
            options
                .drop
                .as_ref()
                .map(|c| callback(c, "element, droppable", wrap)),
        );
        format!(
            "var jsDrop = new Drag.Move({}, {});",
            self.select_expr(drag),
            obj.build()
        )
    }

    fn slider(&self, selection: &str, options: &SliderOptions) -> String {
        let Some(handle) = &options.handle else {
            warn!(dialect = self.name(), "slider requires a 'handle' selector");
            return String::new();
        };
        let wrap = options.wrap_callbacks;
        let mut obj = ObjectBuilder::new();
        if let (Some(min), Some(max)) = (options.min, options.max) {
            obj.value("range", vec![min, max]);
        }
        obj.opt_value("steps", options.step);
        obj.opt_value("initialStep", options.value);
        obj.opt_value("mode", options.direction.clone());
        obj.opt_code(
            "onChange",
            options.change.as_ref().map(|c| callback(c, "step", wrap)),
        );
        obj.opt_code(
            "onComplete",
            options
                .complete
                .as_ref()
                .map(|c| callback(c, "event", wrap)),
        );
        format!(
            "var jsSlider = new Slider({}, {}, {});",
            selection,
            self.select_expr(handle),
            obj.build()
        )
    }

    fn serialize_form(&self, selection: &str, options: &SerializeOptions) -> String {
        let expr = if options.is_form {
            format!("{}.toQueryString()", selection)
        } else {
            format!("{}.getParent(\"form\").toQueryString()", selection)
        };
        terminate(expr, options.inline)
    }
}
