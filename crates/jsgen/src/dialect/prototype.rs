//! Prototype / script.aculo.us dialect.

use jslit::ObjectBuilder;
use tracing::warn;

use crate::{
    dialect::{Dialect, callback, simple_id, terminate},
    options::{
        DragOptions, DropOptions, EffectOptions, EventOptions, RequestOptions, SerializeOptions,
        SliderOptions, SortableOptions, Speed,
    },
};

/// Prototype syntax, with script.aculo.us supplying effects and the
/// drag/drop/slider behaviors.
#[derive(Debug, Clone, Copy, Default)]
pub struct Prototype;

/// Numeric duration token (seconds) for a named speed.
fn duration(speed: Speed) -> &'static str {
    match speed {
        Speed::Fast => "0.5",
        Speed::Slow => "2",
    }
}

impl Dialect for Prototype {
    fn name(&self) -> &'static str {
        "prototype"
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
        format!("{}.observe({}, {});", selection, jslit::string(event), cb)
    }

    fn dom_ready(&self, callback_body: &str) -> String {
        format!(
            "document.observe(\"dom:loaded\", {});",
            jslit::function("event", callback_body)
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
        let method = match name {
            "fadeIn" => "appear",
            "fadeOut" => "fade",
            "slideIn" => "slideDown",
            "slideOut" => "slideUp",
            other => other,
        };
        let arg = match options.speed {
            Some(speed) => format!("{{duration:{}}}", duration(speed)),
            None => String::new(),
        };
        format!("{}.{}({});", selection, method, arg)
    }

    fn request(&self, url: &str, options: &RequestOptions) -> String {
        let wrap = options.wrap_callbacks;
        let mut obj = ObjectBuilder::new();
        obj.opt_value("method", options.method.clone());
        if let Some(data) = &options.data {
            obj.value("parameters", data.clone());
        }
        obj.opt_code(
            "onCreate",
            options.before.as_ref().map(|c| callback(c, "", wrap)),
        );
        obj.opt_code(
            "onSuccess",
            options
                .success
                .as_ref()
                .map(|c| callback(c, "transport", wrap)),
        );
        obj.opt_code(
            "onComplete",
            options
                .complete
                .as_ref()
                .map(|c| callback(c, "transport", wrap)),
        );
        obj.opt_code(
            "onFailure",
            options.error.as_ref().map(|c| callback(c, "transport", wrap)),
        );
        match &options.update {
            Some(update) => {
                let target = update.strip_prefix('#').unwrap_or(update);
                format!(
                    "var jsRequest = new Ajax.Updater({}, {}, {});",
                    jslit::string(target),
                    jslit::string(url),
                    obj.build()
                )
            }
            None => format!(
                "var jsRequest = new Ajax.Request({}, {});",
                jslit::string(url),
                obj.build()
            ),
        }
    }

    fn sortable(&self, selection: &str, options: &SortableOptions) -> String {
        let wrap = options.wrap_callbacks;
        let mut obj = ObjectBuilder::new();
        obj.opt_code(
            "onChange",
            options.sort.as_ref().map(|c| callback(c, "element", wrap)),
        );
        obj.opt_code(
            "onUpdate",
            options
                .complete
                .as_ref()
                .map(|c| callback(c, "element", wrap)),
        );
        format!(
            "var jsSortable = Sortable.create({}, {});",
            selection,
            obj.build()
        )
    }

    fn drag(&self, selection: &str, options: &DragOptions) -> String {
        let wrap = options.wrap_callbacks;
        let mut obj = ObjectBuilder::new();
        obj.opt_value("snap", options.snap_grid.clone());
        obj.opt_code(
            "onStart",
            options
                .start
                .as_ref()
                .map(|c| callback(c, "element, event", wrap)),
        );
        obj.opt_code(
            "onDrag",
            options
                .drag
                .as_ref()
                .map(|c| callback(c, "element, event", wrap)),
        );
        obj.opt_code(
            "onEnd",
            options
                .stop
                .as_ref()
                .map(|c| callback(c, "element, event", wrap)),
        );
        format!("var jsDrag = new Draggable({}, {});", selection, obj.build())
    }

    fn drop_target(&self, selection: &str, options: &DropOptions) -> String {
        let wrap = options.wrap_callbacks;
        let mut obj = ObjectBuilder::new();
        obj.opt_value("accept", options.accept.clone());
        obj.opt_code(
            "onHover",
            options
                .hover
                .as_ref()
                .map(|c| callback(c, "element, droppable, overlap", wrap)),
        );
        obj.opt_code(
            "onDrop",
            options
                .drop
                .as_ref()
                .map(|c| callback(c, "element, droppable, event", wrap)),
        );
        // Droppables has no leave notification; the option is ignored here.
        format!("Droppables.add({}, {});", selection, obj.build())
    }

    fn slider(&self, selection: &str, options: &SliderOptions) -> String {
        let Some(handle) = &options.handle else {
            warn!(dialect = self.name(), "slider requires a 'handle' selector");
            return String::new();
        };
        let wrap = options.wrap_callbacks;
        let mut obj = ObjectBuilder::new();
        if let (Some(min), Some(max)) = (options.min, options.max) {
            obj.code("range", format!("$R({}, {})", min, max));
        }
        obj.opt_value("sliderValue", options.value);
        obj.opt_value("axis", options.direction.clone());
        obj.opt_code(
            "onSlide",
            options.change.as_ref().map(|c| callback(c, "value", wrap)),
        );
        obj.opt_code(
            "onChange",
            options
                .complete
                .as_ref()
                .map(|c| callback(c, "value", wrap)),
        );
        format!(
            "var jsSlider = new Control.Slider({}, {}, {});",
            self.select_expr(handle),
            selection,
            obj.build()
        )
    }

    fn serialize_form(&self, selection: &str, options: &SerializeOptions) -> String {
        let expr = if options.is_form {
            format!("{}.serialize()", selection)
        } else {
            format!("{}.up(\"form\").serialize()", selection)
        };
        terminate(expr, options.inline)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn sel(selector: &str) -> String {
        Prototype.select_expr(selector)
    }

    #[test]
    fn select_matches_mootools_rules() {
        assert_eq!(sel("#foo"), "$(\"foo\")");
        assert_eq!(sel("div.panel"), "$$(\"div.panel\")");
        assert_eq!(sel("window"), "$(window)");
    }

    #[test]
    fn effect_maps_to_scriptaculous_names() {
        let d = Prototype;
        assert_eq!(
            d.effect(&sel("#foo"), "fadeIn", &EffectOptions::speed(Speed::Slow)),
            "$(\"foo\").appear({duration:2});"
        );
        assert_eq!(
            d.effect(&sel("#foo"), "fadeOut", &EffectOptions::speed(Speed::Fast)),
            "$(\"foo\").fade({duration:0.5});"
        );
        assert_eq!(
            d.effect(&sel("#foo"), "slideIn", &EffectOptions::default()),
            "$(\"foo\").slideDown();"
        );
        assert_eq!(
            d.effect(&sel("#foo"), "shake", &EffectOptions::default()),
            "$(\"foo\").shake();"
        );
    }

    #[test]
    fn event_and_dom_ready() {
        let d = Prototype;
        assert_eq!(
            d.event(&sel("#btn"), "click", "doClick();", &EventOptions::default()),
            "$(\"btn\").observe(\"click\", function (event) {event.stop();\ndoClick();});"
        );
        assert_eq!(
            d.dom_ready("init();"),
            "document.observe(\"dom:loaded\", function (event) {init();});"
        );
    }

    #[test]
    fn request_uses_updater_for_update() {
        let d = Prototype;
        let options: RequestOptions = serde_json::from_value(json!({
            "update": "#content",
            "data": {"page": 2},
        }))
        .unwrap();
        assert_eq!(
            d.request("/posts", &options),
            "var jsRequest = new Ajax.Updater(\"content\", \"/posts\", {parameters:{page:2}});"
        );
        let plain: RequestOptions =
            serde_json::from_value(json!({"success": "onDone();"})).unwrap();
        assert_eq!(
            d.request("/posts", &plain),
            "var jsRequest = new Ajax.Request(\"/posts\", \
             {onSuccess:function (transport) {onDone();}});"
        );
    }

    #[test]
    fn sortable_vocabulary() {
        let d = Prototype;
        let options: SortableOptions = serde_json::from_value(json!({
            "sort": "onSort();",
            "complete": "onDone();",
        }))
        .unwrap();
        assert_eq!(
            d.sortable(&sel("#myList"), &options),
            "var jsSortable = Sortable.create($(\"myList\"), \
             {onChange:function (element) {onSort();}, \
             onUpdate:function (element) {onDone();}});"
        );
    }

    #[test]
    fn slider_range_uses_object_range() {
        let d = Prototype;
        let options: SliderOptions = serde_json::from_value(json!({
            "handle": "#knob",
            "min": 1,
            "max": 5,
            "change": "onSlide();",
        }))
        .unwrap();
        assert_eq!(
            d.slider(&sel("#track"), &options),
            "var jsSlider = new Control.Slider($(\"knob\"), $(\"track\"), \
             {onSlide:function (value) {onSlide();}, range:$R(1, 5)});"
        );
        assert_eq!(d.slider(&sel("#track"), &SliderOptions::default()), "");
    }

    #[test]
    fn serialize_form_walks_up() {
        let d = Prototype;
        assert_eq!(
            d.serialize_form(&sel("#element"), &SerializeOptions::default()),
            "$(\"element\").up(\"form\").serialize();"
        );
    }
}
