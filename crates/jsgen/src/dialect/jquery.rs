//! jQuery dialect.

use jslit::ObjectBuilder;

use crate::{
    dialect::{Dialect, callback, terminate},
    options::{
        DragOptions, DropOptions, EffectOptions, EventOptions, RequestOptions, SerializeOptions,
        SliderOptions, SortableOptions, Speed,
    },
};

/// jQuery syntax: everything hangs off `$()` wrappers and method chaining.
#[derive(Debug, Clone, Copy, Default)]
pub struct Jquery;

impl Dialect for Jquery {
    fn name(&self) -> &'static str {
        "jquery"
    }

    fn select_expr(&self, selector: &str) -> String {
        match selector {
            "document" | "window" => format!("$({})", selector),
            _ => format!("$({})", jslit::string(selector)),
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
                body.push_str("event.preventDefault();\n");
            }
            body.push_str(callback_body);
            jslit::function("event", &body)
        } else {
            callback_body.to_string()
        };
        format!("{}.bind({}, {});", selection, jslit::string(event), cb)
    }

    fn dom_ready(&self, callback_body: &str) -> String {
        format!("$(document).ready({});", jslit::function("", callback_body))
    }

    fn each(&self, selection: &str, callback_body: &str) -> String {
        format!("{}.each({});", selection, jslit::function("", callback_body))
    }

    fn effect(&self, selection: &str, name: &str, options: &EffectOptions) -> String {
        let method = match name {
            "slideIn" => "slideDown",
            "slideOut" => "slideUp",
            other => other,
        };
        let arg = match options.speed {
            Some(Speed::Fast) => "\"fast\"",
            Some(Speed::Slow) => "\"slow\"",
            None => "",
        };
        format!("{}.{}({});", selection, method, arg)
    }

    fn request(&self, url: &str, options: &RequestOptions) -> String {
        let wrap = options.wrap_callbacks;
        let mut obj = ObjectBuilder::new();
        obj.value("url", url);
        obj.opt_value("type", options.method.clone());
        if let Some(data) = &options.data {
            obj.value("data", data.clone());
        }
        obj.opt_code(
            "beforeSend",
            options
                .before
                .as_ref()
                .map(|c| callback(c, "XMLHttpRequest", wrap)),
        );
        obj.opt_code(
            "complete",
            options
                .complete
                .as_ref()
                .map(|c| callback(c, "XMLHttpRequest, textStatus", wrap)),
        );
        obj.opt_code(
            "error",
            options
                .error
                .as_ref()
                .map(|c| callback(c, "XMLHttpRequest, textStatus, errorThrown", wrap)),
        );
        match (&options.success, &options.update) {
            (Some(c), _) => {
                obj.code("success", callback(c, "data, textStatus", wrap));
            }
            (None, Some(update)) => {
                // Updating a target implies injecting the returned HTML.
                let body = format!("$({}).html(data);", jslit::string(update));
                obj.code("success", jslit::function("data, textStatus", &body));
            }
            (None, None) => {}
        }
        if options.update.is_some() {
            obj.value("dataType", options.data_type.clone().unwrap_or_else(|| "html".into()));
        } else {
            obj.opt_value("dataType", options.data_type.clone());
        }
        format!("$.ajax({});", obj.build())
    }

    fn sortable(&self, selection: &str, options: &SortableOptions) -> String {
        let wrap = options.wrap_callbacks;
        let mut obj = ObjectBuilder::new();
        obj.opt_value("distance", options.distance);
        obj.opt_value("containment", options.containment.clone());
        obj.opt_code(
            "start",
            options.start.as_ref().map(|c| callback(c, "event, ui", wrap)),
        );
        obj.opt_code(
            "sort",
            options.sort.as_ref().map(|c| callback(c, "event, ui", wrap)),
        );
        obj.opt_code(
            "stop",
            options
                .complete
                .as_ref()
                .map(|c| callback(c, "event, ui", wrap)),
        );
        format!("{}.sortable({});", selection, obj.build())
    }

    fn drag(&self, selection: &str, options: &DragOptions) -> String {
        let wrap = options.wrap_callbacks;
        let mut obj = ObjectBuilder::new();
        obj.opt_value("grid", options.snap_grid.clone());
        obj.opt_value("containment", options.container.clone());
        obj.opt_code(
            "start",
            options.start.as_ref().map(|c| callback(c, "event, ui", wrap)),
        );
        obj.opt_code(
            "drag",
            options.drag.as_ref().map(|c| callback(c, "event, ui", wrap)),
        );
        obj.opt_code(
            "stop",
            options.stop.as_ref().map(|c| callback(c, "event, ui", wrap)),
        );
        format!("{}.draggable({});", selection, obj.build())
    }

    fn drop_target(&self, selection: &str, options: &DropOptions) -> String {
        let wrap = options.wrap_callbacks;
        let mut obj = ObjectBuilder::new();
        obj.opt_value("accept", options.accept.clone());
        obj.opt_code(
            "over",
            options.hover.as_ref().map(|c| callback(c, "event, ui", wrap)),
        );
        obj.opt_code(
            "out",
            options.leave.as_ref().map(|c| callback(c, "event, ui", wrap)),
        );
        obj.opt_code(
            "drop",
            options.drop.as_ref().map(|c| callback(c, "event, ui", wrap)),
        );
        format!("{}.droppable({});", selection, obj.build())
    }

    fn slider(&self, selection: &str, options: &SliderOptions) -> String {
        let wrap = options.wrap_callbacks;
        let mut obj = ObjectBuilder::new();
        obj.opt_value("min", options.min);
        obj.opt_value("max", options.max);
        obj.opt_value("step", options.step);
        obj.opt_value("value", options.value);
        obj.opt_value("orientation", options.direction.clone());
        obj.opt_code(
            "slide",
            options
                .change
                .as_ref()
                .map(|c| callback(c, "event, ui", wrap)),
        );
        obj.opt_code(
            "stop",
            options
                .complete
                .as_ref()
                .map(|c| callback(c, "event, ui", wrap)),
        );
        format!("{}.slider({});", selection, obj.build())
    }

    fn serialize_form(&self, selection: &str, options: &SerializeOptions) -> String {
        let expr = if options.is_form {
            format!("{}.serialize()", selection)
        } else {
            format!("{}.closest(\"form\").serialize()", selection)
        };
        terminate(expr, options.inline)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn sel(selector: &str) -> String {
        Jquery.select_expr(selector)
    }

    #[test]
    fn select_wraps_selectors_and_special_cases() {
        assert_eq!(sel("#foo"), "$(\"#foo\")");
        assert_eq!(sel("ul > li"), "$(\"ul > li\")");
        assert_eq!(sel("document"), "$(document)");
        assert_eq!(sel("window"), "$(window)");
    }

    #[test]
    fn effect_maps_names_and_speed() {
        let d = Jquery;
        assert_eq!(d.effect(&sel("#foo"), "hide", &EffectOptions::default()), "$(\"#foo\").hide();");
        assert_eq!(
            d.effect(&sel("#foo"), "hide", &EffectOptions::speed(Speed::Fast)),
            "$(\"#foo\").hide(\"fast\");"
        );
        assert_eq!(
            d.effect(&sel("#foo"), "slideIn", &EffectOptions::default()),
            "$(\"#foo\").slideDown();"
        );
        // Unmapped names pass through as method calls.
        assert_eq!(
            d.effect(&sel("#foo"), "shake", &EffectOptions::default()),
            "$(\"#foo\").shake();"
        );
    }

    #[test]
    fn event_wraps_and_cancels_by_default() {
        let d = Jquery;
        assert_eq!(
            d.event(&sel("#btn"), "click", "doClick();", &EventOptions::default()),
            "$(\"#btn\").bind(\"click\", function (event) {event.preventDefault();\ndoClick();});"
        );
        let quiet = EventOptions {
            wrap: true,
            stop: false,
        };
        assert_eq!(
            d.event(&sel("#btn"), "click", "doClick();", &quiet),
            "$(\"#btn\").bind(\"click\", function (event) {doClick();});"
        );
        let bare = EventOptions {
            wrap: false,
            stop: true,
        };
        assert_eq!(
            d.event(&sel("#btn"), "click", "handleClick", &bare),
            "$(\"#btn\").bind(\"click\", handleClick);"
        );
    }

    #[test]
    fn dom_ready_and_each() {
        let d = Jquery;
        assert_eq!(d.dom_ready("init();"), "$(document).ready(function () {init();});");
        assert_eq!(
            d.each(&sel("li"), "$(this).hide();"),
            "$(\"li\").each(function () {$(this).hide();});"
        );
    }

    #[test]
    fn request_sorts_keys_and_defaults_update_success() {
        let d = Jquery;
        let options: RequestOptions = serde_json::from_value(json!({
            "update": "#content",
            "method": "post",
        }))
        .unwrap();
        assert_eq!(
            d.request("/comments/add", &options),
            "$.ajax({dataType:\"html\", success:function (data, textStatus) \
             {$(\"#content\").html(data);}, type:\"post\", url:\"/comments/add\"});"
        );
    }

    #[test]
    fn request_bare_callback_when_unwrapped() {
        let d = Jquery;
        let options: RequestOptions = serde_json::from_value(json!({
            "success": "onDone",
            "wrap_callbacks": false,
        }))
        .unwrap();
        assert_eq!(
            d.request("/poll", &options),
            "$.ajax({success:onDone, url:\"/poll\"});"
        );
    }

    #[test]
    fn serialize_form_variants() {
        let d = Jquery;
        let plain = SerializeOptions::default();
        assert_eq!(
            d.serialize_form(&sel("#element"), &plain),
            "$(\"#element\").closest(\"form\").serialize();"
        );
        let opts = SerializeOptions {
            is_form: true,
            inline: true,
        };
        assert_eq!(d.serialize_form(&sel("#myform"), &opts), "$(\"#myform\").serialize()");
    }

    #[test]
    fn sortable_maps_complete_to_stop() {
        let d = Jquery;
        let options: SortableOptions = serde_json::from_value(json!({
            "complete": "onStop();",
            "distance": 5,
        }))
        .unwrap();
        assert_eq!(
            d.sortable(&sel("#myList"), &options),
            "$(\"#myList\").sortable({distance:5, stop:function (event, ui) {onStop();}});"
        );
    }

    #[test]
    fn drag_and_drop_vocabulary() {
        let d = Jquery;
        let drag: DragOptions = serde_json::from_value(json!({
            "snap_grid": [10, 10],
            "container": "#sandbox",
        }))
        .unwrap();
        assert_eq!(
            d.drag(&sel("#drag-me"), &drag),
            "$(\"#drag-me\").draggable({containment:\"#sandbox\", grid:[10, 10]});"
        );
        let drop: DropOptions = serde_json::from_value(json!({
            "hover": "onOver();",
            "leave": "onOut();",
        }))
        .unwrap();
        assert_eq!(
            d.drop_target(&sel("#drop-me"), &drop),
            "$(\"#drop-me\").droppable({out:function (event, ui) {onOut();}, \
             over:function (event, ui) {onOver();}});"
        );
    }

    #[test]
    fn slider_maps_direction_to_orientation() {
        let d = Jquery;
        let options: SliderOptions = serde_json::from_value(json!({
            "direction": "vertical",
            "min": 0,
            "max": 10,
            "change": "onChange();",
        }))
        .unwrap();
        assert_eq!(
            d.slider(&sel("#slider"), &options),
            "$(\"#slider\").slider({max:10, min:0, orientation:\"vertical\", \
             slide:function (event, ui) {onChange();}});"
        );
    }
}
