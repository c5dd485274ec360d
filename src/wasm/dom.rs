use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, ScrollBehavior, ScrollToOptions, Window};

use crate::config::SiteConfig;
use crate::render_state::Viewport;
use crate::router::PageHost;
use crate::view::ViewName;

/// Router side effects applied to the live document.
pub struct DomHost {
    window: Window,
    document: Document,
    nav_selector: String,
    config: SiteConfig,
}

impl DomHost {
    pub fn new(window: Window, document: Document, config: SiteConfig) -> Self {
        let nav_selector = format!("[{}]", config.nav_attribute);
        Self {
            window,
            document,
            nav_selector,
            config,
        }
    }

    fn nav_markers(&self) -> Vec<Element> {
        query_all(&self.document, &self.nav_selector)
    }
}

impl PageHost for DomHost {
    fn set_container_visible(&mut self, view: ViewName, visible: bool) {
        let Some(container) = self.document.get_element_by_id(view.container_id()) else {
            return;
        };
        let classes = container.class_list();
        let result = if visible {
            classes.add_1(self.config.active_class)
        } else {
            classes.remove_1(self.config.active_class)
        };
        warn_on_err("toggle container", result);
    }

    fn nav_marker_tokens(&self) -> Vec<String> {
        self.nav_markers()
            .iter()
            .map(|el| el.get_attribute(self.config.nav_attribute).unwrap_or_default())
            .collect()
    }

    fn set_nav_marker_current(&mut self, index: usize, current: bool) {
        let Some(marker) = self.nav_markers().into_iter().nth(index) else {
            return;
        };
        warn_on_err("clear aria-current", marker.remove_attribute("aria-current"));
        if current {
            warn_on_err(
                "set aria-current",
                marker.set_attribute("aria-current", "page"),
            );
        }
    }

    fn scroll_to_top(&mut self) {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Instant);
        self.window.scroll_to_with_scroll_to_options(&options);
    }

    fn set_title(&mut self, title: &str) {
        self.document.set_title(title);
    }

    fn set_fragment(&mut self, fragment: &str) {
        warn_on_err("set hash", self.window.location().set_hash(fragment));
    }
}

/// Location fragment without the leading `#`.
pub fn current_fragment(window: &Window) -> String {
    let hash = window.location().hash().unwrap_or_default();
    hash.strip_prefix('#').unwrap_or(&hash).to_string()
}

pub fn viewport(window: &Window) -> Viewport {
    let dim = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    Viewport::new(
        dim(window.inner_width()),
        dim(window.inner_height()),
        window.device_pixel_ratio(),
    )
}

/// Every element matching `selector`, in document order.
pub fn query_all(root: &Document, selector: &str) -> Vec<Element> {
    let Ok(list) = root.query_selector_all(selector) else {
        log::warn!("bad selector {selector}");
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn warn_on_err(what: &str, result: Result<(), JsValue>) {
    if let Err(err) = result {
        log::warn!("{what} failed: {err:?}");
    }
}
