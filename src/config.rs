//! Page wiring and tuning constants.

/// Fraction of the remaining distance the smoothed pointer covers each frame.
pub const POINTER_DAMPING: f32 = 0.05;

/// Upper bound on the device pixel ratio used for the drawing buffer.
pub const MAX_PIXEL_RATIO: f64 = 2.0;

/// Height of the fixed header that in-page anchor scrolling must clear.
pub const HEADER_HEIGHT: f64 = 80.0;

/// Selectors and ids the browser glue looks up, plus the console log level.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    pub canvas_id: &'static str,
    pub nav_attribute: &'static str,
    pub active_class: &'static str,
    pub nav_toggle_selector: &'static str,
    pub mobile_menu_selector: &'static str,
    pub faq_item_selector: &'static str,
    pub faq_question_selector: &'static str,
    pub faq_answer_selector: &'static str,
    pub slider_selector: &'static str,
    pub header_height: f64,
    pub log_level: log::Level,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            canvas_id: "webgl-canvas",
            nav_attribute: "data-nav",
            active_class: "active",
            nav_toggle_selector: ".nav-toggle",
            mobile_menu_selector: ".mobile-menu",
            faq_item_selector: ".faq-item",
            faq_question_selector: ".faq-question",
            faq_answer_selector: ".faq-answer",
            slider_selector: ".screenshots-slider",
            header_height: HEADER_HEIGHT,
            log_level: if cfg!(debug_assertions) {
                log::Level::Debug
            } else {
                log::Level::Info
            },
        }
    }
}
