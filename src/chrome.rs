//! Navigation chrome around the router: mobile menu, FAQ accordion, in-page
//! anchors and the screenshot slider.

use crate::view::ViewName;

/// Mobile menu open/closed state and the ARIA strings that mirror it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuState {
    expanded: bool,
}

impl MenuState {
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }

    pub fn close(&mut self) {
        self.expanded = false;
    }

    /// Escape closes an open menu. Returns `true` if it was open, in which
    /// case focus goes back to the toggle button.
    pub fn on_escape(&mut self) -> bool {
        let was_open = self.expanded;
        self.close();
        was_open
    }

    /// Value for the toggle's `aria-expanded`.
    pub fn aria_expanded(&self) -> &'static str {
        if self.expanded {
            "true"
        } else {
            "false"
        }
    }

    /// Value for the menu's `aria-hidden`.
    pub fn aria_hidden(&self) -> &'static str {
        if self.expanded {
            "false"
        } else {
            "true"
        }
    }
}

/// Single-open FAQ list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FaqAccordion {
    open: Option<usize>,
}

impl FaqAccordion {
    pub fn open_item(&self) -> Option<usize> {
        self.open
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    /// Question `index` was clicked: close everything, then open it unless it
    /// was the one already open.
    pub fn activate(&mut self, index: usize) {
        self.open = match self.open {
            Some(current) if current == index => None,
            _ => Some(index),
        };
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnchorAction {
    /// Leave the click alone; either it goes nowhere or the router owns it.
    Ignore,
    /// Prevent default and smooth-scroll to the element with this id.
    SmoothScroll(String),
}

/// Decide what a click on `<a href="#...">` should do.
pub fn classify_anchor(href: &str, has_nav_attr: bool) -> AnchorAction {
    let Some(target) = href.strip_prefix('#') else {
        return AnchorAction::Ignore;
    };
    if target.is_empty() || has_nav_attr || ViewName::from_token(target).is_some() {
        return AnchorAction::Ignore;
    }
    AnchorAction::SmoothScroll(target.to_string())
}

/// Document offset to scroll to so the target sits just below the header.
pub fn anchor_scroll_target(element_top: f64, scroll_y: f64, header_height: f64) -> f64 {
    element_top + scroll_y - header_height
}

/// Slider markup repeated back to back so the CSS marquee can loop seamlessly.
pub fn duplicate_slides(inner_html: &str) -> String {
    inner_html.repeat(2)
}
