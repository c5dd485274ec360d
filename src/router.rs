//! Hash-fragment router.
//!
//! The router is the only owner of the current view. Everything it touches in
//! the page goes through [`PageHost`], which the browser glue implements over
//! the DOM and the tests implement over plain vectors.

use crate::view::ViewName;

/// Token that scrolls within the home view rather than naming a view.
pub const HOME_ANCHOR: &str = "features";

/// Page-side effects the router needs.
pub trait PageHost {
    /// Show or hide the container for `view`.
    fn set_container_visible(&mut self, view: ViewName, visible: bool);

    /// `data-nav` token of every navigation marker, in document order.
    fn nav_marker_tokens(&self) -> Vec<String>;

    /// Add or remove the "current" indicator on the marker at `index`.
    fn set_nav_marker_current(&mut self, index: usize, current: bool);

    /// Jump the viewport to the origin without animation.
    fn scroll_to_top(&mut self);

    fn set_title(&mut self, title: &str);

    /// Write the location fragment (without the leading `#`).
    fn set_fragment(&mut self, fragment: &str);
}

/// Map a fragment (text after `#`) to a view. Total: unknown input is home.
pub fn resolve_view(fragment: &str) -> ViewName {
    if fragment.is_empty() || fragment == HOME_ANCHOR {
        return ViewName::Home;
    }
    ViewName::from_token(fragment).unwrap_or(ViewName::Home)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Router {
    current: ViewName,
}

impl Router {
    /// Resolve the initial fragment and paint it once, without a scroll jump.
    pub fn start<H: PageHost + ?Sized>(host: &mut H, initial_fragment: &str) -> Self {
        let mut router = Router {
            current: ViewName::Home,
        };
        let view = resolve_view(initial_fragment);
        log::info!("router start fragment={initial_fragment:?} view={}", view.token());
        router.navigate(host, view, false);
        router
    }

    pub fn current(&self) -> ViewName {
        self.current
    }

    pub fn navigate<H: PageHost + ?Sized>(
        &mut self,
        host: &mut H,
        view: ViewName,
        scroll_to_top: bool,
    ) {
        log::debug!("navigate view={} scroll={scroll_to_top}", view.token());
        self.current = view;

        for candidate in ViewName::ALL {
            host.set_container_visible(candidate, candidate == view);
        }

        let tokens = host.nav_marker_tokens();
        for (index, token) in tokens.iter().enumerate() {
            host.set_nav_marker_current(index, token == view.token());
        }

        if scroll_to_top && view != ViewName::Home {
            host.scroll_to_top();
        }

        host.set_title(view.title());
    }

    /// `hashchange`, whether from history navigation or a programmatic write.
    pub fn on_fragment_change<H: PageHost + ?Sized>(&mut self, host: &mut H, fragment: &str) {
        self.navigate(host, resolve_view(fragment), true);
    }

    /// Click on a `data-nav` element. Returns `true` when the click was
    /// handled and the browser's default navigation must be prevented.
    pub fn on_nav_click<H: PageHost + ?Sized>(&mut self, host: &mut H, token: &str) -> bool {
        let Some(view) = ViewName::from_token(token) else {
            return false;
        };
        host.set_fragment(view.fragment());
        self.navigate(host, view, true);
        true
    }
}
