//! Page-lifetime context: the router, the optional background and the chrome
//! state, constructed once at startup and handed every event.

use crate::background::{BackgroundRenderer, Surface};
use crate::chrome::{FaqAccordion, MenuState};
use crate::error::SiteError;
use crate::render_state::Viewport;
use crate::router::{PageHost, Router};

pub struct Site<H: PageHost, S: Surface> {
    host: H,
    router: Router,
    background: Option<BackgroundRenderer<S>>,
    menu: MenuState,
    faq: FaqAccordion,
}

impl<H: PageHost, S: Surface> Site<H, S> {
    /// Paint the initial view, then bring up the background if its surface
    /// could be created. A failed surface leaves the page fully usable.
    pub fn start(
        mut host: H,
        initial_fragment: &str,
        surface: Result<S, SiteError>,
        viewport: Viewport,
    ) -> Self {
        let router = Router::start(&mut host, initial_fragment);
        let background = match surface {
            Ok(surface) => Some(BackgroundRenderer::new(surface, viewport)),
            Err(err) => {
                log::warn!("background disabled: {err}");
                None
            }
        };
        Self {
            host,
            router,
            background,
            menu: MenuState::default(),
            faq: FaqAccordion::default(),
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn background(&self) -> Option<&BackgroundRenderer<S>> {
        self.background.as_ref()
    }

    pub fn menu_mut(&mut self) -> &mut MenuState {
        &mut self.menu
    }

    pub fn faq_mut(&mut self) -> &mut FaqAccordion {
        &mut self.faq
    }

    pub fn on_fragment_change(&mut self, fragment: &str) {
        self.router.on_fragment_change(&mut self.host, fragment);
    }

    /// Returns `true` when the click was consumed by the router.
    pub fn on_nav_click(&mut self, token: &str) -> bool {
        self.router.on_nav_click(&mut self.host, token)
    }

    /// Returns whether another frame should be requested.
    pub fn frame(&mut self, clock_seconds: f64) -> bool {
        match self.background.as_mut() {
            Some(background) => background.frame(clock_seconds),
            None => false,
        }
    }

    pub fn on_pointer_move(&mut self, client_x: f64, client_y: f64, viewport: &Viewport) {
        if let Some(background) = self.background.as_mut() {
            background.on_pointer_move(client_x, client_y, viewport);
        }
    }

    pub fn on_resize(&mut self, viewport: &Viewport) {
        if let Some(background) = self.background.as_mut() {
            background.on_resize(viewport);
        }
    }
}
