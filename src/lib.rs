//! DIRTTIME landing page: hash router, navigation chrome and the animated
//! background. Everything outside `wasm` is plain Rust and runs on the host,
//! so the page logic can be tested without a browser.

pub mod background;
pub mod chrome;
pub mod config;
pub mod error;
pub mod frame_loop;
pub mod pattern;
pub mod render_state;
pub mod router;
pub mod shader;
pub mod site;
pub mod view;

pub use background::{BackgroundRenderer, FrameUniforms, PixelSurface, Surface};
pub use error::SiteError;
pub use router::{resolve_view, PageHost, Router};
pub use site::Site;
pub use view::ViewName;

// Only compile wasm-specific code when targeting wasm32.

#[cfg(target_arch = "wasm32")]
pub mod wasm {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::prelude::*;

    use crate::config::SiteConfig;
    use crate::site::Site;

    mod chrome;
    pub mod dom;
    mod render;

    pub(crate) type SharedSite = Rc<RefCell<Site<dom::DomHost, render::GlSurface>>>;

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        let config = SiteConfig::default();
        console_log::init_with_level(config.log_level).ok();

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let host = dom::DomHost::new(window.clone(), document.clone(), config.clone());
        let fragment = dom::current_fragment(&window);
        let surface = render::GlSurface::from_document(&document, config.canvas_id);
        let site: SharedSite = Rc::new(RefCell::new(Site::start(
            host,
            &fragment,
            surface,
            dom::viewport(&window),
        )));

        chrome::install_router(&window, &document, &site, &config)?;
        chrome::install_menu(&document, &site, &config)?;
        chrome::install_anchors(&window, &document, &config)?;
        chrome::install_faq(&document, &site, &config)?;
        chrome::duplicate_slider(&document, &config)?;

        if site.borrow().background().is_some() {
            render::start(&window, &site)?;
        }
        log::info!("site ready");
        Ok(())
    }
}
