use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    Document, Element, Event, HtmlElement, KeyboardEvent, ScrollBehavior, ScrollToOptions, Window,
};

use super::{dom, SharedSite};
use crate::chrome::{self, AnchorAction, MenuState};
use crate::config::SiteConfig;

/// Route changes: `hashchange` plus clicks on `data-nav` elements.
pub fn install_router(window: &Window, document: &Document, site: &SharedSite, config: &SiteConfig) -> Result<(), JsValue> {
    let hash_closure = {
        let site = site.clone();
        let window = window.clone();
        Closure::wrap(Box::new(move || {
            let fragment = dom::current_fragment(&window);
            site.borrow_mut().on_fragment_change(&fragment);
        }) as Box<dyn FnMut()>)
    };
    window.add_event_listener_with_callback("hashchange", hash_closure.as_ref().unchecked_ref())?;
    hash_closure.forget();

    let click_closure = {
        let site = site.clone();
        let nav_selector = format!("[{}]", config.nav_attribute);
        let nav_attribute = config.nav_attribute;
        Closure::wrap(Box::new(move |event: Event| {
            let Some(link) = event
                .target()
                .and_then(|t| t.dyn_into::<Element>().ok())
                .and_then(|el| el.closest(&nav_selector).ok().flatten())
            else {
                return;
            };
            let token = link.get_attribute(nav_attribute).unwrap_or_default();
            if site.borrow_mut().on_nav_click(&token) {
                event.prevent_default();
            }
        }) as Box<dyn FnMut(Event)>)
    };
    document.add_event_listener_with_callback("click", click_closure.as_ref().unchecked_ref())?;
    click_closure.forget();
    Ok(())
}

fn apply_menu(state: &MenuState, toggle: &Element, menu: &Element, config: &SiteConfig) {
    dom::warn_on_err(
        "aria-expanded",
        toggle.set_attribute("aria-expanded", state.aria_expanded()),
    );
    let classes = menu.class_list();
    let result = if state.is_expanded() {
        classes.add_1(config.active_class)
    } else {
        classes.remove_1(config.active_class)
    };
    dom::warn_on_err("menu class", result);
    dom::warn_on_err("aria-hidden", menu.set_attribute("aria-hidden", state.aria_hidden()));
}

/// Mobile menu: toggle button, close on link click, close on Escape.
pub fn install_menu(document: &Document, site: &SharedSite, config: &SiteConfig) -> Result<(), JsValue> {
    let (Some(toggle), Some(menu)) = (
        document.query_selector(config.nav_toggle_selector)?,
        document.query_selector(config.mobile_menu_selector)?,
    ) else {
        log::debug!("no mobile menu on page");
        return Ok(());
    };

    let toggle_closure = {
        let (site, toggle_el, menu_el, config) = (site.clone(), toggle.clone(), menu.clone(), config.clone());
        Closure::wrap(Box::new(move || {
            let mut site = site.borrow_mut();
            let state = site.menu_mut();
            state.toggle();
            apply_menu(state, &toggle_el, &menu_el, &config);
        }) as Box<dyn FnMut()>)
    };
    toggle.add_event_listener_with_callback("click", toggle_closure.as_ref().unchecked_ref())?;
    toggle_closure.forget();

    for link in dom::query_all(document, &format!("{} a", config.mobile_menu_selector)) {
        let close_closure = {
            let (site, toggle_el, menu_el, config) = (site.clone(), toggle.clone(), menu.clone(), config.clone());
            Closure::wrap(Box::new(move || {
                let mut site = site.borrow_mut();
                let state = site.menu_mut();
                state.close();
                apply_menu(state, &toggle_el, &menu_el, &config);
            }) as Box<dyn FnMut()>)
        };
        link.add_event_listener_with_callback("click", close_closure.as_ref().unchecked_ref())?;
        close_closure.forget();
    }

    let key_closure = {
        let (site, toggle_el, menu_el, config) = (site.clone(), toggle.clone(), menu.clone(), config.clone());
        Closure::wrap(Box::new(move |event: KeyboardEvent| {
            if event.key() != "Escape" {
                return;
            }
            let mut site = site.borrow_mut();
            let state = site.menu_mut();
            if state.on_escape() {
                apply_menu(state, &toggle_el, &menu_el, &config);
                if let Some(button) = toggle_el.dyn_ref::<HtmlElement>() {
                    dom::warn_on_err("focus toggle", button.focus());
                }
            }
        }) as Box<dyn FnMut(KeyboardEvent)>)
    };
    document.add_event_listener_with_callback("keydown", key_closure.as_ref().unchecked_ref())?;
    key_closure.forget();
    Ok(())
}

/// Smooth scrolling for in-page anchors the router does not own.
pub fn install_anchors(window: &Window, document: &Document, config: &SiteConfig) -> Result<(), JsValue> {
    for anchor in dom::query_all(document, "a[href^=\"#\"]") {
        let closure = {
            let (window, document, link) = (window.clone(), document.clone(), anchor.clone());
            let nav_attribute = config.nav_attribute;
            let header_height = config.header_height;
            Closure::wrap(Box::new(move |event: Event| {
                let href = link.get_attribute("href").unwrap_or_default();
                let AnchorAction::SmoothScroll(id) =
                    chrome::classify_anchor(&href, link.has_attribute(nav_attribute))
                else {
                    return;
                };
                event.prevent_default();
                let Some(target) = document.get_element_by_id(&id) else {
                    return;
                };
                let top = chrome::anchor_scroll_target(
                    target.get_bounding_client_rect().top(),
                    window.scroll_y().unwrap_or(0.0),
                    header_height,
                );
                let options = ScrollToOptions::new();
                options.set_top(top);
                options.set_behavior(ScrollBehavior::Smooth);
                window.scroll_to_with_scroll_to_options(&options);
            }) as Box<dyn FnMut(Event)>)
        };
        anchor.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    Ok(())
}

/// FAQ accordion: one answer open at a time.
pub fn install_faq(document: &Document, site: &SharedSite, config: &SiteConfig) -> Result<(), JsValue> {
    let items = dom::query_all(document, config.faq_item_selector);
    for (index, item) in items.iter().enumerate() {
        let Some(question) = item.query_selector(config.faq_question_selector)? else {
            continue;
        };
        let closure = {
            let (site, items, config) = (site.clone(), items.clone(), config.clone());
            Closure::wrap(Box::new(move || {
                let mut site = site.borrow_mut();
                let faq = site.faq_mut();
                faq.activate(index);
                for (i, item) in items.iter().enumerate() {
                    apply_faq_item(item, faq.is_open(i), &config);
                }
            }) as Box<dyn FnMut()>)
        };
        question.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    Ok(())
}

fn apply_faq_item(item: &Element, open: bool, config: &SiteConfig) {
    let classes = item.class_list();
    let result = if open {
        classes.add_1(config.active_class)
    } else {
        classes.remove_1(config.active_class)
    };
    dom::warn_on_err("faq class", result);

    if let Ok(Some(question)) = item.query_selector(config.faq_question_selector) {
        let expanded = if open { "true" } else { "false" };
        dom::warn_on_err("faq aria-expanded", question.set_attribute("aria-expanded", expanded));
    }
    if let Ok(Some(answer)) = item.query_selector(config.faq_answer_selector) {
        let result = if open {
            answer.remove_attribute("hidden")
        } else {
            answer.set_attribute("hidden", "")
        };
        dom::warn_on_err("faq hidden", result);
    }
}

/// Repeat the slider's slides so the marquee loops without a gap.
pub fn duplicate_slider(document: &Document, config: &SiteConfig) -> Result<(), JsValue> {
    if let Some(slider) = document.query_selector(config.slider_selector)? {
        slider.set_inner_html(&chrome::duplicate_slides(&slider.inner_html()));
    }
    Ok(())
}
