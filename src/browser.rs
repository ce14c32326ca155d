use crate::shortcuts::KeyPress;
use crate::storage::{KeyValueStore, StorageError};
use crate::theme::Theme;
use js_sys::{Array, Function, Reflect};
use std::time::Duration;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    window, Document, Element, Event, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, KeyboardEvent, ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions, Storage,
};

fn document() -> Option<Document> {
    window()?.document()
}

/// Reads a `data-*` setting from `<html>`.
pub fn root_attribute(name: &str) -> Option<String> {
    document()?.document_element()?.get_attribute(name)
}

pub fn query_all(selector: &str) -> Vec<Element> {
    let Some(list) = document().and_then(|d| d.query_selector_all(selector).ok()) else {
        return Vec::new();
    };

    (0..list.length())
        .filter_map(|index| list.get(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn query_one(selector: &str) -> Option<Element> {
    document()?.query_selector(selector).ok().flatten()
}

/// Local or session storage. Private browsing and disabled storage both end
/// up as a store that reads nothing and refuses writes.
pub struct BrowserStore {
    storage: Option<Storage>,
    scope: &'static str,
}

impl BrowserStore {
    pub fn local() -> Self {
        Self {
            storage: window().and_then(|w| w.local_storage().ok().flatten()),
            scope: "local",
        }
    }

    pub fn session() -> Self {
        Self {
            storage: window().and_then(|w| w.session_storage().ok().flatten()),
            scope: "session",
        }
    }
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let error = || StorageError {
            key: key.to_string(),
            scope: self.scope,
        };

        match self.storage.as_ref() {
            Some(storage) => storage.set_item(key, value).map_err(|_| error()),
            None => Err(error()),
        }
    }

    fn remove(&mut self, key: &str) {
        if let Some(storage) = self.storage.as_ref() {
            let _ = storage.remove_item(key);
        }
    }
}

fn media_matches(query: &str) -> bool {
    window()
        .and_then(|w| w.match_media(query).ok().flatten())
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

pub fn system_prefers_dark() -> bool {
    media_matches("(prefers-color-scheme: dark)")
}

fn prefers_reduced_motion() -> bool {
    media_matches("(prefers-reduced-motion: reduce)")
}

pub fn apply_theme(theme: Theme) {
    if let Some(root) = document().and_then(|d| d.document_element()) {
        let _ = root.set_attribute("data-theme", theme.as_str());
    }
}

pub fn apply_theme_with_transition(theme: Theme) {
    if prefers_reduced_motion() {
        apply_theme(theme);
        return;
    }

    let Some(document) = document() else {
        apply_theme(theme);
        return;
    };

    let document_js: JsValue = document.into();
    let Ok(start_view_transition) =
        Reflect::get(&document_js, &JsValue::from_str("startViewTransition"))
    else {
        apply_theme(theme);
        return;
    };

    let Some(start_view_transition) = start_view_transition.dyn_ref::<Function>() else {
        apply_theme(theme);
        return;
    };

    let callback = Closure::once_into_js(move || apply_theme(theme));

    if start_view_transition
        .call1(&document_js, callback.unchecked_ref())
        .is_err()
    {
        apply_theme(theme);
    }
}

pub fn set_scroll_locked(locked: bool) {
    if let Some(body) = document().and_then(|d| d.body()) {
        let _ = body
            .style()
            .set_property("overflow", if locked { "hidden" } else { "auto" });
    }
}

pub fn set_timeout<F>(delay: Duration, callback: F)
where
    F: FnOnce() + 'static,
{
    let Some(win) = window() else {
        return;
    };

    let callback = Closure::once_into_js(callback);
    let delay_ms = i32::try_from(delay.as_millis()).unwrap_or(i32::MAX);
    let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), delay_ms);
}

/// Watches `targets` at `threshold` for the rest of the page's life. With
/// `once`, an element stops being watched after its first visible report.
pub fn observe_visibility<F>(targets: &[Element], threshold: f64, once: bool, mut on_change: F)
where
    F: FnMut(&Element, bool) + 'static,
{
    if targets.is_empty() {
        return;
    }

    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let visible = entry.is_intersecting();

                on_change(&target, visible);

                if visible && once {
                    observer.unobserve(&target);
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));

    let Ok(observer) = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) else {
        return;
    };
    callback.forget();

    for target in targets {
        observer.observe(target);
    }
}

/// Listens for a window event such as `scroll` or `beforeunload`.
pub fn on_window_event<F>(event_name: &str, mut on_event: F)
where
    F: FnMut() + 'static,
{
    let Some(win) = window() else {
        return;
    };

    let callback = Closure::<dyn FnMut(Event)>::new(move |_event: Event| on_event());
    if win
        .add_event_listener_with_callback(event_name, callback.as_ref().unchecked_ref())
        .is_ok()
    {
        callback.forget();
    }
}

/// `on_key` returns true when it handled the key and the browser default
/// should be suppressed.
pub fn on_document_keydown<F>(mut on_key: F)
where
    F: FnMut(&KeyPress) -> bool + 'static,
{
    let Some(document) = document() else {
        return;
    };

    let callback = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
        let press = KeyPress::new(event.key(), event.ctrl_key(), event.meta_key());
        if on_key(&press) {
            event.prevent_default();
        }
    });
    if document
        .add_event_listener_with_callback("keydown", callback.as_ref().unchecked_ref())
        .is_ok()
    {
        callback.forget();
    }
}

/// `(scrollY, document height, viewport height)`.
pub fn scroll_metrics() -> (f64, f64, f64) {
    let Some(win) = window() else {
        return (0.0, 0.0, 0.0);
    };

    let scroll_y = win.scroll_y().unwrap_or(0.0);
    let viewport_height = win
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0);
    let scroll_height = win
        .document()
        .and_then(|d| d.document_element())
        .map(|root| f64::from(root.scroll_height()))
        .unwrap_or(viewport_height);

    (scroll_y, scroll_height, viewport_height)
}

pub fn scroll_to_top() {
    let Some(win) = window() else {
        return;
    };

    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(ScrollBehavior::Smooth);
    win.scroll_to_with_scroll_to_options(&options);
}

pub fn scroll_to_section(section_id: &str) {
    let Some(section) = document().and_then(|d| d.get_element_by_id(section_id)) else {
        return;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    section.scroll_into_view_with_scroll_into_view_options(&options);
}

pub fn element_key(element: &Element) -> String {
    element
        .get_attribute("data-key")
        .unwrap_or_else(|| element.id())
}

pub fn mount_point() -> Option<Element> {
    document()?.get_element_by_id("app")
}
