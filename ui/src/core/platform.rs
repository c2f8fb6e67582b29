//! Thin DOM helpers. Every function is a no-op (or returns a neutral value)
//! off the web target so views stay renderable in native builds and tests.

#[cfg(target_arch = "wasm32")]
fn document() -> Option<web_sys::Document> {
    web_sys::window()?.document()
}

/// Mirror the active language in `<html lang>`.
pub fn set_document_lang(code: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(root) = document().and_then(|doc| doc.document_element()) {
            let _ = root.set_attribute("lang", code);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = code;
}

/// Lock or release page scrolling (used while the navigation drawer is open).
pub fn lock_body_scroll(locked: bool) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(body) = document().and_then(|doc| doc.body()) {
            let style = body.style();
            let _ = if locked {
                style.set_property("overflow", "hidden")
            } else {
                style.remove_property("overflow").map(|_| ())
            };
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = locked;
}

/// Current `location.hash`, including the leading `#` (empty when unset).
pub fn current_hash() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|window| window.location().hash().ok())
            .unwrap_or_default()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        String::new()
    }
}

pub fn scroll_window_to_top() {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    }
}

/// Vertical page scroll in CSS pixels.
pub fn window_scroll_y() -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|window| window.scroll_y().ok())
            .unwrap_or(0.0)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        0.0
    }
}

/// Move keyboard focus to the element with `id`.
pub fn focus_element(id: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;

        if let Some(element) = document()
            .and_then(|doc| doc.get_element_by_id(id))
            .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
        {
            let _ = element.focus();
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = id;
}

/// Bring the element with `id` into view (in-page anchors after a page switch).
pub fn scroll_into_view(id: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(element) = document().and_then(|doc| doc.get_element_by_id(id)) {
            element.scroll_into_view();
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = id;
}
