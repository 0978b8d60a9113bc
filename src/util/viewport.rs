//! Viewport and element measurements used by the resizer.
//!
//! Both return `0.0` outside the browser, which the resizer treats as
//! "not resizable" / "no movement".

/// Current `window.innerWidth` in CSS pixels.
pub fn viewport_width() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.inner_width().ok())
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

/// Rendered width of a layout container.
#[cfg(feature = "hydrate")]
pub fn element_width(el: &web_sys::Element) -> f64 {
    el.get_bounding_client_rect().width()
}
