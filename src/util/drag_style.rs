//! Body-wide cursor and text-selection suppression during a divider drag.
//!
//! The style is held by a guard: creating it applies `cursor: col-resize` and
//! `user-select: none` to `<body>`, dropping it clears both. Whoever owns the
//! drag session owns the guard, so no exit path can leave the page stuck in
//! resize mode.

#[cfg(test)]
#[path = "drag_style_test.rs"]
mod drag_style_test;

#[cfg(test)]
thread_local! {
    static ACTIVE: std::cell::Cell<usize> = const { std::cell::Cell::new(0) };
}

/// Scoped body style override. Released on drop.
#[derive(Debug)]
pub struct DragStyleGuard {
    _private: (),
}

impl DragStyleGuard {
    pub fn acquire() -> Self {
        apply_body_style("col-resize", "none");
        #[cfg(test)]
        ACTIVE.with(|a| a.set(a.get() + 1));
        Self { _private: () }
    }
}

impl Drop for DragStyleGuard {
    fn drop(&mut self) {
        apply_body_style("", "");
        #[cfg(test)]
        ACTIVE.with(|a| a.set(a.get().saturating_sub(1)));
    }
}

/// Number of live guards on this thread.
#[cfg(test)]
pub fn active_guards() -> usize {
    ACTIVE.with(std::cell::Cell::get)
}

fn apply_body_style(cursor: &str, user_select: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) else {
            return;
        };
        let style = body.style();
        let _ = style.set_property("cursor", cursor);
        let _ = style.set_property("user-select", user_select);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (cursor, user_select);
    }
}
