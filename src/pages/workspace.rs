//! Workspace page: three panes separated by two draggable dividers.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast;

use crate::components::chat_panel::ChatPanel;
use crate::components::result_panel::ResultPanel;
use crate::components::source_panel::SourcePanel;
use crate::state::layout::{Divider, LayoutResizer, ResizeConfig};
use crate::util::viewport::viewport_width;

/// Workspace page. Owns the `LayoutResizer` for its lifetime and feeds it
/// pointer events; the resulting ratios drive `grid-template-columns`.
#[component]
pub fn WorkspacePage() -> impl IntoView {
    let config = use_context::<ResizeConfig>().unwrap_or_default();
    let resizer = RwSignal::new(LayoutResizer::new(config));
    let layout_ref = NodeRef::<leptos::html::Div>::new();

    let grid_style = move || resizer.with(|r| format!("grid-template-columns: {};", r.grid_template_columns()));

    let on_divider_pointer_down = move |divider: Divider, ev: leptos::ev::PointerEvent| {
        let started = resizer
            .try_update(|r| r.pointer_down(divider, f64::from(ev.client_x()), viewport_width()))
            .unwrap_or(false);
        if !started {
            return;
        }
        ev.prevent_default();
        #[cfg(feature = "hydrate")]
        {
            if let Some(target) = ev
                .target()
                .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
            {
                let _ = target.set_pointer_capture(ev.pointer_id());
            }
        }
    };

    let on_pointer_move = move |ev: leptos::ev::PointerEvent| {
        if !resizer.with_untracked(LayoutResizer::is_dragging) {
            return;
        }
        #[cfg(feature = "hydrate")]
        let container_width = layout_ref
            .get_untracked()
            .map_or(0.0, |el| crate::util::viewport::element_width(&el));
        #[cfg(not(feature = "hydrate"))]
        let container_width = 0.0;

        resizer.update(|r| {
            r.pointer_move(f64::from(ev.client_x()), container_width);
        });
    };

    // Release, cancel and lost capture all end the gesture.
    let on_pointer_end = move |_ev: leptos::ev::PointerEvent| {
        if resizer.with_untracked(LayoutResizer::is_dragging) {
            resizer.update(|r| {
                r.cancel();
            });
        }
    };

    view! {
        <div
            id="layout"
            class="layout"
            node_ref=layout_ref
            style=grid_style
            on:pointermove=on_pointer_move
            on:pointerup=on_pointer_end
            on:pointercancel=on_pointer_end
            on:lostpointercapture=on_pointer_end
        >
            <section class="pane pane--source">
                <SourcePanel/>
            </section>
            <div
                class="resizer"
                class:resizer--active=move || resizer.with(|r| r.active_divider() == Some(Divider::First))
                on:pointerdown=move |ev| on_divider_pointer_down(Divider::First, ev)
            ></div>
            <section class="pane pane--result">
                <ResultPanel/>
            </section>
            <div
                class="resizer"
                class:resizer--active=move || resizer.with(|r| r.active_divider() == Some(Divider::Second))
                on:pointerdown=move |ev| on_divider_pointer_down(Divider::Second, ev)
            ></div>
            <section class="pane pane--chat">
                <ChatPanel/>
            </section>
        </div>
    }
}
