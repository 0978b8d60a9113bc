//! Result pane: placeholder, status line, test or document.
//!
//! TRUST BOUNDARY
//! ==============
//! Documents are inserted with `inner_html` as received. Only
//! [`TrustedHtml`](crate::net::types::TrustedHtml) reaches this path, and it
//! is produced solely from a backend `document` response; sanitizing it is the
//! backend's job.

use leptos::prelude::*;

use crate::components::test_card::TestView;
use crate::state::response::{PLACEHOLDER, ResponseController, ResultView};

/// Result pane bound to the controller's current view.
#[component]
pub fn ResultPanel() -> impl IntoView {
    let controller = expect_context::<RwSignal<ResponseController>>();
    let current = Memo::new(move |_| controller.with(|c| c.view().clone()));

    view! {
        <div id="resultContainer" class="result-panel">
            {move || match current.get() {
                ResultView::Placeholder => {
                    view! { <p class="result-panel__placeholder">{PLACEHOLDER}</p> }.into_any()
                }
                ResultView::Info(text) => view! { <p class="result-panel__info">{text}</p> }.into_any(),
                ResultView::Error(text) => view! { <p class="result-panel__error">{text}</p> }.into_any(),
                ResultView::Test(session) => view! { <TestView session/> }.into_any(),
                ResultView::Document(html) => {
                    let markup = html.as_str().to_owned();
                    view! { <div class="result-panel__document" inner_html=markup></div> }.into_any()
                }
            }}
        </div>
    }
}
