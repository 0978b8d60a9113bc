//! Source material pane with the create-test shortcut.

use leptos::prelude::*;

use crate::app::{ChatDraft, SourceText};
use crate::net::chat::submit;
use crate::state::response::{CREATE_TEST_PROMPT, ResponseController};

/// Text area for study material plus a button that asks for a test on it.
#[component]
pub fn SourcePanel() -> impl IntoView {
    let controller = expect_context::<RwSignal<ResponseController>>();
    let ChatDraft(draft) = expect_context::<ChatDraft>();
    let SourceText(source) = expect_context::<SourceText>();

    let on_create_test = move |_| {
        let context = source.get_untracked();
        submit(controller, draft, CREATE_TEST_PROMPT, &context);
    };

    view! {
        <div class="source-panel">
            <h3 class="source-panel__title">"Материал"</h3>
            <textarea
                id="sourceText"
                class="source-panel__text"
                placeholder="Вставьте конспект, статью или главу учебника..."
                prop:value=move || source.get()
                on:input=move |ev| source.set(event_target_value(&ev))
            ></textarea>
            <button class="btn-primary" on:click=on_create_test>
                "Создать тест"
            </button>
        </div>
    }
}
