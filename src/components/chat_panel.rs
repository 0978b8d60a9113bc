//! Chat history pane with the message input.

use leptos::prelude::*;

use crate::app::{ChatDraft, SourceText};
use crate::net::chat::submit;
use crate::state::response::ResponseController;

/// Chat panel showing the transcript and an input for new messages.
///
/// Enter or the send button submits the draft together with the current
/// source material.
#[component]
pub fn ChatPanel() -> impl IntoView {
    let controller = expect_context::<RwSignal<ResponseController>>();
    let ChatDraft(input) = expect_context::<ChatDraft>();
    let SourceText(source) = expect_context::<SourceText>();
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move || {
        let _ = controller.with(|c| c.history().len());

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let do_send = move || {
        let text = input.get_untracked();
        let context = source.get_untracked();
        submit(controller, input, &text, &context);
    };

    let on_click = move |_| do_send();

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            do_send();
        }
    };

    let turns = move || controller.with(|c| c.history().turns().to_vec());

    view! {
        <div class="chat-panel">
            <div id="chatHistory" class="chat-panel__messages" node_ref=messages_ref>
                <For
                    each=turns
                    key=|turn| turn.id.clone()
                    children=|turn| {
                        let class = format!("message {}", turn.role.css_class());
                        view! { <div class=class>{turn.text}</div> }
                    }
                />
            </div>

            <div class="chat-panel__input-row">
                <input
                    id="chatInput"
                    class="chat-input"
                    type="text"
                    placeholder="Спросите что-нибудь..."
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=on_keydown
                />
                <button id="chatSend" class="btn-icon" title="Отправить" on:click=on_click>
                    "\u{27A4}"
                </button>
            </div>
        </div>
    }
}
