//! Submission pipeline shared by the chat input and the create-test button.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use leptos::prelude::*;

use crate::state::response::{PendingRequest, ResponseController};

/// Run one submission: optimistic updates, clear the draft, send.
///
/// Returns `false` for blank input, in which case nothing changes.
pub fn submit(
    controller: RwSignal<ResponseController>,
    draft: RwSignal<String>,
    text: &str,
    context: &str,
) -> bool {
    let Some(pending) = controller.try_update(|c| c.begin_submit(text, context)).flatten() else {
        return false;
    };
    draft.set(String::new());
    send(controller, pending);
    true
}

/// Issue the request and apply its response once it resolves.
fn send(controller: RwSignal<ResponseController>, pending: PendingRequest) {
    leptos::logging::log!("chat request {} issued", pending.seq);

    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let outcome = crate::net::api::post_chat(&pending.request).await;
            controller.update(|c| {
                c.complete(pending.seq, outcome);
            });
        });
    }

    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (controller, pending);
    }
}
