//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::workspace::WorkspacePage;
use crate::state::layout::ResizeConfig;
use crate::state::response::ResponseController;

/// Text of the chat input, shared so any submission path can clear it.
#[derive(Clone, Copy)]
pub struct ChatDraft(pub RwSignal<String>);

/// Study material pasted into the source pane; sent as request context.
#[derive(Clone, Copy)]
pub struct SourceText(pub RwSignal<String>);

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="ru">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the response controller, the draft/source text signals and the
/// resizer configuration, then routes to the workspace.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let controller = RwSignal::new(ResponseController::default());
    provide_context(controller);
    provide_context(ChatDraft(RwSignal::new(String::new())));
    provide_context(SourceText(RwSignal::new(String::new())));
    provide_context(ResizeConfig::default());

    view! {
        <Stylesheet id="leptos" href="/pkg/study-desk.css"/>
        <Title text="DastanTeams LLM"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=WorkspacePage/>
            </Routes>
        </Router>
    }
}
