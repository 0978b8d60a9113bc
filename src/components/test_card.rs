//! Self-check test view: heading plus one card per question.

#[cfg(test)]
#[path = "test_card_test.rs"]
mod test_card_test;

use leptos::prelude::*;

use crate::state::quiz::{INVALID_QUESTION_NOTICE, OptionMark, QuestionCard, TEST_HEADING, TestSession};
use crate::state::response::ResponseController;

/// Option text with its answer glyph appended.
pub fn option_label(text: &str, mark: OptionMark) -> String {
    match mark.glyph() {
        Some(glyph) => format!("{text} {glyph}"),
        None => text.to_owned(),
    }
}

/// Rendered test. Re-rendered from the controller snapshot after each answer.
#[component]
pub fn TestView(session: TestSession) -> impl IntoView {
    let cards = session
        .cards()
        .iter()
        .enumerate()
        .map(|(index, card)| {
            let title = session.title(index).unwrap_or_default();
            view! { <QuestionCardView index title card=card.clone()/> }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="test-view">
            <h3 class="test-view__title">"\u{2611} " {TEST_HEADING}</h3>
            {cards}
        </div>
    }
}

/// One question card. Every option is disabled once the card is answered.
#[component]
fn QuestionCardView(index: usize, title: String, card: QuestionCard) -> impl IntoView {
    let controller = expect_context::<RwSignal<ResponseController>>();
    let answered = card.is_answered();

    let warning = (!card.question().has_valid_answer())
        .then(|| view! { <div class="question-warning">{INVALID_QUESTION_NOTICE}</div> });

    let options = card
        .question()
        .options
        .iter()
        .enumerate()
        .map(|(option, text)| {
            let mark = card.option_mark(option);
            let label = option_label(text, mark);
            let on_click = move |_| {
                controller.update(|c| {
                    c.answer(index, option);
                });
            };
            view! {
                <button type="button" class=mark.css_class() disabled=answered on:click=on_click>
                    {label}
                </button>
            }
        })
        .collect::<Vec<_>>();

    let explanation = card.explanation().map(str::to_owned);
    let display = if explanation.is_some() { "block" } else { "none" };

    view! {
        <div class="test-card">
            <div class="question-title">{title}</div>
            {warning}
            <div class="options-wrapper">{options}</div>
            <div class="explanation" style:display=display>
                {explanation.unwrap_or_default()}
            </div>
        </div>
    }
}
