//! Self-check test model and per-card answer evaluation.
//!
//! DESIGN
//! ======
//! Each rendered question owns an explicit `AnswerState`. The transition is
//! one-way (`Unanswered -> Answered`), so every visual mark is derived from
//! the card record instead of being stored on the buttons themselves.

#[cfg(test)]
#[path = "quiz_test.rs"]
mod quiz_test;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Heading rendered above the question cards.
pub const TEST_HEADING: &str = "Проверь себя";

/// Shown on a card whose declared correct index matches no option.
pub const INVALID_QUESTION_NOTICE: &str = "Правильный ответ для этого вопроса не указан.";

/// Explanation shown when the backend supplied none.
pub const NO_EXPLANATION: &str = "Без объяснения.";

/// One multiple-choice question as sent by the backend.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TestQuestion {
    #[serde(rename = "q", alias = "prompt", default)]
    pub prompt: String,
    #[serde(deserialize_with = "lenient_options")]
    pub options: Vec<String>,
    #[serde(
        rename = "correct",
        alias = "correct_index",
        alias = "correctIndex",
        default,
        deserialize_with = "lenient_index"
    )]
    pub correct_index: Option<i64>,
    #[serde(rename = "why", alias = "explanation", default)]
    pub explanation: Option<String>,
}

impl TestQuestion {
    /// The correct option position, if the declared index points at an option.
    pub fn correct_option(&self) -> Option<usize> {
        self.correct_index
            .and_then(|i| usize::try_from(i).ok())
            .filter(|&i| i < self.options.len())
    }

    pub fn has_valid_answer(&self) -> bool {
        self.correct_option().is_some()
    }
}

fn lenient_options<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Vec::<Value>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .map(|v| match v {
            Value::String(s) => s,
            Value::Null => String::new(),
            other => other.to_string(),
        })
        .collect())
}

fn lenient_index<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw.as_ref().and_then(index_from_value))
}

#[allow(clippy::cast_possible_truncation)]
fn index_from_value(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Evaluation state of one question card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AnswerState {
    #[default]
    Unanswered,
    Answered(usize),
}

/// Visual mark of a single option button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionMark {
    Neutral,
    Correct,
    Wrong,
    /// Chosen on a question whose correct index is out of range.
    Unverified,
}

impl OptionMark {
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Neutral => "option-btn",
            Self::Correct => "option-btn correct",
            Self::Wrong => "option-btn wrong",
            Self::Unverified => "option-btn unverified",
        }
    }

    /// Glyph appended after the option text.
    pub fn glyph(self) -> Option<&'static str> {
        match self {
            Self::Correct => Some("\u{2713}"),
            Self::Wrong => Some("\u{2717}"),
            Self::Neutral | Self::Unverified => None,
        }
    }
}

/// A rendered question together with its answer state.
#[derive(Clone, Debug, PartialEq)]
pub struct QuestionCard {
    question: TestQuestion,
    state: AnswerState,
}

impl QuestionCard {
    pub fn new(question: TestQuestion) -> Self {
        Self {
            question,
            state: AnswerState::Unanswered,
        }
    }

    pub fn question(&self) -> &TestQuestion {
        &self.question
    }

    pub fn state(&self) -> AnswerState {
        self.state
    }

    pub fn is_answered(&self) -> bool {
        matches!(self.state, AnswerState::Answered(_))
    }

    /// Record the first answer. Returns `false` when the card was already
    /// answered or `option` does not exist.
    pub fn answer(&mut self, option: usize) -> bool {
        if self.is_answered() || option >= self.question.options.len() {
            return false;
        }
        self.state = AnswerState::Answered(option);
        true
    }

    pub fn option_mark(&self, option: usize) -> OptionMark {
        let AnswerState::Answered(chosen) = self.state else {
            return OptionMark::Neutral;
        };
        match self.question.correct_option() {
            Some(correct) if option == correct => OptionMark::Correct,
            Some(_) if option == chosen => OptionMark::Wrong,
            None if option == chosen => OptionMark::Unverified,
            _ => OptionMark::Neutral,
        }
    }

    /// Explanation text, revealed only once the card is answered.
    pub fn explanation(&self) -> Option<&str> {
        if !self.is_answered() {
            return None;
        }
        Some(
            self.question
                .explanation
                .as_deref()
                .filter(|e| !e.is_empty())
                .unwrap_or(NO_EXPLANATION),
        )
    }
}

/// All cards of one rendered test. Dropped when the result pane changes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TestSession {
    cards: Vec<QuestionCard>,
}

impl TestSession {
    pub fn new(questions: Vec<TestQuestion>) -> Self {
        let cards = questions
            .into_iter()
            .enumerate()
            .map(|(index, q)| {
                if !q.has_valid_answer() {
                    leptos::logging::warn!(
                        "question {} has correct index {:?} outside {} options",
                        index + 1,
                        q.correct_index,
                        q.options.len()
                    );
                }
                QuestionCard::new(q)
            })
            .collect();
        Self { cards }
    }

    pub fn cards(&self) -> &[QuestionCard] {
        &self.cards
    }

    pub fn card(&self, index: usize) -> Option<&QuestionCard> {
        self.cards.get(index)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Answer card `card` with option `option`; no-op for unknown cards.
    pub fn answer(&mut self, card: usize, option: usize) -> bool {
        self.cards.get_mut(card).is_some_and(|c| c.answer(option))
    }

    /// Card heading with its 1-based ordinal, e.g. `"1. 2+2?"`.
    pub fn title(&self, index: usize) -> Option<String> {
        self.cards
            .get(index)
            .map(|c| format!("{}. {}", index + 1, c.question.prompt))
    }
}
