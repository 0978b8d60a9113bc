#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

/// Greeting shown before the first submission.
pub const INTRO_GREETING: &str =
    "Привет! Вставьте учебный материал слева и попросите меня сделать тест или написать конспект.";

/// Notice appended to history when a submission fails.
pub const ERROR_NOTICE: &str = "Ошибка соединения или сервера :(";

/// Who authored a chat turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Assistant,
}

impl ChatRole {
    /// CSS modifier used by the history pane.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::User => "msg-user",
            Self::Assistant => "msg-ai",
        }
    }
}

/// A single transcript entry. Never mutated after it is appended.
#[derive(Clone, Debug)]
pub struct ChatTurn {
    pub id: String,
    pub role: ChatRole,
    pub text: String,
    pub intro: bool,
}

impl ChatTurn {
    fn new(role: ChatRole, text: impl Into<String>, intro: bool) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            role,
            text: text.into(),
            intro,
        }
    }
}

/// Append-only chat transcript for the history pane.
#[derive(Clone, Debug, Default)]
pub struct ChatHistory {
    turns: Vec<ChatTurn>,
}

impl ChatHistory {
    /// History seeded with the intro greeting.
    pub fn with_intro() -> Self {
        Self {
            turns: vec![ChatTurn::new(ChatRole::Assistant, INTRO_GREETING, true)],
        }
    }

    pub fn turns(&self) -> &[ChatTurn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn push_user(&mut self, text: impl Into<String>) {
        self.turns.push(ChatTurn::new(ChatRole::User, text, false));
    }

    pub fn push_assistant(&mut self, text: impl Into<String>) {
        self.turns.push(ChatTurn::new(ChatRole::Assistant, text, false));
    }

    /// Drop intro turns. Only the first user submission has anything to remove.
    pub fn clear_intro(&mut self) {
        self.turns.retain(|t| !t.intro);
    }
}
