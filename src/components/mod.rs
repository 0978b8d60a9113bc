//! UI components for the three workspace panes.

pub mod chat_panel;
pub mod result_panel;
pub mod source_panel;
pub mod test_card;
