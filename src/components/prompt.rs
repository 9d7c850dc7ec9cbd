//! Modal prompt state: information messages and Yes/No questions.
//!
//! A prompt is owned by the screen that raised it and receives every action
//! while it is open. Button captions come from [`Labels`].

use crate::config::Labels;
use crate::keymap::Action;
use crate::styles::Theme;
use crate::widgets::{Dialog, DialogVariant};
use ratatui::prelude::*;

/// Answer to a Yes/No question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    Yes,
    No,
}

impl Answer {
    fn other(self) -> Self {
        match self {
            Answer::Yes => Answer::No,
            Answer::No => Answer::Yes,
        }
    }
}

/// What happened to a prompt after an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptResponse {
    /// Still open
    Pending,
    /// A message was acknowledged
    Dismissed,
    /// A question was answered
    Answered(Answer),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prompt {
    /// Information or error with a single OK button
    Message {
        title: String,
        body: String,
        variant: DialogVariant,
    },
    /// Yes/No question, Yes highlighted initially
    Confirm {
        title: String,
        body: String,
        selected: Answer,
    },
}

impl Prompt {
    pub fn message(title: impl Into<String>, body: impl Into<String>) -> Self {
        Prompt::Message {
            title: title.into(),
            body: body.into(),
            variant: DialogVariant::Default,
        }
    }

    pub fn error(title: impl Into<String>, body: impl Into<String>) -> Self {
        Prompt::Message {
            title: title.into(),
            body: body.into(),
            variant: DialogVariant::Error,
        }
    }

    pub fn confirm(title: impl Into<String>, body: impl Into<String>) -> Self {
        Prompt::Confirm {
            title: title.into(),
            body: body.into(),
            selected: Answer::Yes,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Prompt::Message { title, .. } | Prompt::Confirm { title, .. } => title,
        }
    }

    pub fn body(&self) -> &str {
        match self {
            Prompt::Message { body, .. } | Prompt::Confirm { body, .. } => body,
        }
    }

    /// Highlighted answer of a question
    pub fn selected(&self) -> Option<Answer> {
        match self {
            Prompt::Message { .. } => None,
            Prompt::Confirm { selected, .. } => Some(*selected),
        }
    }

    pub fn handle_action(&mut self, action: Action) -> PromptResponse {
        match self {
            Prompt::Message { .. } => match action {
                Action::Confirm | Action::Cancel | Action::Yes => PromptResponse::Dismissed,
                _ => PromptResponse::Pending,
            },
            Prompt::Confirm { selected, .. } => match action {
                Action::Confirm => PromptResponse::Answered(*selected),
                Action::Yes => PromptResponse::Answered(Answer::Yes),
                Action::No | Action::Cancel => PromptResponse::Answered(Answer::No),
                Action::MoveLeft | Action::MoveRight | Action::NextField | Action::PrevField => {
                    *selected = selected.other();
                    PromptResponse::Pending
                }
                _ => PromptResponse::Pending,
            },
        }
    }

    /// Draw the prompt over `area`
    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme, labels: &Labels, accent: Color) {
        let dialog = match self {
            Prompt::Message {
                title,
                body,
                variant,
            } => Dialog::new(title, body, theme)
                .variant(*variant)
                .buttons(&[labels.ok.as_str()]),
            Prompt::Confirm {
                title,
                body,
                selected,
            } => Dialog::new(title, body, theme)
                .variant(DialogVariant::Question)
                .buttons(&[labels.yes.as_str(), labels.no.as_str()])
                .selected(match selected {
                    Answer::Yes => 0,
                    Answer::No => 1,
                }),
        };
        frame.render_widget(dialog.accent(accent), area);
    }
}
