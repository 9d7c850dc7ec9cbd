//! Login screen: pass-type selector, card-number field and ACCEDER button.

use crate::assets::Artwork;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::prompt::{Prompt, PromptResponse};
use crate::keymap::{Action, Keymap};
use crate::navigation::{NavigationRequest, ScreenId};
use crate::pass::{Credentials, PassTypeChoice};
use crate::screens::screen_trait::{key_press, RenderContext, Screen, ScreenAction, ScreenContext};
use crate::utils::card_validation::{submit_credentials, LoginOutcome, CARD_NUMBER_LENGTH};
use crate::utils::text_input::TextInput;
use crate::widgets::{Button, Dropdown, DropdownState, TextInputWidget, TextInputWidgetExt};
use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Flex;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Paragraph};
use tracing::{info, warn};

const WINDOW_TITLE: &str = "Transporte Público de Sevilla - Acceso";
const HEADING: &str = "TRANSPORTE PÚBLICO DE SEVILLA";
const SUBTITLE: &str = "Sistema de Recarga de Bonos";
const FORM_TITLE: &str = "Acceso al Sistema";
const SUBMIT_LABEL: &str = "ACCEDER";

/// Control that has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginFocus {
    #[default]
    PassType,
    CardNumber,
    Submit,
}

impl LoginFocus {
    fn next(self) -> Self {
        match self {
            LoginFocus::PassType => LoginFocus::CardNumber,
            LoginFocus::CardNumber => LoginFocus::Submit,
            LoginFocus::Submit => LoginFocus::PassType,
        }
    }

    fn previous(self) -> Self {
        match self {
            LoginFocus::PassType => LoginFocus::Submit,
            LoginFocus::CardNumber => LoginFocus::PassType,
            LoginFocus::Submit => LoginFocus::CardNumber,
        }
    }
}

pub struct LoginScreen {
    pass_type: DropdownState,
    card_number: TextInput,
    focus: LoginFocus,
    prompt: Option<Prompt>,
    art: Artwork,
}

impl LoginScreen {
    /// Fresh form: placeholder selected, empty card number, selector focused
    pub fn new(art: Artwork) -> Self {
        Self {
            pass_type: DropdownState::new(PassTypeChoice::ALL.len(), 0),
            card_number: TextInput::new(),
            focus: LoginFocus::PassType,
            prompt: None,
            art,
        }
    }

    pub fn selection(&self) -> PassTypeChoice {
        PassTypeChoice::from_index(self.pass_type.selected())
    }

    pub fn select_pass_type(&mut self, choice: PassTypeChoice) {
        self.pass_type.select(choice.index());
    }

    pub fn card_number(&self) -> &TextInput {
        &self.card_number
    }

    pub fn set_card_number(&mut self, text: &str) {
        self.card_number = TextInput::with_text(text);
    }

    pub fn focus(&self) -> LoginFocus {
        self.focus
    }

    /// Open validation dialog, if any
    pub fn prompt(&self) -> Option<&Prompt> {
        self.prompt.as_ref()
    }

    pub fn is_dropdown_open(&self) -> bool {
        self.pass_type.is_expanded()
    }

    fn set_focus(&mut self, focus: LoginFocus) {
        self.pass_type.collapse();
        self.focus = focus;
    }

    /// Validate the form and react to the outcome.
    ///
    /// Failures open an error dialog and move focus to the offending control.
    pub fn submit(&mut self) -> LoginOutcome {
        let credentials = Credentials::new(self.selection(), self.card_number.text());
        let outcome = submit_credentials(&credentials);

        match outcome {
            LoginOutcome::Success(pass_type) => {
                info!(
                    "Login accepted for {} card {}",
                    pass_type,
                    credentials.masked_card_number()
                );
            }
            LoginOutcome::BothInvalid => {
                warn!("Login rejected: pass type and card number invalid");
            }
            LoginOutcome::PassTypeInvalid => {
                warn!("Login rejected: no pass type selected");
                self.set_focus(LoginFocus::PassType);
            }
            LoginOutcome::CardNumberInvalid => {
                warn!(
                    "Login rejected: card number {} is not {} digits",
                    credentials.masked_card_number(),
                    CARD_NUMBER_LENGTH
                );
                self.set_focus(LoginFocus::CardNumber);
                self.card_number.select_all();
            }
        }

        if let Some((title, body)) = outcome.failure_message() {
            self.prompt = Some(Prompt::error(title, body));
        }
        outcome
    }

    fn submit_action(&mut self) -> ScreenAction {
        match self.submit() {
            LoginOutcome::Success(pass_type) => {
                ScreenAction::Navigate(NavigationRequest::open_recharge(pass_type))
            }
            _ => ScreenAction::None,
        }
    }

    fn handle_key(&mut self, key: KeyEvent, keymap: &Keymap) -> ScreenAction {
        let action = keymap.get_action(key.code, key.modifiers);

        if let Some(prompt) = self.prompt.as_mut() {
            if let Some(action) = action {
                if prompt.handle_action(action) != PromptResponse::Pending {
                    self.prompt = None;
                }
            }
            return ScreenAction::None;
        }

        if self.focus == LoginFocus::CardNumber {
            let typed = match key.code {
                KeyCode::Char(c)
                    if !key
                        .modifiers
                        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
                {
                    Some(c)
                }
                _ => None,
            };
            // Printable characters always go to the field, even when bound
            if let Some(c) = typed {
                self.card_number.insert_char(c);
                return ScreenAction::None;
            }
            if action.is_some_and(|action| self.card_number.handle_action(action)) {
                return ScreenAction::None;
            }
        }

        match action {
            Some(action) => self.handle_action(action),
            None => ScreenAction::None,
        }
    }

    fn handle_action(&mut self, action: Action) -> ScreenAction {
        match action {
            Action::Quit => return ScreenAction::Navigate(NavigationRequest::Exit),
            Action::NextField => self.set_focus(self.focus.next()),
            Action::PrevField => self.set_focus(self.focus.previous()),
            _ => {}
        }

        match self.focus {
            LoginFocus::PassType => match action {
                Action::MoveUp => self.pass_type.select_previous(),
                Action::MoveDown => self.pass_type.select_next(),
                Action::Confirm | Action::ToggleSelect => self.pass_type.toggle(),
                Action::Cancel => self.pass_type.collapse(),
                _ => {}
            },
            LoginFocus::CardNumber => {
                if action == Action::Confirm {
                    return self.submit_action();
                }
            }
            LoginFocus::Submit => {
                if matches!(action, Action::Confirm | Action::ToggleSelect) {
                    return self.submit_action();
                }
            }
        }
        ScreenAction::None
    }

    fn footer_text(&self, keymap: &Keymap) -> String {
        if self.prompt.is_some() {
            return keymap.hints(&[Action::Confirm]);
        }
        match self.focus {
            LoginFocus::PassType => {
                keymap.hints(&[Action::MoveDown, Action::ToggleSelect, Action::NextField, Action::Quit])
            }
            LoginFocus::CardNumber => keymap.hints(&[Action::Confirm, Action::NextField]),
            LoginFocus::Submit => keymap.hints(&[Action::Confirm, Action::NextField, Action::Quit]),
        }
    }
}

impl Screen for LoginScreen {
    fn id(&self) -> ScreenId {
        ScreenId::Login
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
        let theme = ctx.theme;
        let accent = theme.primary;
        frame.render_widget(Block::default().style(theme.background_style()), area);

        let [header_area, body_area, footer_area] = Layout::vertical([
            Constraint::Length(Header::height(&self.art)),
            Constraint::Min(0),
            Constraint::Length(Footer::HEIGHT),
        ])
        .areas(area);

        Header::render(
            frame,
            header_area,
            theme,
            &self.art,
            WINDOW_TITLE,
            HEADING,
            SUBTITLE,
            accent,
        );

        let [form_area] = Layout::horizontal([Constraint::Max(56)])
            .flex(Flex::Center)
            .areas(body_area);
        let [title_row, _, select_row, card_row, info_rows, button_row] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .areas(form_area);

        frame.render_widget(
            Paragraph::new(FORM_TITLE)
                .alignment(Alignment::Center)
                .style(theme.title_style(theme.secondary)),
            title_row,
        );

        let input = TextInputWidget::new(&self.card_number, theme)
            .title("Número de Tarjeta (12 dígitos)")
            .placeholder("Introduzca un número de 12 dígitos")
            .accent(accent)
            .focused(self.focus == LoginFocus::CardNumber && self.prompt.is_none());
        frame.render_text_input_widget(input, card_row);

        frame.render_widget(
            Paragraph::new("Introduzca sus datos para acceder\nal sistema de recarga")
                .alignment(Alignment::Center)
                .style(theme.subtitle_style()),
            info_rows,
        );

        frame.render_widget(
            Button::new(SUBMIT_LABEL, theme)
                .accent(accent)
                .focused(self.focus == LoginFocus::Submit),
            button_row,
        );

        // Drawn after the rows it may cover when expanded
        let labels: Vec<&str> = PassTypeChoice::ALL.iter().map(|c| c.label()).collect();
        frame.render_stateful_widget(
            Dropdown::new(labels, theme)
                .title("Tipo de Bono")
                .accent(accent)
                .focused(self.focus == LoginFocus::PassType),
            select_row,
            &mut self.pass_type,
        );

        Footer::render(frame, footer_area, theme, &self.footer_text(&ctx.config.keymap));

        if let Some(prompt) = &self.prompt {
            prompt.render(frame, area, theme, &ctx.config.labels, accent);
        }
        Ok(())
    }

    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction> {
        Ok(match key_press(&event) {
            Some(key) => self.handle_key(key, &ctx.config.keymap),
            None => ScreenAction::None,
        })
    }

    fn is_input_focused(&self) -> bool {
        self.focus == LoginFocus::CardNumber && self.prompt.is_none()
    }
}
