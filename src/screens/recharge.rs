//! Recharge screen, shared by the bus and metro passes.
//!
//! The pass-specific copy, icon and accent live in a [`RechargeDescriptor`].
//! Confirmations are modal: while a dialog is open the screen is in
//! [`RechargeState::ConfirmingRecharge`] or [`RechargeState::ConfirmingExit`]
//! and every operation that needs [`RechargeState::Idle`] is ignored.

use crate::assets::{Artwork, AssetKey};
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::prompt::{Answer, Prompt, PromptResponse};
use crate::keymap::{Action, Keymap};
use crate::navigation::{NavigationRequest, ScreenId};
use crate::pass::{Month, PassType, RechargeSelection};
use crate::screens::screen_trait::{key_press, RenderContext, Screen, ScreenAction, ScreenContext};
use crate::styles::{METRO_GREEN, TUSSAM_RED};
use crate::widgets::{Button, Dropdown, DropdownState};
use anyhow::Result;
use crossterm::event::{Event, KeyEvent};
use ratatui::layout::Flex;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Paragraph};
use tracing::{debug, info};

const CONFIRM_LABEL: &str = "CONFIRMAR RECARGA";
const BACK_LABEL: &str = "VOLVER";

/// Everything that differs between the bus and metro screens
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RechargeDescriptor {
    pub pass_type: PassType,
    pub window_title: &'static str,
    pub heading: &'static str,
    pub subtitle: &'static str,
    /// Instruction above the month picker before a month is chosen
    pub initial_prompt: &'static str,
    /// Line under the month picker
    pub validity_note: &'static str,
    /// First line of the confirmation dialog
    pub confirm_label: &'static str,
    /// Success notice text before the month name
    pub success_prefix: &'static str,
    pub icon: AssetKey,
    pub accent: Color,
}

impl RechargeDescriptor {
    pub fn bus() -> Self {
        Self {
            pass_type: PassType::Bus,
            window_title: "TUSSAM - Recarga Bono Bus",
            heading: "RECARGA BONO BUS",
            subtitle: "TUSSAM - Transporte Urbano de Sevilla",
            initial_prompt: "Seleccione el mes para recargar su bono:",
            validity_note: "✓ Recarga válida para todo el mes seleccionado",
            confirm_label: "Tipo de bono: BUS",
            success_prefix: "Bono Bus recargado correctamente para",
            icon: AssetKey::BusIcon,
            accent: TUSSAM_RED,
        }
    }

    pub fn metro() -> Self {
        Self {
            pass_type: PassType::Metro,
            window_title: "Metro de Sevilla - Recarga Bono Tren",
            heading: "RECARGA BONO TREN",
            subtitle: "Metro de Sevilla",
            initial_prompt: "Seleccione el mes para recargar su abono:",
            validity_note: "Recarga válida para todo el mes seleccionado",
            confirm_label: "Tipo de abono: TREN",
            success_prefix: "Bono de tren recargado correctamente para",
            icon: AssetKey::MetroIcon,
            accent: METRO_GREEN,
        }
    }

    pub fn for_pass(pass_type: PassType) -> Self {
        match pass_type {
            PassType::Bus => Self::bus(),
            PassType::Metro => Self::metro(),
        }
    }

    pub fn success_message(&self, month: Month) -> String {
        format!("{} {}.", self.success_prefix, month.name())
    }

    pub fn confirm_body(&self, month: Month) -> String {
        format!(
            "{}\nMes: {}\n¿Confirma la recarga?",
            self.confirm_label,
            month.name()
        )
    }
}

/// Which modal step the screen is in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RechargeState {
    #[default]
    Idle,
    ConfirmingRecharge,
    ConfirmingExit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RechargeOutcome {
    Confirmed,
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseDecision {
    Exit,
    Stay,
}

/// Control that has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RechargeFocus {
    #[default]
    Month,
    Confirm,
    Back,
}

impl RechargeFocus {
    fn next(self) -> Self {
        match self {
            RechargeFocus::Month => RechargeFocus::Confirm,
            RechargeFocus::Confirm => RechargeFocus::Back,
            RechargeFocus::Back => RechargeFocus::Month,
        }
    }

    fn previous(self) -> Self {
        match self {
            RechargeFocus::Month => RechargeFocus::Back,
            RechargeFocus::Confirm => RechargeFocus::Month,
            RechargeFocus::Back => RechargeFocus::Confirm,
        }
    }
}

pub struct RechargeScreen {
    descriptor: RechargeDescriptor,
    selection: RechargeSelection,
    month_list: DropdownState,
    prompt_text: String,
    state: RechargeState,
    focus: RechargeFocus,
    /// Confirmation question while not idle
    dialog: Option<Prompt>,
    /// Success notice, shown until dismissed
    notice: Option<Prompt>,
    art: Artwork,
}

impl RechargeScreen {
    pub fn new(descriptor: RechargeDescriptor, month: Month, art: Artwork) -> Self {
        Self {
            selection: RechargeSelection::new(descriptor.pass_type, month),
            month_list: DropdownState::new(Month::ALL.len(), month.index()),
            prompt_text: descriptor.initial_prompt.to_string(),
            descriptor,
            state: RechargeState::Idle,
            focus: RechargeFocus::Month,
            dialog: None,
            notice: None,
            art,
        }
    }

    pub fn descriptor(&self) -> &RechargeDescriptor {
        &self.descriptor
    }

    pub fn selection(&self) -> RechargeSelection {
        self.selection
    }

    /// Instruction line above the month picker
    pub fn prompt_text(&self) -> &str {
        &self.prompt_text
    }

    pub fn state(&self) -> RechargeState {
        self.state
    }

    pub fn focus(&self) -> RechargeFocus {
        self.focus
    }

    /// Open confirmation question
    pub fn dialog(&self) -> Option<&Prompt> {
        self.dialog.as_ref()
    }

    /// Open success notice
    pub fn notice(&self) -> Option<&Prompt> {
        self.notice.as_ref()
    }

    fn is_idle(&self) -> bool {
        self.state == RechargeState::Idle && self.notice.is_none()
    }

    /// Choose the month to recharge. Repeating a selection is harmless.
    pub fn select_month(&mut self, month: Month) {
        if !self.is_idle() {
            debug!("Ignoring month change while a dialog is open");
            return;
        }
        self.selection.month = month;
        self.month_list.select(month.index());
        self.prompt_text = format!("Mes seleccionado: {} - ¿Desea continuar?", month.name());
        debug!("Selected {} for {}", month, self.descriptor.pass_type);
    }

    /// Ask the user to confirm the recharge
    pub fn confirm_recharge(&mut self) {
        if !self.is_idle() {
            return;
        }
        self.month_list.collapse();
        self.state = RechargeState::ConfirmingRecharge;
        self.dialog = Some(Prompt::confirm(
            "Confirmar recarga",
            self.descriptor.confirm_body(self.selection.month),
        ));
    }

    /// Apply the answer to the recharge question
    pub fn resolve_recharge(&mut self, answer: Answer) -> RechargeOutcome {
        if self.state != RechargeState::ConfirmingRecharge {
            debug!("No recharge confirmation pending");
            return RechargeOutcome::Cancelled;
        }
        self.state = RechargeState::Idle;
        self.dialog = None;

        match answer {
            Answer::Yes => {
                let month = self.selection.month;
                info!(
                    "Recharge confirmed: {} for {}",
                    self.selection.pass_type, month
                );
                self.notice = Some(Prompt::message(
                    "Recarga exitosa",
                    self.descriptor.success_message(month),
                ));
                RechargeOutcome::Confirmed
            }
            Answer::No => {
                debug!("Recharge cancelled");
                RechargeOutcome::Cancelled
            }
        }
    }

    /// Leave for the login screen
    pub fn go_back(&self) -> NavigationRequest {
        NavigationRequest::OpenLogin
    }

    /// Ask whether to leave without recharging
    pub fn request_close(&mut self) {
        if !self.is_idle() {
            return;
        }
        self.month_list.collapse();
        self.state = RechargeState::ConfirmingExit;
        self.dialog = Some(Prompt::confirm(
            "Confirmar salida",
            "¿Está seguro de que desea salir sin recargar?",
        ));
    }

    /// Apply the answer to the exit question
    pub fn resolve_close(&mut self, answer: Answer) -> CloseDecision {
        if self.state != RechargeState::ConfirmingExit {
            return CloseDecision::Stay;
        }
        self.state = RechargeState::Idle;
        self.dialog = None;

        match answer {
            Answer::Yes => {
                info!("Leaving {} recharge without recharging", self.descriptor.pass_type);
                CloseDecision::Exit
            }
            Answer::No => CloseDecision::Stay,
        }
    }

    fn handle_key(&mut self, key: KeyEvent, keymap: &Keymap) -> ScreenAction {
        let Some(action) = keymap.get_action(key.code, key.modifiers) else {
            return ScreenAction::None;
        };

        if let Some(notice) = self.notice.as_mut() {
            if notice.handle_action(action) != PromptResponse::Pending {
                self.notice = None;
            }
            return ScreenAction::None;
        }

        if let Some(dialog) = self.dialog.as_mut() {
            let PromptResponse::Answered(answer) = dialog.handle_action(action) else {
                return ScreenAction::None;
            };
            return match self.state {
                RechargeState::ConfirmingRecharge => {
                    self.resolve_recharge(answer);
                    ScreenAction::None
                }
                RechargeState::ConfirmingExit => match self.resolve_close(answer) {
                    CloseDecision::Exit => ScreenAction::Navigate(NavigationRequest::Exit),
                    CloseDecision::Stay => ScreenAction::None,
                },
                RechargeState::Idle => ScreenAction::None,
            };
        }

        self.handle_idle_action(action)
    }

    fn handle_idle_action(&mut self, action: Action) -> ScreenAction {
        match action {
            Action::Quit => {
                self.request_close();
                return ScreenAction::None;
            }
            Action::Cancel if self.month_list.is_expanded() => self.month_list.collapse(),
            Action::Cancel => return ScreenAction::Navigate(self.go_back()),
            Action::NextField => {
                self.month_list.collapse();
                self.focus = self.focus.next();
            }
            Action::PrevField => {
                self.month_list.collapse();
                self.focus = self.focus.previous();
            }
            _ => {}
        }

        match self.focus {
            RechargeFocus::Month => match action {
                Action::MoveUp | Action::MoveLeft => {
                    self.select_month(self.selection.month.previous())
                }
                Action::MoveDown | Action::MoveRight => {
                    self.select_month(self.selection.month.next())
                }
                Action::Confirm | Action::ToggleSelect => self.month_list.toggle(),
                _ => {}
            },
            RechargeFocus::Confirm | RechargeFocus::Back => match action {
                Action::MoveLeft => self.focus = RechargeFocus::Confirm,
                Action::MoveRight => self.focus = RechargeFocus::Back,
                Action::Confirm | Action::ToggleSelect => {
                    if self.focus == RechargeFocus::Confirm {
                        self.confirm_recharge();
                    } else {
                        return ScreenAction::Navigate(self.go_back());
                    }
                }
                _ => {}
            },
        }
        ScreenAction::None
    }

    fn footer_text(&self, keymap: &Keymap) -> String {
        if self.dialog.is_some() {
            return keymap.hints(&[Action::Confirm, Action::Yes, Action::No]);
        }
        if self.notice.is_some() {
            return keymap.hints(&[Action::Confirm]);
        }
        match self.focus {
            RechargeFocus::Month => keymap.hints(&[
                Action::MoveDown,
                Action::NextField,
                Action::Cancel,
                Action::Quit,
            ]),
            RechargeFocus::Confirm | RechargeFocus::Back => keymap.hints(&[
                Action::Confirm,
                Action::NextField,
                Action::Cancel,
                Action::Quit,
            ]),
        }
    }
}

impl Screen for RechargeScreen {
    fn id(&self) -> ScreenId {
        ScreenId::Recharge(self.descriptor.pass_type)
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
        let theme = ctx.theme;
        let accent = theme.accent(self.descriptor.accent);
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
            self.descriptor.window_title,
            self.descriptor.heading,
            self.descriptor.subtitle,
            accent,
        );

        let [form_area] = Layout::horizontal([Constraint::Max(56)])
            .flex(Flex::Center)
            .areas(body_area);
        let [_, prompt_row, _, month_row, note_row, _, button_row] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(form_area);

        frame.render_widget(
            Paragraph::new(self.prompt_text.as_str())
                .alignment(Alignment::Center)
                .style(theme.text_style().add_modifier(Modifier::BOLD)),
            prompt_row,
        );
        frame.render_widget(
            Paragraph::new(self.descriptor.validity_note)
                .alignment(Alignment::Center)
                .style(theme.success_style()),
            note_row,
        );

        let buttons = Line::from(vec![
            Button::new(CONFIRM_LABEL, theme)
                .accent(accent)
                .focused(self.focus == RechargeFocus::Confirm)
                .span(),
            Span::raw("   "),
            Button::new(BACK_LABEL, theme)
                .accent(accent)
                .focused(self.focus == RechargeFocus::Back)
                .span(),
        ]);
        frame.render_widget(Paragraph::new(buttons).alignment(Alignment::Center), button_row);

        // Drawn after the rows it may cover when expanded
        let months: Vec<&str> = Month::ALL.iter().map(Month::name).collect();
        frame.render_stateful_widget(
            Dropdown::new(months, theme)
                .title("Mes")
                .accent(accent)
                .focused(self.focus == RechargeFocus::Month),
            month_row,
            &mut self.month_list,
        );

        Footer::render(frame, footer_area, theme, &self.footer_text(&ctx.config.keymap));

        if let Some(prompt) = self.dialog.as_ref().or(self.notice.as_ref()) {
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
}
