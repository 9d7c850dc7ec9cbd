//! Pass types, months and the transient values that flow between screens.
//!
//! Nothing in here is persisted. `Credentials` lives for a single submit and
//! `RechargeSelection` for a single visit to a recharge screen.

use std::fmt;

/// A concrete transit pass that can be recharged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PassType {
    Bus,
    Metro,
}

impl PassType {
    /// Short uppercase name used in log lines.
    pub fn code(&self) -> &'static str {
        match self {
            PassType::Bus => "BUS",
            PassType::Metro => "METRO",
        }
    }
}

impl fmt::Display for PassType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// What the login selector currently shows, including the placeholder row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PassTypeChoice {
    #[default]
    Unselected,
    Bus,
    Metro,
}

impl PassTypeChoice {
    /// Every option in selector order (placeholder first).
    pub const ALL: [PassTypeChoice; 3] = [
        PassTypeChoice::Unselected,
        PassTypeChoice::Bus,
        PassTypeChoice::Metro,
    ];

    /// Label shown in the selector
    pub fn label(&self) -> &'static str {
        match self {
            PassTypeChoice::Unselected => "-- Seleccione tipo de bono --",
            PassTypeChoice::Bus => "BonoBus (Tussam)",
            PassTypeChoice::Metro => "BonoMetro",
        }
    }

    /// The concrete pass type, if this is not the placeholder.
    pub fn pass_type(&self) -> Option<PassType> {
        match self {
            PassTypeChoice::Unselected => None,
            PassTypeChoice::Bus => Some(PassType::Bus),
            PassTypeChoice::Metro => Some(PassType::Metro),
        }
    }

    /// Position of this option in [`PassTypeChoice::ALL`].
    pub fn index(&self) -> usize {
        match self {
            PassTypeChoice::Unselected => 0,
            PassTypeChoice::Bus => 1,
            PassTypeChoice::Metro => 2,
        }
    }

    /// Option at `index`, falling back to the placeholder.
    pub fn from_index(index: usize) -> Self {
        Self::ALL.get(index).copied().unwrap_or_default()
    }
}

impl From<PassType> for PassTypeChoice {
    fn from(pass_type: PassType) -> Self {
        match pass_type {
            PassType::Bus => PassTypeChoice::Bus,
            PassType::Metro => PassTypeChoice::Metro,
        }
    }
}

/// Calendar month, numbered 1 (January) to 12 (December).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Month {
    January = 1,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    /// All months in calendar order.
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    /// Month for a 1-based number, `None` outside 1..=12.
    pub fn from_number(number: u32) -> Option<Self> {
        let index = usize::try_from(number).ok()?.checked_sub(1)?;
        Self::ALL.get(index).copied()
    }

    /// 1-based month number.
    pub fn number(&self) -> u32 {
        *self as u32
    }

    /// Zero-based position, handy for list widgets.
    pub fn index(&self) -> usize {
        self.number() as usize - 1
    }

    /// Spanish display name.
    pub fn name(&self) -> &'static str {
        match self {
            Month::January => "Enero",
            Month::February => "Febrero",
            Month::March => "Marzo",
            Month::April => "Abril",
            Month::May => "Mayo",
            Month::June => "Junio",
            Month::July => "Julio",
            Month::August => "Agosto",
            Month::September => "Septiembre",
            Month::October => "Octubre",
            Month::November => "Noviembre",
            Month::December => "Diciembre",
        }
    }

    /// Next month, stopping at December.
    pub fn next(&self) -> Self {
        Self::from_number(self.number() + 1).unwrap_or(Month::December)
    }

    /// Previous month, stopping at January.
    pub fn previous(&self) -> Self {
        Self::from_number(self.number().saturating_sub(1)).unwrap_or(Month::January)
    }

    /// The month of the local calendar right now.
    pub fn current() -> Self {
        use chrono::Datelike;
        Self::from_number(chrono::Local::now().month()).unwrap_or(Month::January)
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One login attempt. Built from the form, judged, then dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub pass_type: PassTypeChoice,
    pub card_number: String,
}

impl Credentials {
    pub fn new(pass_type: PassTypeChoice, card_number: impl Into<String>) -> Self {
        Self {
            pass_type,
            card_number: card_number.into(),
        }
    }

    /// Card number reduced to its last four characters, for log lines.
    pub fn masked_card_number(&self) -> String {
        let trimmed = self.card_number.trim();
        let count = trimmed.chars().count();
        let tail: String = trimmed.chars().skip(count.saturating_sub(4)).collect();
        format!("****{}", tail)
    }
}

/// The month picked on a recharge screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RechargeSelection {
    pub pass_type: PassType,
    pub month: Month,
}

impl RechargeSelection {
    pub fn new(pass_type: PassType, month: Month) -> Self {
        Self { pass_type, month }
    }
}
