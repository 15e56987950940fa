//! Status enumerations and their display tones
//!
//! Every status string in the fixtures is a closed enum here. Display code
//! asks for a [`Tone`] through an exhaustive match instead of indexing a
//! colour table by string.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Display category for anything with a status light
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tone {
    Success,
    Caution,
    Warning,
    Danger,
    Info,
    Neutral,
}

impl Tone {
    /// Short marker used by text renderers
    pub fn glyph(&self) -> &'static str {
        match self {
            Tone::Success => "●",
            Tone::Caution => "◐",
            Tone::Warning => "▲",
            Tone::Danger => "■",
            Tone::Info => "◆",
            Tone::Neutral => "○",
        }
    }
}

/// Something with a fixed display label and tone
pub trait Status {
    fn label(&self) -> &'static str;
    fn tone(&self) -> Tone;
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown {kind}: {value}")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
}

/// Parse `s` against the wire names of `variants`
pub(crate) fn parse_variant<T: Copy>(
    kind: &'static str,
    variants: &[T],
    wire: impl Fn(&T) -> &'static str,
    s: &str,
) -> Result<T, ParseEnumError> {
    variants
        .iter()
        .find(|v| wire(*v).eq_ignore_ascii_case(s))
        .copied()
        .ok_or_else(|| ParseEnumError {
            kind,
            value: s.to_string(),
        })
}

/// The three-level health scale shared by tenants, buildings and cards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusLevel {
    Good,
    Warning,
    Critical,
}

impl StatusLevel {
    pub const ALL: [StatusLevel; 3] = [
        StatusLevel::Good,
        StatusLevel::Warning,
        StatusLevel::Critical,
    ];

    /// Wire name, as stored in fixtures and compared by filters
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusLevel::Good => "good",
            StatusLevel::Warning => "warning",
            StatusLevel::Critical => "critical",
        }
    }
}

impl Status for StatusLevel {
    fn label(&self) -> &'static str {
        match self {
            StatusLevel::Good => "Good",
            StatusLevel::Warning => "Warning",
            StatusLevel::Critical => "Critical",
        }
    }

    fn tone(&self) -> Tone {
        match self {
            StatusLevel::Good => Tone::Success,
            StatusLevel::Warning => Tone::Warning,
            StatusLevel::Critical => Tone::Danger,
        }
    }
}

impl FromStr for StatusLevel {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_variant("status", &Self::ALL, StatusLevel::as_str, s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitStatus {
    Occupied,
    Vacant,
    Maintenance,
    Reserved,
}

impl UnitStatus {
    pub const ALL: [UnitStatus; 4] = [
        UnitStatus::Occupied,
        UnitStatus::Vacant,
        UnitStatus::Maintenance,
        UnitStatus::Reserved,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            UnitStatus::Occupied => "Occupied",
            UnitStatus::Vacant => "Vacant",
            UnitStatus::Maintenance => "Maintenance",
            UnitStatus::Reserved => "Reserved",
        }
    }

    /// Position on the health scale; reserved units sit outside it
    pub fn level(&self) -> Option<StatusLevel> {
        match self {
            UnitStatus::Occupied => Some(StatusLevel::Good),
            UnitStatus::Vacant => Some(StatusLevel::Warning),
            UnitStatus::Maintenance => Some(StatusLevel::Critical),
            UnitStatus::Reserved => None,
        }
    }
}

impl Status for UnitStatus {
    fn label(&self) -> &'static str {
        self.as_str()
    }

    fn tone(&self) -> Tone {
        self.level().map(|level| level.tone()).unwrap_or(Tone::Info)
    }
}

impl FromStr for UnitStatus {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_variant("unit status", &Self::ALL, UnitStatus::as_str, s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Paid,
    Pending,
    Late,
    Unpaid,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Paid => "paid",
            PaymentStatus::Pending => "pending",
            PaymentStatus::Late => "late",
            PaymentStatus::Unpaid => "unpaid",
        }
    }
}

impl From<PaymentStatus> for StatusLevel {
    fn from(status: PaymentStatus) -> Self {
        match status {
            PaymentStatus::Paid => StatusLevel::Good,
            PaymentStatus::Pending | PaymentStatus::Late => StatusLevel::Warning,
            PaymentStatus::Unpaid => StatusLevel::Critical,
        }
    }
}

impl Status for PaymentStatus {
    fn label(&self) -> &'static str {
        match self {
            PaymentStatus::Paid => "Paid",
            PaymentStatus::Pending => "Pending",
            PaymentStatus::Late => "Late",
            PaymentStatus::Unpaid => "Unpaid",
        }
    }

    fn tone(&self) -> Tone {
        match self {
            // Late sits between pending and unpaid
            PaymentStatus::Late => Tone::Caution,
            other => StatusLevel::from(*other).tone(),
        }
    }
}

/// Maintenance issue state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueStatus {
    Critical,
    Warning,
    Normal,
}

impl IssueStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueStatus::Critical => "critical",
            IssueStatus::Warning => "warning",
            IssueStatus::Normal => "normal",
        }
    }
}

impl From<IssueStatus> for StatusLevel {
    fn from(status: IssueStatus) -> Self {
        match status {
            IssueStatus::Normal => StatusLevel::Good,
            IssueStatus::Warning => StatusLevel::Warning,
            IssueStatus::Critical => StatusLevel::Critical,
        }
    }
}

impl Status for IssueStatus {
    fn label(&self) -> &'static str {
        match self {
            IssueStatus::Critical => "Critical",
            IssueStatus::Warning => "Warning",
            IssueStatus::Normal => "Normal",
        }
    }

    fn tone(&self) -> Tone {
        StatusLevel::from(*self).tone()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }
}

impl FromStr for Priority {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_variant("priority", &Self::ALL, Priority::as_str, s)
    }
}

/// Alert severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
        }
    }
}

impl Status for Severity {
    fn label(&self) -> &'static str {
        match self {
            Severity::Low => "Low Priority",
            Severity::Medium => "Medium Priority",
            Severity::High => "High Priority",
        }
    }

    fn tone(&self) -> Tone {
        match self {
            Severity::Low => Tone::Info,
            Severity::Medium => Tone::Warning,
            Severity::High => Tone::Danger,
        }
    }
}

macro_rules! display_as_str {
    ($($ty:ty),* $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )*
    };
}

display_as_str!(StatusLevel, UnitStatus, PaymentStatus, IssueStatus, Priority, Severity);
