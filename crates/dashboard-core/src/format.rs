//! Display helpers shared by the pages

use std::fmt;
use std::str::FromStr;

use dashboard_types::Tone;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Serialize, Serializer};

use crate::error::DashboardError;

lazy_static! {
    /// Dollar amount with optional sign, thousands separators and cents
    static ref CURRENCY_PATTERN: Regex =
        Regex::new(r"^\s*(-)?\s*\$?\s*(\d{1,3}(?:,\d{3})+|\d+)(?:\.(\d{1,2}))?\s*$").unwrap();
}

/// A dollar amount held in cents
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Currency(i64);

impl Currency {
    pub fn from_cents(cents: i64) -> Self {
        Currency(cents)
    }

    pub fn cents(&self) -> i64 {
        self.0
    }

    /// `self - rhs`, or `None` when the difference does not fit
    pub fn checked_sub(self, rhs: Currency) -> Option<Currency> {
        self.0.checked_sub(rhs.0).map(Currency)
    }
}

impl FromStr for Currency {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DashboardError::InvalidAmount(s.to_string());
        let caps = CURRENCY_PATTERN.captures(s).ok_or_else(invalid)?;

        let dollars: i64 = caps[2].replace(',', "").parse().map_err(|_| invalid())?;
        let cents: i64 = match caps.get(3) {
            // "$5.5" means fifty cents
            Some(m) if m.as_str().len() == 1 => {
                m.as_str().parse::<i64>().map_err(|_| invalid())? * 10
            }
            Some(m) => m.as_str().parse().map_err(|_| invalid())?,
            None => 0,
        };

        let total = dollars
            .checked_mul(100)
            .and_then(|d| d.checked_add(cents))
            .ok_or_else(invalid)?;
        Ok(Currency(if caps.get(1).is_some() { -total } else { total }))
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{}${}.{:02}", sign, group_thousands(abs / 100), abs % 100)
    }
}

impl Serialize for Currency {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Arrow, magnitude and tone for a percent change
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrendIndicator {
    pub arrow: &'static str,
    pub magnitude: f64,
    pub tone: Tone,
}

impl TrendIndicator {
    /// For figures where growth is good: up is green, down is red
    pub fn new(percent: f64) -> Self {
        let (arrow, tone) = if percent > 0.0 {
            ("↑", Tone::Success)
        } else if percent < 0.0 {
            ("↓", Tone::Danger)
        } else {
            ("→", Tone::Neutral)
        };
        TrendIndicator {
            arrow,
            magnitude: percent.abs(),
            tone,
        }
    }

    /// For consumption figures, where a drop is the good direction
    pub fn consumption(percent: f64) -> Self {
        let (arrow, tone) = if percent < 0.0 {
            ("↓", Tone::Success)
        } else {
            ("↑", Tone::Danger)
        };
        TrendIndicator {
            arrow,
            magnitude: percent.abs(),
            tone,
        }
    }
}

impl fmt::Display for TrendIndicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}%", self.arrow, self.magnitude)
    }
}

/// Signed percent, e.g. "+3%", "-2%", "0%"
pub fn signed_percent(percent: i32) -> String {
    if percent > 0 {
        format!("+{}%", percent)
    } else {
        format!("{}%", percent)
    }
}

/// Upper-case the first character
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `"1 tenant"`, `"3 tenants"`
pub fn count_noun(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{} {}", count, noun)
    } else {
        format!("{} {}s", count, noun)
    }
}
