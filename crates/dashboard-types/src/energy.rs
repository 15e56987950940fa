use std::fmt;
use std::str::FromStr;

use record_filter::{FieldValue, Record};
use serde::{Deserialize, Serialize};

use crate::status::{parse_variant, ParseEnumError, StatusLevel};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Utility {
    Electricity,
    Water,
    Gas,
}

impl Utility {
    pub const ALL: [Utility; 3] = [Utility::Electricity, Utility::Water, Utility::Gas];

    pub fn as_str(&self) -> &'static str {
        match self {
            Utility::Electricity => "electricity",
            Utility::Water => "water",
            Utility::Gas => "gas",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Utility::Electricity => "Electricity",
            Utility::Water => "Water",
            Utility::Gas => "Gas",
        }
    }
}

impl fmt::Display for Utility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Utility {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_variant("utility", &Self::ALL, Utility::as_str, s)
    }
}

/// Share of a utility's consumption, in percent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Share {
    pub category: String,
    pub percent: u8,
}

/// Current and previous period consumption for one utility
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UtilityUsage {
    pub utility: Utility,
    pub current: String,
    pub previous: String,
    pub trend: f64, // percent change
    pub cost: String,
    pub prev_cost: String,
    pub breakdown: Vec<Share>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildingEfficiency {
    pub name: String,
    pub efficiency: u8,
    pub status: StatusLevel,
    pub trend: i32,
    #[serde(default)]
    pub recommendations: Vec<String>,
}

impl Record for BuildingEfficiency {
    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "name" => Some(self.name.as_str().into()),
            "efficiency" => Some(u32::from(self.efficiency).into()),
            "status" => Some(self.status.as_str().into()),
            "trend" => Some(i64::from(self.trend).into()),
            _ => None,
        }
    }
}
