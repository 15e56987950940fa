use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::status::{parse_variant, ParseEnumError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SimulationKind {
    Occupancy,
    Energy,
    Maintenance,
    Revenue,
}

impl SimulationKind {
    pub const ALL: [SimulationKind; 4] = [
        SimulationKind::Occupancy,
        SimulationKind::Energy,
        SimulationKind::Maintenance,
        SimulationKind::Revenue,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SimulationKind::Occupancy => "occupancy",
            SimulationKind::Energy => "energy",
            SimulationKind::Maintenance => "maintenance",
            SimulationKind::Revenue => "revenue",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            SimulationKind::Occupancy => "Occupancy Optimization",
            SimulationKind::Energy => "Energy Efficiency",
            SimulationKind::Maintenance => "Maintenance Planning",
            SimulationKind::Revenue => "Revenue Forecasting",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            SimulationKind::Occupancy => "Predict vacancy rates and optimize pricing",
            SimulationKind::Energy => "Calculate potential energy savings with upgrades",
            SimulationKind::Maintenance => "Predict maintenance costs and schedule optimizations",
            SimulationKind::Revenue => "Project revenue based on market conditions",
        }
    }
}

impl fmt::Display for SimulationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SimulationKind {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_variant("simulation", &Self::ALL, SimulationKind::as_str, s)
    }
}

/// A labelled display value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    pub label: String,
    pub value: String,
}

/// The fixed outcome shown for one simulation type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    pub kind: SimulationKind,
    pub current: Metric,
    pub projected: Metric,
    pub roi: f64, // percent
    pub timeframe: String,
    pub recommendation: String,
}
