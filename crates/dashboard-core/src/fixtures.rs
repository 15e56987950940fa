//! Mock data the pages render
//!
//! The bundled set reproduces the dashboard's demo data. Callers may load
//! their own file with the same shape; pages only ever see a `&Fixtures`.

use std::path::Path;

use chrono::NaiveDate;
use dashboard_types::{
    AdminUser, Alert, Building, BuildingEfficiency, MaintenanceIssue, Prediction, QuickAction,
    SimulationKind, SimulationResult, Tenant, Unit, Utility, UtilityUsage,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{DashboardError, Result};
use crate::pages::StatusCard;

const BUNDLED: &str = include_str!("../fixtures/dashboard.json");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Fixtures {
    /// Date the data describes; period labels are computed from it
    pub as_of: NaiveDate,
    pub status_cards: Vec<StatusCard>,
    pub buildings: Vec<Building>,
    pub alerts: Vec<Alert>,
    pub quick_actions: Vec<QuickAction>,
    pub units: Vec<Unit>,
    pub tenants: Vec<Tenant>,
    pub issues: Vec<MaintenanceIssue>,
    pub predictions: Vec<Prediction>,
    pub utilities: Vec<UtilityUsage>,
    pub building_efficiency: Vec<BuildingEfficiency>,
    pub users: Vec<AdminUser>,
    pub simulations: Vec<SimulationResult>,
}

impl Default for Fixtures {
    fn default() -> Self {
        Self {
            as_of: NaiveDate::from_ymd_opt(2025, 5, 11).unwrap_or(NaiveDate::MIN),
            status_cards: Vec::new(),
            buildings: Vec::new(),
            alerts: Vec::new(),
            quick_actions: Vec::new(),
            units: Vec::new(),
            tenants: Vec::new(),
            issues: Vec::new(),
            predictions: Vec::new(),
            utilities: Vec::new(),
            building_efficiency: Vec::new(),
            users: Vec::new(),
            simulations: Vec::new(),
        }
    }
}

impl Fixtures {
    /// The demo data compiled into the crate
    pub fn bundled() -> Result<Self> {
        Self::from_json(BUNDLED)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| DashboardError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), bytes = content.len(), "Loading fixtures");
        Self::from_json(&content)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let fixtures: Fixtures =
            serde_json::from_str(json).map_err(|e| DashboardError::Fixtures(e.to_string()))?;
        debug!(
            units = fixtures.units.len(),
            tenants = fixtures.tenants.len(),
            issues = fixtures.issues.len(),
            "Fixtures loaded"
        );
        Ok(fixtures)
    }

    pub fn building(&self, id: &str) -> Option<&Building> {
        self.buildings.iter().find(|b| b.id == id)
    }

    pub fn utility(&self, utility: Utility) -> Option<&UtilityUsage> {
        self.utilities.iter().find(|u| u.utility == utility)
    }

    pub fn simulation(&self, kind: SimulationKind) -> Option<&SimulationResult> {
        self.simulations.iter().find(|s| s.kind == kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_fixtures_parse() {
        let fixtures = Fixtures::bundled().unwrap();
        assert_eq!(fixtures.units.len(), 5);
        assert_eq!(fixtures.tenants.len(), 5);
        assert_eq!(fixtures.issues.len(), 5);
        assert_eq!(fixtures.predictions.len(), 3);
        assert_eq!(fixtures.buildings.len(), 5);
        assert_eq!(fixtures.status_cards.len(), 4);
        assert_eq!(fixtures.users.len(), 4);
        assert_eq!(fixtures.simulations.len(), 4);
    }

    #[test]
    fn test_lookup_helpers() {
        let fixtures = Fixtures::bundled().unwrap();
        assert_eq!(fixtures.building("2").map(|b| b.name.as_str()), Some("Harbor Plaza"));
        assert!(fixtures.building("99").is_none());
        assert_eq!(fixtures.utility(Utility::Gas).unwrap().cost, "$2,556.00");
        assert_eq!(fixtures.simulation(SimulationKind::Energy).unwrap().roi, 11.2);
    }

    #[test]
    fn test_missing_sections_default_to_empty() {
        let fixtures = Fixtures::from_json(r#"{"units": []}"#).unwrap();
        assert!(fixtures.tenants.is_empty());
        assert_eq!(fixtures.as_of, NaiveDate::from_ymd_opt(2025, 5, 11).unwrap());
    }

    #[test]
    fn test_malformed_json_is_fixture_error() {
        let err = Fixtures::from_json("{ not json").unwrap_err();
        assert!(matches!(err, DashboardError::Fixtures(_)));
    }
}
