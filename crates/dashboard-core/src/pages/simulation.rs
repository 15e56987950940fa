//! Simulation engine: pick a scenario, tune parameters, show the projection

use std::fmt;
use std::str::FromStr;

use dashboard_types::{SimulationKind, SimulationResult};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::fixtures::Fixtures;

pub const TIMEFRAME_MONTHS: (u8, u8) = (1, 36);
pub const INTENSITY: (u8, u8) = (1, 100);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptimizeFor {
    Cost,
    #[default]
    Revenue,
    Sustainability,
}

impl OptimizeFor {
    pub const ALL: [OptimizeFor; 3] = [
        OptimizeFor::Cost,
        OptimizeFor::Revenue,
        OptimizeFor::Sustainability,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OptimizeFor::Cost => "cost",
            OptimizeFor::Revenue => "revenue",
            OptimizeFor::Sustainability => "sustainability",
        }
    }
}

impl fmt::Display for OptimizeFor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OptimizeFor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OptimizeFor::ALL
            .into_iter()
            .find(|o| o.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Unknown optimization target: {}", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationParams {
    pub timeframe_months: u8,
    pub intensity: u8,
    pub optimize_for: OptimizeFor,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            timeframe_months: 12,
            intensity: 50,
            optimize_for: OptimizeFor::default(),
        }
    }
}

fn clamp_to((lo, hi): (u8, u8), value: i64) -> u8 {
    value.clamp(i64::from(lo), i64::from(hi)) as u8
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SimulationPhase {
    Idle,
    Running,
    Complete,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioCard {
    pub kind: SimulationKind,
    pub title: &'static str,
    pub description: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationView<'a> {
    pub scenarios: Vec<ScenarioCard>,
    pub params: SimulationParams,
    pub phase: SimulationPhase,
    pub result: Option<&'a SimulationResult>,
}

pub struct SimulationPage<'a> {
    fixtures: &'a Fixtures,
    kind: SimulationKind,
    params: SimulationParams,
    phase: SimulationPhase,
    // Results stay on screen across a re-run until something changes
    results_shown: bool,
}

impl<'a> SimulationPage<'a> {
    pub fn new(fixtures: &'a Fixtures) -> Self {
        debug!(scenarios = fixtures.simulations.len(), "Building simulation page");
        Self {
            fixtures,
            kind: SimulationKind::Occupancy,
            params: SimulationParams::default(),
            phase: SimulationPhase::Idle,
            results_shown: false,
        }
    }

    pub fn kind(&self) -> SimulationKind {
        self.kind
    }

    pub fn params(&self) -> SimulationParams {
        self.params
    }

    pub fn phase(&self) -> SimulationPhase {
        self.phase
    }

    fn reset(&mut self) {
        self.phase = SimulationPhase::Idle;
        self.results_shown = false;
    }

    /// Switching scenario hides any previous results
    pub fn select_kind(&mut self, kind: SimulationKind) {
        self.kind = kind;
        self.reset();
    }

    pub fn set_timeframe_months(&mut self, months: i64) -> u8 {
        self.params.timeframe_months = clamp_to(TIMEFRAME_MONTHS, months);
        self.reset();
        self.params.timeframe_months
    }

    pub fn set_intensity(&mut self, intensity: i64) -> u8 {
        self.params.intensity = clamp_to(INTENSITY, intensity);
        self.reset();
        self.params.intensity
    }

    pub fn set_optimize_for(&mut self, target: OptimizeFor) {
        self.params.optimize_for = target;
        self.reset();
    }

    /// Begin a run. Ignored while one is already in progress.
    pub fn start(&mut self) {
        if self.phase != SimulationPhase::Running {
            debug!(kind = %self.kind, params = ?self.params, "Simulation started");
            self.phase = SimulationPhase::Running;
        }
    }

    pub fn finish(&mut self) {
        if self.phase == SimulationPhase::Running {
            self.phase = SimulationPhase::Complete;
            self.results_shown = true;
        }
    }

    /// Start and immediately finish a run
    pub fn run(&mut self) -> Option<&'a SimulationResult> {
        self.start();
        self.finish();
        self.result()
    }

    /// The projection for the active scenario, once a run has completed.
    /// A re-run keeps the previous projection visible while it is running.
    pub fn result(&self) -> Option<&'a SimulationResult> {
        if self.results_shown {
            self.fixtures.simulation(self.kind)
        } else {
            None
        }
    }

    pub fn view(&self) -> SimulationView<'a> {
        SimulationView {
            scenarios: SimulationKind::ALL
                .into_iter()
                .map(|kind| ScenarioCard {
                    kind,
                    title: kind.title(),
                    description: kind.description(),
                    active: kind == self.kind,
                })
                .collect(),
            params: self.params,
            phase: self.phase,
            result: self.result(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let fixtures = Fixtures::default();
        let page = SimulationPage::new(&fixtures);
        assert_eq!(page.kind(), SimulationKind::Occupancy);
        assert_eq!(page.phase(), SimulationPhase::Idle);
        assert_eq!(
            page.params(),
            SimulationParams {
                timeframe_months: 12,
                intensity: 50,
                optimize_for: OptimizeFor::Revenue,
            }
        );
    }

    #[test]
    fn test_run_shows_result_for_active_kind() {
        let fixtures = Fixtures::bundled().unwrap();
        let mut page = SimulationPage::new(&fixtures);
        page.select_kind(SimulationKind::Maintenance);

        let result = page.run().unwrap();
        assert_eq!(result.roi, 15.6);
        assert_eq!(result.timeframe, "24 months");
        assert_eq!(page.phase(), SimulationPhase::Complete);
    }

    #[test]
    fn test_running_hides_results_until_finished() {
        let fixtures = Fixtures::bundled().unwrap();
        let mut page = SimulationPage::new(&fixtures);

        page.start();
        assert_eq!(page.phase(), SimulationPhase::Running);
        assert!(page.view().result.is_none());

        page.finish();
        assert!(page.view().result.is_some());
    }

    #[test]
    fn test_rerun_keeps_previous_results_visible() {
        let fixtures = Fixtures::bundled().unwrap();
        let mut page = SimulationPage::new(&fixtures);
        page.select_kind(SimulationKind::Revenue);
        let first = page.run().unwrap();

        page.start();
        assert_eq!(page.phase(), SimulationPhase::Running);
        assert_eq!(page.view().result, Some(first));

        // A parameter change mid-run still clears them
        page.set_intensity(75);
        page.start();
        assert!(page.result().is_none());
    }

    #[test]
    fn test_any_change_resets_to_idle() {
        let fixtures = Fixtures::bundled().unwrap();
        let mut page = SimulationPage::new(&fixtures);

        page.run();
        page.set_intensity(80);
        assert_eq!(page.phase(), SimulationPhase::Idle);
        assert!(page.result().is_none());

        page.run();
        page.select_kind(SimulationKind::Energy);
        assert!(page.result().is_none());

        page.run();
        page.set_optimize_for(OptimizeFor::Cost);
        assert_eq!(page.phase(), SimulationPhase::Idle);
    }

    #[test]
    fn test_params_are_clamped() {
        let fixtures = Fixtures::default();
        let mut page = SimulationPage::new(&fixtures);
        assert_eq!(page.set_timeframe_months(48), 36);
        assert_eq!(page.set_timeframe_months(0), 1);
        assert_eq!(page.set_intensity(-5), 1);
        assert_eq!(page.set_intensity(250), 100);
    }

    #[test]
    fn test_finish_without_start_is_ignored() {
        let fixtures = Fixtures::bundled().unwrap();
        let mut page = SimulationPage::new(&fixtures);
        page.finish();
        assert_eq!(page.phase(), SimulationPhase::Idle);
    }

    #[test]
    fn test_missing_result_data() {
        let fixtures = Fixtures::default();
        let mut page = SimulationPage::new(&fixtures);
        assert!(page.run().is_none());
        assert_eq!(page.phase(), SimulationPhase::Complete);
    }
}
