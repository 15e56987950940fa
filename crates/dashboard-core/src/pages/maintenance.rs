//! Maintenance AI: issue list with priority filter, gated predictions

use dashboard_types::{IssueStatus, MaintenanceIssue, Prediction, Priority, Status, Tone};
use record_filter::{FilterSpec, FilterState, ALL};
use serde::Serialize;
use tracing::debug;

use super::short_date;
use crate::error::Result;
use crate::fixtures::Fixtures;

pub const PRIORITY_FILTER: &str = "priority";
pub const DEFAULT_THRESHOLD: u8 = 70;
pub const THRESHOLD_STEP: u8 = 5;

pub fn filter_spec() -> FilterSpec {
    FilterSpec::new().category(PRIORITY_FILTER, "priority")
}

/// Snap a slider value to the nearest step within 0..=100
pub fn snap_threshold(value: i64) -> u8 {
    let step = i64::from(THRESHOLD_STEP);
    let clamped = value.clamp(0, 100);
    // Halfway values round up
    ((clamped + step / 2) / step * step).min(100) as u8
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IssueCard<'a> {
    pub id: &'a str,
    pub issue: &'a str,
    pub building: &'a str,
    pub unit: &'a str,
    pub status: IssueStatus,
    pub status_label: &'static str,
    pub tone: Tone,
    pub priority: Priority,
    pub reported: String,
    pub reported_by: &'a str,
    pub estimated_completion: String,
    pub assigned_to: &'a str,
    pub details: &'a str,
    pub predicted_cost: &'a str,
}

impl<'a> IssueCard<'a> {
    fn new(issue: &'a MaintenanceIssue) -> Self {
        IssueCard {
            id: &issue.id,
            issue: &issue.issue,
            building: &issue.building,
            unit: &issue.unit,
            status: issue.status,
            status_label: issue.status.label(),
            tone: issue.status.tone(),
            priority: issue.priority,
            reported: short_date(issue.reported_date),
            reported_by: &issue.reported_by,
            estimated_completion: short_date(issue.estimated_completion),
            assigned_to: &issue.assigned_to,
            details: &issue.details,
            predicted_cost: &issue.predicted_cost,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MaintenanceView<'a> {
    pub ai_enabled: bool,
    pub ai_label: &'static str,
    pub threshold: u8,
    pub threshold_label: String,
    pub priority: &'a str,
    pub issue_badge: String,
    pub issues: Vec<IssueCard<'a>>,
    pub predictions: Vec<&'a Prediction>,
}

pub struct MaintenancePage<'a> {
    fixtures: &'a Fixtures,
    spec: FilterSpec,
    state: FilterState,
    ai_enabled: bool,
    threshold: u8,
}

impl<'a> MaintenancePage<'a> {
    pub fn new(fixtures: &'a Fixtures) -> Self {
        let spec = filter_spec();
        let state = spec.state();
        debug!(
            issues = fixtures.issues.len(),
            predictions = fixtures.predictions.len(),
            "Building maintenance page"
        );
        Self {
            fixtures,
            spec,
            state,
            ai_enabled: true,
            threshold: DEFAULT_THRESHOLD,
        }
    }

    /// `None` shows every priority
    pub fn set_priority(&mut self, priority: Option<Priority>) -> Result<()> {
        let value = priority.map(|p| p.as_str()).unwrap_or(ALL);
        self.state.select(PRIORITY_FILTER, value)?;
        debug!(priority = value, "Priority filter changed");
        Ok(())
    }

    pub fn priority(&self) -> &str {
        self.state.selection(PRIORITY_FILTER)
    }

    pub fn ai_enabled(&self) -> bool {
        self.ai_enabled
    }

    pub fn set_ai_enabled(&mut self, enabled: bool) {
        self.ai_enabled = enabled;
    }

    pub fn threshold(&self) -> u8 {
        self.threshold
    }

    /// Returns the threshold actually applied after snapping
    pub fn set_threshold(&mut self, value: i64) -> u8 {
        self.threshold = snap_threshold(value);
        self.threshold
    }

    pub fn visible_issues(&self) -> Vec<&'a MaintenanceIssue> {
        self.spec.filter(&self.fixtures.issues, &self.state)
    }

    /// Predictions at or above the threshold; none while the assistant is off
    pub fn visible_predictions(&self) -> Vec<&'a Prediction> {
        if !self.ai_enabled {
            return Vec::new();
        }
        self.fixtures
            .predictions
            .iter()
            .filter(|p| p.confidence >= self.threshold)
            .collect()
    }

    pub fn view(&self) -> MaintenanceView<'_> {
        let issues: Vec<IssueCard<'a>> =
            self.visible_issues().into_iter().map(IssueCard::new).collect();
        MaintenanceView {
            ai_enabled: self.ai_enabled,
            ai_label: if self.ai_enabled {
                "AI Assistant Enabled"
            } else {
                "AI Assistant Disabled"
            },
            threshold: self.threshold,
            threshold_label: format!("{}% confidence", self.threshold),
            priority: self.priority(),
            issue_badge: format!("{} Active", issues.len()),
            issues,
            predictions: self.visible_predictions(),
        }
    }
}
