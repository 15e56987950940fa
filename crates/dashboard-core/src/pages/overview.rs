//! Dashboard landing page: status cards, city grid, alerts, quick actions

use dashboard_types::{Accent, Alert, Building, QuickAction, Status, StatusLevel, Tone};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::fixtures::Fixtures;
use crate::format::TrendIndicator;

/// Headline metric on the landing page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusCard {
    pub title: String,
    pub value: String,
    pub status: StatusLevel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trend: Option<i32>, // percent change
}

impl StatusCard {
    pub fn trend_indicator(&self) -> Option<TrendIndicator> {
        self.trend.map(|t| TrendIndicator::new(f64::from(t)))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardView<'a> {
    pub title: &'a str,
    pub value: &'a str,
    pub tone: Tone,
    pub trend: Option<TrendIndicator>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BuildingTile<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub status: StatusLevel,
    pub tone: Tone,
    pub accent: Accent,
    pub cells: u8,
    pub x: u8,
    pub y: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlertView<'a> {
    pub title: &'a str,
    pub message: &'a str,
    pub severity: &'static str,
    pub tone: Tone,
    pub time: &'a str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverviewView<'a> {
    pub cards: Vec<CardView<'a>>,
    pub buildings: Vec<BuildingTile<'a>>,
    pub selected: Option<&'a str>,
    pub alert_badge: String,
    pub alerts: Vec<AlertView<'a>>,
    pub quick_actions: &'a [QuickAction],
}

pub struct OverviewPage<'a> {
    fixtures: &'a Fixtures,
    selected: Option<&'a Building>,
}

impl<'a> OverviewPage<'a> {
    pub fn new(fixtures: &'a Fixtures) -> Self {
        debug!(buildings = fixtures.buildings.len(), "Building overview page");
        Self {
            fixtures,
            selected: None,
        }
    }

    /// Select a building on the city grid. Unknown ids clear the selection.
    pub fn select_building(&mut self, id: &str) -> Option<&'a Building> {
        self.selected = self.fixtures.building(id);
        self.selected
    }

    pub fn selected_building(&self) -> Option<&'a Building> {
        self.selected
    }

    pub fn view(&self) -> OverviewView<'a> {
        let fixtures = self.fixtures;
        OverviewView {
            cards: fixtures
                .status_cards
                .iter()
                .map(|card| CardView {
                    title: &card.title,
                    value: &card.value,
                    tone: card.status.tone(),
                    trend: card.trend_indicator(),
                })
                .collect(),
            buildings: fixtures.buildings.iter().map(tile).collect(),
            selected: self.selected.map(|b| b.name.as_str()),
            alert_badge: format!("{} New", fixtures.alerts.len()),
            alerts: fixtures.alerts.iter().map(alert_view).collect(),
            quick_actions: &fixtures.quick_actions,
        }
    }
}

fn tile(building: &Building) -> BuildingTile<'_> {
    BuildingTile {
        id: &building.id,
        name: &building.name,
        status: building.status,
        tone: building.status.tone(),
        accent: building.kind.accent(),
        cells: building.size.tile_cells(),
        x: building.position.x,
        y: building.position.y,
    }
}

fn alert_view(alert: &Alert) -> AlertView<'_> {
    AlertView {
        title: &alert.title,
        message: &alert.message,
        severity: alert.severity.label(),
        tone: alert.severity.tone(),
        time: &alert.time,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_trends() {
        let fixtures = Fixtures::bundled().unwrap();
        let view = OverviewPage::new(&fixtures).view();

        let trends: Vec<String> = view
            .cards
            .iter()
            .map(|c| c.trend.map(|t| t.to_string()).unwrap_or_default())
            .collect();
        assert_eq!(trends, vec!["↑ 3%", "↑ 5%", "↓ 2%", "↑ 8%"]);
        assert_eq!(view.cards[3].tone, Tone::Danger);
    }

    #[test]
    fn test_card_without_trend() {
        let card = StatusCard {
            title: "Vacancies".to_string(),
            value: "4".to_string(),
            status: StatusLevel::Good,
            trend: None,
        };
        assert!(card.trend_indicator().is_none());
    }

    #[test]
    fn test_select_building() {
        let fixtures = Fixtures::bundled().unwrap();
        let mut page = OverviewPage::new(&fixtures);

        assert_eq!(page.select_building("3").map(|b| b.name.as_str()), Some("Riverfront Lofts"));
        assert_eq!(page.view().selected, Some("Riverfront Lofts"));

        assert!(page.select_building("42").is_none());
        assert!(page.selected_building().is_none());
    }

    #[test]
    fn test_alerts_and_tiles() {
        let fixtures = Fixtures::bundled().unwrap();
        let view = OverviewPage::new(&fixtures).view();

        assert_eq!(view.alert_badge, "3 New");
        assert_eq!(view.alerts[0].severity, "High Priority");
        assert_eq!(view.alerts[2].tone, Tone::Info);

        let harbor = &view.buildings[1];
        assert_eq!(harbor.accent, Accent::Teal);
        assert_eq!(harbor.cells, 5);
        assert_eq!(harbor.tone, Tone::Warning);
    }
}
