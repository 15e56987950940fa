//! Energy & utilities: per-utility usage detail and building efficiency

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Duration, NaiveDate};
use dashboard_types::{BuildingEfficiency, Share, Status, StatusLevel, Tone, Utility, UtilityUsage};
use serde::Serialize;
use tracing::debug;

use crate::error::{DashboardError, Result};
use crate::fixtures::Fixtures;
use crate::format::{capitalize, signed_percent, Currency, TrendIndicator};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Timeframe {
    Day,
    Week,
    #[default]
    Month,
    Quarter,
    Year,
}

impl Timeframe {
    pub const ALL: [Timeframe; 5] = [
        Timeframe::Day,
        Timeframe::Week,
        Timeframe::Month,
        Timeframe::Quarter,
        Timeframe::Year,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Timeframe::Day => "day",
            Timeframe::Week => "week",
            Timeframe::Month => "month",
            Timeframe::Quarter => "quarter",
            Timeframe::Year => "year",
        }
    }

    /// The period containing `date`, e.g. "May 5 - May 11, 2025" for a week
    pub fn period_label(&self, date: NaiveDate) -> String {
        match self {
            Timeframe::Day => date.format("%b %-d, %Y").to_string(),
            Timeframe::Week => {
                let offset = i64::from(date.weekday().num_days_from_monday());
                let monday = date - Duration::days(offset);
                let sunday = monday + Duration::days(6);
                format!("{} - {}", monday.format("%b %-d"), sunday.format("%b %-d, %Y"))
            }
            Timeframe::Month => date.format("%B %Y").to_string(),
            Timeframe::Quarter => format!("Q{} {}", date.month0() / 3 + 1, date.year()),
            Timeframe::Year => date.year().to_string(),
        }
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Timeframe {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Timeframe::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Unknown timeframe: {}", s))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UtilitySummary<'a> {
    pub utility: Utility,
    pub title: &'static str,
    pub current: &'a str,
    pub trend: TrendIndicator,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UsageDetail<'a> {
    pub title: String,
    pub period: String,
    pub timeframe: Timeframe,
    pub current: &'a str,
    pub previous: &'a str,
    pub change: TrendIndicator,
    pub cost: &'a str,
    pub prev_cost: &'a str,
    pub savings: Currency,
    pub breakdown: &'a [Share],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EfficiencyRow<'a> {
    pub name: &'a str,
    pub efficiency: u8,
    pub status: StatusLevel,
    pub tone: Tone,
    pub trend: String,
    pub trend_tone: Tone,
    pub recommendations: &'a [String],
}

impl<'a> EfficiencyRow<'a> {
    fn new(building: &'a BuildingEfficiency) -> Self {
        EfficiencyRow {
            name: &building.name,
            efficiency: building.efficiency,
            status: building.status,
            tone: building.status.tone(),
            trend: signed_percent(building.trend),
            trend_tone: TrendIndicator::new(f64::from(building.trend)).tone,
            recommendations: &building.recommendations,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnergyView<'a> {
    pub utilities: Vec<UtilitySummary<'a>>,
    pub detail: UsageDetail<'a>,
    pub buildings: Vec<EfficiencyRow<'a>>,
}

pub struct EnergyPage<'a> {
    fixtures: &'a Fixtures,
    utility: Utility,
    timeframe: Timeframe,
}

impl<'a> EnergyPage<'a> {
    pub fn new(fixtures: &'a Fixtures) -> Self {
        debug!(utilities = fixtures.utilities.len(), "Building energy page");
        Self {
            fixtures,
            utility: Utility::Electricity,
            timeframe: Timeframe::default(),
        }
    }

    pub fn utility(&self) -> Utility {
        self.utility
    }

    pub fn set_utility(&mut self, utility: Utility) {
        self.utility = utility;
    }

    /// Select a utility by name
    pub fn select_utility(&mut self, name: &str) -> Result<()> {
        self.utility = name
            .parse()
            .map_err(|_| DashboardError::UnknownUtility(name.to_string()))?;
        Ok(())
    }

    pub fn timeframe(&self) -> Timeframe {
        self.timeframe
    }

    pub fn set_timeframe(&mut self, timeframe: Timeframe) {
        self.timeframe = timeframe;
    }

    pub fn period_label(&self) -> String {
        self.timeframe.period_label(self.fixtures.as_of)
    }

    fn usage(&self) -> Result<&'a UtilityUsage> {
        self.fixtures
            .utility(self.utility)
            .ok_or_else(|| DashboardError::UnknownUtility(self.utility.to_string()))
    }

    /// Previous cost minus current cost for the selected utility
    pub fn savings(&self) -> Result<Currency> {
        let usage = self.usage()?;
        let prev: Currency = usage.prev_cost.parse()?;
        let cost: Currency = usage.cost.parse()?;
        prev.checked_sub(cost).ok_or_else(|| {
            DashboardError::InvalidAmount(format!("{} - {}", usage.prev_cost, usage.cost))
        })
    }

    pub fn view(&self) -> Result<EnergyView<'a>> {
        let usage = self.usage()?;
        let detail = UsageDetail {
            title: format!("{} Usage Details", capitalize(self.utility.as_str())),
            period: self.period_label(),
            timeframe: self.timeframe,
            current: &usage.current,
            previous: &usage.previous,
            change: TrendIndicator::consumption(usage.trend),
            cost: &usage.cost,
            prev_cost: &usage.prev_cost,
            savings: self.savings()?,
            breakdown: &usage.breakdown,
        };

        Ok(EnergyView {
            utilities: self
                .fixtures
                .utilities
                .iter()
                .map(|u| UtilitySummary {
                    utility: u.utility,
                    title: u.utility.title(),
                    current: &u.current,
                    trend: TrendIndicator::consumption(u.trend),
                    selected: u.utility == self.utility,
                })
                .collect(),
            detail,
            buildings: self
                .fixtures
                .building_efficiency
                .iter()
                .map(EfficiencyRow::new)
                .collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn may_11() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, 11).unwrap()
    }

    #[test]
    fn test_period_labels() {
        let labels: Vec<String> = Timeframe::ALL.iter().map(|t| t.period_label(may_11())).collect();
        assert_eq!(
            labels,
            vec!["May 11, 2025", "May 5 - May 11, 2025", "May 2025", "Q2 2025", "2025"]
        );
    }

    #[test]
    fn test_week_spans_month_boundary() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        assert_eq!(Timeframe::Week.period_label(date), "May 26 - Jun 1, 2025");
    }

    #[test]
    fn test_savings_per_utility() {
        let fixtures = Fixtures::bundled().unwrap();
        let mut page = EnergyPage::new(&fixtures);
        assert_eq!(page.savings().unwrap().to_string(), "$105.00");

        page.set_utility(Utility::Water);
        assert_eq!(page.savings().unwrap().to_string(), "$154.00");

        page.select_utility("GAS").unwrap();
        assert_eq!(page.savings().unwrap().to_string(), "$384.00");
    }

    #[test]
    fn test_unknown_utility() {
        let fixtures = Fixtures::bundled().unwrap();
        let mut page = EnergyPage::new(&fixtures);
        let err = page.select_utility("steam").unwrap_err();
        assert!(matches!(err, DashboardError::UnknownUtility(ref s) if s == "steam"));
        assert_eq!(page.utility(), Utility::Electricity);
    }

    #[test]
    fn test_unparseable_cost_is_an_error() {
        let mut fixtures = Fixtures::bundled().unwrap();
        fixtures.utilities[0].cost = "about $1,700".to_string();
        let page = EnergyPage::new(&fixtures);

        assert!(matches!(page.savings(), Err(DashboardError::InvalidAmount(_))));
        assert!(page.view().is_err());
    }

    #[test]
    fn test_savings_beyond_range_is_an_error() {
        let mut fixtures = Fixtures::bundled().unwrap();
        fixtures.utilities[0].prev_cost = "$90,000,000,000,000,000.00".to_string();
        fixtures.utilities[0].cost = "-$90,000,000,000,000,000.00".to_string();
        let page = EnergyPage::new(&fixtures);

        assert!(matches!(page.savings(), Err(DashboardError::InvalidAmount(_))));
        assert!(page.view().is_err());
    }

    #[test]
    fn test_missing_utility_data() {
        let fixtures = Fixtures::default();
        let page = EnergyPage::new(&fixtures);
        assert!(matches!(page.view(), Err(DashboardError::UnknownUtility(_))));
    }

    #[test]
    fn test_view() {
        let fixtures = Fixtures::bundled().unwrap();
        let mut page = EnergyPage::new(&fixtures);
        page.set_timeframe(Timeframe::Quarter);
        let view = page.view().unwrap();

        assert_eq!(view.detail.title, "Electricity Usage Details");
        assert_eq!(view.detail.period, "Q2 2025");
        assert_eq!(view.detail.change.to_string(), "↓ 5.7%");
        assert_eq!(view.detail.change.tone, Tone::Success);
        assert_eq!(view.utilities.iter().filter(|u| u.selected).count(), 1);

        let trends: Vec<&str> = view.buildings.iter().map(|b| b.trend.as_str()).collect();
        assert_eq!(trends, vec!["+3%", "-2%", "+5%", "-8%", "0%"]);
        assert_eq!(view.buildings[4].trend_tone, Tone::Neutral);
    }

    #[test]
    fn test_parse_timeframe() {
        assert_eq!("Week".parse::<Timeframe>().unwrap(), Timeframe::Week);
        assert!("decade".parse::<Timeframe>().is_err());
    }
}
