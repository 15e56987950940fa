//! Unit manager: searchable unit cards with building and status filters

use dashboard_types::{Status, Tone, Unit, UnitStatus};
use record_filter::{FilterSpec, FilterState};
use serde::Serialize;
use tracing::debug;

use super::short_date;
use crate::error::Result;
use crate::fixtures::Fixtures;

pub const BUILDING_FILTER: &str = "building";
pub const STATUS_FILTER: &str = "status";

/// Search on unit number, building and tenant; filter on building and status
pub fn filter_spec() -> FilterSpec {
    FilterSpec::new()
        .search(["id", "building", "tenant"])
        .category(BUILDING_FILTER, "building")
        .category(STATUS_FILTER, "status")
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnitCard<'a> {
    pub id: &'a str,
    pub building: &'a str,
    pub floorplan: &'a str,
    pub status: UnitStatus,
    pub tone: Tone,
    pub tenant: &'a str,
    pub rent: &'a str,
    pub next_payment: Option<String>,
    pub size: String,
    pub amenities: Vec<&'a str>,
    pub more_amenities: Option<String>,
    pub maintenance_requests: Option<u32>,
}

impl<'a> UnitCard<'a> {
    fn new(unit: &'a Unit) -> Self {
        let (shown, hidden) = unit.amenity_preview();
        UnitCard {
            id: &unit.id,
            building: &unit.building,
            floorplan: &unit.floorplan,
            status: unit.status,
            tone: unit.status.tone(),
            tenant: unit.tenant.as_deref().unwrap_or("None"),
            rent: &unit.rent,
            next_payment: unit.next_payment.map(short_date),
            size: format!("{} sqft", unit.sqft),
            amenities: shown.iter().map(String::as_str).collect(),
            more_amenities: (hidden > 0).then(|| format!("+{}", hidden)),
            maintenance_requests: (unit.maintenance_requests > 0)
                .then_some(unit.maintenance_requests),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnitsView<'a> {
    pub search: &'a str,
    pub building: &'a str,
    pub status: &'a str,
    pub building_options: Vec<String>,
    pub status_options: Vec<String>,
    pub units: Vec<UnitCard<'a>>,
}

pub struct UnitsPage<'a> {
    fixtures: &'a Fixtures,
    spec: FilterSpec,
    state: FilterState,
}

impl<'a> UnitsPage<'a> {
    pub fn new(fixtures: &'a Fixtures) -> Self {
        let spec = filter_spec();
        let state = spec.state();
        debug!(units = fixtures.units.len(), "Building unit manager page");
        Self {
            fixtures,
            spec,
            state,
        }
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.state.set_search(text);
    }

    pub fn select(&mut self, filter: &str, value: impl Into<String>) -> Result<()> {
        self.state.select(filter, value)?;
        Ok(())
    }

    pub fn clear_filters(&mut self) {
        self.state.clear();
    }

    pub fn building_options(&self) -> Vec<String> {
        record_filter::distinct_values(&self.fixtures.units, "building")
    }

    pub fn status_options(&self) -> Vec<String> {
        record_filter::distinct_values(&self.fixtures.units, "status")
    }

    pub fn visible(&self) -> Vec<&'a Unit> {
        self.spec.filter(&self.fixtures.units, &self.state)
    }

    pub fn view(&self) -> UnitsView<'_> {
        UnitsView {
            search: self.state.search_text(),
            building: self.state.selection(BUILDING_FILTER),
            status: self.state.selection(STATUS_FILTER),
            building_options: self.building_options(),
            status_options: self.status_options(),
            units: self.visible().into_iter().map(UnitCard::new).collect(),
        }
    }
}
