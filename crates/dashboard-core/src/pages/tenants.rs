//! Tenant portal: tenant cards with lease and payment history

use dashboard_types::{PaymentStatus, Status, StatusLevel, Tenant, Tone};
use record_filter::{FilterSpec, FilterState, ALL};
use serde::Serialize;
use tracing::debug;

use super::short_date;
use crate::error::Result;
use crate::fixtures::Fixtures;
use crate::format::count_noun;

pub const BUILDING_FILTER: &str = "building";
pub const STATUS_FILTER: &str = "status";

pub fn filter_spec() -> FilterSpec {
    FilterSpec::new()
        .search(["name", "email", "unit"])
        .category(BUILDING_FILTER, "building")
        .category(STATUS_FILTER, "status")
}

/// Tenant standing as worded on the portal
pub fn standing_label(status: StatusLevel) -> &'static str {
    match status {
        StatusLevel::Good => "Good Standing",
        StatusLevel::Warning => "Warning",
        StatusLevel::Critical => "Critical",
    }
}

/// Status dropdown entries: filter value and label
pub fn status_options() -> Vec<(&'static str, &'static str)> {
    std::iter::once((ALL, "All Statuses"))
        .chain(StatusLevel::ALL.iter().map(|s| (s.as_str(), standing_label(*s))))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaymentRow<'a> {
    pub month: &'a str,
    pub status: PaymentStatus,
    pub label: &'static str,
    pub tone: Tone,
    pub date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TenantCard<'a> {
    pub id: &'a str,
    pub initials: String,
    pub name: &'a str,
    pub email: &'a str,
    pub phone: &'a str,
    pub unit: &'a str,
    pub building: &'a str,
    pub standing: &'static str,
    pub tone: Tone,
    pub lease: String,
    pub rent: &'a str,
    pub maintenance_requests: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payments: Option<Vec<PaymentRow<'a>>>,
}

impl<'a> TenantCard<'a> {
    fn new(tenant: &'a Tenant, with_payments: bool) -> Self {
        TenantCard {
            id: &tenant.id,
            initials: tenant.initials(),
            name: &tenant.name,
            email: &tenant.email,
            phone: &tenant.phone,
            unit: &tenant.unit,
            building: &tenant.building,
            standing: standing_label(tenant.status),
            tone: tenant.status.tone(),
            lease: format!(
                "{} - {}",
                short_date(tenant.lease_start),
                short_date(tenant.lease_end)
            ),
            rent: &tenant.rent,
            maintenance_requests: tenant.maintenance_requests,
            payments: with_payments.then(|| {
                tenant
                    .payment_history
                    .iter()
                    .map(|p| PaymentRow {
                        month: &p.month,
                        status: p.status,
                        label: p.status.label(),
                        tone: p.status.tone(),
                        date: p.date.map(short_date),
                    })
                    .collect()
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TenantsView<'a> {
    pub search: &'a str,
    pub building: &'a str,
    pub status: &'a str,
    pub building_options: Vec<String>,
    pub status_options: Vec<(&'static str, &'static str)>,
    pub summary: String,
    pub tenants: Vec<TenantCard<'a>>,
}

pub struct TenantsPage<'a> {
    fixtures: &'a Fixtures,
    spec: FilterSpec,
    state: FilterState,
    show_payment_history: bool,
}

impl<'a> TenantsPage<'a> {
    pub fn new(fixtures: &'a Fixtures) -> Self {
        let spec = filter_spec();
        let state = spec.state();
        debug!(tenants = fixtures.tenants.len(), "Building tenant portal page");
        Self {
            fixtures,
            spec,
            state,
            show_payment_history: true,
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

    pub fn show_payment_history(&self) -> bool {
        self.show_payment_history
    }

    pub fn set_show_payment_history(&mut self, show: bool) {
        self.show_payment_history = show;
    }

    pub fn toggle_payment_history(&mut self) {
        self.show_payment_history = !self.show_payment_history;
    }

    pub fn building_options(&self) -> Vec<String> {
        record_filter::distinct_values(&self.fixtures.tenants, "building")
    }

    pub fn visible(&self) -> Vec<&'a Tenant> {
        self.spec.filter(&self.fixtures.tenants, &self.state)
    }

    pub fn view(&self) -> TenantsView<'_> {
        let visible = self.visible();
        TenantsView {
            search: self.state.search_text(),
            building: self.state.selection(BUILDING_FILTER),
            status: self.state.selection(STATUS_FILTER),
            building_options: self.building_options(),
            status_options: status_options(),
            summary: format!("Showing {}", count_noun(visible.len(), "tenant")),
            tenants: visible
                .into_iter()
                .map(|t| TenantCard::new(t, self.show_payment_history))
                .collect(),
        }
    }
}
