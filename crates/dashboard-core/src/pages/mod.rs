//! One model per dashboard page
//!
//! A page model borrows the fixtures, owns the page's local UI state and
//! produces a serializable view. Nothing here renders; the CLI decides how a
//! view is printed.

pub mod admin;
pub mod energy;
pub mod maintenance;
pub mod overview;
pub mod simulation;
pub mod tenants;
pub mod units;

pub use admin::{AdminPage, AdminTab, Setting, Settings};
pub use energy::{EnergyPage, Timeframe};
pub use maintenance::MaintenancePage;
pub use overview::{OverviewPage, StatusCard};
pub use simulation::{OptimizeFor, SimulationPage, SimulationParams, SimulationPhase};
pub use tenants::TenantsPage;
pub use units::UnitsPage;

/// Short date as shown on cards, e.g. "May 15, 2025"
pub(crate) fn short_date(date: chrono::NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}
