//! Dashboard Core - page models for the property dashboard
//!
//! This crate provides:
//! - Fixture loading (bundled JSON or a caller-supplied file)
//! - One page model per dashboard page, each owning its local UI state
//! - Trend, currency and label formatting shared by the pages
//! - Sidebar navigation

pub mod error;
pub mod fixtures;
pub mod format;
pub mod nav;
pub mod pages;

pub use error::{DashboardError, Result};
pub use fixtures::Fixtures;
pub use format::{Currency, TrendIndicator};
pub use nav::{NavEntry, NavSection, Page};
pub use pages::{
    AdminPage, AdminTab, EnergyPage, MaintenancePage, OptimizeFor, OverviewPage, Setting,
    Settings, SimulationPage, SimulationParams, SimulationPhase, StatusCard, TenantsPage,
    Timeframe, UnitsPage,
};
