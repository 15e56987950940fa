//! Typed records and status enums for the property dashboard
//!
//! Records deserialize from the fixture JSON (camelCase keys, original enum
//! spellings) and implement [`record_filter::Record`] under the same field
//! names, so pages can filter them generically.

pub mod admin;
pub mod energy;
pub mod maintenance;
pub mod property;
pub mod simulation;
pub mod status;
pub mod tenant;
pub mod unit;

pub use admin::{AdminUser, UserRole, UserStatus};
pub use energy::{BuildingEfficiency, Share, Utility, UtilityUsage};
pub use maintenance::{MaintenanceIssue, Prediction};
pub use property::{Accent, Alert, Building, BuildingKind, BuildingSize, Position, QuickAction};
pub use simulation::{Metric, SimulationKind, SimulationResult};
pub use status::{
    IssueStatus, ParseEnumError, PaymentStatus, Priority, Severity, Status, StatusLevel, Tone,
    UnitStatus,
};
pub use tenant::{Payment, Tenant};
pub use unit::Unit;
