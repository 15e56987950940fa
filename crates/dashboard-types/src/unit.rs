use chrono::NaiveDate;
use record_filter::{FieldValue, Record};
use serde::{Deserialize, Serialize};

use crate::status::UnitStatus;

/// Amenities shown on a unit card before collapsing into "+n"
pub const AMENITY_PREVIEW: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Unit {
    pub id: String,
    pub building: String,
    pub floorplan: String,
    pub status: UnitStatus,
    pub tenant: Option<String>,
    pub rent: String,
    pub next_payment: Option<NaiveDate>,
    pub sqft: u32,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub maintenance_requests: u32,
}

impl Unit {
    /// The first few amenities and how many were left out
    pub fn amenity_preview(&self) -> (&[String], usize) {
        let shown = self.amenities.len().min(AMENITY_PREVIEW);
        (&self.amenities[..shown], self.amenities.len() - shown)
    }
}

impl Record for Unit {
    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "id" => Some(self.id.as_str().into()),
            "building" => Some(self.building.as_str().into()),
            "floorplan" => Some(self.floorplan.as_str().into()),
            "status" => Some(self.status.as_str().into()),
            "tenant" => self.tenant.as_deref().map(FieldValue::from),
            "rent" => Some(self.rent.as_str().into()),
            "nextPayment" => self.next_payment.map(|d| d.to_string().into()),
            "sqft" => Some(self.sqft.into()),
            "maintenanceRequests" => Some(self.maintenance_requests.into()),
            _ => None,
        }
    }
}
