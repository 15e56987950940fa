use chrono::NaiveDate;
use record_filter::{FieldValue, Record};
use serde::{Deserialize, Serialize};

use crate::status::{PaymentStatus, StatusLevel};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tenant {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub unit: String,
    pub building: String,
    pub lease_start: NaiveDate,
    pub lease_end: NaiveDate,
    pub rent: String, // Display text, e.g. "$1,200/mo"
    pub status: StatusLevel,
    #[serde(default)]
    pub payment_history: Vec<Payment>,
    #[serde(default)]
    pub maintenance_requests: u32,
}

/// One month of rent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub month: String,
    pub status: PaymentStatus,
    pub date: Option<NaiveDate>, // None while pending or unpaid
}

impl Tenant {
    /// Uppercased first letter of each space-separated word
    pub fn initials(&self) -> String {
        self.name
            .split(' ')
            .filter_map(|part| part.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }
}

impl Record for Tenant {
    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "id" => Some(self.id.as_str().into()),
            "name" => Some(self.name.as_str().into()),
            "email" => Some(self.email.as_str().into()),
            "phone" => Some(self.phone.as_str().into()),
            "unit" => Some(self.unit.as_str().into()),
            "building" => Some(self.building.as_str().into()),
            "leaseStart" => Some(self.lease_start.to_string().into()),
            "leaseEnd" => Some(self.lease_end.to_string().into()),
            "rent" => Some(self.rent.as_str().into()),
            "status" => Some(self.status.as_str().into()),
            "maintenanceRequests" => Some(self.maintenance_requests.into()),
            _ => None,
        }
    }
}
