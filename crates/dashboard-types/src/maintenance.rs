use chrono::NaiveDate;
use record_filter::{FieldValue, Record};
use serde::{Deserialize, Serialize};

use crate::status::{IssueStatus, Priority};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceIssue {
    pub id: String,
    pub building: String,
    pub unit: String,
    pub issue: String,
    pub status: IssueStatus,
    pub reported_by: String,
    pub reported_date: NaiveDate,
    pub estimated_completion: NaiveDate,
    pub assigned_to: String,
    pub priority: Priority,
    pub details: String,
    pub predicted_cost: String,
}

impl Record for MaintenanceIssue {
    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "id" => Some(self.id.as_str().into()),
            "building" => Some(self.building.as_str().into()),
            "unit" => Some(self.unit.as_str().into()),
            "issue" => Some(self.issue.as_str().into()),
            "status" => Some(self.status.as_str().into()),
            "reportedBy" => Some(self.reported_by.as_str().into()),
            "reportedDate" => Some(self.reported_date.to_string().into()),
            "estimatedCompletion" => Some(self.estimated_completion.to_string().into()),
            "assignedTo" => Some(self.assigned_to.as_str().into()),
            "priority" => Some(self.priority.as_str().into()),
            "details" => Some(self.details.as_str().into()),
            "predictedCost" => Some(self.predicted_cost.as_str().into()),
            _ => None,
        }
    }
}

/// A fixed AI maintenance forecast
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prediction {
    pub id: String,
    pub building: String,
    pub system: String,
    pub prediction: String,
    pub confidence: u8, // percent
    pub estimated_cost: String,
    pub details: String,
}

impl Record for Prediction {
    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "id" => Some(self.id.as_str().into()),
            "building" => Some(self.building.as_str().into()),
            "system" => Some(self.system.as_str().into()),
            "prediction" => Some(self.prediction.as_str().into()),
            "confidence" => Some(u32::from(self.confidence).into()),
            "estimatedCost" => Some(self.estimated_cost.as_str().into()),
            "details" => Some(self.details.as_str().into()),
            _ => None,
        }
    }
}
