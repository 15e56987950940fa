use chrono::{DateTime, Utc};
use record_filter::{FieldValue, Record};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserRole {
    Admin,
    #[serde(rename = "Property Manager")]
    PropertyManager,
    Maintenance,
    Finance,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "Admin",
            UserRole::PropertyManager => "Property Manager",
            UserRole::Maintenance => "Maintenance",
            UserRole::Finance => "Finance",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Active,
    Inactive,
}

impl UserStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Active => "active",
            UserStatus::Inactive => "inactive",
        }
    }
}

/// A dashboard operator account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub last_active: DateTime<Utc>,
    pub status: UserStatus,
}

impl Record for AdminUser {
    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "id" => Some(self.id.as_str().into()),
            "name" => Some(self.name.as_str().into()),
            "email" => Some(self.email.as_str().into()),
            "role" => Some(self.role.as_str().into()),
            "lastActive" => Some(self.last_active.to_rfc3339().into()),
            "status" => Some(self.status.as_str().into()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_with_space_round_trips() {
        let json = r#"{"id": "U002", "name": "Maria Garcia", "email": "maria.garcia@simcity.com",
            "role": "Property Manager", "lastActive": "2025-05-10T16:45:22Z", "status": "active"}"#;
        let user: AdminUser = serde_json::from_str(json).unwrap();

        assert_eq!(user.role, UserRole::PropertyManager);
        assert_eq!(user.field("role").unwrap().as_text(), "Property Manager");
        assert_eq!(user.status, UserStatus::Active);
    }
}
