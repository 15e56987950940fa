//! Buildings, alerts and overview widgets

use record_filter::{FieldValue, Record};
use serde::{Deserialize, Serialize};

use crate::status::{Severity, StatusLevel};

/// Accent colour for tiles and action buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    Blue,
    Teal,
    Green,
    Orange,
    Gray,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildingKind {
    Residential,
    Commercial,
    Industrial,
}

impl BuildingKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BuildingKind::Residential => "residential",
            BuildingKind::Commercial => "commercial",
            BuildingKind::Industrial => "industrial",
        }
    }

    pub fn accent(&self) -> Accent {
        match self {
            BuildingKind::Residential => Accent::Blue,
            BuildingKind::Commercial => Accent::Teal,
            BuildingKind::Industrial => Accent::Orange,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildingSize {
    Small,
    Medium,
    Large,
}

impl BuildingSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            BuildingSize::Small => "small",
            BuildingSize::Medium => "medium",
            BuildingSize::Large => "large",
        }
    }

    /// Tile edge on the city grid, in grid cells
    pub fn tile_cells(&self) -> u8 {
        match self {
            BuildingSize::Small => 4,
            BuildingSize::Medium => 5,
            BuildingSize::Large => 6,
        }
    }
}

/// Tile centre on the city grid, as percentages of width and height
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub x: u8,
    pub y: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Building {
    pub id: String,
    pub name: String,
    pub status: StatusLevel,
    #[serde(rename = "type")]
    pub kind: BuildingKind,
    pub size: BuildingSize,
    pub position: Position,
}

impl Record for Building {
    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "id" => Some(self.id.as_str().into()),
            "name" => Some(self.name.as_str().into()),
            "status" => Some(self.status.as_str().into()),
            "type" => Some(self.kind.as_str().into()),
            "size" => Some(self.size.as_str().into()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub id: String,
    pub title: String,
    pub message: String,
    pub severity: Severity,
    pub time: String, // Relative display text, e.g. "15 min ago"
}

impl Record for Alert {
    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "id" => Some(self.id.as_str().into()),
            "title" => Some(self.title.as_str().into()),
            "message" => Some(self.message.as_str().into()),
            "severity" => Some(self.severity.as_str().into()),
            "time" => Some(self.time.as_str().into()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuickAction {
    pub id: String,
    pub title: String,
    pub accent: Accent,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_building_uses_type_key() {
        let json = r#"{"id": "2", "name": "Harbor Plaza", "status": "warning",
            "type": "commercial", "size": "medium", "position": {"x": 50, "y": 60}}"#;
        let b: Building = serde_json::from_str(json).unwrap();

        assert_eq!(b.kind, BuildingKind::Commercial);
        assert_eq!(b.kind.accent(), Accent::Teal);
        assert_eq!(b.field("type").unwrap().as_text(), "commercial");
        assert_eq!(b.position, Position { x: 50, y: 60 });
    }

    #[test]
    fn test_tile_sizes_grow() {
        assert!(BuildingSize::Small.tile_cells() < BuildingSize::Medium.tile_cells());
        assert!(BuildingSize::Medium.tile_cells() < BuildingSize::Large.tile_cells());
    }
}
