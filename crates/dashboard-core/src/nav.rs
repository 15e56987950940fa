//! Sidebar navigation

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    Overview,
    Units,
    Maintenance,
    Energy,
    Tenants,
    Admin,
    Simulation,
}

impl Page {
    pub const ALL: [Page; 7] = [
        Page::Overview,
        Page::Units,
        Page::Maintenance,
        Page::Energy,
        Page::Tenants,
        Page::Admin,
        Page::Simulation,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Page::Overview => "/",
            Page::Units => "/units",
            Page::Maintenance => "/maintenance",
            Page::Energy => "/energy",
            Page::Tenants => "/tenants",
            Page::Admin => "/admin",
            Page::Simulation => "/simulation",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Page::Overview => "Dashboard",
            Page::Units => "Unit Manager",
            Page::Maintenance => "Maintenance AI",
            Page::Energy => "Energy & Utilities",
            Page::Tenants => "Tenant Portal",
            Page::Admin => "Admin Dashboard",
            Page::Simulation => "Simulation Engine",
        }
    }

    pub fn section(&self) -> NavSection {
        match self {
            Page::Admin | Page::Simulation => NavSection::System,
            _ => NavSection::Main,
        }
    }

    /// Exact path match; `/dashboard` is an alias for the overview
    pub fn from_path(path: &str) -> Option<Page> {
        if path == "/dashboard" {
            return Some(Page::Overview);
        }
        Page::ALL.into_iter().find(|page| page.path() == path)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum NavSection {
    Main,
    System,
}

impl NavSection {
    pub fn title(&self) -> &'static str {
        match self {
            NavSection::Main => "Main",
            NavSection::System => "System",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavEntry {
    pub section: NavSection,
    pub label: &'static str,
    pub path: &'static str,
    pub active: bool,
}

/// Sidebar entries in display order, marking the one at `current_path`
pub fn sidebar(current_path: &str) -> Vec<NavEntry> {
    Page::ALL
        .iter()
        .map(|page| NavEntry {
            section: page.section(),
            label: page.label(),
            path: page.path(),
            active: page.path() == current_path,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_one_active_entry() {
        let entries = sidebar("/energy");
        let active: Vec<_> = entries.iter().filter(|e| e.active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].label, "Energy & Utilities");
    }

    #[test]
    fn test_unknown_path_has_no_active_entry() {
        assert!(sidebar("/nowhere").iter().all(|e| !e.active));
        // Only the exact path counts
        assert!(sidebar("/units/101").iter().all(|e| !e.active));
    }

    #[test]
    fn test_sections() {
        let entries = sidebar("/");
        let system: Vec<_> = entries
            .iter()
            .filter(|e| e.section == NavSection::System)
            .map(|e| e.path)
            .collect();
        assert_eq!(system, vec!["/admin", "/simulation"]);
        assert!(entries[0].active);
    }

    #[test]
    fn test_from_path() {
        assert_eq!(Page::from_path("/tenants"), Some(Page::Tenants));
        assert_eq!(Page::from_path("/dashboard"), Some(Page::Overview));
        assert_eq!(Page::from_path("/tenants/"), None);
    }
}
