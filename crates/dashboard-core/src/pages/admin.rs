//! Admin dashboard: settings toggles and the user list

use std::str::FromStr;

use dashboard_types::{AdminUser, UserRole, UserStatus};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::DashboardError;
use crate::fixtures::Fixtures;
use crate::format::capitalize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AdminTab {
    #[default]
    General,
    Users,
    Security,
    Api,
    Notifications,
    Billing,
}

impl AdminTab {
    pub const ALL: [AdminTab; 6] = [
        AdminTab::General,
        AdminTab::Users,
        AdminTab::Security,
        AdminTab::Api,
        AdminTab::Notifications,
        AdminTab::Billing,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            AdminTab::General => "general",
            AdminTab::Users => "users",
            AdminTab::Security => "security",
            AdminTab::Api => "api",
            AdminTab::Notifications => "notifications",
            AdminTab::Billing => "billing",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AdminTab::General => "General Settings",
            AdminTab::Users => "User Management",
            AdminTab::Security => "Security",
            AdminTab::Api => "API Access",
            AdminTab::Notifications => "Notifications",
            AdminTab::Billing => "Billing",
        }
    }
}

impl FromStr for AdminTab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AdminTab::ALL
            .into_iter()
            .find(|t| t.id().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Unknown tab: {}", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingGroup {
    System,
    Application,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Setting {
    EmailNotifications,
    SmsNotifications,
    DataBackup,
    MaintenanceMode,
    AutoApproveRequests,
    TwoFactorAuth,
    DarkMode,
    AnalyticsTracking,
}

impl Setting {
    pub const ALL: [Setting; 8] = [
        Setting::EmailNotifications,
        Setting::SmsNotifications,
        Setting::DataBackup,
        Setting::MaintenanceMode,
        Setting::AutoApproveRequests,
        Setting::TwoFactorAuth,
        Setting::DarkMode,
        Setting::AnalyticsTracking,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Setting::EmailNotifications => "email_notifications",
            Setting::SmsNotifications => "sms_notifications",
            Setting::DataBackup => "data_backup",
            Setting::MaintenanceMode => "maintenance_mode",
            Setting::AutoApproveRequests => "auto_approve_requests",
            Setting::TwoFactorAuth => "two_factor_auth",
            Setting::DarkMode => "dark_mode",
            Setting::AnalyticsTracking => "analytics_tracking",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Setting::EmailNotifications => "Email Notifications",
            Setting::SmsNotifications => "SMS Notifications",
            Setting::DataBackup => "Automated Data Backup",
            Setting::MaintenanceMode => "Maintenance Mode",
            Setting::AutoApproveRequests => "Auto-approve Maintenance Requests",
            Setting::TwoFactorAuth => "Two-Factor Authentication",
            Setting::DarkMode => "Dark Mode",
            Setting::AnalyticsTracking => "Analytics Tracking",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Setting::EmailNotifications => "Receive system notifications via email",
            Setting::SmsNotifications => "Receive system notifications via SMS",
            Setting::DataBackup => "Daily automated backups of all system data",
            Setting::MaintenanceMode => "Put the system in maintenance mode",
            Setting::AutoApproveRequests => {
                "Automatically approve low-priority maintenance requests"
            }
            Setting::TwoFactorAuth => "Require two-factor authentication for all admin users",
            Setting::DarkMode => "Use dark mode interface",
            Setting::AnalyticsTracking => "Enable usage analytics tracking",
        }
    }

    pub fn group(&self) -> SettingGroup {
        match self {
            Setting::TwoFactorAuth | Setting::DarkMode | Setting::AnalyticsTracking => {
                SettingGroup::Application
            }
            _ => SettingGroup::System,
        }
    }
}

impl FromStr for Setting {
    type Err = DashboardError;

    /// Accepts `dark_mode`, `dark-mode` or `darkMode`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .flat_map(char::to_lowercase)
            .collect();
        Setting::ALL
            .into_iter()
            .find(|setting| setting.key().replace('_', "") == wanted)
            .ok_or_else(|| DashboardError::UnknownSetting(s.to_string()))
    }
}

/// On/off state of every admin setting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub email_notifications: bool,
    pub sms_notifications: bool,
    pub data_backup: bool,
    pub maintenance_mode: bool,
    pub auto_approve_requests: bool,
    pub two_factor_auth: bool,
    pub dark_mode: bool,
    pub analytics_tracking: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            email_notifications: true,
            sms_notifications: false,
            data_backup: true,
            maintenance_mode: false,
            auto_approve_requests: false,
            two_factor_auth: true,
            dark_mode: true,
            analytics_tracking: true,
        }
    }
}

impl Settings {
    fn slot(&mut self, setting: Setting) -> &mut bool {
        match setting {
            Setting::EmailNotifications => &mut self.email_notifications,
            Setting::SmsNotifications => &mut self.sms_notifications,
            Setting::DataBackup => &mut self.data_backup,
            Setting::MaintenanceMode => &mut self.maintenance_mode,
            Setting::AutoApproveRequests => &mut self.auto_approve_requests,
            Setting::TwoFactorAuth => &mut self.two_factor_auth,
            Setting::DarkMode => &mut self.dark_mode,
            Setting::AnalyticsTracking => &mut self.analytics_tracking,
        }
    }

    pub fn get(&self, setting: Setting) -> bool {
        match setting {
            Setting::EmailNotifications => self.email_notifications,
            Setting::SmsNotifications => self.sms_notifications,
            Setting::DataBackup => self.data_backup,
            Setting::MaintenanceMode => self.maintenance_mode,
            Setting::AutoApproveRequests => self.auto_approve_requests,
            Setting::TwoFactorAuth => self.two_factor_auth,
            Setting::DarkMode => self.dark_mode,
            Setting::AnalyticsTracking => self.analytics_tracking,
        }
    }

    /// Flip one setting, returning its new value
    pub fn toggle(&mut self, setting: Setting) -> bool {
        let slot = self.slot(setting);
        *slot = !*slot;
        *slot
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TabEntry {
    pub tab: AdminTab,
    pub label: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SettingRow {
    pub setting: Setting,
    pub title: &'static str,
    pub description: &'static str,
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserRow<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub role: UserRole,
    pub status: UserStatus,
    pub last_active: String,
    pub action: &'static str,
}

impl<'a> UserRow<'a> {
    fn new(user: &'a AdminUser) -> Self {
        UserRow {
            name: &user.name,
            email: &user.email,
            role: user.role,
            status: user.status,
            last_active: user.last_active.format("%Y-%m-%d %H:%M UTC").to_string(),
            action: match user.status {
                UserStatus::Active => "Deactivate",
                UserStatus::Inactive => "Activate",
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum AdminContent<'a> {
    General {
        system: Vec<SettingRow>,
        application: Vec<SettingRow>,
    },
    Users {
        users: Vec<UserRow<'a>>,
    },
    Placeholder {
        message: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdminView<'a> {
    pub tabs: Vec<TabEntry>,
    pub content: AdminContent<'a>,
}

pub struct AdminPage<'a> {
    fixtures: &'a Fixtures,
    tab: AdminTab,
    settings: Settings,
}

impl<'a> AdminPage<'a> {
    pub fn new(fixtures: &'a Fixtures) -> Self {
        Self::with_settings(fixtures, Settings::default())
    }

    pub fn with_settings(fixtures: &'a Fixtures, settings: Settings) -> Self {
        debug!(users = fixtures.users.len(), "Building admin page");
        Self {
            fixtures,
            tab: AdminTab::default(),
            settings,
        }
    }

    pub fn tab(&self) -> AdminTab {
        self.tab
    }

    pub fn set_tab(&mut self, tab: AdminTab) {
        self.tab = tab;
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn toggle(&mut self, setting: Setting) -> bool {
        let enabled = self.settings.toggle(setting);
        debug!(setting = setting.key(), enabled, "Setting toggled");
        enabled
    }

    fn setting_rows(&self, group: SettingGroup) -> Vec<SettingRow> {
        Setting::ALL
            .into_iter()
            .filter(|s| s.group() == group)
            .map(|s| SettingRow {
                setting: s,
                title: s.title(),
                description: s.description(),
                enabled: self.settings.get(s),
            })
            .collect()
    }

    pub fn view(&self) -> AdminView<'a> {
        let content = match self.tab {
            AdminTab::General => AdminContent::General {
                system: self.setting_rows(SettingGroup::System),
                application: self.setting_rows(SettingGroup::Application),
            },
            AdminTab::Users => AdminContent::Users {
                users: self.fixtures.users.iter().map(UserRow::new).collect(),
            },
            other => AdminContent::Placeholder {
                message: format!(
                    "The {} section is under development and will be available in the next update.",
                    capitalize(other.id())
                ),
            },
        };

        AdminView {
            tabs: AdminTab::ALL
                .into_iter()
                .map(|tab| TabEntry {
                    tab,
                    label: tab.label(),
                    active: tab == self.tab,
                })
                .collect(),
            content,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        let enabled: Vec<&str> = Setting::ALL
            .into_iter()
            .filter(|s| settings.get(*s))
            .map(|s| s.key())
            .collect();
        assert_eq!(
            enabled,
            vec![
                "email_notifications",
                "data_backup",
                "two_factor_auth",
                "dark_mode",
                "analytics_tracking"
            ]
        );
    }

    #[test]
    fn test_toggle_flips_one_setting() {
        let fixtures = Fixtures::default();
        let mut page = AdminPage::new(&fixtures);
        let before = *page.settings();

        assert!(page.toggle(Setting::MaintenanceMode));
        assert!(page.settings().maintenance_mode);
        assert!(!page.toggle(Setting::MaintenanceMode));
        assert_eq!(*page.settings(), before);
    }

    #[test]
    fn test_parse_setting_names() {
        assert_eq!("dark_mode".parse::<Setting>().unwrap(), Setting::DarkMode);
        assert_eq!("darkMode".parse::<Setting>().unwrap(), Setting::DarkMode);
        assert_eq!("two-factor-auth".parse::<Setting>().unwrap(), Setting::TwoFactorAuth);

        let err = "telemetry".parse::<Setting>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown setting: telemetry");
    }

    #[test]
    fn test_general_tab_groups_settings() {
        let fixtures = Fixtures::default();
        let view = AdminPage::new(&fixtures).view();
        match view.content {
            AdminContent::General { system, application } => {
                assert_eq!(system.len(), 5);
                assert_eq!(application.len(), 3);
                assert_eq!(application[0].title, "Two-Factor Authentication");
            }
            other => panic!("unexpected content: {:?}", other),
        }
        assert!(view.tabs[0].active);
    }

    #[test]
    fn test_users_tab() {
        let fixtures = Fixtures::bundled().unwrap();
        let mut page = AdminPage::new(&fixtures);
        page.set_tab(AdminTab::Users);

        match page.view().content {
            AdminContent::Users { users } => {
                assert_eq!(users.len(), 4);
                assert_eq!(users[0].last_active, "2025-05-11 08:32 UTC");
                assert_eq!(users[1].role, UserRole::PropertyManager);
                assert_eq!(users[2].action, "Activate");
            }
            other => panic!("unexpected content: {:?}", other),
        }
    }

    #[test]
    fn test_unfinished_tabs_show_placeholder() {
        let fixtures = Fixtures::default();
        let mut page = AdminPage::new(&fixtures);
        page.set_tab("api".parse().unwrap());

        let message = "The Api section is under development and will be available in the \
                       next update.";
        assert_eq!(
            page.view().content,
            AdminContent::Placeholder {
                message: message.to_string()
            }
        );
    }
}
