//! Text and JSON renderers for page views

use std::io::{self, Write};

use dashboard_core::nav::NavEntry;
use dashboard_core::pages::admin::{AdminContent, AdminView, SettingRow};
use dashboard_core::pages::energy::EnergyView;
use dashboard_core::pages::maintenance::MaintenanceView;
use dashboard_core::pages::overview::OverviewView;
use dashboard_core::pages::simulation::{SimulationPhase, SimulationView};
use dashboard_core::pages::tenants::TenantsView;
use dashboard_core::pages::units::UnitsView;
use dashboard_core::NavSection;
use dashboard_types::{Status, Tone};
use serde::Serialize;

pub fn json<T: Serialize>(out: &mut impl Write, view: &T) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, view)?;
    writeln!(out)?;
    Ok(())
}

fn on_off(enabled: bool) -> &'static str {
    if enabled {
        "on"
    } else {
        "off"
    }
}

fn mark(tone: Tone) -> &'static str {
    tone.glyph()
}

pub fn overview(out: &mut impl Write, view: &OverviewView<'_>) -> io::Result<()> {
    writeln!(out, "SimCity Reality OS")?;
    writeln!(out)?;
    for card in &view.cards {
        match card.trend {
            Some(trend) => writeln!(
                out,
                "{} {:<24} {:>6}  {}",
                mark(card.tone),
                card.title,
                card.value,
                trend
            )?,
            None => writeln!(out, "{} {:<24} {:>6}", mark(card.tone), card.title, card.value)?,
        }
    }

    writeln!(out)?;
    writeln!(out, "City Grid")?;
    for tile in &view.buildings {
        writeln!(
            out,
            "  {} {} ({}) at {}%, {}%",
            mark(tile.tone),
            tile.name,
            tile.status,
            tile.x,
            tile.y
        )?;
    }
    if let Some(selected) = view.selected {
        writeln!(out, "  Selected: {}", selected)?;
    }

    writeln!(out)?;
    writeln!(out, "Alerts ({})", view.alert_badge)?;
    for alert in &view.alerts {
        writeln!(
            out,
            "  {} {} [{}] {}",
            mark(alert.tone),
            alert.title,
            alert.severity,
            alert.time
        )?;
        writeln!(out, "    {}", alert.message)?;
    }

    writeln!(out)?;
    let actions: Vec<&str> = view.quick_actions.iter().map(|a| a.title.as_str()).collect();
    writeln!(out, "Quick Actions: {}", actions.join(", "))
}

pub fn units(out: &mut impl Write, view: &UnitsView<'_>) -> io::Result<()> {
    writeln!(out, "Unit Manager")?;
    writeln!(
        out,
        "Search: {:?}  Building: {}  Status: {}",
        view.search, view.building, view.status
    )?;
    writeln!(out, "Buildings: {}", view.building_options.join(", "))?;
    writeln!(out, "Statuses: {}", view.status_options.join(", "))?;
    writeln!(out)?;

    if view.units.is_empty() {
        return writeln!(out, "No units match the current filters");
    }

    for unit in &view.units {
        writeln!(
            out,
            "{} Unit {}  {}  {}  {}",
            mark(unit.tone),
            unit.id,
            unit.building,
            unit.floorplan,
            unit.status.label()
        )?;
        write!(out, "    Tenant: {}  Rent: {}", unit.tenant, unit.rent)?;
        if let Some(date) = &unit.next_payment {
            write!(out, "  Next payment: {}", date)?;
        }
        writeln!(out)?;
        write!(out, "    Size: {}  Amenities: {}", unit.size, unit.amenities.join(", "))?;
        if let Some(more) = &unit.more_amenities {
            write!(out, " {}", more)?;
        }
        writeln!(out)?;
        if let Some(requests) = unit.maintenance_requests {
            writeln!(out, "    Maintenance requests: {}", requests)?;
        }
    }
    Ok(())
}

pub fn tenants(out: &mut impl Write, view: &TenantsView<'_>) -> io::Result<()> {
    writeln!(out, "Tenant Portal")?;
    writeln!(
        out,
        "Search: {:?}  Building: {}  Status: {}",
        view.search, view.building, view.status
    )?;
    writeln!(out, "{}", view.summary)?;
    writeln!(out)?;

    if view.tenants.is_empty() {
        return writeln!(out, "No tenants match the current filters");
    }

    for tenant in &view.tenants {
        writeln!(
            out,
            "{} [{}] {}  {}",
            mark(tenant.tone),
            tenant.initials,
            tenant.name,
            tenant.standing
        )?;
        writeln!(out, "    {}  {}", tenant.email, tenant.phone)?;
        writeln!(out, "    Unit {}, {}  Rent: {}", tenant.unit, tenant.building, tenant.rent)?;
        writeln!(out, "    Lease: {}", tenant.lease)?;
        if tenant.maintenance_requests > 0 {
            writeln!(out, "    Maintenance requests: {}", tenant.maintenance_requests)?;
        }
        if let Some(payments) = &tenant.payments {
            for payment in payments {
                writeln!(
                    out,
                    "      {} {:<9} {:<8} {}",
                    mark(payment.tone),
                    payment.month,
                    payment.label,
                    payment.date.as_deref().unwrap_or("-")
                )?;
            }
        }
    }
    Ok(())
}

pub fn maintenance(out: &mut impl Write, view: &MaintenanceView<'_>) -> io::Result<()> {
    writeln!(out, "Maintenance AI")?;
    writeln!(
        out,
        "{}  Threshold: {}  Priority: {}",
        view.ai_label, view.threshold_label, view.priority
    )?;
    writeln!(out)?;

    writeln!(out, "Maintenance Issues ({})", view.issue_badge)?;
    if view.issues.is_empty() {
        writeln!(out, "  No issues match the current filters")?;
    }
    for issue in &view.issues {
        writeln!(
            out,
            "  {} {} {}  [{}] {}",
            mark(issue.tone),
            issue.id,
            issue.issue,
            issue.priority,
            issue.status_label
        )?;
        writeln!(
            out,
            "      {} / {}  Reported {} by {}",
            issue.building, issue.unit, issue.reported, issue.reported_by
        )?;
        writeln!(
            out,
            "      Assigned: {}  ETA: {}  Cost: {}",
            issue.assigned_to, issue.estimated_completion, issue.predicted_cost
        )?;
    }

    writeln!(out)?;
    writeln!(out, "AI Predictions")?;
    if !view.ai_enabled {
        return writeln!(out, "  Enable the AI assistant to see predictions");
    }
    if view.predictions.is_empty() {
        return writeln!(out, "  No predictions above the confidence threshold");
    }
    for prediction in &view.predictions {
        writeln!(
            out,
            "  {} {}: {} ({}% confidence)",
            prediction.building, prediction.system, prediction.prediction, prediction.confidence
        )?;
        writeln!(out, "      Est. cost {}  {}", prediction.estimated_cost, prediction.details)?;
    }
    Ok(())
}

pub fn energy(out: &mut impl Write, view: &EnergyView<'_>) -> io::Result<()> {
    writeln!(out, "Energy & Utilities")?;
    for utility in &view.utilities {
        let pointer = if utility.selected { ">" } else { " " };
        writeln!(
            out,
            "{} {:<12} {:<14} {} {}",
            pointer,
            utility.title,
            utility.current,
            mark(utility.trend.tone),
            utility.trend
        )?;
    }

    let detail = &view.detail;
    writeln!(out)?;
    writeln!(out, "{}", detail.title)?;
    writeln!(out, "Usage data for {}", detail.period)?;
    writeln!(out, "  Current {}:  {}", detail.timeframe, detail.current)?;
    writeln!(out, "  Previous {}: {}", detail.timeframe, detail.previous)?;
    writeln!(out, "  Change:        {}", detail.change)?;
    writeln!(out, "  Current cost:  {}", detail.cost)?;
    writeln!(out, "  Previous cost: {}", detail.prev_cost)?;
    writeln!(out, "  Savings:       {}", detail.savings)?;
    for share in detail.breakdown {
        writeln!(out, "    {:<20} {:>3}%", share.category, share.percent)?;
    }

    writeln!(out)?;
    writeln!(out, "Building Efficiency")?;
    for building in &view.buildings {
        writeln!(
            out,
            "  {} {:<18} {:>3}%  {}",
            mark(building.tone),
            building.name,
            building.efficiency,
            building.trend
        )?;
        for recommendation in building.recommendations {
            writeln!(out, "      - {}", recommendation)?;
        }
    }
    Ok(())
}

fn setting_rows(out: &mut impl Write, title: &str, rows: &[SettingRow]) -> io::Result<()> {
    writeln!(out, "{}", title)?;
    for row in rows {
        writeln!(out, "  [{:<3}] {}: {}", on_off(row.enabled), row.title, row.description)?;
    }
    Ok(())
}

pub fn admin(out: &mut impl Write, view: &AdminView<'_>) -> io::Result<()> {
    writeln!(out, "Admin Dashboard")?;
    let tabs: Vec<String> = view
        .tabs
        .iter()
        .map(|t| if t.active { format!("[{}]", t.label) } else { t.label.to_string() })
        .collect();
    writeln!(out, "{}", tabs.join(" | "))?;
    writeln!(out)?;

    match &view.content {
        AdminContent::General { system, application } => {
            setting_rows(out, "System Settings", system)?;
            writeln!(out)?;
            setting_rows(out, "Application Settings", application)
        }
        AdminContent::Users { users } => {
            writeln!(out, "System Users")?;
            for user in users {
                writeln!(
                    out,
                    "  {} <{}>  {}  {}",
                    user.name,
                    user.email,
                    user.role.as_str(),
                    user.status.as_str()
                )?;
                writeln!(out, "      Last active: {}  [{}]", user.last_active, user.action)?;
            }
            Ok(())
        }
        AdminContent::Placeholder { message } => {
            writeln!(out, "Coming Soon")?;
            writeln!(out, "{}", message)
        }
    }
}

pub fn simulation(out: &mut impl Write, view: &SimulationView<'_>) -> io::Result<()> {
    writeln!(out, "Simulation Engine")?;
    for scenario in &view.scenarios {
        let pointer = if scenario.active { ">" } else { " " };
        writeln!(out, "{} {:<24} {}", pointer, scenario.title, scenario.description)?;
    }

    writeln!(out)?;
    writeln!(out, "Timeframe (months): {}", view.params.timeframe_months)?;
    writeln!(out, "Intensity:          {}", view.params.intensity)?;
    writeln!(out, "Optimize for:       {}", view.params.optimize_for)?;
    writeln!(out)?;

    match view.phase {
        SimulationPhase::Idle => {
            return writeln!(out, "Run the simulation to see projected results");
        }
        SimulationPhase::Running => writeln!(out, "Running Simulation...")?,
        SimulationPhase::Complete => {}
    }

    match view.result {
        Some(result) => {
            writeln!(out, "Results")?;
            writeln!(out, "  {}: {}", result.current.label, result.current.value)?;
            writeln!(out, "  {}: {}", result.projected.label, result.projected.value)?;
            writeln!(out, "  ROI: {}%", result.roi)?;
            writeln!(out, "  Timeframe: {}", result.timeframe)?;
            writeln!(out, "  Recommendation: {}", result.recommendation)
        }
        None if view.phase == SimulationPhase::Complete => {
            writeln!(out, "No results available for this scenario")
        }
        None => Ok(()),
    }
}

pub fn nav(out: &mut impl Write, entries: &[NavEntry]) -> io::Result<()> {
    writeln!(out, "SCROS")?;
    let mut section: Option<NavSection> = None;
    for entry in entries {
        if section != Some(entry.section) {
            section = Some(entry.section);
            writeln!(out, "{}", entry.section.title().to_uppercase())?;
        }
        let pointer = if entry.active { "●" } else { " " };
        writeln!(out, "  {} {:<20} {}", pointer, entry.label, entry.path)?;
    }
    Ok(())
}
