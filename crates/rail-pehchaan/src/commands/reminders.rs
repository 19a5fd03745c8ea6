use std::fmt::Write;

use chrono::{Local, NaiveDate};
use pehchaan_core::{Dashboard, DashboardView};
use pehchaan_notify::Notifier;

pub fn run(
    view: DashboardView,
    today: Option<NaiveDate>,
    remind: Option<&str>,
    notifier: &mut dyn Notifier,
) -> anyhow::Result<()> {
    let config = super::load_config()?;
    let dashboard = Dashboard::sample(&config.reminders);
    let today = today.unwrap_or_else(|| Local::now().date_naive());

    if let Some(id) = remind {
        if dashboard.set_reminder(id, notifier).is_none() {
            anyhow::bail!("Unknown component: {id}");
        }
        return Ok(());
    }

    print!("{}", render(&dashboard, view, today));
    Ok(())
}

pub fn render(dashboard: &Dashboard, view: DashboardView, today: NaiveDate) -> String {
    let stats = dashboard.stats(today);
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Total: {}  Upcoming: {}  Critical: {}  This month: {}",
        stats.total, stats.upcoming, stats.critical, stats.this_month
    );

    let components = dashboard.view(view, today);
    if components.is_empty() {
        let _ = writeln!(out, "\nNo components in this view.");
        return out;
    }

    for component in components {
        let urgency = dashboard.urgency(component, today);
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "[{}] {} ({})",
            component.priority, component.name, component.id
        );
        let _ = writeln!(out, "  Location:   {}", component.location);
        let _ = writeln!(out, "  Condition:  {}%", component.condition_percent);
        let _ = writeln!(
            out,
            "  Next due:   {} ({})",
            component.next_maintenance,
            urgency.describe()
        );
        let _ = writeln!(out, "  QR code:    {}", component.qr_code);
    }
    out
}
