//! `fcare` - CLI for the ForeCare dashboard
//!
//! This binary exposes the dashboard views as subcommands: sign in with the
//! mock gate, then browse residents, devices, alerts, reports, trends, and
//! the canned assistant.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use anyhow::Context as _;
use clap::Parser;

use forecare::assistant::{self, Assistant};
use forecare::cli::{
    AlertsCommand, AskCommand, Cli, Command, ConfigCommand, DevicesCommand, InterventionsCommand,
    LoginCommand, OpenCommand, OutputFormat, OverviewCommand, RegisterCommand, ReportsCommand,
    ResidentCommand, ResidentsCommand, TrendsCommand,
};
use forecare::filter::{self, AlertCriteria, DeviceCriteria, ReportCriteria, ResidentCriteria};
use forecare::fixtures;
use forecare::model::{Alert, ResidentId, TrendSeries};
use forecare::routes::{self, DashboardView, Resolution, Route};
use forecare::selection::ResidentContext;
use forecare::session::Registration;
use forecare::{init_logging, Config, FacilitySnapshot, Session, SessionStore};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    // Load configuration
    let config = Config::load_from(cli.config.clone())?;

    // Restore the session, if one is stored
    let mut session = Session::open(SessionStore::at(config.session_path()))?;

    // Dashboard commands are gated: without a session, redirect to login
    // instead of rendering. A redirect is an outcome, not an error.
    if cli.requires_session() && !session.is_authenticated() {
        println!("You are not signed in.");
        println!("Run `fcare login --demo` to explore the demo dashboard.");
        return Ok(());
    }

    match cli.command {
        Command::Login(cmd) => handle_login(&mut session, &cmd),
        Command::Register(cmd) => handle_register(&mut session, cmd),
        Command::Logout => handle_logout(&mut session),
        Command::Whoami => {
            handle_whoami(&session);
            Ok(())
        }
        Command::Overview(cmd) => handle_overview(&cmd),
        Command::Residents(cmd) => handle_residents(&config, &cmd),
        Command::Resident(cmd) => handle_resident(&cmd),
        Command::Devices(cmd) => handle_devices(&cmd),
        Command::Alerts(cmd) => handle_alerts(&cmd),
        Command::Reports(cmd) => handle_reports(&cmd),
        Command::Trends(cmd) => handle_trends(&config, &cmd),
        Command::Interventions(cmd) => handle_interventions(&cmd),
        Command::Ask(cmd) => handle_ask(&config, &cmd),
        Command::Open(cmd) => {
            handle_open(&session, &cmd);
            Ok(())
        }
        Command::Config(cmd) => handle_config(&config, cmd),
    }
}

fn handle_login(session: &mut Session, cmd: &LoginCommand) -> anyhow::Result<()> {
    if cmd.demo {
        session.demo_login()?;
        if let Some(user) = session.user() {
            println!("Signed in as {} ({})", user.name, user.email);
        }
        return Ok(());
    }

    let email = cmd.email.as_deref().unwrap_or_default();
    let password = cmd.password.as_deref().unwrap_or_default();
    if session.login(email, password)? {
        if let Some(user) = session.user() {
            println!("Signed in as {} ({})", user.name, user.email);
        }
    } else {
        println!("Invalid credentials. Please check your email and password.");
    }
    Ok(())
}

fn handle_register(session: &mut Session, cmd: RegisterCommand) -> anyhow::Result<()> {
    session.register(Registration {
        name: cmd.name,
        email: cmd.email,
        password: cmd.password,
        organization: cmd.organization,
        role: cmd.role,
        country: cmd.country,
    })?;
    if let Some(user) = session.user() {
        println!("Welcome, {}! Your {} account is ready.", user.name, user.organization);
    }
    Ok(())
}

fn handle_logout(session: &mut Session) -> anyhow::Result<()> {
    session.logout()?;
    println!("Signed out.");
    Ok(())
}

fn handle_whoami(session: &Session) {
    match session.user() {
        Some(user) => {
            println!("{} <{}>", user.name, user.email);
            println!("{} · {}", user.role, user.organization);
        }
        None => println!("Not signed in."),
    }
}

fn handle_overview(cmd: &OverviewCommand) -> anyhow::Result<()> {
    let snapshot = FacilitySnapshot::current();
    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
        return Ok(());
    }

    println!("Facility Overview");
    println!("=================");
    println!("Total residents:     {}", snapshot.residents_monitored);
    println!(
        "High risk today:     {} (monitor: {}, stable: {})",
        snapshot.high_risk, snapshot.monitor, snapshot.stable
    );
    println!(
        "Active alerts:       {} ({} unacknowledged)",
        snapshot.active_alerts, snapshot.unacknowledged_alerts
    );
    println!("Avg. risk score:     {:.1}", snapshot.average_risk);
    println!(
        "Monitoring coverage: {}% ({} of {} devices online)",
        snapshot.connectivity_percent, snapshot.devices_online, snapshot.devices_total
    );
    println!();

    let briefing = assistant::daily_briefing();
    println!("AI Daily Briefing");
    println!("-----------------");
    println!(
        "Overnight: {} flagged · {} improved · {} alerts resolved · avg response {}",
        briefing.overnight.flagged,
        briefing.overnight.improved,
        briefing.overnight.alerts_resolved,
        briefing.overnight.avg_response
    );
    for group in &briefing.groups {
        println!();
        println!("[{}]", group.category);
        for item in &group.items {
            println!("  - {} ({})", item.text, item.link);
        }
    }
    println!();
    println!("Predictive note: {}", briefing.predictive_note);
    Ok(())
}

fn handle_residents(config: &Config, cmd: &ResidentsCommand) -> anyhow::Result<()> {
    let criteria = ResidentCriteria {
        search: cmd.search.clone(),
        status: cmd.status.map(Into::into),
        unit: cmd
            .unit
            .clone()
            .or_else(|| config.dashboard.default_unit.clone()),
    };
    let all = fixtures::residents();
    let rows = filter::apply(&all, &criteria);

    match cmd.format {
        OutputFormat::Json => print_json(&rows)?,
        OutputFormat::Plain => {
            for r in &rows {
                println!("{} · {} · risk {} · {}", r.name, r.room, r.risk, r.status);
            }
        }
        OutputFormat::Table => {
            println!(
                "{:<20} {:>3}  {:<6} {:>4}  {:<10} {:<12}",
                "Name", "Age", "Room", "Risk", "Status", "Trend"
            );
            for r in &rows {
                println!(
                    "{:<20} {:>3}  {:<6} {:>4}  {:<10} {:<12}",
                    r.name, r.age, r.room, r.risk, r.status.to_string(), r.trend
                );
            }
            println!();
            println!("{} of {} residents shown", rows.len(), all.len());
        }
    }
    Ok(())
}

fn handle_resident(cmd: &ResidentCommand) -> anyhow::Result<()> {
    let id = ResidentId::new(cmd.id.as_str());
    let ctx = ResidentContext::resolve(Some(&id));
    let r = &ctx.resident;

    if cmd.json {
        return print_json(r);
    }

    if ctx.fallback {
        println!(
            "No resident with id {} — showing {} instead.",
            cmd.id, r.name
        );
        println!();
    }

    println!("{} ({})", r.name, r.status);
    println!(
        "Age {} · Room {} · {} · assigned to {}",
        r.age, r.room, r.unit, r.assigned_to
    );
    println!("Risk score: {}  Trend: {}", r.risk, r.trend);
    println!("Last check: {}  Next check: {}", r.last_check, r.next_check);
    if let Some(reason) = &r.reason {
        println!("Flagged: {reason}");
    }

    if let Some(insight) = assistant::resident_insight(r.id.as_str()) {
        println!();
        println!("AI Insight: {insight}");
    }

    let alerts = fixtures::alerts();
    let recent: Vec<&Alert> = alerts.iter().filter(|a| a.resident == r.name).collect();
    if !recent.is_empty() {
        println!();
        println!("Recent alerts:");
        for a in recent {
            println!("  [{}] {} at {}", a.level, a.category, a.time);
        }
    }

    let history: Vec<_> = fixtures::interventions()
        .into_iter()
        .filter(|i| i.resident.as_ref() == Some(&r.id))
        .collect();
    if !history.is_empty() {
        println!();
        println!("Intervention history:");
        for item in history {
            println!("  {} {} — {} ({})", item.date, item.time, item.action, item.status);
        }
    }
    Ok(())
}

fn handle_devices(cmd: &DevicesCommand) -> anyhow::Result<()> {
    let criteria = DeviceCriteria {
        search: cmd.search.clone(),
        status: cmd.status.map(Into::into),
        device_type: cmd.device_type.map(Into::into),
        battery: cmd.battery.map(Into::into),
    };
    let all = fixtures::devices();
    let rows = filter::apply(&all, &criteria);

    match cmd.format {
        OutputFormat::Json => print_json(&rows)?,
        OutputFormat::Plain => {
            for d in &rows {
                println!("{} · {} · {} · {}", d.id, d.resident, d.device_type, d.status);
            }
        }
        OutputFormat::Table => {
            let snapshot = FacilitySnapshot::current();
            println!(
                "Connectivity: {}% ({} / {} online)",
                snapshot.connectivity_percent, snapshot.devices_online, snapshot.devices_total
            );
            println!();
            println!(
                "{:<7} {:<18} {:<6} {:<14} {:<8} {:>8}  {:<12}",
                "ID", "Resident", "Room", "Type", "Status", "Battery", "Last Sync"
            );
            for d in &rows {
                let battery = d
                    .battery
                    .map_or_else(|| "—".to_string(), |pct| format!("{pct}%"));
                println!(
                    "{:<7} {:<18} {:<6} {:<14} {:<8} {:>8}  {:<12}",
                    d.id,
                    d.resident,
                    d.room,
                    d.device_type.to_string(),
                    d.status.to_string(),
                    battery,
                    d.last_sync
                );
                if let Some(issue) = &d.issue {
                    println!("        issue: {issue}");
                }
            }
            println!();
            println!("{} of {} devices shown", rows.len(), all.len());
        }
    }
    Ok(())
}

fn handle_alerts(cmd: &AlertsCommand) -> anyhow::Result<()> {
    let criteria = AlertCriteria {
        search: cmd.search.clone(),
        level: cmd.level.map(Into::into),
        acknowledged: cmd.unacknowledged.then_some(false),
    };
    let all = fixtures::alerts();
    let rows = filter::apply(&all, &criteria);

    if cmd.format == OutputFormat::Json {
        return print_json(&rows);
    }

    let unacked = all.iter().filter(|a| !a.acknowledged).count();
    println!("{} active alerts · {} unacknowledged", all.len(), unacked);
    println!();
    for a in &rows {
        let ack = if a.acknowledged { "" } else { " (unacknowledged)" };
        println!("[{}] {}{}", a.level, a.category, ack);
        println!("    {} · Room {} · Today at {}", a.resident, a.room, a.time);
        if let Some(explanation) = &a.explanation {
            println!("    Why: {explanation}");
        }
        if let Some(action) = &a.action {
            println!("    Recommended: {action}");
        }
    }
    Ok(())
}

fn handle_reports(cmd: &ReportsCommand) -> anyhow::Result<()> {
    let criteria = ReportCriteria {
        search: cmd.search.clone(),
        kind: cmd.kind.map(Into::into),
        mode: cmd.mode.map(Into::into),
        date: cmd.date.clone(),
    };
    let all = fixtures::reports();
    let rows = filter::apply(&all, &criteria);

    match cmd.format {
        OutputFormat::Json => print_json(&rows)?,
        OutputFormat::Plain => {
            for r in &rows {
                println!("{} · {} · {}", r.name, r.date, r.mode);
            }
        }
        OutputFormat::Table => {
            for r in &rows {
                println!("{} ({} · {} · {})", r.name, r.date, r.kind, r.mode);
                println!("    severity: {} · tags: {}", r.severity, r.tags.join(", "));
                println!("    {}", r.summary);
            }
            println!();
            println!("{} of {} reports shown", rows.len(), all.len());
        }
    }
    Ok(())
}

fn handle_trends(config: &Config, cmd: &TrendsCommand) -> anyhow::Result<()> {
    let range = cmd
        .range
        .map_or(config.dashboard.time_range, Into::into);

    match &cmd.resident {
        Some(raw_id) => {
            let id = ResidentId::new(raw_id.as_str());
            let ctx = ResidentContext::resolve(Some(&id));
            // A known resident without authored series gets the default
            // data set too, same as an unknown id.
            let trends =
                fixtures::resident_trends(&ctx.resident.id).unwrap_or_else(fixtures::default_trends);

            if cmd.json {
                let value = serde_json::json!({
                    "resident": ctx.resident.id,
                    "fallback": trends.resident.is_none() || ctx.fallback,
                    "mobility": trends.mobility,
                    "sleep": trends.sleep,
                });
                println!("{}", serde_json::to_string_pretty(&value)?);
                return Ok(());
            }

            println!("Trends for {} · {}", ctx.resident.name, range);
            if ctx.fallback {
                println!("(no data for id {raw_id} — showing the default data set)");
            } else if trends.resident.is_none() {
                println!("(no authored series for this resident — showing the default data set)");
            }
            if config.dashboard.show_baseline {
                println!("(compared against the personal baseline)");
            }
            println!();
            print_series(&trends.mobility);
            println!();
            print_series(&trends.sleep);
        }
        None => {
            let trends = fixtures::facility_trends();
            if cmd.json {
                let value = serde_json::json!({
                    "activity": trends.activity,
                    "stability": trends.stability,
                    "alert_frequency": trends.alert_frequency,
                    "behavioral_changes": trends.behavioral_changes,
                });
                println!("{}", serde_json::to_string_pretty(&value)?);
                return Ok(());
            }

            println!("Facility trends · {range}");
            println!();
            print_series(&trends.activity);
            println!();
            print_series(&trends.stability);
            println!();
            print_series(&trends.alert_frequency);
            println!();
            print_series(&trends.behavioral_changes);
        }
    }
    Ok(())
}

fn handle_interventions(cmd: &InterventionsCommand) -> anyhow::Result<()> {
    let all = fixtures::interventions();
    let (context, rows) = match &cmd.resident {
        Some(raw_id) => {
            let id = ResidentId::new(raw_id.as_str());
            let ctx = ResidentContext::resolve(Some(&id));
            let scoped: Vec<_> = all
                .iter()
                .filter(|i| i.resident.as_ref() == Some(&ctx.resident.id))
                .cloned()
                .collect();
            (Some(ctx), scoped)
        }
        None => (None, all),
    };

    if cmd.json {
        return print_json(&rows);
    }

    match &context {
        Some(ctx) if ctx.fallback => println!(
            "No resident with id {} — showing {}'s timeline.",
            cmd.resident.as_deref().unwrap_or_default(),
            ctx.resident.name
        ),
        Some(ctx) => println!("Interventions for {}", ctx.resident.name),
        None => println!("Intervention timeline"),
    }
    println!();
    for item in &rows {
        println!("{} {} · {} [{}]", item.date, item.time, item.action, item.status);
        println!("    {}", item.detail);
    }
    Ok(())
}

fn handle_ask(config: &Config, cmd: &AskCommand) -> anyhow::Result<()> {
    let question = cmd.question.join(" ");

    let mut assistant = Assistant::new(config.typing_delay());
    let mut context_note = None;
    if let Some(raw_id) = &cmd.resident {
        let id = ResidentId::new(raw_id.as_str());
        let ctx = ResidentContext::resolve(Some(&id));
        context_note = Some(ctx.resident.name.clone());
        assistant = assistant.with_context(ctx.resident.name);
    }

    if let Some(name) = &context_note {
        println!("Context: {name}");
    }
    println!("You: {question}");

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .context("failed to start assistant runtime")?;
    let reply = runtime.block_on(assistant.reply(&question));

    let stamp = chrono::Local::now().format("%H:%M");
    println!();
    println!("ForeCare AI [{stamp}]:");
    println!("{reply}");
    println!();
    println!("AI-powered decision support · Not a clinical diagnosis");
    Ok(())
}

fn handle_open(session: &Session, cmd: &OpenCommand) {
    match routes::resolve(&cmd.path, session.is_authenticated()) {
        Resolution::RedirectToLogin { requested } => {
            println!("{requested} requires a session — redirecting to /login");
        }
        Resolution::Allowed(route) => {
            println!("{} -> {}", cmd.path, describe_route(&route));
        }
    }
}

fn describe_route(route: &Route) -> String {
    match route {
        Route::Landing => "marketing landing page".to_string(),
        Route::Login => "login form".to_string(),
        Route::Register => "registration form".to_string(),
        Route::Security => "security & compliance page".to_string(),
        Route::RequestDemo => "demo request form".to_string(),
        Route::NotFound => "not found".to_string(),
        Route::Dashboard(view) => match view {
            DashboardView::Overview => "dashboard overview".to_string(),
            DashboardView::Residents => "resident list".to_string(),
            DashboardView::ResidentProfile(id) => format!("resident profile for id {id}"),
            DashboardView::Alerts => "alert feed".to_string(),
            DashboardView::Trends { resident: Some(id) } => {
                format!("trends scoped to resident {id}")
            }
            DashboardView::Trends { resident: None } => "facility trends".to_string(),
            DashboardView::Interventions { resident: Some(id) } => {
                format!("interventions scoped to resident {id}")
            }
            DashboardView::Interventions { resident: None } => {
                "intervention timeline".to_string()
            }
            DashboardView::Reports => "report list".to_string(),
            DashboardView::Devices => "device fleet".to_string(),
            DashboardView::Settings => "settings".to_string(),
        },
    }
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> anyhow::Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Session]");
                println!("  Store path:       {}", config.session_path().display());
                println!();
                println!("[Assistant]");
                println!("  Typing delay:     {} ms", config.assistant.typing_delay_ms);
                println!();
                println!("[Dashboard]");
                println!("  Time range:       {}", config.dashboard.time_range);
                println!("  Show baseline:    {}", config.dashboard.show_baseline);
                println!(
                    "  Default unit:     {}",
                    config.dashboard.default_unit.as_deref().unwrap_or("(all)")
                );
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file.unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            match Config::load_from(Some(path)) {
                Ok(_) => println!("Configuration is valid."),
                Err(e) => println!("Configuration error: {e}"),
            }
        }
    }
    Ok(())
}

fn print_series(series: &TrendSeries) {
    println!("{} ({})", series.name, series.unit);
    for point in &series.points {
        println!("  {:<4} {:>8.1}", point.label, point.value);
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
