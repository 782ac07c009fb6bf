use portal::config::{load_config, load_delay, sign_in_delay};
use portal::views::{export_snapshot, summarize};
use portal::{DashboardProvider, FileSessionStore, MockDashboardSource, Portal, RecordingNotifier, TokioLatency};
use shared_types::{AppError, NotificationLevel};
use std::process::ExitCode;
use std::sync::Arc;

type DemoPortal = Portal<FileSessionStore, MockDashboardSource<TokioLatency>, Arc<RecordingNotifier>, TokioLatency>;

type DemoProvider = DashboardProvider<Arc<MockDashboardSource<TokioLatency>>, Arc<RecordingNotifier>>;

const USAGE: &str = "usage: dms-demo <sign-in <username> <password> | dashboard | refresh | export | sign-out>";

#[tokio::main]
async fn main() -> ExitCode {
    let config = load_config();
    portal::telemetry::init_tracing(&config.logging);

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(command) = Command::parse(&args) else {
        eprintln!("{USAGE}");
        return ExitCode::from(2);
    };
    let notifier = Arc::new(RecordingNotifier::new());

    let result = match FileSessionStore::open(&config.session.dir) {
        Ok(session) => {
            let source = MockDashboardSource::new(TokioLatency).with_delay(load_delay(config));
            let portal = Portal::new(session, source, Arc::clone(&notifier), TokioLatency)
                .with_sign_in_delay(sign_in_delay(config));
            run(&portal, command).await
        }
        Err(e) => Err(e),
    };

    print_notifications(&notifier);

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

enum Command {
    SignIn { username: String, password: String },
    Dashboard,
    Refresh,
    Export,
    SignOut,
}

impl Command {
    fn parse(args: &[String]) -> Option<Self> {
        match args.iter().map(String::as_str).collect::<Vec<_>>().as_slice() {
            ["sign-in", username, password] => Some(Command::SignIn {
                username: username.to_string(),
                password: password.to_string(),
            }),
            ["dashboard"] => Some(Command::Dashboard),
            ["refresh"] => Some(Command::Refresh),
            ["export"] => Some(Command::Export),
            ["sign-out"] => Some(Command::SignOut),
            _ => None,
        }
    }
}

async fn run(portal: &DemoPortal, command: Command) -> Result<(), AppError> {
    match command {
        Command::SignIn { username, password } => {
            let role = portal.sign_in(&username, &password).await?;
            println!("{}", role.display_name());
            Ok(())
        }
        Command::Dashboard => {
            let provider = portal.dashboard()?;
            provider.load().await?;
            print_state(&provider)
        }
        Command::Refresh => {
            let provider = portal.dashboard()?;
            provider.refresh()?;
            print_state(&provider)
        }
        Command::Export => {
            let provider = portal.dashboard()?;
            provider.load().await?;
            let state = provider.state();
            let stats = state
                .stats
                .ok_or_else(|| AppError::internal("dashboard loaded without a snapshot"))?;
            let json = export_snapshot(&stats, &state.departments, portal.notifier())?;
            println!("{json}");
            Ok(())
        }
        Command::SignOut => portal.sign_out(),
    }
}

fn print_state(provider: &DemoProvider) -> Result<(), AppError> {
    let state = provider.state();
    let Some(stats) = state.stats.as_ref() else {
        return Err(AppError::internal("dashboard loaded without a snapshot"));
    };
    let view = summarize(provider.role(), stats, &state.departments);
    let output = serde_json::json!({
        "view": view,
        "stats": stats,
        "departments": state.departments,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_notifications(notifier: &RecordingNotifier) {
    for notification in notifier.take() {
        let level = match notification.level {
            NotificationLevel::Success => "success",
            NotificationLevel::Error => "error",
            NotificationLevel::Info => "info",
        };
        match notification.description {
            Some(description) => eprintln!("[{level}] {}: {description}", notification.title),
            None => eprintln!("[{level}] {}", notification.title),
        }
    }
}
