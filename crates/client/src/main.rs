use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tusker_core::task::{TaskPriority, TaskStatus};
use tusker_client::app::App;
use tusker_client::notify::Severity;
use tusker_client::render::{render_notification, render_view};
use tusker_client::route::Route;
use tusker_client::service::HttpTaskService;

#[derive(Parser)]
#[command(name = "tusker")]
#[command(about = "Track tasks against a Tusker API server")]
#[command(version)]
struct Cli {
    /// Task collection URL
    #[arg(long, env = "TUSKER_API_URL", default_value = "http://localhost:5000/api/tasks")]
    api_url: String,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// List all tasks, newest first (default)
    List,
    /// Create a task
    Add {
        /// Task title
        title: String,
        #[arg(long)]
        description: Option<String>,
        /// pending, in-progress or completed
        #[arg(long)]
        status: Option<TaskStatus>,
        /// low, medium or high
        #[arg(long)]
        priority: Option<TaskPriority>,
    },
    /// Show one task
    Show { id: String },
    /// Edit a task; omitted fields keep their current value
    Edit {
        id: String,
        #[arg(long)]
        title: Option<String>,
        /// Pass an empty string to clear
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        status: Option<TaskStatus>,
        #[arg(long)]
        priority: Option<TaskPriority>,
    },
    /// Delete a task
    Delete { id: String },
    /// Open a client path such as `/` or `/tasks/<id>`
    Open { path: String },
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tusker=warn,tusker_client=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            tracing::error!(error = %e, "tusker failed");
            eprintln!("error: {e:#}");
            std::process::exit(1);
        }
    }
}

/// Execute one command. Returns `false` when an error notification was raised.
async fn run(cli: Cli) -> anyhow::Result<bool> {
    let api_url = reqwest::Url::parse(&cli.api_url)
        .with_context(|| format!("invalid API URL '{}'", cli.api_url))?;
    let service = Arc::new(HttpTaskService::new(api_url.as_str()));
    let mut app = App::new(service);

    match cli.command.unwrap_or(Command::List) {
        Command::List => app.open("/").await,
        Command::Open { path } => app.open(&path).await,
        Command::Show { id } => app.open(&Route::task_path(&id)).await,
        Command::Add {
            title,
            description,
            status,
            priority,
        } => {
            app.open("/").await;
            if let Some((view, service, notifier)) = app.dashboard_mut() {
                view.open_form();
                let form = view.form_mut();
                form.title = title;
                form.description = description.unwrap_or_default();
                form.status = status.unwrap_or_default();
                form.priority = priority.unwrap_or_default();
                view.submit(service, notifier).await;
            }
        }
        Command::Edit {
            id,
            title,
            description,
            status,
            priority,
        } => {
            app.open(&Route::task_path(&id)).await;
            if let Some((view, service, notifier)) = app.detail_mut() {
                let form = view.form_mut();
                if let Some(title) = title {
                    form.title = title;
                }
                if let Some(description) = description {
                    form.description = description;
                }
                if let Some(status) = status {
                    form.status = status;
                }
                if let Some(priority) = priority {
                    form.priority = priority;
                }
                view.submit(service, notifier).await;
            }
        }
        Command::Delete { id } => {
            app.open("/").await;
            if let Some((view, service, notifier)) = app.dashboard_mut() {
                view.delete(service, notifier, &id).await;
            }
        }
    }

    let mut ok = true;
    for notification in app.notifier().drain() {
        if notification.severity == Severity::Error {
            ok = false;
        }
        eprintln!("{}", render_notification(&notification));
    }
    if let Some(view) = app.view() {
        print!("{}", render_view(view));
    }
    Ok(ok)
}
