use std::io::{self, Read};
use std::sync::Arc;

use clap::{Parser, Subcommand, ValueEnum};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use flowchat::chat::ChatController;
use flowchat::config::{ConfigError, ConfigOverrides, FlowConfig};
use flowchat::flow::{FlowChat, FlowError, LangflowClient};
use flowchat::render::{self, Rendered};
use flowchat::term::{self, TerminalView};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),
    #[error("{0}")]
    Flow(#[from] FlowError),
    #[error("read input failed: {0}")]
    Io(#[from] io::Error),
    #[error("encode output failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("nothing to send; message is empty")]
    EmptyMessage,
    #[error("{0}")]
    Reply(String),
}

#[derive(Parser, Debug)]
#[command(name = "flowchat", version, about = "Chat with a hosted flow endpoint from the terminal")]
struct Cli {
    /// Base URL of the flow service
    #[arg(long, global = true, env = "FLOW_BASE_URL")]
    base_url: Option<String>,

    /// Path of the run endpoint, e.g. /lf/<org>/api/v1/run/<flow>
    #[arg(long, global = true, env = "FLOW_RUN_PATH")]
    run_path: Option<String>,

    /// Bearer token for the run endpoint
    #[arg(long, global = true, env = "FLOW_API_TOKEN", hide_env_values = true)]
    token: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Interactive session (default)
    Chat,
    /// Send one message and print the rendered reply
    Ask {
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
    /// Render a JSON document without contacting the service
    Render {
        #[arg(long, default_value = "-", help = "Input file path, or - for stdin")]
        input: String,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Html,
    Json,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    match dotenvy::dotenv() {
        Ok(path) => debug!(path = %path.display(), "loaded .env"),
        Err(e) if e.not_found() => {}
        Err(e) => warn!(error = %e, ".env could not be loaded"),
    }

    let cli = Cli::parse();
    let overrides = ConfigOverrides { base_url: cli.base_url, run_path: cli.run_path, api_token: cli.token };

    match cli.command.unwrap_or(Command::Chat) {
        Command::Chat => run_chat(&overrides).await,
        Command::Ask { text } => run_ask(&overrides, &text.join(" ")).await,
        Command::Render { input, format } => run_render(&input, format),
    }
}

fn connect(overrides: &ConfigOverrides) -> Result<Arc<dyn FlowChat>, CliError> {
    let config = FlowConfig::from_env(overrides)?;
    let client = LangflowClient::new(&config)?;
    info!(url = client.url(), "flow client initialized");
    Ok(Arc::new(client))
}

async fn run_chat(overrides: &ConfigOverrides) -> Result<(), CliError> {
    let flow = connect(overrides)?;
    let view = TerminalView::interactive();
    view.print_banner();

    let mut controller = ChatController::new(flow, view);
    let input = term::spawn_stdin_lines();
    tokio::select! {
        () = controller.run(input) => {}
        _ = tokio::signal::ctrl_c() => {
            debug!("interrupted; ending session");
        }
    }
    println!();
    Ok(())
}

async fn run_ask(overrides: &ConfigOverrides, text: &str) -> Result<(), CliError> {
    if text.trim().is_empty() {
        return Err(CliError::EmptyMessage);
    }
    let flow = connect(overrides)?;
    let mut controller = ChatController::new(flow, TerminalView::one_shot());
    controller.submit(text);

    match controller.next_completion().await {
        Some(reply) if reply.is_error() => Err(CliError::Reply(reply.display_text().to_string())),
        Some(_) => Ok(()),
        None => Err(CliError::Reply("no reply received".to_string())),
    }
}

fn run_render(input: &str, format: OutputFormat) -> Result<(), CliError> {
    let text = if input == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(input)?
    };

    let rendered = render::render_str(&text);
    match format {
        OutputFormat::Text => print!("{}", render::text::to_text(&rendered)),
        OutputFormat::Html => println!("{}", render::html::to_html(&rendered)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&rendered)?),
    }
    if rendered == Rendered::ParseFailure {
        return Err(CliError::Reply(render::PARSE_FAILURE_MESSAGE.to_string()));
    }
    Ok(())
}
