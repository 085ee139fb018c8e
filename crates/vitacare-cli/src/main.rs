use std::env;
use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;
use vitacare_cli::commands::{self, Ledger, RegisterInput};
use vitacare_cli::config::{self, VitacareConfig};
use vitacare_forms::login::LoginForm;
use vitacare_forms::registrar::StubRegistrar;
use vitacare_session::store::SessionStore;

const USAGE: &str = "usage: vitacare <command>

commands:
  register <request.json>            submit a registration form
  login <credentials.json>           validate a sign-in form and sign in
  payments <ledger.json> [tab] [q]   render the payments dashboard
  config [init]                      show or write the config file";

fn init_tracing(config: &VitacareConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    // stdout carries command output, so logs go to stderr.
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if config.json_logs {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn required_path(args: &[String]) -> eyre::Result<&Path> {
    args.get(1)
        .map(Path::new)
        .ok_or_else(|| eyre::eyre!("missing input file\n\n{USAGE}"))
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    color_eyre::install()?;

    let config = config::load_config()?;
    init_tracing(&config);

    let args: Vec<String> = env::args().skip(1).collect();
    // One session for the life of the process, passed to whatever needs it.
    let session = SessionStore::new();

    let output = match args.first().map(String::as_str) {
        Some("register") => {
            let input: RegisterInput = commands::read_json(required_path(&args)?)?;
            let registrar = Arc::new(StubRegistrar::new(config.submit_delay()));
            serde_json::to_value(commands::register(input, registrar).await?)?
        }
        Some("login") => {
            let form: LoginForm = commands::read_json(required_path(&args)?)?;
            serde_json::to_value(commands::login(form, &session).await)?
        }
        Some("payments") => {
            let ledger: Ledger = commands::read_json(required_path(&args)?)?;
            let view = commands::payments(
                ledger,
                args.get(2).map(String::as_str),
                args.get(3).map(String::as_str),
            )?;
            serde_json::to_value(view)?
        }
        Some("config") => match args.get(1).map(String::as_str) {
            Some("init") => {
                let path = config::save_config(&VitacareConfig::default())?;
                serde_json::json!({ "path": path.display().to_string() })
            }
            None => serde_json::json!({
                "path": config::config_path()?.display().to_string(),
                "config": config,
            }),
            Some(other) => return Err(eyre::eyre!("unknown config action: {other}\n\n{USAGE}")),
        },
        Some(other) => return Err(eyre::eyre!("unknown command: {other}\n\n{USAGE}")),
        None => return Err(eyre::eyre!("{USAGE}")),
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
