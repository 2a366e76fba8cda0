use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use regionswitch::cli::{execute, parse_args, version_line, CliCommand, CliContext, USAGE};
use regionswitch::config::SwitcherConfig;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "regionswitch=info";

/// Log to stderr so command output on stdout stays clean.
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing();

    let command = match parse_args(std::env::args()) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("Error: {}", e.user_message());
            eprintln!();
            eprintln!("{}", USAGE);
            std::process::exit(2);
        }
    };

    // Handle flags before touching the store
    match command {
        CliCommand::Version => {
            println!("{}", version_line());
            return Ok(());
        }
        CliCommand::Help => {
            println!("{}", USAGE);
            return Ok(());
        }
        _ => {}
    }

    let ctx = CliContext::from_config(SwitcherConfig::from_env())
        .wrap_err("Failed to open the token store")?;
    let runtime = tokio::runtime::Runtime::new()?;

    match runtime.block_on(execute(command, &ctx)) {
        Ok(output) => {
            println!("{}", output);
            Ok(())
        }
        Err(e) => {
            tracing::debug!(category = %e.category(), error = %e, "Command failed");
            eprintln!("Error: {}", e.user_message());
            eprintln!("Hint: {}", e.category().recovery_hint());
            std::process::exit(1);
        }
    }
}
