use anyhow::Result;
use termbot::io_adapters::EditorInput;
use termbot::{Args, Assistant, Config, Console, SystemShell};
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "TERMBOT_LOG";

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let args: Args = argh::from_env();
    let config = Config::from_args(args);
    init_tracing(config.verbose);
    tracing::debug!(?config, "starting");

    let mut bot = Assistant::new(&config, SystemShell::new(), Console::stdout(config.effects))?;
    let mut input = EditorInput::new()?;
    bot.greet();
    bot.repl(&mut input);
    Ok(())
}
