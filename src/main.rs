use anyhow::{Context, Result};
use clap::Parser;
use gcswitch::{
    app::{self, TerminalPicker},
    cli::{Cli, Commands},
    config::Config,
    gcloud::Gcloud,
    logging::{init_tracing, level_from_verbosity},
};
use std::io;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(level_from_verbosity(cli.verbose));

    let config = Config::resolve(cli.gcloud.as_deref());
    let gcloud = Gcloud::new(&config);
    let mut stdout = io::stdout();

    match &cli.command {
        Some(Commands::List) => {
            app::run_list(&gcloud, &mut stdout).context("listing configurations")?
        }
        Some(Commands::Use { name }) => {
            app::run_use(&gcloud, name, &mut stdout)
                .with_context(|| format!("activating configuration '{}'", name))?;
        }
        None => {
            app::run_interactive(&gcloud, &mut TerminalPicker, &mut stdout, &mut io::stderr())
                .context("switching configuration")?;
        }
    }

    Ok(())
}
