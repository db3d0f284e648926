use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "gcswitch", version, about = "Pick a gcloud configuration and activate it", long_about = None)]
pub struct Cli {
    /// gcloud executable to invoke (defaults to $GCSWITCH_GCLOUD, then `gcloud`)
    #[arg(long, global = true, value_name = "PATH")]
    pub gcloud: Option<String>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List configurations without the interactive menu
    #[command(alias = "ls")]
    List,
    /// Activate a configuration by name without the interactive menu
    #[command(alias = "activate")]
    Use { name: String },
}
