use clap::{Parser, Subcommand, Args};

#[derive(Parser)]
#[command(name = "ecr-scan-notifier", version, about = "Post ECR image scan findings to a Slack webhook")]
pub struct Cli {
    /// Defaults to `serve` when omitted, which is how the Lambda bootstrap starts the binary
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Increase log verbosity (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true, env = "NOTIFIER_JSON_LOGS")]
    pub json_logs: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the Lambda runtime loop
    Serve,
    /// Handle a single event read from a file
    Invoke(InvokeArgs),
}

#[derive(Args, Clone)]
pub struct InvokeArgs {
    /// Event JSON file, or `-` for stdin
    #[arg(short, long)]
    pub event: String,

    /// Fetch and format, print the payload, skip the webhook
    #[arg(long)]
    pub dry_run: bool,
}
