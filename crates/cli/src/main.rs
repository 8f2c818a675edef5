//! HMR CLI - Command-line driver for the humanoid robot simulator
//!
//! Usage:
//!   hmr                       - Start interactive mode
//!   hmr run <script>          - Execute commands from a file
//!   hmr init [dir]            - Write a default hmr.json

use clap::{Parser, Subcommand};
use cli::commands::{InitCommand, RunCommand, SessionArgs};
use cli::interactive::InteractiveCli;
use cli::session::RobotSession;
use console::Term;

#[derive(Parser)]
#[command(name = "hmr")]
#[command(about = "HMR - Humanoid robot command simulator")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    session: SessionArgs,

    /// Skip the shutdown confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default configuration file
    Init(InitCommand),
    /// Execute a script of robot commands
    Run(RunCommand),
}

fn main() -> anyhow::Result<()> {
    cli::logging::init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Init(cmd)) => cmd.run(),
        Some(Commands::Run(cmd)) => cmd.run(&cli.session),
        None => {
            // No subcommand - start interactive mode
            let config = cli.session.load_config()?;
            let session = RobotSession::from_config(&config)?;
            let confirm = !cli.yes && !cli.session.json && Term::stdout().is_term();

            let mut interactive = InteractiveCli::new(session)
                .with_output(cli.session.output_mode())
                .with_shutdown_confirmation(confirm);
            interactive.run()?;

            cli.session.export_audit(interactive.session())
        }
    }
}
