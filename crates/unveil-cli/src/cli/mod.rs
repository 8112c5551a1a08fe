//! CLI entry and dispatch.

use anyhow::Result;
use clap::Parser;
use unveil_core::interrupt;
use unveil_core::source::TextSource;

mod commands;

#[derive(Parser)]
#[command(name = "unveil")]
#[command(version)]
#[command(about = "Reveal text in the terminal one line at a time")]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Text file to reveal (`-` reads stdin). Without it, paste the text
    #[arg(value_name = "FILE")]
    file: Option<String>,

    #[command(flatten)]
    view: ViewArgs,
}

/// View flags; each one overrides the config file for this session.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct ViewArgs {
    /// Right-to-left text direction
    #[arg(long)]
    pub rtl: bool,

    /// Render lines as markdown
    #[arg(long)]
    pub markup: bool,

    /// Dim everything except the current line
    #[arg(long)]
    pub focus: bool,

    /// Start in the fullscreen surface
    #[arg(long)]
    pub fullscreen: bool,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Print the lines a text would be revealed as, one per line
    Lines {
        /// Text file (`-` reads stdin)
        #[arg(value_name = "FILE")]
        file: String,
    },

    /// Reveal a number of lines and print the result
    Print {
        /// Text file (`-` reads stdin)
        #[arg(value_name = "FILE")]
        file: String,

        /// Number of lines to reveal (default: all)
        #[arg(long, value_name = "N")]
        steps: Option<usize>,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
    /// Generate a fresh config from Rust defaults
    Generate,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    interrupt::init()?;

    match cli.command {
        None => commands::read::run(cli.file.as_deref(), &cli.view),
        Some(Commands::Lines { file }) => commands::lines::run(&TextSource::from_arg(&file)),
        Some(Commands::Print { file, steps }) => {
            commands::print::run(&TextSource::from_arg(&file), steps)
        }
        Some(Commands::Config { command }) => match command {
            ConfigCommands::Path => {
                commands::config::path();
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(),
            ConfigCommands::Generate => commands::config::generate(),
        },
    }
}
