mod commands;

use clap::{CommandFactory, Parser};
use clap_complete::{Shell, generate};
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "conference-kit")]
#[command(version, about = "Static landing-page generator for one-day conferences", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Initialize a new conference site directory
    Init {
        /// Path to create the site directory
        path: PathBuf,
    },

    /// Validate site.toml and every program schedule
    Validate {
        /// Path to site directory
        path: PathBuf,

        /// Print the validation reports as JSON
        #[arg(long)]
        json: bool,
    },

    /// Preview site locally with hot reload
    Preview {
        /// Path to site directory
        path: PathBuf,

        /// Port to serve on
        #[arg(short, long, default_value = "8080")]
        port: u16,
    },

    /// Build the static site
    Build {
        /// Path to site directory
        path: PathBuf,

        /// Output directory (defaults to dist/, or docs/ with --production)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Production build: records the environment and defaults output to docs/
        #[arg(long)]
        production: bool,

        /// Embed the stylesheet and script into each page
        #[arg(long)]
        inline_assets: bool,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Init { path } => commands::init::run(path).await,
        Command::Validate { path, json } => commands::validate::run(path, json).await,
        Command::Preview { path, port } => commands::preview::run(path, port).await,
        Command::Build {
            path,
            output,
            production,
            inline_assets,
        } => {
            commands::build::run(
                path,
                commands::build::BuildArgs {
                    output,
                    production,
                    inline_assets,
                },
            )
            .await
        }
        Command::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "conference-kit", &mut io::stdout());
            Ok(())
        }
    }
}
