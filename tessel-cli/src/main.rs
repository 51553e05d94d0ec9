use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tessel_cli::InputMode;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "tessel", version, about = "Tessel template markup compiler")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the parsed node tree as JSON.
    Tree {
        /// Template file
        input: PathBuf,
        /// Treat the whole file as one literal fragment
        #[arg(long)]
        plain: bool,
        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },
    /// Print the linearized event stream.
    Events {
        /// Template file
        input: PathBuf,
        #[arg(long)]
        plain: bool,
    },
    /// Compile a template into a Rust expression.
    Build {
        /// Template file
        input: PathBuf,
        #[arg(long)]
        plain: bool,
        /// Output directory (default: target/tessel-gen)
        #[arg(long)]
        out_dir: Option<PathBuf>,
        /// Runtime module providing VNode, Child and Props (default: ::tessel::vdom)
        #[arg(long)]
        runtime: Option<String>,
    },
}

fn mode(plain: bool) -> InputMode {
    if plain {
        InputMode::Plain
    } else {
        InputMode::Template
    }
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_env("TESSEL_LOG")
                .or_else(|_| EnvFilter::try_from_default_env())
                .unwrap_or_else(|_| "tessel=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Tree {
            input,
            plain,
            pretty,
        } => println!("{}", tessel_cli::tree_cmd(&input, mode(plain), pretty)?),
        Commands::Events { input, plain } => {
            print!("{}", tessel_cli::events_cmd(&input, mode(plain))?)
        }
        Commands::Build {
            input,
            plain,
            out_dir,
            runtime,
        } => {
            let out_path = tessel_cli::build_cmd(
                &input,
                mode(plain),
                out_dir.as_deref(),
                runtime.as_deref(),
            )?;
            println!("Generated: {}", out_path.display());
        }
    }
    Ok(())
}
