//! `ladybug` — drive behavior-tree ladybugs on a grid from a command stream.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use lb_cli::{load_config, logging, Session};

#[derive(Parser)]
#[command(name = "ladybug", version, about = "Behavior-tree ladybug simulator")]
struct Cli {
    /// Command script to run; reads stdin when omitted.
    script: Option<PathBuf>,

    /// TOML file with simulation settings.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log filter directives (overrides `RUST_LOG`), e.g. `lb_behavior=debug`.
    #[arg(long, value_name = "FILTER")]
    log_level: Option<String>,

    /// Do not echo loaded board and tree files.
    #[arg(long)]
    no_echo: bool,

    /// Do not restart a resumed tree that finishes without acting.
    #[arg(long)]
    no_wrap: bool,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log_level.as_deref());

    let mut config = load_config(cli.config.as_deref())?;
    if cli.no_echo {
        config.echo_inputs = false;
    }
    if cli.no_wrap {
        config.wrap_around = false;
    }

    let mut session = Session::new(config, io::stdout().lock());
    match cli.script {
        Some(path) => {
            let file = File::open(&path).with_context(|| format!("open {}", path.display()))?;
            session.run(BufReader::new(file))?;
        }
        None => session.run(io::stdin().lock())?,
    }
    Ok(())
}
