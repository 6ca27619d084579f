use std::{env, io, process::ExitCode};

use anyhow::{Context, bail};
use cli::Console;
use config::BannerConfig;
use liblife::Life;
use renderer::Renderer;
use tracing_subscriber::EnvFilter;

mod cli;
mod config;
mod renderer;
mod ticker;

const DEFAULT_LOG_FILTER: &str = "banner=info,liblife=warn";

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(io::stderr)
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> anyhow::Result<()> {
    let mut args = env::args().skip(1);

    // "-" keeps the defaults while still allowing a mode argument.
    let config = match args.next().filter(|path| path != "-") {
        Some(config_path) => BannerConfig::load(&config_path)
            .with_context(|| format!("Loading config from {config_path}"))?,
        None => BannerConfig::default(),
    };

    let mut life = Life::seeded(&config.life).context("Building the banner grid")?;
    let renderer = Renderer::new(io::stdout().lock(), config.palette);

    match args.next().as_deref().unwrap_or("run") {
        "run" => {
            let mut renderer = renderer;
            ticker::run_animation(&mut life, &config, &mut renderer)
        }
        "console" => {
            let mut console = Console::new(life, config, renderer);
            console.run(io::stdin().lock(), io::stderr())
        }
        mode => bail!("Unknown mode {mode:?}, expected \"run\" or \"console\""),
    }
}
