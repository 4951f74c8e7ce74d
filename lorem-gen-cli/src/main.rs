mod config;

use std::process;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use config::Config;
use log::{debug, info};
use lorem_gen_core::{Generator, Mode, WordBank};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn main() -> Result<()> {
	let config = Config::parse();

	// Logs go to stderr, stdout only carries the generated text
	let mut logger_builder = env_logger::Builder::from_default_env();
	if std::env::var_os("RUST_LOG").is_none() {
		logger_builder.filter_level(config.log_level.parse().unwrap_or(log::LevelFilter::Warn));
	}
	logger_builder.init();
	debug!("Configuration: {:?}", config);

	let mode = match config.mode.parse::<Mode>() {
		Ok(mode) => mode,
		Err(e) => {
			eprintln!("{e}");
			eprintln!("{}", Config::command().render_help());
			process::exit(1);
		}
	};

	let bank = match &config.vocabulary {
		Some(folder) => {
			info!("Loading vocabulary from {}", folder.display());
			WordBank::from_folder(folder)
				.with_context(|| format!("Failed to load vocabulary from {}", folder.display()))?
		}
		None => WordBank::default(),
	};
	let generator = Generator::new(bank);
	let input = config.generation_input(mode);

	let text = match config.seed {
		Some(seed) => generator.generate(&mut StdRng::seed_from_u64(seed), &input),
		None => generator.generate(&mut rand::rng(), &input),
	};
	println!("{text}");

	Ok(())
}
