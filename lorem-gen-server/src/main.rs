mod config;
mod limits;

use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{get, web, App, HttpResponse, HttpServer, Responder};
use anyhow::Context;
use clap::Parser;
use log::{error, info};
use lorem_gen_core::{GenerationInput, Generator, Mode, Range, WordBank};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Deserialize;

use config::Config;
use limits::Limits;

/// Query parameters shared by every generation endpoint
///
/// Fields a mode does not use are accepted and ignored: `mode` only matters
/// for `/v1/generate`, `as_html` and `sentence_range` only for paragraphs,
/// `word_range` for everything but words.
#[derive(Deserialize, Default)]
struct GenerateParams {
	mode: Option<String>,
	count: Option<i32>,
	starts_with_lorem: Option<bool>,
	as_html: Option<bool>,
	sentence_range: Option<String>, // "min-max", ignored when malformed
	word_range: Option<String>,
	seed: Option<u64>
}

impl GenerateParams {
	/// Mode requested by the `mode` parameter, paragraphs when absent.
	fn mode(&self) -> Result<Mode, String> {
		match &self.mode {
			None => Ok(Mode::Paragraphs),
			Some(s) => s.parse().map_err(|e| format!("{e}, expected paragraphs, sentences or words")),
		}
	}

	/// Builds the request, applying the command-line defaults to missing parameters.
	fn generation_input(&self, mode: Mode) -> GenerationInput {
		let defaults = GenerationInput::default();
		GenerationInput {
			mode,
			count: self.count.unwrap_or(defaults.count),
			starts_with_lorem: self.starts_with_lorem.unwrap_or(defaults.starts_with_lorem),
			as_html: self.as_html.unwrap_or(defaults.as_html),
			sentence_range: self.sentence_range.as_deref().and_then(Range::parse),
			word_range: self.word_range.as_deref().and_then(Range::parse),
		}
	}
}

/// Generates the text for `mode` and wraps it in a plain-text response.
///
/// # Behavior
/// - Requests over `limits` are answered with `400 Bad Request`.
/// - Generation runs on the blocking thread pool, off the async workers.
/// - A `seed` parameter makes the response reproducible.
async fn generated(
	generator: web::Data<Generator>,
	limits: &Limits,
	params: &GenerateParams,
	mode: Mode,
) -> HttpResponse {
	let input = params.generation_input(mode);
	if let Err(e) = limits.check(&input) {
		return HttpResponse::BadRequest().body(e);
	}

	let seed = params.seed;
	let result = web::block(move || match seed {
		Some(seed) => generator.generate(&mut StdRng::seed_from_u64(seed), &input),
		None => generator.generate(&mut rand::rng(), &input),
	})
	.await;

	match result {
		Ok(text) => HttpResponse::Ok().content_type("text/plain; charset=utf-8").body(text),
		Err(e) => {
			error!("generation task failed: {e}");
			HttpResponse::InternalServerError().body("Generation failed")
		}
	}
}

/// HTTP GET endpoint `/v1/generate`
///
/// Dispatches on the `mode` query parameter.
#[get("/v1/generate")]
async fn get_generated(
	generator: web::Data<Generator>,
	limits: web::Data<Limits>,
	query: web::Query<GenerateParams>,
) -> impl Responder {
	match query.mode() {
		Ok(mode) => generated(generator, &limits, &query, mode).await,
		Err(e) => HttpResponse::BadRequest().body(e),
	}
}

#[get("/v1/paragraphs")]
async fn get_paragraphs(
	generator: web::Data<Generator>,
	limits: web::Data<Limits>,
	query: web::Query<GenerateParams>,
) -> impl Responder {
	generated(generator, &limits, &query, Mode::Paragraphs).await
}

#[get("/v1/sentences")]
async fn get_sentences(
	generator: web::Data<Generator>,
	limits: web::Data<Limits>,
	query: web::Query<GenerateParams>,
) -> impl Responder {
	generated(generator, &limits, &query, Mode::Sentences).await
}

#[get("/v1/words")]
async fn get_words(
	generator: web::Data<Generator>,
	limits: web::Data<Limits>,
	query: web::Query<GenerateParams>,
) -> impl Responder {
	generated(generator, &limits, &query, Mode::Words).await
}

/// HTTP GET endpoint `/v1/vocabulary`, the active word bank as JSON.
#[get("/v1/vocabulary")]
async fn get_vocabulary(generator: web::Data<Generator>) -> impl Responder {
	HttpResponse::Ok().json(generator.word_bank())
}

/// Main entry point for the server.
///
/// Builds the vocabulary once, shares the generator between workers
/// (it is read-only, each request uses its own random number generator)
/// and starts an Actix-web HTTP server.
#[actix_web::main]
async fn main() -> anyhow::Result<()> {
	let config = Config::parse();

	let mut logger_builder = env_logger::Builder::from_default_env();
	if std::env::var_os("RUST_LOG").is_none() {
		logger_builder.filter_level(config.log_level.parse().unwrap_or(log::LevelFilter::Info));
	}
	logger_builder.init();

	let bank = match &config.vocabulary {
		Some(folder) => WordBank::from_folder(folder)
			.with_context(|| format!("Failed to load vocabulary from {}", folder.display()))?,
		None => WordBank::default(),
	};
	let generator = web::Data::new(Generator::new(bank));
	let limits = web::Data::new(Limits { max_count: config.max_count, max_words: config.max_words });

	info!("Starting lorem-gen-server on {}:{} ({:?})", config.host, config.port, limits.get_ref());
	HttpServer::new(move || {
		App::new()
			.wrap(Logger::default())
			.wrap(Cors::default().allow_any_origin().allowed_methods(vec!["GET"]))
			.app_data(generator.clone())
			.app_data(limits.clone())
			.service(get_generated)
			.service(get_paragraphs)
			.service(get_sentences)
			.service(get_words)
			.service(get_vocabulary)
	})
		.bind((config.host.as_str(), config.port))?
		.run()
		.await?;

	Ok(())
}
