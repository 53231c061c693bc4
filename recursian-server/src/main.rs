use std::env;
use std::sync::Mutex;

use actix_cors::Cors;
use actix_web::{get, middleware, put, web, App, HttpResponse, HttpServer, Responder};
use log::{info, warn};

use serde::{Deserialize, Serialize};
use recursian_core::model::alphabet::{CONSONANTS, VOWELS};
use recursian_core::model::generation_input::DEFAULT_MAX_SYLLABLES;
use recursian_core::{random_word, syllabify, word_count, GenerationInput, RecursianError, WordCache};

/// Query parameters for the `/v1/words`, `/v1/count` and `/v1/random` endpoints
#[derive(Deserialize)]
struct WordsParams {
	syllables: Option<i64>,
	sorted: Option<bool>,
}

#[derive(Deserialize)]
struct CheckQuery {
	word: Option<String>,
}

#[derive(Serialize)]
struct Alphabet {
	consonants: String,
	vowels: String,
}

/// Random words are built syllable by syllable, so they get a larger limit than listings.
const DEFAULT_MAX_RANDOM_SYLLABLES: i64 = 1024;

struct SharedData {
	cache: WordCache,
	max_syllables: i64,
	max_random_syllables: i64,
}

/// Server settings read from the environment.
///
/// - `RECURSIAN_HOST` (default `127.0.0.1`)
/// - `RECURSIAN_PORT` (default `5000`)
/// - `RECURSIAN_MAX_SYLLABLES` (default `5`)
/// - `RECURSIAN_MAX_RANDOM_SYLLABLES` (default `1024`)
#[derive(Debug, PartialEq)]
struct ServerConfig {
	host: String,
	port: u16,
	max_syllables: i64,
	max_random_syllables: i64,
}

impl ServerConfig {
	fn from_env() -> Result<Self, String> {
		Self::from_lookup(|key| env::var(key).ok())
	}

	/// Builds the configuration from an arbitrary key lookup.
	fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> Result<Self, String> {
		let host = lookup("RECURSIAN_HOST").unwrap_or_else(|| "127.0.0.1".to_owned());
		let port = match lookup("RECURSIAN_PORT") {
			Some(p) => p.parse::<u16>().map_err(|_| format!("Invalid RECURSIAN_PORT: {p}"))?,
			None => 5000,
		};
		let max_syllables = parse_limit(&lookup, "RECURSIAN_MAX_SYLLABLES", DEFAULT_MAX_SYLLABLES)?;
		let max_random_syllables =
			parse_limit(&lookup, "RECURSIAN_MAX_RANDOM_SYLLABLES", DEFAULT_MAX_RANDOM_SYLLABLES)?;
		Ok(Self { host, port, max_syllables, max_random_syllables })
	}
}

/// Reads a non-negative syllable limit, falling back to `default` when unset.
fn parse_limit<F: Fn(&str) -> Option<String>>(lookup: &F, key: &str, default: i64) -> Result<i64, String> {
	match lookup(key) {
		Some(m) => match m.parse::<i64>() {
			Ok(v) if v >= 0 => Ok(v),
			_ => Err(format!("Invalid {key}: {m}")),
		},
		None => Ok(default),
	}
}

impl WordsParams {
	/// Builds a validated `GenerationInput` under the server's syllable limit.
	fn generation_input(&self, max_syllables: i64) -> Result<GenerationInput, RecursianError> {
		let mut input = GenerationInput::new(self.syllables.unwrap_or(1));
		input.sorted = self.sorted.unwrap_or(false);
		input.set_max_syllables(max_syllables)?;
		input.validate()?;
		Ok(input)
	}
}

/// Maps a core error to a response: caller mistakes are 400, the rest 500.
fn error_response(e: RecursianError) -> HttpResponse {
	if e.is_client_error() {
		HttpResponse::BadRequest().body(e.to_string())
	} else {
		warn!("request failed: {e}");
		HttpResponse::InternalServerError().body(e.to_string())
	}
}

/// HTTP GET endpoint `/v1/words`
///
/// Lists every word of the requested syllable count, one per line.
#[get("/v1/words")]
async fn get_words(data: web::Data<Mutex<SharedData>>, query: web::Query<WordsParams>) -> impl Responder {
	let mut shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Cache lock failed"),
	};

	let input = match query.generation_input(shared_data.max_syllables) {
		Ok(i) => i,
		Err(e) => return error_response(e),
	};

	match input.generate(&mut shared_data.cache) {
		Ok(words) => HttpResponse::Ok().body(words.join("\n")),
		Err(e) => error_response(e),
	}
}

#[get("/v1/count")]
async fn get_count(query: web::Query<WordsParams>) -> impl Responder {
	match word_count(query.syllables.unwrap_or(1)) {
		Ok(count) => HttpResponse::Ok().body(count.to_string()),
		Err(e) => error_response(e),
	}
}

/// HTTP GET endpoint `/v1/random`
///
/// Returns one random word, bounded by the server's random syllable limit.
#[get("/v1/random")]
async fn get_random(data: web::Data<Mutex<SharedData>>, query: web::Query<WordsParams>) -> impl Responder {
	let max_random_syllables = match data.lock() {
		Ok(m) => m.max_random_syllables,
		Err(_) => return HttpResponse::InternalServerError().body("Cache lock failed"),
	};

	let input = match query.generation_input(max_random_syllables) {
		Ok(i) => i,
		Err(e) => return error_response(e),
	};

	match random_word(input.syllables, &mut rand::rng()) {
		Ok(word) => HttpResponse::Ok().body(word),
		Err(e) => error_response(e),
	}
}

/// HTTP GET endpoint `/v1/check`
///
/// Returns the syllables of `word` joined by `-`, or 400 if it is not a Recursian word.
#[get("/v1/check")]
async fn get_check(query: web::Query<CheckQuery>) -> impl Responder {
	let word = match &query.word {
		Some(w) => w,
		None => return HttpResponse::BadRequest().body("Missing word"),
	};

	match syllabify(word) {
		Ok(syllables) => HttpResponse::Ok().body(
			syllables.iter().map(ToString::to_string).collect::<Vec<_>>().join("-"),
		),
		Err(e) => error_response(e),
	}
}

#[get("/v1/alphabet")]
async fn get_alphabet() -> impl Responder {
	HttpResponse::Ok().json(Alphabet {
		consonants: CONSONANTS.iter().collect(),
		vowels: VOWELS.iter().collect(),
	})
}

#[put("/v1/clear_cache")]
async fn put_clear_cache(data: web::Data<Mutex<SharedData>>) -> impl Responder {
	let mut shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Cache lock failed"),
	};
	shared_data.cache.clear();
	HttpResponse::Ok().body("Cache cleared")
}

/// Main entry point for the server.
///
/// Wraps the word cache in a `Mutex` for thread safety and starts an
/// Actix-web HTTP server on the configured address.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

	let config = ServerConfig::from_env()
		.map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

	let shared_data = SharedData {
		cache: WordCache::new(),
		max_syllables: config.max_syllables,
		max_random_syllables: config.max_random_syllables,
	};
	let shared_cache = web::Data::new(Mutex::new(shared_data));

	info!("listening on {}:{} (max {} syllables)", config.host, config.port, config.max_syllables);

	HttpServer::new(move || {
		App::new()
			.wrap(middleware::Logger::default())
			.wrap(Cors::permissive())
			.app_data(shared_cache.clone())
			.service(get_words)
			.service(get_count)
			.service(get_random)
			.service(get_check)
			.service(get_alphabet)
			.service(put_clear_cache)
	})
		.bind((config.host.as_str(), config.port))?
		.run()
		.await
}
