use std::{env, fs, io};

use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{App, HttpResponse, HttpServer, Responder, get, web};
use env_logger::Env;
use log::{error, info};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use rs_markov_core::{ChainOrder, DEFAULT_MAX_WORDS, GenerationInput, Generator, tokenize};

const DEFAULT_CORPUS: &str = "./data/corpus.txt";
const DEFAULT_BIND: &str = "127.0.0.1:5000";

/// Upper limit accepted for `max_words` in a single request.
const MAX_WORDS_LIMIT: usize = 10_000;

/// Query parameters for the `/v1/generate` endpoint
///
/// An order other than 1 or 2 fails deserialization, which the query
/// extractor reports as 400 Bad Request.
#[derive(Deserialize)]
struct GenerateParams {
	order: Option<ChainOrder>,
	max_words: Option<usize>,
	seed: Option<u64>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct ChainStats {
	states: usize,
	transitions: usize,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Stats {
	tokens: usize,
	unigram: ChainStats,
	bigram: ChainStats,
}

/// Chains of both orders built once from the corpus.
///
/// Never mutated after startup, so workers share it without locking.
struct SharedData {
	tokens: usize,
	unigram: Generator,
	bigram: Generator,
}

impl SharedData {
	fn new(corpus: &str) -> Self {
		let tokens = tokenize(corpus);
		Self {
			tokens: tokens.len(),
			unigram: Generator::from_tokens(&tokens, &GenerationInput::new(ChainOrder::Unigram)),
			bigram: Generator::from_tokens(&tokens, &GenerationInput::new(ChainOrder::Bigram)),
		}
	}

	fn generator(&self, order: ChainOrder) -> &Generator {
		match order {
			ChainOrder::Unigram => &self.unigram,
			ChainOrder::Bigram => &self.bigram,
		}
	}

	fn stats(&self) -> Stats {
		let chain_stats = |generator: &Generator| ChainStats {
			states: generator.states(),
			transitions: generator.transitions(),
		};
		Stats {
			tokens: self.tokens,
			unigram: chain_stats(&self.unigram),
			bigram: chain_stats(&self.bigram),
		}
	}
}

/// Server settings read from the environment.
struct Settings {
	corpus: String,
	bind: String,
}

impl Settings {
	fn from_env() -> Self {
		Self {
			corpus: env::var("MARKOV_CORPUS").unwrap_or_else(|_| DEFAULT_CORPUS.to_owned()),
			bind: env::var("MARKOV_BIND").unwrap_or_else(|_| DEFAULT_BIND.to_owned()),
		}
	}
}

/// HTTP GET endpoint `/v1/generate`
///
/// Generates text from the chain of the requested order.
/// Returns the generated text as the response body, empty for a corpus too
/// short to build that chain.
#[get("/v1/generate")]
async fn get_generated(data: web::Data<SharedData>, query: web::Query<GenerateParams>) -> impl Responder {
	let max_words = query.max_words.unwrap_or(DEFAULT_MAX_WORDS);
	if max_words > MAX_WORDS_LIMIT {
		return HttpResponse::BadRequest()
			.body(format!("max_words must be at most {MAX_WORDS_LIMIT}, got {max_words}"));
	}
	let order = query.order.unwrap_or_default();
	let generator = data.generator(order);

	let text = match query.seed {
		Some(seed) => generator.generate_bounded(max_words, &mut StdRng::seed_from_u64(seed)),
		None => generator.generate_bounded(max_words, &mut rand::rng()),
	};
	HttpResponse::Ok().content_type("text/plain; charset=utf-8").body(text)
}

/// HTTP GET endpoint `/v1/stats`
///
/// Returns token and chain sizes as JSON.
#[get("/v1/stats")]
async fn get_stats(data: web::Data<SharedData>) -> impl Responder {
	HttpResponse::Ok().json(data.stats())
}

fn routes(cfg: &mut web::ServiceConfig) {
	cfg.service(get_generated).service(get_stats);
}

/// Main entry point for the server.
///
/// Reads the corpus named by `MARKOV_CORPUS`, builds both chains, and
/// serves them on `MARKOV_BIND`.
#[actix_web::main]
async fn main() -> io::Result<()> {
	env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

	let settings = Settings::from_env();
	let corpus = fs::read_to_string(&settings.corpus).map_err(|e| {
		error!("Failed to read corpus {}: {e}", settings.corpus);
		io::Error::new(e.kind(), format!("failed to read corpus {}: {e}", settings.corpus))
	})?;

	let shared_data = web::Data::new(SharedData::new(&corpus));
	let stats = shared_data.stats();
	info!(
		"Loaded {} tokens from {}: {} unigram states, {} bigram states",
		stats.tokens, settings.corpus, stats.unigram.states, stats.bigram.states
	);
	info!("Listening on {}", settings.bind);

	HttpServer::new(move || {
		App::new()
			.wrap(Cors::permissive())
			.wrap(Logger::default())
			.app_data(shared_data.clone())
			.configure(routes)
	})
		.bind(&settings.bind)?
		.run()
		.await
}
