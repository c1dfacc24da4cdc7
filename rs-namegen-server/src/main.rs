use std::sync::Mutex;

use actix_web::{App, HttpResponse, HttpServer, Responder, get, put, web};

use log::{error, info};
use rs_namegen_core::config::{ModelSettings, NameSettings, Settings};
use rs_namegen_core::io::{list_stems, normalize_folder};
use rs_namegen_core::model::generator::Generator;
use rs_namegen_core::random::RngSource;
use serde::Deserialize;

/// Query parameters for the `/v1/generate` endpoint
#[derive(Deserialize)]
struct GenerateParams {
	corpus: Option<String>,
	min_length: Option<usize>,
	max_length: Option<usize>,
	count: Option<usize>,
}

/// Query parameters for the `/v1/load_corpora` endpoint
#[derive(Deserialize)]
struct LoadQuery {
	names: Option<String>,
	order: Option<usize>,
	prior: Option<f64>,
	backoff: Option<bool>,
}

struct SharedData {
	generator: Generator,
	names: NameSettings,
	data_dir: String,
}

impl LoadQuery {
	/// Model settings of the query, falling back to `defaults` per field.
	fn model_settings(&self, defaults: &ModelSettings) -> ModelSettings {
		ModelSettings {
			order: self.order.unwrap_or(defaults.order),
			prior: self.prior.unwrap_or(defaults.prior),
			backoff: self.backoff.unwrap_or(defaults.backoff),
		}
	}
}

/// HTTP GET endpoint `/v1/generate`
///
/// Generates names from a loaded corpus, one per line. Without `corpus` the
/// first loaded corpus (by name) is used. `count` is clamped to `max_count`.
#[get("/v1/generate")]
async fn get_generated(data: web::Data<Mutex<SharedData>>, query: web::Query<GenerateParams>) -> impl Responder {
	let shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Generator lock failed"),
	};

	let min_length = query.min_length.unwrap_or(shared_data.names.min_length);
	let max_length = query.max_length.unwrap_or(shared_data.names.max_length);
	let count = query.count.unwrap_or(shared_data.names.count).min(shared_data.names.max_count);

	let corpus = match query.corpus.clone().or_else(|| shared_data.generator.corpus_names().into_iter().next()) {
		Some(c) => c,
		None => return HttpResponse::BadRequest().body("No corpus loaded"),
	};

	let mut rng = RngSource::thread();
	let mut names = Vec::with_capacity(count);
	for _ in 0..count {
		match shared_data.generator.generate_name(&corpus, min_length, max_length, &mut rng) {
			Ok(name) => names.push(name),
			Err(e) => return HttpResponse::BadRequest().body(e.to_string()),
		}
	}

	HttpResponse::Ok().body(names.join("\n"))
}

#[get("/v1/corpora")]
async fn get_corpora(data: web::Data<Mutex<SharedData>>) -> impl Responder {
	let data_dir = match data.lock() {
		Ok(m) => m.data_dir.clone(),
		Err(_) => return HttpResponse::InternalServerError().body("Generator lock failed"),
	};
	match list_stems(normalize_folder(&data_dir), "txt") {
		Ok(names) => HttpResponse::Ok().body(names.join("\n")),
		Err(_) => HttpResponse::InternalServerError().body("Failed to list corpora"),
	}
}

#[get("/v1/loaded_corpora")]
async fn get_loaded_corpora(data: web::Data<Mutex<SharedData>>) -> impl Responder {
	let shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Generator lock failed"),
	};
	HttpResponse::Ok().body(shared_data.generator.corpus_names().join("\n"))
}

/// HTTP PUT endpoint `/v1/load_corpora`
///
/// Rebuilds the generator from the named corpora. Everything previously
/// loaded is dropped, so this also retrains with new model settings.
#[put("/v1/load_corpora")]
async fn put_corpora(data: web::Data<Mutex<SharedData>>, query: web::Query<LoadQuery>) -> impl Responder {
	let mut shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Generator lock failed"),
	};

	let query_names = match &query.names {
		Some(s) if !s.trim().is_empty() => s.trim(),
		_ => return HttpResponse::BadRequest().body("Missing or empty corpus name"),
	};

	let corpus_names: Vec<&str> = query_names
		.split(',')
		.map(|s| s.trim())
		.filter(|s| !s.is_empty())
		.collect();

	let settings = query.model_settings(shared_data.generator.settings());
	let folder = normalize_folder(&shared_data.data_dir);
	let mut generator = Generator::new(settings);
	for name in corpus_names {
		let corpus_path = folder.join(format!("{name}.txt"));
		if let Err(e) = generator.load_corpus(&corpus_path) {
			error!("failed to load corpus '{}': {}", name, e);
			return HttpResponse::InternalServerError().body(format!("Failed to load corpus: {e}"));
		}
	}

	// Swap only once every corpus trained, so a failed load keeps the old state
	shared_data.generator = generator;
	HttpResponse::Ok().body("Corpora loaded successfully")
}

/// Main entry point for the server.
///
/// Reads settings from the file named by `NAMEGEN_CONFIG` (default
/// `namegen.toml`, missing file means defaults), loads every corpus of the
/// data folder, wraps the generator in a `Mutex` and starts the server.
#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

	let config_path = std::env::var("NAMEGEN_CONFIG").unwrap_or_else(|_| "namegen.toml".to_owned());
	let settings = Settings::load(&config_path)?;

	let generator = match Generator::from_folder(&settings.server.data_dir, settings.model.clone()) {
		Ok(g) => g,
		Err(e) => {
			error!("no corpus loaded from '{}': {}", settings.server.data_dir, e);
			Generator::new(settings.model.clone())
		}
	};
	info!("loaded corpora: {:?}", generator.corpus_names());

	let shared_data = SharedData {
		generator,
		names: settings.name.clone(),
		data_dir: settings.server.data_dir.clone(),
	};
	let shared_generator = web::Data::new(Mutex::new(shared_data));

	info!("listening on {}:{}", settings.server.host, settings.server.port);
	HttpServer::new(move || {
		App::new()
			.app_data(shared_generator.clone())
			.service(get_generated)
			.service(get_corpora)
			.service(put_corpora)
			.service(get_loaded_corpora)
	})
	.bind((settings.server.host.as_str(), settings.server.port))?
	.run()
	.await?;

	Ok(())
}
