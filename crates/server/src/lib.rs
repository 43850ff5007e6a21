//! Unified Backend Server
//!
//! Wires accounts, stats, and the daily word into a single actix-web server.
//!
//! ## Routes
//!
//! - `POST /register`, `POST /login`, `POST /logout` — Accounts and sessions
//! - `GET /getUser/{username}`, `GET /api/user` — Gated profile lookups
//! - `PATCH /updateResults` — Gated game outcome reporting
//! - `GET /words`, `GET /api/words`, `GET /todaysword` — Dictionary and word of the day
//! - `GET /`, `GET /health` — Liveness
mod config;

pub use config::*;

use actix_cors::Cors;
use actix_web::App;
use actix_web::HttpRequest;
use actix_web::HttpResponse;
use actix_web::HttpServer;
use actix_web::Responder;
use actix_web::error::InternalError;
use actix_web::error::JsonPayloadError;
use actix_web::http::header;
use actix_web::middleware::Logger;
use actix_web::web;
use anyhow::Context;
use prodle_auth::CookiePolicy;
use prodle_auth::Credentials;
use prodle_auth::Crypto;
use prodle_core::ErrorBody;
use prodle_core::Failure;
use prodle_database::Memory;
use prodle_database::Postgres;
use prodle_database::Repository;
use prodle_stats::Scorekeeper;
use prodle_words::Dictionary;
use prodle_words::PoolError;
use prodle_words::Scheduler;
use prodle_words::WordPool;
use std::sync::Arc;

/// Shared application state, cloned into every worker.
#[derive(Clone)]
pub struct Backend {
    repo: web::Data<Arc<dyn Repository>>,
    crypto: web::Data<Crypto>,
    policy: web::Data<CookiePolicy>,
    credentials: web::Data<Credentials>,
    scorekeeper: web::Data<Scorekeeper>,
    pool: web::Data<WordPool>,
}

impl Backend {
    pub fn new(
        repo: Arc<dyn Repository>,
        crypto: Crypto,
        policy: CookiePolicy,
        dictionary: Dictionary,
    ) -> Self {
        Self {
            credentials: web::Data::new(Credentials::new(repo.clone(), crypto.clone())),
            scorekeeper: web::Data::new(Scorekeeper::new(repo.clone())),
            pool: web::Data::new(WordPool::new(repo.clone(), dictionary)),
            crypto: web::Data::new(crypto),
            policy: web::Data::new(policy),
            repo: web::Data::new(repo),
        }
    }
    pub fn pool(&self) -> Arc<WordPool> {
        self.pool.clone().into_inner()
    }
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Registers state, body limits, and every route on an app.
    #[rustfmt::skip]
    pub fn configure(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(self.repo.clone())
            .app_data(self.crypto.clone())
            .app_data(self.policy.clone())
            .app_data(self.credentials.clone())
            .app_data(self.scorekeeper.clone())
            .app_data(self.pool.clone())
            .app_data(web::JsonConfig::default().error_handler(malformed))
            .route("/",                    web::get().to(greet))
            .route("/health",              web::get().to(health))
            .route("/register",            web::post().to(prodle_auth::register))
            .route("/login",               web::post().to(prodle_auth::login))
            .route("/logout",              web::post().to(prodle_auth::logout))
            .route("/getUser/{username}",  web::get().to(prodle_auth::get_user))
            .route("/updateResults",       web::patch().to(prodle_stats::update_results))
            .route("/words",               web::get().to(prodle_words::words))
            .route("/todaysword",          web::get().to(prodle_words::todays_word))
            .service(
                web::scope("/api")
                    .route("/words",       web::get().to(prodle_words::words))
                    .route("/user",        web::get().to(prodle_auth::me)),
            );
    }
}

async fn greet() -> impl Responder {
    HttpResponse::Ok().body("Hello from prodle")
}

async fn health(repo: web::Data<Arc<dyn Repository>>) -> impl Responder {
    match repo
        .ping()
        .await
        .inspect_err(|e| log::error!("health check failed: {}", e))
    {
        Ok(_) => HttpResponse::Ok().body("ok"),
        Err(_) => HttpResponse::ServiceUnavailable().body("database unavailable"),
    }
}

/// Unparseable request bodies answer in the same shape as every other failure.
fn malformed(err: JsonPayloadError, _: &HttpRequest) -> actix_web::Error {
    let body = ErrorBody {
        kind: Failure::Invalid,
        error: err.to_string(),
    };
    InternalError::from_response(err, HttpResponse::BadRequest().json(body)).into()
}

pub fn cors(origin: &str) -> Cors {
    Cors::default()
        .allowed_origin(origin)
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS", "PATCH"])
        .allowed_headers(vec![header::CONTENT_TYPE, header::AUTHORIZATION])
        .supports_credentials()
}

async fn repository(config: &Config) -> anyhow::Result<Arc<dyn Repository>> {
    match config.db_url.as_deref() {
        Some(url) => {
            log::info!("connecting to postgres");
            Ok(Arc::new(Postgres::connect(url).await.context("connecting to postgres")?))
        }
        None => {
            log::warn!("DB_URL unset, keeping all state in memory");
            Ok(Arc::new(Memory::new()))
        }
    }
}

async fn dictionary(config: &Config, repo: &dyn Repository) -> anyhow::Result<Dictionary> {
    let dictionary = match config.words_path.as_deref() {
        Some(path) => Dictionary::load(path)
            .await
            .with_context(|| format!("reading dictionary {}", path.display()))?,
        None => Dictionary::fetch(repo).await.context("reading words collection")?,
    };
    if dictionary.is_empty() {
        log::warn!("dictionary is empty");
    }
    log::info!("loaded dictionary of {} words", dictionary.len());
    Ok(dictionary)
}

/// Seeds the daily pool on first start and restocks it with any new words after.
async fn stock(config: &Config, pool: &WordPool) -> anyhow::Result<()> {
    let words = match config.pool_path.as_deref() {
        Some(path) => Dictionary::load(path)
            .await
            .with_context(|| format!("reading daily pool {}", path.display()))?
            .words()
            .to_vec(),
        None => pool.dictionary().words().to_vec(),
    };
    let unknown = words
        .iter()
        .filter(|w| !pool.dictionary().contains(w))
        .count();
    if unknown > 0 {
        log::warn!("{} daily pool words are not legal guesses", unknown);
    }
    let added = pool.restock(words).await.context("stocking daily pool")?;
    log::info!(
        "daily pool holds {} words ({} new)",
        pool.remaining().await.context("reading daily pool")?,
        added
    );
    Ok(())
}

/// Builds state from configuration, starts the rotation scheduler, and serves.
pub async fn run(config: Config) -> anyhow::Result<()> {
    let schedule = config.schedule().context("parsing rotation schedule")?;
    let repo = repository(&config).await?;
    let crypto = Crypto::new(config.jwt_secret.as_bytes());
    let dictionary = dictionary(&config, repo.as_ref()).await?;
    let backend = Backend::new(repo, crypto, config.cookie_policy(), dictionary);
    stock(&config, &backend.pool()).await?;
    let scheduler = Arc::new(Scheduler::new(backend.pool(), schedule));
    if config.rotate_on_start && backend.pool().current().await == Err(PoolError::NoWordSet) {
        log::info!("no word of the day yet, rotating now");
        scheduler.fire().await;
    }
    scheduler.spawn();
    let origin = config.allowed_origin.clone();
    log::info!("starting server on {}", config.bind_addr);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::new("%r %s %Ts"))
            .wrap(cors(&origin))
            .configure(|cfg| backend.configure(cfg))
    })
    .workers(config.workers)
    .bind(&config.bind_addr)
    .with_context(|| format!("binding {}", config.bind_addr))?
    .run()
    .await
    .context("serving")
}
