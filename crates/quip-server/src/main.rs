//! quip-server binary.
//!
//! Loads the configuration for the selected environment, opens the SQLite
//! sample store, and serves the REST API.
//!
//! # Password hash generation
//!
//! To generate the argon2 PHC string for `admin_password_hash` in a config
//! file:
//!
//! ```
//! cargo run -p quip-server -- --hash-password
//! ```

use std::sync::Arc;

use anyhow::Context as _;
use argon2::{Argon2, PasswordHasher, password_hash::SaltString};
use clap::{Parser, ValueEnum};
use quip_server::{AppState, ServerConfig, auth::AuthConfig};
use quip_store_sqlite::SqliteSampleStore;
use rand_core::OsRng;
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Deployment environment; selects which named configuration file is loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Environment {
  Test,
  Development,
  Production,
}

impl Environment {
  fn config_file(self) -> &'static str {
    match self {
      Environment::Test => "config/test",
      Environment::Development => "config/development",
      Environment::Production => "config/production",
    }
  }
}

#[derive(Parser)]
#[command(author, version, about = "quip sample API server")]
struct Cli {
  /// Which named configuration to load from `config/`.
  #[arg(short, long, value_enum, default_value = "development")]
  environment: Environment,

  /// Print the argon2 hash for a password entered on stdin and exit.
  #[arg(long)]
  hash_password: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Initialise tracing.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  // Helper mode: hash a password and exit.
  if cli.hash_password {
    let password = read_password()?;
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
      .hash_password(password.as_bytes(), &salt)
      .map_err(|e| anyhow::anyhow!("argon2 error: {e}"))?
      .to_string();
    println!("{hash}");
    return Ok(());
  }

  // Load the environment's configuration, with QUIP_-prefixed environment
  // variables overriding file values.
  let settings = config::Config::builder()
    .add_source(config::File::with_name(cli.environment.config_file()))
    .add_source(config::Environment::with_prefix("QUIP"))
    .build()
    .context("failed to read config file")?;

  let server_cfg: ServerConfig = settings
    .try_deserialize()
    .context("failed to deserialise ServerConfig")?;

  // Open the sample store.
  let store = SqliteSampleStore::open(&server_cfg.store_path)
    .await
    .with_context(|| {
      format!("failed to open store at {:?}", server_cfg.store_path)
    })?;

  // Build application state.
  let state = AppState {
    store: Arc::new(store),
    auth:  Arc::new(AuthConfig {
      username:      server_cfg.admin_username.clone(),
      password_hash: server_cfg.admin_password_hash.clone(),
    }),
    config: Arc::new(server_cfg.clone()),
  };

  let app = quip_server::router(state);
  let address = format!("{}:{}", server_cfg.host, server_cfg.port);

  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}

/// Read a password from stdin.
fn read_password() -> anyhow::Result<String> {
  use std::io::{self, BufRead, Write};
  let stdin = io::stdin();
  print!("Password: ");
  io::stdout().flush().ok();
  let mut line = String::new();
  stdin.lock().read_line(&mut line)?;
  Ok(
    line
      .trim_end_matches('\n')
      .trim_end_matches('\r')
      .to_string(),
  )
}
