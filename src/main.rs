use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use wiki::infrastructure::{AppState, Templates};
use wiki::{config, db, seed, server};

#[tokio::main]
async fn main() {
    // Load .env before anything reads the environment, RUST_LOG included
    let env_file = config::load_env_file();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wiki=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match env_file.expect("Failed to load .env file") {
        Some(path) => tracing::info!("Loaded environment from {}", path.display()),
        None => tracing::debug!("No .env file found"),
    }

    // Load configuration
    let config = config::Config::from_env();

    // Initialize database
    let db = db::init_db(&config.database_url)
        .await
        .expect("Failed to initialize database");

    if config.seed_front_page {
        match seed::seed_front_page(&db).await {
            Ok(true) => tracing::info!("Front page seeded."),
            Ok(false) => tracing::info!("Front page already exists, not seeding."),
            Err(e) => tracing::error!("Failed to seed front page: {}", e),
        }
    }

    let templates = match &config.template_dir {
        Some(dir) => Templates::load(dir).expect("Failed to load templates"),
        None => Templates::builtin(),
    };

    let state = AppState::new(db, templates);

    server::serve(state, config.port)
        .await
        .expect("Failed to start server");
}
