//! Demo App API - Main Entry Point

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use demo_app::application::lifecycle::{AppRegistry, AppUnit, ExtensionRegistry};
use demo_app::domain::signals::Signals;
use demo_app::infrastructure::driven_adapters::config::AppConfig;
use demo_app::infrastructure::driven_adapters::user_repository::InMemoryUserRepository;
use demo_app::infrastructure::driving_adapters::api_rest::build_app;
use demo_app::users::{self, signals::UsersSignals, UsersApp};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = AppConfig::load()?;

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "demo_app=debug,tower_http=debug".into());
    if config.logging.json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
    tracing::info!(debug = config.debug, "Configuration loaded successfully");

    // Bring up installed apps
    let signals = Arc::new(Signals::new());
    let mut extensions = ExtensionRegistry::new();
    extensions.register(users::SIGNALS_EXTENSION, UsersSignals);

    let installed_apps: Vec<Box<dyn AppUnit>> = vec![Box::new(UsersApp::new())];
    let mut apps = AppRegistry::new();
    apps.populate(installed_apps, &mut extensions, &signals)?;
    tracing::info!(apps = apps.apps().count(), "Installed apps ready");

    // Create repository
    let user_repository = Arc::new(InMemoryUserRepository::from_seed(&config.users));

    // Build router
    let app = build_app(&config, user_repository, signals);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
