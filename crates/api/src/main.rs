use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pawhome_api::config::ServerConfig;
use pawhome_api::router::build_app_router;
use pawhome_api::state::AppState;
use pawhome_core::roles::ROLE_ADMIN;
use pawhome_db::models::user::CreateUser;
use pawhome_db::repositories::UserRepo;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pawhome_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Database ---
    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = pawhome_db::create_pool(&database_url)
        .await
        .expect("Failed to connect to database");
    tracing::info!("Database connection pool created");

    pawhome_db::health_check(&pool)
        .await
        .expect("Database health check failed");
    tracing::info!("Database health check passed");

    pawhome_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");
    tracing::info!("Database migrations applied");

    // --- Admin bootstrap ---
    ensure_admin_user(&pool).await;

    // --- App state ---
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };

    // --- Router ---
    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Graceful shutdown complete");
}

/// Create an admin account on first boot.
///
/// Skipped when any admin already exists. Credentials come from
/// `ADMIN_USERNAME` / `ADMIN_EMAIL` / `ADMIN_PASSWORD`; without a password
/// set, nothing is created (never seed an account with a known default).
async fn ensure_admin_user(pool: &pawhome_db::DbPool) {
    let admin_exists = UserRepo::exists_admin(pool)
        .await
        .expect("Failed to check for admin account");
    if admin_exists {
        return;
    }

    let Ok(password) = std::env::var("ADMIN_PASSWORD") else {
        tracing::warn!("No admin account exists and ADMIN_PASSWORD is not set; skipping bootstrap");
        return;
    };

    let username = std::env::var("ADMIN_USERNAME").unwrap_or_else(|_| "admin".into());
    let email = std::env::var("ADMIN_EMAIL").unwrap_or_else(|_| "admin@pawhome.local".into());

    let hashed = pawhome_api::auth::password::hash_password(&password)
        .expect("Failed to hash admin password");

    let input = CreateUser {
        username: username.clone(),
        email: email.clone(),
        password_hash: hashed,
        role: ROLE_ADMIN.to_string(),
        first_name: None,
        last_name: None,
    };

    UserRepo::create(pool, &input)
        .await
        .expect("Failed to create admin account");
    tracing::info!(%username, %email, "Admin account created");
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix) so the server
/// shuts down cleanly whether stopped interactively or by a process
/// manager (e.g. systemd, Docker, Kubernetes).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
