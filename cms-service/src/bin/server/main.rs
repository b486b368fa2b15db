use std::sync::Arc;

use cms_service::config::Config;
use cms_service::domain::auth::service::AuthService;
use cms_service::domain::category::service::CategoryService;
use cms_service::domain::comment::service::CommentService;
use cms_service::domain::news::service::NewsService;
use cms_service::domain::page::service::PageService;
use cms_service::domain::user::ports::UserServicePort;
use cms_service::domain::user::service::UserService;
use cms_service::inbound::http::router::create_router;
use cms_service::inbound::http::router::AppState;
use cms_service::outbound::repositories::PostgresCategoryRepository;
use cms_service::outbound::repositories::PostgresCommentRepository;
use cms_service::outbound::repositories::PostgresNewsRepository;
use cms_service::outbound::repositories::PostgresPageRepository;
use cms_service::outbound::repositories::PostgresUserRepository;
use cms_service::outbound::tokens::JwtTokenProvider;
use sqlx::postgres::PgPoolOptions;
use tokio::signal;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cms_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "cms-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        max_connections = config.database.max_connections,
        password_algorithm = ?config.password.algorithm,
        seed_users = config.seed.users.len(),
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = config.database.max_connections,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let password_hasher = config.password.hasher();
    let token_provider = Arc::new(JwtTokenProvider::new(&config.jwt.token_config()?)?);

    let user_repository = Arc::new(PostgresUserRepository::new(pg_pool.clone()));
    let category_repository = Arc::new(PostgresCategoryRepository::new(pg_pool.clone()));
    let news_repository = Arc::new(PostgresNewsRepository::new(pg_pool.clone()));
    let comment_repository = Arc::new(PostgresCommentRepository::new(pg_pool.clone()));
    let page_repository = Arc::new(PostgresPageRepository::new(pg_pool));

    let user_service = UserService::new(Arc::clone(&user_repository), password_hasher);
    if let Err(e) = user_service.seed_users(&config.seed.accounts()).await {
        tracing::error!(error = %e, "User seeding aborted");
    }

    let state = AppState {
        auth_service: Arc::new(AuthService::new(
            user_repository,
            token_provider,
            password_hasher,
        )),
        category_service: Arc::new(CategoryService::new(Arc::clone(&category_repository))),
        news_service: Arc::new(NewsService::new(
            Arc::clone(&news_repository),
            category_repository,
        )),
        comment_service: Arc::new(CommentService::new(comment_repository, news_repository)),
        page_service: Arc::new(PageService::new(page_repository)),
    };

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    axum::serve(http_listener, create_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server exited successfully");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, draining connections");
}
