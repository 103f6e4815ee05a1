//! Bistro Boss server entry point.

use std::sync::Arc;

use axum::http::Method;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use bistro_boss::adapters::auth::JwtTokenCodec;
use bistro_boss::adapters::email::{LoggingNotifier, MailgunConfig, MailgunNotifier};
use bistro_boss::adapters::http::{api_router, AppState};
use bistro_boss::adapters::memory::InMemoryStore;
use bistro_boss::adapters::postgres::{
    PostgresCartRepository, PostgresCatalogRepository, PostgresPaymentLedger,
    PostgresPaymentRepository, PostgresStatsReader, PostgresUserRepository,
};
use bistro_boss::adapters::stripe::{StripeConfig, StripePaymentAdapter};
use bistro_boss::application::AuthorizationGate;
use bistro_boss::config::{AppConfig, CorsPolicy, DatabaseConfig, EmailConfig, ServerConfig};
use bistro_boss::ports::{PaymentGateway, PaymentNotifier, TokenCodec, UserRepository};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config.server);
    config.validate()?;

    let token_codec: Arc<dyn TokenCodec> = Arc::new(JwtTokenCodec::new(
        config.auth.signing_secret(),
        config.auth.token_ttl_secs,
    ));
    let payment_gateway = build_payment_gateway(&config);
    let notifier = build_notifier(config.email.as_ref())?;

    let state = match &config.database {
        Some(database) => {
            postgres_state(database, token_codec, payment_gateway, notifier).await?
        }
        None => {
            tracing::warn!("No database configured, using the in-memory store");
            AppState::from_store(
                token_codec,
                Arc::new(InMemoryStore::new()),
                payment_gateway,
                notifier,
            )
        }
    }
    .with_currency(config.payment.currency.to_lowercase());

    let app = api_router(state)
        .layer(TimeoutLayer::new(config.server.request_timeout()))
        .layer(cors_layer(config.server.cors_policy()?))
        .layer(TraceLayer::new_for_http());

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, environment = ?config.server.environment, "Bistro Boss listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing(server: &ServerConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&server.log_level));
    let registry = tracing_subscriber::registry().with(filter);

    if server.is_production() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

fn build_payment_gateway(config: &AppConfig) -> Arc<dyn PaymentGateway> {
    let mut stripe = StripeConfig::new(config.payment.secret_key());
    if let Some(base) = &config.payment.stripe_api_base {
        stripe = stripe.with_base_url(base.clone());
    }
    if config.payment.is_test_mode() {
        tracing::info!("Stripe is in test mode");
    }
    Arc::new(StripePaymentAdapter::new(stripe))
}

fn build_notifier(
    email: Option<&EmailConfig>,
) -> Result<Arc<dyn PaymentNotifier>, Box<dyn std::error::Error>> {
    let Some(email) = email else {
        tracing::warn!("No email configured, payment confirmations are only logged");
        return Ok(Arc::new(LoggingNotifier));
    };

    let mut mailgun = MailgunConfig::new(email.api_key(), &email.domain, &email.from_email)
        .with_bcc(email.notify_email.clone());
    if let Some(base) = &email.api_base {
        mailgun = mailgun.with_base_url(base.clone());
    }
    Ok(Arc::new(MailgunNotifier::new(mailgun)?))
}

async fn postgres_state(
    database: &DatabaseConfig,
    token_codec: Arc<dyn TokenCodec>,
    payment_gateway: Arc<dyn PaymentGateway>,
    notifier: Arc<dyn PaymentNotifier>,
) -> Result<AppState, Box<dyn std::error::Error>> {
    tracing::info!(url = %database.redacted_url(), "Connecting to PostgreSQL");
    let pool = database.pool_options().connect(&database.url).await?;
    if database.run_migrations {
        sqlx::migrate!("./migrations").run(&pool).await?;
        tracing::info!("Database migrations applied");
    }

    let users: Arc<dyn UserRepository> = Arc::new(PostgresUserRepository::new(pool.clone()));
    Ok(AppState {
        gate: Arc::new(AuthorizationGate::new(token_codec.clone(), users.clone())),
        token_codec,
        users,
        catalog: Arc::new(PostgresCatalogRepository::new(pool.clone())),
        carts: Arc::new(PostgresCartRepository::new(pool.clone())),
        payments: Arc::new(PostgresPaymentRepository::new(pool.clone())),
        atomic_commit: None,
        stats: Arc::new(PostgresStatsReader::new(pool.clone())),
        payment_gateway,
        notifier,
        currency: String::new(),
    }
    .with_atomic_commit(Arc::new(PostgresPaymentLedger::new(pool))))
}

fn cors_layer(policy: CorsPolicy) -> CorsLayer {
    let allow_origin = match policy {
        CorsPolicy::AnyOrigin => AllowOrigin::from(Any),
        CorsPolicy::Origins(origins) => AllowOrigin::list(origins),
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
        .allow_headers(Any)
}

/// Resolves on Ctrl+C or SIGTERM.
///
/// A handler that cannot be installed never resolves, leaving the other to
/// trigger shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
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
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, draining in-flight requests");
}
