use actix_web::{web, App, HttpServer};
use anyhow::Context;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use intelligence_service::clients::{
    BackendClient, ContentRetriever, HttpBackendClient, HttpContentRetriever,
};
use intelligence_service::services::{
    ChatService, FaqMatcher, FaqTable, QuizGenerator, RecommendationService,
};
use intelligence_service::{configure, AppState, Config};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;

    info!(
        "Starting {} v{} on HTTP:{}",
        config.service.service_name,
        env!("CARGO_PKG_VERSION"),
        config.service.http_port
    );

    // FAQ table: an invalid pattern aborts startup
    let faq_table = FaqTable::load(config.faq.table_path.as_deref())
        .context("Failed to load FAQ table")?;
    let faq = FaqMatcher::new(Arc::new(faq_table));

    // Upstream clients
    let backend: Arc<dyn BackendClient> = Arc::new(
        HttpBackendClient::new(&config.backend).context("Failed to build backend client")?,
    );

    let retriever: Option<Arc<dyn ContentRetriever>> = match config.retrieval.url.as_deref() {
        Some(url) => {
            let client: Arc<dyn ContentRetriever> = Arc::new(
                HttpContentRetriever::new(url, &config.retrieval)
                    .context("Failed to build retrieval client")?,
            );
            info!(url = %url, top_k = config.retrieval.top_k, "Content retrieval enabled");
            Some(client)
        }
        None => {
            warn!("RETRIEVAL_URL not set - chatbot answers from the FAQ table only");
            None
        }
    };

    let state = web::Data::new(AppState {
        service_name: config.service.service_name.clone(),
        recommendations: RecommendationService::new(
            backend,
            &config.recommendation,
            config.backend.timeout(),
        ),
        quiz: QuizGenerator::new(config.quiz.shuffle_seed),
        chat: ChatService::new(faq, retriever, &config.retrieval),
    });

    // Start HTTP server
    HttpServer::new(move || App::new().app_data(state.clone()).configure(configure))
        .bind(format!("0.0.0.0:{}", config.service.http_port))?
        .run()
        .await?;

    Ok(())
}
