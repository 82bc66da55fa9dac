use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use docprompt::application::ports::{CompletionClient, SessionStore, Translator};
use docprompt::application::services::{
    ChatService, CompletionDefaults, CostingService, DocumentService,
};
use docprompt::infrastructure::llm::AzureOpenAiClient;
use docprompt::infrastructure::observability::{TracingConfig, init_tracing};
use docprompt::infrastructure::session::InMemorySessionStore;
use docprompt::infrastructure::storage::BlobStoreFactory;
use docprompt::infrastructure::translation::AzureTranslator;
use docprompt::presentation::{AppState, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let (settings, environment) = Settings::load().context("Failed to load settings")?;

    init_tracing(
        &TracingConfig::new(environment, &settings.logging),
        settings.server.port,
    );

    let blob_store =
        BlobStoreFactory::create(&settings.storage).context("Failed to configure blob storage")?;

    let completion_client: Arc<dyn CompletionClient> = Arc::new(
        AzureOpenAiClient::new(
            &settings.completion.api_base,
            &settings.completion.deployment,
            &settings.completion.api_key,
            &settings.completion.api_version,
            settings.completion.timeout(),
        )
        .context("Failed to configure completion client")?,
    );

    let translator: Arc<dyn Translator> = Arc::new(AzureTranslator::new(
        &settings.translation.endpoint,
        &settings.translation.key,
        &settings.translation.region,
    ));

    let session_store = Arc::new(InMemorySessionStore::with_idle_timeout(
        settings.session.idle_timeout(),
    ));
    tokio::spawn(
        Arc::clone(&session_store).run_idle_sweeper(settings.session.sweep_interval()),
    );
    let sessions: Arc<dyn SessionStore> = session_store;

    let defaults = CompletionDefaults {
        temperature: settings.temperature(),
        max_tokens: settings.max_tokens(),
    };

    let document_service = Arc::new(DocumentService::new(blob_store));

    let chat_service = Arc::new(ChatService::new(
        Arc::clone(&document_service),
        Arc::clone(&completion_client),
        translator,
        Arc::clone(&sessions),
        defaults,
        settings.cost_per_token(),
    ));

    let costing_service = Arc::new(CostingService::new(
        Arc::clone(&document_service),
        completion_client,
        sessions,
        defaults,
        settings.cost_per_token(),
    ));

    let state = AppState {
        document_service,
        chat_service,
        costing_service,
        ui: settings.ui.clone(),
    };

    let router = create_router(state);

    let host: std::net::IpAddr = settings
        .server
        .host
        .parse()
        .with_context(|| format!("Invalid server.host: {}", settings.server.host))?;
    let addr = SocketAddr::from((host, settings.server.port));
    tracing::info!(
        %addr,
        container = %settings.storage.container,
        deployment = %settings.completion.deployment,
        "Listening"
    );

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
