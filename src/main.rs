use ai_interviewer::interview::{InterviewConfig, Orchestrator};
use ai_interviewer::profiles::ProfileRegistry;
use ai_interviewer::providers::{ElevenLabsTts, OpenRouterChat, WhisperHttp};
use ai_interviewer::session::InMemorySessionStore;
use ai_interviewer::{create_router, AppState, Config, Secrets};
use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(name = "ai-interviewer", about = "Scripted technical-interview backend")]
struct Args {
    /// Path to the configuration file (without extension)
    #[arg(long, default_value = "config/ai-interviewer")]
    config: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let cfg = Config::load(&args.config)?;

    // Missing API keys are fatal: refuse to serve without them.
    let secrets = Secrets::from_env()?;

    info!("{} v{}", cfg.service.name, env!("CARGO_PKG_VERSION"));
    info!("Chat model: {} via {}", cfg.llm.model, cfg.llm.base_url);
    info!("STT endpoint: {}", cfg.stt.base_url);

    let chat = Arc::new(OpenRouterChat::new(
        &cfg.llm.base_url,
        &secrets.openrouter_api_key,
        &cfg.llm.model,
    ));
    let stt = Arc::new(WhisperHttp::new(&cfg.stt.base_url, &cfg.stt.model, None));
    let tts = Arc::new(ElevenLabsTts::new(
        cfg.tts.clone(),
        &secrets.elevenlabs_api_key,
    ));

    let orchestrator = Arc::new(Orchestrator::new(
        Arc::new(InMemorySessionStore::new()),
        chat,
        stt,
        tts,
        ProfileRegistry::builtin(),
        InterviewConfig {
            context_window: cfg.llm.context_window,
            temperature: cfg.llm.temperature,
            max_tokens: cfg.llm.max_tokens,
            language: cfg.stt.language.clone(),
        },
    ));

    let addr = format!("{}:{}", cfg.service.http.bind, cfg.service.http.port);
    let app = create_router(AppState::new(orchestrator, Arc::new(cfg)));

    info!("HTTP server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
