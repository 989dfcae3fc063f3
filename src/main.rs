use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use imposter::bank::BankStore;
use imposter::cli::{self, Command, Screen};
use imposter::config::AppConfig;
use imposter::editor;
use imposter::handlers::{current_view, handle_intent};
use imposter::llm::{self, ContentGenerator};
use imposter::protocol::View;
use imposter::state::RoundEngine;

#[tokio::main]
async fn main() {
    // Load .env file if present (before any env var reads)
    if let Err(e) = dotenvy::dotenv() {
        // Not an error if .env doesn't exist, only log if it's a different issue
        if !matches!(e, dotenvy::Error::Io(_)) {
            eprintln!("Warning: Failed to load .env file: {}", e);
        }
    }

    // Logs go to stderr so they never land on the shared screen
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "imposter=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = AppConfig::from_env();

    let bank = match BankStore::open(&config.bank_path) {
        Ok(bank) => bank,
        Err(e) => {
            tracing::warn!(
                "Failed to open content bank at {}: {}. Using built-in defaults.",
                config.bank_path.display(),
                e
            );
            BankStore::with_defaults()
        }
    };

    let generator = config.ai_enabled.then(|| {
        let llm_config = llm::LlmConfig::from_env();
        match llm_config.build_manager() {
            Ok(manager) => {
                tracing::info!("LLM providers initialized successfully");
                ContentGenerator::new(Some(manager), &llm_config)
            }
            Err(e) => {
                tracing::warn!(
                    "Failed to initialize LLM providers: {}. Generation will use fallbacks.",
                    e
                );
                ContentGenerator::new(None, &llm_config)
            }
        }
    });

    let mut engine = match config.seed {
        Some(seed) => RoundEngine::with_seed(bank, seed),
        None => RoundEngine::new(bank),
    };

    run(&mut engine, generator.as_ref()).await;
}

async fn run(engine: &mut RoundEngine<BankStore>, generator: Option<&ContentGenerator>) {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut screen = Screen::new(current_view(engine));
    print!("{}{}", cli::CLEAR_SCREEN, cli::render(screen.view()));

    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                tracing::error!("Failed to read input: {}", e);
                break;
            }
        };

        match screen.parse(&line) {
            Command::Quit => break,
            Command::Help => println!("{}", cli::help(screen.view())),
            Command::Invalid(message) => println!("{}", message),
            Command::ShowImposter => {
                if let Some(text) = screen.unmask() {
                    println!("{}", text);
                }
            }
            Command::Bank(command) => {
                let config = engine.state().config.clone();
                match editor::apply_bank_command(engine.bank_mut(), &config, &command) {
                    Ok(message) => println!("{}", message),
                    Err(e) => tracing::warn!("Failed to save bank edit: {}", e),
                }
            }
            Command::Generate => match generator {
                Some(generator) => {
                    let config = engine.state().config.clone();
                    match editor::generate_entry(engine.bank_mut(), &config, generator).await {
                        Ok(message) => println!("{}", message),
                        Err(e) => tracing::warn!("Failed to save generated entry: {}", e),
                    }
                }
                None => println!("AI generation is off. Set IMPOSTER_AI=1 to enable it."),
            },
            Command::Intent(intent) => match handle_intent(engine, intent) {
                Ok(next) => {
                    let entering_summary = matches!(next, View::AnswersSummary { .. })
                        && !matches!(screen.view(), View::AnswersSummary { .. });
                    println!("{}", screen.advance(next));
                    match generator {
                        Some(generator) if entering_summary => {
                            println!("{}\n", commentary(screen.view(), generator).await);
                        }
                        _ => {}
                    }
                }
                Err(e) => println!("{}", e),
            },
        }
    }

    tracing::info!("Goodbye");
}

async fn commentary(view: &View, generator: &ContentGenerator) -> String {
    match view {
        View::AnswersSummary { question, answers } => {
            let clues: Vec<(String, String)> = answers
                .iter()
                .filter_map(|a| Some((a.player.name.clone(), a.answer.clone()?)))
                .collect();
            generator.clue_commentary(&clues, question).await
        }
        _ => String::new(),
    }
}
