use courier_core::config::Config;
use courier_telegram::methods::AnswerCallbackQuery;
use courier_telegram::types::UpdateKind;
use courier_telegram::{Api, Bot, Update};
use courier_webhook::WebhookDispatcher;
use std::path::Path;
use std::sync::Arc;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() {
    let config_path =
        std::env::var("COURIER_CONFIG").unwrap_or_else(|_| "courier.toml".to_string());

    let config = Config::load(Path::new(&config_path)).unwrap_or_else(|e| {
        eprintln!("fatal: failed to load config: {e}");
        std::process::exit(1);
    });

    courier_core::logging::init(&config.log);

    if config.telegram.token.is_empty() {
        eprintln!("fatal: COURIER_TELEGRAM_TOKEN is not set");
        std::process::exit(1);
    }

    let api = Api::from_config(&config.telegram).unwrap_or_else(|e| {
        eprintln!("fatal: failed to build http client: {e}");
        std::process::exit(1);
    });

    let bot = Bot::connect(api, config.telegram.token.clone())
        .await
        .unwrap_or_else(|e| {
            eprintln!("fatal: bootstrap failed: {e}");
            std::process::exit(1);
        });

    if config.webhook.public_url.is_empty() {
        info!("no public url configured, skipping webhook registration");
    } else if let Err(e) = courier_webhook::register(&bot, &config.webhook).await {
        eprintln!("fatal: webhook registration failed: {e}");
        std::process::exit(1);
    }

    let dispatcher = Arc::new(WebhookDispatcher::new(bot).with_handler(echo));

    tokio::select! {
        result = courier_webhook::serve(&config.webhook.listen_addr, &config.webhook.path, dispatcher) => {
            if let Err(e) = result {
                eprintln!("fatal: {e}");
                std::process::exit(1);
            }
        }
        _ = tokio::signal::ctrl_c() => {
            info!("shutting down");
        }
    }
}

/// Echo text messages back to their chat and acknowledge button presses.
async fn echo(update: Update, bot: Bot) {
    match update.kind() {
        UpdateKind::Message(message) => {
            let Some(text) = message.text.as_deref().filter(|t| !t.is_empty()) else {
                return;
            };
            if let Err(e) = bot.send_text(message.chat.id, text).await {
                error!(chat_id = message.chat.id, error = %e, "echo failed");
            }
        }
        UpdateKind::CallbackQuery(query) => {
            if let Err(e) = bot.send(&AnswerCallbackQuery::new(query.id.clone())).await {
                warn!(error = %e, "failed to answer callback query");
            }
        }
        UpdateKind::Poll(_) | UpdateKind::Unknown => {}
    }
}
