use std::io::{self, BufRead, Write};
use std::sync::Arc;
use std::time::Duration;

use palaver::application::ports::MessageRepository;
use palaver::application::services::{ClearChatService, SendMessageService};
use palaver::infrastructure::api::OllamaChatService;
use palaver::infrastructure::observability::{init_tracing, TracingConfig};
use palaver::infrastructure::persistence::InMemoryMessageRepository;
use palaver::presentation::{ChatController, Settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing(TracingConfig::default());

    let settings = Settings::from_env();

    let repository: Arc<dyn MessageRepository> = Arc::new(InMemoryMessageRepository::new());
    let chat_service = Arc::new(OllamaChatService::new(
        settings.chat.base_url.clone(),
        settings.chat.model.clone(),
        Duration::from_secs(settings.chat.request_timeout_secs),
    )?);

    let send_message_service =
        SendMessageService::new(Arc::clone(&chat_service), Arc::clone(&repository));
    let clear_chat_service = ClearChatService::new(Arc::clone(&repository));

    let mut controller = ChatController::new(
        Arc::clone(&repository),
        send_message_service,
        clear_chat_service,
    );

    println!(
        "Chatting with {} at {} (/clear, /retry, /quit)",
        settings.chat.model, settings.chat.base_url
    );

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        match line.trim() {
            "/quit" => break,
            "/clear" => {
                controller.clear_chat();
                println!("(conversation cleared)");
                continue;
            }
            "/retry" => {
                controller.retry_last_message().await;
            }
            "" => continue,
            input => {
                controller.set_input_text(input);
                controller.send_message().await;
            }
        }

        if let Some(error) = controller.error_message() {
            eprintln!("error: {} (use /retry to resend)", error);
            continue;
        }

        if let Some(reply) = controller.messages().last() {
            println!("{}: {}", reply.role, reply.content);
        }
    }

    Ok(())
}
