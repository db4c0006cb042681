use anyhow::Context;
use cmdpad::cli;
use cmdpad::editor::Editor;
use cmdpad::prompt::Prompt;
use cmdpad::server;

/// Application entry point: parse command-line arguments, load settings,
/// start the HTTP server as a background task, and run the interactive prompt
/// until stdin is closed.
///
/// Both front ends share one [`Editor`] behind a mutex. The prompt blocks on
/// stdin, so it runs on the blocking pool; when it returns the server task is
/// aborted and the process exits.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli_args = cli::parse_args();

    // Initialize logger (set RUST_LOG env var to control verbosity)
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let settings = cli_args
        .load_settings()
        .context("Failed to load configuration")?;

    let editor = Editor::shared();

    let server_task = settings.server_addr.map(|addr| {
        let editor = editor.clone();
        tokio::spawn(async move {
            if let Err(e) = server::serve(addr, editor).await {
                log::error!("HTTP server exited: {:#}", e);
            }
        })
    });

    let prompt_result = tokio::task::spawn_blocking(move || {
        let stdin = std::io::stdin();
        Prompt::new(stdin.lock(), std::io::stdout(), editor).run()
    })
    .await
    .context("Prompt task panicked")?;

    if let Some(task) = server_task {
        task.abort();
    }

    prompt_result.context("Failed to read from the prompt")
}
