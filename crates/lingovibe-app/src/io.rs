use std::io::{self, BufRead, Write};

use kanal::AsyncSender;
use lingovibe_types::AppEvent;
use tokio_util::sync::CancellationToken;

/// Forwards stdin lines to the event loop until EOF or cancellation
pub async fn stdin_io(
    event_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let handle = tokio::runtime::Handle::current();
    let reader_cancel = cancel.clone();
    let interactive = atty::is(atty::Stream::Stdin);

    // A plain thread, so a pending read never holds up runtime shutdown
    std::thread::Builder::new()
        .name("lingovibe-stdin".to_string())
        .spawn(move || {
            let stdin = io::stdin();
            let mut lines = stdin.lock().lines();

            loop {
                if interactive {
                    print!("> ");
                    let _ = io::stdout().flush();
                }

                let event = match lines.next() {
                    Some(Ok(line)) => AppEvent::TextInput(line),
                    Some(Err(e)) => {
                        tracing::error!("Failed to read stdin: {}", e);
                        AppEvent::Shutdown
                    }
                    None => {
                        tracing::debug!("stdin closed");
                        AppEvent::Shutdown
                    }
                };

                if reader_cancel.is_cancelled() {
                    break;
                }

                let last = matches!(event, AppEvent::Shutdown);
                if let Err(e) = handle.block_on(event_tx.send(event)) {
                    tracing::debug!("Event loop gone, stopping input: {}", e);
                    break;
                }
                if last {
                    break;
                }
            }
        })?;

    cancel.cancelled().await;
    tracing::debug!("Input task stopping");
    Ok(())
}
