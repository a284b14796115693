use anyhow::anyhow;
use anyhow::Result;
use once_cell::sync::OnceCell;
use tokio::sync::mpsc;

static CLIPBOARD_TX: OnceCell<mpsc::UnboundedSender<String>> = OnceCell::new();

/// Owns the system clipboard on a background task so copies never block the
/// UI loop.
pub struct ClipboardService {}

impl ClipboardService {
    pub async fn start() -> Result<()> {
        let (tx, mut rx) = mpsc::unbounded_channel::<String>();
        if CLIPBOARD_TX.set(tx).is_err() {
            return Err(anyhow!("Clipboard service was started twice."));
        }

        let mut clipboard = arboard::Clipboard::new()?;
        while let Some(text) = rx.recv().await {
            tracing::debug!(length = text.len(), "Copying to clipboard");
            clipboard.set_text(text)?;
        }

        return Ok(());
    }

    pub fn healthcheck() -> Result<()> {
        if CLIPBOARD_TX.get().is_some() {
            return Ok(());
        }

        arboard::Clipboard::new()?;
        return Ok(());
    }

    pub fn set(text: String) -> Result<()> {
        let Some(tx) = CLIPBOARD_TX.get() else {
            return Err(anyhow!("Clipboard is not available in this terminal."));
        };

        tx.send(text)?;
        return Ok(());
    }
}
