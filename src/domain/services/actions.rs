#[cfg(test)]
#[path = "actions_test.rs"]
mod tests;

use std::sync::Arc;

use anyhow::Result;
use tokio::sync::mpsc;

use super::clipboard::ClipboardService;
use crate::domain::models::Action;
use crate::domain::models::AssessmentRequest;
use crate::domain::models::BackendBox;
use crate::domain::models::Event;

pub fn help_text() -> String {
    let text = r#"
HOTKEYS:
- Tab - Move focus across the mode list, the resume form and the report.
- 1, 2, 3 - Pick the Fast, Balanced or Detailed assessment mode.
- Up / Down - Move between options, or scroll the report.
- Space - Select the highlighted DSA skill.
- CTRL+S - Submit the form and generate a report.
- CTRL+Y - Copy the email draft to your clipboard.
- CTRL+U / CTRL+D - Scroll the report a page up or down.
- Enter / Esc - Dismiss an alert.
- CTRL+C - Exit Placify.
        "#;

    return text.trim().to_string();
}

async fn assess(
    backend: Arc<BackendBox>,
    req: AssessmentRequest,
    tx: mpsc::UnboundedSender<Event>,
) -> Result<()> {
    match backend.assess(&req).await {
        Ok(payload) => {
            tx.send(Event::AssessmentCompleted(payload))?;
        }
        Err(err) => {
            tx.send(Event::AssessmentFailed(err))?;
        }
    }

    return Ok(());
}

fn copy_to_clipboard(text: String, tx: &mpsc::UnboundedSender<Event>) -> Result<()> {
    if let Err(err) = ClipboardService::set(text) {
        tracing::warn!(error = ?err, "Failed to copy to clipboard");
        tx.send(Event::Notice(format!("Copy failed: {err}")))?;
        return Ok(());
    }

    tx.send(Event::Notice("Copied email draft to clipboard.".to_string()))?;

    return Ok(());
}

pub struct ActionsService {}

impl ActionsService {
    pub async fn start(
        backend: BackendBox,
        tx: mpsc::UnboundedSender<Event>,
        rx: &mut mpsc::UnboundedReceiver<Action>,
    ) -> Result<()> {
        let backend = Arc::new(backend);

        while let Some(action) = rx.recv().await {
            match action {
                Action::Assess(req) => {
                    let worker_backend = backend.clone();
                    let worker_tx = tx.clone();
                    tokio::spawn(async move {
                        if let Err(err) = assess(worker_backend, req, worker_tx).await {
                            tracing::error!(error = ?err, "Failed to deliver assessment result");
                        }
                    });
                }
                Action::CopyToClipboard(text) => {
                    copy_to_clipboard(text, &tx)?;
                }
            }
        }

        return Ok(());
    }
}
