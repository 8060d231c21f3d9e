use std::sync::Arc;

use anyhow::Result;
use tokio::sync::mpsc;

use crate::domain::models::Action;
use crate::domain::models::Link;
use crate::domain::models::LinkOpener;
use crate::domain::models::LinkOpenerBox;

async fn open_link(opener: &Arc<LinkOpenerBox>, link: Link) {
    let opener_name = opener.name();
    match opener.open(link).await {
        Ok(()) => {
            tracing::info!(link = %link, url = link.url(), opener = %opener_name, "opened link");
        }
        Err(err) => {
            tracing::warn!(link = %link, url = link.url(), opener = %opener_name, error = %err, "failed to open link");
        }
    }
}

pub struct ActionsService {}

impl ActionsService {
    /// Runs side effects requested by the UI until the sender side closes.
    /// Link opening is fire-and-forget; failures are only logged.
    pub async fn start(
        opener: LinkOpenerBox,
        rx: &mut mpsc::UnboundedReceiver<Action>,
    ) -> Result<()> {
        let opener_arc = Arc::new(opener);

        while let Some(action) = rx.recv().await {
            match action {
                Action::OpenLink(link) => {
                    let worker_opener = opener_arc.clone();
                    tokio::spawn(async move {
                        open_link(&worker_opener, link).await;
                    });
                }
            }
        }

        tracing::debug!("actions channel closed");
        return Ok(());
    }
}
