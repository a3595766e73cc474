use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use jobfinder_core::{JobQuery, RequestId};
use jobfinder_logging::{finder_debug, finder_warn};

use crate::fetch::{FetchSettings, JobFetcher, ReqwestJobFetcher};
use crate::retry::{fetch_with_retry, RetryPolicy};
use crate::{EngineError, EngineEvent};

enum EngineCommand {
    Fetch { request_id: RequestId, query: JobQuery },
    CheckHealth,
}

/// Runs fetches on a background tokio runtime and reports back over a channel.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: FetchSettings) -> Result<Self, EngineError> {
        let retry = settings.retry.clone();
        let fetcher = Arc::new(ReqwestJobFetcher::new(settings)?);
        Self::with_fetcher(fetcher, retry)
    }

    pub fn with_fetcher(
        fetcher: Arc<dyn JobFetcher>,
        retry: RetryPolicy,
    ) -> Result<Self, EngineError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Runtime::new()?;

        thread::Builder::new()
            .name("jobfinder-engine".to_string())
            .spawn(move || {
                while let Ok(command) = cmd_rx.recv() {
                    let fetcher = fetcher.clone();
                    let retry = retry.clone();
                    let event_tx = event_tx.clone();
                    runtime.spawn(async move {
                        handle_command(fetcher.as_ref(), &retry, command, event_tx).await;
                    });
                }
                finder_debug!("Engine command channel closed; shutting down");
            })?;

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn fetch(&self, request_id: RequestId, query: JobQuery) {
        self.send(EngineCommand::Fetch { request_id, query });
    }

    pub fn check_health(&self) {
        self.send(EngineCommand::CheckHealth);
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }

    fn send(&self, command: EngineCommand) {
        if self.cmd_tx.send(command).is_err() {
            finder_warn!("Engine thread is gone; command dropped");
        }
    }
}

async fn handle_command(
    fetcher: &dyn JobFetcher,
    retry: &RetryPolicy,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    let event = match command {
        EngineCommand::Fetch { request_id, query } => {
            let result = fetch_with_retry(fetcher, &query, retry).await;
            EngineEvent::FetchCompleted { request_id, result }
        }
        EngineCommand::CheckHealth => EngineEvent::HealthChecked {
            healthy: fetcher.check_health().await,
        },
    };
    let _ = event_tx.send(event);
}
