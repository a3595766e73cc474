use std::time::Duration;

use jobfinder_core::{Effect, FailureClass, LoadFailure, Msg};
use jobfinder_engine::{EngineEvent, EngineHandle, FetchError};
use jobfinder_logging::{finder_info, finder_warn};

/// Executes core effects on the engine and turns engine events back into messages.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(engine: EngineHandle) -> Self {
        Self { engine }
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchJobs { request_id, query } => {
                    finder_info!(
                        "FetchJobs request_id={} params={:?}",
                        request_id,
                        query.to_params()
                    );
                    self.engine.fetch(request_id, query);
                }
                Effect::CheckHealth => {
                    finder_info!("CheckHealth");
                    self.engine.check_health();
                }
            }
        }
    }

    /// Next pending engine result, if any, without blocking.
    pub fn poll(&self) -> Option<Msg> {
        self.engine.try_recv().map(map_event)
    }

    pub fn wait(&self, timeout: Duration) -> Option<Msg> {
        self.engine.recv_timeout(timeout).map(map_event)
    }
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::FetchCompleted { request_id, result } => Msg::JobsLoaded {
            request_id,
            result: result.map_err(|err| {
                finder_warn!("Request {} failed: {} ({})", request_id, err, err.kind);
                map_failure(err)
            }),
        },
        EngineEvent::HealthChecked { healthy } => Msg::HealthChecked { healthy },
    }
}

fn map_failure(err: FetchError) -> LoadFailure {
    LoadFailure {
        class: if err.is_validation() {
            FailureClass::Validation
        } else {
            FailureClass::Transport
        },
        status: err.status(),
        message: err.message,
    }
}
