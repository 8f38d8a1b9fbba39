use leptos::*;
use thiserror::Error;

use crate::api::{ApiClient, ApiError};
use crate::models::{AnalysisRequest, AnalysisResult};
use crate::normalize::{normalize, NormalizeError};
use crate::state::notifications::Notifications;

/// What the operator sees for any failed run, regardless of the error kind.
/// The concrete kind only shows up in the console log.
const FAILURE_MESSAGE: &str = "Analysis failed. Please try again.";

/// Life cycle of the results region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisPhase {
    Idle,
    Loading,
    Displayed,
    Failed,
}

/// Anything that can go wrong between submit and display
#[derive(Debug, Clone, Error)]
pub enum AnalysisError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Shape(#[from] NormalizeError),
}

/// Owns the request/loading/result life cycle and the one piece of mutable
/// session state: the last analysis result. The result is replaced wholesale
/// on success and left untouched on failure, so a previous result keeps
/// serving resize re-renders.
#[derive(Clone, Copy)]
pub struct AnalysisContext {
    pub phase: RwSignal<AnalysisPhase>,
    pub last_result: RwSignal<Option<AnalysisResult>>,
    /// Monotone id of the newest submit; responses carrying an older id are
    /// stale and get dropped instead of clobbering newer state.
    run_id: StoredValue<u64>,
}

impl AnalysisContext {
    fn new() -> Self {
        Self {
            phase: create_rw_signal(AnalysisPhase::Idle),
            last_result: create_rw_signal(None),
            run_id: store_value(0),
        }
    }

    /// Kick off one analysis run. Always restarts the cycle: a submit from
    /// `Displayed` or `Failed` goes straight back to `Loading`.
    pub fn submit(&self, client: ApiClient, request: AnalysisRequest, notifications: Notifications) {
        let id = self.run_id.get_value() + 1;
        self.run_id.set_value(id);
        self.phase.set(AnalysisPhase::Loading);

        log::debug!(
            "starting analysis run {id}: {}-bedroom, {} {}",
            request.room_type.as_str(),
            request.month.as_str(),
            request.day
        );

        let ctx = *self;
        spawn_local(async move {
            let outcome = run_analysis(&client, &request).await;

            if ctx.run_id.get_value() != id {
                log::debug!("dropping stale response for analysis run {id}");
                return;
            }

            match outcome {
                Ok(result) => {
                    log::info!(
                        "analysis run {id} complete: {} rooms, {} anomalies",
                        result.summary.total_rooms,
                        result.summary.anomaly_count
                    );
                    ctx.last_result.set(Some(result));
                    ctx.phase.set(AnalysisPhase::Displayed);
                }
                Err(e) => {
                    log::error!("analysis run {id} failed: {e}");
                    notifications.notify(FAILURE_MESSAGE);
                    ctx.phase.set(AnalysisPhase::Failed);
                }
            }
        });
    }
}

/// The single suspension point: one exchange with the service, then
/// normalization into the canonical result. No retry, no timeout.
async fn run_analysis(
    client: &ApiClient,
    request: &AnalysisRequest,
) -> Result<AnalysisResult, AnalysisError> {
    let envelope = client.analyze(request).await?;
    Ok(normalize(envelope)?)
}

/// Provide the analysis controller at the app root
pub fn provide_analysis_context() {
    provide_context(AnalysisContext::new());
}

/// Hook to access the analysis controller
pub fn use_analysis() -> AnalysisContext {
    use_context::<AnalysisContext>()
        .expect("AnalysisContext must be provided by a parent component")
}
