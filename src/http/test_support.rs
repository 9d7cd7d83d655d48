use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use crate::error::{AppError, AppResult, ThrowError};

use super::ThrowClient;

/// What the scripted client does for one call.
#[derive(Debug, Clone)]
pub(crate) enum Step {
    Ok(Duration),
    Body(Duration, &'static str),
    Status(Duration, u16),
    Refused(Duration),
    Hang,
}

/// Replays `script` by call order, cycling when it runs out.
///
/// Tracks how many calls are running at once so tests can tell concurrent
/// hammers from serialized ones.
#[derive(Debug)]
pub(crate) struct ScriptedClient {
    script: Vec<Step>,
    calls: AtomicUsize,
    running: AtomicUsize,
    peak_running: AtomicUsize,
}

impl ScriptedClient {
    pub(crate) const fn new(script: Vec<Step>) -> Self {
        Self {
            script,
            calls: AtomicUsize::new(0),
            running: AtomicUsize::new(0),
            peak_running: AtomicUsize::new(0),
        }
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub(crate) fn peak_running(&self) -> usize {
        self.peak_running.load(Ordering::SeqCst)
    }

    fn step_for(&self, call: usize) -> Step {
        call.checked_rem(self.script.len())
            .and_then(|index| self.script.get(index))
            .cloned()
            .unwrap_or(Step::Ok(Duration::ZERO))
    }
}

struct RunningGuard<'client> {
    client: &'client ScriptedClient,
}

impl Drop for RunningGuard<'_> {
    fn drop(&mut self) {
        self.client.running.fetch_sub(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl ThrowClient for ScriptedClient {
    async fn get(&self, _url: &str, capture_body: bool) -> Result<Option<String>, ThrowError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        let now_running = self.running.fetch_add(1, Ordering::SeqCst).saturating_add(1);
        self.peak_running.fetch_max(now_running, Ordering::SeqCst);
        let _guard = RunningGuard { client: self };

        match self.step_for(call) {
            Step::Ok(delay) => {
                tokio::time::sleep(delay).await;
                Ok(capture_body.then(|| "OK".to_owned()))
            }
            Step::Body(delay, body) => {
                tokio::time::sleep(delay).await;
                Ok(capture_body.then(|| body.to_owned()))
            }
            Step::Status(delay, status) => {
                tokio::time::sleep(delay).await;
                Err(ThrowError::HttpStatus { status })
            }
            Step::Refused(delay) => {
                tokio::time::sleep(delay).await;
                Err(ThrowError::Network {
                    reason: "connection refused".to_owned(),
                    timed_out: false,
                })
            }
            Step::Hang => std::future::pending().await,
        }
    }
}

/// Runs `future` on a current-thread runtime whose clock only moves when
/// every task is idle, so scripted delays are measured exactly.
pub(crate) fn run_paused_test<F>(future: F) -> AppResult<()>
where
    F: Future<Output = AppResult<()>>,
{
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .start_paused(true)
        .build()
        .map_err(|err| AppError::validation(format!("Failed to build runtime: {}", err)))?;
    runtime.block_on(future)
}

/// `true` when `actual` is within a millisecond of `expected`.
pub(crate) const fn close_to(actual: Duration, expected: Duration) -> bool {
    actual.abs_diff(expected).as_millis() <= 1
}
