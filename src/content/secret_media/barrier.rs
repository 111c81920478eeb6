//! Join barrier collecting the loaded parts of one secret attachment.

use super::{LoadedPart, SecretPart};
use crate::content::error::SecretMediaError;
use std::{fmt, sync::Arc};
use tokio::sync::{mpsc, watch};
use uuid::Uuid;

type PartReport = Result<LoadedPart, SecretMediaError>;

/// Identifier correlating log lines of one barrier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LoadId(Uuid);

impl LoadId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for LoadId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Collects the outcome of every part a secret attachment needs.
///
/// Each registered part gets one [`PartWaiter`]. The barrier completes when
/// every waiter has succeeded and fails on the first failure. A waiter
/// dropped without reporting counts as a failure.
///
/// # Examples
///
/// ```
/// use missive::content::domain::WebPageId;
/// use missive::content::secret_media::{JoinBarrier, LoadedPart};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let mut barrier = JoinBarrier::new();
/// let waiter = barrier.waiter("web page");
/// waiter.succeed(LoadedPart::WebPage(WebPageId::new(7)));
/// let parts = barrier.wait().await;
/// assert_eq!(parts, Ok(vec![LoadedPart::WebPage(WebPageId::new(7))]));
/// # }
/// ```
pub struct JoinBarrier {
    id: LoadId,
    sender: mpsc::UnboundedSender<PartReport>,
    receiver: mpsc::UnboundedReceiver<PartReport>,
    cancel: Arc<watch::Sender<bool>>,
    cancelled: watch::Receiver<bool>,
    parts: Vec<SecretPart>,
    expected: usize,
}

impl JoinBarrier {
    /// Creates an empty barrier.
    #[must_use]
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        let (cancel, cancelled) = watch::channel(false);
        Self {
            id: LoadId::new(),
            sender,
            receiver,
            cancel: Arc::new(cancel),
            cancelled,
            parts: Vec::new(),
            expected: 0,
        }
    }

    /// Returns the identifier used in log lines.
    #[must_use]
    pub const fn id(&self) -> LoadId {
        self.id
    }

    /// Records a part that must load before the content is usable.
    pub fn register(&mut self, part: SecretPart) {
        tracing::trace!(load_id = %self.id, part = %part.label(), "registered secret media part");
        self.parts.push(part);
    }

    /// Returns the registered parts not yet handed out.
    #[must_use]
    pub fn parts(&self) -> &[SecretPart] {
        &self.parts
    }

    /// Hands out every registered part with the waiter that reports it.
    pub fn take_pending(&mut self) -> Vec<(SecretPart, PartWaiter)> {
        let parts = std::mem::take(&mut self.parts);
        parts
            .into_iter()
            .map(|part| {
                let waiter = self.waiter(part.label());
                (part, waiter)
            })
            .collect()
    }

    /// Creates a waiter the barrier will wait for.
    pub fn waiter(&mut self, label: impl Into<String>) -> PartWaiter {
        self.expected = self.expected.saturating_add(1);
        PartWaiter {
            label: label.into(),
            sender: Some(self.sender.clone()),
        }
    }

    /// Returns a handle that cancels the barrier from elsewhere.
    #[must_use]
    pub fn canceller(&self) -> BarrierCanceller {
        BarrierCanceller {
            cancel: Arc::clone(&self.cancel),
        }
    }

    /// Discards the barrier and everything pending on it.
    ///
    /// Waiters still held elsewhere report into the void.
    pub fn cancel(self) {
        tracing::debug!(load_id = %self.id, pending = self.expected, "secret media load cancelled");
    }

    /// Waits for every waiter to succeed.
    ///
    /// # Errors
    ///
    /// Returns the first failure reported by a waiter, or
    /// `SecretMediaError::Cancelled` if the barrier was cancelled. A part
    /// registered but never handed out fails as abandoned.
    pub async fn wait(mut self) -> Result<Vec<LoadedPart>, SecretMediaError> {
        if let Some(part) = self.parts.first() {
            return Err(self.fail(SecretMediaError::Abandoned(part.label())));
        }
        let mut loaded = Vec::with_capacity(self.expected);
        while loaded.len() < self.expected {
            if *self.cancelled.borrow() {
                return Err(self.fail(SecretMediaError::Cancelled));
            }
            tokio::select! {
                changed = self.cancelled.changed() => {
                    if changed.is_ok() && *self.cancelled.borrow() {
                        return Err(self.fail(SecretMediaError::Cancelled));
                    }
                }
                report = self.receiver.recv() => match report {
                    Some(Ok(part)) => loaded.push(part),
                    Some(Err(err)) => return Err(self.fail(err)),
                    None => {
                        return Err(self.fail(SecretMediaError::Abandoned("barrier".to_owned())));
                    }
                },
            }
        }
        tracing::debug!(load_id = %self.id, parts = loaded.len(), "secret media loaded");
        Ok(loaded)
    }

    fn fail(&self, err: SecretMediaError) -> SecretMediaError {
        tracing::warn!(load_id = %self.id, error = %err, "secret media load failed");
        err
    }
}

impl Default for JoinBarrier {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for JoinBarrier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JoinBarrier")
            .field("id", &self.id)
            .field("parts", &self.parts)
            .field("expected", &self.expected)
            .finish_non_exhaustive()
    }
}

/// Reports the outcome of one part to its barrier.
///
/// Dropping a waiter without calling [`succeed`](Self::succeed) or
/// [`fail`](Self::fail) reports [`SecretMediaError::Abandoned`].
#[derive(Debug)]
pub struct PartWaiter {
    label: String,
    sender: Option<mpsc::UnboundedSender<PartReport>>,
}

impl PartWaiter {
    /// Returns the part description.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Reports the loaded part.
    pub fn succeed(mut self, part: LoadedPart) {
        self.report(Ok(part));
    }

    /// Reports a failure.
    pub fn fail(mut self, err: SecretMediaError) {
        self.report(Err(err));
    }

    fn report(&mut self, report: PartReport) {
        if let Some(sender) = self.sender.take() {
            // The barrier may already have failed or been cancelled.
            sender.send(report).ok();
        }
    }
}

impl Drop for PartWaiter {
    fn drop(&mut self) {
        if self.sender.is_some() {
            let label = self.label.clone();
            self.report(Err(SecretMediaError::Abandoned(label)));
        }
    }
}

/// Cancels a [`JoinBarrier`] that is being awaited.
#[derive(Debug, Clone)]
pub struct BarrierCanceller {
    cancel: Arc<watch::Sender<bool>>,
}

impl BarrierCanceller {
    /// Makes the barrier's `wait` return `SecretMediaError::Cancelled`.
    pub fn cancel(&self) {
        self.cancel.send_replace(true);
    }
}
