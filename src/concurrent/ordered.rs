//! Start-first, await-in-order execution of independent units of work
//!
//! Every unit is spawned onto the Tokio runtime as soon as it is submitted.
//! Results are then consumed strictly in submission order: slot `i` only
//! ever waits on unit `i`, while every other unit keeps running in the
//! background. Nothing is cancelled when a slot fails or when the results
//! are dropped early.

use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::task::{ready, Context, Poll};

use futures_util::{Stream, StreamExt};
use tokio::task::JoinHandle;

use crate::error::TaskError;

/// Lazy, ordered results of a batch of spawned units
///
/// Yields exactly one item per submitted unit, in submission order. The
/// stream is not restartable; consumed slots are gone.
#[must_use = "units are already running; dropping the results detaches them"]
pub struct OrderedResults<T> {
    pending: VecDeque<JoinHandle<T>>,
    consumed: usize,
}

impl<T> OrderedResults<T> {
    /// Number of slots not yet consumed
    pub fn remaining(&self) -> usize {
        self.pending.len()
    }

    /// Index of the next slot to be yielded
    pub fn position(&self) -> usize {
        self.consumed
    }
}

impl<T> std::fmt::Debug for OrderedResults<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrderedResults")
            .field("remaining", &self.pending.len())
            .field("consumed", &self.consumed)
            .finish()
    }
}

impl<T> Stream for OrderedResults<T> {
    type Item = Result<T, TaskError>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();
        let Some(handle) = this.pending.front_mut() else {
            return Poll::Ready(None);
        };

        let joined = ready!(Pin::new(handle).poll(cx));
        this.pending.pop_front();
        let index = this.consumed;
        this.consumed += 1;

        Poll::Ready(Some(joined.map_err(|e| TaskError::from_join(index, e))))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.pending.len(), Some(self.pending.len()))
    }
}

/// Spawn every unit immediately and return their results as an ordered stream
///
/// Must be called from within a Tokio runtime.
pub fn run_all_streaming<I, F, T>(units: I) -> OrderedResults<T>
where
    I: IntoIterator<Item = F>,
    F: Future<Output = T> + Send + 'static,
    T: Send + 'static,
{
    let pending: VecDeque<_> = units.into_iter().map(tokio::spawn).collect();
    tracing::trace!("Spawned {} units", pending.len());

    OrderedResults {
        pending,
        consumed: 0,
    }
}

/// Run every unit concurrently and collect the results in submission order
///
/// # Errors
/// * `TaskError::UnitPanicked` / `TaskError::UnitCancelled` - For the first
///   slot, in submission order, whose unit did not complete normally
pub async fn run_all<I, F, T>(units: I) -> Result<Vec<T>, TaskError>
where
    I: IntoIterator<Item = F>,
    F: Future<Output = T> + Send + 'static,
    T: Send + 'static,
{
    let mut results = run_all_streaming(units);
    let mut values = Vec::with_capacity(results.remaining());

    while let Some(value) = results.next().await {
        values.push(value?);
    }

    Ok(values)
}

/// Like [`run_all`], for units that can fail
///
/// The first `Err` in submission order is returned as soon as its slot is
/// reached. Later units are left running.
pub async fn try_run_all<I, F, T, E>(units: I) -> Result<Vec<T>, E>
where
    I: IntoIterator<Item = F>,
    F: Future<Output = Result<T, E>> + Send + 'static,
    T: Send + 'static,
    E: From<TaskError> + Send + 'static,
{
    let mut results = run_all_streaming(units);
    let mut values = Vec::with_capacity(results.remaining());

    while let Some(value) = results.next().await {
        values.push(value??);
    }

    Ok(values)
}

/// Build one unit per argument with `f`, then [`run_all`] them
pub async fn map_concurrent<A, I, M, F, T>(f: M, args: I) -> Result<Vec<T>, TaskError>
where
    I: IntoIterator<Item = A>,
    M: FnMut(A) -> F,
    F: Future<Output = T> + Send + 'static,
    T: Send + 'static,
{
    // Build all units before spawning so `f` runs eagerly on the caller
    let units: Vec<F> = args.into_iter().map(f).collect();
    run_all(units).await
}
