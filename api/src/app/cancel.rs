//! Cancellation signal for in-flight fetches
//!
//! The owner keeps the `watch::Sender` and flips it to `true` on teardown.
//! Fetches racing the signal drop their request and return
//! `FeedError::Cancelled`, which callers treat as a no-op.

use std::future::Future;

use tokio::sync::watch;

use crate::error::FeedError;

/// Receiving half of a cancellation signal
pub type CancelSignal = watch::Receiver<bool>;

/// Create a fresh, un-cancelled signal pair
pub fn cancel_pair() -> (watch::Sender<bool>, CancelSignal) {
    watch::channel(false)
}

/// A signal that can never fire (its sender is already gone)
pub fn never_cancelled() -> CancelSignal {
    watch::channel(false).1
}

/// Run `fut` unless `cancel` fires first
pub async fn until_cancelled<T, F>(cancel: &CancelSignal, fut: F) -> Result<T, FeedError>
where
    F: Future<Output = Result<T, FeedError>>,
{
    let mut cancel = cancel.clone();
    let already_cancelled = *cancel.borrow();
    if already_cancelled {
        return Err(FeedError::Cancelled);
    }

    tokio::select! {
        result = fut => result,
        _ = cancelled(&mut cancel) => Err(FeedError::Cancelled),
    }
}

/// Resolves once the signal reads `true`; pends forever if the sender is dropped first
async fn cancelled(cancel: &mut CancelSignal) {
    let sender_gone = cancel.wait_for(|c| *c).await.is_err();
    if sender_gone {
        std::future::pending::<()>().await;
    }
}
