// ── Reactive state streams ──
//
// Subscription handles vended by the deck controller, the router and
// the app state. A presentation layer holds one of these and re-renders
// whenever a new snapshot arrives.

use std::pin::Pin;
use std::task::{Context, Poll};

use futures_core::Stream;
use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;

/// A subscription to one piece of observable state.
///
/// Provides point-in-time snapshot access and change notification via
/// [`changed()`](Self::changed) or by converting into a `Stream`.
pub struct StateStream<T: Clone + Send + Sync + 'static> {
    current: T,
    receiver: watch::Receiver<T>,
}

impl<T: Clone + Send + Sync + 'static> StateStream<T> {
    pub(crate) fn new(receiver: watch::Receiver<T>) -> Self {
        let current = receiver.borrow().clone();
        Self { current, receiver }
    }

    /// Snapshot captured at creation time or at the last `changed()`.
    pub fn current(&self) -> &T {
        &self.current
    }

    /// Latest published snapshot (may be newer than `current()`).
    pub fn latest(&self) -> T {
        self.receiver.borrow().clone()
    }

    /// Wait for the next change, returning the new snapshot.
    /// Returns `None` once the publishing side has been dropped.
    pub async fn changed(&mut self) -> Option<T> {
        self.receiver.changed().await.ok()?;
        let snap = self.receiver.borrow_and_update().clone();
        self.current = snap.clone();
        Some(snap)
    }

    /// Whether a snapshot newer than `current()` is waiting.
    pub fn has_changed(&self) -> bool {
        self.receiver.has_changed().unwrap_or(false)
    }

    /// Convert into a `Stream` for use with `StreamExt` combinators.
    pub fn into_stream(self) -> StateWatchStream<T> {
        StateWatchStream {
            inner: WatchStream::new(self.receiver),
        }
    }
}

/// `Stream` adapter backed by a `watch::Receiver`.
///
/// Yields the current snapshot first, then one item per published change.
pub struct StateWatchStream<T: Clone + Send + Sync + 'static> {
    inner: WatchStream<T>,
}

impl<T: Clone + Send + Sync + 'static> Stream for StateWatchStream<T> {
    type Item = T;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        Pin::new(&mut self.inner).poll_next(cx)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tokio_stream::StreamExt;

    #[tokio::test]
    async fn changed_tracks_sender() {
        let (tx, rx) = watch::channel(1u32);
        let mut stream = StateStream::new(rx);
        assert_eq!(*stream.current(), 1);

        tx.send_replace(2);
        assert!(stream.has_changed());
        assert_eq!(stream.changed().await, Some(2));
        assert_eq!(*stream.current(), 2);

        drop(tx);
        assert_eq!(stream.changed().await, None);
    }

    #[test]
    fn changed_stays_pending_until_publish() {
        let (tx, rx) = watch::channel(0u8);
        let mut stream = StateStream::new(rx);
        let mut next = tokio_test::task::spawn(stream.changed());
        tokio_test::assert_pending!(next.poll());

        tx.send_replace(7);
        assert!(next.is_woken());
        assert_eq!(tokio_test::assert_ready!(next.poll()), Some(7));
    }

    #[tokio::test]
    async fn into_stream_yields_current_first() {
        let (tx, rx) = watch::channel("a");
        let mut s = StateStream::new(rx).into_stream();
        assert_eq!(s.next().await, Some("a"));
        tx.send_replace("b");
        assert_eq!(s.next().await, Some("b"));
    }
}
