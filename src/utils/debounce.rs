//! Timer-based input coalescing.
//!
//! Rapid submissions (e.g. search keystrokes) are coalesced so that at most
//! one value is delivered per idle window: every new submission cancels the
//! pending timer and reschedules it, and only the last value survives.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Coalesces a stream of submitted values down to the latest one per idle
/// window. Delivered values arrive on the receiver returned by [`Debouncer::new`].
pub struct Debouncer<T> {
    delay: Duration,
    tx: mpsc::UnboundedSender<T>,
    pending: Option<JoinHandle<()>>,
}

impl<T: Send + 'static> Debouncer<T> {
    /// Create a debouncer with the given idle window, plus the receiver end
    /// where coalesced values are delivered.
    pub fn new(delay: Duration) -> (Self, mpsc::UnboundedReceiver<T>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            Self {
                delay,
                tx,
                pending: None,
            },
            rx,
        )
    }

    /// Submit a value. Any previously pending value is discarded; this one
    /// is delivered after the idle window elapses without further calls.
    pub fn submit(&mut self, value: T) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
        let tx = self.tx.clone();
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(value);
        }));
    }

    /// Drop any pending value without delivering it.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn delivers_after_idle_window() {
        let (mut debouncer, mut rx) = Debouncer::new(Duration::from_millis(300));
        debouncer.submit("rust");

        tokio::time::sleep(Duration::from_millis(350)).await;
        assert_eq!(rx.try_recv().ok(), Some("rust"));
    }

    #[tokio::test(start_paused = true)]
    async fn rapid_submissions_deliver_only_the_last() {
        let (mut debouncer, mut rx) = Debouncer::new(Duration::from_millis(300));

        for term in ["r", "ru", "rus", "rust"] {
            debouncer.submit(term);
            tokio::time::sleep(Duration::from_millis(100)).await;
        }
        tokio::time::sleep(Duration::from_millis(400)).await;

        assert_eq!(rx.try_recv().ok(), Some("rust"));
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn nothing_fires_before_the_window() {
        let (mut debouncer, mut rx) = Debouncer::new(Duration::from_millis(300));
        debouncer.submit(1);

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_discards_pending_value() {
        let (mut debouncer, mut rx) = Debouncer::new(Duration::from_millis(300));
        debouncer.submit(1);
        debouncer.cancel();

        tokio::time::sleep(Duration::from_millis(500)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn separate_idle_windows_each_deliver() {
        let (mut debouncer, mut rx) = Debouncer::new(Duration::from_millis(300));

        debouncer.submit(1);
        tokio::time::sleep(Duration::from_millis(350)).await;
        debouncer.submit(2);
        tokio::time::sleep(Duration::from_millis(350)).await;

        assert_eq!(rx.try_recv().ok(), Some(1));
        assert_eq!(rx.try_recv().ok(), Some(2));
    }
}
