//! Cooperative cancellation for long running startup work.

use tokio::sync::watch;

/// Trips every [Cancellation] created alongside it.
#[derive(Debug)]
pub struct CancellationTrigger {
    sender: watch::Sender<bool>,
}

impl CancellationTrigger {
    /// Request cancellation. Work in progress finishes its current storage
    /// call; no new attempt is started.
    pub fn cancel(&self) {
        self.sender.send_replace(true);
    }
}

/// A cancellation signal observed at storage-call boundaries.
#[derive(Debug, Clone)]
pub struct Cancellation {
    receiver: watch::Receiver<bool>,
}

/// Create a linked trigger and signal.
pub fn cancellation() -> (CancellationTrigger, Cancellation) {
    let (sender, receiver) = watch::channel(false);

    (CancellationTrigger { sender }, Cancellation { receiver })
}

impl Cancellation {
    /// A signal that is never tripped.
    pub fn never() -> Self {
        let (_, cancellation) = cancellation();
        cancellation
    }

    /// Whether cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        *self.receiver.borrow()
    }

    /// Resolves once cancellation has been requested.
    ///
    /// Never resolves if the trigger is dropped without cancelling.
    pub async fn cancelled(&mut self) {
        let trigger_dropped = self.receiver.wait_for(|cancelled| *cancelled).await.is_err();
        if trigger_dropped {
            std::future::pending::<()>().await;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::{Cancellation, cancellation};

    #[test]
    fn starts_uncancelled() {
        let (_trigger, cancellation) = cancellation();

        assert!(!cancellation.is_cancelled());
    }

    #[test]
    fn cancel_is_seen_by_every_clone() {
        let (trigger, cancellation) = cancellation();
        let clone = cancellation.clone();

        trigger.cancel();

        assert!(cancellation.is_cancelled());
        assert!(clone.is_cancelled());
    }

    #[tokio::test]
    async fn cancelled_resolves_after_cancel() {
        let (trigger, mut cancellation) = cancellation();

        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(5)).await;
            trigger.cancel();
        });

        tokio::time::timeout(Duration::from_secs(5), cancellation.cancelled())
            .await
            .expect("cancellation was never observed");
    }

    #[tokio::test]
    async fn never_does_not_resolve() {
        let mut cancellation = Cancellation::never();

        let result =
            tokio::time::timeout(Duration::from_millis(10), cancellation.cancelled()).await;

        assert!(result.is_err());
        assert!(!cancellation.is_cancelled());
    }
}
