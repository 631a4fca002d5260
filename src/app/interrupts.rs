//! Delivery of termination signals to the sequencer.

use tokio::sync::mpsc;

use crate::domain::Signal;

pub type InterruptSender = mpsc::UnboundedSender<Signal>;

/// Receiving end of trapped termination signals.
pub struct Interrupts {
    receiver: mpsc::UnboundedReceiver<Signal>,
}

impl Interrupts {
    pub fn channel() -> (InterruptSender, Self) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (sender, Self { receiver })
    }

    /// Wait for the next signal. Never resolves once every sender is gone.
    pub async fn recv(&mut self) -> Signal {
        match self.receiver.recv().await {
            Some(signal) => signal,
            None => std::future::pending().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn delivers_sent_signal() {
        let (sender, mut interrupts) = Interrupts::channel();
        sender.send(Signal::Terminate).unwrap();
        assert_eq!(interrupts.recv().await, Signal::Terminate);
    }

    #[tokio::test]
    async fn closed_channel_never_resolves() {
        let (sender, mut interrupts) = Interrupts::channel();
        drop(sender);

        let waited = tokio::time::timeout(Duration::from_millis(20), interrupts.recv()).await;
        assert!(waited.is_err());
    }
}
