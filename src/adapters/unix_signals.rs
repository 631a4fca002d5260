use std::io;

use tokio::signal::unix::{SignalKind, signal};
use tracing::debug;

use crate::app::interrupts::Interrupts;
use crate::domain::Signal;

/// Trap SIGHUP, SIGINT and SIGTERM for the rest of the process lifetime.
///
/// Must be called from within a tokio runtime. Once trapped, these signals no
/// longer terminate the process on their own; the installer exits explicitly.
pub fn listen() -> io::Result<Interrupts> {
    let (sender, interrupts) = Interrupts::channel();

    for trapped in Signal::ALL {
        let mut stream = signal(signal_kind(trapped))?;
        let sender = sender.clone();
        tokio::spawn(async move {
            while stream.recv().await.is_some() {
                debug!(signal = trapped.name(), "termination signal received");
                if sender.send(trapped).is_err() {
                    break;
                }
            }
        });
    }

    Ok(interrupts)
}

fn signal_kind(signal: Signal) -> SignalKind {
    match signal {
        Signal::Hangup => SignalKind::hangup(),
        Signal::Interrupt => SignalKind::interrupt(),
        Signal::Terminate => SignalKind::terminate(),
    }
}
