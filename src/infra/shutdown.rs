//! Shutdown fan-out: one trigger, any number of waiters.
//!
//! The OS signal is awaited exactly once; everything that needs to react to it
//! (the server's graceful drain, the drain deadline) holds a [`Shutdown`].

use std::time::Duration;

use tokio::sync::watch;

pub fn channel() -> (ShutdownTrigger, Shutdown) {
    let (tx, rx) = watch::channel(false);
    (ShutdownTrigger(tx), Shutdown(rx))
}

#[derive(Debug)]
pub struct ShutdownTrigger(watch::Sender<bool>);

impl ShutdownTrigger {
    pub fn fire(&self) {
        self.0.send_replace(true);
    }
}

#[derive(Debug, Clone)]
pub struct Shutdown(watch::Receiver<bool>);

impl Shutdown {
    /// Resolves once the trigger fires. Pends forever if the trigger is dropped unfired.
    pub async fn wait(mut self) {
        if self.0.wait_for(|fired| *fired).await.is_err() {
            std::future::pending::<()>().await;
        }
    }

    /// Resolves `grace` after the trigger fires.
    pub async fn deadline(self, grace: Duration) {
        self.wait().await;
        tokio::time::sleep(grace).await;
    }
}
