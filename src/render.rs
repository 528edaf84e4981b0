use anyhow::Result;
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;
use tokio::task::JoinHandle;

use crate::button::Button;
use crate::observer::Observer;
use crate::store::ButtonStore;

/// How many frames may queue up before the view starts dropping them
pub const RENDER_QUEUE: usize = 50;

pub fn start(mut rx: mpsc::Receiver<Vec<Button>>) -> JoinHandle<Result<()>> {
    tokio::task::spawn_blocking(move || {
        log::info!("Starting renderer");

        let mut frames = 0usize;

        while let Some(buttons) = rx.blocking_recv() {
            frames += 1;

            for (i, button) in buttons.iter().enumerate() {
                log::trace!(
                    "Frame {}: light {} at ({}, {}) is {}",
                    frames,
                    i,
                    button.x,
                    button.y,
                    button.color
                );
            }
        }

        log::info!("Renderer stopping after {} frames", frames);

        Ok(())
    })
}

/// Sends a snapshot of the buttons to the renderer on every change.
pub struct ChannelObserver {
    tx: mpsc::Sender<Vec<Button>>,
}

impl ChannelObserver {
    pub fn new(tx: mpsc::Sender<Vec<Button>>) -> Self {
        Self { tx }
    }
}

impl Observer for ChannelObserver {
    fn notify(&mut self, store: &ButtonStore) {
        match self.tx.try_send(store.buttons().to_vec()) {
            Ok(()) => (),
            Err(TrySendError::Full(_)) => log::warn!("Renderer is behind, dropping frame"),
            Err(TrySendError::Closed(_)) => log::warn!("Renderer is gone, dropping frame"),
        }
    }
}
