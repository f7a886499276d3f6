//! One-shot background load, polled from the UI loop.

use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use anyhow::{Result, anyhow};
use tracing::info;

use super::CatalogClient;
use crate::model::Book;

pub struct CatalogLoad {
    rx: Option<Receiver<Result<Vec<Book>>>>,
}

pub fn spawn_load(client: CatalogClient) -> CatalogLoad {
    let (tx, rx) = mpsc::channel();
    info!(url = %client.config().subject_url(), "catalog load started");
    thread::spawn(move || {
        // The receiver may be gone if the UI quit first.
        let _ = tx.send(client.fetch_works());
    });
    CatalogLoad { rx: Some(rx) }
}

impl CatalogLoad {
    /// Non-blocking. Yields the result exactly once, then `None` forever.
    pub fn poll(&mut self) -> Option<Result<Vec<Book>>> {
        let rx = self.rx.as_ref()?;
        let out = match rx.try_recv() {
            Ok(res) => res,
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Disconnected) => Err(anyhow!("loader thread exited without a result")
                .context("catalog fetch failed")),
        };
        self.rx = None;
        Some(out)
    }

    /// Blocks until the result is in.
    pub fn wait(mut self) -> Result<Vec<Book>> {
        let Some(rx) = self.rx.take() else {
            return Err(anyhow!("catalog load already consumed"));
        };
        rx.recv()
            .map_err(|_| {
                anyhow!("loader thread exited without a result").context("catalog fetch failed")
            })
            .and_then(|res| res)
    }
}
