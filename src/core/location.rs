//! Location updates crossing from a provider into the consumer
//!
//! A provider posts batches of fixes through a [`LocationSender`], from any
//! thread. The owner of the round state holds the [`LocationReceiver`] and
//! drains it when it is ready; only the most recent fix is kept, so the
//! round state has a single writer.

use crate::core::models::GeoPoint;
use crate::debug;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

/// Producer half of a location feed
#[derive(Debug, Clone)]
pub struct LocationSender {
    tx: Sender<Vec<GeoPoint>>,
}

impl LocationSender {
    /// Post a batch of fixes, oldest first
    ///
    /// Returns `false` once the receiving side is gone.
    pub fn post(&self, fixes: Vec<GeoPoint>) -> bool {
        if fixes.is_empty() {
            return true;
        }
        self.tx.send(fixes).is_ok()
    }
}

/// Consumer half of a location feed
#[derive(Debug)]
pub struct LocationReceiver {
    rx: Receiver<Vec<GeoPoint>>,
    latest: Option<GeoPoint>,
    connected: bool,
}

impl LocationReceiver {
    /// Drain every pending batch and return the most recent fix seen so far
    pub fn latest(&mut self) -> Option<GeoPoint> {
        loop {
            match self.rx.try_recv() {
                Ok(batch) => {
                    if let Some(fix) = batch.last() {
                        self.latest = Some(*fix);
                    }
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    if self.connected {
                        debug!("Location provider disconnected");
                    }
                    self.connected = false;
                    break;
                }
            }
        }
        self.latest
    }

    /// Whether a provider may still post fixes
    #[must_use]
    pub const fn is_connected(&self) -> bool {
        self.connected
    }
}

/// Create a connected sender/receiver pair
#[must_use]
pub fn location_channel() -> (LocationSender, LocationReceiver) {
    let (tx, rx) = mpsc::channel();
    (
        LocationSender { tx },
        LocationReceiver {
            rx,
            latest: None,
            connected: true,
        },
    )
}
