//! Single-writer queue for measurements that originate off the render thread.
//!
//! Measurement sources on any thread hold a [`MeasurementSender`] and submit
//! fire-and-forget. The render thread owns the [`MeasurementQueue`] and the
//! controller, and applies pending measurements in arrival order. Every state
//! mutation therefore happens on one thread.

use crate::model::Measurement;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

/// Receiving end, owned by the thread that renders.
#[derive(Debug)]
pub struct MeasurementQueue {
    receiver: Receiver<Measurement>,
    sender: Sender<Measurement>,
}

impl MeasurementQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::channel();
        Self { receiver, sender }
    }

    /// Get a sender that can be moved to another thread.
    pub fn sender(&self) -> MeasurementSender {
        MeasurementSender {
            sender: self.sender.clone(),
        }
    }

    /// Pop the oldest pending measurement without blocking.
    pub fn try_next(&self) -> Option<Measurement> {
        match self.receiver.try_recv() {
            Ok(measurement) => Some(measurement),
            // The queue holds its own sender, so it is never disconnected.
            Err(TryRecvError::Empty | TryRecvError::Disconnected) => None,
        }
    }
}

impl Default for MeasurementQueue {
    fn default() -> Self {
        Self::new()
    }
}

/// Sending end, cloneable and `Send`.
#[derive(Debug, Clone)]
pub struct MeasurementSender {
    sender: Sender<Measurement>,
}

impl MeasurementSender {
    /// Submit a measurement. Never blocks.
    ///
    /// Returns `false` if the queue has been dropped; the measurement is lost.
    pub fn submit(&self, measurement: Measurement) -> bool {
        self.sender.send(measurement).is_ok()
    }

    /// Submit a full measurement from raw layout values.
    pub fn observe(&self, content_height: f64, container_height: f64) -> bool {
        self.submit(Measurement::both(content_height, container_height))
    }
}
