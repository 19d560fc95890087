//! Live-event notifications.
//!
//! The renderer publishes one `LiveEventUpdate` per in-progress event it
//! walks, through whatever `LiveEventSink` it was built with. Delivery is
//! best effort; the renderer logs and drops failures.

use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};

use crate::error::AppError;
use crate::events::Event;

/// Notification that an event is currently in progress.
#[derive(Debug, Clone, PartialEq)]
pub struct LiveEventUpdate {
    pub event: Event,
}

impl LiveEventUpdate {
    pub fn new(event: &Event) -> Self {
        LiveEventUpdate {
            event: event.clone(),
        }
    }
}

/// Receiver side of the live-event channel.
pub trait LiveEventSink {
    /// Delivers one update. Must not block.
    fn publish(&self, update: LiveEventUpdate) -> Result<(), AppError>;
}

impl<S: LiveEventSink + ?Sized> LiveEventSink for &S {
    fn publish(&self, update: LiveEventUpdate) -> Result<(), AppError> {
        (**self).publish(update)
    }
}

/// Discards every update.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSink;

impl LiveEventSink for NoopSink {
    fn publish(&self, _update: LiveEventUpdate) -> Result<(), AppError> {
        Ok(())
    }
}

/// Calls a closure for every update.
pub struct FnSink<F>(pub F);

impl<F> LiveEventSink for FnSink<F>
where
    F: Fn(LiveEventUpdate),
{
    fn publish(&self, update: LiveEventUpdate) -> Result<(), AppError> {
        (self.0)(update);
        Ok(())
    }
}

/// Forwards updates into an unbounded tokio channel.
///
/// Sending never waits; it only fails once the receiver has been dropped.
#[derive(Debug, Clone)]
pub struct ChannelSink {
    sender: UnboundedSender<LiveEventUpdate>,
}

impl ChannelSink {
    pub fn new(sender: UnboundedSender<LiveEventUpdate>) -> Self {
        ChannelSink { sender }
    }

    /// Creates a sink together with the receiver listeners read from.
    pub fn channel() -> (Self, UnboundedReceiver<LiveEventUpdate>) {
        let (sender, receiver) = unbounded_channel();
        (ChannelSink::new(sender), receiver)
    }
}

impl LiveEventSink for ChannelSink {
    fn publish(&self, update: LiveEventUpdate) -> Result<(), AppError> {
        self.sender.send(update).map_err(|err| {
            AppError::notification_delivery(err.0.event.key, "live event receiver closed")
        })
    }
}
