//! Sender collaborator: the boundary between the screen and the transport.

use tracing::warn;

/// A command message queued for delivery to a rig.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundMessage {
    pub rig_id: u32,
    pub topic: String,
    pub payload: String,
}

/// Delivers command messages on behalf of the detail screen.
///
/// Implementations own every transport concern. The screen fires and
/// forgets: exactly one message leaves per invocation, and delivery
/// failures never come back.
pub trait CommandSender {
    fn send(&self, rig_id: u32, topic: &str, payload: &str);
}

/// [`CommandSender`] backed by an unbounded channel. The receiving end
/// belongs to the connection layer.
#[derive(Debug, Clone)]
pub struct ChannelSender {
    tx: flume::Sender<OutboundMessage>,
}

impl ChannelSender {
    /// Creates the sender and the queue the connection layer drains.
    pub fn new() -> (Self, flume::Receiver<OutboundMessage>) {
        let (tx, rx) = flume::unbounded();
        (Self { tx }, rx)
    }
}

impl CommandSender for ChannelSender {
    fn send(&self, rig_id: u32, topic: &str, payload: &str) {
        let message = OutboundMessage {
            rig_id,
            topic: topic.to_string(),
            payload: payload.to_string(),
        };
        if self.tx.send(message).is_err() {
            // Receiver gone; sends are fire-and-forget.
            warn!("Dropped outbound message for rig {:02}: {}", rig_id, topic);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::Command;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_one_message_per_dispatch() {
        let (sender, rx) = ChannelSender::new();

        for command in Command::ALL {
            sender.send(3, command.topic(), command.payload());

            let message = rx.try_recv().expect("one message per dispatch");
            assert_eq!(message.rig_id, 3);
            assert_eq!(message.topic, command.topic());
            assert_eq!(message.payload, command.payload());
            assert!(rx.try_recv().is_err(), "no extra messages for {:?}", command);
        }
    }

    #[test]
    fn test_disconnected_receiver_is_swallowed() {
        let (sender, rx) = ChannelSender::new();
        drop(rx);

        // Must not panic or block.
        sender.send(1, "stop", "");
    }

    /// Records calls instead of delivering them.
    struct RecordingSender {
        calls: RefCell<Vec<OutboundMessage>>,
    }

    impl CommandSender for RecordingSender {
        fn send(&self, rig_id: u32, topic: &str, payload: &str) {
            self.calls.borrow_mut().push(OutboundMessage {
                rig_id,
                topic: topic.to_string(),
                payload: payload.to_string(),
            });
        }
    }

    #[test]
    fn test_trait_object_dispatch() {
        let recorder = Rc::new(RecordingSender {
            calls: RefCell::new(Vec::new()),
        });
        let sender: Rc<dyn CommandSender> = recorder.clone();

        sender.send(12, Command::Flash.topic(), Command::Flash.payload());

        let calls = recorder.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(
            calls[0],
            OutboundMessage {
                rig_id: 12,
                topic: "flash".to_string(),
                payload: "500".to_string(),
            }
        );
    }
}
