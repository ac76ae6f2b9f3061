use moneta_core::ChangeEvent;
use tokio::sync::broadcast;

/// In-process fan-out of backend change notifications.
///
/// The network-facing subscription owner publishes parsed events here;
/// consumers subscribe independently. Delivery is causally ordered per
/// entry id (publish order), with no guarantee across ids. Events
/// published after a subscription is dropped are discarded by the
/// channel.
pub struct ChangeFeed {
    sender: broadcast::Sender<ChangeEvent>,
}

impl ChangeFeed {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> FeedSubscription {
        FeedSubscription {
            receiver: self.sender.subscribe(),
        }
    }

    pub fn publish(&self, event: ChangeEvent) {
        let _ = self.sender.send(event);
    }
}

/// One consumer's view of the feed.
pub struct FeedSubscription {
    receiver: broadcast::Receiver<ChangeEvent>,
}

impl FeedSubscription {
    pub async fn recv(&mut self) -> Result<ChangeEvent, broadcast::error::RecvError> {
        self.receiver.recv().await
    }
}
