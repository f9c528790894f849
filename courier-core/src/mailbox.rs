use tokio::sync::mpsc::error::TrySendError;
use tokio::sync::mpsc::{self, Receiver, Sender};
use tokio::task::yield_now;
use tracing::{error, warn};

use crate::actor::dispatch_outcome::DispatchOutcome;
use crate::actor::ActorDispatch;
use crate::error::{Error, Result};
use crate::message::envelope::Envelope;

const DEFAULT_THROUGHPUT: usize = 16;

/// Inbox side of the transport boundary: a queue of envelopes feeding one
/// actor. Ordering across producers is the channel's contract, not ours.
pub struct Mailbox {
    message: Receiver<Envelope>,
    throughput: usize,
}

#[derive(Debug, Clone)]
pub struct MailboxSender {
    message: Sender<Envelope>,
}

pub fn channel(capacity: usize) -> (MailboxSender, Mailbox) {
    let (tx, rx) = mpsc::channel(capacity);
    let sender = MailboxSender { message: tx };
    let mailbox = Mailbox {
        message: rx,
        throughput: DEFAULT_THROUGHPUT,
    };
    (sender, mailbox)
}

impl MailboxSender {
    pub async fn deliver(&self, envelope: Envelope) -> Result<()> {
        self.message
            .send(envelope)
            .await
            .map_err(|_| Error::MailboxClosed)
    }

    pub fn try_deliver(&self, envelope: Envelope) -> Result<()> {
        self.message.try_send(envelope).map_err(|error| match error {
            TrySendError::Full(_) => Error::MailboxFull,
            TrySendError::Closed(_) => Error::MailboxClosed,
        })
    }
}

impl Mailbox {
    pub fn with_throughput(mut self, throughput: usize) -> Self {
        self.throughput = throughput.max(1);
        self
    }

    /// Drives the actor until every sender is dropped or the mailbox is
    /// closed. Unhandled and failed deliveries are logged here; they never
    /// stop the loop.
    pub async fn pump(&mut self, actor: &mut dyn ActorDispatch) {
        let mut processed = 0;
        while let Some(envelope) = self.message.recv().await {
            let signature = envelope.signature();
            match actor.receive_message(envelope) {
                DispatchOutcome::Handled | DispatchOutcome::HandledByFallback => {}
                DispatchOutcome::Unhandled => {
                    warn!("{} dropped unhandled message {}", actor.kind_name(), signature);
                }
                DispatchOutcome::HandlerFailed { message, actor: kind, error } => {
                    error!("{} failed handling {}: {:?}", kind, message, error);
                }
            }
            processed += 1;
            if processed >= self.throughput {
                processed = 0;
                yield_now().await;
            }
        }
    }

    pub fn close(&mut self) {
        while self.message.try_recv().is_ok() {}
        self.message.close();
    }
}

#[cfg(test)]
mod test {
    use courier_derive::Message;

    use crate::actor::cell::ActorCell;
    use crate::actor::receive::Receive;
    use crate::actor::Actor;
    use crate::error::Error;
    use crate::mailbox;
    use crate::message::envelope::Envelope;

    #[derive(Debug, Message)]
    struct Record {
        value: u32,
    }

    #[derive(Debug, Message)]
    struct Unknown;

    #[derive(Debug, Default)]
    struct Recorder {
        values: Vec<u32>,
    }

    impl Actor for Recorder {
        fn receive(&self) -> Receive<Self> {
            Receive::<Self>::new().is::<Record>(|actor, Record { value }| {
                actor.values.push(value);
                Ok(())
            })
        }
    }

    #[tokio::test]
    async fn test_pump_in_delivery_order() -> anyhow::Result<()> {
        let (sender, mut mailbox) = mailbox::channel(8);
        for value in [1, 2, 3] {
            sender.deliver(Envelope::new(Record { value })).await?;
        }
        sender.deliver(Envelope::new(Unknown)).await?;
        drop(sender);

        let mut cell = ActorCell::new(Recorder::default());
        mailbox.pump(&mut cell).await;
        assert_eq!(cell.actor().values, vec![1, 2, 3]);
        Ok(())
    }

    #[tokio::test]
    async fn test_deliver_after_close() -> anyhow::Result<()> {
        let (sender, mut mailbox) = mailbox::channel(8);
        sender.deliver(Envelope::new(Record { value: 1 })).await?;
        mailbox.close();
        assert!(matches!(
            sender.try_deliver(Envelope::new(Record { value: 2 })),
            Err(Error::MailboxClosed)
        ));
        let mut cell = ActorCell::new(Recorder::default());
        mailbox.pump(&mut cell).await;
        assert!(cell.actor().values.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_try_deliver_full() -> anyhow::Result<()> {
        let (sender, _mailbox) = mailbox::channel(1);
        sender.try_deliver(Envelope::new(Record { value: 1 }))?;
        assert!(matches!(
            sender.try_deliver(Envelope::new(Record { value: 2 })),
            Err(Error::MailboxFull)
        ));
        Ok(())
    }
}
