use crate::error::{Error, Result};
use crate::message::{downcast_into, downcast_ref, DynMessage, Message};

/// Type-erased container for exactly one message payload.
///
/// The signature reported by [`Envelope::signature`] always matches the type
/// of the stored value; [`Envelope::open`] with any other type fails with
/// [`Error::TypeMismatch`] instead of casting.
#[derive(Debug)]
pub struct Envelope {
    message: DynMessage,
}

impl Envelope {
    pub fn new<M>(message: M) -> Self
    where
        M: Message,
    {
        Self {
            message: Box::new(message),
        }
    }

    pub fn from_dyn(message: DynMessage) -> Self {
        Self { message }
    }

    pub fn signature(&self) -> &'static str {
        self.message.signature()
    }

    pub fn is<M>(&self) -> bool
    where
        M: Message,
    {
        self.message.as_any().is::<M>()
    }

    pub fn payload_ref<M>(&self) -> Option<&M>
    where
        M: Message,
    {
        downcast_ref(self.message.as_ref())
    }

    /// Consumes the envelope and returns the payload as `M`.
    pub fn open<M>(self) -> Result<M>
    where
        M: Message,
    {
        let actual = self.signature();
        downcast_into::<M>(self.message)
            .map(|message| *message)
            .map_err(|_| Error::TypeMismatch {
                requested: M::signature_sized(),
                actual,
            })
    }

    pub fn into_inner(self) -> DynMessage {
        self.message
    }
}

#[cfg(test)]
mod test {
    use courier_derive::Message;

    use crate::error::Error;
    use crate::message::envelope::Envelope;

    #[derive(Debug, Message, PartialEq)]
    struct Ping {
        seq: u32,
    }

    #[derive(Debug, Message)]
    struct Pong;

    #[test]
    fn test_open_matching_type() -> anyhow::Result<()> {
        let envelope = Envelope::new(Ping { seq: 7 });
        assert_eq!(envelope.signature(), std::any::type_name::<Ping>());
        let ping = envelope.open::<Ping>()?;
        assert_eq!(ping, Ping { seq: 7 });
        Ok(())
    }

    #[test]
    fn test_open_wrong_type_fails_closed() {
        let envelope = Envelope::new(Ping { seq: 1 });
        let error = envelope.open::<Pong>().unwrap_err();
        match error {
            Error::TypeMismatch { requested, actual } => {
                assert_eq!(requested, std::any::type_name::<Pong>());
                assert_eq!(actual, std::any::type_name::<Ping>());
            }
            other => panic!("unexpected error {other}"),
        }
    }

    #[test]
    fn test_payload_ref() {
        let envelope = Envelope::new(Ping { seq: 3 });
        assert!(envelope.is::<Ping>());
        assert!(!envelope.is::<Pong>());
        assert_eq!(envelope.payload_ref::<Ping>().map(|p| p.seq), Some(3));
        assert!(envelope.payload_ref::<Pong>().is_none());
    }
}
