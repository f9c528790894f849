use std::any::Any;
use std::fmt::Debug;

pub mod envelope;

pub type DynMessage = Box<dyn Message>;

/// A message payload that can travel through an [`Envelope`](envelope::Envelope).
///
/// The signature is the payload's runtime type identity; the registry keys
/// handlers by it. Implementations are normally generated with
/// `#[derive(Message)]`.
pub trait Message: Any + Send + Debug {
    fn signature_sized() -> &'static str
    where
        Self: Sized;

    fn signature(&self) -> &'static str;

    fn as_any(&self) -> &dyn Any;

    fn into_any(self: Box<Self>) -> Box<dyn Any>;
}

pub fn downcast_ref<M>(message: &dyn Message) -> Option<&M>
where
    M: Message,
{
    message.as_any().downcast_ref()
}

pub fn downcast_into<M>(message: DynMessage) -> Result<Box<M>, Box<dyn Any>>
where
    M: Message,
{
    message.into_any().downcast()
}
