use std::any::type_name;

use crate::actor::dispatch_outcome::DispatchOutcome;
use crate::actor::receive::Receive;
use crate::message::envelope::Envelope;

pub mod cell;
pub mod dispatch_outcome;
pub mod receive;

/// A unit of state with a closed set of accepted message types.
///
/// `receive` builds the receiver registry once, before the actor sees any
/// message; the registry is not mutated afterwards. An actor that registers
/// no handler and no catch-all is legal, every delivery to it resolves to
/// [`DispatchOutcome::Unhandled`].
pub trait Actor: Send + Sized + 'static {
    fn kind_name() -> &'static str
    where
        Self: Sized,
    {
        type_name::<Self>()
    }

    fn receive(&self) -> Receive<Self>;
}

/// Object-safe surface the directory and transport use to deliver messages,
/// regardless of the concrete actor behind it.
pub trait ActorDispatch: Send {
    fn kind_name(&self) -> &'static str;

    fn receive_message(&mut self, envelope: Envelope) -> DispatchOutcome;
}
