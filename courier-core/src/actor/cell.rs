use crate::actor::dispatch_outcome::DispatchOutcome;
use crate::actor::receive::Receive;
use crate::actor::{Actor, ActorDispatch};
use crate::message::envelope::Envelope;

/// Pairs an actor with the registry built once from [`Actor::receive`].
///
/// The registry is frozen at construction; registration happens before the
/// cell is exposed to any delivery path.
pub struct ActorCell<A: Actor> {
    actor: A,
    receive: Receive<A>,
}

impl<A: Actor> ActorCell<A> {
    pub fn new(actor: A) -> Self {
        let receive = actor.receive();
        Self { actor, receive }
    }

    pub fn actor(&self) -> &A {
        &self.actor
    }
}

impl<A: Actor> ActorDispatch for ActorCell<A> {
    fn kind_name(&self) -> &'static str {
        A::kind_name()
    }

    fn receive_message(&mut self, envelope: Envelope) -> DispatchOutcome {
        self.receive.receive(&mut self.actor, envelope)
    }
}
