use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe};

use ahash::{HashMap, HashMapExt};
use anyhow::anyhow;
use tracing::{error, trace};

use crate::actor::dispatch_outcome::DispatchOutcome;
use crate::actor::Actor;
use crate::message::envelope::Envelope;
use crate::message::Message;

pub type ReceiveFn<A> = Box<dyn Fn(&mut A, Envelope) -> anyhow::Result<()> + Send>;

/// Per-actor mapping from message signature to handler, plus the single
/// catch-all slot consulted when no signature matches.
pub struct Receive<A: Actor> {
    receiver: HashMap<&'static str, ReceiveFn<A>>,
    catch_all: Option<ReceiveFn<A>>,
}

impl<A: Actor> Receive<A> {
    pub fn new() -> Self {
        Self {
            receiver: HashMap::new(),
            catch_all: None,
        }
    }

    /// Registers a handler for messages of type `M`.
    ///
    /// Registering a second handler for the same `M` replaces the first;
    /// the latest registration wins.
    pub fn is<M>(mut self, handler: impl Fn(&mut A, M) -> anyhow::Result<()> + Send + 'static) -> Self
    where
        M: Message,
    {
        let signature = M::signature_sized();
        self.receiver.insert(
            signature,
            Box::new(move |actor, envelope| {
                let message = envelope.open::<M>()?;
                handler(actor, message)
            }),
        );
        self
    }

    /// Registers the fallback handler, replacing any prior fallback. It runs
    /// only after the signature lookup misses and receives the envelope
    /// unopened.
    pub fn catch_all(
        mut self,
        handler: impl Fn(&mut A, Envelope) -> anyhow::Result<()> + Send + 'static,
    ) -> Self {
        self.catch_all = Some(Box::new(handler));
        self
    }

    pub fn handles<M>(&self) -> bool
    where
        M: Message,
    {
        self.receiver.contains_key(M::signature_sized())
    }

    pub fn len(&self) -> usize {
        self.receiver.len()
    }

    pub fn is_empty(&self) -> bool {
        self.receiver.is_empty()
    }

    /// Routes one envelope: signature lookup, then catch-all, then drop.
    /// Handler errors and panics are contained here and reported as
    /// [`DispatchOutcome::HandlerFailed`]; nothing escapes to the caller.
    pub fn receive(&self, actor: &mut A, envelope: Envelope) -> DispatchOutcome {
        let signature = envelope.signature();
        match self.receiver.get(signature) {
            Some(handler) => Self::invoke(handler, actor, envelope, signature, DispatchOutcome::Handled),
            None => match &self.catch_all {
                Some(handler) => Self::invoke(
                    handler,
                    actor,
                    envelope,
                    signature,
                    DispatchOutcome::HandledByFallback,
                ),
                None => {
                    trace!("{} has no receiver for {}, message dropped", A::kind_name(), signature);
                    DispatchOutcome::Unhandled
                }
            },
        }
    }

    fn invoke(
        handler: &ReceiveFn<A>,
        actor: &mut A,
        envelope: Envelope,
        signature: &'static str,
        handled: DispatchOutcome,
    ) -> DispatchOutcome {
        let result = catch_unwind(AssertUnwindSafe(|| handler(actor, envelope)));
        let error = match result {
            Ok(Ok(())) => return handled,
            Ok(Err(error)) => error,
            Err(panic) => anyhow!("handler panicked: {}", panic_message(panic.as_ref())),
        };
        error!(
            "{} handler for {} failed: {:?}",
            A::kind_name(),
            signature,
            error
        );
        DispatchOutcome::HandlerFailed {
            message: signature,
            actor: A::kind_name(),
            error,
        }
    }
}

impl<A: Actor> Default for Receive<A> {
    fn default() -> Self {
        Self::new()
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> &str {
    if let Some(message) = panic.downcast_ref::<&str>() {
        message
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message
    } else {
        "non-string panic payload"
    }
}
