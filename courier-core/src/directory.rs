use ahash::{HashMap, HashMapExt};
use tracing::debug;

use crate::actor::dispatch_outcome::DispatchOutcome;
use crate::actor::ActorDispatch;
use crate::error::{Error, Result};
use crate::message::envelope::Envelope;

pub type ActorId = u64;

/// Maps stable names and numeric ids to actor entry points.
///
/// The directory owns its actors exclusively; delivery takes `&mut self` and
/// there is no internal locking. Concurrency, if any, belongs to the caller.
pub struct Directory {
    actors: HashMap<ActorId, Box<dyn ActorDispatch>>,
    names: HashMap<String, ActorId>,
    next_id: ActorId,
}

impl Directory {
    pub fn new() -> Self {
        Self {
            actors: HashMap::new(),
            names: HashMap::new(),
            next_id: 0,
        }
    }

    pub fn register(
        &mut self,
        name: impl Into<String>,
        actor: impl ActorDispatch + 'static,
    ) -> Result<ActorId> {
        let name = name.into();
        if !is_valid_actor_name(&name) {
            return Err(Error::ActorNameInvalid(name));
        }
        if self.names.contains_key(&name) {
            return Err(Error::DuplicateActorName(name));
        }
        let id = self.next_id;
        self.next_id += 1;
        debug!("register actor {} ({}) under id {}", name, actor.kind_name(), id);
        self.names.insert(name, id);
        self.actors.insert(id, Box::new(actor));
        Ok(id)
    }

    pub fn resolve(&self, name: &str) -> Option<ActorId> {
        self.names.get(name).copied()
    }

    pub fn kind_name(&self, id: ActorId) -> Option<&'static str> {
        self.actors.get(&id).map(|actor| actor.kind_name())
    }

    pub fn send(&mut self, id: ActorId, envelope: Envelope) -> Result<DispatchOutcome> {
        match self.actors.get_mut(&id) {
            Some(actor) => Ok(actor.receive_message(envelope)),
            None => Err(Error::ActorNotFound(id)),
        }
    }

    pub fn send_to(&mut self, name: &str, envelope: Envelope) -> Result<DispatchOutcome> {
        match self.resolve(name) {
            Some(id) => self.send(id, envelope),
            None => Err(Error::ActorNameUnknown(name.to_string())),
        }
    }

    pub fn len(&self) -> usize {
        self.actors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actors.is_empty()
    }
}

impl Default for Directory {
    fn default() -> Self {
        Self::new()
    }
}

fn is_valid_actor_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}
