pub mod actor;
pub mod directory;
pub mod error;
pub mod ext;
pub mod mailbox;
pub mod message;

pub use actor::cell::ActorCell;
pub use actor::dispatch_outcome::DispatchOutcome;
pub use actor::receive::Receive;
pub use actor::{Actor, ActorDispatch};
pub use directory::{ActorId, Directory};
pub use message::envelope::Envelope;
pub use message::{DynMessage, Message};

pub use courier_derive::Message;
