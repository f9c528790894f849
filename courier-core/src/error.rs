use thiserror::Error;

use crate::directory::ActorId;

pub type Result<T, E = Error> = core::result::Result<T, E>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("actor name {0} is invalid, allowed chars a..=z, A..=Z, 0..=9, _, -")]
    ActorNameInvalid(String),
    #[error("duplicate actor name {0}")]
    DuplicateActorName(String),
    #[error("no actor registered under id {0}")]
    ActorNotFound(ActorId),
    #[error("no actor registered under name {0}")]
    ActorNameUnknown(String),
    #[error("envelope holds {actual}, cannot open it as {requested}")]
    TypeMismatch {
        requested: &'static str,
        actual: &'static str,
    },
    #[error("mailbox is closed")]
    MailboxClosed,
    #[error("mailbox is full")]
    MailboxFull,
}
