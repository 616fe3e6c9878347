mod auth;
mod client;
mod graphql;
mod rest;
mod source;

pub use client::Client;
pub use rest::{RawEvent, Subject, SubjectKind};
pub(crate) use source::EventSource;
#[cfg(test)]
pub(crate) use source::EventPage;

#[cfg(test)]
pub use rest::{Account, SubjectState};
