mod events;
mod subjects;
mod types;

pub use types::{RawEvent, Subject, SubjectKind};
#[cfg(test)]
pub use types::{Account, SubjectState};

pub(crate) use events::list_user_events;
pub(crate) use subjects::get_subject;
