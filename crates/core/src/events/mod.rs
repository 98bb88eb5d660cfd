//! Domain events emitted by the ledger after successful mutations.

mod domain_event;
mod sink;

pub use domain_event::DomainEvent;
pub use sink::{DomainEventSink, NoOpDomainEventSink, RecordingDomainEventSink};
