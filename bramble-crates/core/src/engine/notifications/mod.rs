//! Domain events and the subscriptions of propagators to them.
mod domain_events;
mod watch_list;

pub use domain_events::DomainEvent;
pub use domain_events::DomainEvents;
pub(crate) use watch_list::Watcher;
pub(crate) use watch_list::WatchList;
