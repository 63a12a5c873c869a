use enumset::enum_set;
use enumset::EnumSet;
use enumset::EnumSetType;

/// A kind of change to a domain.
#[derive(Debug, Hash, EnumSetType)]
pub enum DomainEvent {
    /// The domain became a single value.
    Assign,
    /// The lower bound increased.
    LowerBound,
    /// The upper bound decreased.
    UpperBound,
    /// At least one value was removed, at a bound or inside the domain.
    Removal,
}

/// A set of [`DomainEvent`]s, used both for the changes reported to a propagator and for the
/// mask of changes a propagator wants to hear about.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct DomainEvents {
    events: EnumSet<DomainEvent>,
}

impl DomainEvents {
    pub const NONE: DomainEvents = DomainEvents::new(EnumSet::EMPTY);
    /// Lower and upper bound tightening (which includes fixing the variable).
    pub const BOUNDS: DomainEvents =
        DomainEvents::new(enum_set!(DomainEvent::LowerBound | DomainEvent::UpperBound));
    /// Every change to the domain.
    pub const ANY_INT: DomainEvents = DomainEvents::new(enum_set!(
        DomainEvent::Assign | DomainEvent::LowerBound | DomainEvent::UpperBound | DomainEvent::Removal
    ));
    pub const LOWER_BOUND: DomainEvents = DomainEvents::new(enum_set!(DomainEvent::LowerBound));
    pub const UPPER_BOUND: DomainEvents = DomainEvents::new(enum_set!(DomainEvent::UpperBound));
    pub const ASSIGN: DomainEvents = DomainEvents::new(enum_set!(DomainEvent::Assign));
    pub const REMOVAL: DomainEvents = DomainEvents::new(enum_set!(DomainEvent::Removal));

    pub const fn new(events: EnumSet<DomainEvent>) -> DomainEvents {
        DomainEvents { events }
    }

    pub fn events(&self) -> EnumSet<DomainEvent> {
        self.events
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn contains(&self, event: DomainEvent) -> bool {
        self.events.contains(event)
    }

    pub fn intersection(self, other: DomainEvents) -> DomainEvents {
        DomainEvents::new(self.events & other.events)
    }

    pub fn union(self, other: DomainEvents) -> DomainEvents {
        DomainEvents::new(self.events | other.events)
    }

    /// The events caused by a domain moving from `(lb, ub, size)` `before` to `after`.
    pub(crate) fn between(before: (i32, i32, u64), after: (i32, i32, u64)) -> DomainEvents {
        let mut events = EnumSet::new();
        if after.2 < before.2 {
            let _ = events.insert(DomainEvent::Removal);
        }
        if after.0 > before.0 {
            let _ = events.insert(DomainEvent::LowerBound);
        }
        if after.1 < before.1 {
            let _ = events.insert(DomainEvent::UpperBound);
        }
        if after.2 == 1 && before.2 > 1 {
            let _ = events.insert(DomainEvent::Assign);
        }
        DomainEvents::new(events)
    }
}

impl From<DomainEvent> for DomainEvents {
    fn from(event: DomainEvent) -> Self {
        DomainEvents::new(EnumSet::only(event))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixing_a_variable_reports_every_applicable_event() {
        let events = DomainEvents::between((0, 5, 6), (5, 5, 1));

        assert!(events.contains(DomainEvent::Assign));
        assert!(events.contains(DomainEvent::LowerBound));
        assert!(events.contains(DomainEvent::Removal));
        assert!(!events.contains(DomainEvent::UpperBound));
    }

    #[test]
    fn removing_an_inner_value_is_only_a_removal() {
        let events = DomainEvents::between((0, 5, 6), (0, 5, 5));

        assert_eq!(events, DomainEvents::REMOVAL);
        assert!(events.intersection(DomainEvents::BOUNDS).is_empty());
    }
}
