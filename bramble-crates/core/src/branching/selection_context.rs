use crate::basic_types::Random;
#[cfg(doc)]
use crate::branching::Brancher;
use crate::engine::Domains;
use crate::engine::ReadDomains;

/// What a [`Brancher`] may look at when choosing the next decision: the current domains and a
/// random number generator.
#[derive(Debug)]
pub struct SelectionContext<'a> {
    domains: Domains<'a>,
    random_generator: &'a mut dyn Random,
}

impl<'a> SelectionContext<'a> {
    pub fn new(domains: Domains<'a>, rng: &'a mut dyn Random) -> Self {
        SelectionContext {
            domains,
            random_generator: rng,
        }
    }

    pub fn random(&mut self) -> &mut dyn Random {
        self.random_generator
    }
}

impl ReadDomains for SelectionContext<'_> {
    fn domains(&self) -> Domains<'_> {
        self.domains
    }
}
