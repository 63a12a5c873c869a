use crate::bramble_assert_simple;
use crate::containers::KeyedVec;
use crate::engine::variables::DomainId;
use crate::engine::Domains;
use crate::engine::ReadDomains;

/// A full assignment of the variables of a solver, recorded when the search reached a leaf in
/// which every variable was fixed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    values: KeyedVec<DomainId, i32>,
}

impl Solution {
    pub(crate) fn from_domains(domains: Domains<'_>) -> Solution {
        let mut values = KeyedVec::default();
        for domain in domains.domain_ids() {
            bramble_assert_simple!(
                domains.is_fixed(domain),
                "a solution requires every variable to be fixed, {domain} is not"
            );
            let _ = values.push(domains.lower_bound(domain));
        }
        Solution { values }
    }

    /// The value of `variable` in this solution.
    pub fn value(&self, variable: DomainId) -> i32 {
        self.values[variable]
    }

    pub fn num_domains(&self) -> usize {
        self.values.len()
    }

    /// Iterate over every variable and its value, in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (DomainId, i32)> + '_ {
        self.values.keys().zip(self.values.iter().copied())
    }
}

impl std::ops::Index<DomainId> for Solution {
    type Output = i32;

    fn index(&self, domain: DomainId) -> &i32 {
        &self.values[domain]
    }
}
