//! Districts and their two populations.

use serde::{Deserialize, Serialize};

use super::person::{Parity, Person, PersonId};

/// District identifier. The BST is keyed by this value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DistrictId(pub i32);

impl DistrictId {
    /// Create a new district ID.
    #[must_use]
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> i32 {
        self.0
    }
}

impl std::fmt::Display for DistrictId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A district: an id plus an odd-month and an even-month population.
///
/// Populations are unordered; removal is by `PersonId`. A district that is
/// in the game always has at least one non-empty population, and it leaves
/// the game as soon as either one is empty after a duel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct District {
    id: DistrictId,
    odd_population: Vec<Person>,
    even_population: Vec<Person>,
}

impl District {
    /// Create an empty district.
    #[must_use]
    pub fn new(id: DistrictId) -> Self {
        Self {
            id,
            odd_population: Vec::new(),
            even_population: Vec::new(),
        }
    }

    #[inline]
    #[must_use]
    pub fn id(&self) -> DistrictId {
        self.id
    }

    #[must_use]
    pub fn odd_population(&self) -> &[Person] {
        &self.odd_population
    }

    #[must_use]
    pub fn even_population(&self) -> &[Person] {
        &self.even_population
    }

    /// The population holding people of the given parity.
    #[must_use]
    pub fn population(&self, parity: Parity) -> &[Person] {
        match parity {
            Parity::Odd => &self.odd_population,
            Parity::Even => &self.even_population,
        }
    }

    fn population_mut(&mut self, parity: Parity) -> &mut Vec<Person> {
        match parity {
            Parity::Odd => &mut self.odd_population,
            Parity::Even => &mut self.even_population,
        }
    }

    /// Add a person to the population matching their birth month.
    pub fn add_person(&mut self, person: Person) {
        debug_assert_eq!(person.district(), self.id, "person added to foreign district");
        self.population_mut(person.parity()).push(person);
    }

    /// Remove a person from the given population by identity.
    ///
    /// Returns `None` if they are not there.
    pub fn remove_person(&mut self, parity: Parity, id: PersonId) -> Option<Person> {
        let population = self.population_mut(parity);
        let index = population.iter().position(|p| p.id() == id)?;
        Some(population.remove(index))
    }

    /// True when either population is empty.
    #[must_use]
    pub fn is_one_sided(&self) -> bool {
        self.odd_population.is_empty() || self.even_population.is_empty()
    }

    /// Total number of residents.
    #[must_use]
    pub fn len(&self) -> usize {
        self.odd_population.len() + self.even_population.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
