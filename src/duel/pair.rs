//! Duel pairs.

use crate::people::{Parity, Person};

/// Two contestants taken out of their populations for one duel.
///
/// `person1` is the odd-month contestant and `person2` the even-month one.
/// A pair with one side missing resolves as a bye.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DuelPair {
    person1: Option<Person>,
    person2: Option<Person>,
}

impl DuelPair {
    /// A complete pair.
    #[must_use]
    pub fn new(odd: Person, even: Person) -> Self {
        Self {
            person1: Some(odd),
            person2: Some(even),
        }
    }

    /// A pair with a single contestant, placed on the side of their parity.
    #[must_use]
    pub fn single(person: Person) -> Self {
        match person.parity() {
            Parity::Odd => Self { person1: Some(person), person2: None },
            Parity::Even => Self { person1: None, person2: Some(person) },
        }
    }

    /// A pair from raw slots.
    #[must_use]
    pub fn from_parts(person1: Option<Person>, person2: Option<Person>) -> Self {
        Self { person1, person2 }
    }

    /// The odd-month contestant.
    #[must_use]
    pub fn person1(&self) -> Option<&Person> {
        self.person1.as_ref()
    }

    /// The even-month contestant.
    #[must_use]
    pub fn person2(&self) -> Option<&Person> {
        self.person2.as_ref()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.person1.is_some() && self.person2.is_some()
    }

    /// Consume the pair.
    #[must_use]
    pub fn into_parts(self) -> (Option<Person>, Option<Person>) {
        (self.person1, self.person2)
    }
}
