//! People who can be drawn into a duel.
//!
//! A `Person` is created once during setup and never changes afterwards,
//! except for moving between its district's population and a `DuelPair`.
//! Identity is the `PersonId`, not the name: two people may share a name.

use serde::{Deserialize, Serialize};

use super::district::DistrictId;
use crate::core::UniformSource;

/// Ages (inclusive start, exclusive end) that carry a tessera.
pub const TESSERA_AGES: std::ops::Range<u32> = 12..18;

/// Unique identifier for a person, assigned in setup order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PersonId(pub u32);

impl PersonId {
    /// Create a new person ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for PersonId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Person({})", self.0)
    }
}

/// Birth-month parity. Selects which of a district's two populations
/// a person lives in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Parity {
    Odd,
    Even,
}

impl Parity {
    /// Parity of a birth month.
    #[must_use]
    pub const fn of_month(month: u32) -> Self {
        if month % 2 == 0 {
            Parity::Even
        } else {
            Parity::Odd
        }
    }

    /// The other parity.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Parity::Odd => Parity::Even,
            Parity::Even => Parity::Odd,
        }
    }
}

/// A resident of a district.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    id: PersonId,
    first_name: String,
    last_name: String,
    birth_month: u32,
    age: u32,
    district: DistrictId,
    effectiveness: i32,
    tessera: bool,
}

impl Person {
    /// Create a person. The tessera flag is derived from `age` here and
    /// never recomputed.
    pub fn new(
        id: PersonId,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        birth_month: u32,
        age: u32,
        district: DistrictId,
        effectiveness: i32,
    ) -> Self {
        debug_assert!((1..=12).contains(&birth_month), "birth month out of range");
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            birth_month,
            age,
            district,
            effectiveness,
            tessera: TESSERA_AGES.contains(&age),
        }
    }

    #[inline]
    #[must_use]
    pub fn id(&self) -> PersonId {
        self.id
    }

    #[must_use]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    #[must_use]
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    #[must_use]
    pub fn birth_month(&self) -> u32 {
        self.birth_month
    }

    #[must_use]
    pub fn age(&self) -> u32 {
        self.age
    }

    /// The district this person belongs to.
    #[inline]
    #[must_use]
    pub fn district(&self) -> DistrictId {
        self.district
    }

    #[must_use]
    pub fn effectiveness(&self) -> i32 {
        self.effectiveness
    }

    /// Whether this person is conscripted ahead of everyone else.
    #[inline]
    #[must_use]
    pub fn tessera(&self) -> bool {
        self.tessera
    }

    /// Which population this person lives in.
    #[inline]
    #[must_use]
    pub fn parity(&self) -> Parity {
        Parity::of_month(self.birth_month)
    }

    /// Fight `other` and return whichever of the two wins.
    ///
    /// Each side rolls `1..=die_sides` (self first) and adds its
    /// effectiveness. Ties go to `self`.
    pub fn duel<'a, R>(&'a self, other: &'a Person, rng: &mut R, die_sides: usize) -> &'a Person
    where
        R: UniformSource + ?Sized,
    {
        let own = self.roll(rng, die_sides);
        let theirs = other.roll(rng, die_sides);

        if own >= theirs {
            self
        } else {
            other
        }
    }

    fn roll<R: UniformSource + ?Sized>(&self, rng: &mut R, die_sides: usize) -> i64 {
        let die = rng.uniform(die_sides) as i64 + 1;
        i64::from(self.effectiveness) + die
    }
}

impl std::fmt::Display for Person {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} (district {})", self.first_name, self.last_name, self.district)
    }
}
