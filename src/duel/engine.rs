//! Dueler selection and duel resolution.
//!
//! ## Selection
//!
//! Every search walks the active tree in pre-order and takes the first
//! match, so a fixed tree shape and seed always produce the same pair:
//!
//! 1. First tessera holder in any odd population.
//! 2. First tessera holder in any even population outside (1)'s district.
//! 3. If (1) failed: a uniform draw from the first non-empty odd population
//!    outside (2)'s district.
//! 4. If (2) failed: a uniform draw from the first non-empty even population
//!    outside (1)'s district.
//!
//! ## Resolution
//!
//! The winner goes home, the loser leaves the games. Then the loser's
//! district and the winner's district, in that order, are eliminated if
//! either of their populations is empty.

use smallvec::SmallVec;

use super::pair::DuelPair;
use crate::core::{GameRng, GamesConfig, GamesError, UniformSource};
use crate::people::{District, DistrictId, Parity, Person, PersonId};
use crate::registry::DistrictRegistry;

/// Outcome of `DuelEngine::eliminate_dueler`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DuelOutcome {
    /// The pair held nobody.
    Empty,
    /// Only one contestant; they went back to their population.
    Bye { person: PersonId, district: DistrictId },
    /// A duel was fought.
    Decided(DuelReport),
}

/// Result of a fought duel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DuelReport {
    pub winner: PersonId,
    pub winner_district: DistrictId,
    /// The fallen contestant, no longer in any population.
    pub loser: Person,
    /// Districts eliminated as a result, loser's side first.
    pub eliminated: SmallVec<[DistrictId; 2]>,
}

/// A person located in the tree, not yet removed.
#[derive(Clone, Copy, Debug)]
struct Candidate {
    district: DistrictId,
    person: PersonId,
}

/// Runs duels over a `DistrictRegistry` with an injected generator.
#[derive(Clone, Debug)]
pub struct DuelEngine<R = GameRng> {
    registry: DistrictRegistry,
    rng: R,
    die_sides: usize,
}

impl DuelEngine<GameRng> {
    /// Engine seeded from `config`.
    #[must_use]
    pub fn from_config(registry: DistrictRegistry, config: &GamesConfig) -> Self {
        Self::new(registry, GameRng::new(config.seed), config.duel_die_sides)
    }
}

impl<R: UniformSource> DuelEngine<R> {
    /// Create an engine over `registry`, drawing from `rng`.
    pub fn new(registry: DistrictRegistry, rng: R, die_sides: usize) -> Self {
        assert!(die_sides > 0, "Duel die must have at least 1 side");
        Self {
            registry,
            rng,
            die_sides,
        }
    }

    #[must_use]
    pub fn registry(&self) -> &DistrictRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut DistrictRegistry {
        &mut self.registry
    }

    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Move a staged district into the games. `Ok(false)` for a duplicate id.
    pub fn add_district_to_game(&mut self, id: DistrictId) -> Result<bool, GamesError> {
        self.registry.add(id)
    }

    /// Look up an active district.
    pub fn find_district(&self, id: DistrictId) -> Result<&District, GamesError> {
        self.registry.find(id)
    }

    /// Remove a district from the games.
    pub fn eliminate_district(&mut self, id: DistrictId) -> Result<District, GamesError> {
        self.registry.eliminate(id)
    }

    /// Pick and remove an odd and an even contestant from different districts.
    ///
    /// Returns `None`, leaving every population untouched, when either side
    /// cannot be filled.
    pub fn select_duelers(&mut self) -> Option<DuelPair> {
        let mut odd = self.search(Parity::Odd, true, None);
        let mut even = self.search(Parity::Even, true, odd.map(|c| c.district));

        if odd.is_none() {
            odd = self.search(Parity::Odd, false, even.map(|c| c.district));
        }
        if even.is_none() {
            even = self.search(Parity::Even, false, odd.map(|c| c.district));
        }

        self.take_pair(odd?, even?)
    }

    /// Remove both candidates, or neither.
    fn take_pair(&mut self, odd: Candidate, even: Candidate) -> Option<DuelPair> {
        if !(self.is_present(odd, Parity::Odd) && self.is_present(even, Parity::Even)) {
            return None;
        }
        let person1 = self.take(odd, Parity::Odd)?;
        let person2 = self.take(even, Parity::Even)?;

        tracing::debug!(
            odd = %person1,
            even = %person2,
            "duelers selected"
        );
        Some(DuelPair::new(person1, person2))
    }

    fn is_present(&self, candidate: Candidate, parity: Parity) -> bool {
        self.registry.find(candidate.district).is_ok_and(|district| {
            district
                .population(parity)
                .iter()
                .any(|p| p.id() == candidate.person)
        })
    }

    /// Pre-order search for one contestant.
    ///
    /// With `tessera_only`, the first tessera holder wins. Otherwise the
    /// first non-empty population is sampled with a single uniform draw.
    fn search(
        &mut self,
        parity: Parity,
        tessera_only: bool,
        exclude: Option<DistrictId>,
    ) -> Option<Candidate> {
        let rng = &mut self.rng;
        self.registry
            .tree()
            .pre_order()
            .filter(|district| Some(district.id()) != exclude)
            .find_map(|district| {
                let population = district.population(parity);
                let person = if tessera_only {
                    population.iter().find(|p| p.tessera())?
                } else if population.is_empty() {
                    return None;
                } else {
                    &population[rng.uniform(population.len())]
                };
                Some(Candidate {
                    district: district.id(),
                    person: person.id(),
                })
            })
    }

    fn take(&mut self, candidate: Candidate, parity: Parity) -> Option<Person> {
        self.registry
            .find_mut(candidate.district)
            .ok()?
            .remove_person(parity, candidate.person)
    }

    /// Fight a pair and apply the cascade.
    ///
    /// An incomplete pair is a bye: the lone contestant goes back to their
    /// population. When a contestant's home district has left the games in
    /// the meantime, the cascade still runs and the contestant is handed
    /// back in `GamesError::Homeless`.
    pub fn eliminate_dueler(&mut self, pair: DuelPair) -> Result<DuelOutcome, GamesError> {
        let (odd, even) = match pair.into_parts() {
            (None, None) => return Ok(DuelOutcome::Empty),
            (Some(person), None) | (None, Some(person)) => {
                let outcome = DuelOutcome::Bye {
                    person: person.id(),
                    district: person.district(),
                };
                self.return_home(person)?;
                return Ok(outcome);
            }
            (Some(odd), Some(even)) => (odd, even),
        };

        let odd_won = odd.duel(&even, &mut self.rng, self.die_sides).id() == odd.id();
        let (winner, loser) = if odd_won { (odd, even) } else { (even, odd) };

        let winner_id = winner.id();
        let winner_district = winner.district();
        let loser_district = loser.district();
        tracing::debug!(winner = %winner, loser = %loser, "duel decided");

        let homecoming = self.return_home(winner);

        let mut eliminated: SmallVec<[DistrictId; 2]> = SmallVec::new();
        for district in [loser_district, winner_district] {
            if self.eliminate_if_one_sided(district) {
                eliminated.push(district);
            }
        }
        homecoming?;

        Ok(DuelOutcome::Decided(DuelReport {
            winner: winner_id,
            winner_district,
            loser,
            eliminated,
        }))
    }

    fn return_home(&mut self, person: Person) -> Result<(), GamesError> {
        match self.registry.find_mut(person.district()) {
            Ok(district) => {
                district.add_person(person);
                Ok(())
            }
            Err(_) => Err(GamesError::Homeless(Box::new(person))),
        }
    }

    /// Eliminate `id` if it is active with an empty population.
    fn eliminate_if_one_sided(&mut self, id: DistrictId) -> bool {
        match self.registry.find(id) {
            Ok(district) if district.is_one_sided() => self.registry.eliminate(id).is_ok(),
            _ => false,
        }
    }
}
