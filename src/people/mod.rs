//! People and the districts that hold them.

mod person;
mod district;

pub use person::{Parity, Person, PersonId, TESSERA_AGES};
pub use district::{District, DistrictId};
