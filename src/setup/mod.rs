//! Reading Panem: districts and the people who live in them.
//!
//! Two input shapes carry the same content.
//!
//! Whitespace-separated text:
//!
//! ```text
//! 2          district count
//! 4 7        district ids, in staging order
//! 2          person count
//! Katniss Everdeen 5 16 4 9
//! Peeta Mellark 8 16 7 6
//! ```
//!
//! Each person line is: first name, last name, birth month, age,
//! district id, effectiveness.
//!
//! JSON: `{ "districts": [4, 7], "people": [{ "first_name": ..., ... }] }`.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::SetupError;
use crate::people::{District, DistrictId, Person, PersonId};

/// One person as read from input.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonRecord {
    pub first_name: String,
    pub last_name: String,
    pub birth_month: u32,
    pub age: u32,
    pub district: i32,
    pub effectiveness: i32,
}

/// Districts and people before anything enters the games.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Panem {
    pub districts: Vec<i32>,
    pub people: Vec<PersonRecord>,
}

impl Panem {
    /// Parse the whitespace-separated text format.
    pub fn parse(input: &str) -> Result<Self, SetupError> {
        let mut tokens = Tokens(input.split_whitespace());

        let district_count: usize = tokens.number("district count")?;
        let districts = (0..district_count)
            .map(|_| tokens.number("district id"))
            .collect::<Result<Vec<i32>, _>>()?;

        let person_count: usize = tokens.number("person count")?;
        let mut people = Vec::with_capacity(person_count);
        for _ in 0..person_count {
            people.push(PersonRecord {
                first_name: tokens.word("first name")?.to_string(),
                last_name: tokens.word("last name")?.to_string(),
                birth_month: tokens.number("birth month")?,
                age: tokens.number("age")?,
                district: tokens.number("district id")?,
                effectiveness: tokens.number("effectiveness")?,
            });
        }

        Ok(Self { districts, people })
    }

    /// Parse the JSON format.
    pub fn from_json(json: &str) -> Result<Self, SetupError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Build the staging list.
    ///
    /// People are numbered in input order and placed by birth-month parity.
    /// A person whose district id matches no district is skipped. With
    /// repeated district ids, people go to the first district listed.
    pub fn into_districts(self) -> Result<Vec<District>, SetupError> {
        let mut districts: Vec<District> = self
            .districts
            .iter()
            .map(|&id| District::new(DistrictId::new(id)))
            .collect();

        let mut index: FxHashMap<DistrictId, usize> = FxHashMap::default();
        for (i, district) in districts.iter().enumerate() {
            index.entry(district.id()).or_insert(i);
        }

        for (n, record) in self.people.into_iter().enumerate() {
            if !(1..=12).contains(&record.birth_month) {
                return Err(SetupError::InvalidBirthMonth(record.birth_month));
            }

            let district_id = DistrictId::new(record.district);
            let Some(&slot) = index.get(&district_id) else {
                tracing::debug!(
                    first_name = %record.first_name,
                    district = %district_id,
                    "skipping person from unknown district"
                );
                continue;
            };

            districts[slot].add_person(Person::new(
                PersonId::new(n as u32),
                record.first_name,
                record.last_name,
                record.birth_month,
                record.age,
                district_id,
                record.effectiveness,
            ));
        }

        Ok(districts)
    }
}

struct Tokens<'a>(std::str::SplitWhitespace<'a>);

impl<'a> Tokens<'a> {
    fn word(&mut self, expected: &'static str) -> Result<&'a str, SetupError> {
        self.0.next().ok_or(SetupError::UnexpectedEof { expected })
    }

    fn number<T: std::str::FromStr>(&mut self, field: &'static str) -> Result<T, SetupError> {
        let token = self.word(field)?;
        token.parse().map_err(|_| SetupError::InvalidNumber {
            field,
            token: token.to_string(),
        })
    }
}
