//! Random people for filling the benchmark collection.

use chrono::NaiveDate;
use heapless::String as HeaplessString;
use paged_list_db::models::person::PersonModel;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

const AMERICAN_NAMES: [&str; 20] = [
    "James", "Mary", "John", "Patricia", "Robert", "Jennifer", "Michael", "Linda", "William",
    "Elizabeth", "David", "Barbara", "Richard", "Susan", "Joseph", "Jessica", "Thomas", "Sarah",
    "Charles", "Karen",
];

const AMERICAN_LAST_NAMES: [&str; 20] = [
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson", "Thomas", "Taylor",
    "Moore", "Jackson", "Martin",
];

pub const WEIGHT_RANGE: std::ops::RangeInclusive<i32> = 99..=250;
pub const HEIGHT_RANGE: std::ops::RangeInclusive<i32> = 100..=999;

/// Generates unsaved [`PersonModel`] rows
///
/// Ids are left at zero for the database to assign. A fixed seed makes the
/// generated collection reproducible between runs.
pub struct Hydrator {
    rng: StdRng,
}

impl Hydrator {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }

    pub fn hydrate(&mut self) -> PersonModel {
        let first_name = pick(&mut self.rng, &AMERICAN_NAMES);
        let last_name = pick(&mut self.rng, &AMERICAN_LAST_NAMES);

        let phone = self.rng.gen_bool(0.8).then(|| {
            let phone = format!(
                "{:03}-{:03}-{:04}",
                self.rng.gen_range(200..1000),
                self.rng.gen_range(200..1000),
                self.rng.gen_range(0..10_000)
            );
            // Always 12 ASCII characters.
            HeaplessString::try_from(phone.as_str()).unwrap_or_default()
        });

        let date_of_birth = if self.rng.gen_bool(0.9) {
            NaiveDate::from_ymd_opt(
                self.rng.gen_range(1940..=2005),
                self.rng.gen_range(1..=12),
                self.rng.gen_range(1..=28),
            )
        } else {
            None
        };

        PersonModel {
            id: 0,
            phone,
            first_name,
            last_name,
            weight: self.rng.gen_range(WEIGHT_RANGE),
            height: self.rng.gen_range(HEIGHT_RANGE),
            date_of_birth,
        }
    }

    pub fn hydrate_many(&mut self, count: usize) -> Vec<PersonModel> {
        (0..count).map(|_| self.hydrate()).collect()
    }
}

fn pick<const N: usize>(rng: &mut StdRng, names: &[&str]) -> HeaplessString<N> {
    let name = names.choose(rng).copied().unwrap_or_default();
    HeaplessString::try_from(name).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_values_stay_in_range() {
        let mut hydrator = Hydrator::new(Some(7));
        for person in hydrator.hydrate_many(500) {
            assert_eq!(person.id, 0);
            assert!(WEIGHT_RANGE.contains(&person.weight));
            assert!(HEIGHT_RANGE.contains(&person.height));
            assert!(AMERICAN_NAMES.contains(&person.first_name.as_str()));
            assert!(AMERICAN_LAST_NAMES.contains(&person.last_name.as_str()));
            if let Some(phone) = person.phone {
                assert_eq!(phone.len(), 12);
            }
        }
    }

    #[test]
    fn test_same_seed_same_people() {
        let first = Hydrator::new(Some(42)).hydrate_many(20);
        let second = Hydrator::new(Some(42)).hydrate_many(20);
        assert_eq!(first, second);
    }
}
