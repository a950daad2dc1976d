use chrono::NaiveDate;
use heapless::String as HeaplessString;
use paged_list_db::models::person::PersonModel;

const FIRST_NAMES: [&str; 5] = ["James", "Mary", "Robert", "Linda", "David"];
const LAST_NAMES: [&str; 5] = ["Smith", "Johnson", "Brown", "Garcia", "Miller"];

pub fn create_test_person(first_name: &str, last_name: &str) -> PersonModel {
    PersonModel {
        id: 0,
        phone: Some(HeaplessString::try_from("555-0100").unwrap()),
        first_name: HeaplessString::try_from(first_name).unwrap(),
        last_name: HeaplessString::try_from(last_name).unwrap(),
        weight: 150,
        height: 500,
        date_of_birth: NaiveDate::from_ymd_opt(1980, 1, 1),
    }
}

/// Unsaved people with predictable names, `count` of them
pub fn create_test_people(count: usize) -> Vec<PersonModel> {
    (0..count)
        .map(|i| {
            let mut person = create_test_person(
                FIRST_NAMES[i % FIRST_NAMES.len()],
                LAST_NAMES[(i / FIRST_NAMES.len()) % LAST_NAMES.len()],
            );
            person.weight = 99 + (i % 152) as i32;
            person.height = 100 + (i % 900) as i32;
            if i % 3 == 0 {
                person.phone = None;
                person.date_of_birth = None;
            }
            person
        })
        .collect()
}
