use chrono::NaiveDate;
use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};

use crate::models::identifiable::Identifiable;

/// Database model for Person
/// Represents one generated row of the benchmark collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonModel {
    /// Assigned by the database on insert, also the paging order
    pub id: i64,

    pub phone: Option<HeaplessString<20>>,
    pub first_name: HeaplessString<50>,
    pub last_name: HeaplessString<50>,

    /// 99 to 250 for generated rows
    pub weight: i32,

    /// 100 to 999 for generated rows
    pub height: i32,

    pub date_of_birth: Option<NaiveDate>,
}

impl Identifiable for PersonModel {
    fn get_id(&self) -> i64 {
        self.id
    }
}
