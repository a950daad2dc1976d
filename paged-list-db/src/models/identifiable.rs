/// Trait for entities that can be uniquely identified by a database-assigned key
pub trait Identifiable {
    /// Returns the unique identifier of the entity
    ///
    /// Zero for entities that have not been saved yet.
    fn get_id(&self) -> i64;
}
