pub mod repository;
pub mod sqlite_repositories;
pub mod utils;

pub use repository::person_repository::PersonRepositoryImpl;
pub use sqlite_repositories::SqliteRepositories;

#[cfg(test)]
pub mod test_helper;
