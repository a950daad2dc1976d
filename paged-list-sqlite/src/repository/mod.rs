pub mod db_init;
pub mod person_repository;
#[cfg(test)]
pub mod test_utils;
