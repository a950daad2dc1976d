//! Pagination strategy benchmark.
//!
//! Fills an in-memory SQLite database with generated people, then loads the
//! same page with every selected [`PagingStrategy`] and reports timings
//! together with the page count and total count each strategy saw.
//!
//! [`PagingStrategy`]: paged_list_db::repository::paging_strategy::PagingStrategy

pub mod config;
pub mod hydrator;
pub mod logging;
pub mod report;
pub mod runner;
