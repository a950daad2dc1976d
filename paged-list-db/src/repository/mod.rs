pub mod count_all;
pub mod create_batch;
pub mod fetch_window;
pub mod load_page;
pub mod paging_strategy;

// Re-exports
pub use count_all::*;
pub use create_batch::*;
pub use fetch_window::*;
pub use load_page::*;
pub use paging_strategy::*;
