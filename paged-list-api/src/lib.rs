pub mod error;
pub mod pagination;
pub mod paged_list;

pub use error::*;
pub use pagination::*;
pub use paged_list::*;
