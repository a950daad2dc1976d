pub mod identifiable;
pub mod person;

// Re-exports
pub use identifiable::*;
pub use person::*;
