//! Command structs passed into the domain services.

pub mod catalog;

pub use catalog::SaveProductCommand;
