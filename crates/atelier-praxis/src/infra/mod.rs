//! PRAXIS infrastructure
//!
//! Storage for archived design outcomes.

pub mod archive;
