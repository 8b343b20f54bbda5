//! Core data types

pub mod agent;
pub mod design;
pub mod genome;
