//! PRAXIS domain logic
//!
//! Reinforcement tracking, precedent retrieval, trait attribution, and the
//! context rendered from them.

pub mod context;
pub mod effectiveness;
pub mod pattern;
pub mod q_table;
pub mod retrieval;
