//! Domain Services - Business logic that doesn't belong to a single entity
//!
//! Services drive entities and contain the "verbs" of the domain.

pub mod command_loop;
