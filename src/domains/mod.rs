//! Domains module containing business logic organized by bounded contexts.

pub mod knowledge;
pub mod manifest;
pub mod prompts;
pub mod tools;
