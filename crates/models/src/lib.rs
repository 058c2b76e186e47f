//! Storage layer: the `record` entity and its single-statement primitives.

pub mod errors;
pub mod db;
pub mod record;

#[cfg(test)]
mod tests;
