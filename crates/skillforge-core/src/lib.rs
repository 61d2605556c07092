//! Domain logic for Skillforge.
//!
//! This crate holds the in-memory entities behind the authoring tool --
//! the skill aggregate and its children -- together with their hydration
//! factories, invariant-preserving mutation operations, and
//! content-quality validation. It depends only on `skillforge-types` --
//! never on a database, transport, or UI crate.

pub mod skill;
