//! Shared domain types for Skillforge.
//!
//! This crate contains the persisted contract for the skill aggregate --
//! backend dictionary shapes, the difficulty scale, id newtypes -- and the
//! error taxonomy shared across the platform.
//!
//! Zero infrastructure dependencies -- only serde, thiserror, schemars.

pub mod error;
pub mod skill;
