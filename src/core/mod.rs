//! Core library components.
//!
//! This module contains the create-device workflow and the pieces it is
//! built from: name validation, layout derivation, conflict checks, secret
//! generation, rendering, and the external-process seam.

pub mod config;
pub mod conflicts;
pub mod constants;
pub mod domain;
pub mod exec;
pub mod render;
pub mod rng;
pub mod secrets;
pub mod validation;
pub mod workflow;
