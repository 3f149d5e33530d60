//! Traits for composing the configuration of the different build tools.

pub mod bindgen;
