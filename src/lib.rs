//! Workspace facade: re-exports [`iso3166_core`] so the demos can use
//! `iso3166_rs::prelude::*`.

pub use iso3166_core::*;
