//! Command implementations behind the CLI surface.

pub mod extras;
