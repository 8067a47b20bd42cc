//! Small browser-facing helpers.

pub mod download;
