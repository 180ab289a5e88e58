//! Core conversion building blocks: the SubRip caption parser and the
//! flattening step that turns captions into one line of text. These are
//! primitives consumed by the high-level `api` module.
pub mod flatten;
pub mod srt;
