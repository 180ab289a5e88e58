//! I/O layer: reading subtitle files as UTF-8 text and writing converted text.
//! Maps filesystem failures onto the crate `Error` with the offending path attached.
pub mod reader;
pub use reader::read_subtitles;

pub mod writer;
pub use writer::write_text;
