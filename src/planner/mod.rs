//! Split planning: turns a range file into the ordered list of clips to cut

pub mod range_file;

pub use range_file::{range_file_path, RangeFile, RANGE_FILE_EXTENSION};
