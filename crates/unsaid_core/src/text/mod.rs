//! Plain-text helpers shared by the write and read paths.

pub mod word_count;
