//! Chirp Storage
//!
//! Flat-file persistence for Chirp user records.
//!
//! The single backend here, [`JsonFileStore`], keeps the whole collection in
//! one JSON array on disk. Every mutation rewrites the file through a
//! temp-file-and-rename sequence so a crash mid-write leaves either the old
//! or the new collection, never a truncated one, and all mutations are
//! serialized through an in-process lock so concurrent appends cannot lose
//! records.

#![forbid(unsafe_code)]

mod json_file;

pub use json_file::JsonFileStore;
