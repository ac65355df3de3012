//! Data models exchanged with the catalog API.

pub mod book;

pub use book::{availability_label, BookPage, BookRecord};
