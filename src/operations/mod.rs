// Operations module - page-level workflows on top of the history store

pub mod page_visit;

pub use page_visit::*;
