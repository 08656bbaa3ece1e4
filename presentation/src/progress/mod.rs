//! Quiz progress display

pub mod reporter;
