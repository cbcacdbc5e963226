//! Turtle ontologies used by the unit and integration tests.
//!
//! Each constant holds a complete Turtle 1.1 document. They are exported so
//! the schema compiler's integration tests can load the same graphs.

mod inheritance;
mod university;

pub use inheritance::INHERITANCE;
pub use university::UNIVERSITY;
