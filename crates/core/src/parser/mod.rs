//! Stream scanning shared by the HPGL and HP RTL interpreters.

pub mod cursor;

pub use cursor::{StreamCursor, parse_int};
