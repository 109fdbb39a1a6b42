pub mod roster;

pub use roster::{Cursor, Iter, Roster};
