//! Tile supply: racks, the shared bag, and letter multiset matching.

pub mod bag;
pub mod histogram;
pub mod rack;

pub use bag::Bag;
pub use histogram::LetterHistogram;
pub use rack::{Rack, RACK_CAPACITY};
