//! A persistent rope over fixed-width `char` code units, built on the node
//! algebra in [`tree`](crate::tree).

mod cursor;
pub(crate) mod iterators;
mod rope;
mod search;
#[cfg(feature = "serde")]
mod serde;
mod utils;

pub use cursor::Cursor;
pub use rope::Rope;
