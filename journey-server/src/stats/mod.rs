//! Result post-processing: sorting and price range queries.

mod price_index;
mod sort;

pub use price_index::{PriceIndex, Priced};
pub use sort::{Comparator, chain, quicksort};
