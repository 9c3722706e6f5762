pub mod merge;

pub use merge::{merge_sort, merge_sort_by};
