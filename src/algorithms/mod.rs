//! Small textbook algorithms built on the containers.
//!
//! This includes:
//! - Bracket matching ([`is_matched`])
//! - Insertion sort of a positional list ([`insertion_sort`], [`insertion_sort_by`])
//! - Parenthesized rendering of a general tree ([`parenthesize`])
//!
//! [`is_matched`]: fn.is_matched.html " "
//! [`insertion_sort`]: fn.insertion_sort.html " "
//! [`insertion_sort_by`]: fn.insertion_sort_by.html " "
//! [`parenthesize`]: fn.parenthesize.html " "

mod matching;
pub use matching::*;

#[cfg(feature = "positional_list")]
mod insertion_sort;
#[cfg(feature = "positional_list")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "positional_list")))]
pub use insertion_sort::*;

#[cfg(feature = "general_tree")]
mod parenthesize;
#[cfg(feature = "general_tree")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "general_tree")))]
pub use parenthesize::*;
