//! Position-based linked containers: a positional list, a binary tree and a general tree, plus the textbook structures built on top of them.
//!
//! # Overview
//! Every container in the crate hands out [`Position`]s: small copyable tokens naming one node of one specific container instance. A position stays valid for as long as its node lives, no matter how the container is edited around it, and every operation receiving a position checks it first, failing with [`Error::InvalidPosition`] instead of touching the wrong node if the position came from another container or if its node has already been deleted.
//!
//! The containers store their nodes in a generational arena (see the [`storage`] module) and link them with keys instead of pointers, an approach known as ["arena-allocated trees"][arena tree blog post]. Deleted nodes leave a vacant slot behind which is reused by later insertions; the slot's generation counter makes sure that stale positions never resolve to the new occupant.
//!
//! The core containers are:
//! - [`PositionalList`] - a doubly linked list with boundary sentinels
//! - [`LinkedBinaryTree`] - a binary tree with left and right child slots
//! - [`LinkedTree`] - a general tree with any number of ordered children
//!
//! The trees share the [`Tree`] and [`BinaryTree`] traits, and every tree gets its traversals from the extension traits in the [`traversal`] module. On top of the core live a few consumers: [`priority_queue`]s and a [`favorites`] list over the positional list, an unbalanced binary search [`tree_map`] and [`expression`] trees over the binary tree, and some small [`algorithms`].
//!
//! # Logging
//! Structural surgery (deleting nodes, promoting children, moving subtrees between trees) emits [`tracing`] events at the `trace` and `debug` levels. The crate never installs a subscriber.
//!
//! # Feature flags
//! - `positional_list` (**enabled by default**) - the positional list, priority queues, the favorites list and insertion sort.
//! - `binary_tree` (**enabled by default**) - the linked binary tree, the tree map and expression trees.
//! - `general_tree` (**enabled by default**) - the linked general tree and the `parenthesize` algorithm.
//! - `doc_cfg` - annotates feature-gated items in the documentation. **Requires a nightly compiler** and thus is disabled by default.
//!
//! # Public dependencies
//! - `arrayvec` (**required**) - `^0.5`
//! - `thiserror` (**required**) - `^2`, through the derived error types
//! - `tracing` (**required**) - `^0.1`
//!
//! [`Position`]: struct.Position.html " "
//! [`Error::InvalidPosition`]: enum.Error.html#variant.InvalidPosition " "
//! [`storage`]: storage/index.html " "
//! [`PositionalList`]: positional_list/struct.PositionalList.html " "
//! [`LinkedBinaryTree`]: binary_tree/struct.LinkedBinaryTree.html " "
//! [`LinkedTree`]: general_tree/struct.LinkedTree.html " "
//! [`Tree`]: tree/trait.Tree.html " "
//! [`BinaryTree`]: tree/trait.BinaryTree.html " "
//! [`traversal`]: traversal/index.html " "
//! [`priority_queue`]: priority_queue/index.html " "
//! [`favorites`]: favorites/index.html " "
//! [`tree_map`]: tree_map/index.html " "
//! [`expression`]: expression/index.html " "
//! [`algorithms`]: algorithms/index.html " "
//! [`tracing`]: https://docs.rs/tracing " "
//! [arena tree blog post]: https://dev.to/deciduously/no-more-tears-no-more-knots-arena-allocated-trees-in-rust-44k6 " "

#![warn(
    rust_2018_idioms,
    clippy::cargo,
    clippy::nursery,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unused_qualifications,
    variant_size_differences,
    clippy::cast_lossless,
    clippy::checked_conversions,
    clippy::copy_iterator,
    clippy::expl_impl_clone_on_copy,
    clippy::explicit_iter_loop,
    clippy::explicit_into_iter_loop,
    clippy::filter_map_next,
    clippy::map_flatten,
    clippy::map_unwrap_or,
    clippy::fn_params_excessive_bools,
    clippy::implicit_hasher,
    clippy::implicit_saturating_sub,
    clippy::inefficient_to_string,
    clippy::invalid_upcast_comparisons,
    clippy::items_after_statements,
    clippy::large_stack_arrays,
    clippy::let_unit_value,
    clippy::macro_use_imports,
    clippy::match_same_arms,
    clippy::match_wild_err_arm,
    clippy::match_wildcard_for_single_variants,
    // sick of this stupid lint, disabling
    // clippy::module_name_repetitions,
    clippy::mut_mut,
    clippy::needless_continue,
    clippy::needless_pass_by_value,
    clippy::option_option,
    clippy::range_plus_one,
    clippy::range_minus_one,
    clippy::redundant_closure_for_method_calls,
    clippy::same_functions_in_if_condition,
    clippy::similar_names,
    clippy::single_match_else,
    clippy::string_add_assign,
    clippy::too_many_lines,
    clippy::type_repetition_in_bounds,
    clippy::trivially_copy_pass_by_ref,
    clippy::unicode_not_nfc,
    clippy::unnested_or_patterns,
    clippy::unused_self,
    clippy::used_underscore_binding,
    clippy::clone_on_ref_ptr,
    clippy::dbg_macro,
    clippy::decimal_literal_representation,
    clippy::get_unwrap,
    clippy::rest_pat_in_fully_bound_structs,
    clippy::unneeded_field_pattern,
    clippy::unwrap_used,
    clippy::use_debug,
)]
#![deny(
    anonymous_parameters,
    bare_trait_objects,
    clippy::exit,
)]
#![allow(clippy::use_self)]
#![cfg_attr(feature = "doc_cfg", feature(doc_cfg))]

pub mod storage;
pub mod position;
pub use position::{ContainerId, Position};

mod util;

pub mod tree;
pub mod traversal;
pub use tree::{Tree, BinaryTree};
pub use traversal::{Traversable, InorderTraversable};

#[cfg(feature = "positional_list")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "positional_list")))]
pub mod positional_list;
#[cfg(feature = "positional_list")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "positional_list")))]
pub use positional_list::PositionalList;

#[cfg(feature = "binary_tree")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "binary_tree")))]
pub mod binary_tree;
#[cfg(feature = "binary_tree")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "binary_tree")))]
pub use binary_tree::LinkedBinaryTree;

#[cfg(feature = "general_tree")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "general_tree")))]
pub mod general_tree;
#[cfg(feature = "general_tree")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "general_tree")))]
pub use general_tree::LinkedTree;

#[cfg(feature = "positional_list")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "positional_list")))]
pub mod priority_queue;
#[cfg(feature = "positional_list")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "positional_list")))]
pub mod favorites;

#[cfg(feature = "binary_tree")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "binary_tree")))]
pub mod tree_map;
#[cfg(feature = "binary_tree")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "binary_tree")))]
pub mod expression;

pub mod algorithms;

/// A prelude for using the crate, containing the containers and the traits needed to navigate them, in a renamed form for safe glob-importing.
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::{
        tree::{Tree as PositionalTree, BinaryTree as PositionalBinaryTree},
        traversal::{Traversable as TraversableTree, InorderTraversable as InorderTraversableTree},
        Position,
    };
    #[cfg(feature = "positional_list")]
    #[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "positional_list")))]
    #[doc(no_inline)]
    pub use crate::positional_list::PositionalList;
    #[cfg(feature = "binary_tree")]
    #[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "binary_tree")))]
    #[doc(no_inline)]
    pub use crate::binary_tree::LinkedBinaryTree;
    #[cfg(feature = "general_tree")]
    #[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "general_tree")))]
    #[doc(no_inline)]
    pub use crate::general_tree::LinkedTree;
}

/// The error type shared by every container in the crate.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The position could not be used with the container it was passed to.
    #[error("invalid position: {0}")]
    InvalidPosition(#[from] InvalidPosition),
    /// The operation needs at least one element, but the container is empty.
    #[error("the container is empty")]
    Empty,
    /// The shape of the container does not allow the operation.
    #[error(transparent)]
    Structural(#[from] StructuralError),
    /// A count was requested which lies outside of `1..=len`.
    #[error("requested {requested} elements out of {len}")]
    OutOfRange {
        /// The requested count.
        requested: usize,
        /// The number of elements which were available.
        len: usize,
    },
    /// The key is not present in the map.
    #[error("key not found")]
    KeyNotFound,
}

/// The reason why a position was rejected.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum InvalidPosition {
    /// The position was made by another container instance.
    #[error("the position belongs to another container")]
    ForeignContainer,
    /// The node the position refers to has been deleted.
    #[error("the node at the position has been removed")]
    Removed,
}

/// The structural requirement which an operation found violated.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum StructuralError {
    /// A root was added to a tree which already has one.
    #[error("the tree already has a root")]
    RootExists,
    /// A left child was added to a node which already has one.
    #[error("the node already has a left child")]
    LeftChildExists,
    /// A right child was added to a node which already has one.
    #[error("the node already has a right child")]
    RightChildExists,
    /// A binary tree node with two children was deleted.
    #[error("cannot delete a node with two children")]
    TwoChildren,
    /// Subtrees were attached to a node which is not a leaf.
    #[error("the node is not a leaf")]
    NotALeaf,
}

/// The result type used throughout the crate.
pub type Result<T, E = Error> = core::result::Result<T, E>;
