//! Non-owning N-dimensional matrix aliases over borrowed contiguous storage.
//!
//! This crate views an existing, already-allocated sequence of elements —
//! owned by someone else — as a multi-dimensional matrix, without copying.
//! It computes *where* an element lives under a configurable major order and
//! exposes read/write access through the borrowed slice; it performs no
//! arithmetic on the elements themselves.
//!
//! # Core Types
//!
//! - [`MatrixAlias`] / [`MatrixAliasMut`]: fixed-shape views — bounds, rank,
//!   and major order are set at construction and never change
//! - [`DynMatrixAlias`] / [`DynMatrixAliasMut`]: runtime-shape views —
//!   reshape, toggle, or permute the traversal order on the fly
//! - [`Matrix`]: an owning container that is simultaneously a fixed-shape
//!   alias over its own storage
//! - [`StaticLayout`] / [`DynLayout`]: the bounds/offsets descriptors behind
//!   the views, usable on their own for raw index conversion
//! - [`Major`] / [`AxisOrder`]: canonical and arbitrary axis traversal orders
//!
//! The index arithmetic shared by all of them lives in [`index`] as plain
//! `const fn`s.
//!
//! # Example
//!
//! ```
//! use matrix_alias::{DynMatrixAlias, Major, MatrixAlias, StaticLayout};
//!
//! let data: Vec<u32> = (0..6).collect();
//!
//! // Fixed shape: a 2×3 row-major view of the buffer.
//! let view = MatrixAlias::new(&data, StaticLayout::row_major([2, 3])).unwrap();
//! assert_eq!(view[[1, 2]], 5);
//! assert_eq!(view.linear_index(&[1, 2]), 5);
//!
//! // Runtime shape: the same buffer, reshaped and reordered.
//! let mut view = DynMatrixAlias::new(&data, &[2, 3], Major::Row).unwrap();
//! view.switch_major();
//! assert_eq!(view[[1, 2]], 5 /* 1 + 2*2 */);
//! view.set_bounds(&[6]).unwrap();
//! assert_eq!(view[[5]], 5);
//! ```
//!
//! # Checked and unchecked access
//!
//! Every view offers three tiers: `at` reports a detailed
//! [`AliasError::IndexOutOfBounds`], indexing (`view[[i, j]]`) panics like a
//! slice, and `get_unchecked` is `unsafe` and skips validation entirely for
//! hot paths where the caller already validated.
//!
//! # Ownership
//!
//! Aliases borrow; only [`Matrix`] owns. The borrow checker enforces the
//! lifetime and exclusivity rules the alias needs: storage outlives the
//! view, and a mutable view cannot coexist with readers of the same buffer.

pub mod index;

mod dyn_view;
mod layout;
mod matrix;
mod order;
mod view;

pub use dyn_view::{DynMatrixAlias, DynMatrixAliasMut};
pub use layout::{DynLayout, StaticLayout};
pub use matrix::Matrix;
pub use order::{AxisOrder, Major};
pub use view::{MatrixAlias, MatrixAliasMut};

/// Errors reported by checked alias operations.
#[derive(Debug, thiserror::Error)]
pub enum AliasError {
    /// A bounds vector must name at least one axis.
    #[error("bounds must name at least one axis")]
    EmptyBounds,

    /// A bounds vector contained a zero extent.
    #[error("zero extent for axis {axis}")]
    ZeroExtent { axis: usize },

    /// Coordinate arity or order rank disagrees with the bounds rank.
    #[error("rank mismatch: {0} vs {1}")]
    RankMismatch(usize, usize),

    /// Storage cannot back the requested shape.
    #[error("storage of {len} elements cannot back a view of {required}")]
    StorageTooSmall { len: usize, required: usize },

    /// An axis sequence is not a permutation of the axis indices.
    #[error("axes {axes:?} are not a permutation of 0..{rank}")]
    InvalidPermutation { axes: Vec<usize>, rank: usize },

    /// A coordinate exceeded its axis extent.
    #[error("index {index} out of bounds for axis {axis} with extent {extent}")]
    IndexOutOfBounds {
        axis: usize,
        index: usize,
        extent: usize,
    },
}

/// Result type for alias operations.
pub type Result<T> = std::result::Result<T, AliasError>;
