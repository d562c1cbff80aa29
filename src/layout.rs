//! Bounds descriptors: the fixed-shape [`StaticLayout`] and the
//! runtime-shape [`DynLayout`].
//!
//! A layout pairs a bounds vector with a traversal order and caches the
//! per-axis offsets derived from them. Aliases delegate every coordinate
//! conversion and bounds check here; the layouts in turn delegate the
//! arithmetic to [`crate::index`].

use crate::index;
use crate::order::{AxisOrder, Major};
use crate::{AliasError, Result};

/// The canonical fastest-first axis sequence for `major`.
const fn canonical_order<const N: usize>(major: Major) -> [usize; N] {
    let mut order = [0usize; N];
    let mut k = 0;
    while k < N {
        order[k] = match major {
            Major::Row => N - 1 - k,
            Major::Column => k,
        };
        k += 1;
    }
    order
}

/// A bounds descriptor whose rank, extents, and major order are fixed at
/// construction.
///
/// All operations are `const fn`s, so a layout declared in a `const` item has
/// its offset table computed at compile time, and conversions or bounds
/// checks on constant coordinates evaluate (and can fail) at compile time.
/// No mutable state; `Copy`, so one layout value is freely shared by every
/// alias of the same shape.
///
/// # Example
/// ```
/// use matrix_alias::StaticLayout;
///
/// const LAYOUT: StaticLayout<3> = StaticLayout::row_major([3, 4, 5]);
/// const OFFSET: usize = LAYOUT.linear_index(&[1, 2, 3]);
/// assert_eq!(LAYOUT.offsets(), &[20, 5, 1]);
/// assert_eq!(OFFSET, 33);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticLayout<const N: usize> {
    bounds: [usize; N],
    offsets: [usize; N],
    major: Major,
}

impl<const N: usize> StaticLayout<N> {
    /// A layout over `bounds` traversed in `major` order.
    ///
    /// # Panics
    /// Panics if `N` is zero or any extent is zero. In a `const` context the
    /// panic becomes a compile error.
    pub const fn new(bounds: [usize; N], major: Major) -> Self {
        assert!(N >= 1, "a matrix needs at least one axis");
        let mut d = 0;
        while d < N {
            assert!(bounds[d] >= 1, "matrix bounds must be non-zero");
            d += 1;
        }

        let order = canonical_order::<N>(major);
        let mut offsets = [0usize; N];
        index::calculate_offsets(&bounds, &order, &mut offsets);
        Self {
            bounds,
            offsets,
            major,
        }
    }

    /// Row-major layout: last declared axis fastest.
    pub const fn row_major(bounds: [usize; N]) -> Self {
        Self::new(bounds, Major::Row)
    }

    /// Column-major layout: first declared axis fastest.
    pub const fn col_major(bounds: [usize; N]) -> Self {
        Self::new(bounds, Major::Column)
    }

    /// Number of axes.
    #[inline]
    pub const fn dimensions(&self) -> usize {
        N
    }

    /// Extent of each axis, in declaration order.
    #[inline]
    pub const fn bounds(&self) -> &[usize; N] {
        &self.bounds
    }

    /// Cached offset (stride) of each axis, in declaration order.
    #[inline]
    pub const fn offsets(&self) -> &[usize; N] {
        &self.offsets
    }

    /// The major order.
    #[inline]
    pub const fn major(&self) -> Major {
        self.major
    }

    /// Whether the layout is row-major.
    #[inline]
    pub const fn is_row_major(&self) -> bool {
        matches!(self.major, Major::Row)
    }

    /// Whether the layout is column-major.
    #[inline]
    pub const fn is_column_major(&self) -> bool {
        matches!(self.major, Major::Column)
    }

    /// Total number of addressable elements: `Π bounds[d]`.
    #[inline]
    pub const fn len(&self) -> usize {
        index::element_count(&self.bounds)
    }

    /// Always false: bounds with a zero extent are unrepresentable.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Whether any coordinate is outside its axis extent.
    #[inline]
    pub const fn out_of_bounds(&self, indexes: &[usize; N]) -> bool {
        index::out_of_bounds(indexes, &self.bounds)
    }

    /// Reporting bounds check.
    ///
    /// # Errors
    /// [`AliasError::IndexOutOfBounds`] for the first violating axis.
    pub fn check_bounds(&self, indexes: &[usize; N]) -> Result<()> {
        index::check_bounds(indexes, &self.bounds)
    }

    /// Convert a coordinate tuple to its linear index. Not bounds-checked.
    #[inline]
    pub const fn linear_index(&self, indexes: &[usize; N]) -> usize {
        index::linear_index(indexes, &self.offsets)
    }

    /// Convert a linear index back to a coordinate tuple.
    ///
    /// Inverse of [`Self::linear_index`] for `linear < self.len()`
    /// (debug-asserted).
    pub const fn multi_index(&self, linear: usize) -> [usize; N] {
        debug_assert!(linear < self.len());

        let order = canonical_order::<N>(self.major);
        let mut indexes = [0usize; N];
        index::multi_index(linear, &self.offsets, &order, &mut indexes);
        indexes
    }
}

/// Reject empty bounds vectors and zero extents.
pub(crate) fn check_extents(bounds: &[usize]) -> Result<()> {
    if bounds.is_empty() {
        return Err(AliasError::EmptyBounds);
    }
    for (axis, &extent) in bounds.iter().enumerate() {
        if extent == 0 {
            return Err(AliasError::ZeroExtent { axis });
        }
    }
    Ok(())
}

/// A bounds descriptor whose rank, extents, and traversal order are runtime
/// state.
///
/// Offsets are recomputed whenever the bounds or the order change; every
/// mutator validates its input before touching any field, so a failed call
/// leaves the descriptor exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DynLayout {
    bounds: Vec<usize>,
    order: AxisOrder,
    offsets: Vec<usize>,
}

impl DynLayout {
    /// A layout over `bounds` traversed in `major` order.
    ///
    /// # Errors
    /// [`AliasError::EmptyBounds`] or [`AliasError::ZeroExtent`] for a
    /// degenerate bounds vector.
    pub fn new(bounds: &[usize], major: Major) -> Result<Self> {
        Self::with_order(bounds, AxisOrder::major(bounds.len(), major))
    }

    /// A layout traversed in an arbitrary axis order.
    ///
    /// # Errors
    /// Shape errors as for [`Self::new`], plus [`AliasError::RankMismatch`]
    /// if `order` does not cover exactly the axes of `bounds`.
    pub fn with_order(bounds: &[usize], order: AxisOrder) -> Result<Self> {
        check_extents(bounds)?;
        if order.rank() != bounds.len() {
            return Err(AliasError::RankMismatch(order.rank(), bounds.len()));
        }

        let mut offsets = vec![0usize; bounds.len()];
        index::calculate_offsets(bounds, order.axes(), &mut offsets);
        Ok(Self {
            bounds: bounds.to_vec(),
            order,
            offsets,
        })
    }

    /// Number of axes.
    #[inline]
    pub fn dimensions(&self) -> usize {
        self.bounds.len()
    }

    /// Extent of each axis, in declaration order.
    #[inline]
    pub fn bounds(&self) -> &[usize] {
        &self.bounds
    }

    /// Cached offset (stride) of each axis, in declaration order.
    #[inline]
    pub fn offsets(&self) -> &[usize] {
        &self.offsets
    }

    /// The current traversal order.
    #[inline]
    pub fn order(&self) -> &AxisOrder {
        &self.order
    }

    /// The canonical tag of the current order, if it has one.
    pub fn major(&self) -> Option<Major> {
        self.order.as_major()
    }

    /// Whether the current order is row-major.
    pub fn is_row_major(&self) -> bool {
        self.order.is_row()
    }

    /// Whether the current order is column-major.
    pub fn is_column_major(&self) -> bool {
        self.order.is_column()
    }

    /// Total number of addressable elements: `Π bounds[d]`.
    #[inline]
    pub fn len(&self) -> usize {
        index::element_count(&self.bounds)
    }

    /// Always false: bounds with a zero extent are unrepresentable.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Replace the bounds vector; the rank may change.
    ///
    /// Offsets are recomputed. A same-rank call preserves the traversal
    /// order; when the rank changes, a column-major order falls back to
    /// column-major of the new rank and any other order falls back to
    /// row-major, since a permutation of the old rank cannot order the new
    /// axes.
    ///
    /// # Errors
    /// [`AliasError::EmptyBounds`] or [`AliasError::ZeroExtent`]; the layout
    /// is unchanged on error.
    pub fn set_bounds(&mut self, bounds: &[usize]) -> Result<()> {
        check_extents(bounds)?;

        if bounds.len() != self.bounds.len() {
            self.order = if self.order.is_column() {
                AxisOrder::column(bounds.len())
            } else {
                AxisOrder::row(bounds.len())
            };
        }
        self.bounds.clear();
        self.bounds.extend_from_slice(bounds);
        self.recalculate_offsets();
        Ok(())
    }

    /// Reverse the traversal order (row-major ↔ column-major toggle).
    pub fn switch_major(&mut self) {
        self.order.reverse();
        self.recalculate_offsets();
    }

    /// Install a canonical traversal order.
    pub fn set_major(&mut self, major: Major) {
        self.order = AxisOrder::major(self.bounds.len(), major);
        self.recalculate_offsets();
    }

    /// Install an arbitrary traversal order.
    ///
    /// # Errors
    /// [`AliasError::RankMismatch`] if `order` does not cover exactly the
    /// axes of the current bounds; the layout is unchanged on error.
    pub fn set_order(&mut self, order: AxisOrder) -> Result<()> {
        if order.rank() != self.bounds.len() {
            return Err(AliasError::RankMismatch(order.rank(), self.bounds.len()));
        }
        self.order = order;
        self.recalculate_offsets();
        Ok(())
    }

    /// Whether any coordinate is outside its axis extent.
    ///
    /// `indexes` must have one entry per axis (debug-asserted).
    #[inline]
    pub fn out_of_bounds(&self, indexes: &[usize]) -> bool {
        index::out_of_bounds(indexes, &self.bounds)
    }

    /// Reporting bounds check.
    ///
    /// # Errors
    /// [`AliasError::RankMismatch`] if the coordinate arity disagrees with
    /// the rank, else [`AliasError::IndexOutOfBounds`] for the first
    /// violating axis.
    pub fn check_bounds(&self, indexes: &[usize]) -> Result<()> {
        if indexes.len() != self.bounds.len() {
            return Err(AliasError::RankMismatch(indexes.len(), self.bounds.len()));
        }
        index::check_bounds(indexes, &self.bounds)
    }

    /// Convert a coordinate tuple to its linear index. Not bounds-checked;
    /// arity is debug-asserted.
    #[inline]
    pub fn linear_index(&self, indexes: &[usize]) -> usize {
        index::linear_index(indexes, &self.offsets)
    }

    /// Convert a linear index back to a coordinate tuple.
    pub fn multi_index(&self, linear: usize) -> Vec<usize> {
        debug_assert!(linear < self.len());

        let mut indexes = vec![0usize; self.bounds.len()];
        index::multi_index(linear, &self.offsets, self.order.axes(), &mut indexes);
        indexes
    }

    fn recalculate_offsets(&mut self) {
        self.offsets.clear();
        self.offsets.resize(self.bounds.len(), 0);
        index::calculate_offsets(&self.bounds, self.order.axes(), &mut self.offsets);
    }
}
