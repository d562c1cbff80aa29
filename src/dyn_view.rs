//! Non-owning matrix aliases whose shape is runtime state.
//!
//! [`DynMatrixAlias`] and [`DynMatrixAliasMut`] expose the same access
//! surface as the fixed-shape views, but bounds, rank, and traversal order
//! can all be replaced after construction: reshape a flat buffer into a
//! different rank, toggle or permute the major order, or atomically swap
//! storage and shape together with [`DynMatrixAliasMut::update`].
//!
//! Every mutator validates its input in full before committing, so a failed
//! call leaves the alias exactly as it was and no access can ever observe a
//! half-updated shape.

use crate::layout::{self, DynLayout};
use crate::order::{AxisOrder, Major};
use crate::view::check_backing;
use crate::{index, Result};
use std::ops::{Index, IndexMut};

/// An immutable runtime-shape view over a borrowed slice.
///
/// # Example
/// ```
/// use matrix_alias::{DynMatrixAlias, Major};
///
/// let data = vec![1, 2, 3, 4, 5, 6];
/// let mut alias = DynMatrixAlias::new(&data, &[2, 3], Major::Row).unwrap();
/// assert_eq!(alias[[1, 2]], 6);
///
/// // Reshape the same storage to a flat vector.
/// alias.set_bounds(&[6]).unwrap();
/// assert_eq!(alias[[5]], 6);
/// ```
#[derive(Debug)]
pub struct DynMatrixAlias<'a, T> {
    data: &'a [T],
    layout: DynLayout,
    offset: usize,
}

/// A mutable runtime-shape view over a borrowed slice.
#[derive(Debug)]
pub struct DynMatrixAliasMut<'a, T> {
    data: &'a mut [T],
    layout: DynLayout,
    offset: usize,
}

impl<'a, T> DynMatrixAlias<'a, T> {
    /// Alias `data` as a matrix shaped by `bounds` in `major` order.
    ///
    /// # Errors
    /// Shape errors for degenerate bounds, or
    /// [`crate::AliasError::StorageTooSmall`] if `data` cannot back them.
    pub fn new(data: &'a [T], bounds: &[usize], major: Major) -> Result<Self> {
        Self::with_layout(data, DynLayout::new(bounds, major)?, 0)
    }

    /// Alias `data` with an arbitrary traversal order.
    ///
    /// # Errors
    /// As [`Self::new`], plus a permutation error if `order` does not match
    /// the bounds rank.
    pub fn with_order(data: &'a [T], bounds: &[usize], order: AxisOrder) -> Result<Self> {
        Self::with_layout(data, DynLayout::with_order(bounds, order)?, 0)
    }

    /// Alias `data` starting at `offset` (the cursor).
    ///
    /// # Errors
    /// As [`Self::new`].
    pub fn with_offset(
        data: &'a [T],
        bounds: &[usize],
        major: Major,
        offset: usize,
    ) -> Result<Self> {
        Self::with_layout(data, DynLayout::new(bounds, major)?, offset)
    }

    fn with_layout(data: &'a [T], layout: DynLayout, offset: usize) -> Result<Self> {
        check_backing(data.len(), offset, layout.len())?;
        Ok(Self {
            data,
            layout,
            offset,
        })
    }

    /// Number of axes.
    #[inline]
    pub fn dimensions(&self) -> usize {
        self.layout.dimensions()
    }

    /// Extent of each axis, in declaration order.
    #[inline]
    pub fn bounds(&self) -> &[usize] {
        self.layout.bounds()
    }

    /// Cached offset (stride) of each axis, in declaration order.
    #[inline]
    pub fn offsets(&self) -> &[usize] {
        self.layout.offsets()
    }

    /// The current traversal order.
    #[inline]
    pub fn order(&self) -> &AxisOrder {
        self.layout.order()
    }

    /// The canonical tag of the current order, if it has one.
    pub fn major(&self) -> Option<Major> {
        self.layout.major()
    }

    /// Whether the current order is row-major.
    pub fn is_row_major(&self) -> bool {
        self.layout.is_row_major()
    }

    /// Whether the current order is column-major.
    pub fn is_column_major(&self) -> bool {
        self.layout.is_column_major()
    }

    /// Total number of viewed elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.layout.len()
    }

    /// Always false: bounds with a zero extent are unrepresentable.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The shape descriptor.
    #[inline]
    pub fn layout(&self) -> &DynLayout {
        &self.layout
    }

    /// The whole wrapped slice, including any cursor prefix.
    #[inline]
    pub fn data(&self) -> &'a [T] {
        self.data
    }

    /// The cursor: storage position of the coordinate origin.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Replace the bounds vector; the rank may change.
    ///
    /// Reshaping never moves data: after `set_bounds(&[6])` on a row-major
    /// `[2, 3]` view, coordinate `[5]` addresses the slot that `[1, 2]` did.
    /// When the rank changes, the traversal order falls back to the
    /// canonical order of the same kind (column-major stays column-major,
    /// anything else becomes row-major).
    ///
    /// # Errors
    /// Shape errors for degenerate bounds or storage shortfall; the alias is
    /// unchanged on error.
    pub fn set_bounds(&mut self, bounds: &[usize]) -> Result<()> {
        layout::check_extents(bounds)?;
        check_backing(self.data.len(), self.offset, index::element_count(bounds))?;
        self.layout.set_bounds(bounds)
    }

    /// Reverse the traversal order (row-major ↔ column-major toggle).
    /// Applying it twice restores the original order and offsets.
    pub fn switch_major(&mut self) {
        self.layout.switch_major();
    }

    /// Install a canonical traversal order.
    pub fn set_major(&mut self, major: Major) {
        self.layout.set_major(major);
    }

    /// Install an arbitrary traversal order.
    ///
    /// # Errors
    /// [`crate::AliasError::RankMismatch`] if `order` does not cover exactly
    /// the current axes; the alias is unchanged on error.
    pub fn set_order(&mut self, order: AxisOrder) -> Result<()> {
        self.layout.set_order(order)
    }

    /// Rebind the view to different storage under the current shape.
    ///
    /// # Errors
    /// [`crate::AliasError::StorageTooSmall`]; the view is unchanged on
    /// error.
    pub fn rebind(&mut self, data: &'a [T]) -> Result<()> {
        check_backing(data.len(), self.offset, self.layout.len())?;
        self.data = data;
        Ok(())
    }

    /// Atomically replace storage and bounds.
    ///
    /// Validates everything first, then commits both, so there is no window
    /// in which the cached offsets disagree with the bounds or the storage.
    /// Order fallback on a rank change is as for [`Self::set_bounds`].
    ///
    /// # Errors
    /// Shape errors; the alias is unchanged on error.
    pub fn update(&mut self, data: &'a [T], bounds: &[usize]) -> Result<()> {
        let mut layout = self.layout.clone();
        layout.set_bounds(bounds)?;
        check_backing(data.len(), self.offset, layout.len())?;
        self.layout = layout;
        self.data = data;
        Ok(())
    }

    /// Atomically replace storage, bounds, and major order.
    ///
    /// # Errors
    /// Shape errors; the alias is unchanged on error.
    pub fn update_with_major(
        &mut self,
        data: &'a [T],
        bounds: &[usize],
        major: Major,
    ) -> Result<()> {
        let layout = DynLayout::new(bounds, major)?;
        check_backing(data.len(), self.offset, layout.len())?;
        self.layout = layout;
        self.data = data;
        Ok(())
    }

    /// Convert a coordinate tuple to its view-relative linear index, without
    /// touching the storage. Not bounds-checked; arity is debug-asserted.
    #[inline]
    pub fn linear_index(&self, indexes: &[usize]) -> usize {
        self.layout.linear_index(indexes)
    }

    /// Convert a linear index back to a coordinate tuple.
    pub fn multi_index(&self, linear: usize) -> Vec<usize> {
        self.layout.multi_index(linear)
    }

    /// Checked element access.
    ///
    /// # Errors
    /// [`crate::AliasError::RankMismatch`] for a coordinate arity mismatch,
    /// else [`crate::AliasError::IndexOutOfBounds`] for the first violating
    /// axis.
    pub fn at(&self, indexes: &[usize]) -> Result<&'a T> {
        self.layout.check_bounds(indexes)?;
        Ok(&self.data[self.offset + self.layout.linear_index(indexes)])
    }

    /// Checked element access, `Option` form.
    #[inline]
    pub fn get(&self, indexes: &[usize]) -> Option<&'a T> {
        if indexes.len() != self.layout.dimensions() || self.layout.out_of_bounds(indexes) {
            return None;
        }
        Some(&self.data[self.offset + self.layout.linear_index(indexes)])
    }

    /// Unchecked element access.
    ///
    /// # Safety
    /// The coordinate arity must match the rank and every coordinate must be
    /// within its axis extent.
    #[inline]
    pub unsafe fn get_unchecked(&self, indexes: &[usize]) -> &'a T {
        unsafe {
            self.data
                .get_unchecked(self.offset + self.layout.linear_index(indexes))
        }
    }
}

impl<T> Index<&[usize]> for DynMatrixAlias<'_, T> {
    type Output = T;

    #[inline]
    fn index(&self, indexes: &[usize]) -> &T {
        assert!(
            !self.layout.out_of_bounds(indexes),
            "index out of bounds"
        );
        &self.data[self.offset + self.layout.linear_index(indexes)]
    }
}

impl<T, const K: usize> Index<[usize; K]> for DynMatrixAlias<'_, T> {
    type Output = T;

    #[inline]
    fn index(&self, indexes: [usize; K]) -> &T {
        &self[&indexes[..]]
    }
}

impl<'a, T> DynMatrixAliasMut<'a, T> {
    /// Alias `data` mutably as a matrix shaped by `bounds` in `major` order.
    ///
    /// # Errors
    /// Shape errors for degenerate bounds, or
    /// [`crate::AliasError::StorageTooSmall`] if `data` cannot back them.
    pub fn new(data: &'a mut [T], bounds: &[usize], major: Major) -> Result<Self> {
        Self::with_layout(data, DynLayout::new(bounds, major)?, 0)
    }

    /// Alias `data` mutably with an arbitrary traversal order.
    ///
    /// # Errors
    /// As [`Self::new`], plus a permutation error if `order` does not match
    /// the bounds rank.
    pub fn with_order(data: &'a mut [T], bounds: &[usize], order: AxisOrder) -> Result<Self> {
        Self::with_layout(data, DynLayout::with_order(bounds, order)?, 0)
    }

    /// Alias `data` mutably starting at `offset` (the cursor).
    ///
    /// # Errors
    /// As [`Self::new`].
    pub fn with_offset(
        data: &'a mut [T],
        bounds: &[usize],
        major: Major,
        offset: usize,
    ) -> Result<Self> {
        Self::with_layout(data, DynLayout::new(bounds, major)?, offset)
    }

    fn with_layout(data: &'a mut [T], layout: DynLayout, offset: usize) -> Result<Self> {
        check_backing(data.len(), offset, layout.len())?;
        Ok(Self {
            data,
            layout,
            offset,
        })
    }

    /// Number of axes.
    #[inline]
    pub fn dimensions(&self) -> usize {
        self.layout.dimensions()
    }

    /// Extent of each axis, in declaration order.
    #[inline]
    pub fn bounds(&self) -> &[usize] {
        self.layout.bounds()
    }

    /// Cached offset (stride) of each axis, in declaration order.
    #[inline]
    pub fn offsets(&self) -> &[usize] {
        self.layout.offsets()
    }

    /// The current traversal order.
    #[inline]
    pub fn order(&self) -> &AxisOrder {
        self.layout.order()
    }

    /// The canonical tag of the current order, if it has one.
    pub fn major(&self) -> Option<Major> {
        self.layout.major()
    }

    /// Whether the current order is row-major.
    pub fn is_row_major(&self) -> bool {
        self.layout.is_row_major()
    }

    /// Whether the current order is column-major.
    pub fn is_column_major(&self) -> bool {
        self.layout.is_column_major()
    }

    /// Total number of viewed elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.layout.len()
    }

    /// Always false: bounds with a zero extent are unrepresentable.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The shape descriptor.
    #[inline]
    pub fn layout(&self) -> &DynLayout {
        &self.layout
    }

    /// The cursor: storage position of the coordinate origin.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Reborrow as an immutable view.
    pub fn as_alias(&self) -> DynMatrixAlias<'_, T> {
        DynMatrixAlias {
            data: self.data,
            layout: self.layout.clone(),
            offset: self.offset,
        }
    }

    /// Replace the bounds vector; the rank may change. Semantics as
    /// [`DynMatrixAlias::set_bounds`].
    ///
    /// # Errors
    /// Shape errors; the alias is unchanged on error.
    pub fn set_bounds(&mut self, bounds: &[usize]) -> Result<()> {
        layout::check_extents(bounds)?;
        check_backing(self.data.len(), self.offset, index::element_count(bounds))?;
        self.layout.set_bounds(bounds)
    }

    /// Reverse the traversal order (row-major ↔ column-major toggle).
    pub fn switch_major(&mut self) {
        self.layout.switch_major();
    }

    /// Install a canonical traversal order.
    pub fn set_major(&mut self, major: Major) {
        self.layout.set_major(major);
    }

    /// Install an arbitrary traversal order.
    ///
    /// # Errors
    /// [`crate::AliasError::RankMismatch`]; the alias is unchanged on error.
    pub fn set_order(&mut self, order: AxisOrder) -> Result<()> {
        self.layout.set_order(order)
    }

    /// Rebind the view to different storage under the current shape.
    ///
    /// # Errors
    /// [`crate::AliasError::StorageTooSmall`]; the view is unchanged on
    /// error.
    pub fn rebind(&mut self, data: &'a mut [T]) -> Result<()> {
        check_backing(data.len(), self.offset, self.layout.len())?;
        self.data = data;
        Ok(())
    }

    /// Atomically replace storage and bounds. Semantics as
    /// [`DynMatrixAlias::update`].
    ///
    /// # Errors
    /// Shape errors; the alias is unchanged on error.
    pub fn update(&mut self, data: &'a mut [T], bounds: &[usize]) -> Result<()> {
        let mut layout = self.layout.clone();
        layout.set_bounds(bounds)?;
        check_backing(data.len(), self.offset, layout.len())?;
        self.layout = layout;
        self.data = data;
        Ok(())
    }

    /// Atomically replace storage, bounds, and major order.
    ///
    /// # Errors
    /// Shape errors; the alias is unchanged on error.
    pub fn update_with_major(
        &mut self,
        data: &'a mut [T],
        bounds: &[usize],
        major: Major,
    ) -> Result<()> {
        let layout = DynLayout::new(bounds, major)?;
        check_backing(data.len(), self.offset, layout.len())?;
        self.layout = layout;
        self.data = data;
        Ok(())
    }

    /// Convert a coordinate tuple to its view-relative linear index, without
    /// touching the storage. Not bounds-checked; arity is debug-asserted.
    #[inline]
    pub fn linear_index(&self, indexes: &[usize]) -> usize {
        self.layout.linear_index(indexes)
    }

    /// Convert a linear index back to a coordinate tuple.
    pub fn multi_index(&self, linear: usize) -> Vec<usize> {
        self.layout.multi_index(linear)
    }

    /// Checked element access.
    ///
    /// # Errors
    /// [`crate::AliasError::RankMismatch`] for a coordinate arity mismatch,
    /// else [`crate::AliasError::IndexOutOfBounds`] for the first violating
    /// axis.
    pub fn at(&self, indexes: &[usize]) -> Result<&T> {
        self.layout.check_bounds(indexes)?;
        Ok(&self.data[self.offset + self.layout.linear_index(indexes)])
    }

    /// Checked mutable element access.
    ///
    /// # Errors
    /// As [`Self::at`].
    pub fn at_mut(&mut self, indexes: &[usize]) -> Result<&mut T> {
        self.layout.check_bounds(indexes)?;
        let linear = self.offset + self.layout.linear_index(indexes);
        Ok(&mut self.data[linear])
    }

    /// Checked element access, `Option` form.
    #[inline]
    pub fn get(&self, indexes: &[usize]) -> Option<&T> {
        if indexes.len() != self.layout.dimensions() || self.layout.out_of_bounds(indexes) {
            return None;
        }
        Some(&self.data[self.offset + self.layout.linear_index(indexes)])
    }

    /// Checked mutable element access, `Option` form.
    #[inline]
    pub fn get_mut(&mut self, indexes: &[usize]) -> Option<&mut T> {
        if indexes.len() != self.layout.dimensions() || self.layout.out_of_bounds(indexes) {
            return None;
        }
        let linear = self.offset + self.layout.linear_index(indexes);
        Some(&mut self.data[linear])
    }

    /// Overwrite the element at a coordinate tuple.
    ///
    /// # Panics
    /// Panics if any coordinate is out of bounds.
    #[inline]
    pub fn set(&mut self, indexes: &[usize], value: T) {
        assert!(
            !self.layout.out_of_bounds(indexes),
            "index out of bounds"
        );
        let linear = self.offset + self.layout.linear_index(indexes);
        self.data[linear] = value;
    }

    /// Unchecked element access.
    ///
    /// # Safety
    /// The coordinate arity must match the rank and every coordinate must be
    /// within its axis extent.
    #[inline]
    pub unsafe fn get_unchecked(&self, indexes: &[usize]) -> &T {
        unsafe {
            self.data
                .get_unchecked(self.offset + self.layout.linear_index(indexes))
        }
    }

    /// Unchecked mutable element access.
    ///
    /// # Safety
    /// As [`Self::get_unchecked`].
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, indexes: &[usize]) -> &mut T {
        let linear = self.offset + self.layout.linear_index(indexes);
        unsafe { self.data.get_unchecked_mut(linear) }
    }
}

impl<T> Index<&[usize]> for DynMatrixAliasMut<'_, T> {
    type Output = T;

    #[inline]
    fn index(&self, indexes: &[usize]) -> &T {
        assert!(
            !self.layout.out_of_bounds(indexes),
            "index out of bounds"
        );
        &self.data[self.offset + self.layout.linear_index(indexes)]
    }
}

impl<T> IndexMut<&[usize]> for DynMatrixAliasMut<'_, T> {
    #[inline]
    fn index_mut(&mut self, indexes: &[usize]) -> &mut T {
        assert!(
            !self.layout.out_of_bounds(indexes),
            "index out of bounds"
        );
        let linear = self.offset + self.layout.linear_index(indexes);
        &mut self.data[linear]
    }
}

impl<T, const K: usize> Index<[usize; K]> for DynMatrixAliasMut<'_, T> {
    type Output = T;

    #[inline]
    fn index(&self, indexes: [usize; K]) -> &T {
        &self[&indexes[..]]
    }
}

impl<T, const K: usize> IndexMut<[usize; K]> for DynMatrixAliasMut<'_, T> {
    #[inline]
    fn index_mut(&mut self, indexes: [usize; K]) -> &mut T {
        &mut self[&indexes[..]]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AliasError;

    #[test]
    fn construction_and_access() {
        let data: Vec<u32> = (0..6).collect();
        let alias = DynMatrixAlias::new(&data, &[2, 3], Major::Row).unwrap();
        assert_eq!(alias.dimensions(), 2);
        assert_eq!(alias.bounds(), &[2, 3]);
        assert_eq!(alias.offsets(), &[3, 1]);
        assert_eq!(alias[[1, 2]], 5);
        assert_eq!(alias.at(&[1, 1]).copied().unwrap(), 4);
        assert_eq!(alias.get(&[0, 1]), Some(&1));
        assert_eq!(alias.get(&[0, 3]), None);
        assert_eq!(alias.get(&[0]), None);
    }

    #[test]
    fn construction_rejects_short_storage() {
        let data = [0u8; 5];
        assert!(matches!(
            DynMatrixAlias::new(&data, &[2, 3], Major::Row),
            Err(AliasError::StorageTooSmall {
                len: 5,
                required: 6
            })
        ));
    }

    #[test]
    fn checked_access_reports_arity_mismatch() {
        let data = [0u8; 6];
        let alias = DynMatrixAlias::new(&data, &[2, 3], Major::Row).unwrap();
        assert!(matches!(
            alias.at(&[1, 1, 1]),
            Err(AliasError::RankMismatch(3, 2))
        ));
    }

    #[test]
    fn reshape_preserves_slots() {
        let data: Vec<u32> = (0..6).collect();
        let mut alias = DynMatrixAlias::new(&data, &[2, 3], Major::Row).unwrap();
        let before = alias.at(&[1, 2]).unwrap() as *const u32;

        alias.set_bounds(&[6]).unwrap();
        assert_eq!(alias.dimensions(), 1);
        let after = alias.at(&[5]).unwrap() as *const u32;
        assert_eq!(before, after);

        alias.set_bounds(&[3, 2]).unwrap();
        assert_eq!(alias[[2, 1]], 5);
    }

    #[test]
    fn set_bounds_rejects_storage_shortfall() {
        let data: Vec<u32> = (0..6).collect();
        let mut alias = DynMatrixAlias::new(&data, &[2, 3], Major::Row).unwrap();
        let err = alias.set_bounds(&[3, 3]).unwrap_err();
        assert!(matches!(
            err,
            AliasError::StorageTooSmall {
                len: 6,
                required: 9
            }
        ));
        assert_eq!(alias.bounds(), &[2, 3]);
        assert_eq!(alias.offsets(), &[3, 1]);
    }

    #[test]
    fn switch_major_round_trips_offsets() {
        let data = [0u8; 24];
        let mut alias = DynMatrixAlias::new(&data, &[2, 3, 4], Major::Row).unwrap();
        let original = alias.offsets().to_vec();

        alias.switch_major();
        assert!(alias.is_column_major());
        assert_eq!(alias.offsets(), &[1, 2, 6]);

        alias.switch_major();
        assert!(alias.is_row_major());
        assert_eq!(alias.offsets(), original.as_slice());
    }

    #[test]
    fn custom_order_access() {
        let data: Vec<u32> = (0..24).collect();
        let order = AxisOrder::from_axes(vec![1, 2, 0]).unwrap();
        let alias = DynMatrixAlias::with_order(&data, &[2, 3, 4], order).unwrap();
        assert_eq!(alias.offsets(), &[12, 1, 3]);
        assert_eq!(alias.major(), None);
        // Storage slot = 1*12 + 2*1 + 3*3
        assert_eq!(alias[[1, 2, 3]], 23);
    }

    #[test]
    fn update_is_atomic() {
        let first: Vec<u32> = (0..6).collect();
        let second: Vec<u32> = (0..15).collect();
        let mut alias = DynMatrixAlias::new(&first, &[2, 3], Major::Row).unwrap();

        // Failure: neither bounds, offsets, nor storage change.
        let err = alias.update(&second, &[4, 4]).unwrap_err();
        assert!(matches!(err, AliasError::StorageTooSmall { .. }));
        assert_eq!(alias.bounds(), &[2, 3]);
        assert_eq!(alias.offsets(), &[3, 1]);
        assert_eq!(alias.data().as_ptr(), first.as_ptr());

        // Success: storage and bounds move together.
        alias.update(&second, &[3, 5]).unwrap();
        assert_eq!(alias.bounds(), &[3, 5]);
        assert_eq!(alias[[2, 4]], 14);
    }

    #[test]
    fn update_with_major_installs_canonical_order() {
        let first: Vec<u32> = (0..6).collect();
        let second: Vec<u32> = (0..15).collect();
        let mut alias = DynMatrixAlias::new(&first, &[2, 3], Major::Row).unwrap();

        alias.update_with_major(&second, &[3, 5], Major::Column).unwrap();
        assert!(alias.is_column_major());
        assert_eq!(alias.offsets(), &[1, 3]);
        assert_eq!(alias[[2, 4]], 14);
    }

    #[test]
    fn rebind_failure_preserves_binding() {
        let first: Vec<u32> = (0..6).collect();
        let short = [0u32; 4];
        let mut alias = DynMatrixAlias::new(&first, &[2, 3], Major::Row).unwrap();

        assert!(alias.rebind(&short).is_err());
        assert_eq!(alias.data().as_ptr(), first.as_ptr());
        assert_eq!(alias[[1, 2]], 5);
    }

    #[test]
    fn mutable_alias_writes_through() {
        let mut data = vec![0u32; 6];
        {
            let mut alias = DynMatrixAliasMut::new(&mut data, &[2, 3], Major::Row).unwrap();
            alias[[0, 0]] = 1;
            alias.set(&[1, 2], 6);
            *alias.at_mut(&[0, 1]).unwrap() = 2;
            *alias.get_mut(&[1, 0]).unwrap() = 4;
        }
        assert_eq!(data, [1, 2, 0, 4, 0, 6]);
    }

    #[test]
    fn column_major_write_pattern() {
        // Fill a [5, 2, 3, 2] column-major alias in declaration-order
        // coordinate traversal and observe the storage permutation.
        let mut data = vec![0u16; 60];
        let mut alias = DynMatrixAliasMut::new(&mut data, &[5, 2, 3, 2], Major::Row).unwrap();
        alias.switch_major();
        assert!(alias.is_column_major());

        let mut counter = 0u16;
        for a in 0..5 {
            for b in 0..2 {
                for c in 0..3 {
                    for d in 0..2 {
                        alias[[a, b, c, d]] = counter;
                        counter += 1;
                    }
                }
            }
        }
        let expected: Vec<u16> = vec![
            0, 12, 24, 36, 48, 6, 18, 30, 42, 54, 2, 14, 26, 38, 50, 8, 20, 32, 44, 56, 4, 16,
            28, 40, 52, 10, 22, 34, 46, 58, 1, 13, 25, 37, 49, 7, 19, 31, 43, 55, 3, 15, 27, 39,
            51, 9, 21, 33, 45, 57, 5, 17, 29, 41, 53, 11, 23, 35, 47, 59,
        ];
        drop(alias);
        assert_eq!(data, expected);
    }

    #[test]
    fn mutable_update_swaps_buffers() {
        let mut first = vec![0u32; 4];
        let mut second = vec![0u32; 9];
        let mut alias = DynMatrixAliasMut::new(&mut first, &[2, 2], Major::Row).unwrap();
        alias[[0, 0]] = 7;

        alias.update(&mut second, &[3, 3]).unwrap();
        alias[[2, 2]] = 9;
        drop(alias);

        assert_eq!(first[0], 7);
        assert_eq!(second[8], 9);
    }
}
