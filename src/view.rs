//! Non-owning fixed-shape matrix aliases over borrowed contiguous storage.
//!
//! [`MatrixAlias`] and [`MatrixAliasMut`] combine a borrowed slice, a base
//! offset into it, and a [`StaticLayout`]. They never own, allocate, or free
//! the storage they view; the borrow ties the alias's lifetime to the
//! storage, and rebinding the slice never touches the referenced elements.
//!
//! The shape is fixed for the alias's lifetime. For bounds, rank, or order
//! that change at run time, use the [`crate::dyn_view`] counterparts.

use crate::layout::StaticLayout;
use crate::order::Major;
use crate::{AliasError, Result};
use std::ops::{Index, IndexMut};

/// Check that storage of `len` elements can back a view of `required`
/// elements starting at `offset`. Longer storage is fine — the view reads a
/// prefix; shorter storage is a shape error.
pub(crate) fn check_backing(len: usize, offset: usize, required: usize) -> Result<()> {
    match offset.checked_add(required) {
        Some(end) if end <= len => Ok(()),
        _ => Err(AliasError::StorageTooSmall {
            len,
            required: offset.saturating_add(required),
        }),
    }
}

/// An immutable fixed-shape view over a borrowed slice.
///
/// # Example
/// ```
/// use matrix_alias::{MatrixAlias, StaticLayout};
///
/// let data = vec![1, 2, 3, 4, 5, 6];
/// let alias = MatrixAlias::new(&data, StaticLayout::row_major([2, 3])).unwrap();
/// assert_eq!(alias[[1, 2]], 6);
/// assert_eq!(alias.linear_index(&[1, 2]), 5);
/// ```
#[derive(Debug)]
pub struct MatrixAlias<'a, T, const N: usize> {
    pub(crate) data: &'a [T],
    pub(crate) layout: StaticLayout<N>,
    pub(crate) offset: usize,
}

/// A mutable fixed-shape view over a borrowed slice.
///
/// Same surface as [`MatrixAlias`] plus write access. Holding one borrows
/// the storage uniquely, so no other alias can observe its writes midway.
#[derive(Debug)]
pub struct MatrixAliasMut<'a, T, const N: usize> {
    pub(crate) data: &'a mut [T],
    pub(crate) layout: StaticLayout<N>,
    pub(crate) offset: usize,
}

impl<'a, T, const N: usize> MatrixAlias<'a, T, N> {
    /// Alias `data` with the shape of `layout`.
    ///
    /// # Errors
    /// [`AliasError::StorageTooSmall`] if `data` holds fewer than
    /// `layout.len()` elements.
    pub fn new(data: &'a [T], layout: StaticLayout<N>) -> Result<Self> {
        Self::with_offset(data, layout, 0)
    }

    /// Alias `data` starting at `offset` (the cursor): coordinate origin
    /// maps to `data[offset]`.
    ///
    /// # Errors
    /// [`AliasError::StorageTooSmall`] if the slice past `offset` holds
    /// fewer than `layout.len()` elements.
    pub fn with_offset(data: &'a [T], layout: StaticLayout<N>, offset: usize) -> Result<Self> {
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
        N
    }

    /// Extent of each axis, in declaration order.
    #[inline]
    pub fn bounds(&self) -> &[usize; N] {
        self.layout.bounds()
    }

    /// Cached offset (stride) of each axis, in declaration order.
    #[inline]
    pub fn offsets(&self) -> &[usize; N] {
        self.layout.offsets()
    }

    /// The major order.
    #[inline]
    pub fn major(&self) -> Major {
        self.layout.major()
    }

    /// Whether the view is row-major.
    #[inline]
    pub fn is_row_major(&self) -> bool {
        self.layout.is_row_major()
    }

    /// Whether the view is column-major.
    #[inline]
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
    pub fn layout(&self) -> &StaticLayout<N> {
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

    /// Rebind the view to different storage of the same element type. The
    /// previously viewed storage is untouched.
    ///
    /// # Errors
    /// [`AliasError::StorageTooSmall`]; the view is unchanged on error.
    pub fn rebind(&mut self, data: &'a [T]) -> Result<()> {
        check_backing(data.len(), self.offset, self.layout.len())?;
        self.data = data;
        Ok(())
    }

    /// Rebind to different storage and a new cursor in one call.
    ///
    /// # Errors
    /// [`AliasError::StorageTooSmall`]; the view is unchanged on error.
    pub fn rebind_with_offset(&mut self, data: &'a [T], offset: usize) -> Result<()> {
        check_backing(data.len(), offset, self.layout.len())?;
        self.data = data;
        self.offset = offset;
        Ok(())
    }

    /// Convert a coordinate tuple to its view-relative linear index, without
    /// touching the storage. Not bounds-checked.
    #[inline]
    pub fn linear_index(&self, indexes: &[usize; N]) -> usize {
        self.layout.linear_index(indexes)
    }

    /// Convert a view-relative linear index back to a coordinate tuple.
    pub fn multi_index(&self, linear: usize) -> [usize; N] {
        self.layout.multi_index(linear)
    }

    /// Checked element access.
    ///
    /// # Errors
    /// [`AliasError::IndexOutOfBounds`] for the first violating axis.
    pub fn at(&self, indexes: [usize; N]) -> Result<&'a T> {
        self.layout.check_bounds(&indexes)?;
        Ok(&self.data[self.offset + self.layout.linear_index(&indexes)])
    }

    /// Checked element access, `Option` form.
    #[inline]
    pub fn get(&self, indexes: [usize; N]) -> Option<&'a T> {
        if self.layout.out_of_bounds(&indexes) {
            return None;
        }
        Some(&self.data[self.offset + self.layout.linear_index(&indexes)])
    }

    /// Unchecked element access.
    ///
    /// # Safety
    /// Every coordinate must be within its axis extent.
    #[inline]
    pub unsafe fn get_unchecked(&self, indexes: [usize; N]) -> &'a T {
        unsafe {
            self.data
                .get_unchecked(self.offset + self.layout.linear_index(&indexes))
        }
    }
}

impl<T, const N: usize> Index<[usize; N]> for MatrixAlias<'_, T, N> {
    type Output = T;

    #[inline]
    fn index(&self, indexes: [usize; N]) -> &T {
        assert!(
            !self.layout.out_of_bounds(&indexes),
            "index out of bounds"
        );
        &self.data[self.offset + self.layout.linear_index(&indexes)]
    }
}

impl<'a, T, const N: usize> MatrixAliasMut<'a, T, N> {
    /// Alias `data` mutably with the shape of `layout`.
    ///
    /// # Errors
    /// [`AliasError::StorageTooSmall`] if `data` holds fewer than
    /// `layout.len()` elements.
    pub fn new(data: &'a mut [T], layout: StaticLayout<N>) -> Result<Self> {
        Self::with_offset(data, layout, 0)
    }

    /// Alias `data` mutably starting at `offset`.
    ///
    /// # Errors
    /// [`AliasError::StorageTooSmall`] if the slice past `offset` holds
    /// fewer than `layout.len()` elements.
    pub fn with_offset(data: &'a mut [T], layout: StaticLayout<N>, offset: usize) -> Result<Self> {
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
        N
    }

    /// Extent of each axis, in declaration order.
    #[inline]
    pub fn bounds(&self) -> &[usize; N] {
        self.layout.bounds()
    }

    /// Cached offset (stride) of each axis, in declaration order.
    #[inline]
    pub fn offsets(&self) -> &[usize; N] {
        self.layout.offsets()
    }

    /// The major order.
    #[inline]
    pub fn major(&self) -> Major {
        self.layout.major()
    }

    /// Whether the view is row-major.
    #[inline]
    pub fn is_row_major(&self) -> bool {
        self.layout.is_row_major()
    }

    /// Whether the view is column-major.
    #[inline]
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
    pub fn layout(&self) -> &StaticLayout<N> {
        &self.layout
    }

    /// The cursor: storage position of the coordinate origin.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Reborrow as an immutable view.
    pub fn as_alias(&self) -> MatrixAlias<'_, T, N> {
        MatrixAlias {
            data: self.data,
            layout: self.layout,
            offset: self.offset,
        }
    }

    /// Rebind the view to different storage of the same element type.
    ///
    /// # Errors
    /// [`AliasError::StorageTooSmall`]; the view is unchanged on error.
    pub fn rebind(&mut self, data: &'a mut [T]) -> Result<()> {
        check_backing(data.len(), self.offset, self.layout.len())?;
        self.data = data;
        Ok(())
    }

    /// Rebind to different storage and a new cursor in one call.
    ///
    /// # Errors
    /// [`AliasError::StorageTooSmall`]; the view is unchanged on error.
    pub fn rebind_with_offset(&mut self, data: &'a mut [T], offset: usize) -> Result<()> {
        check_backing(data.len(), offset, self.layout.len())?;
        self.data = data;
        self.offset = offset;
        Ok(())
    }

    /// Convert a coordinate tuple to its view-relative linear index, without
    /// touching the storage. Not bounds-checked.
    #[inline]
    pub fn linear_index(&self, indexes: &[usize; N]) -> usize {
        self.layout.linear_index(indexes)
    }

    /// Convert a view-relative linear index back to a coordinate tuple.
    pub fn multi_index(&self, linear: usize) -> [usize; N] {
        self.layout.multi_index(linear)
    }

    /// Checked element access.
    ///
    /// # Errors
    /// [`AliasError::IndexOutOfBounds`] for the first violating axis.
    pub fn at(&self, indexes: [usize; N]) -> Result<&T> {
        self.layout.check_bounds(&indexes)?;
        Ok(&self.data[self.offset + self.layout.linear_index(&indexes)])
    }

    /// Checked mutable element access.
    ///
    /// # Errors
    /// [`AliasError::IndexOutOfBounds`] for the first violating axis.
    pub fn at_mut(&mut self, indexes: [usize; N]) -> Result<&mut T> {
        self.layout.check_bounds(&indexes)?;
        let linear = self.offset + self.layout.linear_index(&indexes);
        Ok(&mut self.data[linear])
    }

    /// Checked element access, `Option` form.
    #[inline]
    pub fn get(&self, indexes: [usize; N]) -> Option<&T> {
        if self.layout.out_of_bounds(&indexes) {
            return None;
        }
        Some(&self.data[self.offset + self.layout.linear_index(&indexes)])
    }

    /// Checked mutable element access, `Option` form.
    #[inline]
    pub fn get_mut(&mut self, indexes: [usize; N]) -> Option<&mut T> {
        if self.layout.out_of_bounds(&indexes) {
            return None;
        }
        let linear = self.offset + self.layout.linear_index(&indexes);
        Some(&mut self.data[linear])
    }

    /// Overwrite the element at a coordinate tuple.
    ///
    /// # Panics
    /// Panics if any coordinate is out of bounds.
    #[inline]
    pub fn set(&mut self, indexes: [usize; N], value: T) {
        assert!(
            !self.layout.out_of_bounds(&indexes),
            "index out of bounds"
        );
        let linear = self.offset + self.layout.linear_index(&indexes);
        self.data[linear] = value;
    }

    /// Unchecked element access.
    ///
    /// # Safety
    /// Every coordinate must be within its axis extent.
    #[inline]
    pub unsafe fn get_unchecked(&self, indexes: [usize; N]) -> &T {
        unsafe {
            self.data
                .get_unchecked(self.offset + self.layout.linear_index(&indexes))
        }
    }

    /// Unchecked mutable element access.
    ///
    /// # Safety
    /// Every coordinate must be within its axis extent.
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, indexes: [usize; N]) -> &mut T {
        let linear = self.offset + self.layout.linear_index(&indexes);
        unsafe { self.data.get_unchecked_mut(linear) }
    }
}

impl<T, const N: usize> Index<[usize; N]> for MatrixAliasMut<'_, T, N> {
    type Output = T;

    #[inline]
    fn index(&self, indexes: [usize; N]) -> &T {
        assert!(
            !self.layout.out_of_bounds(&indexes),
            "index out of bounds"
        );
        &self.data[self.offset + self.layout.linear_index(&indexes)]
    }
}

impl<T, const N: usize> IndexMut<[usize; N]> for MatrixAliasMut<'_, T, N> {
    #[inline]
    fn index_mut(&mut self, indexes: [usize; N]) -> &mut T {
        assert!(
            !self.layout.out_of_bounds(&indexes),
            "index out of bounds"
        );
        let linear = self.offset + self.layout.linear_index(&indexes);
        &mut self.data[linear]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_checks_storage() {
        let data = [0u8; 6];
        assert!(MatrixAlias::new(&data, StaticLayout::<2>::row_major([2, 3])).is_ok());
        // A longer slice is fine; the view reads a prefix.
        assert!(MatrixAlias::new(&data, StaticLayout::<1>::row_major([4])).is_ok());

        let err = MatrixAlias::new(&data, StaticLayout::<2>::row_major([3, 3])).unwrap_err();
        assert!(matches!(
            err,
            AliasError::StorageTooSmall {
                len: 6,
                required: 9
            }
        ));
    }

    #[test]
    fn cursor_shifts_the_origin() {
        let data: Vec<u32> = (0..8).collect();
        let alias =
            MatrixAlias::with_offset(&data, StaticLayout::row_major([2, 3]), 2).unwrap();
        assert_eq!(alias[[0, 0]], 2);
        assert_eq!(alias[[1, 2]], 7);

        assert!(
            MatrixAlias::with_offset(&data, StaticLayout::<2>::row_major([2, 3]), 3).is_err()
        );
    }

    #[test]
    fn row_major_access() {
        let data: Vec<u32> = (0..6).collect();
        let alias = MatrixAlias::new(&data, StaticLayout::row_major([2, 3])).unwrap();
        assert_eq!(alias[[0, 0]], 0);
        assert_eq!(alias[[0, 2]], 2);
        assert_eq!(alias[[1, 0]], 3);
        assert_eq!(alias[[1, 2]], 5);
    }

    #[test]
    fn column_major_access() {
        let data: Vec<u32> = (0..6).collect();
        let alias = MatrixAlias::new(&data, StaticLayout::col_major([2, 3])).unwrap();
        assert_eq!(alias[[0, 0]], 0);
        assert_eq!(alias[[1, 0]], 1);
        assert_eq!(alias[[0, 1]], 2);
        assert_eq!(alias[[1, 2]], 5);
    }

    #[test]
    fn checked_and_unchecked_access_agree() {
        let data: Vec<u32> = (0..6).collect();
        let alias = MatrixAlias::new(&data, StaticLayout::row_major([2, 3])).unwrap();

        assert_eq!(alias.at([1, 2]).copied().unwrap(), alias[[1, 2]]);
        assert_eq!(alias.get([1, 2]), Some(&5));
        assert_eq!(unsafe { *alias.get_unchecked([1, 2]) }, 5);

        assert!(matches!(
            alias.at([2, 0]),
            Err(AliasError::IndexOutOfBounds {
                axis: 0,
                index: 2,
                extent: 2
            })
        ));
        assert!(matches!(
            alias.at([0, 3]),
            Err(AliasError::IndexOutOfBounds {
                axis: 1,
                index: 3,
                extent: 3
            })
        ));
        assert_eq!(alias.get([0, 3]), None);
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn index_panics_out_of_bounds() {
        let data = [0u8; 6];
        let alias = MatrixAlias::new(&data, StaticLayout::row_major([2, 3])).unwrap();
        let _ = alias[[0, 3]];
    }

    #[test]
    fn mutable_access_writes_through() {
        let mut data = vec![0u32; 6];
        let mut alias = MatrixAliasMut::new(&mut data, StaticLayout::row_major([2, 3])).unwrap();
        alias[[0, 0]] = 10;
        alias.set([1, 2], 60);
        *alias.at_mut([0, 1]).unwrap() = 20;

        assert_eq!(alias.as_alias()[[0, 0]], 10);
        drop(alias);
        assert_eq!(data, [10, 20, 0, 0, 0, 60]);
    }

    #[test]
    fn rebind_swaps_storage_without_touching_it() {
        let first: Vec<u32> = (0..6).collect();
        let second: Vec<u32> = (10..16).collect();
        let mut alias = MatrixAlias::new(&first, StaticLayout::row_major([2, 3])).unwrap();
        assert_eq!(alias[[0, 0]], 0);

        alias.rebind(&second).unwrap();
        assert_eq!(alias[[0, 0]], 10);
        assert_eq!(first[0], 0);

        let short = [0u32; 4];
        assert!(alias.rebind(&short).is_err());
        // Failed rebind leaves the previous binding in place.
        assert_eq!(alias[[0, 0]], 10);
    }

    #[test]
    fn shape_queries_delegate_to_layout() {
        let data = [0u8; 24];
        let alias = MatrixAlias::new(&data, StaticLayout::col_major([2, 3, 4])).unwrap();
        assert_eq!(alias.dimensions(), 3);
        assert_eq!(alias.bounds(), &[2, 3, 4]);
        assert_eq!(alias.offsets(), &[1, 2, 6]);
        assert_eq!(alias.len(), 24);
        assert!(alias.is_column_major() && !alias.is_row_major());
        assert_eq!(alias.major(), Major::Column);
    }
}
