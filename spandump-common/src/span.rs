use crate::error::{Error, Result};
use bytemuck::Pod;
use std::borrow::Cow;
use std::mem::{align_of, size_of};
use std::ops::Index;
use std::slice::{ChunksExact, Iter};

/// Span represents an immutable, typed view on contiguous memory.
/// It never owns the memory, the borrow ties it to the lifetime of
/// the underlying storage.
///
/// A span can be reinterpreted as another plain-old-data type, e.g.
/// a span of `[f32; 3]` positions viewed as a span of `f32` components.
/// The reinterpreted span shares the same bytes, nothing is copied.
/// Conversion uses native endianness of the running machine.
#[derive(Debug)]
pub struct Span<'a, S> {
    data: &'a [S],
}

impl<S> Clone for Span<'_, S> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for Span<'_, S> {}

impl<'a, S> Span<'a, S> {
    #[inline]
    pub fn new(data: &'a [S]) -> Self {
        Span { data }
    }

    /// Returns count of typed elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn get(&self, idx: usize) -> Option<&'a S> {
        self.data.get(idx)
    }

    #[inline]
    pub fn iter(&self) -> Iter<'a, S> {
        self.data.iter()
    }

    #[inline]
    pub fn as_slice(&self) -> &'a [S] {
        self.data
    }

    /// Returns total bytes covered by this span.
    #[inline]
    pub fn byte_len(&self) -> usize {
        self.data.len() * size_of::<S>()
    }

    /// Split the span into consecutive runs of `size` elements.
    ///
    /// Panics if `size` is zero or the length is not a multiple of it.
    #[inline]
    pub fn groups(&self, size: usize) -> ChunksExact<'a, S> {
        assert!(size > 0, "group size must be non-zero");
        assert_eq!(
            self.data.len() % size,
            0,
            "span length {} is not a multiple of group size {}",
            self.data.len(),
            size
        );
        self.data.chunks_exact(size)
    }
}

impl<'a, S: Pod> Span<'a, S> {
    /// Returns raw byte slice.
    #[inline]
    pub fn as_bytes(&self) -> &'a [u8] {
        bytemuck::cast_slice(self.data)
    }

    /// Returns how many `T` values one `S` element is made of.
    ///
    /// Fails if `T` is zero-sized or the size of `S` is not an exact
    /// multiple of the size of `T`.
    #[inline]
    pub fn group_size<T: Pod>() -> Result<usize> {
        if size_of::<T>() == 0 {
            return Err(Error::InvalidArgument(
                "zero-sized target type is not allowed".to_string(),
            ));
        }
        if size_of::<S>() % size_of::<T>() != 0 {
            return Err(Error::SizeMismatch(format!(
                "element of {} bytes cannot be split into values of {} bytes",
                size_of::<S>(),
                size_of::<T>()
            )));
        }
        Ok(size_of::<S>() / size_of::<T>())
    }

    /// Reinterpret the bytes of this span as values of type `T`.
    ///
    /// The returned span covers exactly the same bytes and has
    /// `len() * size_of::<S>() / size_of::<T>()` elements.
    pub fn reinterpret<T: Pod>(&self) -> Result<Span<'a, T>> {
        let group_size = Self::group_size::<T>()?;
        if self.data.is_empty() {
            // dangling pointer of empty slice only satisfies alignment of S.
            return Ok(Span::new(&[]));
        }
        if align_of::<T>() > align_of::<S>() && self.data.as_ptr() as usize % align_of::<T>() != 0
        {
            return Err(Error::Misaligned(format!(
                "span start is not aligned to {} bytes",
                align_of::<T>()
            )));
        }
        let data: &'a [T] = bytemuck::try_cast_slice(self.data)?;
        debug_assert_eq!(data.len(), self.data.len() * group_size);
        Ok(Span::new(data))
    }

    /// Read the bytes of this span as values of type `T`.
    ///
    /// Borrows the memory if the span is aligned for `T`, otherwise the
    /// values are read one by one into an owned buffer. Only the size
    /// ratio of `S` and `T` can make this fail.
    pub fn read_values<T: Pod>(&self) -> Result<Cow<'a, [T]>> {
        match self.reinterpret::<T>() {
            Ok(values) => Ok(Cow::Borrowed(values.as_slice())),
            Err(Error::Misaligned(_)) => {
                let values = self
                    .as_bytes()
                    .chunks_exact(size_of::<T>())
                    .map(bytemuck::pod_read_unaligned::<T>)
                    .collect();
                Ok(Cow::Owned(values))
            }
            Err(e) => Err(e),
        }
    }
}

impl<S> Index<usize> for Span<'_, S> {
    type Output = S;

    #[inline]
    fn index(&self, idx: usize) -> &S {
        &self.data[idx]
    }
}

impl<'a, S> IntoIterator for Span<'a, S> {
    type Item = &'a S;
    type IntoIter = Iter<'a, S>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<'a, S> From<&'a [S]> for Span<'a, S> {
    #[inline]
    fn from(src: &'a [S]) -> Self {
        Span::new(src)
    }
}

impl<'a, S, const N: usize> From<&'a [S; N]> for Span<'a, S> {
    #[inline]
    fn from(src: &'a [S; N]) -> Self {
        Span::new(src)
    }
}

impl<'a, S> From<&'a Vec<S>> for Span<'a, S> {
    #[inline]
    fn from(src: &'a Vec<S>) -> Self {
        Span::new(src)
    }
}
