use std::fmt::Debug;
use std::ops::Deref;

/// Defines the numeric type of the samples
pub trait Scalar: Copy + PartialOrd + Debug {
    /// Holds the zero value
    const ZERO: Self;
}

impl Scalar for f64 {
    const ZERO: f64 = 0.0;
}

impl Scalar for f32 {
    const ZERO: f32 = 0.0;
}

/// Defines a sequence of samples supporting indexed read and, optionally, indexed write
///
/// Owning containers (e.g., `Vec<f64>`) are mutable; non-owning views (e.g., [SampleView])
/// are immutable. The capability is given by the associated constant [SampleStorage::MUTABLE].
pub trait SampleStorage {
    /// Numeric type of the samples
    type Scalar: Scalar;

    /// Indicates whether the samples may be modified in place or not
    const MUTABLE: bool;

    /// Returns read access to the samples
    fn as_slice(&self) -> &[Self::Scalar];

    /// Returns write access to the samples or None if the storage is immutable
    fn as_mut_slice(&mut self) -> Option<&mut [Self::Scalar]>;

    /// Returns the number of samples
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// Indicates whether there are no samples
    fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }

    /// Returns the first sample
    fn front(&self) -> Option<Self::Scalar> {
        self.as_slice().first().copied()
    }

    /// Returns the last sample
    fn back(&self) -> Option<Self::Scalar> {
        self.as_slice().last().copied()
    }
}

/// Defines a storage that owns its samples and thus can be (re)assigned
pub trait OwnedStorage: SampleStorage + Default {
    /// Allocates a new storage with a copy of the samples
    fn from_samples(samples: &[Self::Scalar]) -> Self;
}

/// Defines the view-construction primitive of a storage type
///
/// The element type of the view must be the same as the one of the container; this
/// is checked at compile time by the `Scalar = C::Scalar` bound.
pub trait ViewOf<'a, C: SampleStorage + ?Sized>: SampleStorage<Scalar = C::Scalar> + Sized {
    /// Returns a non-owning alias to the samples of the container
    fn view_of(container: &'a C) -> Self;
}

impl<T: Scalar> SampleStorage for Vec<T> {
    type Scalar = T;

    const MUTABLE: bool = true;

    fn as_slice(&self) -> &[T] {
        &self[..]
    }

    fn as_mut_slice(&mut self) -> Option<&mut [T]> {
        Some(&mut self[..])
    }
}

impl<T: Scalar> OwnedStorage for Vec<T> {
    fn from_samples(samples: &[T]) -> Self {
        samples.to_vec()
    }
}

/// Holds a read-only, non-owning alias to samples stored elsewhere
///
/// **Warning:** The view shares the memory of its source; thus the source must remain
/// valid and unchanged for as long as the view is in use. The borrow checker enforces
/// the lifetime for host memory; for externally managed memory (e.g., accelerator buffers
/// exposed as slices) this is a caller responsibility.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SampleView<'a, T> {
    data: &'a [T],
}

impl<'a, T> SampleView<'a, T> {
    /// Allocates a new view over the given samples
    pub fn new(data: &'a [T]) -> Self {
        SampleView { data }
    }

    /// Returns the address of the first aliased sample
    pub fn as_ptr(&self) -> *const T {
        self.data.as_ptr()
    }
}

impl<'a, T> Default for SampleView<'a, T> {
    fn default() -> Self {
        SampleView { data: &[] }
    }
}

impl<'a, T> Deref for SampleView<'a, T> {
    type Target = [T];
    fn deref(&self) -> &[T] {
        self.data
    }
}

impl<'a, T: Scalar> SampleStorage for SampleView<'a, T> {
    type Scalar = T;

    const MUTABLE: bool = false;

    fn as_slice(&self) -> &[T] {
        self.data
    }

    fn as_mut_slice(&mut self) -> Option<&mut [T]> {
        None
    }
}

impl<'a, C> ViewOf<'a, C> for SampleView<'a, C::Scalar>
where
    C: SampleStorage + ?Sized,
{
    fn view_of(container: &'a C) -> Self {
        SampleView::new(container.as_slice())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
