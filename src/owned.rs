use std::alloc::{alloc, dealloc, Layout};
use std::fmt;
use std::marker::PhantomData;
use std::mem::ManuallyDrop;
use std::ops::{Add, Deref, Mul, Sub};
use std::ptr::{self, NonNull};

use crate::error::OwnedValueError;

// =============================================================================
// OwnedValue: exclusive ownership of one heap-allocated value
// =============================================================================

/// A wrapper that exclusively owns one heap-allocated value of numeric type
/// `T` and enforces a non-negativity invariant on it.
///
/// Each instance holds its own allocation: construction allocates fresh
/// storage, arithmetic between two instances allocates a third, and dropping
/// an instance releases its storage exactly once. Instances are never cloned
/// or copied.
///
/// Construction and mutation are fallible. A negative value is rejected with
/// [`OwnedValueError::NegativeValue`] before it ever becomes observable:
/// a rejected construction produces no instance, and a rejected [`set`]
/// leaves the previous value in place.
///
/// [`set`]: OwnedValue::set
pub struct OwnedValue<T> {
    ptr: NonNull<T>,
    // Tells drop check that dropping an OwnedValue<T> may drop a T.
    _marker: PhantomData<T>,
}

impl<T> OwnedValue<T> {
    /// Acquires storage for one `T` and moves `value` into it.
    fn allocate(value: T) -> Result<NonNull<T>, OwnedValueError> {
        let layout = Layout::new::<T>();

        // Zero-sized T needs no allocation; a dangling pointer is valid.
        if layout.size() == 0 {
            return Ok(NonNull::dangling());
        }

        let raw = unsafe { alloc(layout) as *mut T };
        let ptr = NonNull::new(raw).ok_or(OwnedValueError::AllocationFailure)?;
        unsafe {
            ptr.as_ptr().write(value);
        }
        Ok(ptr)
    }

    /// Consumes the wrapper and returns the owned value, releasing the
    /// heap storage without running the value's destructor twice.
    pub fn into_inner(self) -> T {
        let this = ManuallyDrop::new(self);
        let layout = Layout::new::<T>();
        unsafe {
            let value = ptr::read(this.ptr.as_ptr());
            if layout.size() != 0 {
                dealloc(this.ptr.as_ptr() as *mut u8, layout);
            }
            value
        }
    }
}

impl<T: Default> OwnedValue<T> {
    /// Allocates storage initialized to zero (`T::default()`).
    ///
    /// Fails with [`OwnedValueError::AllocationFailure`] if the allocator
    /// cannot satisfy the request; no partially-built instance escapes.
    pub fn new() -> Result<Self, OwnedValueError> {
        let ptr = Self::allocate(T::default())?;
        Ok(OwnedValue {
            ptr,
            _marker: PhantomData,
        })
    }
}

impl<T: Default + PartialOrd> OwnedValue<T> {
    /// Allocates storage initialized to `value`.
    ///
    /// `value` is validated before any storage is acquired: a negative value
    /// yields [`OwnedValueError::NegativeValue`] and no instance is
    /// constructed at all.
    pub fn with_value(value: T) -> Result<Self, OwnedValueError> {
        if Self::is_negative(&value) {
            return Err(OwnedValueError::NegativeValue);
        }
        let ptr = Self::allocate(value)?;
        Ok(OwnedValue {
            ptr,
            _marker: PhantomData,
        })
    }

    /// Replaces the owned value with `value`.
    ///
    /// Reject policy: if `value` is negative, returns
    /// [`OwnedValueError::NegativeValue`] and the previous value is retained
    /// unchanged.
    pub fn set(&mut self, value: T) -> Result<(), OwnedValueError> {
        if Self::is_negative(&value) {
            return Err(OwnedValueError::NegativeValue);
        }
        unsafe {
            *self.ptr.as_ptr() = value;
        }
        Ok(())
    }

    /// Validated swap: stores `value` and returns the previous value.
    /// Same reject policy as [`set`](OwnedValue::set).
    pub fn replace(&mut self, value: T) -> Result<T, OwnedValueError> {
        if Self::is_negative(&value) {
            return Err(OwnedValueError::NegativeValue);
        }
        Ok(unsafe { ptr::replace(self.ptr.as_ptr(), value) })
    }

    fn is_negative(value: &T) -> bool {
        *value < T::default()
    }
}

impl<T: Copy> OwnedValue<T> {
    /// Returns a copy of the owned value.
    pub fn get(&self) -> T {
        unsafe { *self.ptr.as_ptr() }
    }
}

impl<T> Drop for OwnedValue<T> {
    fn drop(&mut self) {
        let layout = Layout::new::<T>();
        unsafe {
            ptr::drop_in_place(self.ptr.as_ptr());
            if layout.size() != 0 {
                dealloc(self.ptr.as_ptr() as *mut u8, layout);
            }
        }
    }
}

// Read-only access through the wrapper. DerefMut is deliberately absent:
// writes must go through `set`, which enforces the invariant.
impl<T> Deref for OwnedValue<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        unsafe { self.ptr.as_ref() }
    }
}

impl<T: fmt::Debug> fmt::Debug for OwnedValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("OwnedValue").field(&**self).finish()
    }
}

impl<T: fmt::Display> fmt::Display for OwnedValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (**self).fmt(f)
    }
}

// =============================================================================
// Arithmetic: two instances combine into a freshly allocated third
// =============================================================================

// Operators take references so the operands stay alive and unaliased; the
// sum/difference/product goes through the validating constructor, so a
// negative result is an error rather than an instance holding it.

impl<T> Add for &OwnedValue<T>
where
    T: Copy + Default + PartialOrd + Add<Output = T>,
{
    type Output = Result<OwnedValue<T>, OwnedValueError>;

    fn add(self, rhs: Self) -> Self::Output {
        OwnedValue::with_value(self.get() + rhs.get())
    }
}

impl<T> Sub for &OwnedValue<T>
where
    T: Copy + Default + PartialOrd + Sub<Output = T>,
{
    type Output = Result<OwnedValue<T>, OwnedValueError>;

    fn sub(self, rhs: Self) -> Self::Output {
        OwnedValue::with_value(self.get() - rhs.get())
    }
}

impl<T> Mul for &OwnedValue<T>
where
    T: Copy + Default + PartialOrd + Mul<Output = T>,
{
    type Output = Result<OwnedValue<T>, OwnedValueError>;

    fn mul(self, rhs: Self) -> Self::Output {
        OwnedValue::with_value(self.get() * rhs.get())
    }
}

// =============================================================================
// Tests
// =============================================================================
