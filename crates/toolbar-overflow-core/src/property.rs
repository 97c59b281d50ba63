//! Reactive properties with change detection.
//!
//! A [`Property<T>`] wraps a value and reports whether a `set` actually changed
//! it, so the owner knows when to emit the matching notification signal.
//!
//! # Example
//!
//! ```
//! use toolbar_overflow_core::{Property, Signal};
//!
//! struct Width {
//!     value: Property<f32>,
//!     changed: Signal<f32>,
//! }
//!
//! impl Width {
//!     fn set(&self, width: f32) {
//!         if self.value.set(width) {
//!             self.changed.emit(width);
//!         }
//!     }
//! }
//!
//! let width = Width { value: Property::new(0.0), changed: Signal::new() };
//! width.set(320.0);
//! assert_eq!(width.value.get(), 320.0);
//! ```

use std::fmt;

use parking_lot::RwLock;

/// A reactive property that tracks changes.
///
/// `Property<T>` uses interior mutability with `RwLock` and is `Send + Sync`
/// whenever `T` is.
pub struct Property<T> {
    value: RwLock<T>,
}

impl<T: Clone> Property<T> {
    /// Create a new property with an initial value.
    pub fn new(value: T) -> Self {
        Self {
            value: RwLock::new(value),
        }
    }

    /// Get the current value.
    ///
    /// This clones the value. For large types, consider using `with()` instead.
    pub fn get(&self) -> T {
        self.value.read().clone()
    }

    /// Access the value through a closure without cloning.
    pub fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        f(&self.value.read())
    }

    /// Set the value without change detection.
    pub fn set_silent(&self, value: T) {
        *self.value.write() = value;
    }
}

impl<T: Clone + PartialEq> Property<T> {
    /// Set the value, returning `true` if the value changed.
    ///
    /// The caller should emit the associated notification signal when this
    /// returns `true`.
    pub fn set(&self, value: T) -> bool {
        let mut current = self.value.write();
        if *current != value {
            *current = value;
            true
        } else {
            false
        }
    }
}

impl<T: Clone + Default> Default for Property<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Clone + fmt::Debug> fmt::Debug for Property<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Property")
            .field("value", &self.get())
            .finish()
    }
}
