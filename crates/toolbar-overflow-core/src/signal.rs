//! Signal/slot system for toolbar overflow.
//!
//! Signals are emitted when observable state changes (a viewport resize, a new
//! visible subset) and every connected slot is invoked synchronously on the
//! emitting thread.
//!
//! # Key Types
//!
//! - [`Signal<Args>`] - The signal type used for notifications
//! - [`ConnectionId`] - Identifier returned when connecting a slot
//!
//! # Re-entrancy
//!
//! Slots are collected before they are invoked, so a slot may connect to or
//! disconnect from the signal that is currently emitting without deadlocking.
//! Changes made during an emission take effect from the next emission.
//!
//! # Example
//!
//! ```
//! use toolbar_overflow_core::Signal;
//!
//! let resized = Signal::<f32>::new();
//!
//! let conn_id = resized.connect(|width| {
//!     println!("viewport is now {width}px wide");
//! });
//!
//! resized.emit(1024.0);
//! resized.disconnect(conn_id);
//! ```

use std::sync::Arc;

use parking_lot::Mutex;
use slotmap::{SlotMap, new_key_type};

new_key_type! {
    /// A unique identifier for a signal-slot connection.
    ///
    /// Use this ID to disconnect a specific connection via [`Signal::disconnect`].
    /// The ID remains valid until the connection is explicitly disconnected or
    /// the signal is dropped.
    pub struct ConnectionId;
}

type Slot<Args> = Arc<dyn Fn(&Args) + Send + Sync>;

/// A type-safe signal that can have multiple connected slots.
///
/// When a signal is emitted, all connected slots are invoked with a reference
/// to the provided arguments, in connection order.
///
/// # Type Parameter
///
/// - `Args`: The argument type passed to connected slots. Use `()` for signals
///   with no arguments, or a tuple for multiple arguments.
pub struct Signal<Args> {
    /// All active connections.
    connections: Mutex<SlotMap<ConnectionId, Slot<Args>>>,
}

impl<Args: 'static> Default for Signal<Args> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Args: 'static> Signal<Args> {
    /// Create a new signal with no connections.
    pub fn new() -> Self {
        Self {
            connections: Mutex::new(SlotMap::with_key()),
        }
    }

    /// Connect a slot (closure) to this signal.
    ///
    /// Returns a `ConnectionId` that can be used to disconnect the slot later.
    ///
    /// # Example
    ///
    /// ```
    /// use toolbar_overflow_core::Signal;
    ///
    /// let signal = Signal::<String>::new();
    /// let id = signal.connect(|s| println!("Got: {}", s));
    /// signal.emit("Hello".to_string());
    /// ```
    pub fn connect<F>(&self, slot: F) -> ConnectionId
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        self.connections.lock().insert(Arc::new(slot))
    }

    /// Disconnect a specific slot by its connection ID.
    ///
    /// Returns `true` if the connection was found and removed, `false` otherwise.
    pub fn disconnect(&self, id: ConnectionId) -> bool {
        self.connections.lock().remove(id).is_some()
    }

    /// Check whether a connection is still live.
    pub fn is_connected(&self, id: ConnectionId) -> bool {
        self.connections.lock().contains_key(id)
    }

    /// Get the number of connected slots.
    pub fn connection_count(&self) -> usize {
        self.connections.lock().len()
    }

    /// Emit the signal, invoking all connected slots.
    ///
    /// Returns the number of slots that were invoked.
    #[tracing::instrument(skip_all, target = "toolbar_overflow_core", level = "trace")]
    pub fn emit(&self, args: Args) -> usize {
        // Release the lock before calling out so slots may touch this signal.
        let slots: Vec<Slot<Args>> = self.connections.lock().values().cloned().collect();
        crate::overflow_trace!(connection_count = slots.len(), "emitting signal");

        for slot in &slots {
            slot(&args);
        }

        slots.len()
    }
}
