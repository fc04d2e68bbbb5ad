//! Shared mutable values passed between a host and its validators
//!
//! A [`Binding`] is a cheap, cloneable handle to a single value. The host
//! keeps one clone and hands another to the controller; writes through either
//! handle are visible through both.
//!
//! # Invariants
//!
//! 1. Setting a value equal to the current one is a no-op: nothing is stored
//!    and no subscriber runs.
//! 2. Subscribers run after the new value is stored and the internal borrow
//!    is released, so a callback may read or write any binding, including
//!    the one that notified it.
//! 3. Subscribers run in registration order.
//! 4. Dropping a [`Subscription`] stops its callback from running on any
//!    later change.

use std::any::Any;
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};
use tracing::trace;

type Callback<T> = dyn Fn(&T);

struct Inner<T> {
    value: T,
    constant: bool,
    subscribers: Vec<Weak<Callback<T>>>,
}

/// Shared, single-threaded, observable value
pub struct Binding<T> {
    inner: Rc<RefCell<Inner<T>>>,
}

impl<T> Clone for Binding<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Binding<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("Binding")
            .field("value", &inner.value)
            .field("constant", &inner.constant)
            .field("subscribers", &inner.subscribers.len())
            .finish()
    }
}

impl<T: Default + Clone + PartialEq + 'static> Default for Binding<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Clone + PartialEq + 'static> Binding<T> {
    /// Create a writable binding
    pub fn new(value: T) -> Self {
        Self::with_constness(value, false)
    }

    /// Create a binding whose value never changes; writes are dropped
    pub fn constant(value: T) -> Self {
        Self::with_constness(value, true)
    }

    fn with_constness(value: T, constant: bool) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                value,
                constant,
                subscribers: Vec::new(),
            })),
        }
    }

    /// Get a copy of the current value
    pub fn get(&self) -> T {
        self.inner.borrow().value.clone()
    }

    /// Borrow the current value.
    ///
    /// The binding stays borrowed while `f` runs, so `f` must not call
    /// [`Binding::set`] on this binding (or a clone of it); doing so panics.
    /// Reading it again is fine.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.borrow().value)
    }

    /// Whether this binding was created with [`Binding::constant`]
    pub fn is_constant(&self) -> bool {
        self.inner.borrow().constant
    }

    /// Store `value` and notify subscribers if it differs from the current one
    pub fn set(&self, value: T) {
        let callbacks = {
            let mut inner = self.inner.borrow_mut();
            if inner.constant {
                trace!("ignoring write to constant binding");
                return;
            }
            if inner.value == value {
                return;
            }
            inner.value = value;
            inner.subscribers.retain(|weak| weak.strong_count() > 0);
            inner
                .subscribers
                .iter()
                .filter_map(Weak::upgrade)
                .collect::<Vec<_>>()
        };

        if callbacks.is_empty() {
            return;
        }
        let current = self.get();
        for callback in callbacks {
            callback(&current);
        }
    }

    /// Run `callback` with the new value after every change
    #[must_use = "the callback is removed as soon as the subscription is dropped"]
    pub fn subscribe(&self, callback: impl Fn(&T) + 'static) -> Subscription {
        let callback: Rc<Callback<T>> = Rc::new(callback);
        self.inner
            .borrow_mut()
            .subscribers
            .push(Rc::downgrade(&callback));
        Subscription {
            _callback: Box::new(callback),
        }
    }

    /// Number of live subscribers
    pub fn subscriber_count(&self) -> usize {
        self.inner
            .borrow()
            .subscribers
            .iter()
            .filter(|weak| weak.strong_count() > 0)
            .count()
    }
}

/// Keeps a [`Binding::subscribe`] callback registered while alive
pub struct Subscription {
    _callback: Box<dyn Any>,
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").finish_non_exhaustive()
    }
}
