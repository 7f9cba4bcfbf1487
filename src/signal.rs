//! Push-based signals.
//!
//! A [`Signal`] holds a current value and synchronously notifies every live
//! subscriber each time a value is emitted. Subscribing does not replay the
//! current value; derived state seeds itself from [`Signal::current`].
//! [`combine_latest`] and its boolean shorthands compose several signals into
//! one [`Derived`] signal that re-evaluates on every input emission.

use alloc::{
    boxed::Box,
    rc::{Rc, Weak},
    vec::Vec,
};
use core::cell::{Cell, RefCell};
use core::fmt;

type Callback<T> = Rc<dyn Fn(&T)>;

struct Subscriber<T> {
    id: u64,
    live: Rc<Cell<bool>>,
    callback: Callback<T>,
}

struct Inner<T> {
    value: T,
    next_id: u64,
    subscribers: Vec<Subscriber<T>>,
}

/// Shared, single-threaded value holder with synchronous notification.
///
/// Cloning a signal yields another handle to the same value and subscriber
/// list.
pub struct Signal<T> {
    inner: Rc<RefCell<Inner<T>>>,
}

impl<T> Clone for Signal<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: Clone + 'static> Signal<T> {
    /// Create a signal holding `value`.
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                value,
                next_id: 0,
                subscribers: Vec::new(),
            })),
        }
    }

    /// The most recently emitted value.
    pub fn current(&self) -> T {
        self.inner.borrow().value.clone()
    }

    /// Store `value` and run every live subscriber before returning.
    ///
    /// Subscribers disposed while the emission is in progress are skipped.
    pub fn emit(&self, value: T) {
        let callbacks: Vec<(Rc<Cell<bool>>, Callback<T>)> = {
            let mut inner = self.inner.borrow_mut();
            inner.value = value.clone();
            inner.subscribers.retain(|s| s.live.get());
            inner
                .subscribers
                .iter()
                .map(|s| (Rc::clone(&s.live), Rc::clone(&s.callback)))
                .collect()
        };
        for (live, callback) in callbacks {
            if live.get() {
                (*callback)(&value);
            }
        }
    }

    /// Register `callback` for every future emission.
    ///
    /// The callback stays registered until the returned [`Subscription`] is
    /// disposed or dropped.
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&T) + 'static,
    {
        let live = Rc::new(Cell::new(true));
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.subscribers.push(Subscriber {
                id,
                live: Rc::clone(&live),
                callback: Rc::new(callback),
            });
            id
        };
        let weak: Weak<RefCell<Inner<T>>> = Rc::downgrade(&self.inner);
        Subscription {
            live,
            release: Some(Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    // Mid-emission removals are pruned on the next emit.
                    if let Ok(mut inner) = inner.try_borrow_mut() {
                        inner.subscribers.retain(|s| s.id != id);
                    }
                }
            })),
        }
    }

    /// Number of subscribers that have not been disposed.
    pub fn subscriber_count(&self) -> usize {
        self.inner
            .borrow()
            .subscribers
            .iter()
            .filter(|s| s.live.get())
            .count()
    }

    /// Returns `true` when both handles refer to the same signal.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<T: fmt::Debug> fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.inner.try_borrow() {
            Ok(inner) => f
                .debug_struct("Signal")
                .field("value", &inner.value)
                .field("subscribers", &inner.subscribers.len())
                .finish(),
            Err(_) => f.write_str("Signal { <borrowed> }"),
        }
    }
}

/// Handle to a registered callback. Disposing is idempotent and dropping the
/// handle disposes it.
pub struct Subscription {
    live: Rc<Cell<bool>>,
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Stop all future callbacks, including ones already queued by an
    /// emission in progress.
    pub fn dispose(&mut self) {
        self.live.set(false);
        if let Some(release) = self.release.take() {
            release();
        }
    }

    pub fn is_disposed(&self) -> bool {
        !self.live.get()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("disposed", &self.is_disposed())
            .finish()
    }
}

/// A signal computed from other signals, owning its input subscriptions.
pub struct Derived<T> {
    signal: Signal<T>,
    subscriptions: Vec<Subscription>,
}

impl<T: Clone + 'static> Derived<T> {
    /// Output signal; clone it to hand out to observers.
    pub fn signal(&self) -> &Signal<T> {
        &self.signal
    }

    pub fn current(&self) -> T {
        self.signal.current()
    }

    /// Release the input subscriptions. The output keeps its last value.
    pub fn dispose(&mut self) {
        for subscription in self.subscriptions.iter_mut() {
            subscription.dispose();
        }
        self.subscriptions.clear();
    }
}

impl<T: fmt::Debug> fmt::Debug for Derived<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Derived")
            .field("signal", &self.signal)
            .field("inputs", &self.subscriptions.len())
            .finish()
    }
}

/// Combine-latest: keeps the latest value of every input and emits
/// `combine(latest)` whenever any input emits.
pub fn combine_latest<T, U, F>(inputs: &[Signal<T>], combine: F) -> Derived<U>
where
    T: Clone + 'static,
    U: Clone + 'static,
    F: Fn(&[T]) -> U + 'static,
{
    let latest: Rc<RefCell<Vec<T>>> =
        Rc::new(RefCell::new(inputs.iter().map(Signal::current).collect()));
    let combine: Rc<dyn Fn(&[T]) -> U> = Rc::new(combine);
    let initial = (*combine)(latest.borrow().as_slice());
    let signal = Signal::new(initial);

    let subscriptions = inputs
        .iter()
        .enumerate()
        .map(|(index, input)| {
            let latest = Rc::clone(&latest);
            let combine = Rc::clone(&combine);
            let output = signal.clone();
            input.subscribe(move |value: &T| {
                let next = {
                    let mut latest = latest.borrow_mut();
                    latest[index] = value.clone();
                    (*combine)(latest.as_slice())
                };
                output.emit(next);
            })
        })
        .collect();

    Derived {
        signal,
        subscriptions,
    }
}

/// `true` while every input is `true`. No inputs means `true`.
pub fn combine_all(inputs: &[Signal<bool>]) -> Derived<bool> {
    combine_latest(inputs, |values: &[bool]| values.iter().all(|v| *v))
}

/// `true` while any input is `true`. No inputs means `false`.
pub fn combine_any(inputs: &[Signal<bool>]) -> Derived<bool> {
    combine_latest(inputs, |values: &[bool]| values.iter().any(|v| *v))
}
