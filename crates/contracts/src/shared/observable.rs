//! Single-threaded publish/subscribe cell for live collaborator data.
//!
//! A data source owns an [`Observable`] and replaces its value whenever fresh
//! data arrives; consumers read the current snapshot with [`Observable::get`]
//! and register for changes with [`Observable::subscribe`]. Listeners are not
//! invoked on subscription, only on later updates.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

type Listener<T> = Rc<dyn Fn(&T)>;

struct Slot<T> {
    value: T,
    next_id: u64,
    listeners: Vec<(u64, Listener<T>)>,
}

pub struct Observable<T> {
    slot: Rc<RefCell<Slot<T>>>,
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self {
            slot: Rc::clone(&self.slot),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let slot = self.slot.borrow();
        f.debug_struct("Observable")
            .field("value", &slot.value)
            .field("listeners", &slot.listeners.len())
            .finish()
    }
}

impl<T: Clone + 'static> Observable<T> {
    pub fn new(value: T) -> Self {
        Self {
            slot: Rc::new(RefCell::new(Slot {
                value,
                next_id: 0,
                listeners: Vec::new(),
            })),
        }
    }

    /// Current snapshot
    pub fn get(&self) -> T {
        self.slot.borrow().value.clone()
    }

    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.slot.borrow().value)
    }

    /// Replace the value and notify every listener
    pub fn set(&self, value: T) {
        self.slot.borrow_mut().value = value;
        self.notify();
    }

    /// Mutate the value in place and notify every listener
    pub fn update(&self, f: impl FnOnce(&mut T)) {
        f(&mut self.slot.borrow_mut().value);
        self.notify();
    }

    fn notify(&self) {
        // Listeners run without the slot borrowed, so they may read the value,
        // subscribe, or drop their own subscription.
        let (value, listeners) = {
            let slot = self.slot.borrow();
            let listeners: Vec<Listener<T>> =
                slot.listeners.iter().map(|(_, l)| Rc::clone(l)).collect();
            (slot.value.clone(), listeners)
        };
        for listener in listeners {
            listener(&value);
        }
    }

    pub fn subscribe(&self, listener: impl Fn(&T) + 'static) -> Subscription {
        let id = {
            let mut slot = self.slot.borrow_mut();
            let id = slot.next_id;
            slot.next_id += 1;
            slot.listeners.push((id, Rc::new(listener)));
            id
        };
        let weak: Weak<RefCell<Slot<T>>> = Rc::downgrade(&self.slot);
        Subscription {
            detach: Some(Box::new(move || {
                if let Some(slot) = weak.upgrade() {
                    slot.borrow_mut().listeners.retain(|(i, _)| *i != id);
                }
            })),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.slot.borrow().listeners.len()
    }
}

impl<T: Clone + Default + 'static> Default for Observable<T> {
    fn default() -> Self {
        Observable::new(T::default())
    }
}

/// Registration handle; dropping it unsubscribes
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    detach: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn unsubscribe(mut self) {
        self.detach_now();
    }

    fn detach_now(&mut self) {
        if let Some(detach) = self.detach.take() {
            detach();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.detach_now();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.detach.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_listeners_see_updates_not_initial_value() {
        let source = Observable::new(1);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let _sub = source.subscribe({
            let seen = Rc::clone(&seen);
            move |v: &i32| seen.borrow_mut().push(*v)
        });
        source.set(2);
        source.update(|v| *v += 10);
        assert_eq!(*seen.borrow(), vec![2, 12]);
        assert_eq!(source.get(), 12);
    }

    #[test]
    fn test_unsubscribe_and_drop_detach() {
        let source = Observable::new(0);
        let calls = Rc::new(Cell::new(0));
        let first = source.subscribe({
            let calls = Rc::clone(&calls);
            move |_: &i32| calls.set(calls.get() + 1)
        });
        let second = source.subscribe({
            let calls = Rc::clone(&calls);
            move |_: &i32| calls.set(calls.get() + 1)
        });
        assert_eq!(source.subscriber_count(), 2);

        source.set(1);
        assert_eq!(calls.get(), 2);

        first.unsubscribe();
        drop(second);
        assert_eq!(source.subscriber_count(), 0);
        source.set(2);
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_subscription_outliving_source_is_harmless() {
        let source = Observable::new(String::from("a"));
        let sub = source.subscribe(|_| {});
        drop(source);
        sub.unsubscribe();
    }

    #[test]
    fn test_listener_can_read_value_during_notification() {
        let source = Observable::new(5);
        let observed = Rc::new(Cell::new(0));
        let _sub = source.subscribe({
            let source = source.clone();
            let observed = Rc::clone(&observed);
            move |_: &i32| observed.set(source.get())
        });
        source.set(7);
        assert_eq!(observed.get(), 7);
    }
}
