use std::cell::RefCell;
use std::rc::Rc;

pub type SubId = usize;

pub struct Signal<T: 'static>(Rc<RefCell<Inner<T>>>);

impl<T> Clone for Signal<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

struct Inner<T> {
    value: T,
    next_id: SubId,
    subs: Vec<(SubId, Rc<dyn Fn(&T)>)>,
}

impl<T> Signal<T> {
    pub fn new(value: T) -> Self {
        Self(Rc::new(RefCell::new(Inner {
            value,
            next_id: 0,
            subs: Vec::new(),
        })))
    }
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.0.borrow().value.clone()
    }
    /// Stores `v` and notifies subscribers.
    pub fn set(&self, v: T)
    where
        T: Clone,
    {
        self.0.borrow_mut().value = v;
        self.notify();
    }
    pub fn update<F: FnOnce(&mut T)>(&self, f: F)
    where
        T: Clone,
    {
        f(&mut self.0.borrow_mut().value);
        self.notify();
    }
    pub fn subscribe(&self, f: impl Fn(&T) + 'static) -> SubId {
        let mut inner = self.0.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.subs.push((id, Rc::new(f)));
        id
    }
    /// Returns false if `id` was not subscribed.
    pub fn unsubscribe(&self, id: SubId) -> bool {
        let mut inner = self.0.borrow_mut();
        let before = inner.subs.len();
        inner.subs.retain(|(sub, _)| *sub != id);
        inner.subs.len() != before
    }
    pub fn subscriber_count(&self) -> usize {
        self.0.borrow().subs.len()
    }

    fn is_subscribed(&self, id: SubId) -> bool {
        self.0.borrow().subs.iter().any(|(sub, _)| *sub == id)
    }

    /// Runs subscribers with the signal released, so they may subscribe,
    /// unsubscribe or read. A subscriber removed mid-notify is skipped.
    fn notify(&self)
    where
        T: Clone,
    {
        let (value, subs) = {
            let inner = self.0.borrow();
            (inner.value.clone(), inner.subs.clone())
        };
        for (id, s) in subs {
            if self.is_subscribed(id) {
                s(&value);
            }
        }
    }
}

pub fn signal<T>(t: T) -> Signal<T> {
    Signal::new(t)
}
