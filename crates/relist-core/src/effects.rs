use std::cell::RefCell;
use std::rc::Rc;

use crate::signal::Signal;

#[derive(Clone)]
pub struct Dispose(Rc<RefCell<Option<Box<dyn FnOnce()>>>>);

impl Dispose {
    pub fn new(f: impl FnOnce() + 'static) -> Self {
        Self(Rc::new(RefCell::new(Some(Box::new(f)))))
    }

    /// Runs at most once (safe to call multiple times).
    pub fn run(&self) {
        // take first so the cleanup runs with the slot released
        let f = self.0.borrow_mut().take();
        if let Some(f) = f {
            f()
        }
    }

    pub fn is_done(&self) -> bool {
        self.0.borrow().is_none()
    }
}

/// Subscribes `f` to `signal` and returns the guard that unsubscribes it.
pub fn subscription<T: 'static>(signal: &Signal<T>, f: impl Fn(&T) + 'static) -> Dispose {
    let id = signal.subscribe(f);
    let signal = signal.clone();
    Dispose::new(move || {
        signal.unsubscribe(id);
    })
}
