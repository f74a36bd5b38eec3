#[cfg(test)]
mod tests {
    use crate::ListError;
    use crate::Rect;
    use crate::Size;
    use crate::Vec2;
    use crate::effects::*;
    use crate::signal::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_signal_basic() {
        let sig = signal(42);
        assert_eq!(sig.get(), 42);

        sig.set(100);
        assert_eq!(sig.get(), 100);

        sig.update(|v| *v += 1);
        assert_eq!(sig.get(), 101);
    }

    #[test]
    fn test_signal_subscription() {
        let sig = signal(0);
        let seen = Rc::new(RefCell::new(Vec::new()));

        let seen_clone = seen.clone();
        sig.subscribe(move |v| {
            seen_clone.borrow_mut().push(*v);
        });

        sig.set(42);
        sig.update(|v| *v += 1);
        assert_eq!(*seen.borrow(), vec![42, 43]);
    }

    #[test]
    fn test_signal_get_inside_subscriber() {
        let sig = signal(Vec2::ZERO);
        let observed = Rc::new(RefCell::new(None));

        let (sig2, observed2) = (sig.clone(), observed.clone());
        sig.subscribe(move |_| {
            *observed2.borrow_mut() = Some(sig2.get());
        });

        sig.set(Vec2::new(3.0, 4.0));
        assert_eq!(*observed.borrow(), Some(Vec2::new(3.0, 4.0)));
    }

    #[test]
    fn test_signal_unsubscribe() {
        let sig = signal(0);
        let calls = Rc::new(RefCell::new(0));

        let calls_clone = calls.clone();
        let id = sig.subscribe(move |_| *calls_clone.borrow_mut() += 1);
        sig.set(1);
        assert!(sig.unsubscribe(id));
        assert!(!sig.unsubscribe(id));
        sig.set(2);

        assert_eq!(*calls.borrow(), 1);
        assert_eq!(sig.subscriber_count(), 0);
    }

    #[test]
    fn test_subscription_on_non_clone_value() {
        struct Token;
        let sig = signal(Token);
        let other = sig.clone();

        let guard = subscription(&sig, |_: &Token| {});
        assert_eq!(other.subscriber_count(), 1);
        guard.run();
        assert_eq!(other.subscriber_count(), 0);
    }

    #[test]
    fn test_subscriber_may_unsubscribe_during_notify() {
        let sig = signal(0);
        let calls = Rc::new(RefCell::new(Vec::new()));
        let guard: Rc<RefCell<Option<Dispose>>> = Rc::new(RefCell::new(None));

        let (calls1, guard1) = (calls.clone(), guard.clone());
        let first = subscription(&sig, move |v| {
            calls1.borrow_mut().push(("first", *v));
            if let Some(d) = guard1.borrow_mut().take() {
                d.run();
            }
        });
        let calls2 = calls.clone();
        *guard.borrow_mut() = Some(subscription(&sig, move |v| {
            calls2.borrow_mut().push(("second", *v));
        }));

        sig.set(1);
        sig.set(2);

        // second was removed before its turn in the first notify
        assert_eq!(*calls.borrow(), vec![("first", 1), ("first", 2)]);
        assert_eq!(sig.subscriber_count(), 1);
        first.run();
    }

    #[test]
    fn test_subscriber_may_subscribe_during_notify() {
        let sig = signal(0);
        let sig2 = sig.clone();
        sig.subscribe(move |_| {
            sig2.subscribe(|_| {});
        });

        sig.set(1);
        assert_eq!(sig.subscriber_count(), 2);
    }

    #[test]
    fn test_dispose_runs_once() {
        let runs = Rc::new(RefCell::new(0));
        let runs_clone = runs.clone();
        let d = Dispose::new(move || *runs_clone.borrow_mut() += 1);

        assert!(!d.is_done());
        d.run();
        d.clone().run();
        assert!(d.is_done());
        assert_eq!(*runs.borrow(), 1);
    }

    #[test]
    fn test_subscription_guard_unsubscribes() {
        let sig = signal(0);
        let guard = subscription(&sig, |_| {});
        assert_eq!(sig.subscriber_count(), 1);
        guard.run();
        guard.run();
        assert_eq!(sig.subscriber_count(), 0);
    }

    #[test]
    fn test_rect_contains() {
        let rect = Rect {
            x: 10.0,
            y: 10.0,
            w: 100.0,
            h: 50.0,
        };

        assert!(rect.contains(Vec2 { x: 50.0, y: 30.0 }));
        assert!(!rect.contains(Vec2 { x: 5.0, y: 30.0 }));
        assert!(!rect.contains(Vec2 { x: 50.0, y: 70.0 }));
    }

    #[test]
    fn test_rect_from_top_left_flips_y() {
        let r = Rect::from_top_left(Vec2::new(100.0, -50.0), Size::new(100.0, 50.0));
        assert_eq!(
            r,
            Rect {
                x: 100.0,
                y: 50.0,
                w: 100.0,
                h: 50.0
            }
        );
    }

    #[test]
    fn test_size_is_positive() {
        assert!(Size::new(1.0, 1.0).is_positive());
        assert!(!Size::new(0.0, 1.0).is_positive());
        assert!(!Size::new(1.0, f32::NAN).is_positive());
    }

    #[test]
    fn test_error_classification() {
        assert!(ListError::MissingViewport.is_config());
        assert!(ListError::InvalidRowOrCol(0).is_config());
        assert!(!ListError::NegativeItemCount(-1).is_config());
        assert_eq!(
            ListError::NegativeItemCount(-3).to_string(),
            "item count must not be negative (got -3)"
        );
    }
}
