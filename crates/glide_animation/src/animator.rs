//! Animator: timelines embedded in a host model, advanced in lockstep
//!
//! An [`Animator`] owns no timelines. Each registration supplies a getter and
//! setter pair reaching one timeline field of the host model; the animator
//! keeps one type-erased slot per registration, in registration order, and
//! iterates that list for both the activity report and the step. An ordered
//! slot list instead of nested closures keeps the call stack flat and the
//! evaluation order observable.

use std::sync::Arc;
use std::time::Duration;

use smallvec::SmallVec;

use crate::timeline::Timeline;

/// What the host should do with its frame clock, given the current model.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Subscription {
    /// At least one registered timeline is still pending or in flight; keep
    /// delivering frame timestamps.
    Frames,
    /// Every registered timeline is complete; the clock can stop.
    None,
}

struct Slot<M> {
    is_active: Box<dyn Fn(&M) -> bool>,
    advance: Box<dyn Fn(&mut M, u64)>,
}

/// Aggregate over every timeline registered against a host model.
///
/// Reports whether any of them is still active and advances all of them from
/// a single timestamp. Registrations must target disjoint fields of the
/// model.
pub struct Animator<M> {
    slots: SmallVec<[Slot<M>; 4]>,
}

impl<M> Animator<M> {
    /// Identity animator: inactive for every model, stepping is a no-op.
    pub fn new() -> Self {
        Self {
            slots: SmallVec::new(),
        }
    }

    /// Register one timeline slot.
    ///
    /// `getter` and `setter` must reach the same field of the model, and a
    /// field no other registration touches. Slots are advanced in
    /// registration order on every step; the order never affects final
    /// values, only evaluation order.
    pub fn animate<T, G, S>(mut self, getter: G, setter: S) -> Self
    where
        T: Clone + 'static,
        G: for<'a> Fn(&'a M) -> &'a Timeline<T> + 'static,
        S: Fn(&mut M, Timeline<T>) + 'static,
    {
        let getter = Arc::new(getter);
        let probe = Arc::clone(&getter);
        self.slots.push(Slot {
            is_active: Box::new(move |model| probe(model).is_active()),
            advance: Box::new(move |model, now_ms| {
                let next = getter(model).clone().advance(now_ms);
                setter(model, next);
            }),
        });
        self
    }

    /// True when any registered timeline is still pending or in flight.
    /// Short-circuits in registration order.
    pub fn is_active(&self, model: &M) -> bool {
        self.slots.iter().any(|slot| (slot.is_active)(model))
    }

    /// Frame clock request for the current model state.
    ///
    /// Recompute after every model change so the host starts and stops its
    /// clock exactly when activity starts and stops; nothing polls.
    pub fn subscription(&self, model: &M) -> Subscription {
        if self.is_active(model) {
            Subscription::Frames
        } else {
            Subscription::None
        }
    }

    /// Advance every registered timeline to `timestamp`.
    ///
    /// The timestamp is truncated to the model's whole-millisecond clock.
    /// One synchronous pass in registration order; each setter runs before
    /// the next getter, so later slots observe a model already updated by
    /// earlier ones.
    pub fn step(&self, timestamp: Duration, model: &mut M) {
        self.step_ms(timestamp.as_millis() as u64, model);
    }

    /// [`step`](Self::step) with a clock reading already in milliseconds.
    pub fn step_ms(&self, now_ms: u64, model: &mut M) {
        for slot in &self.slots {
            (slot.advance)(model, now_ms);
        }
    }

    /// Number of registered slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl<M> Default for Animator<M> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::easing::Easing;
    use crate::interpolate::f32_lerp;
    use crate::timeline::TimelineConfig;

    struct Model {
        opacity: Timeline<f32>,
        offset: Timeline<f32>,
    }

    fn tween(start: f32, end: f32, duration_ms: u32) -> Timeline<f32> {
        Timeline::new(TimelineConfig {
            duration_ms,
            easing: Easing::Linear,
            start,
            end,
            interpolate: f32_lerp(),
        })
    }

    fn animator() -> Animator<Model> {
        Animator::new()
            .animate(|m: &Model| &m.opacity, |m, tl| m.opacity = tl)
            .animate(|m: &Model| &m.offset, |m, tl| m.offset = tl)
    }

    #[test]
    fn empty_animator_is_inert() {
        let animator = Animator::<Model>::new();
        let mut model = Model {
            opacity: tween(0.0, 1.0, 100),
            offset: Timeline::fixed(0.0),
        };
        assert!(animator.is_empty());
        assert!(!animator.is_active(&model));
        assert_eq!(animator.subscription(&model), Subscription::None);
        animator.step_ms(50, &mut model);
        // Untouched: the tween is not registered, so it never starts.
        assert!(model.opacity.is_active());
        assert_eq!(*model.opacity.value(), 0.0);
    }

    #[test]
    fn one_running_timeline_keeps_frames_requested() {
        let animator = animator();
        let mut model = Model {
            opacity: Timeline::fixed(1.0),
            offset: tween(0.0, 10.0, 100),
        };
        assert_eq!(animator.subscription(&model), Subscription::Frames);

        animator.step_ms(0, &mut model);
        animator.step_ms(100, &mut model);
        assert_eq!(animator.subscription(&model), Subscription::None);
        assert_eq!(*model.offset.value(), 10.0);
    }

    #[test]
    fn step_advances_all_slots_from_one_timestamp() {
        let animator = animator();
        let mut model = Model {
            opacity: tween(0.0, 1.0, 1000),
            offset: tween(0.0, 200.0, 1000),
        };
        animator.step_ms(0, &mut model);
        animator.step_ms(500, &mut model);
        assert_eq!(*model.opacity.value(), 0.5);
        assert_eq!(*model.offset.value(), 100.0);
    }

    #[test]
    fn step_with_same_timestamp_is_idempotent() {
        let animator = animator();
        let mut model = Model {
            opacity: tween(0.0, 1.0, 1000),
            offset: tween(0.0, 200.0, 1000),
        };
        animator.step_ms(0, &mut model);
        animator.step_ms(250, &mut model);
        let first = *model.opacity.value();
        animator.step_ms(250, &mut model);
        assert_eq!(*model.opacity.value(), first);
    }

    #[test]
    fn slots_advance_in_registration_order() {
        use std::cell::RefCell;
        use std::rc::Rc;

        struct Traced {
            a: Timeline<f32>,
            b: Timeline<f32>,
        }

        let order: Rc<RefCell<Vec<&'static str>>> = Rc::default();
        let first = Rc::clone(&order);
        let second = Rc::clone(&order);
        let animator = Animator::new()
            .animate(
                |m: &Traced| &m.a,
                move |m, tl| {
                    first.borrow_mut().push("a");
                    m.a = tl;
                },
            )
            .animate(
                |m: &Traced| &m.b,
                move |m, tl| {
                    second.borrow_mut().push("b");
                    m.b = tl;
                },
            );
        assert_eq!(animator.len(), 2);

        let mut model = Traced {
            a: tween(0.0, 1.0, 10),
            b: tween(0.0, 1.0, 10),
        };
        animator.step_ms(0, &mut model);
        animator.step_ms(5, &mut model);
        assert_eq!(*order.borrow(), ["a", "b", "a", "b"]);
    }
}
