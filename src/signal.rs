//! Per-frame progress delivery as an explicit subscribe/unsubscribe stream.
//!
//! Contract: `unsubscribe` is idempotent, and after it returns the callback is
//! never invoked again.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

struct Slot<T> {
    id: u64,
    callback: Box<dyn FnMut(&T)>,
}

pub struct Signal<T> {
    slots: Vec<Slot<T>>,
    next_id: u64,
}

impl<T> Default for Signal<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Signal<T> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            next_id: 0,
        }
    }

    pub fn subscribe(&mut self, callback: impl FnMut(&T) + 'static) -> SubscriptionId {
        let id = self.next_id;
        self.next_id += 1;
        self.slots.push(Slot {
            id,
            callback: Box::new(callback),
        });
        SubscriptionId(id)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.slots.retain(|slot| slot.id != id.0);
    }

    /// Drop every subscriber. Used on cancellation so stale callbacks cannot
    /// observe state mutated after teardown.
    pub fn clear(&mut self) {
        self.slots.clear();
    }

    pub fn emit(&mut self, value: &T) {
        for slot in &mut self.slots {
            (slot.callback)(value);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }
}

impl<T> std::fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Signal")
            .field("subscribers", &self.slots.len())
            .finish()
    }
}
