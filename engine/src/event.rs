//! Change events and the per-simulation subscriber list.

use std::fmt;

/// What produced a [`ChangeEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeKind {
    /// The starting board. Every cell is listed.
    Initialized,
    /// One rule step. Only cells that flipped are listed.
    Stepped,
    /// A host override. Every written cell is listed, changed or not.
    Overridden,
}

/// The cells that changed in one emission, with their new values.
///
/// `flipped_indices[i]` and `new_states[i]` describe the same cell. Indices
/// are ascending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEvent {
    board_size: usize,
    tick: u64,
    kind: ChangeKind,
    flipped_indices: Vec<usize>,
    new_states: Vec<bool>,
}

impl ChangeEvent {
    pub(crate) fn new(
        board_size: usize,
        tick: u64,
        kind: ChangeKind,
        flipped_indices: Vec<usize>,
        new_states: Vec<bool>,
    ) -> Self {
        debug_assert_eq!(flipped_indices.len(), new_states.len());
        Self {
            board_size,
            tick,
            kind,
            flipped_indices,
            new_states,
        }
    }

    pub fn board_size(&self) -> usize {
        self.board_size
    }

    /// Tick count when the event was emitted. Step events carry the number of
    /// the step that produced them, starting at 1.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn kind(&self) -> ChangeKind {
        self.kind
    }

    pub fn flipped_indices(&self) -> &[usize] {
        &self.flipped_indices
    }

    pub fn new_states(&self) -> &[bool] {
        &self.new_states
    }

    pub fn len(&self) -> usize {
        self.flipped_indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flipped_indices.is_empty()
    }

    /// `(index, new_value)` pairs in ascending index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, bool)> + '_ {
        self.flipped_indices
            .iter()
            .copied()
            .zip(self.new_states.iter().copied())
    }

    /// Board coordinates `(x, y)` of a flat index.
    pub fn coordinates(&self, index: usize) -> (usize, usize) {
        (index % self.board_size, index / self.board_size)
    }

    /// `(x, y, new_value)` for every listed cell.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, bool)> + '_ {
        self.iter().map(|(index, alive)| {
            let (x, y) = self.coordinates(index);
            (x, y, alive)
        })
    }
}

/// Handle returned by [`ChangeNotifier::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Handler = Box<dyn FnMut(&ChangeEvent) + Send>;

/// Delivers change events to handlers, synchronously and in subscription
/// order. A panicking handler is not caught.
#[derive(Default)]
pub struct ChangeNotifier {
    next_id: u64,
    handlers: Vec<(SubscriptionId, Handler)>,
}

impl ChangeNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&mut self, handler: F) -> SubscriptionId
    where
        F: FnMut(&ChangeEvent) + Send + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.handlers.push((id, Box::new(handler)));
        id
    }

    /// Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.handlers.len();
        self.handlers.retain(|(existing, _)| *existing != id);
        self.handlers.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.handlers.len()
    }

    pub fn publish(&mut self, event: &ChangeEvent) {
        for (_, handler) in self.handlers.iter_mut() {
            handler(event);
        }
    }
}

impl fmt::Debug for ChangeNotifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeNotifier")
            .field("subscribers", &self.handlers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn event(indices: Vec<usize>, states: Vec<bool>) -> ChangeEvent {
        ChangeEvent::new(4, 1, ChangeKind::Stepped, indices, states)
    }

    #[test]
    fn handlers_run_in_subscription_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut notifier = ChangeNotifier::new();
        for name in ["first", "second", "third"] {
            let log = Arc::clone(&log);
            notifier.subscribe(move |_| log.lock().unwrap().push(name));
        }

        notifier.publish(&event(vec![0], vec![true]));
        assert_eq!(*log.lock().unwrap(), vec!["first", "second", "third"]);
    }

    #[test]
    fn unsubscribed_handler_stops_receiving() {
        let count = Arc::new(Mutex::new(0));
        let mut notifier = ChangeNotifier::new();
        let id = {
            let count = Arc::clone(&count);
            notifier.subscribe(move |_| *count.lock().unwrap() += 1)
        };

        notifier.publish(&event(vec![], vec![]));
        assert!(notifier.unsubscribe(id));
        assert!(!notifier.unsubscribe(id));
        notifier.publish(&event(vec![], vec![]));

        assert_eq!(*count.lock().unwrap(), 1);
        assert_eq!(notifier.subscriber_count(), 0);
    }

    #[test]
    fn publishing_with_no_subscribers_is_fine() {
        ChangeNotifier::new().publish(&event(vec![1, 2], vec![true, false]));
    }

    #[test]
    #[should_panic(expected = "render failed")]
    fn handler_panics_propagate() {
        let mut notifier = ChangeNotifier::new();
        notifier.subscribe(|_| panic!("render failed"));
        notifier.publish(&event(vec![], vec![]));
    }

    #[test]
    fn recovers_coordinates() {
        let e = event(vec![1, 6, 15], vec![true, false, true]);
        let cells: Vec<_> = e.cells().collect();
        assert_eq!(cells, vec![(1, 0, true), (2, 1, false), (3, 3, true)]);
        assert_eq!(e.len(), 3);
    }
}
