use egui::Rect;

use super::collaborator::SortableList;
use super::types::ListId;

/// A mounted list, as seen by the drag layer.
#[derive(Debug)]
pub struct Registration<L> {
    pub id: ListId,
    pub list: L,
}

/// The lists currently mounted on one [`super::DragLayer`], in registration order.
///
/// Registration order is the collision tie-break order, so it is kept stable: unregistering
/// a list never reorders the remaining ones.
#[derive(Debug)]
pub struct ContainerRegistry<L> {
    entries: Vec<Registration<L>>,
    slots: ahash::HashMap<ListId, usize>,
}

impl<L> Default for ContainerRegistry<L> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            slots: Default::default(),
        }
    }
}

impl<L> ContainerRegistry<L> {
    /// Add a list. Registering an id twice replaces the list in place and returns the old one.
    pub fn register(&mut self, id: ListId, list: L) -> Option<L> {
        if let Some(&slot) = self.slots.get(&id) {
            return Some(std::mem::replace(&mut self.entries[slot].list, list));
        }
        self.slots.insert(id, self.entries.len());
        self.entries.push(Registration { id, list });
        None
    }

    /// Remove a list by id. No-op if it isn't registered.
    pub fn unregister(&mut self, id: ListId) -> Option<L> {
        let slot = self.slots.remove(&id)?;
        let removed = self.entries.remove(slot);
        for (i, entry) in self.entries.iter().enumerate().skip(slot) {
            self.slots.insert(entry.id, i);
        }
        Some(removed.list)
    }

    pub fn contains(&self, id: ListId) -> bool {
        self.slots.contains_key(&id)
    }

    pub fn get(&self, id: ListId) -> Option<&L> {
        let slot = *self.slots.get(&id)?;
        self.entries.get(slot).map(|entry| &entry.list)
    }

    pub fn get_mut(&mut self, id: ListId) -> Option<&mut L> {
        let slot = *self.slots.get(&id)?;
        self.entries.get_mut(slot).map(|entry| &mut entry.list)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = ListId> + '_ {
        self.entries.iter().map(|entry| entry.id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Registration<L>> {
        self.entries.iter()
    }
}

impl<L: SortableList> ContainerRegistry<L> {
    /// Container bounds of every registered list, in registration order.
    ///
    /// This is a value snapshot: nothing in it borrows the lists.
    pub fn snapshot(&self) -> Vec<(ListId, Rect)> {
        self.entries
            .iter()
            .map(|entry| (entry.id, entry.list.container_bounds()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unregister_keeps_order_of_the_rest() {
        let mut registry = ContainerRegistry::default();
        for i in 0..4 {
            assert!(registry.register(ListId(i), i * 10).is_none());
        }
        assert_eq!(registry.unregister(ListId(1)), Some(10));
        assert_eq!(
            registry.ids().collect::<Vec<_>>(),
            vec![ListId(0), ListId(2), ListId(3)]
        );
        assert_eq!(registry.get(ListId(3)), Some(&30));
        assert_eq!(registry.get(ListId(1)), None);
    }

    #[test]
    fn unregister_unknown_is_noop() {
        let mut registry: ContainerRegistry<u32> = ContainerRegistry::default();
        registry.register(ListId(7), 1);
        assert_eq!(registry.unregister(ListId(8)), None);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn registering_twice_replaces_in_place() {
        let mut registry = ContainerRegistry::default();
        registry.register(ListId(1), "a");
        registry.register(ListId(2), "b");
        assert_eq!(registry.register(ListId(1), "c"), Some("a"));
        assert_eq!(registry.ids().collect::<Vec<_>>(), vec![ListId(1), ListId(2)]);
        assert_eq!(registry.get(ListId(1)), Some(&"c"));
    }
}
