//! Fixed-capacity entity pools.
//!
//! A pool is an array of `N` slots. A slot is either active (`Some`) or
//! free (`None`); a freed slot carries no value, so stale entity data can
//! never be read back. Allocation scans linearly for the first free slot and
//! never grows the pool. Iteration always runs in slot order.

#[derive(Clone, Debug)]
pub struct Pool<T, const N: usize> {
    slots: [Option<T>; N],
}

impl<T, const N: usize> Pool<T, N> {
    pub fn new() -> Self {
        Self {
            slots: std::array::from_fn(|_| None),
        }
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    /// Place `value` in the first free slot and return its index, or `None`
    /// if every slot is taken (the value is dropped).
    pub fn allocate(&mut self, value: T) -> Option<usize> {
        let index = self.slots.iter().position(Option::is_none)?;
        self.slots[index] = Some(value);
        Some(index)
    }

    /// Free the slot at `index`, returning what it held. Out-of-range or
    /// already free indices are a no-op.
    pub fn deactivate(&mut self, index: usize) -> Option<T> {
        self.slots.get_mut(index)?.take()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.slots.get(index)?.as_ref()
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.slots.get_mut(index)?.as_mut()
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.get(index).is_some()
    }

    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_full(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Active entries with their slot indices.
    pub fn iter_active(&self) -> impl Iterator<Item = (usize, &T)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|value| (i, value)))
    }

    pub fn iter_active_mut(&mut self) -> impl Iterator<Item = (usize, &mut T)> {
        self.slots
            .iter_mut()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_mut().map(|value| (i, value)))
    }

    pub fn for_each_active(&self, mut f: impl FnMut(usize, &T)) {
        for (i, value) in self.iter_active() {
            f(i, value);
        }
    }

    /// Free every active slot for which `keep` returns false. Returns how
    /// many slots were freed.
    pub fn retain_active(&mut self, mut keep: impl FnMut(&T) -> bool) -> usize {
        let mut freed = 0;
        for slot in self.slots.iter_mut() {
            if slot.as_ref().is_some_and(|value| !keep(value)) {
                *slot = None;
                freed += 1;
            }
        }
        freed
    }
}

impl<T, const N: usize> Default for Pool<T, N> {
    fn default() -> Self {
        Self::new()
    }
}
