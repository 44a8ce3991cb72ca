/// Generational slot pool.
/// Freed slots are recycled through `free_list`; every reuse bumps the
/// generation so a stale `ArenaSlot` never resolves to the new occupant.
#[derive(Debug, Clone)]
pub struct Arena<T> {
    pool: Vec<Entry<T>>,
    free_list: Vec<usize>,
    live: usize,
}

#[derive(Debug, Clone)]
enum Entry<T> {
    None {
        before_gen_id: u32,
    },
    Some {
        value: T,
        gen_id: u32,
    },
}

impl<T> Entry<T> {
    fn gen_id(&self) -> u32 {
        match self {
            Entry::None { before_gen_id } => *before_gen_id,
            Entry::Some { gen_id, .. } => *gen_id,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArenaSlot {
    idx: u32,
    gen_id: u32,
}

impl ArenaSlot {
    fn new(index: usize, gen_id: u32) -> Self {
        Self {
            idx: index as u32,
            gen_id,
        }
    }
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Arena<T> {
    pub fn new() -> Self {
        Self {
            pool: Vec::new(),
            free_list: Vec::new(),
            live: 0,
        }
    }

    /// number of occupied slots
    pub fn len(&self) -> usize {
        self.live
    }

    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    pub fn alloc(&mut self, value: T) -> ArenaSlot {
        self.live += 1;
        if let Some(free_idx) = self.free_list.pop() {
            let entry = &mut self.pool[free_idx];
            let gen_id = entry.gen_id().wrapping_add(1);
            *entry = Entry::Some { value, gen_id };
            ArenaSlot::new(free_idx, gen_id)
        } else {
            self.pool.push(Entry::Some { value, gen_id: 0 });
            ArenaSlot::new(self.pool.len() - 1, 0)
        }
    }

    /// Frees the slot and hands back its value.
    /// A stale or already freed slot yields `None` and changes nothing.
    pub fn dealloc(&mut self, slot: ArenaSlot) -> Option<T> {
        let entry = self.pool.get_mut(slot.idx as usize)?;
        match entry {
            Entry::Some { gen_id, .. } if *gen_id == slot.gen_id => {
                let before_gen_id = *gen_id;
                let freed = std::mem::replace(entry, Entry::None { before_gen_id });
                self.free_list.push(slot.idx as usize);
                self.live -= 1;
                match freed {
                    Entry::Some { value, .. } => Some(value),
                    Entry::None { .. } => None,
                }
            }
            _ => None,
        }
    }

    pub fn get(&self, slot: ArenaSlot) -> Option<&T> {
        match self.pool.get(slot.idx as usize)? {
            Entry::Some { value, gen_id } if *gen_id == slot.gen_id => Some(value),
            _ => None,
        }
    }

    pub fn get_mut(&mut self, slot: ArenaSlot) -> Option<&mut T> {
        match self.pool.get_mut(slot.idx as usize)? {
            Entry::Some { value, gen_id } if *gen_id == slot.gen_id => Some(value),
            _ => None,
        }
    }

    /// Drops every value; outstanding slots become stale.
    pub fn clear(&mut self) {
        self.pool.clear();
        self.free_list.clear();
        self.live = 0;
    }
}
