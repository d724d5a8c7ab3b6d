use menagerie_types::CreatureId;

/// Hands out creature identifiers in strict ascending order: 1, 2, 3, ...
///
/// A plain counter with no interior locking. It lives inside the creature
/// store's lock so that allocating an identifier and appending the record
/// form one atomic step; identifiers therefore come out dense even under
/// concurrent creation.
#[derive(Debug)]
pub struct IdAllocator {
    next: u64,
}

impl IdAllocator {
    /// Creates an allocator whose first issued identifier is 1.
    pub fn new() -> Self {
        Self {
            next: CreatureId::FIRST.value(),
        }
    }

    /// Issues the next identifier and advances the counter.
    pub fn next(&mut self) -> CreatureId {
        let id = CreatureId::new(self.next);
        self.next += 1;
        id
    }

    /// The identifier the next call to [`next`](Self::next) will issue.
    pub fn peek(&self) -> CreatureId {
        CreatureId::new(self.next)
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}
