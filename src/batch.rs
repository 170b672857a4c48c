/// Outcome of offering one key to the accumulator.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Offer {
    /// The key was stored and capacity remains
    Accepted,
    /// The key was stored and the batch is now at capacity
    Full,
    /// The batch was already at capacity, the key was not stored
    Rejected,
}

// Fixed capacity key accumulator. The backing allocation is made once and
// reused for every batch in the run.
pub(crate) struct Batch {
    keys: Vec<u32>,
    capacity: usize,
}

impl Batch {
    pub(crate) fn new(capacity: usize) -> Batch {
        Batch {
            keys: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub(crate) fn offer(&mut self, key: u32) -> Offer {
        if self.keys.len() == self.capacity {
            return Offer::Rejected;
        }
        self.keys.push(key);
        if self.keys.len() == self.capacity {
            Offer::Full
        } else {
            Offer::Accepted
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.keys.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub(crate) fn keys_mut(&mut self) -> &mut [u32] {
        self.keys.as_mut_slice()
    }

    pub(crate) fn clear(&mut self) {
        self.keys.clear();
    }
}
