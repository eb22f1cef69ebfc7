use std::cell::Cell;
use std::rc::Rc;

use contig_vec::{DuplicateError, Relocate};

/// Issues probe instances and reports how many of them are currently alive.
///
/// Creating an instance from the tally and duplicating one both increment
/// the live count; dropping an instance decrements it. A container that
/// balances construction and destruction on every code path - including
/// failed reallocations - therefore returns the tally to its prior value
/// once all instances it held are gone.
///
/// Single-threaded by design, like the container it observes.
#[derive(Clone, Debug, Default)]
pub struct InstanceTally {
    live: Rc<Cell<usize>>,
}

impl InstanceTally {
    /// Creates a tally with no live instances.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a probe instance counted by this tally.
    #[must_use]
    pub fn instance(&self) -> CountedInstance {
        // Cannot overflow: every live instance occupies memory.
        self.live.set(self.live.get().wrapping_add(1));

        CountedInstance {
            live: Rc::clone(&self.live),
        }
    }

    /// Number of probe instances currently alive.
    #[must_use]
    pub fn live(&self) -> usize {
        self.live.get()
    }
}

/// A probe instance counted by an [`InstanceTally`].
///
/// Construction and duplication increment the tally, destruction decrements
/// it. Bitwise relocation does neither, which is exactly what makes the
/// probe useful: only real constructions and destructions move the count.
#[derive(Debug)]
pub struct CountedInstance {
    live: Rc<Cell<usize>>,
}

impl Clone for CountedInstance {
    fn clone(&self) -> Self {
        // Cannot overflow: every live instance occupies memory.
        self.live.set(self.live.get().wrapping_add(1));

        Self {
            live: Rc::clone(&self.live),
        }
    }
}

impl Drop for CountedInstance {
    fn drop(&mut self) {
        // Cannot underflow: each instance decrements exactly once, matching
        // the increment from its construction.
        self.live.set(self.live.get().wrapping_sub(1));
    }
}

impl Relocate for CountedInstance {
    fn try_duplicate(&self) -> Result<Self, DuplicateError> {
        Ok(self.clone())
    }
}
