use std::cell::Cell;
use std::rc::Rc;

use contig_vec::{DuplicateError, Relocate};

use crate::{CountedInstance, InstanceTally};

/// Shared allowance controlling how many duplications succeed before every
/// further attempt fails.
///
/// Cloned handles share the same allowance, so one budget can govern every
/// element in a container.
#[derive(Clone, Debug)]
pub struct DuplicationBudget {
    remaining: Rc<Cell<usize>>,
}

impl DuplicationBudget {
    /// Creates a budget allowing exactly `successes` duplications.
    #[must_use]
    pub fn new(successes: usize) -> Self {
        Self {
            remaining: Rc::new(Cell::new(successes)),
        }
    }

    /// Duplications still allowed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.remaining.get()
    }

    /// Consumes one allowed duplication, or reports exhaustion.
    fn draw(&self) -> Result<(), DuplicateError> {
        let remaining = self.remaining.get();

        if remaining == 0 {
            return Err(DuplicateError::new("duplication budget exhausted"));
        }

        self.remaining.set(remaining.wrapping_sub(1));
        Ok(())
    }
}

/// Duplication-failure injector: duplicates successfully while its budget
/// lasts, then fails every further attempt.
///
/// Opts out of bitwise relocation so that growth is forced through the
/// duplicating transfer, where the failure can strike partway. Carries a
/// [`CountedInstance`] so leak checks cover the failure paths, and a payload
/// value so rollback checks can verify element content afterwards.
#[derive(Debug)]
pub struct FlakyDuplicate {
    value: u64,
    budget: DuplicationBudget,
    probe: CountedInstance,
}

impl FlakyDuplicate {
    /// Creates an injector with the given payload, counted by `tally` and
    /// governed by `budget`.
    #[must_use]
    pub fn new(value: u64, tally: &InstanceTally, budget: &DuplicationBudget) -> Self {
        Self {
            value,
            budget: budget.clone(),
            probe: tally.instance(),
        }
    }

    /// The payload value.
    #[must_use]
    pub fn value(&self) -> u64 {
        self.value
    }
}

impl Relocate for FlakyDuplicate {
    const BITWISE_MOVE: bool = false;

    fn try_duplicate(&self) -> Result<Self, DuplicateError> {
        self.budget.draw()?;

        Ok(Self {
            value: self.value,
            budget: self.budget.clone(),
            probe: self.probe.clone(),
        })
    }
}
