//! Construction/destruction balance across the container's whole lifecycle.
//!
//! Every scenario drives the container with counted probe instances and
//! verifies that the net live-instance count returns to its baseline once
//! the containers are cleared or dropped - including on failure paths.

#![allow(
    clippy::arithmetic_side_effects,
    reason = "test code works with small, known values"
)]

use contig_vec::{ContigVec, Error};
use testing::{CountedInstance, DuplicationBudget, FlakyDuplicate, InstanceTally};

#[test]
fn counts_balance_through_reserve_append_clear_and_growth() {
    let tally = InstanceTally::new();

    {
        let mut values = ContigVec::<CountedInstance>::new();

        // One instance lives outside the container throughout the scenario.
        let outside = tally.instance();

        assert_eq!(values.len(), 0);
        assert_eq!(values.capacity(), 0);
        assert_eq!(tally.live(), 1);

        values.reserve(8).expect("small reservations succeed");

        // Reserved storage holds no constructed elements.
        assert_eq!(values.len(), 0);
        assert_eq!(values.capacity(), 8);
        assert_eq!(tally.live(), 1);

        for _ in 0..3 {
            values.push(tally.instance()).expect("capacity is reserved");
        }

        // Three elements live inside, one outside; no reallocation happened.
        assert_eq!(values.len(), 3);
        assert_eq!(values.capacity(), 8);
        assert_eq!(tally.live(), 4);

        values.clear();

        // Every contained element was destroyed exactly once.
        assert_eq!(values.len(), 0);
        assert_eq!(values.capacity(), 0);
        assert_eq!(tally.live(), 1);

        // Appending from the unallocated state walks the growth law:
        // capacity 1, 2, 3, 4, then 6.
        let expected_capacities = [1, 2, 3, 4, 6, 6];

        for (index, expected) in expected_capacities.into_iter().enumerate() {
            values.push(tally.instance()).expect("small growth succeeds");

            assert_eq!(values.len(), index + 1);
            assert_eq!(values.capacity(), expected, "capacity after push {}", index + 1);
            assert_eq!(tally.live(), index + 2);
        }

        drop(outside);
        assert_eq!(tally.live(), values.len());
    }

    // Dropping the container destroyed the remaining elements.
    assert_eq!(tally.live(), 0);
}

#[test]
fn counts_balance_through_the_duplicating_growth_path() {
    let tally = InstanceTally::new();
    let budget = DuplicationBudget::new(usize::MAX);

    {
        let mut values = ContigVec::with_capacity(4).expect("small allocations succeed");

        for value in 0..4_u64 {
            values
                .push(FlakyDuplicate::new(value, &tally, &budget))
                .expect("capacity is reserved");
        }
        assert_eq!(tally.live(), 4);

        // Growth duplicates all four elements into the new block and then
        // destroys the originals; the net count must not move.
        values.reserve(16).expect("small reservations succeed");

        assert_eq!(values.len(), 4);
        assert_eq!(values.capacity(), 16);
        assert_eq!(tally.live(), 4);
    }

    assert_eq!(tally.live(), 0);
}

#[test]
fn counts_balance_after_a_failed_growth() {
    let tally = InstanceTally::new();
    let budget = DuplicationBudget::new(2);

    {
        let mut values = ContigVec::with_capacity(4).expect("small allocations succeed");

        for value in 0..4_u64 {
            values
                .push(FlakyDuplicate::new(value, &tally, &budget))
                .expect("capacity is reserved");
        }
        assert_eq!(tally.live(), 4);

        // The transfer fails at the third element; the two duplicates
        // already placed must be destroyed during rollback.
        let error = values
            .reserve(8)
            .expect_err("the duplication budget only covers two elements");

        assert!(matches!(error, Error::Duplication { index: 2, .. }));
        assert_eq!(tally.live(), 4);
        assert_eq!(values.len(), 4);
        assert_eq!(values.capacity(), 4);
    }

    assert_eq!(tally.live(), 0);
}

#[test]
fn counts_balance_after_a_failed_clone() {
    let tally = InstanceTally::new();
    let budget = DuplicationBudget::new(1);

    let mut values = ContigVec::with_capacity(3).expect("small allocations succeed");
    for value in 0..3_u64 {
        values
            .push(FlakyDuplicate::new(value, &tally, &budget))
            .expect("capacity is reserved");
    }

    let error = values
        .try_clone()
        .expect_err("the duplication budget only covers one element");

    assert!(matches!(error, Error::Duplication { index: 1, .. }));
    assert_eq!(tally.live(), 3);
    assert_eq!(values.len(), 3);

    drop(values);
    assert_eq!(tally.live(), 0);
}
