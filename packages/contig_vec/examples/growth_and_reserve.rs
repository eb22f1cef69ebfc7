//! Demonstrates capacity management of [`ContigVec`].
//!
//! This example shows how capacity grows as elements are appended, how
//! reservation avoids reallocations, and how clearing releases all storage.

use contig_vec::{ContigVec, Error};

const BATCH_SIZE: usize = 1000;

/// Demonstrates automatic capacity growth as elements are appended.
fn demonstrate_capacity_growth() -> Result<(), Error> {
    println!("Example 1: Automatic capacity growth");
    println!("------------------------------------");

    let mut values = ContigVec::new();

    println!("Initial state:");
    println!("  Length: {}, Capacity: {}", values.len(), values.capacity());

    for value in 0..8_u64 {
        values.push(value)?;
        println!(
            "  After appending {}: Length={}, Capacity={}",
            value,
            values.len(),
            values.capacity()
        );
    }

    println!();
    Ok(())
}

/// Demonstrates pre-allocating capacity to avoid reallocations.
fn demonstrate_capacity_reservation() -> Result<(), Error> {
    println!("Example 2: Pre-allocating capacity");
    println!("----------------------------------");

    let mut values = ContigVec::new();

    values.reserve(BATCH_SIZE)?;
    println!("Reserved capacity for {BATCH_SIZE} elements");

    let block = values.as_ptr();

    for index in 0..BATCH_SIZE {
        values.push(format!("Item {index}"))?;
    }

    println!("After appending {BATCH_SIZE} elements:");
    println!("  Length: {}, Capacity: {}", values.len(), values.capacity());
    println!(
        "  Storage block unchanged: {}",
        std::ptr::eq(values.as_ptr(), block)
    );

    println!();
    Ok(())
}

/// Demonstrates that clearing releases the storage entirely.
fn demonstrate_clear() -> Result<(), Error> {
    println!("Example 3: Clearing releases storage");
    println!("------------------------------------");

    let mut values = ContigVec::filled(64, &0_u32)?;
    println!(
        "Filled container: Length={}, Capacity={}",
        values.len(),
        values.capacity()
    );

    values.clear();
    println!(
        "After clear():    Length={}, Capacity={}",
        values.len(),
        values.capacity()
    );

    println!();
    Ok(())
}

fn main() -> Result<(), Error> {
    println!("=== ContigVec Capacity Management Examples ===");
    println!();

    demonstrate_capacity_growth()?;
    demonstrate_capacity_reservation()?;
    demonstrate_clear()?;

    println!("Capacity management guidance:");
    println!("- Use reserve() when the element count is known in advance");
    println!("- Growth scales capacity by 3/2, always adding at least one slot");
    println!("- clear() destroys all elements and releases the whole block");
    println!();
    println!("Capacity management example completed successfully!");

    Ok(())
}
