//! Basic usage of [`ContigVec`]: appending, reading and clearing.

use contig_vec::{ContigVec, Error};

fn main() -> Result<(), Error> {
    println!("=== ContigVec Basic Example ===");
    println!();

    let mut names = ContigVec::new();

    names.push("Ada".to_string())?;
    names.push("Grace".to_string())?;
    names.push("Edsger".to_string())?;

    println!(
        "After three appends: length={}, capacity={}",
        names.len(),
        names.capacity()
    );

    for (index, name) in names.iter().enumerate() {
        println!("  [{index}] {name}");
    }

    // Elements are constructed in place when that is preferable.
    // SAFETY: The closure initializes the slot.
    unsafe {
        names.push_with(|slot| {
            slot.write(format!("{}-{}", "Donald", 1974));
        })?;
    }

    println!("After in-place construction: length={}", names.len());

    let duplicate = names.try_clone()?;
    println!(
        "Cloned into an independent container: {} elements, distinct storage: {}",
        duplicate.len(),
        duplicate.as_ptr() != names.as_ptr()
    );

    names.clear();
    println!(
        "After clear: length={}, capacity={}",
        names.len(),
        names.capacity()
    );

    println!();
    println!("Basic example completed successfully!");

    Ok(())
}
