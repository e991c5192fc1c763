//! Draw the same skewed population through both engines.
//!
//! The two-tier table and the direct baseline represent the same
//! distribution; the table pays a one-time preprocessing cost so that each
//! draw is two array lookups regardless of population size.

use dartboard::{DartBoard, Method};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Few heavy hitters, a tail of rare values.
    let entries: Vec<(u32, f64)> = vec![
        (1, 0.25),
        (2, 0.40),
        (7, 0.20),
        (11, 0.10),
        (23, 0.04),
        (42, 0.01),
    ];

    let mut two_tier = DartBoard::with_seed(entries.clone(), Method::TwoTier, 7)?;
    let mut simple = DartBoard::with_seed(entries.clone(), Method::Simple, 7)?;

    println!("population:");
    for (value, probability) in &entries {
        println!("  value={value:3}  p={probability:.2}");
    }
    println!();
    println!(
        "two-tier: {} weight buckets, {} table slots",
        two_tier.tier_one_size(),
        two_tier.selection_table_len()
    );

    let picks_tt: Vec<u32> = (0..16).map(|_| two_tier.draw()).collect();
    let picks_s: Vec<u32> = (0..16).map(|_| simple.draw()).collect();

    println!();
    println!("two-tier draws: {picks_tt:?}");
    println!("baseline draws: {picks_s:?}");

    Ok(())
}
