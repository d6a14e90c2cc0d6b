//! Demonstration entry list used when no entry file is given.

use lottery_engine::input::{EntryList, InputResult, parse_manual_entries};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use std::collections::BTreeSet;

/// Number of generated entries
pub const DEMO_ENTRY_COUNT: usize = 50;

/// Winners drawn from the demo list
pub const DEMO_WINNERS: i64 = 15;

const DEMO_SEED: u64 = 42;

/// Generate 50 unique `REG-dddd` entries in sorted order.
///
/// The generator is seeded, so every run sees the same list.
pub fn generate_default_entries() -> InputResult<EntryList> {
    let mut rng = ChaCha20Rng::seed_from_u64(DEMO_SEED);
    let mut numbers = BTreeSet::new();
    while numbers.len() < DEMO_ENTRY_COUNT {
        numbers.insert(rng.random_range(1000..=9999u32));
    }

    let text = numbers
        .iter()
        .map(|n| format!("REG-{n}"))
        .collect::<Vec<_>>()
        .join("\n");
    parse_manual_entries(&text, DEMO_WINNERS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_list_shape() {
        let list = generate_default_entries().unwrap();
        let numbers: Vec<&str> = list.registration_numbers().collect();

        assert_eq!(numbers.len(), DEMO_ENTRY_COUNT);
        assert_eq!(list.winners_to_pick, 15);
        assert!(numbers.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(numbers.iter().all(|n| {
            n.strip_prefix("REG-")
                .and_then(|digits| digits.parse::<u32>().ok())
                .is_some_and(|value| (1000..=9999).contains(&value))
        }));
    }

    #[test]
    fn test_demo_list_is_stable() {
        let first: Vec<String> = generate_default_entries()
            .unwrap()
            .registration_numbers()
            .map(str::to_string)
            .collect();
        let second: Vec<String> = generate_default_entries()
            .unwrap()
            .registration_numbers()
            .map(str::to_string)
            .collect();
        assert_eq!(first, second);
    }
}
