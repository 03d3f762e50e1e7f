//! Even distribution of new words across plan days.

use super::types::DayAllocation;

/// Splits `total_words` across `plan_days`, giving the first
/// `total_words % plan_days` days one extra word.
///
/// The result always sums to `total_words` and its max and min differ by at
/// most one. Returns an empty vec when `plan_days == 0`.
pub fn allocate(total_words: u64, plan_days: u32) -> Vec<u64> {
    if plan_days == 0 {
        return Vec::new();
    }

    let days = u64::from(plan_days);
    let base = total_words / days;
    let remainder = total_words % days;

    (0..days)
        .map(|i| if i < remainder { base + 1 } else { base })
        .collect()
}

pub fn allocate_days(total_words: u64, plan_days: u32) -> Vec<DayAllocation> {
    allocate(total_words, plan_days)
        .into_iter()
        .zip(1..)
        .map(|(new_words, day)| DayAllocation { day, new_words })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_front_loads_remainder() {
        assert_eq!(allocate(23, 5), vec![5, 5, 5, 4, 4]);
    }

    #[test]
    fn test_exact_division() {
        assert_eq!(allocate(100, 10), vec![10; 10]);
    }

    #[test]
    fn test_one_word_per_day() {
        assert_eq!(allocate(7, 7), vec![1; 7]);
    }

    #[test]
    fn test_zero_days() {
        assert!(allocate(10, 0).is_empty());
    }

    #[test]
    fn test_allocate_days_numbering() {
        let days = allocate_days(11, 3);
        assert_eq!(
            days,
            vec![
                DayAllocation { day: 1, new_words: 4 },
                DayAllocation { day: 2, new_words: 4 },
                DayAllocation { day: 3, new_words: 3 },
            ]
        );
    }
}
