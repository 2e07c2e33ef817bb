use crate::utils::error::{HelloError, Result};

/// Sum of two integers. The sum must fit in `i64`; use [`try_add`] for
/// operands that come from outside the program.
pub fn add(a: i64, b: i64) -> i64 {
    a + b
}

pub fn try_add(a: i64, b: i64) -> Result<i64> {
    a.checked_add(b)
        .ok_or(HelloError::Overflow { lhs: a, rhs: b })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const SAMPLES: [i64; 9] = [0, 1, -1, 2, 3, -42, 1_000_000, i64::MAX / 2, i64::MIN / 2];

    #[test]
    fn test_add_scenarios() {
        assert_eq!(add(2, 3), 5);
        assert_eq!(add(0, 0), 0);
        assert_eq!(add(-1, 1), 0);
    }

    #[test]
    fn test_add_commutative_and_identity() {
        for &a in &SAMPLES {
            assert_eq!(add(a, 0), a);
            for &b in &SAMPLES {
                assert_eq!(add(a, b), add(b, a));
            }
        }
    }

    #[test]
    fn test_try_add() {
        assert_eq!(try_add(2, 3).unwrap(), 5);
        assert_eq!(try_add(i64::MIN, i64::MAX).unwrap(), -1);
        assert!(matches!(
            try_add(i64::MAX, 1),
            Err(HelloError::Overflow { lhs: i64::MAX, rhs: 1 })
        ));
        assert!(try_add(i64::MIN, -1).is_err());
    }

    proptest! {
        #[test]
        fn prop_add_commutative(a in any::<i64>(), b in any::<i64>()) {
            prop_assume!(a.checked_add(b).is_some());
            prop_assert_eq!(add(a, b), add(b, a));
        }

        #[test]
        fn prop_add_zero_identity(a in any::<i64>()) {
            prop_assert_eq!(add(a, 0), a);
        }
    }
}
