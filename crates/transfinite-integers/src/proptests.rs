//! Property-based tests for natural number arithmetic.

#[cfg(test)]
mod tests {
    use num_traits::{One, Zero};
    use proptest::prelude::*;

    use crate::Natural;

    // Strategy for generating small naturals
    fn small_nat() -> impl Strategy<Value = u64> {
        0u64..1000u64
    }

    proptest! {
        // Commutative semiring axioms

        #[test]
        fn natural_add_commutative(a in small_nat(), b in small_nat()) {
            let a = Natural::new(a);
            let b = Natural::new(b);
            prop_assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn natural_add_associative(a in small_nat(), b in small_nat(), c in small_nat()) {
            let a = Natural::new(a);
            let b = Natural::new(b);
            let c = Natural::new(c);
            prop_assert_eq!(
                (a.clone() + b.clone()) + c.clone(),
                a + (b + c)
            );
        }

        #[test]
        fn natural_mul_commutative(a in small_nat(), b in small_nat()) {
            let a = Natural::new(a);
            let b = Natural::new(b);
            prop_assert_eq!(&a * &b, &b * &a);
        }

        #[test]
        fn natural_distributive(a in small_nat(), b in small_nat(), c in small_nat()) {
            let a = Natural::new(a);
            let b = Natural::new(b);
            let c = Natural::new(c);
            prop_assert_eq!(
                a.clone() * (b.clone() + c.clone()),
                a.clone() * b + a * c
            );
        }

        #[test]
        fn natural_identities(a in small_nat()) {
            let a = Natural::new(a);
            prop_assert_eq!(a.clone() + Natural::zero(), a.clone());
            prop_assert_eq!(a.clone() * Natural::one(), a.clone());
            prop_assert!((a * Natural::zero()).is_zero());
        }

        #[test]
        fn natural_matches_u64(a in small_nat(), b in small_nat()) {
            prop_assert_eq!((Natural::new(a) + Natural::new(b)).to_u64(), Some(a + b));
            prop_assert_eq!((Natural::new(a) * Natural::new(b)).to_u64(), Some(a * b));
            prop_assert_eq!(Natural::new(a) < Natural::new(b), a < b);
        }

        #[test]
        fn natural_pow_is_repeated_mul(a in 0u64..50u64, e in 0usize..6usize) {
            let base = Natural::new(a);
            let mut expected = Natural::one();
            for _ in 0..e {
                expected = expected * &base;
            }
            prop_assert_eq!(base.pow(e), expected);
        }
    }
}
