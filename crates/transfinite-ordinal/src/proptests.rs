//! Property-based tests for transfinite arithmetic.

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use proptest::prelude::*;

    use crate::{Natural, Number, Ordinal, OrdinalError};

    // Strategy for generating small naturals
    fn small_nat() -> impl Strategy<Value = u64> {
        0u64..1000u64
    }

    // Strategy for generating ordinal trees a few levels deep
    fn ordinal() -> impl Strategy<Value = Ordinal> {
        let leaf = (1u64..5u64, 1u64..10u64, 0u64..10u64)
            .prop_map(|(e, c, a)| Ordinal::new(e, c, a));
        leaf.prop_recursive(3, 16, 2, |inner| {
            prop_oneof![
                (inner.clone(), 1u64..10u64, 0u64..10u64)
                    .prop_map(|(e, c, a)| Ordinal::new(e, c, a)),
                (1u64..5u64, 1u64..10u64, inner.clone())
                    .prop_map(|(e, c, a)| Ordinal::new(e, c, a)),
                (inner.clone(), 1u64..10u64, inner)
                    .prop_map(|(e, c, a)| Ordinal::new(e, c, a)),
            ]
        })
    }

    proptest! {
        // Finite operands

        #[test]
        fn omega_plus_natural(n in small_nat()) {
            prop_assert_eq!(Ordinal::omega() + n, Ordinal::omega().with_addend(n));
            prop_assert_eq!(n + Ordinal::omega(), Ordinal::omega());
        }

        #[test]
        fn natural_absorbed_on_left(a in ordinal(), n in small_nat()) {
            prop_assert_eq!(n + a.clone(), a.clone());
            prop_assert_eq!(Number::from(n) + Number::from(a.clone()), Number::from(a));
        }

        #[test]
        fn natural_on_right_keeps_leading_term(a in ordinal(), n in small_nat()) {
            let sum = a.clone() + n;
            prop_assert_eq!(sum.exponent(), a.exponent());
            prop_assert_eq!(sum.coefficient(), a.coefficient());
        }

        #[test]
        fn naturals_add_associatively_on_right(a in ordinal(), m in small_nat(), n in small_nat()) {
            prop_assert_eq!((a.clone() + m) + n, a + (m + n));
        }

        #[test]
        fn ordinal_above_every_natural(a in ordinal(), n in any::<u64>()) {
            prop_assert!(a > n);
            prop_assert!(n < a);
            prop_assert!(!(a < n));
            prop_assert!(a != n);
        }

        #[test]
        fn mul_by_natural(a in ordinal(), n in 1u64..1000u64) {
            prop_assert_eq!(a.clone() * 0u64, Number::zero());
            prop_assert_eq!(0u64 * a.clone(), Number::zero());
            prop_assert_eq!(n * a.clone(), Number::from(a.clone()));

            let scaled = a.clone() * n;
            let scaled = scaled.as_ordinal().unwrap();
            prop_assert_eq!(scaled.exponent(), a.exponent());
            prop_assert_eq!(scaled.addend(), a.addend());
            prop_assert_eq!(scaled.coefficient(), &(a.coefficient() * &Natural::new(n)));
        }

        // Exponentiation

        #[test]
        fn pow_zero_is_one(a in ordinal()) {
            prop_assert_eq!(a.pow(0u64), Ok(Number::one()));
        }

        #[test]
        fn pow_keeps_coefficient(a in ordinal(), n in 1u64..4u64) {
            let power = a.pow(n).unwrap();
            let power = power.as_ordinal().unwrap();
            prop_assert_eq!(power.coefficient(), a.coefficient());
        }

        #[test]
        fn pow_transfinite_is_unsupported(a in ordinal(), b in ordinal()) {
            let is_unsupported = matches!(
                a.pow(b),
                Err(OrdinalError::UnsupportedExponent { .. })
            );
            prop_assert!(is_unsupported);
        }

        // Equality and order

        #[test]
        fn equality_is_structural(a in ordinal()) {
            let rebuilt = Ordinal::new(
                a.exponent().clone(),
                a.coefficient().clone(),
                a.addend().clone(),
            );
            prop_assert_eq!(&rebuilt, &a);
            prop_assert_eq!(&a, &rebuilt);
            prop_assert_ne!(a.clone().with_coefficient(a.coefficient() + &Natural::new(1)), a);
        }

        #[test]
        fn partial_cmp_agrees_with_operators(a in ordinal(), b in ordinal()) {
            match a.partial_cmp(&b) {
                Some(Ordering::Less) => prop_assert!(a < b && !(a > b)),
                Some(Ordering::Greater) => prop_assert!(a > b && !(a < b)),
                Some(Ordering::Equal) => prop_assert!(a <= b && a >= b),
                None => prop_assert!((a < b) == (a > b)),
            }
            prop_assert_eq!(a >= b, !(a < b));
            prop_assert_eq!(a <= b, a < b || a == b);
        }

        #[test]
        fn cantor_order_is_total(a in ordinal(), b in ordinal()) {
            prop_assert_eq!(a.cantor_cmp(&b), b.cantor_cmp(&a).reverse());
            prop_assert_eq!(a.cantor_cmp(&b) == Ordering::Equal, a == b);
        }

        #[test]
        fn renderings_agree_on_identities(a in ordinal()) {
            let plain = a.to_string();
            let latex = a.latex().to_string();
            prop_assert!(plain.starts_with('w'));
            prop_assert!(latex.starts_with(r"\omega"));
            prop_assert!(!plain.contains("^(1)"));
            prop_assert!(!plain.contains(" + 0"));
            prop_assert!(!latex.contains("^{1}"), "latex renders a unit exponent");
            prop_assert!(!latex.contains("+0"));
        }
    }
}
