// ============================================================================
// Property-Based Tests
// Algebraic laws of digit-string arithmetic
// ============================================================================

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::numeric::{ArithmeticError, Number, Radix, ALPHABET};
    use crate::{add, mul, normalize, sub};

    // Strategy for a base together with a digit string valid in it,
    // leading zeros included
    fn base_and_digits(max_len: usize) -> impl Strategy<Value = (u32, String)> {
        (2u32..=36).prop_flat_map(move |base| {
            let digit = (0..base as usize).prop_map(|v| ALPHABET.as_bytes()[v] as char);
            (
                Just(base),
                prop::collection::vec(digit, 1..=max_len)
                    .prop_map(|d| d.into_iter().collect::<String>()),
            )
        })
    }

    // Strategy for a base and two operands valid in it
    fn base_and_operands(max_len: usize) -> impl Strategy<Value = (u32, String, String)> {
        (2u32..=36).prop_flat_map(move |base| {
            let digit = (0..base as usize).prop_map(|v| ALPHABET.as_bytes()[v] as char);
            let operand = prop::collection::vec(digit, 1..=max_len)
                .prop_map(|d| d.into_iter().collect::<String>());
            (Just(base), operand.clone(), operand)
        })
    }

    fn is_canonical(digits: &str) -> bool {
        digits == "0" || !digits.starts_with('0')
    }

    proptest! {
        #[test]
        fn add_commutative((base, a, b) in base_and_operands(24)) {
            prop_assert_eq!(add(base, &a, &b).unwrap(), add(base, &b, &a).unwrap());
        }

        #[test]
        fn mul_commutative((base, a, b) in base_and_operands(16)) {
            prop_assert_eq!(mul(base, &a, &b).unwrap(), mul(base, &b, &a).unwrap());
        }

        #[test]
        fn add_associative((base, a, b) in base_and_operands(16), c in 0u64..1_000_000) {
            let radix = Radix::new(base).unwrap();
            let c = Number::from_u128(c as u128, radix).to_string();
            let left = add(base, &add(base, &a, &b).unwrap(), &c).unwrap();
            let right = add(base, &a, &add(base, &b, &c).unwrap()).unwrap();
            prop_assert_eq!(left, right);
        }

        #[test]
        fn mul_distributes_over_add((base, a, b) in base_and_operands(10), c in 0u64..100_000) {
            let radix = Radix::new(base).unwrap();
            let c = Number::from_u128(c as u128, radix).to_string();
            let left = mul(base, &a, &add(base, &b, &c).unwrap()).unwrap();
            let ab = mul(base, &a, &b).unwrap();
            let ac = mul(base, &a, &c).unwrap();
            let right = add(base, &ab, &ac).unwrap();
            prop_assert_eq!(left, right);
        }

        #[test]
        fn identities((base, a) in base_and_digits(24)) {
            prop_assert_eq!(add(base, &a, "0").unwrap(), normalize(&a));
            prop_assert_eq!(mul(base, &a, "1").unwrap(), normalize(&a));
            prop_assert_eq!(mul(base, &a, "0").unwrap(), "0");
            prop_assert_eq!(sub(base, &a, "0").unwrap(), normalize(&a));
            prop_assert_eq!(sub(base, &a, &a).unwrap(), "0");
        }

        #[test]
        fn sub_inverts_add((base, a, b) in base_and_operands(24)) {
            match sub(base, &a, &b) {
                Ok(c) => prop_assert_eq!(add(base, &c, &b).unwrap(), normalize(&a)),
                Err(e) => {
                    prop_assert_eq!(e, ArithmeticError::NegativeResult);
                    // the reverse difference always exists
                    let c = sub(base, &b, &a).unwrap();
                    prop_assert_eq!(add(base, &c, &a).unwrap(), normalize(&b));
                },
            }
        }

        #[test]
        fn results_are_canonical((base, a, b) in base_and_operands(20)) {
            prop_assert!(is_canonical(&add(base, &a, &b).unwrap()));
            prop_assert!(is_canonical(&mul(base, &a, &b).unwrap()));
            if let Ok(diff) = sub(base, &a, &b) {
                prop_assert!(is_canonical(&diff));
            }
        }

        #[test]
        fn sub_fails_exactly_when_lhs_smaller((base, a, b) in base_and_operands(12)) {
            let (na, nb) = (normalize(&a), normalize(&b));
            let smaller = na.len() < nb.len() || (na.len() == nb.len() && na < nb);
            prop_assert_eq!(sub(base, &a, &b).is_err(), smaller);
        }

        #[test]
        fn agrees_with_native_arithmetic(base in 2u32..=36, x in any::<u64>(), y in any::<u64>()) {
            let radix = Radix::new(base).unwrap();
            let (x, y) = (x as u128, y as u128);
            let sx = Number::from_u128(x, radix).to_string();
            let sy = Number::from_u128(y, radix).to_string();

            let sum = Number::parse(radix, &add(base, &sx, &sy).unwrap()).unwrap();
            prop_assert_eq!(sum.to_u128(radix), Some(x + y));

            let product = Number::parse(radix, &mul(base, &sx, &sy).unwrap()).unwrap();
            prop_assert_eq!(product.to_u128(radix), Some(x * y));

            let (hi, lo) = if x >= y { (&sx, &sy) } else { (&sy, &sx) };
            let diff = Number::parse(radix, &sub(base, hi, lo).unwrap()).unwrap();
            prop_assert_eq!(diff.to_u128(radix), Some(x.abs_diff(y)));
        }

        #[test]
        fn digit_out_of_base_rejected(base in 2u32..36, prefix in "[0-1]{0,6}") {
            let bad = ALPHABET.as_bytes()[base as usize] as char;
            let operand = format!("{}{}", prefix, bad);
            let expected = Err(ArithmeticError::InvalidDigit { digit: bad, base });
            prop_assert_eq!(add(base, &operand, "1"), expected.clone());
            prop_assert_eq!(sub(base, &operand, "0"), expected.clone());
            prop_assert_eq!(mul(base, "1", &operand), expected);
        }
    }
}
