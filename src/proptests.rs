//! Property-based tests for significance tracking.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::engine::render;
    use crate::{mean, SigFig};

    // Literal with 1-9 written fractional digits; a zero integer part gives
    // leading zeros such as 0.0000012
    fn decimal_literal() -> impl Strategy<Value = String> {
        (prop_oneof![Just(0u32), 1u32..10000], 1usize..=9).prop_flat_map(|(int, places)| {
            (0u64..10u64.pow(places as u32))
                .prop_map(move |frac| format!("{int}.{frac:0places$}"))
        })
    }

    fn figures() -> impl Strategy<Value = u32> {
        1u32..10
    }

    fn magnitude() -> impl Strategy<Value = f64> {
        prop_oneof![(1.0f64..1000.0), (-1000.0f64..=-1.0)]
    }

    fn mantissa_digits(rendered: &str) -> usize {
        rendered
            .split('e')
            .next()
            .unwrap_or("")
            .bytes()
            .filter(u8::is_ascii_digit)
            .count()
    }

    proptest! {
        #[test]
        fn literal_round_trips(literal in decimal_literal()) {
            let parsed = SigFig::parse(&literal).unwrap();
            prop_assert_eq!(parsed.to_string(), literal);
        }

        #[test]
        fn literal_counts_digits_after_leading_zeros(literal in decimal_literal()) {
            let parsed = SigFig::parse(&literal).unwrap();
            let digits: String = literal.chars().filter(char::is_ascii_digit).collect();
            let significant = digits.trim_start_matches('0').len();
            prop_assert_eq!(parsed.sig_figs() as usize, significant);
        }

        #[test]
        fn product_keeps_fewest_figures(
            a in magnitude(), m in figures(),
            b in magnitude(), n in figures(),
        ) {
            let lhs = SigFig::new(a, m).unwrap();
            let rhs = SigFig::new(b, n).unwrap();
            prop_assert_eq!((lhs * rhs).sig_figs(), m.min(n));
            prop_assert_eq!((lhs / rhs).sig_figs(), m.min(n));
        }

        #[test]
        fn sum_keeps_fewest_decimal_places(
            a in magnitude(), p in 0i32..6,
            b in magnitude(), q in 0i32..6,
        ) {
            let lhs = SigFig::with_decimal_places(a, p);
            let rhs = SigFig::with_decimal_places(b, q);
            prop_assert_eq!((lhs + rhs).decimal_places(), p.min(q));
            prop_assert_eq!((lhs - rhs).decimal_places(), p.min(q));
        }

        #[test]
        fn plain_operand_never_constrains(a in magnitude(), n in figures(), k in -50i32..50) {
            let quantity = SigFig::new(a, n).unwrap();
            prop_assert_eq!((quantity * k).sig_figs(), n);
            prop_assert_eq!((f64::from(k) * quantity).sig_figs(), n);
        }

        #[test]
        fn mean_keeps_fewest_figures(values in prop::collection::vec((magnitude(), figures()), 1..8)) {
            let quantities: Vec<SigFig> = values
                .iter()
                .map(|&(v, n)| SigFig::new(v, n).unwrap())
                .collect();
            let fewest = values.iter().map(|&(_, n)| n).min().unwrap();
            prop_assert_eq!(mean(&quantities).unwrap().sig_figs(), fewest);
        }

        #[test]
        fn render_shows_requested_figures(value in magnitude(), n in figures()) {
            prop_assert_eq!(mantissa_digits(&render(value, n)), n as usize);
        }

        #[test]
        fn operations_leave_operands_unchanged(
            a in magnitude(), m in figures(),
            b in magnitude(), n in figures(),
        ) {
            let lhs = SigFig::new(a, m).unwrap();
            let rhs = SigFig::new(b, n).unwrap();
            let before = (lhs.value(), lhs.sig_figs(), rhs.value(), rhs.sig_figs());

            let _ = lhs + rhs;
            let _ = lhs - rhs;
            let _ = lhs * rhs;
            let _ = lhs / rhs;
            let _ = lhs.abs().sqrt();
            let _ = mean(&[lhs, rhs]);

            prop_assert_eq!((lhs.value(), lhs.sig_figs(), rhs.value(), rhs.sig_figs()), before);
        }
    }
}
