use fraction_math::{Fraction64, IsZero, MathError, NumberConst};

fn frac(numerator: i64, denominator: i64) -> Fraction64 {
    Fraction64::new(numerator, denominator).unwrap()
}

#[test]
fn textbook_arithmetic() {
    assert_eq!(frac(1, 2) + frac(1, 3), frac(5, 6));
    assert_eq!(frac(2, 4).simplify(), frac(1, 2));
    assert_eq!(frac(3, 4) * 2, frac(3, 2));
    assert_eq!(frac(1, 2) / frac(1, 4), frac(2, 1));
    assert_eq!(frac(4, 2).get_proper(), (2, frac(0, 1)));
}

#[test]
fn zero_denominator_is_rejected() {
    assert_eq!(
        Fraction64::new(1, 0),
        Err(MathError::ZeroDenominator {
            numerator: "1".to_string(),
        })
    );
}

#[test]
fn recipe_scaling() {
    // Three quarters of a cup, for two and a half batches, split over three
    // bowls.
    let cups = frac(3, 4);
    let batches = Fraction64::from_operands(5, 2).unwrap();
    let per_bowl = cups * batches / 3;

    assert_eq!(per_bowl, frac(5, 8));
    assert_eq!(per_bowl.to_string(), "5/8");
    assert_eq!(per_bowl.to_f64(), 0.625);
    assert_eq!(per_bowl.ceil(), 1);
    assert_eq!(per_bowl.floor(), 0);
    assert!(per_bowl.is_non_zero());
}

#[test]
fn running_total() {
    let mut total = Fraction64::ZERO;
    for denominator in 1..=6 {
        total += frac(1, denominator);
    }

    // The sixth harmonic number.
    assert_eq!(total, frac(49, 20));
    assert_eq!(total.get_proper(), (2, frac(9, 20)));

    total -= 2;
    assert!(total < 0.5);
    assert!(total > 0);
}

#[test]
fn decimals_round_trip() {
    for fraction in [frac(1, 4), frac(3, 8), frac(-5, 16), frac(7, 1)] {
        let decimal = fraction.to_f64();
        assert_eq!(Fraction64::to_fraction(decimal).unwrap(), fraction.simplify());
    }
}

#[test]
fn sorting_unsimplified_fractions() {
    let mut fractions = vec![frac(3, 6), frac(-2, 3), frac(1, -4), frac(2, 3), frac(0, 5)];
    fractions.sort();

    let sorted: Vec<_> = fractions.iter().map(ToString::to_string).collect();
    assert_eq!(sorted, ["-2/3", "-1/4", "0/5", "3/6", "2/3"]);
}
