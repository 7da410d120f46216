/// Star Rating Tests
///
/// Any rating, in range or not, must decompose into exactly five stars.

use proptest::prelude::*;
use swiftcart::web_app::rating::{star_breakdown, StarBreakdown};

proptest! {
    #[test]
    fn always_five_stars(rating in proptest::num::f64::ANY) {
        let stars = star_breakdown(rating);
        prop_assert_eq!(stars.total(), 5);
    }

    #[test]
    fn full_stars_follow_whole_part(rating in 0.0f64..5.0) {
        let stars = star_breakdown(rating);
        prop_assert_eq!(u32::from(stars.full), rating.floor() as u32);
        prop_assert_eq!(stars.half, rating.fract() >= 0.5);
    }
}

#[test]
fn test_fractional_thresholds() {
    let cases: [(f64, u8, bool, u8); 8] = [
        (4.4, 4, false, 1),
        (4.5, 4, true, 0),
        (4.94, 4, true, 0),
        (3.49, 3, false, 2),
        (3.5, 3, true, 1),
        (2.25, 2, false, 3),
        (0.5, 0, true, 4),
        (1.0, 1, false, 4),
    ];

    for (rating, full, half, empty) in cases {
        assert_eq!(
            star_breakdown(rating),
            StarBreakdown { full, half, empty },
            "rating {}",
            rating
        );
    }
}

#[test]
fn test_extremes() {
    assert_eq!(star_breakdown(f64::INFINITY), StarBreakdown { full: 5, half: false, empty: 0 });
    assert_eq!(star_breakdown(f64::NEG_INFINITY), StarBreakdown { full: 0, half: false, empty: 5 });
    assert_eq!(star_breakdown(f64::NAN).total(), 5);
}
