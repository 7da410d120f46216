// web_app/rating.rs - Star rating decomposition
//
// A rating on the 0..=5 scale is drawn as full, half and empty stars.
// The fractional part gets a half star from .5 upwards.

/// Highest rating a product or review can have
pub const MAX_STARS: u8 = 5;

/// Stars to draw for one rating; `full + half + empty` is always 5
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StarBreakdown {
    pub full: u8,
    pub half: bool,
    pub empty: u8,
}

impl StarBreakdown {
    pub fn total(&self) -> u8 {
        self.full + u8::from(self.half) + self.empty
    }
}

/// Split a rating into stars. Out-of-range values are clamped to 0..=5
/// and NaN counts as 0.
pub fn star_breakdown(rating: f64) -> StarBreakdown {
    let rating = if rating.is_nan() {
        0.0
    } else {
        rating.clamp(0.0, f64::from(MAX_STARS))
    };

    let whole = rating.floor();
    let full = whole as u8;
    let half = rating - whole >= 0.5;
    let empty = MAX_STARS - full - u8::from(half);

    StarBreakdown { full, half, empty }
}
