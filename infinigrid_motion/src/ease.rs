// Copyright 2025 the Infinigrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Easing curves for tweens.

/// Easing curve mapping linear progress `t` in `[0, 1]` to eased progress.
///
/// Every curve starts at `0` and ends at `1`; inputs outside `[0, 1]` (and
/// `NaN`) are clamped first.
///
/// The power curves follow GSAP's naming, where `powerN` has degree `N + 1`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Ease {
    /// Constant velocity.
    Linear,
    /// Cubic deceleration, `1 - (1 - t)^3`.
    #[default]
    Power2Out,
    /// Cubic acceleration, then deceleration.
    Power2InOut,
    /// Quartic deceleration, `1 - (1 - t)^4`.
    Power3Out,
    /// Exponential deceleration.
    ExpoOut,
}

impl Ease {
    /// Applies the curve to `t`.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Self::Linear => t,
            Self::Power2Out => {
                let inv = 1.0 - t;
                1.0 - inv * inv * inv
            }
            Self::Power2InOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - u * u * u / 2.0
                }
            }
            Self::Power3Out => {
                let inv = 1.0 - t;
                let sq = inv * inv;
                1.0 - sq * sq
            }
            Self::ExpoOut => {
                if t >= 1.0 {
                    1.0
                } else {
                    1.0 - libm::exp2(-10.0 * t)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Ease;

    const ALL: [Ease; 5] = [
        Ease::Linear,
        Ease::Power2Out,
        Ease::Power2InOut,
        Ease::Power3Out,
        Ease::ExpoOut,
    ];

    #[test]
    fn endpoints_are_fixed() {
        for ease in ALL {
            assert_eq!(ease.apply(0.0), 0.0, "{ease:?} at 0");
            assert_eq!(ease.apply(1.0), 1.0, "{ease:?} at 1");
        }
    }

    #[test]
    fn out_of_range_input_is_clamped() {
        for ease in ALL {
            assert_eq!(ease.apply(-3.0), 0.0, "{ease:?} below range");
            assert_eq!(ease.apply(7.0), 1.0, "{ease:?} above range");
            assert_eq!(ease.apply(f64::NAN), 0.0, "{ease:?} on NaN");
        }
    }

    #[test]
    fn curves_are_monotonic() {
        for ease in ALL {
            let mut prev = 0.0;
            for i in 1..=100 {
                let v = ease.apply(f64::from(i) / 100.0);
                assert!(v >= prev, "{ease:?} decreased at step {i}");
                prev = v;
            }
        }
    }

    #[test]
    fn out_curves_lead_linear() {
        assert!(Ease::Power2Out.apply(0.5) > 0.5);
        assert!(Ease::Power3Out.apply(0.5) > Ease::Power2Out.apply(0.5));
        assert!((Ease::Power2InOut.apply(0.5) - 0.5).abs() < 1e-12);
        assert!(Ease::ExpoOut.apply(0.5) > 0.95);
    }

    #[test]
    fn power_curves_match_their_degree() {
        assert_eq!(Ease::Power2Out.apply(0.5), 0.875);
        assert_eq!(Ease::Power3Out.apply(0.5), 0.9375);
        assert_eq!(Ease::Power2InOut.apply(0.25), 0.0625);
        assert_eq!(Ease::Power2InOut.apply(0.75), 0.9375);
    }
}
