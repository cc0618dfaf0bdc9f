use std::f64::consts::{PI, TAU};
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

const BACK_C1: f64 = 1.70158;
const BACK_C2: f64 = BACK_C1 * 1.525;
const BACK_C3: f64 = BACK_C1 + 1.;
const ELASTIC_C4: f64 = TAU / 3.;
const ELASTIC_C5: f64 = TAU / 4.5;
const BOUNCE_N1: f64 = 7.5625;
const BOUNCE_D1: f64 = 2.75;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EaseError {
    #[error("not an easing function: {0}")]
    InvalidEasingName(String),
}

/// The named easing curves. Each maps normalized progress in `[0, 1]` to a
/// shaped progress value with `f(0) == 0` and `f(1) == 1`.
///
/// `back` and `elastic` curves overshoot outside `[0, 1]` between the
/// endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Ease {
    #[default]
    Linear,
    InSine,
    OutSine,
    InOutSine,
    InCubic,
    OutCubic,
    InOutCubic,
    InQuint,
    OutQuint,
    InOutQuint,
    InCirc,
    OutCirc,
    InOutCirc,
    InElastic,
    OutElastic,
    InOutElastic,
    InQuad,
    OutQuad,
    InOutQuad,
    InQuart,
    OutQuart,
    InOutQuart,
    InExpo,
    OutExpo,
    InOutExpo,
    InBack,
    OutBack,
    InOutBack,
    InBounce,
    OutBounce,
    InOutBounce,
}

impl Ease {
    pub const ALL: [Ease; 31] = [
        Ease::Linear,
        Ease::InSine,
        Ease::OutSine,
        Ease::InOutSine,
        Ease::InCubic,
        Ease::OutCubic,
        Ease::InOutCubic,
        Ease::InQuint,
        Ease::OutQuint,
        Ease::InOutQuint,
        Ease::InCirc,
        Ease::OutCirc,
        Ease::InOutCirc,
        Ease::InElastic,
        Ease::OutElastic,
        Ease::InOutElastic,
        Ease::InQuad,
        Ease::OutQuad,
        Ease::InOutQuad,
        Ease::InQuart,
        Ease::OutQuart,
        Ease::InOutQuart,
        Ease::InExpo,
        Ease::OutExpo,
        Ease::InOutExpo,
        Ease::InBack,
        Ease::OutBack,
        Ease::InOutBack,
        Ease::InBounce,
        Ease::OutBounce,
        Ease::InOutBounce,
    ];

    /// The configuration key for this curve, e.g. `in_out_cubic`.
    pub fn name(self) -> &'static str {
        match self {
            Ease::Linear => "linear",
            Ease::InSine => "in_sine",
            Ease::OutSine => "out_sine",
            Ease::InOutSine => "in_out_sine",
            Ease::InCubic => "in_cubic",
            Ease::OutCubic => "out_cubic",
            Ease::InOutCubic => "in_out_cubic",
            Ease::InQuint => "in_quint",
            Ease::OutQuint => "out_quint",
            Ease::InOutQuint => "in_out_quint",
            Ease::InCirc => "in_circ",
            Ease::OutCirc => "out_circ",
            Ease::InOutCirc => "in_out_circ",
            Ease::InElastic => "in_elastic",
            Ease::OutElastic => "out_elastic",
            Ease::InOutElastic => "in_out_elastic",
            Ease::InQuad => "in_quad",
            Ease::OutQuad => "out_quad",
            Ease::InOutQuad => "in_out_quad",
            Ease::InQuart => "in_quart",
            Ease::OutQuart => "out_quart",
            Ease::InOutQuart => "in_out_quart",
            Ease::InExpo => "in_expo",
            Ease::OutExpo => "out_expo",
            Ease::InOutExpo => "in_out_expo",
            Ease::InBack => "in_back",
            Ease::OutBack => "out_back",
            Ease::InOutBack => "in_out_back",
            Ease::InBounce => "in_bounce",
            Ease::OutBounce => "out_bounce",
            Ease::InOutBounce => "in_out_bounce",
        }
    }

    /// Resolves the curve to a plain function pointer so callers can cache it.
    pub fn func(self) -> fn(f64) -> f64 {
        match self {
            Ease::Linear => linear,
            Ease::InSine => in_sine,
            Ease::OutSine => out_sine,
            Ease::InOutSine => in_out_sine,
            Ease::InCubic => in_cubic,
            Ease::OutCubic => out_cubic,
            Ease::InOutCubic => in_out_cubic,
            Ease::InQuint => in_quint,
            Ease::OutQuint => out_quint,
            Ease::InOutQuint => in_out_quint,
            Ease::InCirc => in_circ,
            Ease::OutCirc => out_circ,
            Ease::InOutCirc => in_out_circ,
            Ease::InElastic => in_elastic,
            Ease::OutElastic => out_elastic,
            Ease::InOutElastic => in_out_elastic,
            Ease::InQuad => in_quad,
            Ease::OutQuad => out_quad,
            Ease::InOutQuad => in_out_quad,
            Ease::InQuart => in_quart,
            Ease::OutQuart => out_quart,
            Ease::InOutQuart => in_out_quart,
            Ease::InExpo => in_expo,
            Ease::OutExpo => out_expo,
            Ease::InOutExpo => in_out_expo,
            Ease::InBack => in_back,
            Ease::OutBack => out_back,
            Ease::InOutBack => in_out_back,
            Ease::InBounce => in_bounce,
            Ease::OutBounce => out_bounce,
            Ease::InOutBounce => in_out_bounce,
        }
    }

    #[inline]
    pub fn apply(self, x: f64) -> f64 {
        (self.func())(x)
    }
}

impl fmt::Display for Ease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Ease {
    type Err = EaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ease::ALL
            .into_iter()
            .find(|e| e.name() == s)
            .ok_or_else(|| EaseError::InvalidEasingName(s.to_owned()))
    }
}

/// Linearly interpolates a value between `[min, max]`, given a `t` between
/// `[0, 1]`.
///
/// Note that `t` is clamped between `0` and `1` (inclusive).
#[inline]
pub fn lerp(min: f64, max: f64, t: f64) -> f64 {
    let t_clamp = t.clamp(0., 1.);

    min + (max - min) * t_clamp
}

#[inline]
fn flip(x: f64) -> f64 {
    1. - x
}

#[inline]
fn square(x: f64) -> f64 {
    x * x
}

#[inline]
fn is_endpoint(x: f64) -> bool {
    x == 0. || x == 1.
}

pub fn linear(x: f64) -> f64 {
    x
}

pub fn in_sine(x: f64) -> f64 {
    if x == 1. {
        return x;
    }
    1. - (x * PI / 2.).cos()
}

pub fn out_sine(x: f64) -> f64 {
    if x == 1. {
        return x;
    }
    (x * PI / 2.).sin()
}

pub fn in_out_sine(x: f64) -> f64 {
    -((PI * x).cos() - 1.) / 2.
}

pub fn in_cubic(x: f64) -> f64 {
    x.powi(3)
}

pub fn out_cubic(x: f64) -> f64 {
    flip(flip(x).powi(3))
}

pub fn in_out_cubic(x: f64) -> f64 {
    if x < 0.5 {
        4. * x.powi(3)
    } else {
        1. - (-2. * x + 2.).powi(3) / 2.
    }
}

pub fn in_quint(x: f64) -> f64 {
    x.powi(5)
}

pub fn out_quint(x: f64) -> f64 {
    flip(flip(x).powi(5))
}

pub fn in_out_quint(x: f64) -> f64 {
    if x < 0.5 {
        16. * x.powi(5)
    } else {
        1. - (-2. * x + 2.).powi(5) / 2.
    }
}

pub fn in_circ(x: f64) -> f64 {
    1. - (1. - square(x)).sqrt()
}

pub fn out_circ(x: f64) -> f64 {
    (1. - square(x - 1.)).sqrt()
}

pub fn in_out_circ(x: f64) -> f64 {
    if x < 0.5 {
        (1. - (1. - square(2. * x)).sqrt()) / 2.
    } else {
        ((1. - square(-2. * x + 2.)).sqrt() + 1.) / 2.
    }
}

pub fn in_elastic(x: f64) -> f64 {
    if is_endpoint(x) {
        return x;
    }
    -(2f64.powf(10. * x - 10.)) * ((x * 10. - 10.75) * ELASTIC_C4).sin()
}

pub fn out_elastic(x: f64) -> f64 {
    if is_endpoint(x) {
        return x;
    }
    2f64.powf(-10. * x) * ((x * 10. - 0.75) * ELASTIC_C4).sin() + 1.
}

pub fn in_out_elastic(x: f64) -> f64 {
    if is_endpoint(x) {
        return x;
    }

    let wave = ((20. * x - 11.125) * ELASTIC_C5).sin();
    if x < 0.5 {
        -(2f64.powf(20. * x - 10.) * wave) / 2.
    } else {
        2f64.powf(-20. * x + 10.) * wave / 2. + 1.
    }
}

#[inline]
pub fn in_quad(x: f64) -> f64 {
    square(x)
}

#[inline]
pub fn out_quad(x: f64) -> f64 {
    flip(square(flip(x)))
}

pub fn in_out_quad(x: f64) -> f64 {
    if x < 0.5 {
        2. * square(x)
    } else {
        1. - square(-2. * x + 2.) / 2.
    }
}

pub fn in_quart(x: f64) -> f64 {
    x.powi(4)
}

pub fn out_quart(x: f64) -> f64 {
    flip(flip(x).powi(4))
}

pub fn in_out_quart(x: f64) -> f64 {
    if x < 0.5 {
        8. * x.powi(4)
    } else {
        1. - (-2. * x + 2.).powi(4) / 2.
    }
}

pub fn in_expo(x: f64) -> f64 {
    if x == 0. {
        return x;
    }
    2f64.powf(10. * x - 10.)
}

pub fn out_expo(x: f64) -> f64 {
    if x == 1. {
        return x;
    }
    1. - 2f64.powf(-10. * x)
}

pub fn in_out_expo(x: f64) -> f64 {
    if is_endpoint(x) {
        return x;
    }

    if x < 0.5 {
        2f64.powf(20. * x - 10.) / 2.
    } else {
        (2. - 2f64.powf(-20. * x + 10.)) / 2.
    }
}

pub fn in_back(x: f64) -> f64 {
    if x == 1. {
        return x;
    }
    BACK_C3 * x.powi(3) - BACK_C1 * square(x)
}

pub fn out_back(x: f64) -> f64 {
    if x == 0. {
        return x;
    }
    1. + BACK_C3 * (x - 1.).powi(3) + BACK_C1 * square(x - 1.)
}

pub fn in_out_back(x: f64) -> f64 {
    if x < 0.5 {
        square(2. * x) * ((BACK_C2 + 1.) * 2. * x - BACK_C2) / 2.
    } else {
        (square(2. * x - 2.) * ((BACK_C2 + 1.) * (x * 2. - 2.) + BACK_C2) + 2.) / 2.
    }
}

pub fn in_bounce(x: f64) -> f64 {
    1. - out_bounce(flip(x))
}

pub fn out_bounce(x: f64) -> f64 {
    if x < 1. / BOUNCE_D1 {
        BOUNCE_N1 * square(x)
    } else if x < 2. / BOUNCE_D1 {
        BOUNCE_N1 * square(x - 1.5 / BOUNCE_D1) + 0.75
    } else if x < 2.5 / BOUNCE_D1 {
        BOUNCE_N1 * square(x - 2.25 / BOUNCE_D1) + 0.9375
    } else {
        BOUNCE_N1 * square(x - 2.625 / BOUNCE_D1) + 0.984375
    }
}

pub fn in_out_bounce(x: f64) -> f64 {
    if x < 0.5 {
        (1. - out_bounce(1. - 2. * x)) / 2.
    } else {
        (1. + out_bounce(2. * x - 1.)) / 2.
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn every_curve_hits_its_endpoints_exactly() {
        for ease in Ease::ALL {
            assert_eq!(ease.apply(0.), 0., "{ease} at 0");
            assert_eq!(ease.apply(1.), 1., "{ease} at 1");
        }
    }

    #[test]
    fn linear_is_identity() {
        for i in 0..=100 {
            let x = i as f64 / 100.;
            assert_eq!(linear(x), x);
        }
    }

    #[test]
    fn names_resolve_to_their_curve() {
        for ease in Ease::ALL {
            assert_eq!(ease.name().parse::<Ease>(), Ok(ease));
            assert_eq!(ease.to_string(), ease.name());
        }
        assert_eq!("out_cubic".parse::<Ease>(), Ok(Ease::OutCubic));
    }

    #[test]
    fn unknown_name_is_rejected() {
        assert_eq!(
            "test_func".parse::<Ease>(),
            Err(EaseError::InvalidEasingName("test_func".into()))
        );
        // keys are case sensitive
        assert!("Linear".parse::<Ease>().is_err());
        assert!("".parse::<Ease>().is_err());
    }

    #[test]
    fn all_names_are_unique() {
        for (i, a) in Ease::ALL.iter().enumerate() {
            for b in &Ease::ALL[i + 1..] {
                assert_ne!(a.name(), b.name());
            }
        }
    }

    #[test]
    fn in_out_curves_meet_at_midpoint() {
        for ease in [
            Ease::InOutSine,
            Ease::InOutCubic,
            Ease::InOutQuint,
            Ease::InOutCirc,
            Ease::InOutQuad,
            Ease::InOutQuart,
            Ease::InOutExpo,
            Ease::InOutBack,
            Ease::InOutBounce,
            Ease::InOutElastic,
        ] {
            assert!((ease.apply(0.5) - 0.5).abs() < EPS, "{ease}");
        }
    }

    #[test]
    fn power_curves() {
        assert!((in_quad(0.5) - 0.25).abs() < EPS);
        assert!((out_quad(0.5) - 0.75).abs() < EPS);
        assert!((in_cubic(0.5) - 0.125).abs() < EPS);
        assert!((out_cubic(0.5) - 0.875).abs() < EPS);
        assert!((in_quart(0.5) - 0.0625).abs() < EPS);
        assert!((in_quint(0.5) - 0.03125).abs() < EPS);
    }

    #[test]
    fn back_curves_overshoot() {
        assert!(in_back(0.2) < 0.);
        assert!(out_back(0.8) > 1.);
        assert!(in_out_back(0.1) < 0.);
        assert!(in_out_back(0.9) > 1.);
    }

    #[test]
    fn elastic_curves_overshoot() {
        let peak = (1..100)
            .map(|i| out_elastic(i as f64 / 100.))
            .fold(f64::MIN, f64::max);
        assert!(peak > 1.);
    }

    #[test]
    fn bounce_mirrors_out_bounce() {
        for i in 0..=20 {
            let x = i as f64 / 20.;
            assert!((in_bounce(x) - (1. - out_bounce(1. - x))).abs() < EPS);
            assert!((0. ..=1.).contains(&out_bounce(x)));
        }
        // landing points of each bounce
        assert!((out_bounce(1. / 2.75) - 1.).abs() < EPS);
        assert!((out_bounce(2. / 2.75) - 1.).abs() < EPS);
    }

    #[test]
    fn sine_curves() {
        assert!((in_sine(0.5) - (1. - (PI / 4.).cos())).abs() < EPS);
        assert!((out_sine(0.5) - (PI / 4.).sin()).abs() < EPS);
    }

    #[test]
    fn lerp_clamps_t() {
        assert_eq!(lerp(10., 20., 0.5), 15.);
        assert_eq!(lerp(10., 20., -1.), 10.);
        assert_eq!(lerp(10., 20., 2.), 20.);
    }
}
