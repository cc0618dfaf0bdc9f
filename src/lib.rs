//! Easing curves and a small tween controller for frame-driven animation.
//!
//! ```
//! use tweener::{Ease, ManualClock, Tween};
//!
//! let clock = ManualClock::new(0.);
//! let mut tween = Tween::with_clock(0., 100., 2., clock.clone()).with_easing(Ease::InOutQuad);
//! tween.start();
//!
//! clock.advance(1.);
//! assert_eq!(tween.update(), 50.);
//! ```

pub mod clock;
pub mod config;
pub mod ease;
pub mod point;
pub mod tween;

pub use clock::{Clock, ManualClock, MonotonicClock, SystemClock};
pub use config::TweenConfig;
pub use ease::{Ease, EaseError};
pub use point::{Point2, Point3, Tweenable};
pub use tween::{Tween, TweenState};
