/// Construction parameters for a [`Tween`](crate::Tween).
///
/// The easing curve is kept by name here, so an invalid key only surfaces
/// when the tween is built with [`Tween::with_config`](crate::Tween::with_config).
#[derive(Debug, Clone, PartialEq)]
pub struct TweenConfig<V> {
    pub start: V,
    pub end: V,
    /// Seconds.
    pub duration: f64,
    /// Seconds to wait before playback, see [`Tween::delay_start`](crate::Tween::delay_start).
    pub delay: f64,
    pub yoyo: bool,
    pub easing: String,
}

impl<V> TweenConfig<V> {
    pub fn new(start: V, end: V, duration: f64) -> Self {
        Self {
            start,
            end,
            duration,
            delay: 0.,
            yoyo: false,
            easing: "linear".to_owned(),
        }
    }
}
