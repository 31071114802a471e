use core::fmt;

/// 24-bit color of a bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
	/// Red channel.
	pub r: u8,
	/// Green channel.
	pub g: u8,
	/// Blue channel.
	pub b: u8,
}

impl Rgb {
	/// Color of the least value.
	pub const GREEN: Self = Self::new(0, 255, 0);
	/// Color of the greatest value.
	pub const RED: Self = Self::new(255, 0, 0);
	/// Color of every value when all values are equal, the midpoint between green and red.
	pub const NEUTRAL: Self = Self::new(128, 128, 0);

	/// Creates a color from its channels.
	#[must_use]
	pub const fn new(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b }
	}
}

/// Formats as `#RRGGBB`.
impl fmt::Display for Rgb {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
	}
}

/// Interpolates linearly from green at `min` to red at `max`, blue is always zero.
///
/// Values outside `min..=max` are clamped. If `max <= min`, there is no range to interpolate over
/// and [`Rgb::NEUTRAL`] is returned.
///
/// # Examples
///
/// ```
/// use sortvis::{Rgb, bar_color};
///
/// assert_eq!(bar_color(1, 50, 1), Rgb::GREEN);
/// assert_eq!(bar_color(1, 50, 50), Rgb::RED);
/// assert_eq!(bar_color(7, 7, 7), Rgb::NEUTRAL);
/// assert_eq!(bar_color(0, 2, 1).to_string(), "#808000");
/// ```
#[must_use]
pub fn bar_color(min: u32, max: u32, value: u32) -> Rgb {
	if max <= min {
		return Rgb::NEUTRAL;
	}
	let t = f64::from(value.clamp(min, max) - min) / f64::from(max - min);
	let channel = |x: f64| (255.0 * x).round() as u8;
	Rgb::new(channel(t), channel(1.0 - t), 0)
}
