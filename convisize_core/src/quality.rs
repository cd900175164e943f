/*!
# `ConviSize` - Quality
*/

use crate::ConviError;
use std::{
	fmt,
	num::NonZeroU8,
	str::FromStr,
};



#[derive(Debug, Copy, Clone, Eq, Hash, Ord, PartialEq, PartialOrd)]
/// # Encoding Quality.
///
/// A lossy quality setting in the range of `1..=100`. It is only consulted
/// by JPEG, `WebP`, and PDF (which embeds JPEG data); the other formats
/// ignore it.
///
/// String values are parsed leniently: whole numbers outside the range are
/// clamped to the nearest end, and fractions are rounded.
pub struct Quality(NonZeroU8);

impl Default for Quality {
	#[inline]
	fn default() -> Self { Self::DEFAULT }
}

impl fmt::Display for Quality {
	#[inline]
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::Display::fmt(&self.0, f)
	}
}

impl From<u8> for Quality {
	#[inline]
	fn from(src: u8) -> Self { Self::new(src) }
}

impl FromStr for Quality {
	type Err = ConviError;

	fn from_str(src: &str) -> Result<Self, Self::Err> {
		let src = src.trim();
		if let Ok(num) = src.parse::<i64>() {
			let num = num.clamp(1, 100);
			return u8::try_from(num).map(Self::new).map_err(|_| ConviError::Quality);
		}

		// Fractions are allowed too, so long as they are real numbers.
		let num = src.parse::<f64>().map_err(|_| ConviError::Quality)?;
		if num.is_finite() {
			#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // Clamped.
			let num = num.round().clamp(1.0, 100.0) as u8;
			Ok(Self::new(num))
		}
		else { Err(ConviError::Quality) }
	}
}

impl Quality {
	/// # Minimum.
	pub const MIN: Self = Self(NonZeroU8::MIN);

	/// # Maximum.
	pub const MAX: Self = match NonZeroU8::new(100) {
		Some(q) => Self(q),
		None => Self::MIN,
	};

	/// # Default.
	pub const DEFAULT: Self = match NonZeroU8::new(92) {
		Some(q) => Self(q),
		None => Self::MIN,
	};

	#[must_use]
	/// # New.
	///
	/// Values are clamped to `1..=100`.
	pub const fn new(src: u8) -> Self {
		if src > 100 { Self::MAX }
		else {
			match NonZeroU8::new(src) {
				Some(q) => Self(q),
				None => Self::MIN,
			}
		}
	}

	#[inline]
	#[must_use]
	/// # Get.
	pub const fn get(self) -> u8 { self.0.get() }

	#[must_use]
	/// # As Fraction.
	///
	/// Return the quality as a value between `0.01` and `1.0`.
	pub fn as_fraction(self) -> f32 { f32::from(self.get()) / 100.0 }
}



#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn t_new() {
		assert_eq!(Quality::default().get(), 92);
		assert_eq!(Quality::new(0).get(), 1);
		assert_eq!(Quality::new(1).get(), 1);
		assert_eq!(Quality::new(55).get(), 55);
		assert_eq!(Quality::new(100).get(), 100);
		assert_eq!(Quality::new(250).get(), 100);
		assert_eq!(Quality::from(70), Quality::new(70));
	}

	#[test]
	fn t_from_str() {
		assert_eq!("80".parse::<Quality>(), Ok(Quality::new(80)));
		assert_eq!(" 80 ".parse::<Quality>(), Ok(Quality::new(80)));
		assert_eq!("0".parse::<Quality>(), Ok(Quality::MIN));
		assert_eq!("-20".parse::<Quality>(), Ok(Quality::MIN));
		assert_eq!("1000".parse::<Quality>(), Ok(Quality::MAX));
		assert_eq!("75.4".parse::<Quality>(), Ok(Quality::new(75)));
		assert_eq!("".parse::<Quality>(), Err(ConviError::Quality));
		assert_eq!("high".parse::<Quality>(), Err(ConviError::Quality));
		assert_eq!("NaN".parse::<Quality>(), Err(ConviError::Quality));
	}

	#[test]
	fn t_fraction() {
		assert!((Quality::MAX.as_fraction() - 1.0).abs() < f32::EPSILON);
		assert!((Quality::new(50).as_fraction() - 0.5).abs() < f32::EPSILON);
		assert_eq!(Quality::DEFAULT.to_string(), "92");
	}
}
