/*!
# `ConviSize` - Color Filters
*/

use crate::ConviError;
use std::{
	fmt,
	str::FromStr,
};



#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
/// # Color Filter.
///
/// One of a small set of fixed per-pixel color transforms. Only one filter
/// can be applied per conversion; alpha is never touched.
pub enum Filter {
	#[default]
	/// # No Filter.
	None,

	/// # Grayscale.
	///
	/// `0.3R + 0.59G + 0.11B` for each channel.
	Grayscale,

	/// # Sepia.
	///
	/// The standard sepia matrix, capped at `255`.
	Sepia,

	/// # Invert.
	///
	/// `255 - channel`.
	Invert,
}

impl fmt::Display for Filter {
	#[inline]
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for Filter {
	type Err = ConviError;

	fn from_str(src: &str) -> Result<Self, Self::Err> {
		match src.trim().to_ascii_lowercase().as_str() {
			"" | "none" => Ok(Self::None),
			"grayscale" | "greyscale" | "gray" | "grey" => Ok(Self::Grayscale),
			"sepia" => Ok(Self::Sepia),
			"invert" => Ok(Self::Invert),
			_ => Err(ConviError::Filter),
		}
	}
}

impl Filter {
	#[must_use]
	/// # As Str.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::None => "none",
			Self::Grayscale => "grayscale",
			Self::Sepia => "sepia",
			Self::Invert => "invert",
		}
	}

	/// # Apply.
	///
	/// Transform a contiguous RGBA buffer in place. Trailing bytes that do
	/// not make up a whole pixel are left alone.
	pub fn apply(self, pixels: &mut [u8]) {
		match self {
			Self::None => {},
			Self::Grayscale => for px in pixels.chunks_exact_mut(4) {
				let grey = channel(0.3 * f32::from(px[0]) + 0.59 * f32::from(px[1]) + 0.11 * f32::from(px[2]));
				px[0] = grey;
				px[1] = grey;
				px[2] = grey;
			},
			Self::Sepia => for px in pixels.chunks_exact_mut(4) {
				let r = f32::from(px[0]);
				let g = f32::from(px[1]);
				let b = f32::from(px[2]);
				px[0] = channel(r * 0.393 + g * 0.769 + b * 0.189);
				px[1] = channel(r * 0.349 + g * 0.686 + b * 0.168);
				px[2] = channel(r * 0.272 + g * 0.534 + b * 0.131);
			},
			Self::Invert => for px in pixels.chunks_exact_mut(4) {
				px[0] = 255 - px[0];
				px[1] = 255 - px[1];
				px[2] = 255 - px[2];
			},
		}
	}
}



#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // Clamped.
#[inline]
/// # Float to Channel.
///
/// Round to the nearest whole value (ties to even) and clamp to `0..=255`,
/// the same as a clamped pixel array would.
fn channel(v: f32) -> u8 { v.round_ties_even().clamp(0.0, 255.0) as u8 }



#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn t_from_str() {
		assert_eq!("".parse::<Filter>(), Ok(Filter::None));
		assert_eq!("None".parse::<Filter>(), Ok(Filter::None));
		assert_eq!("GRAYSCALE".parse::<Filter>(), Ok(Filter::Grayscale));
		assert_eq!("greyscale".parse::<Filter>(), Ok(Filter::Grayscale));
		assert_eq!(" sepia ".parse::<Filter>(), Ok(Filter::Sepia));
		assert_eq!("invert".parse::<Filter>(), Ok(Filter::Invert));
		assert_eq!("blur".parse::<Filter>(), Err(ConviError::Filter));
	}

	#[test]
	fn t_channel() {
		assert_eq!(channel(76.5), 76);
		assert_eq!(channel(77.5), 78);
		assert_eq!(channel(140.61), 141);
		assert_eq!(channel(-3.2), 0);
		assert_eq!(channel(300.0), 255);
	}

	#[test]
	fn t_grayscale() {
		let mut px = [100, 150, 201, 77];
		Filter::Grayscale.apply(&mut px);
		// 30 + 88.5 + 22.11 = 140.61
		assert_eq!(px, [141, 141, 141, 77]);

		let mut px = [255, 255, 255, 255];
		Filter::Grayscale.apply(&mut px);
		assert_eq!(px, [255, 255, 255, 255]);
	}

	#[test]
	fn t_sepia() {
		let mut px = [100, 150, 210, 255];
		Filter::Sepia.apply(&mut px);
		// R: 39.3 + 115.35 + 39.69 = 194.34
		// G: 34.9 + 102.9 + 35.28 = 173.08
		// B: 27.2 + 80.1 + 27.51 = 134.81
		assert_eq!(px, [194, 173, 135, 255]);

		// Bright colors get capped.
		let mut px = [255, 255, 255, 0];
		Filter::Sepia.apply(&mut px);
		assert_eq!(px, [255, 255, 239, 0]);
	}

	#[test]
	fn t_invert() {
		let mut px = [0, 1, 254, 9, 255, 128, 127, 10];
		Filter::Invert.apply(&mut px);
		assert_eq!(px, [255, 254, 1, 9, 0, 127, 128, 10]);

		// Twice is a round trip.
		Filter::Invert.apply(&mut px);
		assert_eq!(px, [0, 1, 254, 9, 255, 128, 127, 10]);
	}

	#[test]
	fn t_none() {
		let mut px = [1, 2, 3, 4, 5];
		Filter::None.apply(&mut px);
		assert_eq!(px, [1, 2, 3, 4, 5]);

		// Leftovers stay put.
		Filter::Invert.apply(&mut px);
		assert_eq!(px, [254, 253, 252, 4, 5]);
	}
}
