/*!
# `ConviSize` - Color Kind
*/

use std::fmt;



#[derive(Debug, Clone, Copy, Eq, PartialEq)]
/// # Source Image Color.
///
/// This describes which channels a decoded image actually makes use of.
/// Storage is always RGBA regardless; this is informational, and tells the
/// JPEG/PDF encoders whether there is any alpha to flatten away.
///
/// Alpha kinds require at least one pixel with an alpha less than `255`.
/// Grey kinds require every pixel to have equal R, G, and B values.
pub enum ColorKind {
	/// # Greyscale.
	Grey,
	/// # Greyscale with Alpha.
	GreyAlpha,
	/// # RGB.
	Rgb,
	/// # RGB with Alpha.
	Rgba,
}

impl fmt::Display for ColorKind {
	#[inline]
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// # Getters.
impl ColorKind {
	#[must_use]
	/// # As Str.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Grey => "greyscale",
			Self::GreyAlpha => "greyscale+alpha",
			Self::Rgb => "RGB",
			Self::Rgba => "RGBA",
		}
	}

	#[inline]
	#[must_use]
	/// # Total Channels.
	pub const fn channels(self) -> u8 {
		match self {
			Self::Grey => 1,
			Self::GreyAlpha => 2,
			Self::Rgb => 3,
			Self::Rgba => 4,
		}
	}

	#[inline]
	#[must_use]
	/// # Has Alpha?
	pub const fn has_alpha(self) -> bool {
		matches!(self, Self::GreyAlpha | Self::Rgba)
	}

	#[inline]
	#[must_use]
	/// # Is Color?
	pub const fn is_color(self) -> bool {
		matches!(self, Self::Rgb | Self::Rgba)
	}

	#[inline]
	#[must_use]
	/// # Is Greyscale?
	pub const fn is_greyscale(self) -> bool {
		matches!(self, Self::Grey | Self::GreyAlpha)
	}
}

/// # Setters.
impl ColorKind {
	#[must_use]
	/// # From RGBA.
	///
	/// Scan a 4-byte pixel slice to see which channels are in use. Scanning
	/// stops as soon as both color and alpha have been spotted.
	pub fn from_rgba(src: &[u8]) -> Self {
		let mut color = false;
		let mut alpha = false;
		for px in src.chunks_exact(4) {
			color = color || px[0] != px[1] || px[0] != px[2];
			alpha = alpha || px[3] != 255;
			if color && alpha { return Self::Rgba; }
		}

		match (color, alpha) {
			(true, _) => Self::Rgb,
			(false, true) => Self::GreyAlpha,
			(false, false) => Self::Grey,
		}
	}
}
