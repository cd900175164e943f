/*!
# `ConviSize` - Dimensions
*/

use crate::ConviError;
use std::num::NonZeroU32;



/// # Maximum Dimension.
///
/// Neither output side may exceed this many pixels.
pub const MAX_DIMENSION: u32 = 5000;

/// # Minimum Dimension.
pub const MIN_DIMENSION: u32 = 1;



#[derive(Debug, Clone, Copy, Eq, PartialEq)]
/// # Target Dimensions.
///
/// This holds the user's requested output width and/or height, along with
/// the aspect-ratio lock.
///
/// Nothing is requested by default, meaning images keep their original
/// size. The lock is on by default; when on, an explicit width wins over an
/// explicit height, and the other side is derived from each image's own
/// ratio.
///
/// Whatever the source of the numbers, [`Dimensions::resolve`] always
/// returns values within `MIN_DIMENSION..=MAX_DIMENSION`.
pub struct Dimensions {
	width: Option<NonZeroU32>,
	height: Option<NonZeroU32>,
	lock: bool,
}

impl Default for Dimensions {
	#[inline]
	fn default() -> Self {
		Self {
			width: None,
			height: None,
			lock: true,
		}
	}
}

/// ## Setters.
impl Dimensions {
	#[must_use]
	/// # With Width.
	///
	/// A value of zero is treated as "not requested".
	pub const fn with_width(mut self, width: u32) -> Self {
		self.width = NonZeroU32::new(width);
		self
	}

	#[must_use]
	/// # With Height.
	///
	/// A value of zero is treated as "not requested".
	pub const fn with_height(mut self, height: u32) -> Self {
		self.height = NonZeroU32::new(height);
		self
	}

	#[must_use]
	/// # With Aspect-Ratio Lock.
	pub const fn with_lock(mut self, lock: bool) -> Self {
		self.lock = lock;
		self
	}
}

/// ## Getters.
impl Dimensions {
	#[inline]
	#[must_use]
	/// # Requested Width.
	pub const fn width(&self) -> Option<NonZeroU32> { self.width }

	#[inline]
	#[must_use]
	/// # Requested Height.
	pub const fn height(&self) -> Option<NonZeroU32> { self.height }

	#[inline]
	#[must_use]
	/// # Aspect-Ratio Locked?
	pub const fn lock(&self) -> bool { self.lock }

	#[inline]
	#[must_use]
	/// # Anything Requested?
	pub const fn is_resize(&self) -> bool {
		self.width.is_some() || self.height.is_some()
	}
}

/// ## Resolution.
impl Dimensions {
	#[must_use]
	/// # Resolve.
	///
	/// Work out the final output size for an image of the given original
	/// dimensions.
	pub fn resolve(&self, width: u32, height: u32) -> (u32, u32) {
		let ratio = ratio(width, height);
		let (w, h) = match (self.width, self.height, self.lock) {
			(Some(w), _, true) => (w.get(), height_from_width(w.get(), ratio).unwrap_or(height)),
			(None, Some(h), true) => (width_from_height(h.get(), ratio).unwrap_or(width), h.get()),
			(w, h, _) => (
				w.map_or(width, NonZeroU32::get),
				h.map_or(height, NonZeroU32::get),
			),
		};

		(clamp(w), clamp(h))
	}
}



/// # Parse Dimension.
///
/// Parse a user-supplied dimension. Empty values and zero mean "not
/// requested" and come back as `None`; anything else must be a whole number.
/// Numbers beyond the maximum are clamped rather than rejected.
///
/// ## Errors
///
/// Non-numeric values are rejected.
pub fn parse_dimension(src: &str) -> Result<Option<u32>, ConviError> {
	let src = src.trim();
	if src.is_empty() { return Ok(None); }

	// Anything too big for a u32 is too big, period.
	if src.bytes().all(|b| b.is_ascii_digit()) {
		let v = src.parse::<u32>().unwrap_or(MAX_DIMENSION);
		Ok(if v == 0 { None } else { Some(clamp(v)) })
	}
	else { Err(ConviError::Dimension) }
}

#[must_use]
/// # Height From Width.
///
/// Recompute the height for a new width given the original aspect ratio
/// (`width / height`). Returns `None` if the width is zero or the ratio is
/// unusable.
pub fn height_from_width(width: u32, ratio: f64) -> Option<u32> {
	if width == 0 || ! ratio.is_normal() || ratio < 0.0 { return None; }
	to_u32(f64::from(width) / ratio)
}

#[must_use]
/// # Width From Height.
///
/// Recompute the width for a new height given the original aspect ratio
/// (`width / height`). Returns `None` if the height is zero or the ratio is
/// unusable.
pub fn width_from_height(height: u32, ratio: f64) -> Option<u32> {
	if height == 0 || ! ratio.is_normal() || ratio < 0.0 { return None; }
	to_u32(f64::from(height) * ratio)
}

#[inline]
/// # Clamp.
const fn clamp(v: u32) -> u32 {
	if v < MIN_DIMENSION { MIN_DIMENSION }
	else if v > MAX_DIMENSION { MAX_DIMENSION }
	else { v }
}

/// # Ratio.
fn ratio(width: u32, height: u32) -> f64 {
	if height == 0 { 1.0 }
	else { f64::from(width) / f64::from(height) }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // Checked.
/// # Round to U32.
fn to_u32(v: f64) -> Option<u32> {
	let v = v.round();
	if v.is_finite() && (0.0..=f64::from(u32::MAX)).contains(&v) { Some(v as u32) }
	else { None }
}



#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn t_resolve_default() {
		let dims = Dimensions::default();
		assert!(dims.lock());
		assert!(! dims.is_resize());
		assert_eq!(dims.resolve(800, 600), (800, 600));

		// Originals are still clamped.
		assert_eq!(dims.resolve(8000, 600), (5000, 600));
	}

	#[test]
	fn t_resolve_locked() {
		// Width drives height.
		let dims = Dimensions::default().with_width(400);
		assert_eq!(dims.resolve(800, 600), (400, 300));
		assert_eq!(dims.resolve(600, 800), (400, 533));

		// Height drives width.
		let dims = Dimensions::default().with_height(300);
		assert_eq!(dims.resolve(800, 600), (400, 300));

		// Width wins when both are set.
		let dims = Dimensions::default().with_width(100).with_height(999);
		assert_eq!(dims.resolve(200, 100), (100, 50));

		// Extreme ratios still land in range.
		let dims = Dimensions::default().with_width(1);
		assert_eq!(dims.resolve(1000, 1), (1, 1));
		let dims = Dimensions::default().with_width(4000);
		assert_eq!(dims.resolve(1, 1000), (4000, 5000));
	}

	#[test]
	fn t_resolve_unlocked() {
		let dims = Dimensions::default().with_lock(false).with_width(123);
		assert_eq!(dims.resolve(800, 600), (123, 600));

		let dims = Dimensions::default().with_lock(false).with_height(45);
		assert_eq!(dims.resolve(800, 600), (800, 45));

		let dims = Dimensions::default().with_lock(false).with_width(10).with_height(20);
		assert_eq!(dims.resolve(800, 600), (10, 20));

		// Zero means not requested.
		let dims = Dimensions::default().with_lock(false).with_width(0);
		assert!(! dims.is_resize());
		assert_eq!(dims.resolve(800, 600), (800, 600));
	}

	#[test]
	fn t_parse_dimension() {
		assert_eq!(parse_dimension(""), Ok(None));
		assert_eq!(parse_dimension("0"), Ok(None));
		assert_eq!(parse_dimension(" 640 "), Ok(Some(640)));
		assert_eq!(parse_dimension("5001"), Ok(Some(5000)));
		assert_eq!(parse_dimension("99999999999999"), Ok(Some(5000)));
		assert_eq!(parse_dimension("-5"), Err(ConviError::Dimension));
		assert_eq!(parse_dimension("12px"), Err(ConviError::Dimension));
	}

	#[test]
	fn t_ratio_helpers() {
		let ratio = 16.0 / 9.0;
		assert_eq!(height_from_width(1920, ratio), Some(1080));
		assert_eq!(width_from_height(1080, ratio), Some(1920));
		assert_eq!(height_from_width(0, ratio), None);
		assert_eq!(width_from_height(10, f64::NAN), None);
		assert_eq!(width_from_height(10, 0.0), None);
	}
}
