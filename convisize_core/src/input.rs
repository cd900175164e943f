/*!
# `ConviSize` - Input Image
*/

use crate::{
	ColorKind,
	ConviError,
	Filter,
	ImageKind,
};
use image::{
	imageops::FilterType,
	ImageBuffer,
	Rgba,
};
use std::{
	borrow::Cow,
	fmt,
	num::{
		NonZeroU32,
		NonZeroUsize,
	},
	ops::Deref,
};



#[derive(Clone)]
/// # Input Image.
///
/// This struct holds _decoded_ image data in the form of a contiguous RGBA
/// (4-byte) slice, along with its dimensions and a few other details.
///
/// Both `AsRef<[u8]>` and `Deref` traits are implemented to provide raw access
/// to the pixel slice.
///
/// Instantiation from a file uses `TryFrom<&[u8]>`, which expects the raw
/// (undecoded) file bytes. JPEG, PNG, WebP, GIF, and BMP sources are
/// supported. Already-decoded pixels can be wrapped with [`Input::from_rgba`].
///
/// Resampling via [`Input::resize`] borrows when the dimensions are
/// unchanged, so the common "no resize" case costs nothing.
///
/// ## Examples
///
/// ```no_run
/// use convisize_core::Input;
///
/// let raw = std::fs::read("/path/to/my.jpg").unwrap();
/// let input = Input::try_from(raw.as_slice()).unwrap();
/// ```
pub struct Input<'a> {
	/// # Image Pixels.
	pixels: Cow<'a, [u8]>,

	/// # Image Width.
	width: NonZeroU32,

	/// # Image Height.
	height: NonZeroU32,

	/// # Original File Size.
	size: Option<NonZeroUsize>,

	/// # Color Kind.
	color: ColorKind,

	/// # Source Kind.
	kind: Option<ImageKind>,
}

impl AsRef<[u8]> for Input<'_> {
	#[inline]
	fn as_ref(&self) -> &[u8] { self }
}

impl fmt::Debug for Input<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Input")
		.field("width", &self.width)
		.field("height", &self.height)
		.field("size", &self.size)
		.field("color", &self.color)
		.field("kind", &self.kind)
		.finish_non_exhaustive()
	}
}

impl Deref for Input<'_> {
	type Target = [u8];

	#[inline]
	fn deref(&self) -> &Self::Target { self.pixels.as_ref() }
}

impl TryFrom<&[u8]> for Input<'_> {
	type Error = ConviError;

	fn try_from(src: &[u8]) -> Result<Self, Self::Error> {
		let kind = ImageKind::try_from(src)?;
		let (buf, width, height, color) = kind.decode(src).map_err(|e|
			if e == ConviError::Decode { ConviError::ImageDecode(kind) }
			else { e }
		)?;

		let mut out = Self::from_parts(Cow::Owned(buf), width, height, color)?;
		out.size = NonZeroUsize::new(src.len());
		out.kind.replace(kind);
		Ok(out)
	}
}

/// ## Instantiation.
impl<'a> Input<'a> {
	/// # From RGBA.
	///
	/// Wrap an existing RGBA buffer.
	///
	/// ## Errors
	///
	/// This will return an error if either dimension is zero or does not fit
	/// a `u32`, or if the buffer is not exactly `width * height * 4` bytes.
	pub fn from_rgba(pixels: Vec<u8>, width: usize, height: usize)
	-> Result<Self, ConviError> {
		let color = ColorKind::from_rgba(&pixels);
		Self::from_parts(Cow::Owned(pixels), width, height, color)
	}

	/// # From Parts.
	fn from_parts(
		pixels: Cow<'a, [u8]>,
		width: usize,
		height: usize,
		color: ColorKind,
	) -> Result<Self, ConviError> {
		let width = u32::try_from(width).ok()
			.and_then(NonZeroU32::new)
			.ok_or(ConviError::Overflow)?;

		let height = u32::try_from(height).ok()
			.and_then(NonZeroU32::new)
			.ok_or(ConviError::Overflow)?;

		let expected = (width.get() as usize).checked_mul(height.get() as usize)
			.and_then(|x| x.checked_mul(4))
			.ok_or(ConviError::Overflow)?;
		if pixels.len() != expected { return Err(ConviError::Overflow); }

		Ok(Self {
			pixels,
			width,
			height,
			size: None,
			color,
			kind: None,
		})
	}
}

/// ## Getters.
impl Input<'_> {
	#[must_use]
	/// # Aspect Ratio.
	///
	/// Return the width divided by the height.
	pub fn aspect_ratio(&self) -> f64 {
		f64::from(self.width.get()) / f64::from(self.height.get())
	}

	#[inline]
	#[must_use]
	/// # Color Kind.
	///
	/// This returns a [`ColorKind`] variant representing the channels actually
	/// used by the image.
	pub const fn color(&self) -> ColorKind { self.color }

	#[inline]
	#[must_use]
	/// # Has Alpha?
	///
	/// This returns true if any pixel has an alpha value other than `255`.
	pub const fn has_alpha(&self) -> bool { self.color.has_alpha() }

	#[inline]
	#[must_use]
	/// # Height.
	pub const fn height(&self) -> usize { self.height.get() as usize }

	#[inline]
	#[must_use]
	/// # Height (u32).
	pub const fn height_u32(&self) -> u32 { self.height.get() }

	#[inline]
	#[must_use]
	/// # Source Kind.
	///
	/// This returns the format the image was decoded from, or `None` if it
	/// was built from raw pixels.
	pub const fn kind(&self) -> Option<ImageKind> { self.kind }

	#[inline]
	#[must_use]
	/// # Pixels.
	pub fn pixels(&self) -> &[u8] { &self.pixels }

	#[inline]
	#[must_use]
	/// # Original File Size.
	///
	/// This returns the byte size of the source file, if any.
	pub const fn size(&self) -> Option<NonZeroUsize> { self.size }

	#[inline]
	#[must_use]
	/// # Width.
	pub const fn width(&self) -> usize { self.width.get() as usize }

	#[inline]
	#[must_use]
	/// # Width (u32).
	pub const fn width_u32(&self) -> u32 { self.width.get() }
}

/// ## Raster Operations.
impl<'a> Input<'a> {
	#[must_use]
	/// # Borrow.
	///
	/// Return a copy of the instance that borrows this one's pixel buffer.
	pub fn borrow(&'a self) -> Self {
		Self {
			pixels: Cow::Borrowed(self.pixels.as_ref()),
			width: self.width,
			height: self.height,
			size: self.size,
			color: self.color,
			kind: self.kind,
		}
	}

	/// # Resize.
	///
	/// Resample the image to the given dimensions using bilinear filtering,
	/// the same as a canvas would when drawing at a different size. Images
	/// with transparency are sampled with premultiplied alpha.
	///
	/// If the dimensions are unchanged, a borrowed copy is returned instead.
	///
	/// ## Errors
	///
	/// This will return an error if either dimension is zero.
	pub fn resize(&'a self, width: u32, height: u32) -> Result<Self, ConviError> {
		if width == self.width.get() && height == self.height.get() {
			return Ok(self.borrow());
		}

		let width = NonZeroU32::new(width).ok_or(ConviError::Overflow)?;
		let height = NonZeroU32::new(height).ok_or(ConviError::Overflow)?;

		let pixels =
			if self.color.has_alpha() { self.resize_premultiplied(width, height)? }
			else {
				let src = ImageBuffer::<Rgba<u8>, &[u8]>::from_raw(
					self.width.get(),
					self.height.get(),
					self.pixels.as_ref(),
				)
					.ok_or(ConviError::Overflow)?;

				image::imageops::resize(
					&src,
					width.get(),
					height.get(),
					FilterType::Triangle,
				)
					.into_raw()
			};

		Ok(Self {
			color: ColorKind::from_rgba(&pixels),
			pixels: Cow::Owned(pixels),
			width,
			height,
			size: self.size,
			kind: self.kind,
		})
	}

	/// # Resize (Premultiplied).
	///
	/// The color channels are weighted by alpha (on a `0.0..=1.0` scale)
	/// while sampling, then divided back out, so fully transparent pixels
	/// contribute nothing to their neighbors.
	fn resize_premultiplied(&self, width: NonZeroU32, height: NonZeroU32)
	-> Result<Vec<u8>, ConviError> {
		let raw: Vec<f32> = self.pixels.chunks_exact(4)
			.flat_map(|px| {
				let a = f32::from(px[3]) / 255.0;
				[
					f32::from(px[0]) / 255.0 * a,
					f32::from(px[1]) / 255.0 * a,
					f32::from(px[2]) / 255.0 * a,
					a,
				]
			})
			.collect();

		let src = ImageBuffer::<Rgba<f32>, Vec<f32>>::from_raw(
			self.width.get(),
			self.height.get(),
			raw,
		)
			.ok_or(ConviError::Overflow)?;

		let out = image::imageops::resize(
			&src,
			width.get(),
			height.get(),
			FilterType::Triangle,
		)
			.into_raw();

		Ok(
			out.chunks_exact(4)
				.flat_map(|px| {
					let a = px[3];
					match unit(a) {
						0 => [0, 0, 0, 0],
						alpha => [unit(px[0] / a), unit(px[1] / a), unit(px[2] / a), alpha],
					}
				})
				.collect()
		)
	}

	/// # Apply Filter.
	///
	/// Run a color filter over the pixels in place. If the buffer is
	/// borrowed, it will be copied first.
	pub fn apply_filter(&mut self, filter: Filter) {
		if filter != Filter::None {
			filter.apply(self.pixels.to_mut());
			self.color = ColorKind::from_rgba(&self.pixels);
		}
	}

	#[must_use]
	/// # Flatten (RGB).
	///
	/// Return the pixels as 3-byte RGB, compositing any transparency against
	/// black.
	pub fn flatten(&self) -> Vec<u8> {
		let mut out = Vec::with_capacity(self.width() * self.height() * 3);
		if self.has_alpha() {
			for px in self.pixels.chunks_exact(4) {
				let a = u16::from(px[3]);
				for &c in &px[..3] {
					#[allow(clippy::cast_possible_truncation)] // Max is 255.
					out.push(((u16::from(c) * a + 127) / 255) as u8);
				}
			}
		}
		else {
			for px in self.pixels.chunks_exact(4) {
				out.extend_from_slice(&px[..3]);
			}
		}
		out
	}
}



#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // Clamped.
#[inline]
/// # Unit Float to Channel.
fn unit(v: f32) -> u8 { (v * 255.0).round_ties_even().clamp(0.0, 255.0) as u8 }



#[cfg(test)]
mod tests {
	use super::*;

	/// # Checkerboard.
	///
	/// Build a simple RGBA raster for testing.
	fn checkers(width: usize, height: usize) -> Vec<u8> {
		let mut out = Vec::with_capacity(width * height * 4);
		for y in 0..height {
			for x in 0..width {
				if (x + y) % 2 == 0 { out.extend_from_slice(&[255, 0, 0, 255]); }
				else { out.extend_from_slice(&[0, 0, 255, 255]); }
			}
		}
		out
	}

	#[test]
	fn t_from_rgba() {
		let input = Input::from_rgba(checkers(4, 2), 4, 2).expect("Valid input.");
		assert_eq!(input.width(), 4);
		assert_eq!(input.height(), 2);
		assert_eq!(input.color(), ColorKind::Rgb);
		assert_eq!(input.kind(), None);
		assert_eq!(input.size(), None);
		assert!((input.aspect_ratio() - 2.0).abs() < f64::EPSILON);

		// Bad sizes.
		assert_eq!(Input::from_rgba(checkers(4, 2), 4, 3).unwrap_err(), ConviError::Overflow);
		assert_eq!(Input::from_rgba(Vec::new(), 0, 0).unwrap_err(), ConviError::Overflow);
	}

	#[test]
	fn t_resize() {
		let input = Input::from_rgba(checkers(8, 6), 8, 6).expect("Valid input.");

		// Same size is a borrow.
		let same = input.resize(8, 6).expect("Resize failed.");
		assert!(matches!(same.pixels, Cow::Borrowed(_)));

		// Different sizes are new.
		let small = input.resize(4, 3).expect("Resize failed.");
		assert_eq!(small.width(), 4);
		assert_eq!(small.height(), 3);
		assert_eq!(small.len(), 4 * 3 * 4);

		let big = input.resize(16, 1).expect("Resize failed.");
		assert_eq!(big.len(), 16 * 4);

		assert!(input.resize(0, 3).is_err());
	}

	#[test]
	fn t_resize_alpha() {
		// Invisible red beside opaque blue.
		let input = Input::from_rgba(vec![255, 0, 0, 0, 0, 0, 255, 255], 2, 1)
			.expect("Valid input.");
		assert!(input.has_alpha());

		// No red may leak into anything visible.
		for (w, h) in [(1, 1), (4, 1), (5, 3)] {
			let out = input.resize(w, h).expect("Resize failed.");
			let mut visible = 0;
			for px in out.chunks_exact(4) {
				if px[3] == 0 { assert_eq!(px, [0, 0, 0, 0]); }
				else {
					assert_eq!(&px[..3], [0, 0, 255], "{w}x{h}");
					visible += 1;
				}
			}
			assert!(visible > 0, "{w}x{h}");
		}

		// Opaque sources take the straight path and stay opaque.
		let input = Input::from_rgba(checkers(4, 4), 4, 4).expect("Valid input.");
		assert!(! input.has_alpha());
		let out = input.resize(2, 2).expect("Resize failed.");
		assert!(out.chunks_exact(4).all(|px| px[3] == 255));
	}

	#[test]
	fn t_flatten() {
		let input = Input::from_rgba(
			vec![200, 100, 50, 255, 200, 100, 50, 0, 200, 100, 50, 128],
			3,
			1,
		).expect("Valid input.");
		assert!(input.has_alpha());
		assert_eq!(
			input.flatten(),
			vec![200, 100, 50, 0, 0, 0, 100, 50, 25],
		);

		let opaque = Input::from_rgba(checkers(2, 1), 2, 1).expect("Valid input.");
		assert_eq!(opaque.flatten(), vec![255, 0, 0, 0, 0, 255]);
	}

	#[test]
	fn t_filter() {
		let mut input = Input::from_rgba(checkers(2, 1), 2, 1).expect("Valid input.");
		input.apply_filter(Filter::Invert);
		assert_eq!(input.pixels(), &[0, 255, 255, 255, 255, 255, 0, 255]);

		// Filters on a borrow leave the original alone.
		let original = Input::from_rgba(checkers(2, 1), 2, 1).expect("Valid input.");
		let mut copy = original.borrow();
		copy.apply_filter(Filter::Grayscale);
		assert_eq!(original.pixels(), checkers(2, 1).as_slice());
		assert_eq!(copy.color(), ColorKind::Grey);
	}
}
