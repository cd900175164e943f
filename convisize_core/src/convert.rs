/*!
# `ConviSize` - Conversion
*/

use crate::{
	ConviError,
	Dimensions,
	Filter,
	ImageBmp,
	ImageGif,
	ImageJpeg,
	ImagePng,
	ImageWebp,
	Input,
	Output,
	OutputKind,
	Quality,
	traits::Encoder,
};



#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
/// # Conversion Settings.
///
/// Everything needed to turn an [`Input`] into an [`Output`]. The same
/// settings are applied to every image in a batch.
pub struct Settings {
	/// # Output Format.
	pub kind: OutputKind,

	/// # Encoding Quality.
	pub quality: Quality,

	/// # Target Dimensions.
	pub dimensions: Dimensions,

	/// # Color Filter.
	pub filter: Filter,
}



/// ## Conversion.
impl<'a> Input<'a> {
	/// # Prepare.
	///
	/// Resize the image to the dimensions resolved from the settings, then
	/// apply the filter.
	///
	/// If neither step changes anything, the result borrows this instance's
	/// pixels.
	///
	/// ## Errors
	///
	/// Returns an error if resampling fails.
	pub fn prepare(&'a self, settings: &Settings) -> Result<Self, ConviError> {
		let (width, height) = settings.dimensions.resolve(self.width_u32(), self.height_u32());
		let mut out = self.resize(width, height)?;
		out.apply_filter(settings.filter);
		Ok(out)
	}

	/// # Convert.
	///
	/// Prepare the image and encode it to the output format.
	///
	/// ## Errors
	///
	/// Returns an error if the image cannot be resized or encoded, or if the
	/// encoder produces something that doesn't look like the right format.
	pub fn convert(&self, settings: &Settings) -> Result<Output, ConviError> {
		let img = self.prepare(settings)?;
		let quality = settings.quality;
		let data = match settings.kind {
			OutputKind::Jpeg => ImageJpeg::encode(&img, quality),
			OutputKind::Png => ImagePng::encode(&img, quality),
			OutputKind::Webp => ImageWebp::encode(&img, quality),
			OutputKind::Pdf => crate::pdf::single(&img, quality),
			OutputKind::Gif => ImageGif::encode(&img, quality),
			OutputKind::Bmp => ImageBmp::encode(&img, quality),
		}?;

		Output::new(data, settings.kind, img.width_u32(), img.height_u32(), quality)
	}
}



#[cfg(test)]
mod tests {
	use super::*;
	use crate::{
		ColorKind,
		ImageKind,
	};

	/// # Test Image.
	///
	/// A horizontal gradient with a translucent right half.
	fn gradient(width: usize, height: usize) -> Input<'static> {
		let mut buf = Vec::with_capacity(width * height * 4);
		for _ in 0..height {
			for x in 0..width {
				#[allow(clippy::cast_possible_truncation)]
				let v = (x * 255 / width) as u8;
				let a = if x < width / 2 { 255 } else { 128 };
				buf.extend_from_slice(&[v, 64, 255 - v, a]);
			}
		}
		Input::from_rgba(buf, width, height).expect("Invalid input.")
	}

	#[test]
	fn t_convert_kinds() {
		let img = gradient(32, 16);
		for kind in OutputKind::ALL {
			let settings = Settings { kind, ..Settings::default() };
			let out = img.convert(&settings)
				.unwrap_or_else(|e| panic!("{kind} failed: {e}"));

			assert_eq!(out.kind(), kind);
			assert_eq!(out.width(), 32);
			assert_eq!(out.height(), 16);
			assert!(out.size().is_some());

			if kind == OutputKind::Pdf { assert!(out.starts_with(b"%PDF-")); }
			else {
				let decoded = Input::try_from(out.as_ref())
					.unwrap_or_else(|e| panic!("{kind} decode failed: {e}"));
				assert_eq!(decoded.width(), 32, "{kind}");
				assert_eq!(decoded.height(), 16, "{kind}");
			}
		}
	}

	#[test]
	fn t_convert_alpha() {
		let img = gradient(8, 8);

		// PNG keeps transparency.
		let settings = Settings { kind: OutputKind::Png, ..Settings::default() };
		let out = img.convert(&settings).expect("PNG failed.");
		let decoded = Input::try_from(out.as_ref()).expect("PNG decode failed.");
		assert_eq!(decoded.kind(), Some(ImageKind::Png));
		assert_eq!(decoded.pixels(), img.pixels());

		// JPEG does not.
		let settings = Settings { kind: OutputKind::Jpeg, ..Settings::default() };
		let out = img.convert(&settings).expect("JPEG failed.");
		let decoded = Input::try_from(out.as_ref()).expect("JPEG decode failed.");
		assert!(! decoded.has_alpha());
	}

	#[test]
	fn t_convert_resize_filter() {
		let img = gradient(40, 20);
		let settings = Settings {
			kind: OutputKind::Png,
			quality: Quality::default(),
			dimensions: Dimensions::default().with_width(10),
			filter: Filter::Grayscale,
		};

		let out = img.convert(&settings).expect("Conversion failed.");
		assert_eq!(out.width(), 10);
		assert_eq!(out.height(), 5);

		let decoded = Input::try_from(out.as_ref()).expect("Decode failed.");
		assert_eq!(decoded.color(), ColorKind::GreyAlpha);

		// Unlocked dimensions can stretch.
		let settings = Settings {
			kind: OutputKind::Bmp,
			dimensions: Dimensions::default().with_lock(false).with_height(7),
			..Settings::default()
		};
		let out = img.convert(&settings).expect("Conversion failed.");
		assert_eq!((out.width(), out.height()), (40, 7));
	}

	#[test]
	fn t_prepare_borrow() {
		let img = gradient(4, 4);
		let same = img.prepare(&Settings::default()).expect("Prepare failed.");
		assert_eq!(same.pixels().as_ptr(), img.pixels().as_ptr());
	}
}
