/*!
# `ConviSize` - BMP Images.
*/

use crate::{
	ColorKind,
	ConviError,
	Input,
	Quality,
	traits::{
		Decoder,
		DecoderResult,
		Encoder,
	},
};
use image::{
	codecs::bmp::BmpEncoder,
	ExtendedColorType,
	ImageEncoder,
	ImageFormat,
};



/// # BMP Image.
pub(crate) struct ImageBmp;

impl Decoder for ImageBmp {
	/// # Decode.
	fn decode(raw: &[u8]) -> Result<DecoderResult, ConviError> {
		let img = image::load_from_memory_with_format(raw, ImageFormat::Bmp)
			.map_err(|_| ConviError::Decode)?
			.into_rgba8();

		let width = usize::try_from(img.width()).map_err(|_| ConviError::Overflow)?;
		let height = usize::try_from(img.height()).map_err(|_| ConviError::Overflow)?;
		let buf = img.into_raw();
		let color = ColorKind::from_rgba(&buf);

		Ok((buf, width, height, color))
	}
}

impl Encoder for ImageBmp {
	/// # Encode.
	///
	/// Images with transparency are saved as 32-bit BMPs, everything else as
	/// plain 24-bit.
	fn encode(input: &Input, _quality: Quality) -> Result<Vec<u8>, ConviError> {
		let mut out = Vec::new();
		let enc = BmpEncoder::new(&mut out);

		let res =
			if input.has_alpha() {
				enc.write_image(
					input.pixels(),
					input.width_u32(),
					input.height_u32(),
					ExtendedColorType::Rgba8,
				)
			}
			else {
				enc.write_image(
					&input.flatten(),
					input.width_u32(),
					input.height_u32(),
					ExtendedColorType::Rgb8,
				)
			};

		res.map_err(|_| ConviError::Encode)?;
		Ok(out)
	}
}
