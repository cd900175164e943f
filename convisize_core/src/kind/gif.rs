/*!
# `ConviSize` - GIF Images.

GIF support comes by way of [`image`](https://crates.io/crates/image). Only
the first frame of an animation is read, and only a single frame is written.
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
	codecs::gif::GifEncoder,
	ExtendedColorType,
	ImageFormat,
};



/// # Quantization Speed.
///
/// `1..=30`; higher is faster with a (slightly) worse palette.
const GIF_SPEED: i32 = 10;



/// # GIF Image.
pub(crate) struct ImageGif;

impl Decoder for ImageGif {
	/// # Decode.
	fn decode(raw: &[u8]) -> Result<DecoderResult, ConviError> {
		let img = image::load_from_memory_with_format(raw, ImageFormat::Gif)
			.map_err(|_| ConviError::Decode)?
			.into_rgba8();

		let width = usize::try_from(img.width()).map_err(|_| ConviError::Overflow)?;
		let height = usize::try_from(img.height()).map_err(|_| ConviError::Overflow)?;
		let buf = img.into_raw();
		let color = ColorKind::from_rgba(&buf);

		Ok((buf, width, height, color))
	}
}

impl Encoder for ImageGif {
	/// # Encode.
	///
	/// The palette is quantized down to 256 colors; quality does not apply.
	fn encode(input: &Input, _quality: Quality) -> Result<Vec<u8>, ConviError> {
		let width = input.width_u32();
		let height = input.height_u32();
		if width > u32::from(u16::MAX) || height > u32::from(u16::MAX) {
			return Err(ConviError::Overflow);
		}

		let mut out = Vec::new();

		// The trailer is only written once the encoder is dropped, hence the
		// extra scope.
		{
			let mut enc = GifEncoder::new_with_speed(&mut out, GIF_SPEED);
			enc.encode(input.pixels(), width, height, ExtendedColorType::Rgba8)
				.map_err(|_| ConviError::Encode)?;
		}

		Ok(out)
	}
}
