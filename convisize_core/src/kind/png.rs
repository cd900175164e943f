/*!
# `ConviSize` - PNG Images.

PNGs are decoded and encoded with [`lodepng`](https://crates.io/crates/lodepng).
Encoding is always lossless and always RGBA; quality does not apply.
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
use rgb::ComponentSlice;



/// # PNG Image.
pub(crate) struct ImagePng;

impl Decoder for ImagePng {
	/// # Decode.
	fn decode(raw: &[u8]) -> Result<DecoderResult, ConviError> {
		let img = lodepng::decode32(raw).map_err(|_| ConviError::Decode)?;
		let size = img.width.checked_mul(img.height)
			.and_then(|x| x.checked_mul(4))
			.ok_or(ConviError::Overflow)?;

		let buf: Vec<u8> = ComponentSlice::as_slice(img.buffer.as_slice()).to_vec();
		if buf.len() == size {
			let color = ColorKind::from_rgba(&buf);
			Ok((buf, img.width, img.height, color))
		}
		else { Err(ConviError::Decode) }
	}
}

impl Encoder for ImagePng {
	/// # Encode.
	fn encode(input: &Input, _quality: Quality) -> Result<Vec<u8>, ConviError> {
		lodepng::encode32(input.pixels(), input.width(), input.height())
			.map_err(|_| ConviError::Encode)
	}
}
