/*!
# `ConviSize` - Traits.
*/

use crate::{
	ColorKind,
	ConviError,
	Input,
	Quality,
};



/// # The result type for `Decoder::decode`.
pub(crate) type DecoderResult = (Vec<u8>, usize, usize, ColorKind);

/// # Decoder.
///
/// This is implemented for image formats capable of decoding raw image data
/// into RGBA pixels.
pub(crate) trait Decoder {
	/// # Decode.
	///
	/// Decode the bytes from a raw image file into a contiguous `u8` buffer
	/// using 4 bytes (RGBA) per pixel.
	///
	/// RGB, greyscale, etc., should be upscaled accordingly.
	///
	/// ## Errors
	///
	/// Return any errors encountered during decoding.
	fn decode(raw: &[u8]) -> Result<DecoderResult, ConviError>;
}

/// # Encoder.
///
/// This is implemented for image formats capable of encoding from RGBA pixels
/// into a raw image.
pub(crate) trait Encoder {
	/// # Encode.
	///
	/// Encode the (already resized and filtered) pixels into a complete image
	/// file. Formats without a notion of quality are free to ignore it.
	///
	/// ## Errors
	///
	/// Return any errors encountered during encoding.
	fn encode(input: &Input, quality: Quality) -> Result<Vec<u8>, ConviError>;
}
