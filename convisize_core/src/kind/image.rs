/*!
# `ConviSize` - Image Kind
*/

use crate::{
	ConviError,
	ImageBmp,
	ImageGif,
	ImageJpeg,
	ImagePng,
	ImageWebp,
	traits::DecoderResult,
};
use std::fmt;



#[derive(Debug, Clone, Copy, Eq, PartialEq)]
/// # (Source) Image Kind.
///
/// These are the formats `ConviSize` can read. The kind is always determined
/// by the file's magic headers, never by its extension.
///
/// The formats on the other end of conversion are [`OutputKind`](crate::OutputKind).
pub enum ImageKind {
	/// # BMP.
	Bmp,

	/// # GIF.
	Gif,

	/// # JPEG.
	Jpeg,

	/// # PNG.
	Png,

	/// # WebP.
	Webp,
}

impl AsRef<str> for ImageKind {
	#[inline]
	fn as_ref(&self) -> &str { self.as_str() }
}

impl fmt::Display for ImageKind {
	#[inline]
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl TryFrom<&[u8]> for ImageKind {
	type Error = ConviError;

	/// # From Raw Bytes.
	///
	/// This examines the first 12 bytes of the raw image file to see what
	/// magic its headers contain.
	fn try_from(src: &[u8]) -> Result<Self, Self::Error> {
		// We need at least twelve bytes to hold header info!
		if src.len() > 12 {
			// PNG has just one way to be!
			if src[..8] == [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1A, b'\n'] {
				return Ok(Self::Png);
			}

			// JPEG markers vary after the SOI, so don't bother with them.
			if src[..3] == [0xFF, 0xD8, 0xFF] {
				return Ok(Self::Jpeg);
			}

			if src[..4] == *b"RIFF" && src[8..12] == *b"WEBP" {
				return Ok(Self::Webp);
			}

			if src[..6] == *b"GIF87a" || src[..6] == *b"GIF89a" {
				return Ok(Self::Gif);
			}

			// BMP only gets two bytes of magic, so also make sure the
			// reserved header words are zeroed.
			if src[..2] == *b"BM" && src[6..10] == [0, 0, 0, 0] {
				return Ok(Self::Bmp);
			}
		}

		Err(ConviError::Image)
	}
}

/// ## Getters.
impl ImageKind {
	#[must_use]
	/// # As String Slice.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Bmp => "BMP",
			Self::Gif => "GIF",
			Self::Jpeg => "JPEG",
			Self::Png => "PNG",
			Self::Webp => "WebP",
		}
	}

	#[must_use]
	/// # File Extension.
	pub const fn extension(self) -> &'static str {
		match self {
			Self::Bmp => "bmp",
			Self::Gif => "gif",
			Self::Jpeg => "jpg",
			Self::Png => "png",
			Self::Webp => "webp",
		}
	}

	#[must_use]
	/// # Media Type.
	pub const fn mime(self) -> &'static str {
		match self {
			Self::Bmp => "image/bmp",
			Self::Gif => "image/gif",
			Self::Jpeg => "image/jpeg",
			Self::Png => "image/png",
			Self::Webp => "image/webp",
		}
	}
}

/// ## Decoding.
impl ImageKind {
	/// # Decode.
	///
	/// Decode a raw image of this kind into RGBA pixels (and width, height,
	/// and color type).
	///
	/// ## Errors
	///
	/// This will bubble up any decoder errors encountered.
	pub(crate) fn decode(self, raw: &[u8]) -> Result<DecoderResult, ConviError> {
		use crate::traits::Decoder;

		match self {
			Self::Bmp => ImageBmp::decode(raw),
			Self::Gif => ImageGif::decode(raw),
			Self::Jpeg => ImageJpeg::decode(raw),
			Self::Png => ImagePng::decode(raw),
			Self::Webp => ImageWebp::decode(raw),
		}
	}
}



#[cfg(test)]
mod tests {
	use super::*;

	/// # Pad a Header.
	///
	/// Magic detection wants at least thirteen bytes to chew on.
	fn padded(head: &[u8]) -> Vec<u8> {
		let mut out = head.to_vec();
		out.resize(32, 0);
		out
	}

	#[test]
	fn t_magic() {
		for (head, kind) in [
			(&b"\x89PNG\r\n\x1a\n"[..], ImageKind::Png),
			(&[0xFF, 0xD8, 0xFF, 0xE0][..], ImageKind::Jpeg),
			(&[0xFF, 0xD8, 0xFF, 0xDB][..], ImageKind::Jpeg),
			(&b"RIFF\0\0\0\0WEBPVP8 "[..], ImageKind::Webp),
			(&b"GIF87a"[..], ImageKind::Gif),
			(&b"GIF89a"[..], ImageKind::Gif),
			(&b"BM\x36\0\0\0\0\0\0\0"[..], ImageKind::Bmp),
		] {
			assert_eq!(ImageKind::try_from(padded(head).as_slice()), Ok(kind));
		}
	}

	#[test]
	fn t_magic_bad() {
		// Too short.
		assert_eq!(ImageKind::try_from(&b"\x89PNG\r\n\x1a\n"[..]), Err(ConviError::Image));

		// Not an image.
		assert_eq!(
			ImageKind::try_from(padded(b"%PDF-1.5").as_slice()),
			Err(ConviError::Image),
		);

		// "BM" alone isn't enough.
		assert_eq!(
			ImageKind::try_from(padded(b"BMW is a car\0").as_slice()),
			Err(ConviError::Image),
		);
	}

	#[test]
	fn t_getters() {
		assert_eq!(ImageKind::Jpeg.extension(), "jpg");
		assert_eq!(ImageKind::Webp.mime(), "image/webp");
		assert_eq!(ImageKind::Gif.to_string(), "GIF");
	}
}
