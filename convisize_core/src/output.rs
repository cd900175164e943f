/*!
# `ConviSize` - Output
*/

use base64::{
	engine::general_purpose::STANDARD,
	Engine,
};
use crate::{
	ConviError,
	ImageKind,
	Quality,
};
use std::{
	fmt,
	num::{
		NonZeroU32,
		NonZeroUsize,
	},
	ops::Deref,
	str::FromStr,
};



#[derive(Debug, Clone, Copy, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
/// # Output Kind.
///
/// These are the formats `ConviSize` can write.
pub enum OutputKind {
	#[default]
	/// # JPEG.
	Jpeg,

	/// # PNG.
	Png,

	/// # WebP.
	Webp,

	/// # PDF.
	Pdf,

	/// # GIF.
	Gif,

	/// # BMP.
	Bmp,
}

impl AsRef<str> for OutputKind {
	#[inline]
	fn as_ref(&self) -> &str { self.as_str() }
}

impl fmt::Display for OutputKind {
	#[inline]
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for OutputKind {
	type Err = ConviError;

	fn from_str(src: &str) -> Result<Self, Self::Err> {
		let src = src.trim();
		let src = src.strip_prefix('.').unwrap_or(src);
		match src.to_ascii_lowercase().as_str() {
			"jpg" | "jpeg" => Ok(Self::Jpeg),
			"png" => Ok(Self::Png),
			"webp" => Ok(Self::Webp),
			"pdf" => Ok(Self::Pdf),
			"gif" => Ok(Self::Gif),
			"bmp" => Ok(Self::Bmp),
			_ => Err(ConviError::Format),
		}
	}
}

impl OutputKind {
	/// # All Kinds.
	///
	/// Ordered by popularity, which is also the order they're listed in the
	/// help screen.
	pub const ALL: [Self; 6] = [
		Self::Jpeg,
		Self::Png,
		Self::Webp,
		Self::Pdf,
		Self::Gif,
		Self::Bmp,
	];

	#[must_use]
	/// # As Str.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Jpeg => "JPEG",
			Self::Png => "PNG",
			Self::Webp => "WebP",
			Self::Pdf => "PDF",
			Self::Gif => "GIF",
			Self::Bmp => "BMP",
		}
	}

	#[must_use]
	/// # Extension.
	///
	/// Return the file extension, without leading period.
	pub const fn extension(self) -> &'static str {
		match self {
			Self::Jpeg => "jpg",
			Self::Png => "png",
			Self::Webp => "webp",
			Self::Pdf => "pdf",
			Self::Gif => "gif",
			Self::Bmp => "bmp",
		}
	}

	#[must_use]
	/// # Media Type.
	pub const fn mime(self) -> &'static str {
		match self {
			Self::Jpeg => "image/jpeg",
			Self::Png => "image/png",
			Self::Webp => "image/webp",
			Self::Pdf => "application/pdf",
			Self::Gif => "image/gif",
			Self::Bmp => "image/bmp",
		}
	}

	#[must_use]
	/// # Data URL.
	///
	/// Return the data as a base64-encoded `data:` URL of this kind.
	pub fn data_url(self, data: &[u8]) -> String {
		let mime = self.mime();
		let mut out = String::with_capacity(mime.len() + 13 + data.len().div_ceil(3) * 4);
		out.push_str("data:");
		out.push_str(mime);
		out.push_str(";base64,");
		STANDARD.encode_string(data, &mut out);
		out
	}

	#[must_use]
	/// # Uses Quality?
	///
	/// Returns `true` for the lossy formats.
	pub const fn uses_quality(self) -> bool {
		matches!(self, Self::Jpeg | Self::Webp | Self::Pdf)
	}

	/// # Check Type.
	///
	/// Make sure freshly-encoded data actually looks like what it is supposed
	/// to be, passing it through if so.
	fn check_kind(self, data: Vec<u8>) -> Result<Vec<u8>, ConviError> {
		let expected = match self {
			Self::Jpeg => Some(ImageKind::Jpeg),
			Self::Png => Some(ImageKind::Png),
			Self::Webp => Some(ImageKind::Webp),
			Self::Gif => Some(ImageKind::Gif),
			Self::Bmp => Some(ImageKind::Bmp),
			Self::Pdf => None,
		};

		let ok = match expected {
			Some(k) => ImageKind::try_from(data.as_slice()).is_ok_and(|d| d == k),
			None => data.starts_with(b"%PDF-"),
		};

		if ok { Ok(data) }
		else { Err(ConviError::Encode) }
	}
}



#[derive(Debug, Clone)]
/// # Output.
///
/// This holds a finished conversion: the encoded file bytes along with the
/// format, pixel dimensions, and quality used to produce it.
///
/// The raw data is available via `Deref`/`AsRef`, or as a `data:` URL via
/// [`Output::data_url`].
pub struct Output {
	data: Vec<u8>,
	kind: OutputKind,
	width: NonZeroU32,
	height: NonZeroU32,
	quality: Quality,
}

impl AsRef<[u8]> for Output {
	#[inline]
	fn as_ref(&self) -> &[u8] { self }
}

impl Deref for Output {
	type Target = [u8];

	#[inline]
	fn deref(&self) -> &Self::Target { &self.data }
}

impl Output {
	/// # New.
	///
	/// ## Errors
	///
	/// If the data is empty, has a zero dimension, or does not match the
	/// expected format, an error is returned.
	pub(crate) fn new(
		data: Vec<u8>,
		kind: OutputKind,
		width: u32,
		height: u32,
		quality: Quality,
	) -> Result<Self, ConviError> {
		if data.is_empty() { return Err(ConviError::Encode); }
		let width = NonZeroU32::new(width).ok_or(ConviError::Overflow)?;
		let height = NonZeroU32::new(height).ok_or(ConviError::Overflow)?;
		let data = kind.check_kind(data)?;

		Ok(Self { data, kind, width, height, quality })
	}
}

/// ## Getters.
impl Output {
	#[must_use]
	/// # Data URL.
	///
	/// Return the output as a base64-encoded `data:` URL.
	pub fn data_url(&self) -> String { self.kind.data_url(&self.data) }

	#[inline]
	#[must_use]
	/// # Height.
	pub const fn height(&self) -> u32 { self.height.get() }

	#[inline]
	#[must_use]
	/// # Into Vec.
	pub fn into_vec(self) -> Vec<u8> { self.data }

	#[inline]
	#[must_use]
	/// # Kind.
	pub const fn kind(&self) -> OutputKind { self.kind }

	#[inline]
	#[must_use]
	/// # Quality.
	///
	/// This is only meaningful for lossy kinds.
	pub const fn quality(&self) -> Quality { self.quality }

	#[must_use]
	/// # Size.
	pub fn size(&self) -> Option<NonZeroUsize> { NonZeroUsize::new(self.data.len()) }

	#[inline]
	#[must_use]
	/// # Width.
	pub const fn width(&self) -> u32 { self.width.get() }
}
