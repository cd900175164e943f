/*!
# `ConviSize` - Error
*/

use crate::ImageKind;
use std::{
	error::Error,
	fmt,
};



/// # Help Text.
const HELP: &str = concat!(r"
   .-------------.
   |  .-------.  |
   |  |  ^ ^  |  |    ", "\x1b[38;5;199mConviSize\x1b[0;38;5;69m v", env!("CARGO_PKG_VERSION"), "\x1b[0m", r#"
   |  | /\/\  |  |    Resize, filter, and re-encode
   |  '-------'  |    images to JPG/PNG/WebP/PDF/GIF/BMP.
   '-------------'

USAGE:
    convisize [FLAGS] [OPTIONS] <PATH(S)>...

FLAGS:
        --data-url    Print each conversion as a data URL to STDOUT instead
                      of saving it to disk.
    -h, --help        Print help information and exit.
        --no-aspect   Do not preserve the aspect ratio when only one of
                      --width or --height is given.
    -V, --version     Print version information and exit.

OPTIONS:
        --filter <NAME>
                      Apply a color filter: none, grayscale, sepia, or invert.
                      [default: none]
    -f, --format <FMT>
                      Output format: jpg, png, webp, pdf, gif, or bmp.
                      [default: jpg]
        --height <NUM>
                      Output height in pixels (1..=5000).
    -l, --list <FILE> Read image and/or directory paths from this text file
                      (or STDIN if "-"), one path per line, instead of or in
                      addition to those specified inline via <PATH(S)>.
    -o, --out-dir <DIR>
                      Save conversions to this directory instead of alongside
                      their sources.
    -p, --pdf <FILE>  Combine all images into a single (A4) PDF document
                      saved to this path. At least two images are required.
    -q, --quality <NUM>
                      Encoding quality for JPEG, WebP, and PDF (1..=100).
                      [default: 92]
        --width <NUM> Output width in pixels (1..=5000).

TRAILING ARGS:
    <PATH(S)>...      Image and/or directory paths to convert. Directories
                      will be crawled recursively.

Conversions are saved next to the source (or in --out-dir) with the new
extension appended, e.g. "photo.png" becomes "photo.png.jpg".
"#);



#[derive(Debug, Copy, Clone, Eq, PartialEq)]
/// # Errors.
pub enum ConviError {
	/// # Unsupported color.
	Color,

	/// # Decoding failed.
	Decode,

	/// # Encoding failed.
	Encode,

	/// # Invalid image.
	Image,

	/// # Decoding not supported.
	ImageDecode(ImageKind),

	/// # Invalid dimension value.
	Dimension,

	/// # Invalid filter.
	Filter,

	/// # Invalid output format.
	Format,

	/// # Invalid quality.
	Quality,

	/// # No images were found.
	NoImages,

	/// # Consolidation requires multiple images.
	NoPages,

	/// # Image dimensions are too big.
	Overflow,

	/// # Output would clobber a source or earlier output.
	Overwrite,

	/// # I/O read error.
	Read,

	/// # I/O write error.
	Write,

	/// # Some images could not be converted.
	Partial,

	/// # Print Help (Not an Error).
	PrintHelp,

	/// # Print Version (Not an Error).
	PrintVersion,
}

impl Error for ConviError {}

impl AsRef<str> for ConviError {
	#[inline]
	fn as_ref(&self) -> &str { self.as_str() }
}

impl fmt::Display for ConviError {
	#[inline]
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl ConviError {
	#[must_use]
	/// # As Str.
	///
	/// Return the error as an English string slice.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Color => "Unsupported color encoding format.",
			Self::Decode => "The image could not be decoded.",
			Self::Encode => "The image could not be encoded.",
			Self::Image => "Invalid image.",
			Self::ImageDecode(k) => match k {
				ImageKind::Bmp => "The BMP could not be decoded.",
				ImageKind::Gif => "The GIF could not be decoded.",
				ImageKind::Jpeg => "The JPEG could not be decoded.",
				ImageKind::Png => "The PNG could not be decoded.",
				ImageKind::Webp => "The WebP could not be decoded.",
			},
			Self::Dimension => "Width and height must be whole numbers between 1 and 5000.",
			Self::Filter => "The filter must be one of none, grayscale, sepia, or invert.",
			Self::Format => "The format must be one of jpg, png, webp, pdf, gif, or bmp.",
			Self::Quality => "The quality must be a number between 1 and 100.",
			Self::NoImages => "Please select at least one image.",
			Self::NoPages => "Please select multiple images to create a consolidated PDF.",
			Self::Overflow => "The image dimensions are out of range.",
			Self::Overwrite => "The output path belongs to a source image or another conversion.",
			Self::Read => "Unable to read the source file.",
			Self::Write => "Unable to save the file.",
			Self::Partial => "One or more images could not be converted.",
			Self::PrintHelp => HELP,
			Self::PrintVersion => concat!("ConviSize v", env!("CARGO_PKG_VERSION")),
		}
	}
}
