/*!
# `ConviSize` - Library

This crate holds the image business for `ConviSize`: source detection and
decoding, resampling, color filters, and re-encoding to JPEG, PNG, WebP, GIF,
BMP, or PDF.

## Examples

```no_run
use convisize_core::{
	Input,
	OutputKind,
	Settings,
};

let raw = std::fs::read("/path/to/my.png").unwrap();
let input = Input::try_from(raw.as_slice()).unwrap();

let mut settings = Settings::default();
settings.kind = OutputKind::Webp;

let output = input.convert(&settings).unwrap();
std::fs::write("/path/to/my.png.webp", &*output).unwrap();
```
*/

#![warn(clippy::filetype_is_file)]
#![warn(clippy::integer_division)]
#![warn(clippy::needless_borrow)]
#![warn(clippy::nursery)]
#![warn(clippy::pedantic)]
#![warn(clippy::perf)]
#![warn(clippy::suboptimal_flops)]
#![warn(clippy::unneeded_field_pattern)]
#![warn(macro_use_extern_crate)]
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(non_ascii_idents)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused_crate_dependencies)]
#![warn(unused_extern_crates)]
#![warn(unused_import_braces)]

#![allow(clippy::module_name_repetitions)]



mod convert;
mod dimensions;
mod error;
mod filter;
mod input;
mod kind;
mod output;
mod pdf;
mod quality;
pub(crate) mod traits;

pub use convert::Settings;
pub use dimensions::{
	Dimensions,
	height_from_width,
	MAX_DIMENSION,
	MIN_DIMENSION,
	parse_dimension,
	width_from_height,
};
pub use error::ConviError;
pub use filter::Filter;
pub use input::Input;
pub use kind::{
	color::ColorKind,
	image::ImageKind,
};
pub use output::{
	Output,
	OutputKind,
};
pub use pdf::Book;
pub use quality::Quality;

pub(crate) use kind::{
	bmp::ImageBmp,
	gif::ImageGif,
	jpeg::ImageJpeg,
	png::ImagePng,
	webp::ImageWebp,
};
