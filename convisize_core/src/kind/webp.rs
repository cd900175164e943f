/*!
# `ConviSize`: `WebP` Handling

This uses [`libwebp-sys2`](https://crates.io/crates/libwebp-sys2) bindings to
Google's `libwebp` for both directions. Encoding is lossy at the requested
quality, roughly equivalent to:

```bash
cwebp -m 4 -q {QUALITY}
```
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
use libwebp_sys::{
	WEBP_MAX_DIMENSION,
	WebPConfig,
	WebPConfigInit,
	WebPDecodeRGBA,
	WebPEncode,
	WebPFree,
	WebPMemoryWrite,
	WebPMemoryWriter,
	WebPMemoryWriterClear,
	WebPMemoryWriterInit,
	WebPPicture,
	WebPPictureFree,
	WebPPictureImportRGBA,
	WebPPictureInit,
	WebPValidateConfig,
};
use std::os::raw::c_int;



/// # `WebP` Image.
pub(crate) struct ImageWebp;

impl Decoder for ImageWebp {
	fn decode(raw: &[u8]) -> Result<DecoderResult, ConviError> {
		let d = LibWebpDecode::try_from(raw)?;

		let width = usize::try_from(d.width).map_err(|_| ConviError::Overflow)?;
		let height = usize::try_from(d.height).map_err(|_| ConviError::Overflow)?;
		let size = width.checked_mul(height)
			.and_then(|x| x.checked_mul(4))
			.ok_or(ConviError::Overflow)?;

		let buf: Vec<u8> = unsafe { std::slice::from_raw_parts(d.ptr, size) }
			.to_vec();

		let color = ColorKind::from_rgba(&buf);
		Ok((buf, width, height, color))
	}
}

impl Encoder for ImageWebp {
	/// # Encode.
	fn encode(input: &Input, quality: Quality) -> Result<Vec<u8>, ConviError> {
		let config = make_config(quality)?;
		let mut picture = LibWebpPicture::try_from(input)?;
		let writer = LibWebpWriter::new(&mut picture.0);

		// Encode!
		maybe_die(unsafe { WebPEncode(&config, &mut picture.0) })?;

		// Copy output.
		let out = writer.to_vec();
		drop(picture);
		drop(writer);

		if out.is_empty() { Err(ConviError::Encode) }
		else { Ok(out) }
	}
}



/// # Decode Wrapper.
///
/// This exists solely to help with garbage cleanup.
struct LibWebpDecode {
	width: c_int,
	height: c_int,
	ptr: *mut u8,
}

impl TryFrom<&[u8]> for LibWebpDecode {
	type Error = ConviError;

	fn try_from(src: &[u8]) -> Result<Self, Self::Error> {
		let mut width: c_int = 0;
		let mut height: c_int = 0;
		let ptr = unsafe {
			WebPDecodeRGBA(src.as_ptr(), src.len(), &mut width, &mut height)
		};

		if ptr.is_null() { Err(ConviError::Decode) }
		else if width <= 0 || height <= 0 {
			unsafe { WebPFree(ptr.cast()); }
			Err(ConviError::Decode)
		}
		else { Ok(Self { width, height, ptr }) }
	}
}

impl Drop for LibWebpDecode {
	#[inline]
	fn drop(&mut self) { unsafe { WebPFree(self.ptr.cast()); } }
}



/// # Picture Wrapper.
///
/// This `C` struct is Rust-wrapped to help with garbage cleanup, but while
/// we're here, may as well provide initialization code too.
struct LibWebpPicture(WebPPicture);

impl TryFrom<&Input<'_>> for LibWebpPicture {
	type Error = ConviError;

	fn try_from(img: &Input) -> Result<Self, Self::Error> {
		// Check the source dimensions.
		let width = i32::try_from(img.width()).map_err(|_| ConviError::Overflow)?;
		let height = i32::try_from(img.height()).map_err(|_| ConviError::Overflow)?;
		if width > WEBP_MAX_DIMENSION || height > WEBP_MAX_DIMENSION {
			return Err(ConviError::Overflow);
		}

		// Set up the picture struct.
		let mut out = Self(unsafe { std::mem::zeroed() });
		maybe_die(unsafe { WebPPictureInit(&mut out.0) })?;

		out.0.use_argb = 1;
		out.0.width = width;
		out.0.height = height;
		out.0.argb_stride = width;

		// Fill the pixel buffers.
		let raw: &[u8] = img.pixels();
		let expected = usize::try_from(width).ok()
			.zip(usize::try_from(height).ok())
			.and_then(|(w, h)| w.checked_mul(h))
			.and_then(|x| x.checked_mul(4))
			.ok_or(ConviError::Overflow)?;
		if expected != raw.len() { return Err(ConviError::Encode); }

		maybe_die(unsafe {
			WebPPictureImportRGBA(&mut out.0, raw.as_ptr().cast(), width << 2)
		})?;

		// A few more sanity checks.
		if out.0.use_argb != 1 || out.0.argb.is_null() {
			return Err(ConviError::Encode);
		}

		Ok(out)
	}
}

impl Drop for LibWebpPicture {
	#[inline]
	fn drop(&mut self) { unsafe { WebPPictureFree(&mut self.0); } }
}



/// # Writer Wrapper.
///
/// The memory writer is boxed so its address stays put while `libwebp` holds
/// on to it via the picture's custom pointer.
struct LibWebpWriter(Box<WebPMemoryWriter>);

impl LibWebpWriter {
	/// # New.
	///
	/// Initialize a memory writer and hook it into the picture.
	fn new(picture: &mut WebPPicture) -> Self {
		/// # Write Callback.
		extern "C" fn on_write(
			data: *const u8,
			data_size: usize,
			picture: *const WebPPicture,
		) -> c_int {
			unsafe { WebPMemoryWrite(data, data_size, picture) }
		}

		let mut writer = Box::new(unsafe { std::mem::zeroed::<WebPMemoryWriter>() });
		unsafe { WebPMemoryWriterInit(&mut *writer); }

		picture.writer = Some(on_write);
		picture.custom_ptr = std::ptr::addr_of_mut!(*writer).cast::<std::ffi::c_void>();

		Self(writer)
	}

	/// # Copy Written Data.
	fn to_vec(&self) -> Vec<u8> {
		if self.0.mem.is_null() || self.0.size == 0 { Vec::new() }
		else {
			unsafe { std::slice::from_raw_parts(self.0.mem, self.0.size) }.to_vec()
		}
	}
}

impl Drop for LibWebpWriter {
	#[inline]
	fn drop(&mut self) { unsafe { WebPMemoryWriterClear(&mut *self.0); } }
}



/// # Make Config.
///
/// Build a lossy encoder profile at the given quality.
fn make_config(quality: Quality) -> Result<WebPConfig, ConviError> {
	let mut config: WebPConfig = unsafe { std::mem::zeroed() };
	maybe_die(unsafe { WebPConfigInit(&mut config) })?;
	config.quality = f32::from(quality.get());
	config.method = 4;
	maybe_die(unsafe { WebPValidateConfig(&config) })?;
	Ok(config)
}

#[inline]
/// # Verify Encoder Status.
///
/// This converts unsuccessful `libwebp` function results into proper Rust
/// errors.
const fn maybe_die(res: c_int) -> Result<(), ConviError> {
	if 0 == res { Err(ConviError::Encode) }
	else { Ok(()) }
}
