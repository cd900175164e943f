/*!
# `ConviSize` - Utility
*/

use convisize_core::{
	ConviError,
	Output,
	OutputKind,
};
use dactyl::{
	NiceElapsed,
	NicePercent,
	NiceU64,
};
use fyi_msg::Msg;
use std::{
	borrow::Cow,
	ffi::{
		OsStr,
		OsString,
	},
	num::NonZeroUsize,
	path::{
		Path,
		PathBuf,
	},
	time::Duration,
};
use super::Source;



#[must_use]
/// # File Name.
///
/// This extracts the file name from a path. If for some reason it doesn't have
/// one, "?" is returned so that _something_ can be printed.
pub(super) fn file_name(path: &Path) -> Cow<str> {
	path.file_name().map_or_else(|| Cow::Borrowed("?"), OsStr::to_string_lossy)
}

#[must_use]
/// # Output Path.
///
/// Conversions keep the full source file name and add the new extension, so
/// `photo.png` becomes `photo.png.jpg`. They're saved beside the source unless
/// an output directory is given.
pub(super) fn output_path(src: &Path, dir: Option<&Path>, kind: OutputKind) -> PathBuf {
	let mut name: OsString = src.file_name().map_or_else(
		|| OsString::from("image"),
		OsStr::to_os_string,
	);
	name.push(".");
	name.push(kind.extension());

	match dir.or_else(|| src.parent()) {
		Some(dir) => dir.join(name),
		None => PathBuf::from(name),
	}
}

/// # Print Path Title.
///
/// This prints the source image path with a nice ANSI-colored border, like:
///
/// ```ignore
/// +---------------------+
/// | /path/to/source.png |
/// +---------------------+
/// ```
pub(super) fn print_header_path(path: &Path) {
	let txt = path.to_string_lossy();
	let dashes = "-".repeat(txt.chars().count() + 2);

	eprintln!(
		"\x1b[38;5;199m+{dashes}+\n| \x1b[0m{txt} \x1b[38;5;199m|\n+{dashes}+\x1b[0m",
	);
}

/// # Print Computation Time.
pub(super) fn print_computation_time(time: Duration) {
	Msg::from(format!(
		"\x1b[2mTotal computation time: {}.\x1b[0m\n",
		NiceElapsed::from(time),
	))
		.with_indent(1)
		.with_newline(true)
		.eprint();
}

/// # Print Consolidated.
pub(super) fn print_consolidated(dst: Option<&Path>, pages: usize, size: usize) {
	let name = dst.map_or(Cow::Borrowed("PDF"), file_name);
	Msg::success(format!(
		"Created \x1b[1m{name}\x1b[0m with {} pages. \x1b[2m({} bytes.)\x1b[0m",
		NiceU64::from(pages),
		NiceU64::from(size),
	))
		.with_indent(1)
		.eprint();
}

/// # Print Converted.
///
/// Print a success line with the new file name (or kind, for data URLs),
/// dimensions, and size. If the result is smaller than the source, the
/// savings are noted too.
pub(super) fn print_converted(src: &Source, output: &Output, dst: Option<&Path>) {
	let name = dst.map_or_else(
		|| Cow::Owned(format!("{} data URL", output.kind())),
		file_name,
	);

	let src_size = src.input().size().map_or(0, NonZeroUsize::get);
	let dst_size = output.size().map_or(0, NonZeroUsize::get);
	let savings =
		if dst_size < src_size {
			let diff = src_size - dst_size;
			format!(", saved {}", NicePercent::from((diff, src_size)))
		}
		else { String::new() };

	Msg::success(format!(
		"Created \x1b[1m{name}\x1b[0m from {}. \x1b[2m({}x{}, {} bytes{savings}.)\x1b[0m",
		file_name(src.path()),
		output.width(),
		output.height(),
		NiceU64::from(dst_size),
	))
		.with_indent(1)
		.eprint();
}

/// # Print Error.
pub(super) fn print_error(err: ConviError) {
	Msg::warning(err.as_str())
		.with_indent(1)
		.eprint();
}

/// # Write File.
///
/// Atomically save the data to the specified path.
pub(super) fn write_file(path: &Path, data: &[u8]) -> Result<(), ConviError> {
	write_atomic::write_file(path, data).map_err(|_| ConviError::Write)
}



#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn t_output_path() {
		let src = Path::new("/tmp/photos/cat.png");
		assert_eq!(
			output_path(src, None, OutputKind::Jpeg),
			PathBuf::from("/tmp/photos/cat.png.jpg"),
		);
		assert_eq!(
			output_path(src, Some(Path::new("/tmp/out")), OutputKind::Webp),
			PathBuf::from("/tmp/out/cat.png.webp"),
		);
		assert_eq!(
			output_path(Path::new("dog.gif"), None, OutputKind::Pdf),
			PathBuf::from("dog.gif.pdf"),
		);
	}

	#[test]
	fn t_file_name() {
		assert_eq!(file_name(Path::new("/tmp/cat.png")), "cat.png");
		assert_eq!(file_name(Path::new("/")), "?");
	}
}
