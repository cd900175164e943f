/*!
# `ConviSize`

`ConviSize` resizes, filters, and re-encodes JPEG, PNG, WebP, GIF, and BMP
images to JPEG, PNG, WebP, PDF, GIF, or BMP, one at a time or in batch. It
can also combine any number of images into a single A4 PDF.
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



mod cli;
mod source;
mod utility;

use cli::Opts;
use convisize_core::{
	Book,
	ConviError,
	OutputKind,
};
use dactyl::NiceU64;
use fyi_msg::Msg;
use source::Source;
use std::{
	collections::HashSet,
	path::{
		Path,
		PathBuf,
	},
	time::Instant,
};



/// # Main.
///
/// This lets us bubble up startup errors so they can be pretty-printed.
fn main() {
	match _main() {
		Ok(()) => {},
		Err(e @ (ConviError::PrintHelp | ConviError::PrintVersion)) => {
			println!("{e}");
		},
		Err(e) => {
			Msg::error(e.as_str()).eprint();
			std::process::exit(1);
		},
	}
}

#[inline]
/// # Actual Main.
///
/// Parse the arguments, then run either the batch or consolidated loop.
fn _main() -> Result<(), ConviError> {
	let opts = Opts::new()?;
	let paths = opts.paths();
	if paths.is_empty() { return Err(ConviError::NoImages); }

	Msg::from(format!(
		"Selected \x1b[1m{}\x1b[0m image{}.",
		NiceU64::from(paths.len()),
		if paths.len() == 1 { "" } else { "s" },
	))
		.with_newline(true)
		.eprint();

	let now = Instant::now();
	let res = match opts.pdf() {
		Some(dst) => consolidate(&opts, paths, dst),
		None => batch(&opts, paths),
	};
	utility::print_computation_time(now.elapsed());

	res
}

/// # Batch Conversion.
///
/// Convert each image in turn. Failures are reported and skipped; if any
/// occur, the overall run ends in error once everything else is done.
fn batch(opts: &Opts, paths: &[PathBuf]) -> Result<(), ConviError> {
	let sources: HashSet<&Path> = paths.iter().map(PathBuf::as_path).collect();
	let mut saved: HashSet<PathBuf> = HashSet::with_capacity(paths.len());
	let mut failed = 0_usize;

	for path in paths {
		utility::print_header_path(path);
		if let Err(e) = batch_one(opts, path, &sources, &mut saved) {
			utility::print_error(e);
			failed += 1;
		}
	}

	if failed == 0 { Ok(()) }
	else {
		Msg::warning(format!(
			"{} of {} images could not be converted.",
			NiceU64::from(failed),
			NiceU64::from(paths.len()),
		))
			.eprint();
		Err(ConviError::Partial)
	}
}

/// # Batch Conversion (One).
///
/// Convert a single image and either print it as a data URL or save it.
///
/// Saved outputs may not land on any of the selected sources, nor on a path
/// already written earlier in the same run.
fn batch_one(
	opts: &Opts,
	path: &Path,
	sources: &HashSet<&Path>,
	saved: &mut HashSet<PathBuf>,
) -> Result<(), ConviError> {
	let settings = opts.settings();

	if opts.data_url() {
		let src = Source::new(path)?;
		let output = src.convert(settings)?;
		println!("{}", output.data_url());
		utility::print_converted(&src, &output, None);
		return Ok(());
	}

	let dst = utility::output_path(path, opts.out_dir(), settings.kind);
	if sources.contains(dst.as_path()) || saved.contains(&dst) {
		return Err(ConviError::Overwrite);
	}

	let src = Source::new(path)?;
	let output = src.convert(settings)?;
	utility::write_file(&dst, &output)?;
	utility::print_converted(&src, &output, Some(&dst));
	saved.insert(dst);

	Ok(())
}

/// # Consolidated PDF.
///
/// Add each image as a page to a single PDF. This is all or nothing: the
/// first failure aborts the run without writing anything.
fn consolidate(opts: &Opts, paths: &[PathBuf], dst: &Path) -> Result<(), ConviError> {
	if paths.len() < 2 { return Err(ConviError::NoPages); }
	if
		! opts.data_url() &&
		std::fs::canonicalize(dst).is_ok_and(|p| paths.contains(&p))
	{
		return Err(ConviError::Overwrite);
	}

	let settings = opts.settings();
	let mut book = Book::new();
	for path in paths {
		utility::print_header_path(path);
		let res = Source::new(path).and_then(|src| book.add(src.input(), settings));
		if let Err(e) = res {
			utility::print_error(e);
			return Err(e);
		}
	}

	let pages = book.len();
	let data = book.finish()?;

	if opts.data_url() {
		println!("{}", OutputKind::Pdf.data_url(&data));
		utility::print_consolidated(None, pages, data.len());
	}
	else {
		utility::write_file(dst, &data)?;
		utility::print_consolidated(Some(dst), pages, data.len());
	}

	Ok(())
}



#[cfg(test)]
mod tests {
	use super::*;
	use argyle::Argument;
	use convisize_core::{
		Input,
		Settings,
	};
	use tempfile::TempDir;

	/// # Save a Small PNG.
	fn save_png(dir: &Path, name: &str) -> PathBuf {
		let pixels: Vec<u8> = (0..16_u8)
			.flat_map(|i| [i * 16, 255 - i * 16, 128, 255])
			.collect();
		let out = Input::from_rgba(pixels, 4, 4)
			.and_then(|i| i.convert(&Settings {
				kind: OutputKind::Png,
				..Settings::default()
			}))
			.expect("Encode failed.");

		let path = dir.join(name);
		std::fs::write(&path, out.into_vec()).expect("Write failed.");
		path
	}

	/// # Path Argument.
	fn arg_path(path: &Path) -> Argument {
		Argument::Other(path.to_string_lossy().into_owned())
	}

	/// # Temporary Directory.
	fn tmp_dir() -> TempDir {
		tempfile::Builder::new()
			.prefix("convisize-")
			.tempdir()
			.expect("Tempdir failed.")
	}

	#[test]
	fn t_batch_partial() {
		let tmp = tmp_dir();
		let dir = tmp.path();
		save_png(dir, "good.png");
		std::fs::write(dir.join("bad.jpg"), b"This is not a JPEG.").expect("Write failed.");

		let opts = Opts::from_args([
			Argument::KeyWithValue("-f", "jpg".to_owned()),
			arg_path(dir),
		]).expect("Parse failed.");
		assert_eq!(opts.paths().len(), 2);

		// The bad file fails, but doesn't stop the good one.
		assert_eq!(batch(&opts, opts.paths()), Err(ConviError::Partial));
		let good = std::fs::read(dir.join("good.png.jpg")).expect("Missing output.");
		assert!(good.starts_with(&[0xFF, 0xD8, 0xFF]));
		assert!(! dir.join("bad.jpg.jpg").exists());
	}

	#[test]
	fn t_batch_ok() {
		let tmp = tmp_dir();
		let dir = tmp.path();
		save_png(dir, "a.png");
		save_png(dir, "b.png");

		let opts = Opts::from_args([
			Argument::KeyWithValue("-f", "webp".to_owned()),
			arg_path(dir),
		]).expect("Parse failed.");

		assert_eq!(batch(&opts, opts.paths()), Ok(()));
		assert!(dir.join("a.png.webp").is_file());
		assert!(dir.join("b.png.webp").is_file());
	}

	#[test]
	fn t_batch_no_overwrite() {
		let tmp = tmp_dir();
		let dir = tmp.path();
		save_png(dir, "cat.png");

		// A selected source that happens to share the output name.
		let taken = save_png(dir, "cat.png.jpg");
		let before = std::fs::read(&taken).expect("Read failed.");

		let opts = Opts::from_args([
			Argument::KeyWithValue("-f", "jpg".to_owned()),
			arg_path(dir),
		]).expect("Parse failed.");
		assert_eq!(opts.paths().len(), 2);

		assert_eq!(batch(&opts, opts.paths()), Err(ConviError::Partial));
		assert_eq!(std::fs::read(&taken).expect("Read failed."), before);
		assert!(dir.join("cat.png.jpg.jpg").is_file());
	}

	#[test]
	fn t_batch_out_dir_collision() {
		let tmp = tmp_dir();
		let one = tmp.path().join("one");
		let two = tmp.path().join("two");
		let out = tmp.path().join("out");
		std::fs::create_dir(&one).expect("Mkdir failed.");
		std::fs::create_dir(&two).expect("Mkdir failed.");
		save_png(&one, "cat.png");
		save_png(&two, "cat.png");

		let opts = Opts::from_args([
			Argument::KeyWithValue("-f", "png".to_owned()),
			Argument::KeyWithValue("-o", out.to_string_lossy().into_owned()),
			arg_path(&one),
			arg_path(&two),
		]).expect("Parse failed.");
		assert_eq!(opts.paths().len(), 2);

		// The first one wins; the second is refused rather than clobbering it.
		assert_eq!(batch(&opts, opts.paths()), Err(ConviError::Partial));
		let saved: Vec<_> = std::fs::read_dir(&out)
			.expect("Missing out dir.")
			.filter_map(Result::ok)
			.map(|e| e.file_name())
			.collect();
		assert_eq!(saved, ["cat.png.png"]);
	}

	#[test]
	fn t_consolidate() {
		let tmp = tmp_dir();
		let dir = tmp.path().join("src");
		std::fs::create_dir(&dir).expect("Mkdir failed.");
		let dst = tmp.path().join("book.pdf");
		let dst_arg = Argument::KeyWithValue("-p", dst.to_string_lossy().into_owned());

		// One image isn't enough.
		let a = save_png(&dir, "a.png");
		let opts = Opts::from_args([dst_arg.clone(), arg_path(&a)])
			.expect("Parse failed.");
		assert_eq!(consolidate(&opts, opts.paths(), &dst), Err(ConviError::NoPages));
		assert!(! dst.exists());

		// Two will do.
		save_png(&dir, "b.png");
		let opts = Opts::from_args([dst_arg.clone(), arg_path(&dir)])
			.expect("Parse failed.");
		assert_eq!(consolidate(&opts, opts.paths(), &dst), Ok(()));
		let data = std::fs::read(&dst).expect("Missing PDF.");
		assert!(data.starts_with(b"%PDF-"));
		std::fs::remove_file(&dst).expect("Remove failed.");

		// A single bad page sinks the whole document.
		std::fs::write(dir.join("c.gif"), b"GIF? Nope.").expect("Write failed.");
		let opts = Opts::from_args([dst_arg, arg_path(&dir)])
			.expect("Parse failed.");
		assert_eq!(opts.paths().len(), 3);
		let res = consolidate(&opts, opts.paths(), &dst);
		assert!(res.is_err());
		assert_ne!(res, Err(ConviError::NoPages));
		assert!(! dst.exists());
	}
}
