/*!
# `ConviSize` - CLI Options
*/

use argyle::Argument;
use convisize_core::{
	ConviError,
	Dimensions,
	OutputKind,
	parse_dimension,
	Quality,
	Settings,
};
use dowser::{
	Dowser,
	Extension,
};
use std::path::{
	Path,
	PathBuf,
};



// These are evaluated at compile time, so a bad literal fails the build.

/// # Extension: BMP.
const E_BMP: Extension = Extension::new("bmp").unwrap();

/// # Extension: GIF.
const E_GIF: Extension = Extension::new("gif").unwrap();

/// # Extension: JPEG.
const E_JPEG: Extension = Extension::new("jpeg").unwrap();

/// # Extension: JPG.
const E_JPG: Extension = Extension::new("jpg").unwrap();

/// # Extension: PNG.
const E_PNG: Extension = Extension::new("png").unwrap();

/// # Extension: WEBP.
const E_WEBP: Extension = Extension::new("webp").unwrap();



#[derive(Debug)]
/// # Runtime Options.
///
/// Everything parsed out of the command line.
pub(super) struct Opts {
	/// # Conversion Settings.
	settings: Settings,

	/// # Output Directory.
	out_dir: Option<PathBuf>,

	/// # Consolidated PDF Path.
	pdf: Option<PathBuf>,

	/// # Print Data URLs?
	data_url: bool,

	/// # Source Images.
	paths: Vec<PathBuf>,
}

impl Opts {
	/// # New.
	///
	/// Parse the CLI arguments, unless `--help` or `--version` were requested
	/// instead.
	///
	/// ## Errors
	///
	/// Invalid option values are returned as errors, as are `--help` and
	/// `--version`.
	pub(super) fn new() -> Result<Self, ConviError> {
		let args = argyle::args()
			.with_keywords(include!(concat!(env!("OUT_DIR"), "/argyle.rs")));
		Self::from_args(args)
	}

	/// # From Arguments.
	pub(super) fn from_args<I>(args: I) -> Result<Self, ConviError>
	where I: IntoIterator<Item=Argument> {
		let mut paths = Dowser::default();
		let mut settings = Settings::default();
		let mut width = None;
		let mut height = None;
		let mut lock = true;
		let mut out_dir = None;
		let mut pdf = None;
		let mut data_url = false;

		for arg in args {
			match arg {
				Argument::Key("--data-url") => { data_url = true; },
				Argument::Key("-h" | "--help") => return Err(ConviError::PrintHelp),
				Argument::Key("--no-aspect") => { lock = false; },
				Argument::Key("-V" | "--version") => return Err(ConviError::PrintVersion),

				Argument::KeyWithValue("--filter", s) => { settings.filter = s.parse()?; },
				Argument::KeyWithValue("-f" | "--format", s) => { settings.kind = s.parse()?; },
				Argument::KeyWithValue("--height", s) => { height = parse_dimension(&s)?; },
				Argument::KeyWithValue("-l" | "--list", s) => {
					let _res = paths.read_paths_from_file(s);
				},
				Argument::KeyWithValue("-o" | "--out-dir", s) => {
					out_dir.replace(PathBuf::from(s));
				},
				Argument::KeyWithValue("-p" | "--pdf", s) => {
					pdf.replace(PathBuf::from(s));
				},
				Argument::KeyWithValue("-q" | "--quality", s) => {
					settings.quality = s.parse::<Quality>()?;
				},
				Argument::KeyWithValue("--width", s) => { width = parse_dimension(&s)?; },

				// Assume paths.
				Argument::Other(s) => { paths = paths.with_path(s); },
				Argument::InvalidUtf8(s) => { paths = paths.with_path(s); },

				// Nothing else is relevant.
				_ => {},
			}
		}

		settings.dimensions = Dimensions::default()
			.with_width(width.unwrap_or(0))
			.with_height(height.unwrap_or(0))
			.with_lock(lock);

		// The consolidated document is always a PDF.
		if pdf.is_some() { settings.kind = OutputKind::Pdf; }

		// Make sure the output directory exists.
		if let Some(dir) = out_dir.as_mut() {
			std::fs::create_dir_all(&*dir).map_err(|_| ConviError::Write)?;
			if let Ok(tmp) = std::fs::canonicalize(&*dir) { *dir = tmp; }
		}

		let mut paths: Vec<PathBuf> = paths.filter(|p| is_image(p)).collect();
		paths.sort();
		paths.dedup();

		Ok(Self { settings, out_dir, pdf, data_url, paths })
	}
}

/// ## Getters.
impl Opts {
	/// # Print Data URLs?
	pub(super) const fn data_url(&self) -> bool { self.data_url }

	/// # Output Directory.
	pub(super) fn out_dir(&self) -> Option<&Path> { self.out_dir.as_deref() }

	/// # Consolidated PDF Path.
	pub(super) fn pdf(&self) -> Option<&Path> { self.pdf.as_deref() }

	/// # Source Paths.
	pub(super) fn paths(&self) -> &[PathBuf] { &self.paths }

	/// # Conversion Settings.
	pub(super) const fn settings(&self) -> &Settings { &self.settings }
}



/// # Is Image File?
///
/// This only checks the extension; the actual format is sniffed from the file
/// contents later on.
fn is_image(path: &Path) -> bool {
	Extension::from_path(path).is_some_and(|e| matches!(
		e,
		E_JPG | E_PNG | E_JPEG | E_WEBP | E_GIF | E_BMP
	))
}
