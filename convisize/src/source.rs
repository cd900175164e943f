/*!
# `ConviSize` - Image Source
*/

use convisize_core::{
	ConviError,
	Input,
	Output,
	Settings,
};
use std::path::Path;



#[derive(Debug)]
/// # Image Source.
///
/// A decoded source image along with where it came from.
pub(super) struct Source<'a> {
	path: &'a Path,
	input: Input<'static>,
}

impl<'a> Source<'a> {
	/// # New.
	///
	/// Read and decode the image at `path`.
	///
	/// ## Errors
	///
	/// Returns an error if the file cannot be read or decoded.
	pub(super) fn new(path: &'a Path) -> Result<Self, ConviError> {
		let raw = std::fs::read(path).map_err(|_| ConviError::Read)?;
		let input = Input::try_from(raw.as_slice())?;
		Ok(Self { path, input })
	}

	/// # Convert.
	///
	/// ## Errors
	///
	/// Returns an error if the conversion fails.
	pub(super) fn convert(&self, settings: &Settings) -> Result<Output, ConviError> {
		self.input.convert(settings)
	}
}

/// ## Getters.
impl Source<'_> {
	/// # Input.
	pub(super) const fn input(&self) -> &Input<'static> { &self.input }

	/// # Path.
	pub(super) const fn path(&self) -> &Path { self.path }
}
