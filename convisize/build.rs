/*!
# ConviSize - Build
*/

use argyle::KeyWordsBuilder;
use std::path::PathBuf;



/// # Build!
pub fn main() {
	println!("cargo:rerun-if-env-changed=CARGO_PKG_VERSION");
	println!("cargo:rerun-if-changed=Cargo.toml");

	build_cli();
}

/// # Build CLI Keys.
fn build_cli() {
	let mut builder = KeyWordsBuilder::default();
	builder.push_keys([
		"--data-url",
		"-h", "--help",
		"--no-aspect",
		"-V", "--version",
	]);
	builder.push_keys_with_values([
		"--filter",
		"-f", "--format",
		"--height",
		"-l", "--list",
		"-o", "--out-dir",
		"-p", "--pdf",
		"-q", "--quality",
		"--width",
	]);
	builder.save(_out_path("argyle.rs").expect("Missing OUT_DIR."));
}

/// # Output Path.
///
/// Return a path relative to the output directory.
fn _out_path(file: &str) -> Option<PathBuf> {
	let mut dir = std::fs::canonicalize(std::env::var("OUT_DIR").ok()?).ok()?;
	dir.push(file);
	Some(dir)
}
