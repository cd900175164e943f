/*!
# `ConviSize` - PDF Assembly

PDFs are built with [`lopdf`](https://crates.io/crates/lopdf). Each image
gets its own page, embedded as a JPEG (`DCTDecode`) `XObject`, so quality
applies here the same way it does for plain JPEG output.
*/

use crate::{
	ConviError,
	ImageJpeg,
	Input,
	Quality,
	Settings,
	traits::Encoder,
};
use lopdf::{
	Dictionary,
	Document,
	Object,
	ObjectId,
	Stream,
};
use std::fmt;



/// # A4 Width (pt).
pub(crate) const A4_WIDTH: f32 = 595.28;

/// # A4 Height (pt).
pub(crate) const A4_HEIGHT: f32 = 841.89;

/// # Points Per Pixel.
///
/// Pixels are taken to be 1/96in, points 1/72in.
const PT_PER_PX: f32 = 0.75;

/// # Image Resource Name.
const IMAGE_NAME: &str = "Im0";



/// # Consolidated PDF.
///
/// This builds a single multi-page PDF document out of any number of images.
/// Pages are A4 portrait; each image is scaled up or down to fit its page,
/// keeping its aspect ratio, and centered.
///
/// ## Examples
///
/// ```no_run
/// use convisize_core::{
///     Book,
///     Input,
///     Settings,
/// };
///
/// let settings = Settings::default();
/// let mut book = Book::new();
/// for path in ["/path/to/one.jpg", "/path/to/two.png"] {
///     let raw = std::fs::read(path).unwrap();
///     let input = Input::try_from(raw.as_slice()).unwrap();
///     book.add(&input, &settings).unwrap();
/// }
///
/// let pdf: Vec<u8> = book.finish().unwrap();
/// ```
pub struct Book {
	doc: Document,
	root: ObjectId,
	pages: Vec<ObjectId>,
}

impl Default for Book {
	#[inline]
	fn default() -> Self { Self::new() }
}

impl fmt::Debug for Book {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Book")
			.field("pages", &self.pages.len())
			.finish_non_exhaustive()
	}
}

impl Book {
	#[must_use]
	/// # New.
	pub fn new() -> Self {
		let mut doc = Document::with_version("1.5");
		let root = doc.new_object_id();
		Self { doc, root, pages: Vec::new() }
	}

	#[inline]
	#[must_use]
	/// # Is Empty?
	pub fn is_empty(&self) -> bool { self.pages.is_empty() }

	#[inline]
	#[must_use]
	/// # Number of Pages.
	pub fn len(&self) -> usize { self.pages.len() }

	/// # Add Image.
	///
	/// Resize and filter the image according to the settings, then add it as
	/// a new page. The settings' output kind is ignored.
	///
	/// ## Errors
	///
	/// Returns an error if the image cannot be resized or encoded.
	pub fn add(&mut self, input: &Input, settings: &Settings) -> Result<(), ConviError> {
		let img = input.prepare(settings)?;
		let (x, y, w, h) = contain(
			px_to_pt(img.width_u32()),
			px_to_pt(img.height_u32()),
			A4_WIDTH,
			A4_HEIGHT,
		);
		self.add_page(&img, settings.quality, A4_WIDTH, A4_HEIGHT, [x, y, w, h])
	}

	/// # Finish.
	///
	/// Wrap everything up and return the finished document.
	///
	/// ## Errors
	///
	/// Returns an error if there are no pages or the document cannot be
	/// serialized.
	pub fn finish(mut self) -> Result<Vec<u8>, ConviError> {
		if self.pages.is_empty() { return Err(ConviError::NoPages); }

		// The page tree.
		let mut pages = Dictionary::new();
		pages.set("Type", Object::Name(b"Pages".to_vec()));
		pages.set(
			"Kids",
			Object::Array(self.pages.iter().copied().map(Object::Reference).collect()),
		);
		pages.set("Count", Object::Integer(i64::try_from(self.pages.len()).map_err(|_| ConviError::Overflow)?));
		self.doc.objects.insert(self.root, Object::Dictionary(pages));

		// The catalog.
		let mut catalog = Dictionary::new();
		catalog.set("Type", Object::Name(b"Catalog".to_vec()));
		catalog.set("Pages", Object::Reference(self.root));
		let catalog_id = self.doc.add_object(catalog);
		self.doc.trailer.set("Root", Object::Reference(catalog_id));

		let mut out = Vec::new();
		self.doc.save_to(&mut out).map_err(|_| ConviError::Encode)?;
		Ok(out)
	}

	/// # Add Page.
	///
	/// Embed the image and draw it into the box (`[x, y, width, height]`) on
	/// a fresh page of the given size.
	fn add_page(
		&mut self,
		img: &Input,
		quality: Quality,
		page_width: f32,
		page_height: f32,
		rect: [f32; 4],
	) -> Result<(), ConviError> {
		let jpeg = ImageJpeg::encode(img, quality)?;

		let mut image = Dictionary::new();
		image.set("Type", Object::Name(b"XObject".to_vec()));
		image.set("Subtype", Object::Name(b"Image".to_vec()));
		image.set("Width", Object::Integer(i64::from(img.width_u32())));
		image.set("Height", Object::Integer(i64::from(img.height_u32())));
		image.set("ColorSpace", Object::Name(b"DeviceRGB".to_vec()));
		image.set("BitsPerComponent", Object::Integer(8));
		image.set("Filter", Object::Name(b"DCTDecode".to_vec()));
		let image_id = self.doc.add_object(Stream::new(image, jpeg));

		let [x, y, w, h] = rect;
		let content = format!("q\n{w:.2} 0 0 {h:.2} {x:.2} {y:.2} cm\n/{IMAGE_NAME} Do\nQ\n");
		let content_id = self.doc.add_object(Stream::new(Dictionary::new(), content.into_bytes()));

		let mut xobjects = Dictionary::new();
		xobjects.set(IMAGE_NAME, Object::Reference(image_id));
		let mut resources = Dictionary::new();
		resources.set("XObject", Object::Dictionary(xobjects));

		let mut page = Dictionary::new();
		page.set("Type", Object::Name(b"Page".to_vec()));
		page.set("Parent", Object::Reference(self.root));
		page.set("MediaBox", Object::Array(vec![
			Object::Integer(0),
			Object::Integer(0),
			Object::Real(page_width),
			Object::Real(page_height),
		]));
		page.set("Resources", Object::Dictionary(resources));
		page.set("Contents", Object::Reference(content_id));

		let page_id = self.doc.add_object(page);
		self.pages.push(page_id);
		Ok(())
	}
}



/// # Single-Page PDF.
///
/// Build a one-page document exactly the size of the image, which is drawn
/// edge to edge. The image should already be resized and filtered.
pub(crate) fn single(img: &Input, quality: Quality) -> Result<Vec<u8>, ConviError> {
	let w = px_to_pt(img.width_u32());
	let h = px_to_pt(img.height_u32());

	let mut book = Book::new();
	book.add_page(img, quality, w, h, [0.0, 0.0, w, h])?;
	book.finish()
}

/// # Contain.
///
/// Scale a `width`x`height` box to fit inside the page, keeping its aspect
/// ratio, and center it. Returns the `(x, y, width, height)` of the result,
/// with the origin at the bottom left.
fn contain(width: f32, height: f32, page_width: f32, page_height: f32)
-> (f32, f32, f32, f32) {
	let scale = f32::min(page_width / width, page_height / height);
	let w = width * scale;
	let h = height * scale;
	((page_width - w) / 2.0, (page_height - h) / 2.0, w, h)
}

#[allow(clippy::cast_precision_loss)] // Dimensions are capped well below.
/// # Pixels to Points.
fn px_to_pt(px: u32) -> f32 { px as f32 * PT_PER_PX }
