/*!
# `ConviSize` - Kinds
*/

pub(super) mod bmp;
pub(super) mod color;
pub(super) mod gif;
pub(super) mod image;
pub(super) mod jpeg;
pub(super) mod png;
pub(super) mod webp;
