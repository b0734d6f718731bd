//! Filename helpers shared by descriptor builders.

/// Split a filename on its final `.` into `(title, extension)`.
///
/// A name without a dot yields an empty extension.
pub fn split_extension(filename: &str) -> (&str, &str) {
    filename.rsplit_once('.').unwrap_or((filename, ""))
}
