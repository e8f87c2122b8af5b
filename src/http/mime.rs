//! Content type lookup by file extension.

/// Maps a bare extension (no leading dot) to its content type.
pub fn content_type_for_extension(ext: &str) -> Option<&'static str> {
    match ext {
        "html" => Some("text/html"),
        "css" => Some("text/css"),
        "js" => Some("application/javascript"),
        "json" => Some("application/json"),
        "gif" => Some("image/gif"),
        _ => None,
    }
}

/// Looks up the content type of a resolved path.
///
/// The extension is whatever follows the last `.` anywhere in the path, so
/// `./README` yields `/README` and no content type.
pub fn content_type_for_path(path: &str) -> Option<&'static str> {
    let (_, ext) = path.rsplit_once('.')?;
    content_type_for_extension(ext)
}
