/// Image formats accepted for event images, mapped to a file extension
///
/// Detection uses magic signatures only; the client-provided filename and
/// content type are ignored.
pub fn determine_image_type(buf: &[u8]) -> Option<&'static str> {
    match infer::get(buf)?.mime_type() {
        "image/jpeg" => Some("jpg"),
        "image/png" => Some("png"),
        "image/webp" => Some("webp"),
        "image/gif" => Some("gif"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::determine_image_type;

    #[test]
    fn detects_png_by_signature() {
        let buf = [
            0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D,
        ];
        assert_eq!(determine_image_type(&buf), Some("png"));
    }

    #[test]
    fn detects_jpeg_by_signature() {
        let buf = [0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, 0x4A, 0x46, 0x49, 0x46];
        assert_eq!(determine_image_type(&buf), Some("jpg"));
    }

    #[test]
    fn rejects_non_image_content() {
        assert_eq!(determine_image_type(b"hello, not an image"), None);
        // PDF signature
        assert_eq!(determine_image_type(b"%PDF-1.7 ..."), None);
    }
}
