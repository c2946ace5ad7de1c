//! Frame capture.
//!
//! Writes a rendered RGBA8 frame to a PNG file, which is how headless runs
//! stay observable without a window.

use std::path::Path;

use crate::error::CaptureError;

/// Save `frame` (RGBA8, `width` by `height`) as a PNG at `path`.
pub fn save_png(
    frame: &[u8],
    width: u32,
    height: u32,
    path: impl AsRef<Path>,
) -> Result<(), CaptureError> {
    let expected = (width as usize) * (height as usize) * 4;
    if frame.len() != expected {
        return Err(CaptureError::FrameSize {
            expected,
            actual: frame.len(),
        });
    }

    // from_raw only fails on a length mismatch, checked above.
    let image = image::RgbaImage::from_raw(width, height, frame.to_vec())
        .expect("frame length already validated");
    image.save_with_format(path, image::ImageFormat::Png)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_size_mismatch() {
        let frame = vec![0u8; 16];
        let err = save_png(&frame, 10, 10, "unused.png").unwrap_err();
        match err {
            CaptureError::FrameSize { expected, actual } => {
                assert_eq!(expected, 400);
                assert_eq!(actual, 16);
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_round_trip_to_disk() {
        let mut frame = vec![0u8; 8 * 8 * 4];
        frame[0] = 0xff; // one red pixel
        frame[3] = 0xff;

        let path = std::env::temp_dir().join("plexus_capture_test.png");
        save_png(&frame, 8, 8, &path).unwrap();

        let read_back = image::open(&path).unwrap().to_rgba8();
        assert_eq!(read_back.dimensions(), (8, 8));
        assert_eq!(read_back.get_pixel(0, 0).0, [0xff, 0, 0, 0xff]);
        let _ = std::fs::remove_file(&path);
    }
}
