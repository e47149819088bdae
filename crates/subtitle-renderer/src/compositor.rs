//! Bitmap subtitle placement on the scaled overlay canvas
//!
//! Pre-rendered subtitles are centered horizontally and sit `scaled_padding`
//! rows above the bottom edge. Everything around the image is transparent.

use crate::geometry::CanvasGeometry;
use subtitle_core::SubtitleImage;

/// Transparent margins around a placed bitmap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Padding {
    /// Rows above the image
    pub top: usize,
    /// Rows below the image
    pub bottom: usize,
    /// Columns left of the image
    pub left: usize,
    /// Columns right of the image
    pub right: usize,
}

/// A bitmap padded out to the full scaled canvas
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageCanvas {
    data: Vec<u8>,
    width: usize,
    height: usize,
    padding: Padding,
}

impl ImageCanvas {
    /// Canvas bytes, one per pixel, row-major
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Canvas width (the scaled width)
    pub fn width(&self) -> usize {
        self.width
    }

    /// Canvas height (the scaled height)
    pub fn height(&self) -> usize {
        self.height
    }

    /// Margins the image was placed with
    pub fn padding(&self) -> Padding {
        self.padding
    }
}

/// Place `image` on a `scaled_width x scaled_height` canvas
///
/// Returns `None` for images that do not fit, whose buffer is shorter than
/// their declared size, or that would need negative padding.
pub fn composite(image: &SubtitleImage, geometry: &CanvasGeometry) -> Option<ImageCanvas> {
    let sw = geometry.scaled_width;
    let sh = geometry.scaled_height;
    if !(1..=sw).contains(&image.width) || !(1..=sh).contains(&image.height) {
        log::debug!(
            "ignoring {}x{} bitmap on a {sw}x{sh} canvas",
            image.width,
            image.height
        );
        return None;
    }
    let needed = image.expected_len()?;
    if image.pixels.len() < needed {
        log::warn!(
            "bitmap declares {}x{} but carries {} bytes",
            image.width,
            image.height,
            image.pixels.len()
        );
        return None;
    }

    let left = sw / 2 - image.width / 2;
    let right = sw - image.width - left;
    let bottom = geometry.scaled_padding;
    let top = sh - image.height - bottom;
    let padding = Padding {
        top: usize::try_from(top).ok()?,
        bottom: usize::try_from(bottom).ok()?,
        left: usize::try_from(left).ok()?,
        right: usize::try_from(right).ok()?,
    };
    let width = usize::try_from(sw).ok()?;
    let height = usize::try_from(sh).ok()?;
    let image_width = usize::try_from(image.width).ok()?;

    let mut data = Vec::with_capacity(width * height);
    data.resize(padding.top * width, 0);
    for row in image.pixels[..needed].chunks_exact(image_width) {
        data.resize(data.len() + padding.left, 0);
        data.extend_from_slice(row);
        data.resize(data.len() + padding.right, 0);
    }
    data.resize(width * height, 0);

    Some(ImageCanvas {
        data,
        width,
        height,
        padding,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn geometry() -> CanvasGeometry {
        // 707x80 bitmap canvas, 7 rows bottom padding
        CanvasGeometry::compute(1920, 1080, 0.05, 2).unwrap()
    }

    #[test]
    fn centers_small_image() {
        let g = geometry();
        let image = SubtitleImage::new(3, 2, vec![1, 2, 3, 4, 5, 6]);
        let canvas = composite(&image, &g).unwrap();

        let p = canvas.padding();
        assert_eq!(p.left, 353 - 1);
        assert_eq!(p.right, 707 - 3 - 352);
        assert_eq!(p.bottom, 7);
        assert_eq!(p.top, 80 - 2 - 7);
        assert_eq!(canvas.data().len(), 707 * 80);

        let row = |y: usize| &canvas.data()[y * 707..(y + 1) * 707];
        assert!(row(p.top - 1).iter().all(|&b| b == 0));
        assert_eq!(&row(p.top)[352..355], &[1, 2, 3]);
        assert_eq!(&row(p.top + 1)[352..355], &[4, 5, 6]);
        assert_eq!(row(p.top).iter().map(|&b| usize::from(b)).sum::<usize>(), 6);
        assert!(row(79).iter().all(|&b| b == 0));
    }

    #[test]
    fn full_width_image_has_no_side_padding() {
        let g = geometry();
        let image = SubtitleImage::new(707, 10, vec![9; 7070]);
        let p = composite(&image, &g).unwrap().padding();
        assert_eq!((p.left, p.right), (0, 0));
        assert_eq!(p.bottom, 7);
    }

    #[test]
    fn exact_fit_without_bottom_padding() {
        // 3px font: padding and scaled padding are both zero
        let g = CanvasGeometry::compute(400, 60, 0.05, 1).unwrap();
        assert_eq!(g.scaled_padding, 0);
        let (w, h) = (g.scaled_width, g.scaled_height);
        let len = usize::try_from(w * h).unwrap();
        let canvas = composite(&SubtitleImage::new(w, h, vec![1; len]), &g).unwrap();
        assert_eq!(canvas.padding(), Padding::default());
        assert!(canvas.data().iter().all(|&b| b == 1));
    }

    #[test]
    fn exact_fit_rejected_when_bottom_padding_is_fixed() {
        let g = geometry();
        let image = SubtitleImage::new(707, 80, vec![1; 707 * 80]);
        assert!(composite(&image, &g).is_none());
    }

    #[test]
    fn rejects_oversized_and_empty() {
        let g = geometry();
        assert!(composite(&SubtitleImage::new(708, 1, vec![0; 708]), &g).is_none());
        assert!(composite(&SubtitleImage::new(1, 81, vec![0; 81]), &g).is_none());
        assert!(composite(&SubtitleImage::new(0, 1, vec![]), &g).is_none());
        assert!(composite(&SubtitleImage::new(-4, 1, vec![]), &g).is_none());
    }

    #[test]
    fn rejects_when_bottom_padding_does_not_fit() {
        let g = geometry();
        // Fits the canvas but not above the fixed bottom padding
        let image = SubtitleImage::new(10, 75, vec![0; 750]);
        assert!(composite(&image, &g).is_none());
    }

    #[test]
    fn rejects_short_buffer() {
        let g = geometry();
        assert!(composite(&SubtitleImage::new(4, 4, vec![0; 15]), &g).is_none());
    }

    #[test]
    fn ignores_trailing_bytes() {
        let g = geometry();
        let canvas = composite(&SubtitleImage::new(2, 1, vec![7, 7, 7, 7]), &g).unwrap();
        assert_eq!(canvas.data().iter().filter(|&&b| b == 7).count(), 2);
    }
}
