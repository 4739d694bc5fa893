//! Image tiling seam
//!
//! Arranging images into a grid is delegated to an external service behind
//! [`MosaicService`]. This crate treats pixel data as opaque bytes.

// =============================================================================
// Image
// =============================================================================

/// An in-memory raster image, RGBA row-major.
///
/// The adapter never inspects pixel data; only the mosaic service (and the
/// registry's image converters) interpret it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// RGBA bytes, `width * height * 4` long
    pub data: Vec<u8>,
}

impl Image {
    /// Create an image from raw RGBA bytes.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Self {
        Self { width, height, data }
    }

    /// A transparent image of the given dimensions.
    pub fn blank(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; (width as usize) * (height as usize) * 4],
        }
    }
}

// =============================================================================
// GridLayout
// =============================================================================

/// Grid dimensions for a mosaic, rows by columns.
///
/// Consistency with the number of images is the mosaic service's concern;
/// no validation happens on this side of the seam.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    pub rows: u32,
    pub cols: u32,
}

impl GridLayout {
    /// Create a rows-by-cols layout.
    pub fn new(rows: u32, cols: u32) -> Self {
        Self { rows, cols }
    }

    /// Total number of cells.
    pub fn cells(self) -> u32 {
        self.rows * self.cols
    }
}

// =============================================================================
// MosaicService
// =============================================================================

/// External service that arranges images into a single grid image.
pub trait MosaicService {
    /// Combine `images` into one image laid out on `grid`.
    fn mosaic(&self, grid: GridLayout, images: Vec<Image>) -> Image;
}

impl<M: MosaicService + ?Sized> MosaicService for &M {
    fn mosaic(&self, grid: GridLayout, images: Vec<Image>) -> Image {
        (**self).mosaic(grid, images)
    }
}

// =============================================================================
// Tests
// =============================================================================
