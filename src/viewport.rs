// Viewport: logical (CSS-pixel) size against device pixel ratio. Draw calls
// stay in logical units; the transform scales them onto the physical backing
// buffer, so geometry is resolution-independent while painting at native
// device resolution.

use crate::geometry::Point;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub logical_width: f64,
    pub logical_height: f64,
    pub device_pixel_ratio: f64,
}

impl Viewport {
    /// Callers must pass a non-zero laid-out size; a zero-size viewport
    /// degenerates the root geometry and is not detected here.
    pub fn new(logical_width: f64, logical_height: f64, device_pixel_ratio: f64) -> Self {
        Viewport {
            logical_width,
            logical_height,
            device_pixel_ratio,
        }
    }

    pub fn physical_width(&self) -> usize {
        (self.logical_width * self.device_pixel_ratio).round() as usize
    }

    pub fn physical_height(&self) -> usize {
        (self.logical_height * self.device_pixel_ratio).round() as usize
    }

    /// Logical point to physical pixel coordinates. Always a pure
    /// device-pixel-ratio scale; any previous transform is irrelevant
    /// because the viewport is replaced wholesale on resize.
    pub fn to_physical(&self, p: Point) -> (f64, f64) {
        (p.x * self.device_pixel_ratio, p.y * self.device_pixel_ratio)
    }

    /// Re-establish the viewport from a fresh layout measurement. Must be
    /// followed by a full repaint: resizing the backing buffer discards
    /// prior pixel content.
    pub fn resize(&mut self, logical_width: f64, logical_height: f64, device_pixel_ratio: f64) {
        *self = Viewport::new(logical_width, logical_height, device_pixel_ratio);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn physical_dimensions_scale_with_device_pixel_ratio() {
        let vp = Viewport::new(400.0, 300.0, 2.0);
        assert_eq!(vp.physical_width(), 800);
        assert_eq!(vp.physical_height(), 600);

        let vp = Viewport::new(400.0, 300.0, 1.5);
        assert_eq!(vp.physical_width(), 600);
        assert_eq!(vp.physical_height(), 450);
    }

    #[test]
    fn transform_maps_logical_points_to_device_pixels() {
        let vp = Viewport::new(400.0, 300.0, 2.0);
        assert_eq!(vp.to_physical(Point::new(10.0, 20.0)), (20.0, 40.0));
        assert_eq!(vp.to_physical(Point::new(0.0, 0.0)), (0.0, 0.0));
    }

    #[test]
    fn resize_replaces_the_whole_viewport() {
        let mut vp = Viewport::new(400.0, 300.0, 2.0);
        vp.resize(250.0, 250.0, 1.0);
        assert_eq!(vp, Viewport::new(250.0, 250.0, 1.0));
        assert_eq!(vp.to_physical(Point::new(10.0, 20.0)), (10.0, 20.0));
    }
}
