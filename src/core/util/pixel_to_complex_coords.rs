use crate::core::data::complex::Complex;
use crate::core::data::image_properties::ImageProperties;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;

/// Maps a pixel to the plane: `(pixel - image centre) * scale + shift`.
///
/// Pixels outside the viewport still map onto the same linear grid.
#[must_use]
pub fn pixel_to_complex_coords(
    pixel_position: Point,
    viewport: Viewport,
    properties: &ImageProperties,
) -> Complex {
    let (centre_x, centre_y) = viewport.centre();

    Complex {
        real: (pixel_position.x as f64 - centre_x) * properties.scale() + properties.x_shift(),
        imag: (pixel_position.y as f64 - centre_y) * properties.scale() + properties.y_shift(),
    }
}
