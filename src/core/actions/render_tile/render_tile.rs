use crate::core::actions::render_tile::ports::colour_map::ColourMap;
use crate::core::actions::render_tile::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::coloured_pixel::ColouredPixel;
use crate::core::data::escape::Escape;
use crate::core::data::pixel_rect::PixelRect;

/// Output of one tile, both vectors in the tile's row-major order.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedTile {
    pub pixels: Vec<ColouredPixel>,
    pub escapes: Vec<Escape>,
}

pub fn render_tile<Alg, CMap>(tile: PixelRect, algorithm: &Alg, colour_map: &CMap) -> RenderedTile
where
    Alg: FractalAlgorithm + ?Sized,
    CMap: ColourMap + ?Sized,
{
    let capacity = tile.size() as usize;
    let mut pixels = Vec::with_capacity(capacity);
    let mut escapes = Vec::with_capacity(capacity);

    for point in tile.points() {
        let escape = algorithm.compute(point);

        pixels.push(ColouredPixel {
            point,
            colour: colour_map.map(escape),
        });
        escapes.push(escape);
    }

    RenderedTile { pixels, escapes }
}
