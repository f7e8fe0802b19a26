use crate::core::actions::escape_time::escape_time::escape_time;
use crate::core::actions::escape_time::ports::iteration_formula::IterationFormula;
use crate::core::actions::render_tile::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::escape::Escape;
use crate::core::data::image_properties::ImageProperties;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use crate::core::util::pixel_to_complex_coords::pixel_to_complex_coords;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct EscapeTimeAlgorithm<F> {
    formula: F,
    properties: Arc<ImageProperties>,
    viewport: Viewport,
}

impl<F: IterationFormula> EscapeTimeAlgorithm<F> {
    pub fn new(formula: F, properties: Arc<ImageProperties>, viewport: Viewport) -> Self {
        Self {
            formula,
            properties,
            viewport,
        }
    }
}

impl<F: IterationFormula> FractalAlgorithm for EscapeTimeAlgorithm<F> {
    fn compute(&self, pixel: Point) -> Escape {
        let point = pixel_to_complex_coords(pixel, self.viewport, &self.properties);

        escape_time(&self.formula, point, self.properties.max_iterations())
    }
}
