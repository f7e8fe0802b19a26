use crate::core::data::coloured_pixel::ColouredPixel;
use crate::core::data::escape::Escape;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::viewport::Viewport;
use std::sync::Arc;

/// One finished tile on its way back from a worker.
#[derive(Debug, Clone, PartialEq)]
pub struct TileResult {
    pub generation: u64,
    pub tile_index: usize,
    pub tile: PixelRect,
    pub pixels: Vec<ColouredPixel>,
    pub escapes: Vec<Escape>,
}

/// A fully populated framebuffer together with the escapes it was coloured from.
#[derive(Debug, Clone)]
pub struct AssembledFrame {
    pub generation: u64,
    pub pixel_buffer: Arc<PixelBuffer>,
    pub escapes: Arc<[Escape]>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscardReason {
    StaleGeneration,
    AlreadyComplete,
    UnknownTile,
    DuplicateTile,
    Malformed,
}

#[derive(Debug)]
pub enum IntakeOutcome {
    Discarded(DiscardReason),
    Accepted {
        tiles_completed: usize,
        tiles_total: usize,
    },
    Completed(AssembledFrame),
}

struct FrameBuffers {
    pixel_buffer: PixelBuffer,
    escapes: Vec<Escape>,
}

/// Collects the tiles of a single generation. Only results stamped with that
/// generation and matching one of its tiles are written; the frame is handed
/// out exactly once, when the last expected tile lands.
pub struct FrameAssembly {
    generation: u64,
    viewport: Viewport,
    tiles: Vec<PixelRect>,
    received: Vec<bool>,
    tiles_completed: usize,
    buffers: Option<FrameBuffers>,
}

impl FrameAssembly {
    #[must_use]
    pub fn new(generation: u64, viewport: Viewport, tiles: Vec<PixelRect>) -> Self {
        let received = vec![false; tiles.len()];

        Self {
            generation,
            viewport,
            tiles,
            received,
            tiles_completed: 0,
            buffers: Some(FrameBuffers {
                pixel_buffer: PixelBuffer::new(viewport.pixel_rect()),
                escapes: vec![Escape::Bounded; viewport.size() as usize],
            }),
        }
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn tiles_total(&self) -> usize {
        self.tiles.len()
    }

    #[must_use]
    pub fn tiles_completed(&self) -> usize {
        self.tiles_completed
    }

    pub fn accept(&mut self, result: TileResult) -> IntakeOutcome {
        if result.generation != self.generation {
            return IntakeOutcome::Discarded(DiscardReason::StaleGeneration);
        }

        let Some(buffers) = self.buffers.as_mut() else {
            return IntakeOutcome::Discarded(DiscardReason::AlreadyComplete);
        };

        if self.tiles.get(result.tile_index) != Some(&result.tile) {
            return IntakeOutcome::Discarded(DiscardReason::UnknownTile);
        }

        if self.received[result.tile_index] {
            return IntakeOutcome::Discarded(DiscardReason::DuplicateTile);
        }

        let expected = result.tile.size() as usize;
        if result.pixels.len() != expected || result.escapes.len() != expected {
            return IntakeOutcome::Discarded(DiscardReason::Malformed);
        }

        // Each pixel must sit at its own point of the claimed tile, row by row.
        if !result
            .pixels
            .iter()
            .map(|pixel| pixel.point)
            .eq(result.tile.points())
        {
            return IntakeOutcome::Discarded(DiscardReason::Malformed);
        }

        if buffers.pixel_buffer.write_pixels(&result.pixels).is_err() {
            return IntakeOutcome::Discarded(DiscardReason::Malformed);
        }

        let width = self.viewport.width() as usize;
        for (pixel, escape) in result.pixels.iter().zip(result.escapes) {
            buffers.escapes[pixel.point.y as usize * width + pixel.point.x as usize] = escape;
        }

        self.received[result.tile_index] = true;
        self.tiles_completed += 1;

        if self.tiles_completed < self.tiles.len() {
            return IntakeOutcome::Accepted {
                tiles_completed: self.tiles_completed,
                tiles_total: self.tiles.len(),
            };
        }

        match self.buffers.take() {
            Some(FrameBuffers {
                pixel_buffer,
                escapes,
            }) => IntakeOutcome::Completed(AssembledFrame {
                generation: self.generation,
                pixel_buffer: Arc::new(pixel_buffer),
                escapes: escapes.into(),
            }),
            None => IntakeOutcome::Discarded(DiscardReason::AlreadyComplete),
        }
    }
}
