use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use std::num::NonZeroU32;

/// Splits the viewport into `tile_size` squares, row-major, clipping the last
/// column and row to the viewport edge. The tiles never overlap and together
/// cover every pixel exactly once.
#[must_use]
pub fn partition_tiles(viewport: Viewport, tile_size: NonZeroU32) -> Vec<PixelRect> {
    let tile_size = tile_size.get();
    let columns = viewport.width().div_ceil(tile_size);
    let rows = viewport.height().div_ceil(tile_size);
    let mut tiles = Vec::with_capacity((columns * rows) as usize);

    for row in 0..rows {
        let top = row * tile_size;
        let height = tile_size.min(viewport.height() - top);

        for column in 0..columns {
            let left = column * tile_size;
            let width = tile_size.min(viewport.width() - left);

            // width and height are at least 1: left < viewport width, top < viewport height
            if let (Some(width), Some(height)) = (NonZeroU32::new(width), NonZeroU32::new(height)) {
                tiles.push(PixelRect::with_size(
                    Point {
                        x: left as i32,
                        y: top as i32,
                    },
                    width,
                    height,
                ));
            }
        }
    }

    tiles
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tile_size(size: u32) -> NonZeroU32 {
        NonZeroU32::new(size).unwrap()
    }

    fn assert_exact_cover(viewport: Viewport, tiles: &[PixelRect]) {
        let mut hits = vec![0u32; viewport.size() as usize];

        for tile in tiles {
            assert!(viewport.pixel_rect().contains_rect(*tile), "tile {:?} escapes viewport", tile);

            for point in tile.points() {
                hits[(point.y as u32 * viewport.width() + point.x as u32) as usize] += 1;
            }
        }

        assert!(hits.iter().all(|&count| count == 1), "every pixel must be covered once");
    }

    #[test]
    fn test_exact_multiple_gives_equal_tiles() {
        let viewport = Viewport::new(64, 32).unwrap();

        let tiles = partition_tiles(viewport, tile_size(16));

        assert_eq!(tiles.len(), 8);
        assert!(tiles.iter().all(|tile| tile.width() == 16 && tile.height() == 16));
        assert_exact_cover(viewport, &tiles);
    }

    #[test]
    fn test_edge_tiles_are_clipped() {
        let viewport = Viewport::new(10, 7).unwrap();

        let tiles = partition_tiles(viewport, tile_size(4));

        assert_eq!(tiles.len(), 6);
        assert_eq!(tiles[2].width(), 2);
        assert_eq!(tiles[5].width(), 2);
        assert_eq!(tiles[5].height(), 3);
        assert_exact_cover(viewport, &tiles);
    }

    #[test]
    fn test_tiles_are_row_major() {
        let viewport = Viewport::new(8, 8).unwrap();

        let tiles = partition_tiles(viewport, tile_size(4));

        assert_eq!(tiles[0].top_left(), Point { x: 0, y: 0 });
        assert_eq!(tiles[1].top_left(), Point { x: 4, y: 0 });
        assert_eq!(tiles[2].top_left(), Point { x: 0, y: 4 });
    }

    #[test]
    fn test_tile_larger_than_viewport_gives_one_tile() {
        let viewport = Viewport::new(3, 5).unwrap();

        let tiles = partition_tiles(viewport, tile_size(64));

        assert_eq!(tiles, vec![viewport.pixel_rect()]);
    }

    #[test]
    fn test_single_pixel_tiles() {
        let viewport = Viewport::new(3, 2).unwrap();

        let tiles = partition_tiles(viewport, tile_size(1));

        assert_eq!(tiles.len(), 6);
        assert_exact_cover(viewport, &tiles);
    }

    #[test]
    fn test_odd_sizes_cover_exactly() {
        for (width, height, size) in [(1, 1, 1), (17, 13, 5), (100, 3, 7), (31, 64, 32)] {
            let viewport = Viewport::new(width, height).unwrap();

            let tiles = partition_tiles(viewport, tile_size(size));

            assert_exact_cover(viewport, &tiles);
        }
    }
}
