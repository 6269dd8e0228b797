//! Pixel canvas.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::palette::Rgb;
use crate::core::GameRng;

/// A `width × height` grid of pixels, row-major.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Canvas {
    width: usize,
    height: usize,
    pixels: Vector<Rgb>,
}

impl Canvas {
    /// A blank (white) canvas.
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: Vector::from(vec![Rgb::WHITE; width * height]),
        }
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<Rgb> {
        if row < self.height && col < self.width {
            self.pixels.get(row * self.width + col).copied()
        } else {
            None
        }
    }

    /// Rows of pixels, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = Vec<Rgb>> + '_ {
        (0..self.height).map(move |row| {
            (0..self.width)
                .map(|col| self.pixels[row * self.width + col])
                .collect()
        })
    }

    /// Paint the square of half-width `radius` centred on `(row, col)`,
    /// clipped to the canvas.
    ///
    /// Returns the number of pixels covered, zero if the centre is off the
    /// canvas.
    pub fn paint_square(&mut self, row: usize, col: usize, radius: usize, color: Rgb) -> usize {
        if row >= self.height || col >= self.width {
            return 0;
        }

        let top = row.saturating_sub(radius);
        let bottom = (row + radius).min(self.height - 1);
        let left = col.saturating_sub(radius);
        let right = (col + radius).min(self.width - 1);

        let mut covered = 0;
        for r in top..=bottom {
            for c in left..=right {
                self.pixels.set(r * self.width + c, color);
                covered += 1;
            }
        }
        covered
    }

    /// Set every pixel to `color`.
    pub fn fill(&mut self, color: Rgb) {
        self.pixels = Vector::from(vec![color; self.width * self.height]);
    }

    /// Set every pixel to a random colour.
    pub fn randomize(&mut self, rng: &mut GameRng) {
        self.pixels = (0..self.width * self.height).map(|_| Rgb::random(rng)).collect();
    }

    /// Whether every pixel is white.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.pixels.iter().all(|&p| p == Rgb::WHITE)
    }

    /// Pixels that differ from `color`.
    #[must_use]
    pub fn count_not(&self, color: Rgb) -> usize {
        self.pixels.iter().filter(|&&p| p != color).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgb = Rgb::new(255, 0, 0);

    #[test]
    fn test_new_canvas_is_blank() {
        let canvas = Canvas::new(20, 20);
        assert!(canvas.is_blank());
        assert_eq!(canvas.rows().count(), 20);
        assert_eq!(canvas.get(19, 19), Some(Rgb::WHITE));
        assert_eq!(canvas.get(20, 0), None);
    }

    #[test]
    fn test_single_pixel_brush() {
        let mut canvas = Canvas::new(5, 5);
        assert_eq!(canvas.paint_square(2, 3, 0, RED), 1);
        assert_eq!(canvas.get(2, 3), Some(RED));
        assert_eq!(canvas.count_not(Rgb::WHITE), 1);
    }

    #[test]
    fn test_brush_clipped_at_corner() {
        let mut canvas = Canvas::new(5, 5);
        // radius 2 at the corner covers a 3x3 block
        assert_eq!(canvas.paint_square(0, 0, 2, RED), 9);
        assert_eq!(canvas.get(2, 2), Some(RED));
        assert_eq!(canvas.get(3, 0), Some(Rgb::WHITE));
    }

    #[test]
    fn test_brush_in_middle() {
        let mut canvas = Canvas::new(20, 20);
        assert_eq!(canvas.paint_square(10, 10, 1, RED), 9);
        assert_eq!(canvas.paint_square(30, 10, 1, RED), 0);
    }

    #[test]
    fn test_fill_and_randomize() {
        let mut canvas = Canvas::new(4, 4);
        canvas.fill(RED);
        assert_eq!(canvas.count_not(RED), 0);

        let mut rng = GameRng::new(8);
        canvas.randomize(&mut rng);
        assert!(canvas.count_not(RED) > 0);

        canvas.fill(Rgb::WHITE);
        assert!(canvas.is_blank());
    }
}
