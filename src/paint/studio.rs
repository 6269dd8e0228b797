//! The paint studio: canvas, current tools and the artist's gallery.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::canvas::Canvas;
use super::config::PaintSettings;
use super::palette::{PaletteColor, Rgb};
use crate::core::{GameRng, Millis};
use crate::rules::{Activity, ActivityKind, ActivityResult, Context};

/// A saved picture.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artwork {
    pub name: String,
    pub artist: String,
    pub canvas: Canvas,
    pub saved_at: Millis,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaintEvent {
    /// Paint with the current brush centred on a pixel.
    Paint { row: usize, col: usize },
    SetColor(PaletteColor),
    /// Brush sizes outside `1..=max_brush` are clamped.
    SetBrush(usize),
    /// Back to all white.
    Clear,
    /// Every pixel a random colour.
    Randomize,
    /// Copy the canvas into the gallery. Blank names are absorbed.
    Save { name: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PaintOutcome {
    /// Pixels covered by the brush.
    Painted(usize),
    ColorChanged(Rgb),
    BrushChanged(usize),
    Cleared,
    Randomized,
    /// Gallery position of the new artwork.
    Saved { index: usize, name: String },
    Ignored,
}

/// One painting session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PaintStudio {
    settings: PaintSettings,
    artist: String,
    canvas: Canvas,
    color: Rgb,
    brush: usize,
    gallery: Vector<Artwork>,
}

impl PaintStudio {
    /// A blank canvas with a red size-1 brush.
    pub fn new(settings: PaintSettings, artist: impl Into<String>) -> Self {
        let canvas = Canvas::new(settings.width, settings.height);
        Self {
            settings,
            artist: artist.into(),
            canvas,
            color: PaletteColor::Red.rgb(),
            brush: 1,
            gallery: Vector::new(),
        }
    }

    /// Continue an earlier gallery, e.g. when the player comes back to the
    /// studio within a session.
    #[must_use]
    pub fn with_gallery(mut self, gallery: Vector<Artwork>) -> Self {
        self.gallery = gallery;
        self
    }

    /// Hand the gallery back when the studio closes.
    #[must_use]
    pub fn into_gallery(self) -> Vector<Artwork> {
        self.gallery
    }

    #[must_use]
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    #[must_use]
    pub fn color(&self) -> Rgb {
        self.color
    }

    #[must_use]
    pub fn brush(&self) -> usize {
        self.brush
    }

    #[must_use]
    pub fn artist(&self) -> &str {
        &self.artist
    }

    #[must_use]
    pub fn gallery_items(&self) -> &Vector<Artwork> {
        &self.gallery
    }

    pub fn gallery(&self) -> impl Iterator<Item = &Artwork> {
        self.gallery.iter()
    }

    #[must_use]
    pub fn gallery_len(&self) -> usize {
        self.gallery.len()
    }

    pub fn paint(&mut self, row: usize, col: usize) -> PaintOutcome {
        match self.canvas.paint_square(row, col, self.brush - 1, self.color) {
            0 => PaintOutcome::Ignored,
            covered => PaintOutcome::Painted(covered),
        }
    }

    pub fn set_color(&mut self, color: PaletteColor) -> PaintOutcome {
        self.color = color.rgb();
        PaintOutcome::ColorChanged(self.color)
    }

    pub fn set_brush(&mut self, size: usize) -> PaintOutcome {
        self.brush = size.clamp(1, self.settings.max_brush.max(1));
        PaintOutcome::BrushChanged(self.brush)
    }

    pub fn clear(&mut self) -> PaintOutcome {
        self.canvas.fill(Rgb::WHITE);
        PaintOutcome::Cleared
    }

    pub fn randomize(&mut self, rng: &mut GameRng) -> PaintOutcome {
        self.canvas.randomize(rng);
        PaintOutcome::Randomized
    }

    pub fn save(&mut self, name: &str, now: Millis) -> PaintOutcome {
        let name = name.trim();
        if name.is_empty() {
            return PaintOutcome::Ignored;
        }

        self.gallery.push_back(Artwork {
            name: name.to_string(),
            artist: self.artist.clone(),
            canvas: self.canvas.clone(),
            saved_at: now,
        });
        log::debug!("{} saved '{}' to the gallery", self.artist, name);
        PaintOutcome::Saved {
            index: self.gallery.len() - 1,
            name: name.to_string(),
        }
    }
}

impl Activity for PaintStudio {
    type Event = PaintEvent;
    type Outcome = PaintOutcome;

    fn kind(&self) -> ActivityKind {
        ActivityKind::Paint
    }

    fn apply(&mut self, event: PaintEvent, ctx: &mut Context<'_>) -> PaintOutcome {
        match event {
            PaintEvent::Paint { row, col } => self.paint(row, col),
            PaintEvent::SetColor(color) => self.set_color(color),
            PaintEvent::SetBrush(size) => self.set_brush(size),
            PaintEvent::Clear => self.clear(),
            PaintEvent::Randomize => self.randomize(ctx.rng),
            PaintEvent::Save { name } => self.save(&name, ctx.now),
        }
    }

    fn report(&self, outcome: &PaintOutcome) -> Option<ActivityResult> {
        match outcome {
            PaintOutcome::Saved { name, .. } => Some(ActivityResult::Artwork { name: name.clone() }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn studio() -> PaintStudio {
        PaintStudio::new(PaintSettings::default(), "Mia")
    }

    #[test]
    fn test_defaults() {
        let studio = studio();
        assert_eq!(studio.color(), PaletteColor::Red.rgb());
        assert_eq!(studio.brush(), 1);
        assert_eq!(studio.canvas().width(), 20);
        assert!(studio.canvas().is_blank());
    }

    #[test]
    fn test_brush_size_paints_square() {
        let mut studio = studio();
        studio.set_color(PaletteColor::Blue);
        assert_eq!(studio.set_brush(3), PaintOutcome::BrushChanged(3));

        assert_eq!(studio.paint(10, 10), PaintOutcome::Painted(25));
        assert_eq!(studio.canvas().get(8, 12), Some(PaletteColor::Blue.rgb()));
        assert_eq!(studio.canvas().get(7, 10), Some(Rgb::WHITE));
    }

    #[test]
    fn test_brush_clamped() {
        let mut studio = studio();
        assert_eq!(studio.set_brush(0), PaintOutcome::BrushChanged(1));
        assert_eq!(studio.set_brush(9), PaintOutcome::BrushChanged(5));
    }

    #[test]
    fn test_off_canvas_paint_ignored() {
        let mut studio = studio();
        assert_eq!(studio.paint(20, 0), PaintOutcome::Ignored);
        assert!(studio.canvas().is_blank());
    }

    #[test]
    fn test_save_copies_canvas() {
        let mut studio = studio();
        studio.paint(0, 0);

        assert_eq!(studio.save("   ", Millis(1)), PaintOutcome::Ignored);
        assert_eq!(
            studio.save(" Sunny Day ", Millis(2)),
            PaintOutcome::Saved {
                index: 0,
                name: "Sunny Day".into()
            }
        );

        studio.clear();
        let saved = studio.gallery().next().unwrap();
        assert_eq!(saved.artist, "Mia");
        assert_eq!(saved.canvas.count_not(Rgb::WHITE), 1);
        assert!(studio.canvas().is_blank());
    }

    #[test]
    fn test_gallery_carries_into_new_studio() {
        let mut first = studio();
        first.save("Sun", Millis(1));
        let gallery = first.into_gallery();

        let mut second = studio().with_gallery(gallery);
        assert_eq!(second.gallery_len(), 1);
        assert_eq!(
            second.save("Moon", Millis(2)),
            PaintOutcome::Saved {
                index: 1,
                name: "Moon".into()
            }
        );
        assert!(second.canvas().is_blank());
    }

    #[test]
    fn test_save_reports_artwork() {
        let mut studio = studio();
        let mut rng = GameRng::new(1);
        let mut ctx = Context::new(Millis(5), &mut rng);

        let outcome = studio.apply(PaintEvent::Randomize, &mut ctx);
        assert_eq!(studio.report(&outcome), None);

        let outcome = studio.apply(PaintEvent::Save { name: "Noise".into() }, &mut ctx);
        assert_eq!(
            studio.report(&outcome),
            Some(ActivityResult::Artwork { name: "Noise".into() })
        );
        assert_eq!(studio.gallery_len(), 1);
    }
}
