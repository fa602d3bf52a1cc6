use crate::error::SparkResult;
use crate::render::{CirclePrimitive, PathPrimitive, RectPrimitive, Surface};

/// No-op surface used by tests and headless usage.
///
/// It still validates every primitive so tests can catch invalid geometry
/// before a real backend is involved.
#[derive(Debug, Default)]
pub struct NullSurface {
    pub path_count: usize,
    pub rect_count: usize,
    pub circle_count: usize,
}

impl Surface for NullSurface {
    fn draw_path(&mut self, path: &PathPrimitive) -> SparkResult<()> {
        path.validate()?;
        self.path_count += 1;
        Ok(())
    }

    fn draw_rect(&mut self, rect: &RectPrimitive) -> SparkResult<()> {
        rect.validate()?;
        self.rect_count += 1;
        Ok(())
    }

    fn draw_circle(&mut self, circle: &CirclePrimitive) -> SparkResult<()> {
        circle.validate()?;
        self.circle_count += 1;
        Ok(())
    }
}

impl NullSurface {
    #[must_use]
    pub fn total_draw_calls(&self) -> usize {
        self.path_count + self.rect_count + self.circle_count
    }
}
