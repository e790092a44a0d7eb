use crate::domain::ChangedCell;

/// Per-cell fade timers driven by the cells a step reported as changed.
/// Decoupled from the simulation rate: a step restarts the fades, frames
/// run them down.
#[derive(Clone, Debug, PartialEq)]
pub struct Transitions {
    duration: f32,
    width: usize,
    remaining: Vec<f32>,
    animating: bool,
}

impl Transitions {
    pub fn new(dims: (usize, usize), duration: f32) -> Self {
        Self {
            duration: duration.max(0.0),
            width: dims.0,
            remaining: vec![0.0; dims.0 * dims.1],
            animating: false,
        }
    }

    /// Start a fade for every changed cell
    pub fn start(&mut self, changed: &[ChangedCell]) {
        if self.duration <= 0.0 {
            return;
        }
        for cell in changed {
            if let Some(slot) = self.remaining.get_mut(cell.y * self.width + cell.x) {
                *slot = self.duration;
                self.animating = true;
            }
        }
    }

    /// Run all fades down by `delta_time`
    pub fn tick(&mut self, delta_time: f32) {
        if !self.animating {
            return;
        }
        let mut any = false;
        for slot in self.remaining.iter_mut().filter(|t| **t > 0.0) {
            *slot = (*slot - delta_time).max(0.0);
            any |= *slot > 0.0;
        }
        self.animating = any;
    }

    /// Fade progress of a cell in [0, 1), `None` when it is not fading
    pub fn progress(&self, x: usize, y: usize) -> Option<f32> {
        let t = *self.remaining.get(y * self.width + x)?;
        (t > 0.0).then(|| 1.0 - t / self.duration)
    }

    pub fn is_animating(&self) -> bool {
        self.animating
    }

    /// Drop all fades, resizing for a new board if needed
    pub fn clear(&mut self, dims: (usize, usize)) {
        *self = Self::new(dims, self.duration);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CellState;

    fn change(x: usize, y: usize) -> ChangedCell {
        ChangedCell { x, y, old: CellState::Empty, new: CellState::P1 }
    }

    #[test]
    fn test_fade_runs_to_idle() {
        let mut fades = Transitions::new((4, 4), 0.5);
        fades.start(&[change(1, 2)]);
        assert!(fades.is_animating());
        assert_eq!(fades.progress(1, 2), Some(0.0));
        assert_eq!(fades.progress(2, 1), None);

        fades.tick(0.25);
        assert_eq!(fades.progress(1, 2), Some(0.5));
        fades.tick(0.5);
        assert_eq!(fades.progress(1, 2), None);
        assert!(!fades.is_animating());
    }

    #[test]
    fn test_zero_duration_never_animates() {
        let mut fades = Transitions::new((2, 2), 0.0);
        fades.start(&[change(0, 0)]);
        assert!(!fades.is_animating());
        assert_eq!(fades.progress(0, 0), None);
    }

    #[test]
    fn test_clear_resizes() {
        let mut fades = Transitions::new((2, 2), 0.3);
        fades.start(&[change(1, 1)]);
        fades.clear((5, 5));
        assert!(!fades.is_animating());
        assert_eq!(fades.progress(4, 4), None);
    }
}
