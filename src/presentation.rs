//! Presentation state for process visualization.
//!
//! Display color, bar animation progress, and hover flag belong to the UI
//! layer, not to [`Process`]. They live here keyed by [`ProcessId`] so the
//! scheduling core stays presentation-agnostic.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::models::{Process, ProcessId};

/// Lowest channel value of a random base color.
const CHANNEL_MIN: u8 = 100;
/// Brightness added to each channel while hovered.
const HOVER_BOOST: u8 = 40;

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Creates a color.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Random light color with each channel in `100..=255`.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self {
            r: rng.random_range(CHANNEL_MIN..=u8::MAX),
            g: rng.random_range(CHANNEL_MIN..=u8::MAX),
            b: rng.random_range(CHANNEL_MIN..=u8::MAX),
        }
    }

    /// Brightened color, each channel clamped at 255.
    pub fn highlighted(self) -> Self {
        Self {
            r: self.r.saturating_add(HOVER_BOOST),
            g: self.g.saturating_add(HOVER_BOOST),
            b: self.b.saturating_add(HOVER_BOOST),
        }
    }
}

/// Visual state of one process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessVisual {
    /// Base color.
    pub color: Rgb,
    /// Bar growth progress (0.0..=1.0).
    pub progress: f32,
    /// Whether the pointer is over the bar.
    pub hovered: bool,
}

impl ProcessVisual {
    fn new(color: Rgb) -> Self {
        Self {
            color,
            progress: 0.0,
            hovered: false,
        }
    }

    /// Color to draw with, accounting for hover.
    pub fn display_color(&self) -> Rgb {
        if self.hovered {
            self.color.highlighted()
        } else {
            self.color
        }
    }
}

/// Per-process visual state owned by the UI.
#[derive(Debug, Clone, Default)]
pub struct PresentationState {
    visuals: HashMap<ProcessId, ProcessVisual>,
}

impl PresentationState {
    /// Creates empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Aligns state with the current records.
    ///
    /// New ids get a random color; ids no longer present are dropped.
    /// Existing entries are left untouched.
    pub fn sync<R: Rng>(&mut self, processes: &[Process], rng: &mut R) {
        self.visuals
            .retain(|id, _| processes.iter().any(|p| p.id == *id));
        for p in processes {
            self.visuals
                .entry(p.id)
                .or_insert_with(|| ProcessVisual::new(Rgb::random(rng)));
        }
    }

    /// Visual state for a process.
    pub fn get(&self, id: ProcessId) -> Option<&ProcessVisual> {
        self.visuals.get(&id)
    }

    /// Number of tracked processes.
    pub fn len(&self) -> usize {
        self.visuals.len()
    }

    /// Whether no process is tracked.
    pub fn is_empty(&self) -> bool {
        self.visuals.is_empty()
    }

    /// Restarts every bar animation from zero.
    pub fn reset_animation(&mut self) {
        for v in self.visuals.values_mut() {
            v.progress = 0.0;
        }
    }

    /// Advances every unfinished animation by `step`.
    ///
    /// Returns `true` if any bar moved, i.e. a redraw is needed.
    pub fn advance_animation(&mut self, step: f32) -> bool {
        let mut moved = false;
        for v in self.visuals.values_mut() {
            if v.progress < 1.0 {
                v.progress = (v.progress + step).min(1.0);
                moved = true;
            }
        }
        moved
    }

    /// Sets the hover flag. Returns `true` if it changed.
    pub fn set_hovered(&mut self, id: ProcessId, hovered: bool) -> bool {
        match self.visuals.get_mut(&id) {
            Some(v) if v.hovered != hovered => {
                v.hovered = hovered;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn processes(ids: &[u64]) -> Vec<Process> {
        ids.iter()
            .map(|&i| Process::new(format!("P{i}"), 0, 1).with_id(ProcessId(i)))
            .collect()
    }

    #[test]
    fn test_random_color_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let c = Rgb::random(&mut rng);
            assert!(c.r >= CHANNEL_MIN && c.g >= CHANNEL_MIN && c.b >= CHANNEL_MIN);
        }
    }

    #[test]
    fn test_highlight_clamps() {
        assert_eq!(Rgb::new(100, 220, 255).highlighted(), Rgb::new(140, 255, 255));
    }

    #[test]
    fn test_sync_adds_and_drops() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut state = PresentationState::new();

        state.sync(&processes(&[1, 2]), &mut rng);
        assert_eq!(state.len(), 2);
        let color = state.get(ProcessId(1)).unwrap().color;

        state.sync(&processes(&[1, 3]), &mut rng);
        assert_eq!(state.len(), 2);
        assert!(state.get(ProcessId(2)).is_none());
        assert_eq!(state.get(ProcessId(1)).unwrap().color, color);
    }

    #[test]
    fn test_animation_completes() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut state = PresentationState::new();
        state.sync(&processes(&[1]), &mut rng);

        let mut frames = 0;
        while state.advance_animation(0.25) {
            frames += 1;
        }
        assert_eq!(frames, 4);
        assert_eq!(state.get(ProcessId(1)).unwrap().progress, 1.0);

        state.reset_animation();
        assert_eq!(state.get(ProcessId(1)).unwrap().progress, 0.0);
    }

    #[test]
    fn test_hover() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut state = PresentationState::new();
        state.sync(&processes(&[5]), &mut rng);

        assert!(state.set_hovered(ProcessId(5), true));
        assert!(!state.set_hovered(ProcessId(5), true));
        assert!(!state.set_hovered(ProcessId(9), true));

        let v = state.get(ProcessId(5)).unwrap();
        assert_eq!(v.display_color(), v.color.highlighted());
    }
}
