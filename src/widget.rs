// The explorer widget instance: owns the dataset, view state, viewport and
// framebuffer, and turns events into repaints. Nothing here reaches for
// ambient state; hosts hand in a viewport and dispatch events.

use crate::activity::ActivityDataset;
use crate::raster::FrameBuffer;
use crate::render::render_triad;
use crate::state::{Event, ViewState, transition};
use crate::stats::{self, Stats};
use crate::viewport::Viewport;

pub struct TriadExplorer {
    dataset: ActivityDataset,
    state: ViewState,
    viewport: Viewport,
    frame: FrameBuffer,
}

impl TriadExplorer {
    /// Build the widget and paint the initial depth-0 frame. The intensity
    /// rows for every supported depth are generated here, once; later depth
    /// changes and resizes only re-read them.
    pub fn new(viewport: Viewport) -> Self {
        let mut widget = TriadExplorer {
            dataset: ActivityDataset::generate(),
            state: ViewState::new(),
            frame: FrameBuffer::new(viewport),
            viewport,
        };
        widget.handle(Event::Mounted);
        widget
    }

    pub fn depth(&self) -> u32 {
        self.state.current_depth
    }

    pub fn stats(&self) -> Stats {
        stats::present(self.depth())
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn frame(&self) -> &FrameBuffer {
        &self.frame
    }

    /// Re-establish the viewport from a fresh layout measurement, then
    /// repaint: reallocating the backing buffer discarded the prior pixels.
    pub fn resize(&mut self, logical_width: f64, logical_height: f64, device_pixel_ratio: f64) {
        self.viewport.resize(logical_width, logical_height, device_pixel_ratio);
        self.frame.resize(self.viewport);
        self.handle(Event::Resized);
    }

    /// Apply one event through the transition table, repainting if asked.
    pub fn handle(&mut self, event: Event) {
        let (next, repaint) = transition(self.state, event);
        self.state = next;
        if repaint {
            self.repaint();
        }
    }

    fn repaint(&mut self) {
        self.frame.clear();
        render_triad(
            &mut self.frame,
            &self.dataset,
            self.state.current_depth,
            self.viewport.logical_width,
            self.viewport.logical_height,
        );
    }
}
