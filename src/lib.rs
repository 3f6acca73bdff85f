pub mod activity;
pub mod geometry;
pub mod raster;
pub mod render;
pub mod state;
pub mod stats;
pub mod viewport;
pub mod visualizer;
pub mod widget;

pub use activity::{ActivityDataset, MAX_DEPTH, MIN_DEPTH, leaf_count};
pub use geometry::{Point, Triangle};
pub use raster::FrameBuffer;
pub use render::{Color, DrawTarget, leaf_color, leaf_green, render_triad, subdivide};
pub use state::{Event, ViewState, transition};
pub use stats::{Stats, group_thousands, present, total_transactions};
pub use viewport::Viewport;
pub use widget::TriadExplorer;
