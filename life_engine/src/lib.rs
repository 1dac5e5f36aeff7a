// lib.rs - Core logic for the windowed Life simulator

pub mod grid;
pub mod paint;
pub mod quantize;

pub use grid::{cells_for_client, Grid, CELL_FILL, CELL_SIZE};
pub use paint::{hit_cell, PaintDrag};
pub use quantize::{quantize, FrameSize, RectPx, ResizeHandle, MIN_CELLS};
