pub mod app;
pub mod draw;
pub mod events;
pub mod grid;
pub mod ui;

pub const APP_NAME: &str = "Grid";

pub const WINDOW_WIDTH: i32 = 640;
pub const WINDOW_HEIGHT: i32 = 480;

/// Side length of a grid cell on screen, in pixels
pub const CELL_SIZE: i32 = 20;

/// Inset between a cell's nominal square and the square actually drawn. This is
/// what leaves gridlines visible between cells.
pub const CELL_PAD: i32 = 2;

/// Side length of a button's hit region. The control strip along the bottom of
/// the window is exactly this tall.
pub const ICON_SIZE: i32 = 40;
pub const ICON_PAD: i32 = 5;
pub const ICON_SCALE: i32 = 4;

pub const FPS: u32 = 30;

/// Grid dimensions, derived from the display area left above the control strip
pub const N_CELLS_X: usize = (WINDOW_WIDTH / CELL_SIZE) as usize;
pub const N_CELLS_Y: usize = ((WINDOW_HEIGHT - ICON_SIZE) / CELL_SIZE) as usize;
