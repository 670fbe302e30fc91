use tracing::debug;

use crate::CELL_PAD;
use crate::CELL_SIZE;
use crate::N_CELLS_X;
use crate::N_CELLS_Y;
use crate::events::Event;
use crate::grid::Grid;
use crate::ui::Action;
use crate::ui::Button;
use crate::ui::N_BUTTONS;
use crate::ui::controls;
use crate::ui::point_in_rect;

/// Frames that must elapse, while running, before one generation step.
/// A larger divisor means a slower simulation.
pub const SPEEDS: [u32; 5] = [60, 30, 15, 10, 5];

const START_SPEED: usize = 2;

/// The whole mutable state of the viewer: grid, control strip, play state,
/// speed level and the frame accumulator that paces generation steps.
pub struct App {
    pub grid: Grid,
    pub buttons: [Button; N_BUTTONS],
    pub running: bool,

    speed_idx: usize,
    frame_count: u32,
}

impl App {
    pub fn new() -> Self {
        Self {
            grid: Grid::new(N_CELLS_X, N_CELLS_Y),
            buttons: controls(),
            running: false,
            speed_idx: START_SPEED,
            frame_count: 0,
        }
    }

    /// Current frames-per-generation divisor.
    pub fn speed(&self) -> u32 {
        SPEEDS[self.speed_idx]
    }

    /// Advance the frame accumulator; step the grid when a generation is
    /// due. Returns whether a step happened.
    ///
    /// While paused the accumulator is pinned to `divisor - 1` every frame,
    /// not merely held, so the first running frame after a resume always
    /// completes a step no matter how long the pause lasted or how the
    /// divisor changed in the meantime.
    pub fn tick(&mut self) -> bool {
        if self.running {
            self.frame_count += 1;

            if self.frame_count >= self.speed() {
                self.grid.step();
                self.frame_count = 0;

                debug!("generation step");
                return true;
            }

            false
        } else {
            self.frame_count = self.speed() - 1;

            false
        }
    }

    /// Dispatch one input event. `Quit` is handled by the frame loop before
    /// it gets here.
    pub fn handle(&mut self, event: Event) {
        match event {
            Event::PointerDown { x, y } => self.press(x, y),
            Event::PointerUp { .. } | Event::PointerMove { .. } | Event::Quit => {}
        }
    }

    /// A pointer press lands on the grid (toggling a cell, only while
    /// paused) and on the control strip. Every button whose region contains
    /// the point fires; the fixed layout keeps those regions disjoint.
    fn press(&mut self, px: i32, py: i32) {
        if !self.running {
            for cy in 0..self.grid.height() {
                for cx in 0..self.grid.width() {
                    let x = cx as i32 * CELL_SIZE + CELL_PAD;
                    let y = cy as i32 * CELL_SIZE + CELL_PAD;

                    if point_in_rect(px, py, x, y, CELL_SIZE - CELL_PAD, CELL_SIZE - CELL_PAD) {
                        self.grid.toggle(cx, cy);
                    }
                }
            }
        }

        for i in 0..self.buttons.len() {
            if self.buttons[i].contains(px, py) {
                self.press_button(i);
            }
        }
    }

    fn press_button(&mut self, i: usize) {
        let action = self.buttons[i].action;
        debug!(?action, "button press");

        match action {
            Action::TogglePlay => {
                let state = !self.buttons[i].state;
                self.buttons[i].state = state;
                self.running = state;
            }
            Action::SpeedUp => {
                if self.speed_idx + 1 < SPEEDS.len() {
                    self.speed_idx += 1;
                }
            }
            Action::SpeedDown => {
                if self.speed_idx > 0 {
                    self.speed_idx -= 1;
                }
            }
            Action::Clear => {
                if !self.running {
                    self.grid.clear();
                }
            }
        }
    }
}

/// Fixed-rate frame schedule.
///
/// Each frame sleeps out the remainder of the current interval, then the
/// schedule restarts from the current tick. An overshot frame is absorbed,
/// not compensated for.
pub struct Pacer {
    interval: u32,
    next: u32,
}

impl Pacer {
    pub fn new(fps: u32) -> Self {
        Self {
            interval: 1000 / fps,
            next: 0,
        }
    }

    /// Milliseconds to sleep before the next frame, given the current tick.
    /// Advances the schedule.
    pub fn wait_ms(&mut self, now: u32) -> u32 {
        let wait = self.next.saturating_sub(now);
        self.next = now + self.interval;

        wait
    }
}
