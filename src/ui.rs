use crate::ICON_PAD;
use crate::ICON_SCALE;
use crate::ICON_SIZE;
use crate::WINDOW_HEIGHT;
use crate::draw::Icon;

pub const N_BUTTONS: usize = 4;

/// What a button does when pressed. Dispatch happens in one place, on the
/// simulation state, which owns everything a behavior can touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    TogglePlay,
    SpeedUp,
    SpeedDown,
    Clear,
}

/// A clickable icon button on the control strip.
///
/// `pad` and `scale` affect rendering only; the hit region is always the
/// fixed `ICON_SIZE` square at the button's position.
pub struct Button {
    pub x: i32,
    pub y: i32,
    pub pad: i32,
    pub scale: i32,

    pub state: bool,

    /// Icon shown while `state` is true
    pub icon_on: Icon,

    /// Icon shown while `state` is false
    pub icon_off: Icon,

    pub action: Action,
}

impl Button {
    pub fn icon(&self) -> Icon {
        if self.state { self.icon_on } else { self.icon_off }
    }

    pub fn contains(&self, px: i32, py: i32) -> bool {
        point_in_rect(px, py, self.x, self.y, ICON_SIZE, ICON_SIZE)
    }
}

/// Strict point-in-rectangle test. Points exactly on an edge are outside.
pub fn point_in_rect(px: i32, py: i32, rx: i32, ry: i32, rw: i32, rh: i32) -> bool {
    px > rx && px < rx + rw && py > ry && py < ry + rh
}

/// The fixed control strip: play toggle, slower, faster, clear, laid out
/// left to right along the bottom of the window.
pub fn controls() -> [Button; N_BUTTONS] {
    let y = WINDOW_HEIGHT - ICON_SIZE;

    [
        Button {
            x: 0,
            y,
            pad: ICON_PAD,
            scale: ICON_SCALE,
            state: false,
            icon_on: Icon::Pause,
            icon_off: Icon::Play,
            action: Action::TogglePlay,
        },
        Button {
            x: ICON_SIZE,
            y,
            pad: ICON_PAD,
            scale: ICON_SCALE,
            state: true,
            icon_on: Icon::SpeedDown,
            icon_off: Icon::SpeedDown,
            action: Action::SpeedDown,
        },
        Button {
            x: ICON_SIZE * 2,
            y,
            pad: ICON_PAD,
            scale: ICON_SCALE,
            state: true,
            icon_on: Icon::SpeedUp,
            icon_off: Icon::SpeedUp,
            action: Action::SpeedUp,
        },
        Button {
            x: ICON_SIZE * 3,
            y,
            pad: ICON_PAD,
            scale: ICON_SCALE,
            state: true,
            icon_on: Icon::Clear,
            icon_off: Icon::Clear,
            action: Action::Clear,
        },
    ]
}
