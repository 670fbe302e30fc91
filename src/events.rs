/// Input events delivered by the host window, already stripped down to what
/// the core reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Tear down the frame loop
    Quit,

    PointerDown { x: i32, y: i32 },

    /// Accepted but produces no action
    PointerUp { x: i32, y: i32 },

    /// Accepted but produces no action
    PointerMove { x: i32, y: i32 },
}
