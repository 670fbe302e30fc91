use sdl2::IntegerOrSdlError;
use sdl2::event::Event as SdlEvent;
use sdl2::keyboard::Keycode;
use sdl2::render::TextureValueError;
use sdl2::render::UpdateTextureError;
use sdl2::video::WindowBuildError;
use thiserror::Error;

use lifegrid::events::Event;

/// Errors crossing the SDL boundary. Everything here is fatal: startup is
/// fail-fast and the frame loop has no recovery path for a failed present.
#[derive(Debug, Error)]
pub enum HostError {
    #[error("SDL error: {0}")]
    Sdl(String),

    #[error("Window creation failed: {0}")]
    Window(#[from] WindowBuildError),

    #[error("Canvas creation failed: {0}")]
    Canvas(#[from] IntegerOrSdlError),

    #[error("Texture creation failed: {0}")]
    Texture(#[from] TextureValueError),

    #[error("Texture upload failed: {0}")]
    Upload(#[from] UpdateTextureError),
}

/// Converts an SDL event into a lifegrid event. Events the core does not
/// react to collapse to `None`.
pub fn convert_event(event: SdlEvent) -> Option<Event> {
    match event {
        SdlEvent::Quit { .. } => Some(Event::Quit),

        SdlEvent::KeyDown {
            keycode: Some(Keycode::Escape | Keycode::Q),
            ..
        } => Some(Event::Quit),

        SdlEvent::MouseButtonDown { x, y, .. } => Some(Event::PointerDown { x, y }),
        SdlEvent::MouseButtonUp { x, y, .. } => Some(Event::PointerUp { x, y }),
        SdlEvent::MouseMotion { x, y, .. } => Some(Event::PointerMove { x, y }),

        _ => None,
    }
}
