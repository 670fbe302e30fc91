use std::thread;
use std::time::Duration;

use sdl2::pixels::PixelFormatEnum;
use tracing::info;
use tracing_subscriber::EnvFilter;

use lifegrid::APP_NAME;
use lifegrid::FPS;
use lifegrid::N_CELLS_X;
use lifegrid::N_CELLS_Y;
use lifegrid::WINDOW_HEIGHT;
use lifegrid::WINDOW_WIDTH;
use lifegrid::app::App;
use lifegrid::app::Pacer;
use lifegrid::draw::Color;
use lifegrid::draw::Frame;
use lifegrid::events::Event;

use io::HostError;

mod io;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Fail-fast startup: every acquisition propagates immediately, and drop
    // order releases whatever was already acquired in reverse.
    let sdl_context = sdl2::init().map_err(HostError::Sdl)?;
    let video_subsystem = sdl_context.video().map_err(HostError::Sdl)?;
    let timer = sdl_context.timer().map_err(HostError::Sdl)?;

    let window = video_subsystem
        .window(APP_NAME, WINDOW_WIDTH as u32, WINDOW_HEIGHT as u32)
        .position_centered()
        .build()
        .map_err(HostError::Window)?;

    let mut canvas = window.into_canvas().build().map_err(HostError::Canvas)?;

    let texture_creator = canvas.texture_creator();
    let mut texture = texture_creator
        .create_texture_streaming(
            PixelFormatEnum::RGB888,
            WINDOW_WIDTH as u32,
            WINDOW_HEIGHT as u32,
        )
        .map_err(HostError::Texture)?;

    let mut event_pump = sdl_context.event_pump().map_err(HostError::Sdl)?;

    let mut app = App::new();
    let mut frame = Frame::new(WINDOW_WIDTH as usize, WINDOW_HEIGHT as usize);
    let mut pacer = Pacer::new(FPS);

    info!(cols = N_CELLS_X, rows = N_CELLS_Y, fps = FPS, "starting");

    'main: loop {
        let wait = pacer.wait_ms(timer.ticks());
        if wait > 0 {
            thread::sleep(Duration::from_millis(wait as u64));
        }

        app.tick();

        frame.clear(Color::Black);
        frame.draw_grid(&app.grid);
        frame.draw_controls(&app.buttons);

        texture
            .update(None, frame.bytes(), frame.pitch())
            .map_err(HostError::Upload)?;
        canvas.clear();
        canvas.copy(&texture, None, None).map_err(HostError::Sdl)?;
        canvas.present();

        while let Some(event) = event_pump.poll_event() {
            match io::convert_event(event) {
                Some(Event::Quit) => break 'main,
                Some(event) => app.handle(event),
                None => {}
            }
        }
    }

    Ok(())
}
