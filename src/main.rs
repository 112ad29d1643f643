use std::time::Instant;

use log::info;

use fractal_zoomer::{
    ExplorerConfig, FractalExplorer, FractalKind, FractalResult, PixelPoint, ZoomDirection,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let kind = match std::env::args().nth(1) {
        Some(name) => name.parse::<FractalKind>()?,
        None => FractalKind::default(),
    };

    run(kind)?;
    Ok(())
}

/// Headless session: render, animate a click-zoom, pan, and report.
fn run(kind: FractalKind) -> FractalResult<()> {
    let mut explorer = FractalExplorer::new(ExplorerConfig::default().with_fractal_kind(kind))?;
    let (width, height) = (
        explorer.viewport().screen_width(),
        explorer.viewport().screen_height(),
    );

    let buffer = explorer.render()?;
    info!(
        "initial view {:?}: {} of {} pixels bounded",
        explorer.current_viewport(),
        buffer.count_bounded(explorer.parameters().max_iter),
        buffer.cells().len()
    );

    let start = Instant::now();
    let mut frames = 0;
    let click = PixelPoint::new(f64::from(width) * 0.75, f64::from(height) * 0.5);
    let mut response = explorer.on_click(click, ZoomDirection::In);
    while let Some(scheduled) = response.next_tick {
        // the UI would wait `scheduled.delay` here
        response = explorer.on_animation_tick(scheduled.tick);
        if response.render_requested {
            explorer.render()?;
            frames += 1;
        }
    }
    info!(
        "zoom animation: {} frames in {:?}, zoom level {:.3}",
        frames,
        start.elapsed(),
        explorer.zoom_level()
    );

    explorer.on_drag_start(PixelPoint::new(0.0, 0.0));
    explorer.on_drag_move(PixelPoint::new(f64::from(width) / 10.0, 0.0));
    explorer.on_drag_end();
    explorer.render()?;
    info!("after pan: {:?}", explorer.current_viewport());

    Ok(())
}
