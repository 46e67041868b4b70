use anyhow::Context;
use backend::system::System;
use confetti::canvas::GlCanvas;
use confetti::config::Config;
use confetti::input::{InputSnapshot, KeyBindings};
use confetti::logging::{init_logging, LoggingConfig};
use confetti::timing::FrameTimer;
use confetti::Engine;
use std::path::PathBuf;

fn main() {
    if let Err(e) = run() {
        log::error!("startup failure: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = match Config::load(config_path.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            init_logging(LoggingConfig::default());
            return Err(e.into());
        }
    };
    init_logging(LoggingConfig {
        env_filter: config.log_filter.clone(),
        ..LoggingConfig::default()
    });

    let mut system =
        System::new(&config.window_settings()).context("graphics initialization failed")?;
    let mut canvas = GlCanvas::new(&config).context("renderer initialization failed")?;

    let (width, height) = (config.width as f32, config.height as f32);
    let bindings = KeyBindings::default();
    let mut engine = Engine::new(width, height, config.seed);
    let mut timer = FrameTimer::new();
    log::info!("{}x{} window ready, press s to start", config.width, config.height);

    while !engine.should_close() {
        timer.tick();
        let raw = system.process_io_events();
        engine.process_input(&InputSnapshot::from_raw(&raw, &bindings, height));
        engine.update();
        engine.render(&mut canvas);
        system.draw_to_screen();
    }

    log::info!("closing after {} confetti", engine.confetti().len());
    Ok(())
}
