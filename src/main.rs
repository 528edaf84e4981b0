use std::env;
use std::io::{self, BufRead};
use std::str::FromStr;

use anyhow::{anyhow, Context, Result};
use log::LevelFilter;
use simple_logger::SimpleLogger;
use tokio::runtime::Runtime;
use tokio::sync::mpsc;

use light_buttons::observer::LogObserver;
use light_buttons::render::{self, ChannelObserver, RENDER_QUEUE};
use light_buttons::{ButtonStore, LightView, UiEvent};

/// Environment variable holding the log level, e.g. `info` or `trace`
const LOG_ENV: &str = "LIGHT_BUTTONS_LOG";

fn main() -> Result<()> {
    let level = match env::var(LOG_ENV) {
        Ok(level) => LevelFilter::from_str(&level)
            .map_err(|_| anyhow!("{} is not a log level: {:?}", LOG_ENV, level))?,
        Err(_) => LevelFilter::Debug,
    };
    SimpleLogger::new()
        .with_level(level)
        .init()
        .map_err(|e| anyhow!("Failed to install logger: {}", e))?;

    let rt = Runtime::new()?;

    let _guard = rt.enter();

    let (render_tx, render_rx) = mpsc::channel(RENDER_QUEUE);
    let renderer = render::start(render_rx);

    let mut view = LightView::new(ButtonStore::new());
    view.subscribe(Box::new(LogObserver::new()));
    view.subscribe(Box::new(ChannelObserver::new(render_tx)));

    log::info!("Session started, reading events from stdin");

    for line in io::stdin().lock().lines() {
        let line = line.context("Error while reading events")?;

        if line.trim().is_empty() {
            continue;
        }

        let result = line
            .parse::<UiEvent>()
            .and_then(|event| view.handle(event));

        match result {
            Ok(Some(selection)) => println!("{}", selection),
            Ok(None) => (),
            Err(e) => log::warn!("{:#}", e),
        }
    }

    // Dropping the view closes the render channel
    drop(view);

    rt.block_on(renderer)
        .context("Renderer panicked")?
        .context("Renderer failed")?;

    log::info!("Session ended");

    Ok(())
}
