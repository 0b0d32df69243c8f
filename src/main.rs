//! Tab shell demo
//!
//! Loads a shell configuration (the built-in two-screen app when no path is
//! given), replays a rotation and a couple of presses, and prints each frame
//! as JSON.

use anyhow::Context;
use app_ui::screens::ScreenView;
use tab_shell::{AppShell, Frame, ShellConfig, ShellEvent};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => {
            ShellConfig::load(&path).with_context(|| format!("loading shell config from {path}"))?
        }
        None => ShellConfig::default(),
    };

    let mut shell = AppShell::new(config).context("building shell")?;
    let mut frame = shell.render();
    print_frame("initial", &frame)?;

    // The runtime reports the rendered size of the bar after paint
    let window = shell.device().window;
    frame = shell.handle(ShellEvent::Layout {
        height: frame.tab_bar.metrics.height,
        width: window.width,
    });
    print_frame("measured", &frame)?;

    let rotated = window.rotated();
    shell.handle(ShellEvent::WindowChanged(rotated));
    let height = shell.render().tab_bar.metrics.height;
    frame = shell.handle(ShellEvent::Layout {
        height,
        width: rotated.width,
    });
    print_frame("rotated", &frame)?;

    frame = shell.handle(ShellEvent::Press(1));
    print_frame("pressed", &frame)?;

    frame = shell.handle(ShellEvent::LongPress(0));
    print_frame("long-pressed", &frame)?;

    Ok(())
}

fn print_frame(step: &str, frame: &Frame) -> anyhow::Result<()> {
    tracing::info!(
        step,
        height = frame.tab_bar.metrics.height,
        horizontal_labels = frame.tab_bar.metrics.horizontal_labels,
        padding_bottom = frame.screen.padding_bottom(),
        "Frame"
    );
    if let ScreenView::Galery(galery) = &frame.screen {
        tracing::info!(step, content_height = galery.content_height(), "Galery content");
    }
    println!("{}", frame.tab_bar.to_json().context("serializing tab bar")?);
    Ok(())
}
