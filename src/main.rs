//! dragmenu replay tool
//!
//! Drives the drag controller headlessly with a demo list of rows and prints
//! every offset it publishes.

use anyhow::{anyhow, Result};
use clap::Parser;

use dragmenu::cli::CliArgs;
use dragmenu::content::ListSurface;
use dragmenu::model::ContainerBuilder;
use dragmenu::script::{replay, ReplayEvent, ReplayEventKind, ReplayScript};
use dragmenu::{DragConfig, DragMenu};

fn main() -> Result<()> {
    dragmenu::tracing::init();

    let startup = CliArgs::parse().into_config().map_err(|e| anyhow!(e))?;

    let config = match &startup.config_path {
        Some(path) => DragConfig::load_from(path)?,
        None => DragConfig::load(),
    };

    let script = match &startup.script {
        Some(path) => ReplayScript::load(path)?,
        None => ReplayScript::demo(startup.menu_height),
    };

    let mut list = ListSurface::numbered(startup.rows, startup.row_height, startup.viewport_height);
    list.scroll_to(startup.initial_scroll);

    let builder = ContainerBuilder::new()
        .child("menu", startup.menu_height)
        .child("list", startup.viewport_height);
    let mut menu = DragMenu::build(builder, config.clone(), list)?;
    menu.on_menu_state_changed(|state| tracing::info!("menu is now {}", state));

    tracing::info!(
        "Replaying {} ({} samples)",
        script.name.as_deref().unwrap_or("script"),
        script.samples.len()
    );

    let events = replay(&mut menu, &script, config.frame_interval_ms);

    if startup.json {
        println!("{}", serde_json::to_string_pretty(&events)?);
    } else {
        for event in &events {
            println!("{}", format_event(event));
        }
        let first_row = menu.content().visible_rows().next().unwrap_or("-");
        println!(
            "final: menu {} at offset {}, list scrolled {}px (first row '{}')",
            menu.menu_state(),
            menu.content_offset(),
            menu.content().scroll_px,
            first_row
        );
    }

    Ok(())
}

fn format_event(event: &ReplayEvent) -> String {
    let what = match &event.kind {
        ReplayEventKind::Touch {
            phase,
            y,
            intercepted,
        } => format!(
            "{:<6} y={:>7.1} {}",
            format!("{:?}", phase).to_lowercase(),
            y,
            if *intercepted { "intercepted" } else { "forwarded" }
        ),
        ReplayEventKind::Frame => "frame".to_string(),
    };
    format!(
        "{:>6}ms  {:<34} offset={:>4}  {}",
        event.timestamp_ms, what, event.offset, event.menu_state
    )
}
