use std::time::Duration;

use anyhow::Result;
use serde::Serialize;
use tokio::sync::{mpsc, watch};
use tokio::time::sleep;
use tracing::info;

use carousel_core::{AppConfig, ChannelHost, HeadlessHost, PageController, ScrollSyncBridge};

pub struct SimulateOptions {
    pub items: usize,
    pub looping: bool,
    pub pad: Option<usize>,
    pub steps: usize,
    pub prev: bool,
    pub json: bool,
}

/// State after one scripted step
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepRecord {
    pub step: usize,
    pub command: &'static str,
    /// Page-change notifications the step produced
    pub notified: Vec<usize>,
    pub current: usize,
    pub extended: usize,
    pub total: usize,
    pub phase: String,
}

pub async fn run(config: AppConfig, options: SimulateOptions) -> Result<()> {
    let json = options.json;
    let records = simulate(config, options).await?;

    if !json {
        println!("{:>4}  {:<8}  {:<10}  {:>4}  {:>8}  PHASE", "STEP", "COMMAND", "NOTIFIED", "PAGE", "EXTENDED");
    }
    for record in &records {
        if json {
            println!("{}", serde_json::to_string(record)?);
        } else {
            let notified = record
                .notified
                .iter()
                .map(|page| page.to_string())
                .collect::<Vec<_>>()
                .join(",");
            println!(
                "{:>4}  {:<8}  {:<10}  {:>4}  {:>8}  {}",
                record.step,
                record.command,
                if notified.is_empty() { "-".to_string() } else { notified },
                record.current,
                record.extended,
                record.phase
            );
        }
    }
    Ok(())
}

/// Run the scripted navigation against a headless host
pub async fn simulate(mut config: AppConfig, options: SimulateOptions) -> Result<Vec<StepRecord>> {
    config.carousel.loop_enabled |= options.looping;
    config.carousel.auto_play = false;
    if let Some(pad) = options.pad {
        config.carousel.additional_pages_per_side = pad;
    }

    let (host, host_rx) = ChannelHost::new();
    let mut controller = PageController::new(
        config.carousel.clone(),
        config.timing.clone(),
        options.items,
        host,
    )?;
    let (page_tx, mut page_rx) = mpsc::unbounded_channel();
    controller.set_on_page_change(Box::new(move |page| {
        let _ = page_tx.send(page);
    }));

    let (bridge, sender, handle) = ScrollSyncBridge::new(controller);
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let bridge_task = tokio::spawn(bridge.run(shutdown_rx));
    let host_task = tokio::spawn(HeadlessHost::new(host_rx, sender, config.scroll.clone()).run());

    // Long enough for a scroll animation, a loop jump and a drag grace period
    let settle = config.scroll.animation_duration()
        + config.timing.jump_delay()
        + config.timing.drag_grace()
        + Duration::from_millis(50);
    let command = if options.prev { "go_prev" } else { "go_next" };

    let mut records = Vec::with_capacity(options.steps + 1);
    sleep(settle).await;
    records.push(record(0, "start", &mut page_rx, &handle.status()));

    for step in 1..=options.steps {
        if options.prev {
            handle.go_prev()?;
        } else {
            handle.go_next()?;
        }
        sleep(settle).await;
        records.push(record(step, command, &mut page_rx, &handle.status()));
    }

    let _ = shutdown_tx.send(true);
    bridge_task.await?;
    let offset = host_task.await?;
    info!(offset, steps = options.steps, "Simulation finished");

    Ok(records)
}

fn record(
    step: usize,
    command: &'static str,
    page_rx: &mut mpsc::UnboundedReceiver<usize>,
    status: &carousel_core::PageStatus,
) -> StepRecord {
    let mut notified = Vec::new();
    while let Ok(page) = page_rx.try_recv() {
        notified.push(page);
    }
    StepRecord {
        step,
        command,
        notified,
        current: status.current,
        extended: status.extended,
        total: status.total,
        phase: format!("{:?}", status.phase),
    }
}
