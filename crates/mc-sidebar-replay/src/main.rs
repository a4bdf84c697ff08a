mod config;

use std::time::Duration;

use config::ReplayConfig;
use mc_sidebar_proto::layout::Layout;
use mc_sidebar_proto::packets::Packet;
use mc_sidebar_session::{PacketSink, ScoreboardSession};
use tokio::sync::mpsc;
use tracing::{error, info, warn};

/// Hands packets to the writer task without waiting on it.
struct ChannelSink(mpsc::UnboundedSender<Packet>);

impl PacketSink for ChannelSink {
    fn send(&mut self, packet: Packet) {
        if self.0.send(packet).is_err() {
            warn!("Packet writer closed, dropping packet");
        }
    }
}

#[tokio::main]
async fn main() {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "sidebar.toml".into());
    let config = match ReplayConfig::load(&path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load {path}: {e}");
            std::process::exit(1);
        }
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    info!(
        "MC-Sidebar replay v{} for protocol {} ({} frames)",
        env!("CARGO_PKG_VERSION"),
        config.session.version,
        config.frames.len()
    );

    let mut session =
        match ScoreboardSession::with_policy(config.session.version, config.session.policy()) {
            Ok(s) => s,
            Err(e) => {
                error!("Cannot open sidebar session: {e}");
                std::process::exit(1);
            }
        };
    let layout = session.layout();
    info!("Layout: {:?} ({:?} slots)", layout.variant, layout.style);

    let (packet_tx, packet_rx) = mpsc::unbounded_channel();
    let writer = tokio::spawn(write_packets(packet_rx, layout, config.output.slots));
    let mut sink = ChannelSink(packet_tx);

    session.initialize(&mut sink);
    for (index, frame) in config.frames.iter().enumerate() {
        if frame.delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(frame.delay_ms)).await;
        }
        if let Some(title) = &frame.title {
            session.set_title(title, &mut sink);
        }
        if let Err(e) = session.update_lines(&frame.lines, &mut sink) {
            warn!("Frame {index} skipped: {e}");
        }
    }
    if config.session.teardown {
        session.teardown(&mut sink);
    }

    // Closing the channel lets the writer drain and finish.
    drop(sink);
    match writer.await {
        Ok(count) => info!("Replay finished, {count} packets written"),
        Err(e) => error!("Packet writer failed: {e}"),
    }
}

/// Print every packet as one JSON line on stdout.
async fn write_packets(
    mut packet_rx: mpsc::UnboundedReceiver<Packet>,
    layout: &'static Layout,
    slots: bool,
) -> usize {
    let mut count = 0;
    while let Some(packet) = packet_rx.recv().await {
        count += 1;
        let line = if slots {
            serde_json::to_string(&layout.describe(&packet))
        } else {
            serde_json::to_string(&packet)
        };
        match line {
            Ok(line) => println!("{line}"),
            Err(e) => error!("Failed to serialize packet {count}: {e}"),
        }
    }
    count
}
