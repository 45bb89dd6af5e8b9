use clap::Parser;
use homekit_bridge::config::{Config, load_dotenv};
use homekit_bridge::item::{Hsb, ItemKind, MemoryItem, State};
use homekit_bridge::simulation::run_item_simulation;
use homekit_bridge::tagged_item::CONFIG_DEFAULT_DURATION;
use homekit_bridge::{
    AccessoryType, AccessoryUpdater, Characteristic, CharacteristicType, TaggedItem,
    create_characteristic,
};
use log::{error, info, warn};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::signal;

#[derive(Parser)]
#[command(name = "homekit-bridge")]
#[command(about = "Demo bridge exposing simulated items as HomeKit characteristics")]
struct Cli {
    /// JSON configuration file, replaces the environment configuration
    #[arg(long, env = "BRIDGE_CONFIG")]
    config: Option<PathBuf>,

    /// Override the bridge name
    #[arg(long)]
    name: Option<String>,

    /// Seconds between simulated state changes
    #[arg(long)]
    interval: Option<u64>,

    /// Do not simulate item state changes
    #[arg(long)]
    no_simulation: bool,
}

fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();
}

fn resolve_config(cli: &Cli) -> Config {
    let mut config = match &cli.config {
        Some(path) => Config::load(path).unwrap_or_else(|e| {
            warn!("Failed to load {}: {}. Using environment", path.display(), e);
            Config::from_env()
        }),
        None => Config::from_env(),
    };
    if let Some(name) = &cli.name {
        config.bridge.name = name.clone();
    }
    if let Some(interval) = cli.interval {
        config.simulation.interval_secs = interval;
    }
    if cli.no_simulation {
        config.simulation.enabled = false;
    }
    config
}

fn main() {
    // Environment is mutated here, before the runtime starts its worker threads.
    load_dotenv();
    init_logger();
    let cli = Cli::parse();
    let config = resolve_config(&cli);

    match tokio::runtime::Runtime::new() {
        Ok(runtime) => runtime.block_on(run(config)),
        Err(e) => error!("Failed to start async runtime: {}", e),
    }
}

async fn run(config: Config) {
    info!("Starting {}", config.bridge.name);
    info!("Configuration loaded:");
    info!(
        "  Default valve duration: {}s",
        config.bridge.default_valve_duration_secs
    );
    info!(
        "  Simulation: {} (every {}s)",
        config.simulation.enabled, config.simulation.interval_secs
    );

    let fan_speed = Arc::new(MemoryItem::with_state(
        "Fan_Speed",
        ItemKind::Number,
        State::Decimal(40.0),
    ));
    let light_color = Arc::new(MemoryItem::with_state(
        "Light_Color",
        ItemKind::Color,
        State::Hsb(Hsb::new(30.0, 60.0, 80.0)),
    ));
    let valve_duration = Arc::new(MemoryItem::with_state(
        "Valve_Duration",
        ItemKind::Number,
        State::Decimal(0.0),
    ));
    let battery_low = Arc::new(MemoryItem::with_state(
        "Sensor_Battery",
        ItemKind::Switch,
        State::OFF,
    ));

    let tagged_items = vec![
        TaggedItem::new(
            fan_speed.clone(),
            AccessoryType::Fan,
            CharacteristicType::RotationSpeed,
        ),
        TaggedItem::new(light_color.clone(), AccessoryType::Lighting, CharacteristicType::Hue),
        TaggedItem::new(
            light_color.clone(),
            AccessoryType::Lighting,
            CharacteristicType::Brightness,
        ),
        TaggedItem::new(
            valve_duration.clone(),
            AccessoryType::Valve,
            CharacteristicType::Duration,
        )
        .with_configuration(
            CONFIG_DEFAULT_DURATION,
            config.bridge.default_valve_duration_secs,
        ),
        TaggedItem::new(
            battery_low.clone(),
            AccessoryType::ContactSensor,
            CharacteristicType::BatteryLowStatus,
        ),
    ];

    let updater = AccessoryUpdater::new();
    let mut characteristics: Vec<Arc<Characteristic>> = Vec::new();
    for tagged in &tagged_items {
        match create_characteristic(tagged, &updater) {
            Ok(characteristic) => characteristics.push(Arc::new(characteristic)),
            Err(e) => error!("Skipping {}: {}", tagged.name(), e),
        }
    }

    for characteristic in &characteristics {
        match characteristic.read().await {
            Ok(value) => info!("[HomeKit] {} = {}", characteristic.characteristic_type(), value),
            Err(e) => warn!("[HomeKit] {}", e),
        }
        if !characteristic.is_observable() {
            continue;
        }

        // Re-read on every change, like a controller would after a notification.
        let watched = Arc::downgrade(characteristic);
        let result = characteristic.subscribe(move || {
            let Some(watched) = watched.upgrade() else {
                return;
            };
            tokio::spawn(async move {
                if let Ok(value) = watched.read().await {
                    info!("[HomeKit] {} changed to {}", watched.characteristic_type(), value);
                }
            });
        });
        if let Err(e) = result {
            warn!("[HomeKit] {}", e);
        }
    }
    info!(
        "{} is running with {} characteristics",
        config.bridge.name,
        characteristics.len()
    );
    info!("  - Press Ctrl+C to exit");

    let simulation_task = config.simulation.enabled.then(|| {
        run_item_simulation(
            vec![fan_speed, light_color, battery_low],
            Duration::from_secs(config.simulation.interval_secs.max(1)),
        )
    });

    match signal::ctrl_c().await {
        Ok(()) => {
            info!("Received shutdown signal");
        }
        Err(e) => {
            error!("Failed to listen for shutdown signal: {}", e);
        }
    }

    if let Some(task) = simulation_task {
        task.abort();
    }
    for characteristic in characteristics.iter().filter(|c| c.is_observable()) {
        if let Err(e) = characteristic.unsubscribe() {
            warn!("[HomeKit] {}", e);
        }
    }

    info!("{} stopped", config.bridge.name);
}
