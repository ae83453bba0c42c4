//! Poll a FANUC controller's state socket and print joint positions.
//!
//! Usage: `cargo run --example read_state [config.toml]`

use fanuc_io::{AppConfig, FanucInterface, Result};
use std::env;
use std::thread;
use std::time::Duration;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match env::args().nth(1) {
        Some(path) => {
            log::info!("Using config: {}", path);
            AppConfig::from_file(&path)?
        }
        None => AppConfig::fanuc_defaults(),
    };

    log::info!("Connecting to {}", config.robot.state_addr());
    let mut hw = FanucInterface::connect(&config.robot)?;

    hw.configure()?;
    hw.activate()?;

    loop {
        hw.read()?;
        let positions = hw.joint_positions();
        for (name, position) in hw.joint_names().iter().zip(positions) {
            println!("{}: {:.4}", name, position);
        }
        hw.write()?;
        thread::sleep(Duration::from_millis(100));
    }
}
