//! clouds - stream a test tone through the bridge
//!
//! Run with: cargo run --bin clouds -- [seconds]

mod app;

use app::Demo;
use color_eyre::eyre::WrapErr;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    env_logger::init();

    let seconds = std::env::args()
        .nth(1)
        .map(|arg| arg.parse::<u64>())
        .transpose()
        .wrap_err("duration must be a whole number of seconds")?
        .unwrap_or(10);

    Demo::new()
        .seconds(seconds)
        .tone(220.0)
        .trigger_every_ms(500)
        .run()
}
