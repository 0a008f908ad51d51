//! Pong entry point
//!
//! Initializes logging and the native platform, then runs the game loop.

use std::process::ExitCode;

use paddle_pong::platform::{NativePlatform, SystemClock};
use paddle_pong::scheduler::FrameScheduler;
use paddle_pong::sim::GameState;
use paddle_pong::{Config, Settings};

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Pong starting...");

    let config = Config::STANDARD;
    let settings = Settings::load();

    let mut platform = match NativePlatform::new(&config, &settings) {
        Ok(platform) => platform,
        Err(e) => {
            log::error!("Initialization failed: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let clock = SystemClock::new();
    let mut scheduler = FrameScheduler::new(GameState::new(config));
    scheduler.run(&mut platform, &clock);

    // Release the window before reporting a clean exit
    drop(platform);
    log::info!("Pong exited");
    ExitCode::SUCCESS
}
