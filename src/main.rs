//! Chaos Catcher entry point
//!
//! Native builds run a headless session against a scripted sweeping pointer
//! and print the final snapshot. The web build is driven from JavaScript
//! through `platform::web`.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use chaos_catcher::format_score;
    use chaos_catcher::platform::FrameClock;
    use chaos_catcher::settings::Settings;
    use chaos_catcher::sim::GameLoop;

    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed = parse_arg(args.next(), "seed", 0x5EED_u64);
    let frames = parse_arg(args.next(), "frames", 1800_u64);

    log::info!("Chaos Catcher (native) starting: seed {}, {} frames", seed, frames);

    let settings = Settings::default();
    let (width, height) = (settings.field_width, settings.field_height);
    let mut game = GameLoop::new(settings, seed);
    let mut clock = FrameClock::new();

    // Pause for half a second of frames midway through
    let pause_at = frames / 2;
    let resume_at = pause_at + 30;

    game.start();
    for frame in 0..frames {
        clock.record(frame as f64 * 1000.0 / 60.0);

        let t = frame as f32;
        let x = width / 2.0 + (t * 0.03).sin() * (width / 2.0 - 40.0);
        let y = height - 200.0 + (t * 0.05).cos() * 80.0;
        game.pointer_move(x, y);

        if frame == pause_at {
            game.pause();
        } else if frame == resume_at {
            game.resume();
        }

        game.tick();
        for event in game.drain_events() {
            log::debug!(
                "Tick {}: caught {} ({}) -> {}",
                event.tick,
                event.entity_id,
                event.color.hex(),
                event.total
            );
        }

        if frame % 300 == 299 {
            log::info!(
                "{} | {} live | {} fps",
                format_score(game.score()),
                game.entities().len(),
                clock.fps()
            );
        }
    }

    let stats = game.stats();
    log::info!(
        "Finished after {} ticks: {} spawned, {} caught, {} retired",
        game.ticks(),
        stats.spawned,
        stats.caught,
        stats.retired
    );

    match serde_json::to_string_pretty(&game.snapshot()) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Failed to serialize snapshot: {}", e),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn parse_arg<T: std::str::FromStr + std::fmt::Display + Copy>(arg: Option<String>, name: &str, default: T) -> T {
    match arg {
        None => default,
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            log::warn!("Ignoring invalid {} '{}', using {}", name, raw, default);
            default
        }),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is platform::web::wasm_init, this is just to satisfy the compiler
}
