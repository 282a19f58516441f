//! Headless scripted session: types a sentence, stalls, and loses the
//! unconfirmed tail. Run with `cargo run --example scripted-session`.

use std::time::{Duration, Instant};

use dangerous_writing::{
    DisplaySink, InputEvent, KeyEventType, SafepointUnit, SessionConfig, SessionController,
    RECOMMENDED_TICK_INTERVAL,
};

struct ConsoleSink {
    last_time: String,
}

impl DisplaySink for ConsoleSink {
    fn on_display_update(&mut self, count: &str, time_remaining: &str, progress: f64) {
        // Only narrate whole-second changes; a 10ms cadence is too chatty.
        if time_remaining != self.last_time {
            self.last_time = time_remaining.to_string();
            println!("count {count}  |  time remaining {time_remaining}  |  {progress:>5.1}%");
        }
    }

    fn on_buffer_changed(&mut self) {
        println!("-- unconfirmed text deleted --");
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .init();

    let config = SessionConfig {
        countdown_seconds: 3,
        safepoint_unit: SafepointUnit::Characters,
        units_per_safepoint: 20,
        ..SessionConfig::default()
    };

    let sink = ConsoleSink {
        last_time: String::new(),
    };
    let mut session = SessionController::new(config, Box::new(sink)).expect("valid config");

    let mut now = Instant::now();

    // Type enough to cross the 20-character safepoint, one keystroke per 100ms.
    for ch in "the quick brown fox jumps".chars() {
        let press = InputEvent::Text {
            text: ch.to_string(),
            event_type: KeyEventType::Press,
        };
        let release = InputEvent::Key {
            event_type: KeyEventType::Release,
        };
        session.handle_event(&press, now);
        session.handle_event(&release, now);
        now += Duration::from_millis(100);
        session.tick(now);
    }

    println!("typed: {:?}", session.text());
    println!("safepoint: {:?}", session.safepoint());
    println!("... writer walks away ...");

    // Stall: drive the tick loop past the deadline with no further activity.
    while session.is_counting_down() {
        now += RECOMMENDED_TICK_INTERVAL;
        session.tick(now);
    }

    println!("survived: {:?}", session.text());
}
