//! Shared helpers for integration tests.

#![allow(dead_code)]

use gaple::{Chain, Player, Seat, SeatMap, Session, Tile};
use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Initialize test logging once.
///
/// Level comes from `TEST_LOG`, then `RUST_LOG`, then `"warn"`.
pub fn init_logging() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

pub fn t(a: u8, b: u8) -> Tile {
    Tile::new(a, b)
}

/// A session in play with explicit hands and chain.
pub fn session(hands: [Vec<Tile>; 4], chain: &[Tile], active: u8) -> Session {
    let [h0, h1, h2, h3] = hands;
    let players = SeatMap::from_array([
        Player::new(Seat::new(0), "Player 1", h0),
        Player::new(Seat::new(1), "Player 2", h1),
        Player::new(Seat::new(2), "Player 3", h2),
        Player::new(Seat::new(3), "Player 4", h3),
    ]);
    let chain = Chain::from_tiles(chain.iter().copied()).expect("fixture chain must be linked");
    Session::playing(players, chain, Seat::new(active)).expect("fixture tiles must be distinct")
}

/// Proptest settings for integration suites.
///
/// `PROPTEST_CASES` overrides the case count.
pub fn proptest_config() -> proptest::prelude::ProptestConfig {
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|s| s.parse::<u32>().ok())
        .unwrap_or(64)
        .max(1);

    proptest::prelude::ProptestConfig {
        failure_persistence: None,
        cases,
        ..proptest::prelude::ProptestConfig::default()
    }
}
