//! Main entry point for the Goshawk chess engine.
//!
//! Runs the UCI protocol handler for communication with chess GUIs.

use goshawk::uci::UCIEngine;

fn main() {
    let mut engine = UCIEngine::new();
    engine.run();
}
