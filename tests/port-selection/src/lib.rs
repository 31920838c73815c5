//! Builds `threadx-port` for an Arduino SAMD51 board.
