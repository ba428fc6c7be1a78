#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`PixelWire`**: Trait to implement for your data pin; sends bytes with constant per-bit timing and latches
//! - **`BitTiming`**: Per-bit cycle budget for a core clock, checked against the chain's tolerance
//! - **`BitBangWire`**: Portable `PixelWire` built on `embedded-hal` pins and delays
//! - **`PixelLink`**: Pixel-level operations (`write_color`, `write_color_all`, `clear`, `latch`)
//! - **`Animation`**: The build's animation; maps a tick to a `Frame` with no stored state
//! - **`Frame`**: Iterator over one tick's pixel colors
//! - **`HueWheel`**: Integer hue conversions (three-, six- and four-arc)
//! - **`FrameDriver`**: Owns the tick counter and runs the render/delay/advance loop
//! - **`Config`**: Build-time configuration, validated by a `const fn`
//!
//! All color math is integer-only. Channels are 8-bit and go out on the
//! wire in green, red, blue, white order.

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

pub mod animation;
pub mod breath;
pub mod colors;
pub mod driver;
pub mod frame;
pub mod link;
pub mod map;
pub mod types;
pub mod wire;

pub use animation::Animation;
pub use breath::BreathEnvelope;
pub use colors::{HueWheel, four_sector, six_sector, three_sector};
pub use driver::{Config, FrameDriver};
pub use frame::Frame;
pub use link::PixelLink;
pub use map::{map, map_u8};
pub use types::{ConfigError, Rgbw, Tick};
pub use wire::{BitBangWire, BitTiming, LATCH_MICROS, PixelWire, TimingError};

/// Pixels in the reference chain.
pub const REFERENCE_PIXEL_COUNT: u8 = 13;
