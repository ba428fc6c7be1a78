//! Integration tests for the animations

mod common;
use common::*;

use glowing_ball::{
    Animation, BreathEnvelope, ConfigError, HueWheel, PixelLink, Rgbw, six_sector,
};

const PIXELS: u8 = 13;

const PRESETS: [Animation; 7] = [
    Animation::CHASE,
    Animation::HUE_BREATH,
    Animation::HUE_ROTATE,
    Animation::PALETTE_ROTATE,
    Animation::SPLIT,
    Animation::RAINBOW,
    Animation::SOLID,
];

fn frame(animation: Animation, tick: u32) -> Vec<Rgbw> {
    animation.frame(tick, PIXELS).collect()
}

// ============================================================================
// Properties shared by every animation
// ============================================================================

#[test]
fn every_frame_has_pixel_count_colors() {
    for animation in PRESETS {
        for pixel_count in [1u8, 13, 255] {
            assert_eq!(animation.frame(4242, pixel_count).count(), usize::from(pixel_count));
        }
    }
}

#[test]
fn rendering_the_same_tick_twice_is_byte_identical() {
    for animation in PRESETS {
        for tick in [0, 1, 777, 5000, 123_456] {
            let mut link = PixelLink::new(RecordingWire::new(), PIXELS);
            animation.render(tick, &mut link);
            animation.render(tick, &mut link);

            let frames = link.release().frames();
            assert_eq!(frames.len(), 2);
            assert_eq!(frames[0], frames[1], "{:?} differs at tick {}", animation, tick);
        }
    }
}

#[test]
fn animations_repeat_after_their_period() {
    for animation in PRESETS {
        let period = u32::try_from(animation.period(PIXELS)).unwrap();
        for tick in [0, 1, 37, 999, 4321, 12_345] {
            assert_eq!(
                frame(animation, tick),
                frame(animation, tick + period),
                "{:?} not periodic at tick {}",
                animation,
                tick
            );
        }
    }
}

#[test]
fn presets_declare_reference_periods() {
    assert_eq!(Animation::CHASE.period(PIXELS), 100 * 13 * 3);
    assert_eq!(Animation::HUE_ROTATE.period(PIXELS), 10_000);
    assert_eq!(Animation::PALETTE_ROTATE.period(PIXELS), 20_000);
    assert_eq!(Animation::SPLIT.period(PIXELS), 20_000);
    assert_eq!(Animation::SOLID.period(PIXELS), 1);
}

// ============================================================================
// Chase
// ============================================================================

#[test]
fn chase_starts_with_every_pixel_on_the_previous_color() {
    assert_eq!(frame(Animation::CHASE, 0), vec![Rgbw::BLUE; 13]);
}

#[test]
fn chase_wipes_one_pixel_per_step() {
    let colors = frame(Animation::CHASE, 500);
    assert_eq!(&colors[..5], &[Rgbw::RED; 5]);
    assert_eq!(&colors[5..], &[Rgbw::BLUE; 8]);

    let colors = frame(Animation::CHASE, 1299);
    assert_eq!(&colors[..12], &[Rgbw::RED; 12]);
    assert_eq!(colors[12], Rgbw::BLUE);
}

#[test]
fn chase_rolls_to_next_primary_after_full_wipe() {
    // Sweep resets, so everything shows the color just wiped in.
    assert_eq!(frame(Animation::CHASE, 1300), vec![Rgbw::RED; 13]);

    let colors = frame(Animation::CHASE, 1300 + 300);
    assert_eq!(&colors[..3], &[Rgbw::GREEN; 3]);
    assert_eq!(&colors[3..], &[Rgbw::RED; 10]);

    assert_eq!(frame(Animation::CHASE, 2600), vec![Rgbw::GREEN; 13]);
}

// ============================================================================
// Uniform hue animations
// ============================================================================

#[test]
fn hue_rotate_midpoint_is_mid_hue_at_full_value() {
    let colors = frame(Animation::HUE_ROTATE, 5000);
    assert_eq!(colors, vec![Rgbw::new(0, 128, 127, 0); 13]);
}

#[test]
fn palette_rotate_uses_six_sector_wheel() {
    let colors = frame(Animation::PALETTE_ROTATE, 10_000);
    let expected = Rgbw::from_rgb(six_sector(127, 255, 255), 0);
    assert_eq!(colors, vec![expected; 13]);
}

#[test]
fn hue_breath_drives_white_from_envelope() {
    assert_eq!(frame(Animation::HUE_BREATH, 0), vec![Rgbw::new(255, 0, 0, 0); 13]);
    assert_eq!(
        frame(Animation::HUE_BREATH, 5000),
        vec![Rgbw::new(0, 255, 255, 255); 13]
    );

    let rising = frame(Animation::HUE_BREATH, 3500)[0].white;
    assert!(rising > 0 && rising < 255);
}

#[test]
fn hue_breath_accepts_other_wheels() {
    let animation = Animation::HueBreath {
        hue_period: 10_000,
        wheel: HueWheel::FourSector,
        envelope: BreathEnvelope::REFERENCE,
    };
    assert_eq!(frame(animation, 0), vec![Rgbw::new(0, 0, 255, 0); 13]);
}

#[test]
fn solid_ignores_tick() {
    let expected = vec![Rgbw::new(255, 100, 0, 10); 13];
    assert_eq!(frame(Animation::SOLID, 0), expected);
    assert_eq!(frame(Animation::SOLID, u32::MAX), expected);
}

// ============================================================================
// Split
// ============================================================================

#[test]
fn split_shows_green_and_red_halves_when_blue_is_off() {
    // Hue 20: red held, green rising, blue off.
    let colors = frame(Animation::SPLIT, 800);
    assert_eq!(&colors[..6], &[Rgbw::green_only(124); 6]);
    assert_eq!(&colors[6..], &[Rgbw::red_only(255); 7]);
}

#[test]
fn split_swaps_halves_every_other_revolution() {
    let colors = frame(Animation::SPLIT, 10_800);
    assert_eq!(&colors[..6], &[Rgbw::red_only(255); 6]);
    assert_eq!(&colors[6..], &[Rgbw::green_only(124); 7]);

    assert_eq!(frame(Animation::SPLIT, 20_800), frame(Animation::SPLIT, 800));
}

#[test]
fn split_halves_are_never_dark_together() {
    for tick in 0..20_000 {
        let colors = frame(Animation::SPLIT, tick);
        let (first, second) = (colors[0], colors[12]);
        assert!(
            !(first.is_dark() && second.is_dark()),
            "both halves dark at tick {}",
            tick
        );
        assert_ne!(first, second, "halves identical at tick {}", tick);
    }
}

// ============================================================================
// Rainbow
// ============================================================================

#[test]
fn rainbow_starts_red() {
    assert_eq!(frame(Animation::RAINBOW, 0), vec![Rgbw::RED; 13]);
}

#[test]
fn rainbow_front_pixel_is_partially_lit() {
    // 1000 of 20000 ticks: 994 of 19890 steps, front at pixel 3, level 229.
    let colors = frame(Animation::RAINBOW, 1000);
    assert_eq!(&colors[..3], &[Rgbw::new(255, 255, 0, 0); 3]);
    assert_eq!(colors[3], Rgbw::new(255, 229, 0, 0));
    assert_eq!(&colors[4..], &[Rgbw::RED; 9]);
}

#[test]
fn rainbow_has_at_most_one_fractional_pixel() {
    for tick in (0..20_000).step_by(13) {
        let fractional = frame(Animation::RAINBOW, tick)
            .iter()
            .filter(|c| [c.red, c.green, c.blue].iter().any(|v| *v != 0 && *v != 255))
            .count();
        assert!(fractional <= 1, "{} fractional pixels at tick {}", fractional, tick);
    }
}

// ============================================================================
// Validation
// ============================================================================

#[test]
fn zero_durations_are_rejected() {
    assert_eq!(
        Animation::Chase { step: 0 }.validate(PIXELS),
        Err(ConfigError::ZeroDuration)
    );
    assert_eq!(
        Animation::HueRotate { period: 0 }.validate(PIXELS),
        Err(ConfigError::ZeroDuration)
    );
    assert_eq!(
        Animation::HueBreath {
            hue_period: 10_000,
            wheel: HueWheel::SixSector,
            envelope: BreathEnvelope {
                rest: 0,
                ramp: 0,
                hold: 0,
                floor: 0,
                peak: 255,
            },
        }
        .validate(PIXELS),
        Err(ConfigError::ZeroDuration)
    );
}

#[test]
fn oversized_periods_are_rejected() {
    assert_eq!(
        Animation::Chase { step: u32::MAX / 100 }.validate(255),
        Err(ConfigError::PeriodOverflow)
    );
    assert_eq!(
        Animation::Split { period: u32::MAX }.validate(PIXELS),
        Err(ConfigError::PeriodOverflow)
    );
}
