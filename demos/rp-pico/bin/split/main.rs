#![no_std]
#![no_main]

use panic_halt as _;
use rp_pico::entry;
use rp_pico::hal::{Clock, Sio, Timer, clocks::init_clocks_and_plls, pac, watchdog::Watchdog};
use rtt_target::{rprintln, rtt_init_print};

use rp_pico_demos::cycle_wire::CycleWire;

use glowing_ball::{Animation, BitTiming, Config, FrameDriver};

/// Thirteen pixels on GPIO16, split animation, 1 ms per tick
const CONFIG: Config = Config::new(13, Animation::SPLIT);
const _: () = assert!(CONFIG.validate().is_ok());

#[entry]
fn main() -> ! {
    rtt_init_print!();
    rprintln!("=== RP Pico Split Demo ===");

    // Get peripherals
    let mut pac = pac::Peripherals::take().unwrap();

    // Set up watchdog driver
    let mut watchdog = Watchdog::new(pac.WATCHDOG);

    // Configure clocks (125 MHz)
    let clocks = init_clocks_and_plls(
        rp_pico::XOSC_CRYSTAL_FREQ,
        pac.XOSC,
        pac.CLOCKS,
        pac.PLL_SYS,
        pac.PLL_USB,
        &mut pac.RESETS,
        &mut watchdog,
    )
    .ok()
    .unwrap();

    let clock_hz = clocks.system_clock.freq().to_Hz();
    rprintln!("System clock configured: {} Hz", clock_hz);

    let timing = match BitTiming::for_clock(clock_hz) {
        Ok(timing) => timing,
        Err(e) => panic!("{}", e),
    };

    // Set up the Single Cycle IO (for GPIO access)
    let sio = Sio::new(pac.SIO);
    let pins = rp_pico::Pins::new(
        pac.IO_BANK0,
        pac.PADS_BANK0,
        sio.gpio_bank0,
        &mut pac.RESETS,
    );

    let wire = CycleWire::new(pins.gpio16.into_push_pull_output(), timing);
    let delay = Timer::new(pac.TIMER, &mut pac.RESETS, &clocks);

    let driver = FrameDriver::new(CONFIG, wire, delay).unwrap();

    rprintln!("=== Hardware Ready, masking interrupts ===");

    // Nothing else runs once frames start going out
    cortex_m::interrupt::disable();
    driver.run()
}
