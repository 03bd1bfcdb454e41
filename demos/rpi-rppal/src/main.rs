use std::time::Duration;

use clap::Parser;
use embedded_hal::delay::DelayNs;
use rppal::gpio::Gpio;

use tm1637_hal_drv as tm;

use tm::encode::{encode_char, encode_string, SEG_B, SEG_DP};
use tm::fx::{Marquee, Spinner};
use tm::Tm1637;

#[derive(Parser)]
#[command(about = "TM1637 display demo for Raspberry Pi")]
struct Args {
    /// BCM number of the pin wired to CLK
    #[arg(long, value_name = "PIN")]
    clk: u8,

    /// BCM number of the pin wired to DIO
    #[arg(long, value_name = "PIN")]
    dio: u8,

    /// Initial brightness, 0-7
    #[arg(long, default_value_t = 7)]
    brightness: u8,
}

/// Thread sleep is too coarse for a 10us bus hold, spin_sleep keeps the
/// timing honest.
struct Delayer;

impl DelayNs for Delayer {
    fn delay_ns(&mut self, ns: u32) {
        spin_sleep::sleep(Duration::from_nanos(ns as u64));
    }
}

fn pause(ms: u64) {
    std::thread::sleep(Duration::from_millis(ms));
}

fn main() {
    let args = Args::parse();

    let gpio = Gpio::new().expect("Can not init Gpio structure");
    let clk = gpio
        .get(args.clk)
        .expect("Was not able to get CLK pin")
        .into_output();
    let dio = gpio
        .get(args.dio)
        .expect("Was not able to get DIO pin")
        .into_output();

    println!("Initialized using CLK:{} DIO:{}", args.clk, args.dio);

    let mut display =
        Tm1637::new(clk, dio, Delayer, args.brightness).expect("Display init failed");

    println!("Text");
    display.show("hello", false).expect("show failed");
    pause(1500);

    println!("Dots fold into the digit on their left");
    display.show("13.7", false).expect("show failed");
    pause(1500);

    println!("Counting");
    for n in -5..=15 {
        display.show_number(n).expect("show_number failed");
        pause(150);
    }
    pause(500);

    println!("Hex");
    for v in [0x0000, 0x00ff, 0xbeef, 0xffff] {
        display.show_hex(v).expect("show_hex failed");
        pause(700);
    }

    println!("Colon through the MSB of the second digit");
    let mut clock = encode_string("1234");
    clock[1] |= SEG_DP;
    display.write(&clock, 0).expect("write failed");
    pause(1500);

    println!("Brightness sweep");
    for level in (0..=7).rev() {
        display.set_brightness(level).expect("set_brightness failed");
        pause(300);
    }
    display.set_brightness(args.brightness).expect("set_brightness failed");

    println!("Spinner");
    display.clear().expect("clear failed");
    for mask in Spinner::new(SEG_B, true).take(24) {
        display
            .write(&[mask, 0, 0, 0, 0, 0], 0)
            .expect("write failed");
        pause(80);
    }

    println!("Marquee");
    let message: Vec<u8> = "good bye".chars().map(encode_char).collect();
    for frame in Marquee::new(&message, false) {
        display.write(&frame, 0).expect("write failed");
        pause(250);
    }

    display.clear().expect("clear failed");
    println!("Done");
}
