/// CLI argument parsing and command handling.
use anyhow::Result;
use clap::{Parser, Subcommand};
use rand::Rng;

use crate::color;

#[derive(Parser)]
#[command(
    name = "swatchr",
    version,
    about = "Swatchr - A terminal-based random color generator"
)]
pub struct Cli {
    /// Seed the random generator for reproducible output.
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print a random RGB triple and its hex form.
    Rgb {
        /// Lowest channel value to draw.
        #[arg(long, default_value_t = color::CHANNEL_MIN)]
        min: i64,
        /// Highest channel value to draw.
        #[arg(long, default_value_t = color::CHANNEL_MAX)]
        max: i64,
    },
    /// Print a random hex color from the full 24-bit space.
    Hex,
    /// Print a flag color for tagging a session or cursor.
    Flag,
    /// Convert RGB channels to hex, clamping out-of-range values.
    Convert { r: i64, g: i64, b: i64 },
}

/// Execute a CLI command against the given random generator.
pub fn run(command: Command, rng: &mut dyn Rng) -> Result<()> {
    match command {
        Command::Rgb { min, max } => handle_rgb(min, max, rng)?,
        Command::Hex => println!("{}", color::random_hex_color(rng)),
        Command::Flag => println!("{}", color::flag_color(rng)),
        Command::Convert { r, g, b } => println!("{}", color::rgb_to_hex(r, g, b)),
    }
    Ok(())
}

fn handle_rgb(min: i64, max: i64, rng: &mut dyn Rng) -> Result<()> {
    if min > max {
        println!("Invalid range: min ({min}) is greater than max ({max}).");
        return Ok(());
    }
    let displayable = color::CHANNEL_MIN..=color::CHANNEL_MAX;
    if !displayable.contains(&min) || !displayable.contains(&max) {
        println!(
            "Invalid range: channel values must be between {} and {}.",
            color::CHANNEL_MIN,
            color::CHANNEL_MAX
        );
        return Ok(());
    }
    // The hex form is converted from the drawn triple so both lines
    // describe the same color.
    let rgb = color::random_rgb_in_range(rng, min as f64, max as f64);
    println!("{}  {}", rgb.css(), rgb.to_hex());
    Ok(())
}
