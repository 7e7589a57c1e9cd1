/// Example: Print each frame of a trip without opening the terminal UI
///
/// Usage: cargo run --example trip -- --source "0,0,0" --destination "3,1,-2" --step 0.25

use bluegeom_terminal::{Animation, DemoConfig};
use clap::Parser;
use std::io;

fn main() -> io::Result<()> {
    let config = DemoConfig::parse();
    let mut animation = Animation::new(config.source, config.destination, config.step)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    println!("frame 0: {}", animation.position());
    let mut frame = 0;
    loop {
        frame += 1;
        let arrived = animation
            .advance()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
        println!("frame {}: {}", frame, animation.position());
        if arrived {
            break;
        }
    }

    println!("Arrived after {} frames", frame);
    Ok(())
}
