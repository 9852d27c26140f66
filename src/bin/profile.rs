use std::time::Instant;

use primaze::MazeGenerator;

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args();
    args.next(); // Skip executable name
    let num_iters = args
        .next()
        .and_then(|s| s.parse::<u32>().ok())
        .unwrap_or(10);

    let size = u8::MAX as u16;
    let mut generator = MazeGenerator::new(size, size, Some(0))?;

    let started = Instant::now();
    let mut conversions = 0;
    for _ in 0..num_iters {
        conversions += generator.generate_maze().conversions;
    }
    let elapsed = started.elapsed();

    println!(
        "Generated {} mazes of {}x{} in {:?} ({:?} per maze, {} passages carved)",
        num_iters,
        size,
        size,
        elapsed,
        elapsed / num_iters.max(1),
        conversions
    );
    Ok(())
}
