use docopt::Docopt;
use log::info;
use serde_derive::Deserialize;
use mazes_stepper::{
    config::{self, MazeConfig},
    generators::GeneratorKind,
    grid_displays::SessionDisplay,
    pathing::SolverKind,
    session::{self, Session},
    stepper::Completion,
    units::{ColumnsCount, RowsCount},
};
use std::{
    cmp,
    io,
    io::prelude::*,
    fs::File,
    thread,
    time::Duration,
};

const USAGE: &str = "Mazes Stepper

Usage:
    mazes_driver -h | --help
    mazes_driver [--generator=<g>] [--solver=<s>] [--rows=<n>] [--columns=<n>] [--seed=<n>] [--speed=<n>] [--animate] [--text-out=<path>]

Options:
    -h --help           Show this screen.
    --generator=<g>     Maze carving algorithm: recursive-backtracker, prim or wilson [default: recursive-backtracker].
    --solver=<s>        Path finding algorithm: wall-follower, dijkstra or astar [default: astar].
    --rows=<n>          Grid rows, odd and at least 3 [default: {rows}].
    --columns=<n>       Grid columns, odd and at least 3 [default: {columns}].
    --seed=<n>          Seed for reproducible mazes. Random when not given.
    --speed=<n>         Animation speed from {min_speed} to {max_speed}, {full_speed} and above is the fastest [default: {speed}].
    --animate           Print a frame after every tick instead of only the final maze.
    --text-out=<path>   Also write the final frame to a text file.
";

/// The usage text with option defaults and ranges filled in from the library configuration.
fn usage() -> String {
    USAGE.replace("{rows}", &config::ROWS.to_string())
        .replace("{columns}", &config::COLS.to_string())
        .replace("{min_speed}", &config::MIN_SPEED.to_string())
        .replace("{max_speed}", &config::MAX_SPEED.to_string())
        .replace("{full_speed}", &config::FULL_SPEED_THRESHOLD.to_string())
        .replace("{speed}", &config::DEFAULT_SPEED.to_string())
}

#[derive(Debug, Deserialize)]
struct MazeArgs {
    flag_generator: String,
    flag_solver: String,
    flag_rows: usize,
    flag_columns: usize,
    flag_seed: Option<u64>,
    flag_speed: u32,
    flag_animate: bool,
    flag_text_out: String,
}

mod errors {
    use error_chain::*;
    error_chain! {

        foreign_links {
            DocOptFailure(::docopt::Error);
            Io(::std::io::Error);
            Session(::mazes_stepper::session::SessionError);
            UnknownGenerator(::mazes_stepper::generators::UnknownGenerator);
            UnknownSolver(::mazes_stepper::pathing::UnknownSolver);
        }
    }
}
use crate::errors::*;

fn main() -> Result<()> {
    env_logger::init();

    let args: MazeArgs = Docopt::new(usage()).and_then(|d| d.deserialize())?;

    let generator: GeneratorKind = args.flag_generator.parse()?;
    let solver: SolverKind = args.flag_solver.parse()?;
    let speed = cmp::min(config::MAX_SPEED, cmp::max(config::MIN_SPEED, args.flag_speed));

    let maze_config = MazeConfig {
        rows: RowsCount(args.flag_rows),
        columns: ColumnsCount(args.flag_columns),
        seed: args.flag_seed,
    };
    let mut session = Session::new(maze_config)?;

    session.generate(generator)?;
    let generated = run_session(&mut session, speed, args.flag_animate)?;
    info!("{}: {}", generator, generated.status());

    session.solve(solver)?;
    let solved = run_session(&mut session, speed, args.flag_animate)?;

    let frame = SessionDisplay::new(&session).to_string();
    println!("{}", frame);
    println!("{} then {}: {} ({} cells visited, path length {})",
             generator,
             solver,
             solved.status(),
             session.visited().len(),
             session.path().len());

    if !args.flag_text_out.is_empty() {
        write_text_to_file(&frame, &args.flag_text_out)
            .chain_err(|| format!("Failed to write maze to text file {}", args.flag_text_out))?;
    }

    Ok(())
}

/// Tick the active run until it completes, optionally redrawing after every tick.
fn run_session(session: &mut Session, speed: u32, animate: bool) -> Result<Completion> {
    let steps = session::steps_for_speed(speed);
    let pause = Duration::from_millis(config::TICK_MILLIS);

    loop {
        let done = session.tick(steps)?;
        if animate {
            // Clear the terminal and home the cursor before each frame.
            println!("\x1b[2J\x1b[H{}", SessionDisplay::new(session));
            io::stdout().flush()?;
            thread::sleep(pause);
        }
        if let Some(completion) = done {
            return Ok(completion);
        }
    }
}

fn write_text_to_file(data: &str, file_name: &str) -> io::Result<()> {
    let mut f = File::create(file_name)?;
    f.write_all(data.as_bytes())?;
    Ok(())
}
