use clap::{ArgAction, Parser};
use serde::Serialize;
use square_turtle_lib::{
    math::{Angle, Vector},
    projection::{project, SquareBoundary},
    utils::Float,
};
use std::{error::Error, fmt::Display, process::ExitCode};

#[derive(Parser)]
#[command(version, about, long_about = None)]
enum Args {
    Demo(DemoCommand),
    Rotate(RotateCommand),
    Project(ProjectCommand),
}

/// Rotates vector (1, 1) by 90 radians and prints the result
#[derive(Parser)]
struct DemoCommand {
    /// Print result as json
    #[arg(long)]
    json: bool,
}

/// Rotates vector (x, y) counterclockwise
#[derive(Parser)]
struct RotateCommand {
    #[arg(allow_negative_numbers = true)]
    x: Float,
    #[arg(allow_negative_numbers = true)]
    y: Float,
    /// Rotation angle. Radians unless --degrees is set
    #[arg(allow_negative_numbers = true)]
    angle: Float,
    /// Treat angle as degrees
    #[arg(short, long)]
    degrees: bool,
    /// Print result as json
    #[arg(long)]
    json: bool,
}

/// Rotates the turtle 90 degrees about the center of a square and projects it onto the nearest wall.
/// Prints the displacement from the turtle to the projected point
#[derive(Parser)]
struct ProjectCommand {
    /// Turtle x position, shifted by -c before use
    #[arg(allow_negative_numbers = true)]
    x: Float,
    /// Turtle y position, shifted by -c before use
    #[arg(allow_negative_numbers = true)]
    y: Float,
    /// Distance from the center to each wall
    #[arg(allow_negative_numbers = true)]
    c: Float,
    /// If true, rejects negative or NaN c instead of passing it through the arithmetic
    #[arg(long, action = ArgAction::Set, default_value = "true")]
    check_boundary: bool,
    /// Print every intermediate of the projection
    #[arg(short, long)]
    verbose: bool,
    /// Print result as json
    #[arg(long)]
    json: bool,
}

fn print<T: Serialize + Display>(value: &T, json: bool) -> Result<(), Box<dyn Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        println!("{}", value);
    }
    Ok(())
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    match args {
        Args::Demo(command) => {
            // 90 is passed as radians
            let vector = Vector::new(1., 1.);
            print(&vector.rotate(90.), command.json)
        }
        Args::Rotate(command) => {
            let vector = Vector::new(command.x, command.y);
            let rotated = if command.degrees {
                vector.rotate_by(Angle::from_degrees(command.angle))
            } else {
                vector.rotate(command.angle)
            };
            print(&rotated, command.json)
        }
        Args::Project(command) => {
            let projection = if command.check_boundary {
                SquareBoundary::new(command.c)?.rotate_and_project((command.x, command.y).into())
            } else {
                project(command.x, command.y, command.c)
            };

            if command.json {
                if command.verbose {
                    println!("{}", serde_json::to_string_pretty(&projection)?);
                } else {
                    println!(
                        "{}",
                        serde_json::to_string_pretty(&projection.displacement())?
                    );
                }
                return Ok(());
            }

            if command.verbose {
                println!("turtle:       {}", projection.turtle());
                println!("rotated:      {}", projection.rotated());
                println!("direction:    {}", projection.direction());
                println!("wall:         {}", projection.wall());
                println!("projected:    {}", projection.projected());
            }
            println!("displacement: {}", projection.displacement());
            Ok(())
        }
    }
}

fn main() -> ExitCode {
    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}
