use clap::{Parser, Subcommand};
use crossterm::{
    cursor::{MoveLeft, MoveRight, MoveUp},
    execute,
    style::{Attribute, Color as TermColor, SetBackgroundColor, Stylize},
};
use spinners::Spinner;
use std::{
    io::{self, stdout},
    process::ExitCode,
    time::Instant,
};
use twophase::cubie::CubieCube;
use twophase::error::Error;
use twophase::facelet::{Color, FaceCube};
use twophase::scramble::{gen_scramble, scramble_from_str, scramble_to_str};
use twophase::solver::{init_tables, solve as solver};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "solves the cube using the two-phase algorithm")]
    #[clap(group(
    clap::ArgGroup::new("state")
        .required(true)
        .args(&["scramble", "facelet"]),
    ))]
    Solve {
        #[arg(short, long)]
        scramble: Option<String>,

        #[arg(short, long)]
        facelet: Option<String>,

        #[arg(short, long, default_value_t = 21)]
        max: usize,

        #[arg(short, long, default_value_t = 10.0)]
        timeout: f64,

        #[arg(long)]
        separator: bool,

        #[arg(short, long)]
        preview: bool,
    },

    #[command(about = "generates a scramble")]
    Scramble {
        #[arg(short, long, default_value_t = 20)]
        length: usize,
        #[arg(short, long)]
        preview: bool,
    },
}

fn solve(
    scramble: &Option<String>,
    facelet: &Option<String>,
    max: usize,
    timeout: f64,
    separator: bool,
    preview: bool,
) -> Result<(), Error> {
    if let Some(scramble) = scramble {
        let scramble = scramble_from_str(scramble)?;
        let state = CubieCube::from(&scramble);
        let fc = FaceCube::try_from(&state)?;
        if preview {
            print_facelet(&fc)?;
        }
        solve_state(&fc.to_string(), max, timeout, separator)?;
    } else if let Some(facelet) = facelet {
        if preview {
            let fc = FaceCube::try_from(facelet.as_str())?;
            print_facelet(&fc)?;
        }
        solve_state(facelet, max, timeout, separator)?;
    }
    Ok(())
}

fn solve_state(cubestring: &str, max: usize, timeout: f64, separator: bool) -> Result<(), Error> {
    let mut spinner = Spinner::new(spinners::Spinners::Dots, "Loading tables".to_owned());
    init_tables();
    spinner.stop_with_newline();

    let start = Instant::now();
    let mut spinner = Spinner::new(spinners::Spinners::Dots, "Solving".to_owned());
    let result = solver(cubestring, max, timeout)?;
    let end = Instant::now();

    spinner.stop_with_newline();

    let maneuver = match separator {
        true => result.to_string_with_separator(),
        false => result.to_string(),
    };
    println!("Solution: {}", maneuver);
    println!("Move count: {}", result.len());
    println!("Solve time: {:?}", result.solve_time);
    println!("Total time: {:?}", end - start);

    Ok(())
}

fn color_to_termcolor(color: Color) -> TermColor {
    match color {
        Color::U => TermColor::DarkYellow,
        Color::R => TermColor::Magenta,
        Color::F => TermColor::Green,
        Color::D => TermColor::White,
        Color::L => TermColor::Red,
        Color::B => TermColor::Blue,
    }
}

fn print_face(face: &[Color], offset: u16) -> Result<(), io::Error> {
    for i in 0..3 {
        let layer = format!(
            "{}  {}  {}  {}",
            SetBackgroundColor(color_to_termcolor(face[3 * i])),
            SetBackgroundColor(color_to_termcolor(face[(3 * i) + 1])),
            SetBackgroundColor(color_to_termcolor(face[(3 * i) + 2])),
            SetBackgroundColor(TermColor::Reset)
        );

        println!("{layer}");

        if offset != 0 {
            execute!(stdout(), MoveRight(offset))?;
        }
    }

    Ok(())
}

fn print_facelet(facelet: &FaceCube) -> Result<(), io::Error> {
    let stdout = stdout();

    println!();
    execute!(&stdout, MoveRight(6))?;
    print_face(&facelet.f[0..9], 6)?; // U
    execute!(&stdout, MoveLeft(6))?;
    print_face(&facelet.f[36..45], 0)?; // L
    execute!(&stdout, MoveRight(6), MoveUp(3))?;
    print_face(&facelet.f[18..27], 6)?; // F
    execute!(&stdout, MoveLeft(12), MoveUp(3), MoveRight(12))?;
    print_face(&facelet.f[9..18], 12)?; // R
    execute!(&stdout, MoveLeft(12), MoveUp(3), MoveRight(18))?;
    print_face(&facelet.f[45..54], 18)?; // B
    execute!(&stdout, MoveLeft(12))?;
    print_face(&facelet.f[27..36], 6)?; // D
    execute!(&stdout, MoveLeft(12))?;
    println!();

    Ok(())
}

fn scramble(length: usize, preview: bool) -> Result<(), Error> {
    let ss = gen_scramble(length);
    let cc = CubieCube::default().apply_moves(&ss);
    let fc = FaceCube::try_from(&cc)?;
    println!("Scramble: {}", scramble_to_str(&ss)?);
    if preview {
        print_facelet(&fc)?;
    }
    Ok(())
}

fn main() -> ExitCode {
    let program = Cli::parse();

    let result = match &program.command {
        Some(Commands::Solve {
            scramble,
            facelet,
            max,
            timeout,
            separator,
            preview,
        }) => solve(scramble, facelet, *max, *timeout, *separator, *preview),
        Some(Commands::Scramble { length, preview }) => self::scramble(*length, *preview),
        _ => Ok(()),
    };

    if let Err(error) = result {
        let styled = "Error:".with(TermColor::Red).attribute(Attribute::Bold);
        println!("{styled} {error}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
