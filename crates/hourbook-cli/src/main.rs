//! Interactive text menu for the hourbook booking system.
//!
//! Reads raw lines from stdin, parses them, and drives the core
//! operations. Every domain error is caught at the top of the loop and
//! printed; only an I/O failure ends the process abnormally.

use std::io::{self, BufRead, Write};

use hourbook::{BookingError, BookingSystem, RoomQuery};

/// Errors inside one menu action.
///
/// Domain errors are reported and the menu continues; I/O errors
/// propagate out of the loop.
#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Booking(#[from] BookingError),
    #[error(transparent)]
    Io(#[from] io::Error),
}

fn main() -> io::Result<()> {
    // Logs go to stderr so they don't interleave with the menu.
    // RUST_LOG selects verbosity; unset means quiet.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    run(&mut stdin.lock(), &mut stdout.lock())
}

/// The menu loop. Runs until "Exit" is chosen or input ends.
fn run(input: &mut impl BufRead, out: &mut impl Write) -> io::Result<()> {
    let mut system = BookingSystem::new();

    loop {
        writeln!(
            out,
            "\nMenu: 1) Add Room 2) Book Room 3) Find Room 4) View Room 5) Exit"
        )?;
        let Some(choice) = prompt(input, out, "Your choice: ")? else {
            break;
        };

        let result = match choice.as_str() {
            "1" => add_room(&mut system, input, out),
            "2" => book_room(&mut system, input, out),
            "3" => find_rooms(&system, input, out),
            "4" => view_room(&system, input, out),
            "5" => {
                writeln!(out, "Bye!")?;
                break;
            }
            _ => {
                writeln!(out, "Invalid option.")?;
                continue;
            }
        };

        match result {
            Ok(()) => {}
            Err(CliError::Booking(err)) => writeln!(out, "Error: {err}")?,
            Err(CliError::Io(err)) => return Err(err),
        }
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Menu actions
// ---------------------------------------------------------------------------

fn add_room(
    system: &mut BookingSystem,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let id = prompt_required(input, out, "Room ID: ")?;
    let building = prompt_required(input, out, "Building: ")?;
    let capacity = parse_capacity(&prompt_required(input, out, "Capacity: ")?)?;

    system.add_room(id, building, capacity)?;
    writeln!(out, "Room added.")?;
    Ok(())
}

fn book_room(
    system: &mut BookingSystem,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let id = prompt_required(input, out, "Room ID: ")?;
    let hour = parse_hour(&prompt_required(input, out, "Hour (0-23): ")?)?;

    system.book(&id, hour)?;
    writeln!(out, "Booked.")?;
    Ok(())
}

fn find_rooms(
    system: &BookingSystem,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let mut query = RoomQuery::new();
    if let Some(building) =
        optional(prompt_required(input, out, "Building (or enter to skip): ")?)
    {
        query = query.in_building(building);
    }
    if let Some(raw) =
        optional(prompt_required(input, out, "Min capacity (or enter to skip): ")?)
    {
        query = query.with_min_capacity(parse_capacity(&raw)?);
    }
    if let Some(raw) =
        optional(prompt_required(input, out, "Free at hour (or enter to skip): ")?)
    {
        query = query.free_at(parse_hour(&raw)?);
    }

    let found = system.find_rooms(&query);
    if found.is_empty() {
        writeln!(out, "No rooms found.")?;
    } else {
        for room in found {
            writeln!(out, "{room}")?;
        }
    }
    Ok(())
}

fn view_room(
    system: &BookingSystem,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let id = prompt_required(input, out, "Room ID: ")?;
    let room = system.view_room(&id)?;
    writeln!(out, "{room}")?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Input helpers
// ---------------------------------------------------------------------------

/// Prints a prompt and reads one trimmed line. `None` at end of input.
fn prompt(
    input: &mut impl BufRead,
    out: &mut impl Write,
    text: &str,
) -> io::Result<Option<String>> {
    write!(out, "{text}")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_owned()))
}

/// Like [`prompt`], but end of input mid-dialogue is an error.
fn prompt_required(
    input: &mut impl BufRead,
    out: &mut impl Write,
    text: &str,
) -> Result<String, CliError> {
    prompt(input, out, text)?
        .ok_or_else(|| io::Error::from(io::ErrorKind::UnexpectedEof).into())
}

/// Blank input means "no filter".
fn optional(raw: String) -> Option<String> {
    if raw.is_empty() { None } else { Some(raw) }
}

fn parse_capacity(raw: &str) -> Result<u32, BookingError> {
    raw.parse().map_err(|_| {
        BookingError::InvalidArgument(format!(
            "capacity must be a non-negative integer, got {raw:?}"
        ))
    })
}

fn parse_hour(raw: &str) -> Result<u8, BookingError> {
    raw.parse().map_err(|_| {
        BookingError::InvalidArgument(format!(
            "hour must be an integer between 0 and 23, got {raw:?}"
        ))
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
