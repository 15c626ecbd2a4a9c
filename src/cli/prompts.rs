use crate::cli::console::Console;
use crate::cli::output;
use crate::errors::ConsoleError;

/// Keeps prompting until the user types an integer inside `[min, max]`.
///
/// The two rejection messages are deliberately distinct so the user can tell
/// a non-numeric entry from an out-of-range one. Calling this with
/// `min > max` is a bug in the caller and panics.
pub fn int_in_range(
    console: &mut dyn Console,
    min: usize,
    max: usize,
    message: &str,
) -> Result<usize, ConsoleError> {
    assert!(
        min <= max,
        "minimum value {min} cannot be greater than maximum value {max}"
    );

    loop {
        console.println(message);
        console.print(&format!(
            "Please enter a number between {min} and {max} inclusive. "
        ));
        let input = console.read_line()?;
        let trimmed = input.trim();

        let value: i64 = match trimmed.parse() {
            Ok(value) => value,
            Err(_) => {
                console.println(&output::error(&format!(
                    "Error: {trimmed} is not a number"
                )));
                continue;
            }
        };

        if value >= min as i64 && value <= max as i64 {
            return Ok(value as usize);
        }
        console.println(&output::error(&format!(
            "Error: {value} is not between {min} and {max} inclusive."
        )));
    }
}

/// Prompts until the user answers Y or N (case-insensitive).
pub fn yes_or_no(console: &mut dyn Console, message: &str) -> Result<bool, ConsoleError> {
    loop {
        console.println(&format!("\n{message}"));
        console.print("Please answer Y or N: ");
        let input = console.read_line()?;
        let answer = input.trim();
        if answer.eq_ignore_ascii_case("y") {
            return Ok(true);
        }
        if answer.eq_ignore_ascii_case("n") {
            return Ok(false);
        }
    }
}

/// Prompts until the user types a positive integer; ids are always 1-based.
pub fn positive_int(console: &mut dyn Console, message: &str) -> Result<i64, ConsoleError> {
    loop {
        console.print(message);
        let input = console.read_line()?;
        let trimmed = input.trim();

        let value: i64 = match trimmed.parse() {
            Ok(value) => value,
            Err(_) => {
                console.println(&output::error(&format!(
                    "Error: {trimmed} is not a valid number."
                )));
                continue;
            }
        };

        if value > 0 {
            return Ok(value);
        }
        console.println(&output::error("Error: number must be greater than 0."));
    }
}

/// Renders `options` as a numbered list and returns the chosen 1-based index.
pub fn pick_option(
    console: &mut dyn Console,
    message: &str,
    options: &[&str],
) -> Result<usize, ConsoleError> {
    let mut listing = String::from(message);
    for (index, option) in options.iter().enumerate() {
        listing.push('\n');
        listing.push_str(&format!("{}. {}", index + 1, option));
    }
    int_in_range(console, 1, options.len(), &listing)
}

/// Reads one line of free text after showing `prompt`.
pub fn text(console: &mut dyn Console, prompt: &str) -> Result<String, ConsoleError> {
    console.print(prompt);
    let input = console.read_line()?;
    Ok(input.trim().to_string())
}
