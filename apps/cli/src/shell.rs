//! # Shell
//!
//! The interactive loop: read a line, run one command, re-render.
//!
//! ## Commands
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Input              Command                 Effect                      │
//! │  ─────              ───────                 ──────                      │
//! │  add                Command::Add            open empty form             │
//! │  edit <id>          Command::Edit(id)       open form for row           │
//! │  delete <id>, rm    Command::Delete(id)     remove row now              │
//! │  name <text>        Command::Name(text)     set draft name              │
//! │  qty <text>         Command::Quantity(text) set draft quantity          │
//! │  ok, confirm        Command::Confirm        commit form                 │
//! │  cancel             Command::Cancel         discard form                │
//! │  list, ls           Command::List           re-render only              │
//! │  help, ?            Command::Help           print usage                 │
//! │  quit, exit         Command::Quit           leave                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use shoplist_core::ItemId;
use tracing::{debug, info};

use crate::commands::{dialog, items, ListResponse};
use crate::error::ApiError;
use crate::state::{ConfigState, ListState, OutputFormat};
use crate::view;

pub const USAGE: &str = "\
commands:
  add              open the Add Shopping Item form
  edit <id>        open the Edit Shopping Item form for a row
  delete <id>      delete a row (alias: rm)
  name <text>      set the name in the open form
  qty <text>       set the quantity in the open form
  ok               confirm the open form (alias: confirm)
  cancel           close the open form without saving
  list             show the list again (alias: ls)
  quit             leave (alias: exit)";

/// A parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add,
    Edit(ItemId),
    Delete(ItemId),
    Name(String),
    Quantity(String),
    Confirm,
    Cancel,
    List,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = ApiError;

    /// Parses `verb [argument]`. For `name` and `qty` the argument is the rest
    /// of the line, trimmed, and may be empty to clear the field.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (verb, rest) = s.split_once(char::is_whitespace).unwrap_or((s, ""));
        let rest = rest.trim();

        let command = match verb.to_lowercase().as_str() {
            "add" | "new" => Command::Add,
            "edit" => Command::Edit(parse_id(verb, rest)?),
            "delete" | "rm" | "del" => Command::Delete(parse_id(verb, rest)?),
            "name" => Command::Name(rest.to_string()),
            "qty" | "quantity" => Command::Quantity(rest.to_string()),
            "ok" | "confirm" | "save" => Command::Confirm,
            "cancel" => Command::Cancel,
            "list" | "ls" => Command::List,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            other => {
                return Err(ApiError::invalid_command(format!(
                    "Unknown command: '{}'. Type 'help' for a list of commands",
                    other
                )))
            }
        };

        Ok(command)
    }
}

fn parse_id(verb: &str, text: &str) -> Result<ItemId, ApiError> {
    if text.is_empty() {
        return Err(ApiError::invalid_command(format!("Usage: {} <id>", verb)));
    }

    text.parse()
        .map_err(|_| ApiError::invalid_command(format!("Not an item id: '{}'", text)))
}

/// Runs one command against the list.
///
/// `Help` and `Quit` are handled by the loop and only re-render here.
pub fn dispatch(list: &mut ListState, command: Command) -> Result<ListResponse, ApiError> {
    match command {
        Command::Add => Ok(dialog::open_create_dialog(list)),
        Command::Edit(id) => dialog::open_edit_dialog(list, id),
        Command::Delete(id) => Ok(items::delete_item(list, id)),
        Command::Name(text) => Ok(dialog::set_draft_name(list, text)),
        Command::Quantity(text) => Ok(dialog::set_draft_quantity(list, text)),
        Command::Confirm => dialog::confirm_dialog(list),
        Command::Cancel => Ok(dialog::cancel_dialog(list)),
        Command::List | Command::Help | Command::Quit => Ok(items::get_list(list)),
    }
}

/// Reads commands from `input` until end of input or `quit`, writing each
/// re-render to `output`.
pub fn run_shell<R: BufRead, W: Write>(
    list: &mut ListState,
    config: &ConfigState,
    input: R,
    mut output: W,
) -> io::Result<()> {
    let format = config.output;

    write_response(&mut output, &items::get_list(list), format)?;
    prompt(&mut output, config)?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            prompt(&mut output, config)?;
            continue;
        }

        match line.parse::<Command>() {
            Ok(Command::Quit) => {
                info!("Quit requested");
                break;
            }
            Ok(Command::Help) => writeln!(output, "{}", USAGE)?,
            Ok(command) => {
                debug!(?command, "Dispatching");
                let result = dispatch(list, command);
                if let Err(err) = &result {
                    writeln!(output, "{}", view::render_error(err, format))?;
                }
                // Re-render after every command, including rejected ones
                write_response(&mut output, &items::get_list(list), format)?;
            }
            Err(err) => writeln!(output, "{}", view::render_error(&err, format))?,
        }

        prompt(&mut output, config)?;
    }

    output.flush()
}

fn write_response<W: Write>(
    output: &mut W,
    response: &ListResponse,
    format: OutputFormat,
) -> io::Result<()> {
    match view::render(response, format) {
        Ok(text) if format == OutputFormat::Json => writeln!(output, "{}", text),
        Ok(text) => write!(output, "{}", text),
        Err(err) => writeln!(output, "{}", view::render_error(&err, format)),
    }
}

fn prompt<W: Write>(output: &mut W, config: &ConfigState) -> io::Result<()> {
    if config.output == OutputFormat::Text {
        write!(output, "{}", config.prompt)?;
        output.flush()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use std::io::Cursor;

    fn run(script: &str, config: &ConfigState) -> (ListState, String) {
        let mut list = ListState::new(config.id_policy);
        let mut out = Vec::new();
        run_shell(&mut list, config, Cursor::new(script.to_string()), &mut out).unwrap();
        (list, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!("add".parse::<Command>().unwrap(), Command::Add);
        assert_eq!("  EDIT 2 ".parse::<Command>().unwrap(), Command::Edit(ItemId::new(2)));
        assert_eq!("rm #3".parse::<Command>().unwrap(), Command::Delete(ItemId::new(3)));
        assert_eq!(
            "name Whole Milk ".parse::<Command>().unwrap(),
            Command::Name("Whole Milk".to_string())
        );
        assert_eq!("qty".parse::<Command>().unwrap(), Command::Quantity(String::new()));
        assert_eq!("ok".parse::<Command>().unwrap(), Command::Confirm);
        assert_eq!("cancel".parse::<Command>().unwrap(), Command::Cancel);
        assert_eq!("ls".parse::<Command>().unwrap(), Command::List);
        assert_eq!("exit".parse::<Command>().unwrap(), Command::Quit);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        let err = "buy milk".parse::<Command>().unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidCommand);

        assert!("edit".parse::<Command>().is_err());
        assert!("delete milk".parse::<Command>().is_err());
        assert!("edit -1".parse::<Command>().is_err());
    }

    #[test]
    fn test_dispatch_sequence() {
        let mut list = ListState::default();

        for command in [
            Command::Add,
            Command::Name("Milk".to_string()),
            Command::Quantity("2".to_string()),
            Command::Confirm,
        ] {
            dispatch(&mut list, command).unwrap();
        }

        let response = dispatch(&mut list, Command::List).unwrap();
        assert_eq!(response.items.len(), 1);
        assert_eq!(response.items[0].quantity, 2);
    }

    #[test]
    fn test_shell_session() {
        let config = ConfigState::default();
        let (list, out) = run(
            "add\nname Milk\nqty 2\nok\nadd\nname Bread\nok\ncancel\nedit 1\nqty 5\nok\nquit\nadd\n",
            &config,
        );

        assert_eq!(list.store().len(), 1);
        assert_eq!(list.store().list()[0].quantity, 5);
        assert!(!list.dialog().is_open());
        assert!(out.contains("error: [VALIDATION_ERROR] quantity is required"));
        assert!(out.contains("  #1  Name: Milk  Quantity: 5\n"));
    }

    #[test]
    fn test_shell_reports_unknown_command_and_continues() {
        let config = ConfigState::default();
        let (list, out) = run("fly\nadd\nname Tea\nqty 1\nok\n", &config);

        assert!(out.contains("error: [INVALID_COMMAND] Unknown command: 'fly'"));
        assert_eq!(list.store().len(), 1);
    }

    #[test]
    fn test_shell_json_output() {
        let config = ConfigState {
            output: OutputFormat::Json,
            ..ConfigState::default()
        };
        let (_, out) = run("add\nname Eggs\nqty 12\nok\nedit 9\n", &config);
        let lines: Vec<&str> = out.lines().collect();

        // Initial render + 4 commands + error line + re-render after the error
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], r#"{"items":[],"dialog":null}"#);
        assert_eq!(
            lines[4],
            r#"{"items":[{"id":1,"name":"Eggs","quantity":12}],"dialog":null}"#
        );
        assert_eq!(
            lines[5],
            r#"{"error":{"code":"NOT_FOUND","message":"Item not found: 9"}}"#
        );
    }

    #[test]
    fn test_shell_help() {
        let (_, out) = run("help\n", &ConfigState::default());
        assert!(out.contains(USAGE));
    }
}
