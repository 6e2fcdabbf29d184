// SPDX-License-Identifier: MPL-2.0
//! Command-line front end.
//!
//! Parses the launcher flags and the line-based trigger language of the
//! `viewer` command. Running the commands lives in `main.rs`.

use crate::application::links::QuickContact;
use crate::application::menu::MenuViewMode;
use crate::application::viewer::{Key, Message};
use crate::domain::forms::{BookingForm, ContactForm};
use std::ffi::OsString;
use std::path::PathBuf;

pub const HELP: &str = "\
eatery-flamingo

USAGE:
  eatery-flamingo [OPTIONS] <COMMAND>

OPTIONS:
  --lang <LOCALE>        Interface language (e.g. en-US, fr)
  --config-dir <DIR>     Directory holding settings.toml
  --catalog <FILE>       Menu catalog TOML file
  -h, --help             Print this help

COMMANDS:
  viewer [--tab <ID>]    Browse the menu; reads triggers from stdin
  contact --name <N> --email <E> --phone <P> --subject <S> --message <M>
  book --name <N> --phone <P> --date <YYYY-MM-DD> --time <HH:MM> --guests <G>
  whatsapp [<KIND>]      Print a WhatsApp link (reservation, catering, events, carwash)
  hours                  Print which opening-hours row is highlighted today
  lang <LOCALE>          Save the interface language to settings.toml
";

/// Runtime flags passed in from the command line.
#[derive(Debug, Default, PartialEq)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `EATERY_FLAMINGO_CONFIG_DIR`.
    pub config_dir: Option<String>,
    /// Optional catalog file; takes precedence over `catalog_path` in the config.
    pub catalog: Option<PathBuf>,
    pub command: Command,
}

#[derive(Debug, Default, PartialEq)]
pub enum Command {
    #[default]
    Help,
    Viewer {
        tab: Option<String>,
    },
    Contact(ContactForm),
    Book(BookingForm),
    WhatsApp(QuickContact),
    Hours,
    Lang(String),
}

/// Parses `args` (without the program name).
///
/// # Errors
///
/// Returns the `pico_args` error for missing or malformed values, or
/// [`pico_args::Error::ArgumentParsingFailed`] for an unknown command.
pub fn parse(args: Vec<OsString>) -> Result<Flags, pico_args::Error> {
    let mut args = pico_args::Arguments::from_vec(args);

    if args.contains(["-h", "--help"]) {
        return Ok(Flags::default());
    }

    let lang = args.opt_value_from_str("--lang")?;
    let config_dir = args.opt_value_from_str("--config-dir")?;
    let catalog = args.opt_value_from_str("--catalog")?;

    let command = match args.subcommand()?.as_deref() {
        None => Command::Help,
        Some("viewer") => Command::Viewer {
            tab: args.opt_value_from_str("--tab")?,
        },
        Some("contact") => Command::Contact(ContactForm {
            name: args.value_from_str("--name")?,
            email: args.value_from_str("--email")?,
            phone: args.value_from_str("--phone")?,
            subject: args.value_from_str("--subject")?,
            message: args.value_from_str("--message")?,
        }),
        Some("book") => Command::Book(BookingForm {
            name: args.value_from_str("--name")?,
            phone: args.value_from_str("--phone")?,
            date: args.value_from_str("--date")?,
            time: args.value_from_str("--time")?,
            guests: args.value_from_str("--guests")?,
        }),
        Some("whatsapp") => {
            let kind: Option<String> = args.opt_free_from_str()?;
            Command::WhatsApp(QuickContact::from_name(kind.as_deref().unwrap_or_default()))
        }
        Some("hours") => Command::Hours,
        Some("lang") => Command::Lang(args.free_from_str()?),
        Some(other) => {
            return Err(pico_args::Error::ArgumentParsingFailed {
                cause: format!("unknown command '{other}'"),
            })
        }
    };

    let rest = args.finish();
    if !rest.is_empty() {
        log::warn!("Ignoring unused arguments: {rest:?}");
    }

    Ok(Flags {
        lang,
        config_dir,
        catalog,
        command,
    })
}

/// One line of input to the `viewer` command.
#[derive(Debug, Clone, PartialEq)]
pub enum Trigger {
    Tab(String),
    /// `None` toggles between images and text.
    View(Option<MenuViewMode>),
    Download,
    Lang(String),
    Swipe { start_x: f32, end_x: f32 },
    Viewer(Message),
}

/// Parses a trigger line such as `next`, `filter mains` or `swipe 300 200`.
///
/// Blank and unrecognised lines yield `None`.
#[must_use]
pub fn parse_trigger(line: &str) -> Option<Trigger> {
    let mut words = line.split_whitespace();
    let command = words.next()?;
    let arg = words.next();
    let number = |value: Option<&str>| value.and_then(|v| v.parse::<f32>().ok());
    let index = arg.and_then(|v| v.parse::<usize>().ok());

    let message = match command {
        "tab" => return arg.map(|id| Trigger::Tab(id.to_string())),
        "view" => {
            return match arg {
                None => Some(Trigger::View(None)),
                Some("images") => Some(Trigger::View(Some(MenuViewMode::Images))),
                Some("text") => Some(Trigger::View(Some(MenuViewMode::Text))),
                Some(_) => None,
            }
        }
        "download" => return Some(Trigger::Download),
        "lang" => return arg.map(|lang| Trigger::Lang(lang.to_string())),
        "next" => Message::Next,
        "prev" | "previous" => Message::Previous,
        "goto" => Message::GoTo(index?.checked_sub(1)?),
        "filter" => Message::SetFilter(arg.unwrap_or("all").to_string()),
        "search" => {
            let term: Vec<&str> = arg.into_iter().chain(words).collect();
            Message::SetSearch(term.join(" "))
        }
        "zoom-in" | "+" => Message::ZoomIn,
        "zoom-out" | "-" => Message::ZoomOut,
        "reset-zoom" | "0" => Message::ResetZoom,
        "toggle-zoom" => Message::ToggleZoom,
        "open" => match index {
            Some(position) => Message::OpenAt(position.checked_sub(1)?),
            None => Message::Open,
        },
        "close" => Message::Close,
        "key" => Message::Key(Key::from_name(arg?)),
        "swipe" => {
            return Some(Trigger::Swipe {
                start_x: number(arg)?,
                end_x: number(words.next())?,
            })
        }
        _ => return None,
    };
    Some(Trigger::Viewer(message))
}
