//! Command line parsing.

use crate::error::{BookError, BookResult};
use crate::services::MAX_HORIZON_DAYS;

/// Flag that switches `birthdays` output to JSON.
pub const JSON_FLAG: &str = "--json";

/// A parsed user command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Help,
    Exit,
    All,
    Add {
        name: String,
        phone: Option<String>,
    },
    Change {
        name: String,
        old_phone: String,
        new_phone: String,
    },
    Phone {
        name: String,
    },
    RemovePhone {
        name: String,
        phone: String,
    },
    Delete {
        name: String,
    },
    AddBirthday {
        name: String,
        birthday: String,
    },
    ShowBirthday {
        name: String,
    },
    Birthdays {
        days: Option<u32>,
        json: bool,
    },
    /// Blank input line
    Empty,
    /// Anything not recognized; carries the command token
    Unknown(String),
}

/// Split a line into a lowercase command token and its arguments.
pub fn parse_input(line: &str) -> (String, Vec<&str>) {
    let mut parts = line.split_whitespace();
    let command = parts.next().unwrap_or_default().to_lowercase();
    (command, parts.collect())
}

impl Command {
    /// Parse one input line.
    ///
    /// # Errors
    ///
    /// `ArgumentCount` when a known command gets the wrong arguments.
    pub fn parse(line: &str) -> BookResult<Self> {
        let (command, args) = parse_input(line);

        let parsed = match command.as_str() {
            "" => Command::Empty,
            "hello" => Command::Hello,
            "help" => Command::Help,
            "close" | "exit" => Command::Exit,
            "all" => Command::All,
            "add" => match args.as_slice() {
                [name] => Command::Add {
                    name: name.to_string(),
                    phone: None,
                },
                [name, phone] => Command::Add {
                    name: name.to_string(),
                    phone: Some(phone.to_string()),
                },
                _ => return Err(arity(&command, "<name> [phone]")),
            },
            "change" => match args.as_slice() {
                [name, old_phone, new_phone] => Command::Change {
                    name: name.to_string(),
                    old_phone: old_phone.to_string(),
                    new_phone: new_phone.to_string(),
                },
                _ => return Err(arity(&command, "<name> <old phone> <new phone>")),
            },
            "phone" => match args.as_slice() {
                [name] => Command::Phone {
                    name: name.to_string(),
                },
                _ => return Err(arity(&command, "<name>")),
            },
            "remove-phone" => match args.as_slice() {
                [name, phone] => Command::RemovePhone {
                    name: name.to_string(),
                    phone: phone.to_string(),
                },
                _ => return Err(arity(&command, "<name> <phone>")),
            },
            "delete" => match args.as_slice() {
                [name] => Command::Delete {
                    name: name.to_string(),
                },
                _ => return Err(arity(&command, "<name>")),
            },
            "add-birthday" => match args.as_slice() {
                [name, birthday] => Command::AddBirthday {
                    name: name.to_string(),
                    birthday: birthday.to_string(),
                },
                _ => return Err(arity(&command, "<name> <DD.MM.YYYY>")),
            },
            "show-birthday" => match args.as_slice() {
                [name] => Command::ShowBirthday {
                    name: name.to_string(),
                },
                _ => return Err(arity(&command, "<name>")),
            },
            "birthdays" => parse_birthdays(&command, &args)?,
            _ => Command::Unknown(command),
        };

        Ok(parsed)
    }
}

fn parse_birthdays(command: &str, args: &[&str]) -> BookResult<Command> {
    const USAGE: &str = "[days] [--json]";

    if args.len() > 2 {
        return Err(arity(command, USAGE));
    }

    let mut days = None;
    let mut json = false;
    for arg in args {
        if *arg == JSON_FLAG && !json {
            json = true;
        } else if days.is_none() {
            let value = arg.parse::<u32>().map_err(|_| arity(command, USAGE))?;
            if value > MAX_HORIZON_DAYS {
                return Err(arity(command, USAGE));
            }
            days = Some(value);
        } else {
            return Err(arity(command, USAGE));
        }
    }

    Ok(Command::Birthdays { days, json })
}

fn arity(command: &str, expected: &'static str) -> BookError {
    BookError::ArgumentCount {
        command: command.to_string(),
        expected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_input_lowercases_command_only() {
        let (command, args) = parse_input("  ADD  Alice   1234567890 ");
        assert_eq!(command, "add");
        assert_eq!(args, vec!["Alice", "1234567890"]);
    }

    #[test]
    fn test_parse_input_blank() {
        let (command, args) = parse_input("   ");
        assert_eq!(command, "");
        assert!(args.is_empty());
    }

    #[test]
    fn test_parse_add() {
        assert_eq!(
            Command::parse("add Alice 1234567890"),
            Ok(Command::Add {
                name: "Alice".to_string(),
                phone: Some("1234567890".to_string())
            })
        );
        assert_eq!(
            Command::parse("add Alice"),
            Ok(Command::Add {
                name: "Alice".to_string(),
                phone: None
            })
        );
        assert!(matches!(
            Command::parse("add"),
            Err(BookError::ArgumentCount { .. })
        ));
    }

    #[test]
    fn test_parse_change_requires_three_arguments() {
        assert!(matches!(
            Command::parse("change Alice 1234567890"),
            Err(BookError::ArgumentCount { .. })
        ));
        assert_eq!(
            Command::parse("Change Alice 1234567890 0987654321"),
            Ok(Command::Change {
                name: "Alice".to_string(),
                old_phone: "1234567890".to_string(),
                new_phone: "0987654321".to_string(),
            })
        );
    }

    #[test]
    fn test_parse_birthdays_options() {
        assert_eq!(
            Command::parse("birthdays"),
            Ok(Command::Birthdays {
                days: None,
                json: false
            })
        );
        assert_eq!(
            Command::parse("birthdays 14 --json"),
            Ok(Command::Birthdays {
                days: Some(14),
                json: true
            })
        );
        assert_eq!(
            Command::parse("birthdays --json 3"),
            Ok(Command::Birthdays {
                days: Some(3),
                json: true
            })
        );
        assert!(Command::parse("birthdays soon").is_err());
        assert!(Command::parse("birthdays -1").is_err());
        assert!(Command::parse("birthdays 1 2").is_err());
    }

    #[test]
    fn test_parse_birthdays_caps_horizon() {
        assert_eq!(
            Command::parse("birthdays 366"),
            Ok(Command::Birthdays {
                days: Some(366),
                json: false
            })
        );
        assert!(matches!(
            Command::parse("birthdays 367"),
            Err(BookError::ArgumentCount { .. })
        ));
        assert!(Command::parse("birthdays 4294967295 --json").is_err());
    }

    #[test]
    fn test_parse_exit_aliases() {
        assert_eq!(Command::parse("close"), Ok(Command::Exit));
        assert_eq!(Command::parse("EXIT"), Ok(Command::Exit));
    }

    #[test]
    fn test_parse_unknown_and_empty() {
        assert_eq!(
            Command::parse("dance now"),
            Ok(Command::Unknown("dance".to_string()))
        );
        assert_eq!(Command::parse(""), Ok(Command::Empty));
    }
}
