//! Interactive command loop.
//!
//! Reads lines with rustyline, splits them into `(keyword, message)`, and
//! dispatches to the command handlers. Error kinds are translated into user
//! messages here; an interrupt or end-of-input takes the same exit path as
//! the `exit` command, so the caller always gets the chance to save.

use crate::book::{AddressBook, Record, RecordView};
use crate::commands::{self, Outcome};
use crate::config::Config;
use crate::error::CommandError;
use chrono::Local;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::io::{self, Write};

const HELP_TEXT: &str = r#"
"hello"                                 - greetings.
"add <name> <phone(s)> [<birthday>] [<email(s)>]" - add a new contact.
"add birth <name> <birthday>"           - add a contact's birthday (ddmmyyyy).
"change <name> <old_phone> <new_phone>" - change the phone number of an existing contact.
"birth <name>"                          - show how many days are left until the next birthday.
"birthdays"                             - show contacts with birthdays during the week.
"del <name>"                            - remove contact from the phonebook.
"show all"                              - show all saved contacts with phone numbers.
"phone <name>"                          - show phone numbers for an existing contact.
"find <pattern>"                        - find contact data based on the entered pattern.
"good bye", "close", "exit"             - exit from the program."#;

enum Flow {
    Continue,
    Quit,
}

/// Run the command loop until the user quits or input ends.
pub fn run(config: &Config, book: &mut AddressBook) -> rustyline::Result<()> {
    let mut editor = DefaultEditor::new()?;

    println!("Please, enter your command (type \"help\" for the list):");

    loop {
        match editor.readline("cmd >>> ") {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                editor.add_history_entry(line).ok();

                if let Flow::Quit = dispatch(book, line, config) {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                // Same save-and-exit path as "exit".
                println!("Good bye!");
                break;
            }
            Err(err) => return Err(err),
        }
    }

    Ok(())
}

fn dispatch(book: &mut AddressBook, line: &str, config: &Config) -> Flow {
    let (keyword, message) = commands::parse_input(line);
    let today = Local::now().date_naive();

    let result = match keyword.as_str() {
        "add" => commands::add(book, &message, confirm_merge),
        "add birth" => commands::add_birthday(book, &message),
        "birth" => commands::birthday_countdown(book, &message, today),
        "birthdays" => Ok(commands::week_report(book, today)),
        "change" => commands::change(book, &message),
        "del" => commands::delete(book, &message),
        "find" => commands::find(book, &message),
        "phone" => commands::phones(book, &message),
        "hello" => Ok(Outcome::Output("How can I help you?".to_string())),
        "help" => Ok(Outcome::Output(HELP_TEXT.to_string())),
        "show all" => {
            show_all(book, config.page_size);
            return Flow::Continue;
        }
        "good bye" | "close" | "exit" => Ok(Outcome::Quit),
        _ => {
            println!("Invalid command. Please enter the correct command and message.\n");
            return Flow::Continue;
        }
    };

    match result {
        Ok(Outcome::Updated(name)) => println!("Contact {} {} successful.\n", name, keyword),
        Ok(Outcome::Output(text)) => println!("{}\n", text),
        Ok(Outcome::Quit) => {
            println!("Good bye!");
            return Flow::Quit;
        }
        Err(err) => println!("{}\n", render_error(&err)),
    }

    Flow::Continue
}

/// Translate an error kind into the message shown to the user.
fn render_error(err: &CommandError) -> String {
    match err {
        CommandError::MissingField(_) | CommandError::InvalidFormat(_) => {
            format!("{}. Please enter a valid data.", err)
        }
        CommandError::NotFound(_) => "Please enter a valid contact name!".to_string(),
        CommandError::DuplicateValue(value) => {
            format!("{} is already stored for this contact.", value)
        }
        CommandError::NoBirthdaySet(name) => format!("Contact {} has no birthday set.", name),
    }
}

/// Show the existing record and ask permission to change it.
fn confirm_merge(record: &Record) -> bool {
    println!("\nContact {} already exists!", record.name());
    println!("{}", commands::render_record(&RecordView::from(record)));
    print!("Do you want to change it? (yes/no) >>> ");
    let _ = io::stdout().flush();

    let mut answer = String::new();
    if io::stdin().read_line(&mut answer).is_err() {
        return false;
    }

    matches!(answer.trim().to_lowercase().as_str(), "yes" | "y")
}

/// Print all records, `page_size` at a time, prompting between pages.
fn show_all(book: &AddressBook, page_size: usize) {
    if book.is_empty() {
        println!("The phonebook is empty.\n");
        return;
    }

    let total = book.len();
    let mut shown = 0;

    for view in book.records() {
        println!("{}", commands::render_record(&view));
        shown += 1;

        if shown < total && shown % page_size == 0 && !wants_more() {
            break;
        }
    }
    println!();
}

fn wants_more() -> bool {
    print!("Press \"Enter\" to show more contacts or type \"quit\" to stop: ");
    let _ = io::stdout().flush();

    let mut answer = String::new();
    if io::stdin().read_line(&mut answer).is_err() {
        return false;
    }

    answer.trim() != "quit"
}
