//! Handlers for the free-text commands.

use crate::book::{AddressBook, Record, RecordView};
use crate::domain::{Birthday, Email, Name, Phone};
use crate::error::{CommandError, CommandResult};
use crate::extract;
use crate::report;
use chrono::NaiveDate;

/// What a handler produced, for the command loop to act on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A contact was added or changed; the loop prints a confirmation
    /// naming the contact
    Updated(String),

    /// Informational output to print, with no confirmation
    Output(String),

    /// Terminate the command loop
    Quit,
}

/// Extract the contact name or fail with `MissingField`.
fn required_name(message: &str) -> CommandResult<String> {
    match extract::extract_name(message) {
        Some(name) if !name.is_empty() => Ok(name),
        _ => Err(CommandError::MissingField("name")),
    }
}

/// `add <name> <phone(s)> [<birthday>] [<email(s)>]`
///
/// Creates a new record, or merges into an existing one. A merge first
/// rejects any phone already stored (`DuplicateValue`), then asks
/// `confirm_merge` for permission; a declined merge leaves the record
/// untouched. Duplicate emails are skipped silently during a merge.
pub fn add(
    book: &mut AddressBook,
    message: &str,
    mut confirm_merge: impl FnMut(&Record) -> bool,
) -> CommandResult<Outcome> {
    let fields = extract::extract_fields(message);

    let name = match fields.name {
        Some(name) if !name.is_empty() => name,
        _ => return Err(CommandError::MissingField("name")),
    };

    if fields.phones.is_empty() {
        return Err(CommandError::MissingField("phone"));
    }

    let phones = fields
        .phones
        .into_iter()
        .map(Phone::new)
        .collect::<Result<Vec<_>, _>>()?;
    let birthday = fields.birthday.map(Birthday::new).transpose()?;
    let emails = fields
        .emails
        .into_iter()
        .map(Email::new)
        .collect::<Result<Vec<_>, _>>()?;

    if let Some(record) = book.get_mut(&name) {
        for phone in &phones {
            if record.has_phone(phone.as_str()) {
                return Err(CommandError::DuplicateValue(phone.as_str().to_string()));
            }
        }

        if !confirm_merge(record) {
            return Ok(Outcome::Output(format!("Contact {} left unchanged.", name)));
        }

        record.add_phones(phones);
        if let Some(birth) = birthday {
            record.set_birthday(birth);
        }
        for email in emails {
            if !record.has_email(email.as_str()) {
                record.add_email(email);
            }
        }

        return Ok(Outcome::Updated(name));
    }

    let mut record = Record::new(Name::new(name.clone())?);
    record.add_phones(phones);
    if let Some(birth) = birthday {
        record.set_birthday(birth);
    }
    for email in emails {
        record.add_email(email);
    }
    book.insert(record);

    Ok(Outcome::Updated(name))
}

/// `add birth <name> <birthday>` - set or overwrite a contact's birthday.
pub fn add_birthday(book: &mut AddressBook, message: &str) -> CommandResult<Outcome> {
    let name = required_name(message)?;

    let record = book
        .get_mut(&name)
        .ok_or_else(|| CommandError::NotFound(name.clone()))?;

    let birth = extract::extract_birthday(message)
        .ok_or(CommandError::MissingField("birthday"))?;
    record.set_birthday(Birthday::new(birth)?);

    Ok(Outcome::Updated(name))
}

/// `birth <name>` - days until the contact's next birthday.
pub fn birthday_countdown(
    book: &AddressBook,
    message: &str,
    today: NaiveDate,
) -> CommandResult<Outcome> {
    let name = required_name(message)?;

    let record = book
        .get(&name)
        .ok_or_else(|| CommandError::NotFound(name.clone()))?;

    let days = record.days_until_birthday(today)?;

    let text = if days == 0 {
        format!("Today is {}'s birthday.", name)
    } else {
        format!("There are {} days left until {}'s birthday.", days, name)
    };

    Ok(Outcome::Output(text))
}

/// `change <name> <old_phone> <new_phone>`
///
/// Replaces the stored phone equal to the first extracted candidate with
/// the second. When no stored phone matches the old value, the record is
/// left unchanged (documented no-op).
pub fn change(book: &mut AddressBook, message: &str) -> CommandResult<Outcome> {
    let name = required_name(message)?;

    let candidates = extract::extract_phones(message);
    if candidates.len() < 2 {
        return Err(CommandError::MissingField("phone pair"));
    }

    let record = book
        .get_mut(&name)
        .ok_or_else(|| CommandError::NotFound(name.clone()))?;

    let new_phone = Phone::new(candidates[1].as_str())?;

    if let Some(index) = record.position_of_phone(&candidates[0]) {
        record.change_phone(index, new_phone);
    }

    Ok(Outcome::Updated(name))
}

/// `del <name>` - remove a contact.
pub fn delete(book: &mut AddressBook, message: &str) -> CommandResult<Outcome> {
    let name = required_name(message)?;

    book.remove(&name)
        .ok_or_else(|| CommandError::NotFound(name.clone()))?;

    Ok(Outcome::Updated(name))
}

/// `find <pattern...>` - keyword search across names, phones, and emails.
///
/// Name matching is case-insensitive; phone and email matching is an exact
/// substring check.
pub fn find(book: &AddressBook, message: &str) -> CommandResult<Outcome> {
    let keywords: Vec<&str> = message.split_whitespace().collect();

    if keywords.is_empty() {
        return Err(CommandError::MissingField("search pattern"));
    }

    let mut lines = Vec::new();

    for view in book.records() {
        let name = view.name.to_lowercase();
        let phone_blob = view.phones.join(" ");
        let email_blob = view.emails.join(" ");

        let matched = keywords.iter().any(|keyword| {
            name.contains(&keyword.to_lowercase())
                || phone_blob.contains(keyword)
                || email_blob.contains(keyword)
        });

        if matched {
            lines.push(render_record(&view));
        }
    }

    if lines.is_empty() {
        Ok(Outcome::Output(
            "Nothing was found according to your request.".to_string(),
        ))
    } else {
        Ok(Outcome::Output(lines.join("\n")))
    }
}

/// `phone <name>` - list a contact's phone numbers.
pub fn phones(book: &AddressBook, message: &str) -> CommandResult<Outcome> {
    let name = required_name(message)?;

    let record = book
        .get(&name)
        .ok_or_else(|| CommandError::NotFound(name.clone()))?;

    let listed = record
        .phones()
        .iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(", ");

    Ok(Outcome::Output(format!("{}: {}", name, listed)))
}

/// `birthdays` - the week-of-birthdays report.
pub fn week_report(book: &AddressBook, today: NaiveDate) -> Outcome {
    let report = report::birthdays_per_week(book, today);

    let mut text = format!("Hello, today is {}.", today.format("%d %B %Y"));

    if report.is_empty() {
        text.push_str("\nYour contacts will not have birthdays during the week.");
    } else {
        text.push_str("\nHappy birthday within a week:");
        for (label, names) in &report.days {
            text.push_str(&format!("\n{}: {}", label, names.join(", ")));
        }
    }

    Outcome::Output(text)
}

/// One record as a display line; empty fields are omitted.
pub fn render_record(view: &RecordView) -> String {
    let mut line = view.name.clone();

    if !view.phones.is_empty() {
        line.push_str(&format!(" | phones: {}", view.phones.join(", ")));
    }
    if let Some(birth) = &view.birthday {
        line.push_str(&format!(" | birthday: {}", birth));
    }
    if !view.emails.is_empty() {
        line.push_str(&format!(" | email: {}", view.emails.join(", ")));
    }

    line
}
