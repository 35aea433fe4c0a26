use cadastro::api::{CmdMessage, MessageLevel};
use cadastro::config::{CadastroConfig, KEYS};
use cadastro::model::Person;
use colored::Colorize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const ID_WIDTH: usize = 6;
const NAME_WIDTH: usize = 34;
const CITY_WIDTH: usize = 22;
const LABEL_WIDTH: usize = 14;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_people(people: &[Person]) {
    for person in people {
        println!("{}", format_person_row(person));
    }
}

pub(super) fn print_person_details(people: &[Person]) {
    for (i, person) in people.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!(
            "{} {}",
            person.id.to_string().yellow(),
            person.fields.full_name().bold()
        );
        println!("--------------------------------");
        for (label, value) in detail_lines(person) {
            println!("{}{}", pad_to_width(label, LABEL_WIDTH).dimmed(), value);
        }
    }
}

pub(super) fn print_config(config: &CadastroConfig) {
    for key in KEYS {
        if let Some(value) = config.get(key) {
            println!("{} = {}", key, value);
        }
    }
}

/// `"   3. Ana Silva     Recife     ana@x.com"`, cut to the line width.
fn format_person_row(person: &Person) -> String {
    let fields = &person.fields;
    let id = format!("{:>width$}. ", person.id, width = ID_WIDTH - 2);
    let name = pad_to_width(&truncate_to_width(&fields.full_name(), NAME_WIDTH - 1), NAME_WIDTH);
    let city = pad_to_width(&truncate_to_width(&fields.city, CITY_WIDTH - 1), CITY_WIDTH);
    let contact = if fields.email.is_empty() {
        &fields.phone
    } else {
        &fields.email
    };

    let used = ID_WIDTH + NAME_WIDTH + CITY_WIDTH;
    let contact = truncate_to_width(contact, LINE_WIDTH - used);
    format!("{}{}{}{}", id, name, city, contact)
        .trim_end()
        .to_string()
}

fn detail_lines(person: &Person) -> Vec<(&'static str, &str)> {
    let f = &person.fields;
    vec![
        ("Street", f.street.as_str()),
        ("Number", f.number.as_str()),
        ("Neighborhood", f.neighborhood.as_str()),
        ("City", f.city.as_str()),
        ("State", f.state.as_str()),
        ("Country", f.country.as_str()),
        ("Phone", f.phone.as_str()),
        ("E-mail", f.email.as_str()),
    ]
}

fn truncate_to_width(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    // leave room for the ellipsis
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > max {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

fn pad_to_width(text: &str, width: usize) -> String {
    let padding = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(padding))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cadastro::model::PersonFields;

    fn person(id: u64, fields: PersonFields) -> Person {
        Person { id, fields }
    }

    #[test]
    fn row_prefers_email_over_phone() {
        let p = person(
            3,
            PersonFields {
                city: "Recife".into(),
                phone: "81999990000".into(),
                email: "ana@x.com".into(),
                ..PersonFields::new("Ana", "Silva")
            },
        );
        let row = format_person_row(&p);
        assert!(row.starts_with("   3. Ana Silva"));
        assert!(row.contains("Recife"));
        assert!(row.ends_with("ana@x.com"));
        assert!(!row.contains("81999990000"));
    }

    #[test]
    fn row_falls_back_to_phone_and_trims() {
        let p = person(
            1,
            PersonFields {
                phone: "12345678".into(),
                ..PersonFields::new("Bia", "Souza")
            },
        );
        assert!(format_person_row(&p).ends_with("12345678"));

        let bare = person(2, PersonFields::new("Caio", "Lima"));
        assert!(format_person_row(&bare).ends_with("Caio Lima"));
    }

    #[test]
    fn long_names_are_cut_by_display_width() {
        let long = "João".repeat(20);
        let cut = truncate_to_width(&long, 10);
        assert_eq!(cut.width(), 10);
        assert!(cut.ends_with('…'));
        assert_eq!(truncate_to_width("Ana", 10), "Ana");
    }

    #[test]
    fn wide_characters_count_double() {
        assert_eq!(pad_to_width("日本", 6).width(), 6);
        assert_eq!(pad_to_width("日本", 6), "日本  ");
    }

    #[test]
    fn details_cover_every_address_field() {
        let p = person(1, PersonFields::new("Ana", "Silva"));
        let labels: Vec<_> = detail_lines(&p).into_iter().map(|(l, _)| l).collect();
        assert_eq!(labels.len(), 8);
        assert_eq!(labels[0], "Street");
        assert_eq!(labels[7], "E-mail");
    }
}
