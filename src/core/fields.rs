//! Random Dutch personal fields for synthetic test records.

use crate::core::bsn::BsnValidator;
use crate::domain::model::Person;
use crate::domain::ports::{RngDigitSource, Telemetry};
use crate::utils::error::{Result, TestDataError};
use chrono::{Days, NaiveDate};
use rand::Rng;

pub const BIRTH_YEAR_MIN: i32 = 1940;
pub const BIRTH_YEAR_MAX: i32 = 2007;

const FIRST_NAMES: &[&str] = &[
    "Jan", "Pieter", "Kees", "Willem", "Johannes", "Daan", "Sem", "Lucas", "Levi", "Finn",
    "Bram", "Thijs", "Ruben", "Jeroen", "Maarten", "Anna", "Emma", "Julia", "Sophie", "Tess",
    "Sanne", "Lotte", "Fleur", "Eva", "Iris", "Maria", "Johanna", "Annemiek", "Femke", "Noor",
];

const LAST_NAMES: &[&str] = &[
    "de Jong",
    "Jansen",
    "de Vries",
    "van den Berg",
    "van Dijk",
    "Bakker",
    "Janssen",
    "Visser",
    "Smit",
    "Meijer",
    "de Boer",
    "Mulder",
    "de Groot",
    "Bos",
    "Vos",
    "Peters",
    "Hendriks",
    "van Leeuwen",
    "Dekker",
    "Brouwer",
    "de Wit",
    "Dijkstra",
    "Smits",
    "de Graaf",
    "van der Meer",
    "van der Linden",
    "Kok",
    "Jacobs",
    "de Haan",
    "Vermeulen",
];

const EMAIL_DOMAINS: &[&str] = &["example.nl", "example.com", "example.org"];

// Letter pairs PostNL never assigns.
const EXCLUDED_POSTCODE_PAIRS: &[&str] = &["SA", "SD", "SS"];

pub fn first_name<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    FIRST_NAMES[rng.random_range(0..FIRST_NAMES.len())]
}

/// Surname, possibly with a tussenvoegsel such as "van der".
pub fn last_name<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    LAST_NAMES[rng.random_range(0..LAST_NAMES.len())]
}

pub fn default_birth_range() -> Result<(NaiveDate, NaiveDate)> {
    match (
        NaiveDate::from_ymd_opt(BIRTH_YEAR_MIN, 1, 1),
        NaiveDate::from_ymd_opt(BIRTH_YEAR_MAX, 12, 31),
    ) {
        (Some(start), Some(end)) => Ok((start, end)),
        _ => Err(TestDataError::ProcessingError {
            message: "invalid default birthdate range".to_string(),
        }),
    }
}

/// Uniform calendar date in `start..=end`.
pub fn birthdate<R: Rng + ?Sized>(rng: &mut R, start: NaiveDate, end: NaiveDate) -> NaiveDate {
    let span = (end - start).num_days().max(0);
    let offset = rng.random_range(0..=span);
    start
        .checked_add_days(Days::new(offset.unsigned_abs()))
        .unwrap_or(end)
}

pub fn email<R: Rng + ?Sized>(rng: &mut R, first: &str, last: &str) -> String {
    let domain = EMAIL_DOMAINS[rng.random_range(0..EMAIL_DOMAINS.len())];
    let suffix: u16 = rng.random_range(1..=999);
    format!(
        "{}.{}{}@{}",
        email_part(first),
        email_part(last),
        suffix,
        domain
    )
}

fn email_part(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Dutch mobile number, `06-` followed by eight digits.
pub fn phone_number<R: Rng + ?Sized>(rng: &mut R) -> String {
    let subscriber: u32 = rng.random_range(0..100_000_000);
    format!("06-{:08}", subscriber)
}

/// Postcode in `1234 AB` form.
pub fn postcode<R: Rng + ?Sized>(rng: &mut R) -> String {
    let number: u16 = rng.random_range(1000..=9999);
    let first = char::from(b'A' + rng.random_range(0..26u8));
    let allowed: Vec<char> = ('A'..='Z')
        .filter(|second| {
            let pair = format!("{}{}", first, second);
            !EXCLUDED_POSTCODE_PAIRS.contains(&pair.as_str())
        })
        .collect();
    let second = allowed[rng.random_range(0..allowed.len())];
    format!("{} {}{}", number, first, second)
}

pub struct PersonGenerator<T: Telemetry> {
    validator: BsnValidator<T>,
    birth_start: NaiveDate,
    birth_end: NaiveDate,
}

impl<T: Telemetry> PersonGenerator<T> {
    pub fn new(validator: BsnValidator<T>) -> Result<Self> {
        let (birth_start, birth_end) = default_birth_range()?;
        Ok(Self {
            validator,
            birth_start,
            birth_end,
        })
    }

    pub fn with_birth_range(mut self, start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(TestDataError::InvalidConfigValueError {
                field: "birth_range".to_string(),
                value: format!("{}..{}", start, end),
                reason: "start date is after end date".to_string(),
            });
        }
        self.birth_start = start;
        self.birth_end = end;
        Ok(self)
    }

    pub fn validator(&self) -> &BsnValidator<T> {
        &self.validator
    }

    pub fn person<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Person> {
        let voornaam = first_name(rng);
        let achternaam = last_name(rng);
        let geboortedatum = birthdate(rng, self.birth_start, self.birth_end);
        let bsn = self.validator.generate(&mut RngDigitSource::new(&mut *rng))?;

        Ok(Person {
            voornaam: voornaam.to_string(),
            achternaam: achternaam.to_string(),
            geboortedatum: geboortedatum.format("%Y-%m-%d").to_string(),
            bsn,
            email: email(rng, voornaam, achternaam),
            telefoon: phone_number(rng),
            postcode: postcode(rng),
        })
    }
}
