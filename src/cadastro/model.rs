use crate::error::{CadastroError, Result};
use serde::{Deserialize, Serialize};

/// Column names of the data file, in file order.
pub const HEADER: [&str; FIELD_COUNT] = [
    "ID",
    "Nome",
    "Sobrenome",
    "Rua",
    "Numero",
    "Bairro",
    "Cidade",
    "Estado",
    "Pais",
    "Telefone",
    "E-mail",
];

/// Number of columns in every row, the id included.
pub const FIELD_COUNT: usize = 11;

/// A stored row, exactly as it sits in the file.
///
/// The id is kept as text: reading never fails on a bad id, only the
/// operations that need a number (`Record::id`) do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    values: [String; FIELD_COUNT],
}

impl Record {
    pub fn new(id: u64, fields: &PersonFields) -> Self {
        let [first_name, last_name, street, number, neighborhood, city, state, country, phone, email] =
            fields.clone().into_values();
        Self {
            values: [
                id.to_string(),
                first_name,
                last_name,
                street,
                number,
                neighborhood,
                city,
                state,
                country,
                phone,
                email,
            ],
        }
    }

    /// Builds a record from raw column values. `line` is only used for the error.
    pub fn from_values(values: Vec<String>, line: u64) -> Result<Self> {
        let found = values.len();
        let values: [String; FIELD_COUNT] =
            values
                .try_into()
                .map_err(|_| CadastroError::MalformedRecord {
                    line,
                    expected: FIELD_COUNT,
                    found,
                })?;
        Ok(Self { values })
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn id_text(&self) -> &str {
        &self.values[0]
    }

    pub fn id(&self) -> Result<u64> {
        parse_id(self.id_text())
    }

    /// The ten non-id columns.
    pub fn fields(&self) -> PersonFields {
        let [_, rest @ ..] = self.values.clone();
        PersonFields::from_values(rest)
    }

    /// Same id, new attribute values.
    pub fn replaced_with(&self, fields: &PersonFields) -> Self {
        let mut next = Record::new(0, fields);
        next.values[0] = self.values[0].clone();
        next
    }
}

pub fn parse_id(text: &str) -> Result<u64> {
    text.trim()
        .parse::<u64>()
        .map_err(|_| CadastroError::InvalidId(text.to_string()))
}

/// Every attribute of a person except its id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonFields {
    pub first_name: String,
    pub last_name: String,
    pub street: String,
    pub number: String,
    pub neighborhood: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub phone: String,
    pub email: String,
}

impl PersonFields {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            ..Self::default()
        }
    }

    pub fn from_values(values: [String; FIELD_COUNT - 1]) -> Self {
        let [first_name, last_name, street, number, neighborhood, city, state, country, phone, email] =
            values;
        Self {
            first_name,
            last_name,
            street,
            number,
            neighborhood,
            city,
            state,
            country,
            phone,
            email,
        }
    }

    pub fn into_values(self) -> [String; FIELD_COUNT - 1] {
        [
            self.first_name,
            self.last_name,
            self.street,
            self.number,
            self.neighborhood,
            self.city,
            self.state,
            self.country,
            self.phone,
            self.email,
        ]
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Person {
    pub id: u64,
    #[serde(flatten)]
    pub fields: PersonFields,
}

impl Person {
    /// One-line summary used by listings: `"3 - Ana Silva"`.
    pub fn summary(&self) -> String {
        format!("{} - {}", self.id, self.fields.full_name())
    }
}

impl TryFrom<&Record> for Person {
    type Error = CadastroError;

    fn try_from(record: &Record) -> Result<Self> {
        Ok(Self {
            id: record.id()?,
            fields: record.fields(),
        })
    }
}
