//! CSV encoding of the record file.
//!
//! Pure data transformation over `Read`/`Write`: no paths, no ids.
//!
//! - UTF-8, comma delimited, `\r\n` line endings.
//! - Fields are quoted only when they contain a comma, a quote or a line
//!   break; embedded quotes are doubled.
//! - The first row must be exactly [`HEADER`]. Every following row must have
//!   [`FIELD_COUNT`] values or decoding fails with `MalformedRecord`.
//! - A completely empty input decodes to no records.

use crate::error::{CadastroError, Result};
use crate::model::{Record, FIELD_COUNT, HEADER};
use std::io::{Read, Write};

pub fn read_records<R: Read>(reader: R) -> Result<Vec<Record>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);
    let mut rows = reader.records();

    match rows.next() {
        None => return Ok(Vec::new()),
        Some(header) => check_header(&header?)?,
    }

    let mut records = Vec::new();
    for row in rows {
        let row = row?;
        let line = row.position().map(|p| p.line()).unwrap_or_default();
        let values = row.iter().map(str::to_string).collect();
        records.push(Record::from_values(values, line)?);
    }
    Ok(records)
}

pub fn write_records<W: Write>(writer: W, records: &[Record]) -> Result<()> {
    let mut writer = writer_builder().from_writer(writer);
    writer.write_record(HEADER)?;
    for record in records {
        writer.write_record(record.values())?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes a single data row, no header. Used for appends.
pub fn write_row<W: Write>(writer: W, record: &Record) -> Result<()> {
    let mut writer = writer_builder().from_writer(writer);
    writer.write_record(record.values())?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
pub fn decode(text: &str) -> Result<Vec<Record>> {
    read_records(text.as_bytes())
}

#[cfg(test)]
pub fn encode(records: &[Record]) -> Result<String> {
    let mut buf = Vec::new();
    write_records(&mut buf, records)?;
    String::from_utf8(buf).map_err(|e| CadastroError::Store(e.to_string()))
}

fn writer_builder() -> csv::WriterBuilder {
    let mut builder = csv::WriterBuilder::new();
    builder.terminator(csv::Terminator::CRLF);
    builder
}

fn check_header(row: &csv::StringRecord) -> Result<()> {
    if row.len() != FIELD_COUNT || !row.iter().zip(HEADER).all(|(got, want)| got == want) {
        let found: Vec<&str> = row.iter().collect();
        return Err(CadastroError::InvalidHeader(found.join(",")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PersonFields;

    const HEADER_LINE: &str = "ID,Nome,Sobrenome,Rua,Numero,Bairro,Cidade,Estado,Pais,Telefone,E-mail";

    #[test]
    fn empty_set_encodes_header_only() {
        let text = encode(&[]).unwrap();
        assert_eq!(text, format!("{HEADER_LINE}\r\n"));
    }

    #[test]
    fn header_only_decodes_to_nothing() {
        assert!(decode(&format!("{HEADER_LINE}\r\n")).unwrap().is_empty());
        assert!(decode("").unwrap().is_empty());
    }

    #[test]
    fn row_layout_matches_columns() {
        let record = Record::new(1, &PersonFields::new("Ana", "Silva"));
        let text = encode(&[record]).unwrap();
        assert_eq!(text, format!("{HEADER_LINE}\r\n1,Ana,Silva,,,,,,,,\r\n"));
    }

    #[test]
    fn delimiter_and_quotes_survive() {
        let fields = PersonFields {
            street: "Rua das Flores, 12".into(),
            neighborhood: "Vila \"Nova\"".into(),
            ..PersonFields::new("Ana", "Silva")
        };
        let record = Record::new(5, &fields);
        let text = encode(std::slice::from_ref(&record)).unwrap();
        assert!(text.contains("\"Rua das Flores, 12\""), "got: {text}");
        assert!(text.contains("\"Vila \"\"Nova\"\"\""), "got: {text}");
        assert_eq!(decode(&text).unwrap(), vec![record]);
    }

    #[test]
    fn accepts_unix_line_endings() {
        let text = format!("{HEADER_LINE}\n1,Ana,Silva,,,,,,,,\n2,Bia,Souza,,,,,,,,\n");
        let records = decode(&text).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].id_text(), "2");
    }

    #[test]
    fn short_row_is_malformed() {
        let text = format!("{HEADER_LINE}\r\n1,Ana,Silva,,,,,,,,\r\n2,Bia\r\n");
        let err = decode(&text).unwrap_err();
        assert!(
            matches!(
                err,
                CadastroError::MalformedRecord {
                    line: 3,
                    expected: 11,
                    found: 2
                }
            ),
            "got: {err:?}"
        );
    }

    #[test]
    fn long_row_is_malformed() {
        let text = format!("{HEADER_LINE}\r\n1,Ana,Silva,,,,,,,,,extra\r\n");
        assert!(matches!(
            decode(&text),
            Err(CadastroError::MalformedRecord { found: 12, .. })
        ));
    }

    #[test]
    fn foreign_header_is_rejected() {
        let err = decode("id,name\r\n1,Ana\r\n").unwrap_err();
        assert!(matches!(err, CadastroError::InvalidHeader(h) if h == "id,name"));
    }

    #[test]
    fn non_numeric_id_still_decodes() {
        let text = format!("{HEADER_LINE}\r\nabc,Ana,Silva,,,,,,,,\r\n");
        let records = decode(&text).unwrap();
        assert_eq!(records[0].id_text(), "abc");
    }
}
