//! Records returned by lookups and on-demand field decoding.

use byteorder::{ByteOrder as _, LE};
use colored::{ColoredString, Colorize as _};
use positioned_io::ReadAt;
use serde_json::{Map, Number};

use crate::field::Storage;
use crate::{Database, Error, Field, Result};

/// A decoded field value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Value of a string column.
    Str(String),
    /// Value of a 32-bit float column.
    F32(f32),
}

/// Database record for an IP address.
///
/// Obtained from [`Database::lookup()`]. The record owns the raw row
/// columns; field accessors decode on demand and follow pointer columns
/// with additional positional reads, so only the fields actually asked for
/// cost anything.
///
/// By convention, `-` is used for cells where the column is supported but
/// has no value.
#[derive(Debug)]
pub struct Record<'db, R> {
    db: &'db Database<R>,
    data: Vec<u8>,
}

// string payloads are a length byte plus at most 255 data bytes
const MAX_PAYLOAD: usize = 1 + 0xFF;

impl<'db, R: ReadAt> Record<'db, R> {
    pub(crate) fn new(db: &'db Database<R>, data: Vec<u8>) -> Self {
        Record { db, data }
    }

    /// Get a field as its natural type.
    ///
    /// Returns `Ok(None)` if the open database does not carry the field.
    ///
    /// # Errors
    ///
    /// * Error while reading an indirect value from the source.
    /// * [`Error::Short`] if a string payload is truncated.
    pub fn get(&self, field: Field) -> Result<Option<Value>> {
        let fd = self.db.field_descriptor(field);
        if !fd.is_some() {
            return Ok(None);
        }

        // column data offset, relative to the end of the IPFrom column
        let off = (fd.column() as usize - 2) * 4;
        let cell = self
            .data
            .get(off..off + 4)
            .ok_or_else(|| Error::Corrupt(format!("row too short for field {field}")))?;

        let rel = match fd.ptr_offset() {
            None => {
                // inline column; strings are always pointers
                return match fd.storage() {
                    Storage::F32 => Ok(Some(Value::F32(LE::read_f32(cell)))),
                    Storage::Str => {
                        Err(Error::Corrupt(format!("inline string field {field}")))
                    }
                };
            }
            Some(rel) => rel,
        };

        let ptr = u64::from(LE::read_u32(cell)) + u64::from(rel);
        let mut payload = [0; MAX_PAYLOAD];
        let n = self.db.read_at_most(ptr, &mut payload)?;

        match fd.storage() {
            Storage::Str => {
                let len = match n {
                    0 => return Err(Error::Short),
                    _ => usize::from(payload[0]),
                };
                if n < 1 + len {
                    return Err(Error::Short);
                }
                let s = String::from_utf8(payload[1..1 + len].to_vec())
                    .map_err(|_| Error::Corrupt(format!("field {field} is not valid utf-8")))?;
                Ok(Some(Value::Str(s)))
            }
            Storage::F32 => match n < 4 {
                true => Err(Error::Short),
                false => Ok(Some(Value::F32(LE::read_f32(&payload)))),
            },
        }
    }

    /// Get a field as a string.
    ///
    /// Float columns are formatted with the shortest decimal form that
    /// round-trips.
    pub fn get_str(&self, field: Field) -> Result<Option<String>> {
        Ok(match self.get(field)? {
            Some(Value::Str(s)) => Some(s),
            Some(Value::F32(v)) => Some(v.to_string()),
            None => None,
        })
    }

    /// Get a field as a 32-bit float.
    ///
    /// String columns are parsed as decimal; some fields (notably
    /// [`Field::Elevation`]) are stored that way. A non-numeric string is an
    /// [`Error::Parse`], not a silent zero.
    pub fn get_f32(&self, field: Field) -> Result<Option<f32>> {
        match self.get(field)? {
            Some(Value::F32(v)) => Ok(Some(v)),
            Some(Value::Str(s)) => match s.trim().parse::<f32>() {
                Ok(v) => Ok(Some(v)),
                Err(_) => Err(Error::Parse(format!("field {field} is not numeric: {s:?}"))),
            },
            None => Ok(None),
        }
    }

    /// Format all fields as a human-readable string, like
    /// `IP2Location<DB11>{country_code="US" …}`.
    ///
    /// Note that this decodes every supported field, which is much more
    /// expensive than getting the fields you need.
    pub fn format(&self, color: bool, multiline: bool) -> String {
        let mut s = String::new();
        let product = self.db.product();

        s.push_str(&paint(product.name(), color, |t| t.blue()));
        s.push('<');
        s.push_str(&product.format_type(self.db.db_type()));
        s.push('>');
        s.push_str(match multiline {
            true => "{\n  ",
            false => "{",
        });

        for (n, field) in Field::ALL.iter().filter(|f| self.db.has(**f)).enumerate() {
            if n != 0 {
                s.push_str(match multiline {
                    true => "\n  ",
                    false => " ",
                });
            }
            s.push_str(&paint(field.column_name(), color, |t| t.magenta()));
            s.push_str(match multiline {
                true => " ",
                false => "=",
            });
            match self.get(*field) {
                Ok(Some(Value::Str(v))) => {
                    s.push_str(&paint(&format!("{v:?}"), color, |t| t.yellow()))
                }
                Ok(Some(Value::F32(v))) => {
                    s.push_str(&paint(&v.to_string(), color, |t| t.green()))
                }
                Ok(None) => {}
                Err(err) => s.push_str(&paint(&format!("<error: {err}>"), color, |t| t.red())),
            }
        }

        s.push_str(match multiline {
            true => "\n}",
            false => "}",
        });
        s
    }

    /// Decode all fields into a JSON object keyed by column name.
    ///
    /// # Errors
    ///
    /// Any field decode error aborts the conversion.
    pub fn to_json(&self) -> Result<Map<String, serde_json::Value>> {
        let mut obj = Map::new();
        for field in Field::ALL {
            match self.get(field)? {
                Some(Value::Str(v)) => {
                    obj.insert(field.column_name().to_owned(), v.into());
                }
                Some(Value::F32(v)) => {
                    // reparse the shortest f32 form so JSON numbers match the
                    // text output digit for digit
                    let n = v.to_string().parse::<f64>().ok().and_then(Number::from_f64);
                    obj.insert(
                        field.column_name().to_owned(),
                        match n {
                            Some(n) => n.into(),
                            None => serde_json::Value::Null,
                        },
                    );
                }
                None => {}
            }
        }
        Ok(obj)
    }
}

fn paint(text: &str, color: bool, style: impl Fn(&str) -> ColoredString) -> String {
    match color {
        true => style(text).to_string(),
        false => text.to_owned(),
    }
}
