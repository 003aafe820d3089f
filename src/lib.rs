//! Library to query **IP2Location BIN data** files: both the IP2Location™
//! geolocation databases (`DB1` through `DB25`) and the IP2Proxy™ proxy
//! detection databases (`PX1` through `PX11`).
//!
//! [https://www.ip2location.com/](https://www.ip2location.com/) is a
//! commercial provider, offering various database files for download.
//!
//! Supports IPv4 and IPv6. IPv4-mapped, 6to4, and Teredo addresses are
//! unwrapped to the IPv4 address they carry before the lookup.
//!
//! # Example
//!
//! ```no_run
//! use ip2bin::{Database, Field};
//!
//! let db = Database::open("IP2LOCATION-LITE-DB11.BIN")?;
//! println!("{db}");
//!
//! if let Some(record) = db.lookup("8.8.8.8".parse()?)? {
//!     println!("{}", record.format(false, true));
//!     assert_eq!(record.get_str(Field::CountryCode)?.as_deref(), Some("US"));
//! }
//! # Ok::<_, Box<dyn std::error::Error>>(())
//! ```
//!
//! Databases are read through [`positioned_io::ReadAt`], so anything
//! addressable at arbitrary byte offsets works as a source: files, memory
//! maps, or plain `Vec<u8>` buffers. The handle holds no per-query state and
//! can be shared freely between threads.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

mod error;
mod field;
mod record;
mod tables;

#[doc(hidden)]
pub mod gen;

use std::fmt;
use std::io::{ErrorKind, Read};
use std::net::IpAddr;
use std::path::Path;

use byteorder::{ByteOrder as _, ReadBytesExt as _, LE};
use log::{debug, trace};
use positioned_io::{RandomAccessFile, ReadAt};

pub use crate::error::{Error, Result};
pub use crate::field::{Field, FieldSet, Product};
pub use crate::record::{Record, Value};

use crate::field::FieldDesc;

const HEADER_LEN: usize = 64;

/// An IP2Location or IP2Proxy BIN database.
#[derive(Debug)]
pub struct Database<R = RandomAccessFile> {
    reader: R,
    header: Header,
    product: Product,
    fields: FieldSet,
}

impl Database<RandomAccessFile> {
    /// Open a database file.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use ip2bin::Database;
    ///
    /// let db = Database::open("IP2PROXY-LITE-PX11.BIN")?;
    /// # Ok::<_, ip2bin::Error>(())
    /// ```
    ///
    /// # Errors
    ///
    /// * Error while opening or reading the file.
    /// * The file is zipped, predates 2021, or has a corrupt or unsupported
    ///   header.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::new(RandomAccessFile::open(path)?)
    }
}

impl<R: ReadAt> Database<R> {
    /// Open a database from any positional reader, for example an in-memory
    /// buffer.
    ///
    /// Reads and validates the 64-byte header; nothing else is touched until
    /// a lookup.
    pub fn new(reader: R) -> Result<Self> {
        let mut raw = [0; HEADER_LEN];
        reader.read_exact_at(0, &mut raw).map_err(|e| match e.kind() {
            ErrorKind::UnexpectedEof => Error::Corrupt("file too small for header".to_owned()),
            _ => Error::Io(e),
        })?;

        if raw[0] == b'P' && raw[1] == b'K' {
            return Err(Error::Zipped);
        }

        let header = Header::read(&raw[..])?;
        if !(1..=12).contains(&header.month) || !(1..=31).contains(&header.day) {
            return Err(Error::Corrupt(format!(
                "invalid header date {}",
                version(header.year, header.month, header.day)
            )));
        }
        if header.year < 21 {
            // the product code byte only exists in >= 2021 databases
            return Err(Error::TooOld(version(header.year, header.month, header.day)));
        }
        let Some(product) = Product::from_code(header.product_code) else {
            return Err(Error::Unsupported(format!(
                "product code {}",
                header.product_code
            )));
        };
        let expected = tables::column_count(product, header.db_type);
        if expected == 0 {
            return Err(Error::Unsupported(product.format_type(header.db_type)));
        }
        if expected != header.columns {
            return Err(Error::Corrupt(format!(
                "{} expects {} columns, header says {}",
                product.format_type(header.db_type),
                expected,
                header.columns
            )));
        }

        let mut fields = FieldSet::empty();
        for f in Field::ALL {
            if tables::descriptor(product, header.db_type, f).is_some() {
                fields |= f.into();
            }
        }

        debug!(
            "opened {} {} database of {}",
            product,
            product.format_type(header.db_type),
            version(header.year, header.month, header.day),
        );

        Ok(Database {
            reader,
            header,
            product,
            fields,
        })
    }

    /// Look up information for an IP address.
    ///
    /// Returns `Ok(None)` if no range in the database contains the address.
    /// Tunneled representations (IPv4-mapped, 6to4, Teredo) yield the same
    /// record as the IPv4 address they embed.
    ///
    /// # Errors
    ///
    /// * Error while reading from the source.
    pub fn lookup(&self, addr: IpAddr) -> Result<Option<Record<'_, R>>> {
        let (ip, v4) = unmap(addr);
        trace!("lookup {addr} -> {ip:#x} (v4: {v4})");

        let (base, count, index, iplen) = match v4 {
            true => (
                self.header.base_ipv4,
                self.header.rows_ipv4,
                self.header.index_ipv4,
                4usize,
            ),
            false => (
                self.header.base_ipv6,
                self.header.rows_ipv6,
                self.header.index_ipv6,
                16usize,
            ),
        };
        if count == 0 || base == 0 {
            return Ok(None);
        }

        // 4 bytes per column except for IPFrom
        let row_size = iplen + (usize::from(self.header.columns) - 1) * 4;

        // initial search window, narrowed by the index if the file has one
        let (mut lower, mut upper) = match index {
            0 => (0, count),
            _ => {
                let prefix = match v4 {
                    true => (ip as u32) >> 16,
                    false => (ip >> 112) as u32,
                };
                let mut entry = [0; 8];
                self.reader
                    .read_exact_at(u64::from(index) - 1 + u64::from(prefix) * 8, &mut entry)?;
                (LE::read_u32(&entry), LE::read_u32(&entry[4..]))
            }
        };

        // row buffer (columns + next IPFrom)
        let mut row = vec![0; row_size + iplen];

        while lower <= upper {
            let mid = mid(lower, upper);
            let off = u64::from(base) - 1 + u64::from(mid) * row_size as u64;
            self.reader.read_exact_at(off, &mut row)?;

            // IPTo is the next row's IPFrom, used as an exclusive bound
            let (ip_from, ip_to) = match v4 {
                true => (
                    u128::from(LE::read_u32(&row)),
                    u128::from(LE::read_u32(&row[row_size..])),
                ),
                false => (LE::read_u128(&row), LE::read_u128(&row[row_size..])),
            };

            if ip < ip_from {
                match mid.checked_sub(1) {
                    Some(m) => upper = m,
                    None => break,
                }
            } else if ip >= ip_to {
                match mid.checked_add(1) {
                    Some(m) => lower = m,
                    None => break,
                }
            } else {
                return Ok(Some(Record::new(self, row[iplen..row_size].to_vec())));
            }
        }

        Ok(None)
    }

    /// Parse `addr` and look it up.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidAddress`] if `addr` is not an IP address, plus
    /// everything [`lookup()`](Self::lookup) can return.
    pub fn lookup_str(&self, addr: &str) -> Result<Option<Record<'_, R>>> {
        let addr = addr
            .parse::<IpAddr>()
            .map_err(|e| Error::InvalidAddress(format!("{addr:?}: {e}")))?;
        self.lookup(addr)
    }

    /// Get the database product.
    pub fn product(&self) -> Product {
        self.product
    }

    /// Get the database type, like `11` for a DB11 database.
    pub fn db_type(&self) -> u8 {
        self.header.db_type
    }

    /// Get the database version as `YYYY-MM-DD`.
    pub fn version(&self) -> String {
        version(self.header.year, self.header.month, self.header.day)
    }

    /// Get the database creation year. Convention is `24` for `2024`.
    pub fn year(&self) -> u8 {
        self.header.year
    }

    /// Get the database creation month. Convention is `1` for January.
    pub fn month(&self) -> u8 {
        self.header.month
    }

    /// Get the database creation day.
    pub fn day(&self) -> u8 {
        self.header.day
    }

    /// Number of columns per row, the IPFrom column included.
    pub fn column_count(&self) -> u8 {
        self.header.columns
    }

    /// Get the number of rows for IPv4 addresses. Rows cover a range, so
    /// there may be information for many more IP addresses.
    pub fn rows_ipv4(&self) -> u32 {
        self.header.rows_ipv4
    }

    /// Get the number of rows for IPv6 addresses.
    pub fn rows_ipv6(&self) -> u32 {
        self.header.rows_ipv6
    }

    /// Check if the database contains IPv4 entries.
    pub fn has_ipv4(&self) -> bool {
        self.header.rows_ipv4 != 0
    }

    /// Check if the database contains IPv6 entries.
    pub fn has_ipv6(&self) -> bool {
        self.header.rows_ipv6 != 0
    }

    /// Get the set of fields supported by the database.
    pub fn fields(&self) -> FieldSet {
        self.fields
    }

    /// Check if the database contains `field`.
    pub fn has(&self, field: Field) -> bool {
        self.fields.contains(field.into())
    }

    pub(crate) fn field_descriptor(&self, field: Field) -> FieldDesc {
        tables::descriptor(self.product, self.header.db_type, field)
    }

    /// Read up to `buf.len()` bytes at `pos`, stopping early at end of file.
    pub(crate) fn read_at_most(&self, mut pos: u64, buf: &mut [u8]) -> Result<usize> {
        let mut n = 0;
        while n < buf.len() {
            match self.reader.read_at(pos, &mut buf[n..]) {
                Ok(0) => break,
                Ok(m) => {
                    n += m;
                    pos += m as u64;
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(Error::Io(e)),
            }
        }
        Ok(n)
    }
}

impl<R: ReadAt> fmt::Display for Database<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} [",
            self.product,
            self.product.format_type(self.header.db_type),
            self.version()
        )?;
        for (n, field) in Field::ALL.iter().filter(|f| self.has(**f)).enumerate() {
            if n != 0 {
                f.write_str(",")?;
            }
            write!(f, "{field}")?;
        }
        let families = match (self.has_ipv4(), self.has_ipv6()) {
            (true, false) => "IPv4",
            (false, true) => "IPv6",
            _ => "IPv4+IPv6",
        };
        write!(f, "] ({families})")
    }
}

#[derive(Debug)]
struct Header {
    db_type: u8,
    columns: u8,
    year: u8,
    month: u8,
    day: u8,
    rows_ipv4: u32,
    base_ipv4: u32,
    rows_ipv6: u32,
    base_ipv6: u32,
    index_ipv4: u32,
    index_ipv6: u32,
    product_code: u8,
    #[allow(dead_code)]
    product_subtype: u8,
    #[allow(dead_code)]
    file_size: u32,
}

impl Header {
    fn read<T: Read>(mut reader: T) -> std::io::Result<Header> {
        Ok(Header {
            db_type: reader.read_u8()?,
            columns: reader.read_u8()?,
            year: reader.read_u8()?,
            month: reader.read_u8()?,
            day: reader.read_u8()?,
            rows_ipv4: reader.read_u32::<LE>()?,
            base_ipv4: reader.read_u32::<LE>()?,
            rows_ipv6: reader.read_u32::<LE>()?,
            base_ipv6: reader.read_u32::<LE>()?,
            index_ipv4: reader.read_u32::<LE>()?,
            index_ipv6: reader.read_u32::<LE>()?,
            product_code: reader.read_u8()?,
            product_subtype: reader.read_u8()?,
            file_size: reader.read_u32::<LE>()?,
        })
    }
}

fn version(year: u8, month: u8, day: u8) -> String {
    format!("20{year:02}-{month:02}-{day:02}")
}

/// Fold an address into the native form the databases index by: 6to4 and
/// Teredo carry an IPv4 address in fixed bit positions, and IPv4-mapped
/// addresses unwrap to the bare 32-bit value.
fn unmap(addr: IpAddr) -> (u128, bool) {
    let a = match addr {
        IpAddr::V4(v4) => return (u128::from(u32::from(v4)), true),
        IpAddr::V6(v6) => u128::from(v6),
    };
    let a = if a >> 112 == 0x2002 {
        // 6to4 -> v4mapped
        (a >> 80) & 0xffff_ffff | 0xffff_0000_0000
    } else if a >> 96 == 0x2001_0000 {
        // teredo -> v4mapped
        !a & 0xffff_ffff | 0xffff_0000_0000
    } else {
        a
    };
    match a >> 32 == 0xffff {
        true => (a & 0xffff_ffff, true),
        false => (a, false),
    }
}

fn mid(lower: u32, upper: u32) -> u32 {
    ((u64::from(lower) + u64::from(upper)) / 2) as u32
}
