//! Products, fields, and the packed column descriptors that tie them to the
//! on-disk layout of each database variant.

use std::fmt;

use bitflags::bitflags;

use crate::tables;

/// A database product family.
///
/// Each product owns its own column vocabulary and its own set of database
/// types (variants). The product code is stored in the file header of every
/// database published since 2021.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Product {
    /// IP2Location™ IP geolocation databases (`DB1` through `DB25`):
    /// country, region, city, coordinates, ZIP code, time zone, ISP, and
    /// more depending on the variant.
    IP2Location = 1,
    /// IP2Proxy™ proxy detection databases (`PX1` through `PX11`): proxy
    /// type, provider, threat classification, and geolocation of known
    /// proxies.
    IP2Proxy = 2,
}

impl Product {
    /// Look up a product by its header code.
    pub fn from_code(code: u8) -> Option<Product> {
        match code {
            1 => Some(Product::IP2Location),
            2 => Some(Product::IP2Proxy),
            _ => None,
        }
    }

    /// The product name, like `IP2Location`.
    pub fn name(self) -> &'static str {
        tables::PRODUCT_NAMES[self as usize]
    }

    /// The type prefix, like `DB` in `DB11`.
    pub fn prefix(self) -> &'static str {
        tables::PRODUCT_PREFIXES[self as usize]
    }

    /// Format a database type with the product prefix, like `PX9`.
    pub fn format_type(self, db_type: u8) -> String {
        format!("{}{}", self.prefix(), db_type)
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A semantic database column.
///
/// Fields are stable identifiers usable across products and database types;
/// any given database variant carries only a subset of them. Use
/// [`Database::has()`](crate::Database::has) to check for presence, or just
/// call the [`Record`](crate::Record) accessors, which return `None` for
/// fields the database does not carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Field {
    /// IP address type: `(A)` anycast, `(U)` unicast, `(M)` multicast,
    /// `(B)` broadcast.
    AddressType = 1,
    /// Telephone area code of the city.
    AreaCode = 2,
    /// Autonomous system (AS) name, like `CLOUDFLARENET`.
    AsName = 3,
    /// Autonomous system number (ASN), like `13335`.
    Asn = 4,
    /// Domain category based on the IAB Tech Lab Content Taxonomy.
    Category = 5,
    /// City name, like `Los Angeles`.
    City = 6,
    /// Two-character ISO 3166 country code, like `US`.
    CountryCode = 7,
    /// ISO 3166 country name, like `United States of America`.
    CountryName = 8,
    /// Internet domain name associated with the IP address range.
    Domain = 9,
    /// Average height of the city above sea level, in meters. Stored as a
    /// decimal string; [`Record::get_f32()`](crate::Record::get_f32) parses
    /// it.
    Elevation = 10,
    /// IDD prefix to call the city from another country.
    IddCode = 11,
    /// Internet service provider or company name.
    Isp = 12,
    /// Days since the proxy was last seen.
    LastSeen = 13,
    /// City latitude. Defaults to the capital city if the city is unknown.
    Latitude = 14,
    /// City longitude. Defaults to the capital city if the city is unknown.
    Longitude = 15,
    /// Mobile country code (MCC), as defined in ITU E.212.
    Mcc = 16,
    /// Mobile network code (MNC); identifies the carrier together with the
    /// MCC.
    Mnc = 17,
    /// Commercial brand associated with the mobile carrier.
    MobileBrand = 18,
    /// Internet connection type: `(DIAL)` dial-up, `(DSL)`
    /// broadband/cable/fiber/mobile, `(COMP)` company/T1.
    NetSpeed = 19,
    /// Name of the VPN provider, if available.
    Provider = 20,
    /// Type of proxy, if any.
    ///
    /// | Proxy type | Description |
    /// | --- | --- |
    /// | `VPN` | Anonymizing VPN service |
    /// | `TOR` | Tor exit node |
    /// | `DCH` | Data center, hosting provider, CDN |
    /// | `PUB` | Public proxy |
    /// | `WEB` | Web based proxy |
    /// | `SES` | Search engine spider |
    /// | `RES` | Residential proxy. Only in PX10 & PX11 |
    ProxyType = 21,
    /// Region or state name, like `California`.
    Region = 22,
    /// Security threat reported.
    ///
    /// | Threat type | Description |
    /// | --- | --- |
    /// | `SPAM` | Email and forum spammers |
    /// | `SCANNER` | Network security scanners |
    /// | `BOTNET` | Malware infected devices |
    Threat = 23,
    /// UTC time zone offset, with DST applied, like `-07:00`.
    TimeZone = 24,
    /// Usage type classification of the ISP or company.
    ///
    /// | Usage type | Description |
    /// | --- | --- |
    /// | `COM` | Commercial |
    /// | `ORG` | Organization |
    /// | `GOV` | Government |
    /// | `MIL` | Military |
    /// | `EDU` | University, college, school |
    /// | `LIB` | Library |
    /// | `CDN` | Content Delivery Network |
    /// | `ISP` | Fixed line ISP |
    /// | `MOB` | Mobile ISP |
    /// | `DCH` | Data center, hosting provider, transit |
    /// | `SES` | Search engine spider |
    /// | `RSV` | Reserved |
    UsageType = 25,
    /// Code of the nearest weather observation station.
    WeatherStationCode = 26,
    /// Name of the nearest weather observation station.
    WeatherStationName = 27,
    /// ZIP or postal code.
    ZipCode = 28,
}

impl Field {
    /// All fields, in stable order.
    pub const ALL: [Field; 28] = [
        Field::AddressType,
        Field::AreaCode,
        Field::AsName,
        Field::Asn,
        Field::Category,
        Field::City,
        Field::CountryCode,
        Field::CountryName,
        Field::Domain,
        Field::Elevation,
        Field::IddCode,
        Field::Isp,
        Field::LastSeen,
        Field::Latitude,
        Field::Longitude,
        Field::Mcc,
        Field::Mnc,
        Field::MobileBrand,
        Field::NetSpeed,
        Field::Provider,
        Field::ProxyType,
        Field::Region,
        Field::Threat,
        Field::TimeZone,
        Field::UsageType,
        Field::WeatherStationCode,
        Field::WeatherStationName,
        Field::ZipCode,
    ];

    /// The column name, like `country_code`. Used for display and as the
    /// JSON key.
    pub fn column_name(self) -> &'static str {
        tables::FIELD_COLUMN_NAMES[self as usize]
    }

    pub(crate) fn set_bit(self) -> FieldSet {
        FieldSet::from_bits_retain(1 << (self as u32 - 1))
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column_name())
    }
}

bitflags! {
    /// Set of fields supported by a database.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use ip2bin::{Database, Field};
    ///
    /// let db = Database::open("IP2LOCATION-LITE-DB11.BIN")?;
    /// assert!(db.fields().contains(Field::CountryCode.into()));
    /// # Ok::<_, ip2bin::Error>(())
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct FieldSet: u32 {
        /// See [`Field::AddressType`].
        const ADDRESS_TYPE = 1;
        /// See [`Field::AreaCode`].
        const AREA_CODE = 1 << 1;
        /// See [`Field::AsName`].
        const AS_NAME = 1 << 2;
        /// See [`Field::Asn`].
        const ASN = 1 << 3;
        /// See [`Field::Category`].
        const CATEGORY = 1 << 4;
        /// See [`Field::City`].
        const CITY = 1 << 5;
        /// See [`Field::CountryCode`].
        const COUNTRY_CODE = 1 << 6;
        /// See [`Field::CountryName`].
        const COUNTRY_NAME = 1 << 7;
        /// See [`Field::Domain`].
        const DOMAIN = 1 << 8;
        /// See [`Field::Elevation`].
        const ELEVATION = 1 << 9;
        /// See [`Field::IddCode`].
        const IDD_CODE = 1 << 10;
        /// See [`Field::Isp`].
        const ISP = 1 << 11;
        /// See [`Field::LastSeen`].
        const LAST_SEEN = 1 << 12;
        /// See [`Field::Latitude`].
        const LATITUDE = 1 << 13;
        /// See [`Field::Longitude`].
        const LONGITUDE = 1 << 14;
        /// See [`Field::Mcc`].
        const MCC = 1 << 15;
        /// See [`Field::Mnc`].
        const MNC = 1 << 16;
        /// See [`Field::MobileBrand`].
        const MOBILE_BRAND = 1 << 17;
        /// See [`Field::NetSpeed`].
        const NET_SPEED = 1 << 18;
        /// See [`Field::Provider`].
        const PROVIDER = 1 << 19;
        /// See [`Field::ProxyType`].
        const PROXY_TYPE = 1 << 20;
        /// See [`Field::Region`].
        const REGION = 1 << 21;
        /// See [`Field::Threat`].
        const THREAT = 1 << 22;
        /// See [`Field::TimeZone`].
        const TIME_ZONE = 1 << 23;
        /// See [`Field::UsageType`].
        const USAGE_TYPE = 1 << 24;
        /// See [`Field::WeatherStationCode`].
        const WEATHER_STATION_CODE = 1 << 25;
        /// See [`Field::WeatherStationName`].
        const WEATHER_STATION_NAME = 1 << 26;
        /// See [`Field::ZipCode`].
        const ZIP_CODE = 1 << 27;
    }
}

impl From<Field> for FieldSet {
    fn from(f: Field) -> FieldSet {
        f.set_bit()
    }
}

/// On-disk representation of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Storage {
    /// Length-prefixed string, always behind a pointer column.
    Str = 0,
    /// Little-endian IEEE-754 32-bit float.
    F32 = 1,
}

/// Sentinel pointer offset marking an inline column.
pub(crate) const INLINE: u8 = 0xFF;

/// Packed column descriptor for one `(product, db_type, field)`.
///
/// Layout: bits 0..4 storage type, bits 4..12 column number (always >= 2
/// since column 1 is IPFrom), bits 12..20 pointer offset with 0xFF meaning
/// the column holds the value inline. Zero means the field is absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldDesc(pub(crate) u32);

impl FieldDesc {
    pub(crate) const NONE: FieldDesc = FieldDesc(0);

    /// Pack a descriptor. `ptr` is the pointer offset, or [`INLINE`].
    pub(crate) const fn pack(column: u8, ptr: u8, storage: Storage) -> u32 {
        storage as u32 | (column as u32) << 4 | (ptr as u32) << 12
    }

    pub(crate) fn is_some(self) -> bool {
        self.0 != 0
    }

    /// 1-based column number within the row.
    pub(crate) fn column(self) -> u32 {
        (self.0 >> 4) & 0xFF
    }

    /// Pointer offset, or `None` if the column is inline.
    pub(crate) fn ptr_offset(self) -> Option<u8> {
        match ((self.0 >> 12) & 0xFF) as u8 {
            INLINE => None,
            rel => Some(rel),
        }
    }

    pub(crate) fn storage(self) -> Storage {
        match self.0 & 0xF {
            0 => Storage::Str,
            _ => Storage::F32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack() {
        let d = FieldDesc(FieldDesc::pack(7, 0, Storage::Str));
        assert!(d.is_some());
        assert_eq!(d.column(), 7);
        assert_eq!(d.ptr_offset(), Some(0));
        assert_eq!(d.storage(), Storage::Str);

        let d = FieldDesc(FieldDesc::pack(2, 3, Storage::Str));
        assert_eq!(d.column(), 2);
        assert_eq!(d.ptr_offset(), Some(3));

        let d = FieldDesc(FieldDesc::pack(5, INLINE, Storage::F32));
        assert_eq!(d.column(), 5);
        assert_eq!(d.ptr_offset(), None);
        assert_eq!(d.storage(), Storage::F32);

        assert!(!FieldDesc::NONE.is_some());
    }

    #[test]
    fn test_field_bits_distinct() {
        let mut all = FieldSet::empty();
        for f in Field::ALL {
            let bit = FieldSet::from(f);
            assert!(!all.intersects(bit), "{f} overlaps");
            all |= bit;
        }
        assert_eq!(all, FieldSet::all());
    }
}
