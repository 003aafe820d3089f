// Generated by tablegen from src/gen/schema. DO NOT EDIT.
// Regenerate with: cargo run --bin tablegen > src/tables.rs

use crate::field::{FieldDesc, Storage, INLINE};
use crate::{Field, Product};

pub(crate) const PRODUCT_SLOTS: usize = 3;
pub(crate) const TYPE_SLOTS: usize = 26;
pub(crate) const FIELD_SLOTS: usize = 30;

/// Slot 0 of each `(product, db_type)` row: `(product << 8) | db_type`.
pub(crate) const TAG_SLOT: usize = 0;
/// Slot holding the expected header column count (IPFrom included).
pub(crate) const COLUMN_COUNT_SLOT: usize = 29;

/// Product display names, indexed by product code.
pub(crate) const PRODUCT_NAMES: [&str; PRODUCT_SLOTS] = ["", "IP2Location", "IP2Proxy"];

/// Product type prefixes, indexed by product code.
pub(crate) const PRODUCT_PREFIXES: [&str; PRODUCT_SLOTS] = ["", "DB", "PX"];

/// Field column names, indexed by field number.
pub(crate) const FIELD_COLUMN_NAMES: [&str; 29] = [
    "",
    "address_type",
    "area_code",
    "as",
    "asn",
    "category",
    "city",
    "country_code",
    "country_name",
    "domain",
    "elevation",
    "idd_code",
    "isp",
    "last_seen",
    "latitude",
    "longitude",
    "mcc",
    "mnc",
    "mobile_brand",
    "net_speed",
    "provider",
    "proxy_type",
    "region",
    "threat",
    "time_zone",
    "usage_type",
    "weather_station_code",
    "weather_station_name",
    "zip_code",
];

/// Look up the packed descriptor for a field in a database variant.
pub(crate) fn descriptor(product: Product, db_type: u8, field: Field) -> FieldDesc {
    match (db_type as usize) < TYPE_SLOTS {
        true => FieldDesc(DESC[product as usize][db_type as usize][field as usize]),
        false => FieldDesc::NONE,
    }
}

/// Expected column count for a database variant, or 0 if unsupported.
pub(crate) fn column_count(product: Product, db_type: u8) -> u8 {
    match (db_type as usize) < TYPE_SLOTS {
        true => DESC[product as usize][db_type as usize][COLUMN_COUNT_SLOT] as u8,
        false => 0,
    }
}

pub(crate) static DESC: [[[u32; FIELD_SLOTS]; TYPE_SLOTS]; PRODUCT_SLOTS] = build();

const ADDRESS_TYPE: usize = Field::AddressType as usize;
const AREA_CODE: usize = Field::AreaCode as usize;
const AS_NAME: usize = Field::AsName as usize;
const ASN: usize = Field::Asn as usize;
const CATEGORY: usize = Field::Category as usize;
const CITY: usize = Field::City as usize;
const COUNTRY_CODE: usize = Field::CountryCode as usize;
const COUNTRY_NAME: usize = Field::CountryName as usize;
const DOMAIN: usize = Field::Domain as usize;
const ELEVATION: usize = Field::Elevation as usize;
const IDD_CODE: usize = Field::IddCode as usize;
const ISP: usize = Field::Isp as usize;
const LAST_SEEN: usize = Field::LastSeen as usize;
const LATITUDE: usize = Field::Latitude as usize;
const LONGITUDE: usize = Field::Longitude as usize;
const MCC: usize = Field::Mcc as usize;
const MNC: usize = Field::Mnc as usize;
const MOBILE_BRAND: usize = Field::MobileBrand as usize;
const NET_SPEED: usize = Field::NetSpeed as usize;
const PROVIDER: usize = Field::Provider as usize;
const PROXY_TYPE: usize = Field::ProxyType as usize;
const REGION: usize = Field::Region as usize;
const THREAT: usize = Field::Threat as usize;
const TIME_ZONE: usize = Field::TimeZone as usize;
const USAGE_TYPE: usize = Field::UsageType as usize;
const WEATHER_STATION_CODE: usize = Field::WeatherStationCode as usize;
const WEATHER_STATION_NAME: usize = Field::WeatherStationName as usize;
const ZIP_CODE: usize = Field::ZipCode as usize;

const STR: Storage = Storage::Str;
const F32: Storage = Storage::F32;

const fn desc(column: u8, ptr: u8, storage: Storage) -> u32 {
    FieldDesc::pack(column, ptr, storage)
}

#[allow(clippy::identity_op)]
const fn build() -> [[[u32; FIELD_SLOTS]; TYPE_SLOTS]; PRODUCT_SLOTS] {
    let mut d = [[[0u32; FIELD_SLOTS]; TYPE_SLOTS]; PRODUCT_SLOTS];

    // IP2Location DB1
    d[1][1][TAG_SLOT] = 1 << 8 | 1;
    d[1][1][COUNTRY_CODE] = desc(2, 0, STR);
    d[1][1][COUNTRY_NAME] = desc(2, 3, STR);
    d[1][1][COLUMN_COUNT_SLOT] = 2;

    // IP2Location DB2
    d[1][2][TAG_SLOT] = 1 << 8 | 2;
    d[1][2][COUNTRY_CODE] = desc(2, 0, STR);
    d[1][2][COUNTRY_NAME] = desc(2, 3, STR);
    d[1][2][ISP] = desc(3, 0, STR);
    d[1][2][COLUMN_COUNT_SLOT] = 3;

    // IP2Location DB3
    d[1][3][TAG_SLOT] = 1 << 8 | 3;
    d[1][3][COUNTRY_CODE] = desc(2, 0, STR);
    d[1][3][COUNTRY_NAME] = desc(2, 3, STR);
    d[1][3][REGION] = desc(3, 0, STR);
    d[1][3][CITY] = desc(4, 0, STR);
    d[1][3][COLUMN_COUNT_SLOT] = 4;

    // IP2Location DB4
    d[1][4][TAG_SLOT] = 1 << 8 | 4;
    d[1][4][COUNTRY_CODE] = desc(2, 0, STR);
    d[1][4][COUNTRY_NAME] = desc(2, 3, STR);
    d[1][4][REGION] = desc(3, 0, STR);
    d[1][4][CITY] = desc(4, 0, STR);
    d[1][4][ISP] = desc(5, 0, STR);
    d[1][4][COLUMN_COUNT_SLOT] = 5;

    // IP2Location DB5
    d[1][5][TAG_SLOT] = 1 << 8 | 5;
    d[1][5][COUNTRY_CODE] = desc(2, 0, STR);
    d[1][5][COUNTRY_NAME] = desc(2, 3, STR);
    d[1][5][REGION] = desc(3, 0, STR);
    d[1][5][CITY] = desc(4, 0, STR);
    d[1][5][LATITUDE] = desc(5, INLINE, F32);
    d[1][5][LONGITUDE] = desc(6, INLINE, F32);
    d[1][5][COLUMN_COUNT_SLOT] = 6;

    // IP2Location DB6
    d[1][6][TAG_SLOT] = 1 << 8 | 6;
    d[1][6][COUNTRY_CODE] = desc(2, 0, STR);
    d[1][6][COUNTRY_NAME] = desc(2, 3, STR);
    d[1][6][REGION] = desc(3, 0, STR);
    d[1][6][CITY] = desc(4, 0, STR);
    d[1][6][LATITUDE] = desc(5, INLINE, F32);
    d[1][6][LONGITUDE] = desc(6, INLINE, F32);
    d[1][6][ISP] = desc(7, 0, STR);
    d[1][6][COLUMN_COUNT_SLOT] = 7;

    // IP2Location DB7
    d[1][7][TAG_SLOT] = 1 << 8 | 7;
    d[1][7][COUNTRY_CODE] = desc(2, 0, STR);
    d[1][7][COUNTRY_NAME] = desc(2, 3, STR);
    d[1][7][REGION] = desc(3, 0, STR);
    d[1][7][CITY] = desc(4, 0, STR);
    d[1][7][ISP] = desc(5, 0, STR);
    d[1][7][DOMAIN] = desc(6, 0, STR);
    d[1][7][COLUMN_COUNT_SLOT] = 6;

    // IP2Location DB8
    d[1][8][TAG_SLOT] = 1 << 8 | 8;
    d[1][8][COUNTRY_CODE] = desc(2, 0, STR);
    d[1][8][COUNTRY_NAME] = desc(2, 3, STR);
    d[1][8][REGION] = desc(3, 0, STR);
    d[1][8][CITY] = desc(4, 0, STR);
    d[1][8][LATITUDE] = desc(5, INLINE, F32);
    d[1][8][LONGITUDE] = desc(6, INLINE, F32);
    d[1][8][ISP] = desc(7, 0, STR);
    d[1][8][DOMAIN] = desc(8, 0, STR);
    d[1][8][COLUMN_COUNT_SLOT] = 8;

    // IP2Location DB9
    d[1][9][TAG_SLOT] = 1 << 8 | 9;
    d[1][9][COUNTRY_CODE] = desc(2, 0, STR);
    d[1][9][COUNTRY_NAME] = desc(2, 3, STR);
    d[1][9][REGION] = desc(3, 0, STR);
    d[1][9][CITY] = desc(4, 0, STR);
    d[1][9][LATITUDE] = desc(5, INLINE, F32);
    d[1][9][LONGITUDE] = desc(6, INLINE, F32);
    d[1][9][ZIP_CODE] = desc(7, 0, STR);
    d[1][9][COLUMN_COUNT_SLOT] = 7;

    // IP2Location DB10
    d[1][10][TAG_SLOT] = 1 << 8 | 10;
    d[1][10][COUNTRY_CODE] = desc(2, 0, STR);
    d[1][10][COUNTRY_NAME] = desc(2, 3, STR);
    d[1][10][REGION] = desc(3, 0, STR);
    d[1][10][CITY] = desc(4, 0, STR);
    d[1][10][LATITUDE] = desc(5, INLINE, F32);
    d[1][10][LONGITUDE] = desc(6, INLINE, F32);
    d[1][10][ZIP_CODE] = desc(7, 0, STR);
    d[1][10][ISP] = desc(8, 0, STR);
    d[1][10][DOMAIN] = desc(9, 0, STR);
    d[1][10][COLUMN_COUNT_SLOT] = 9;

    // IP2Location DB11
    d[1][11][TAG_SLOT] = 1 << 8 | 11;
    d[1][11][COUNTRY_CODE] = desc(2, 0, STR);
    d[1][11][COUNTRY_NAME] = desc(2, 3, STR);
    d[1][11][REGION] = desc(3, 0, STR);
    d[1][11][CITY] = desc(4, 0, STR);
    d[1][11][LATITUDE] = desc(5, INLINE, F32);
    d[1][11][LONGITUDE] = desc(6, INLINE, F32);
    d[1][11][ZIP_CODE] = desc(7, 0, STR);
    d[1][11][TIME_ZONE] = desc(8, 0, STR);
    d[1][11][COLUMN_COUNT_SLOT] = 8;

    // IP2Location DB12
    d[1][12][TAG_SLOT] = 1 << 8 | 12;
    d[1][12][COUNTRY_CODE] = desc(2, 0, STR);
    d[1][12][COUNTRY_NAME] = desc(2, 3, STR);
    d[1][12][REGION] = desc(3, 0, STR);
    d[1][12][CITY] = desc(4, 0, STR);
    d[1][12][LATITUDE] = desc(5, INLINE, F32);
    d[1][12][LONGITUDE] = desc(6, INLINE, F32);
    d[1][12][ZIP_CODE] = desc(7, 0, STR);
    d[1][12][TIME_ZONE] = desc(8, 0, STR);
    d[1][12][ISP] = desc(9, 0, STR);
    d[1][12][DOMAIN] = desc(10, 0, STR);
    d[1][12][COLUMN_COUNT_SLOT] = 10;

    // IP2Location DB13
    d[1][13][TAG_SLOT] = 1 << 8 | 13;
    d[1][13][COUNTRY_CODE] = desc(2, 0, STR);
    d[1][13][COUNTRY_NAME] = desc(2, 3, STR);
    d[1][13][REGION] = desc(3, 0, STR);
    d[1][13][CITY] = desc(4, 0, STR);
    d[1][13][LATITUDE] = desc(5, INLINE, F32);
    d[1][13][LONGITUDE] = desc(6, INLINE, F32);
    d[1][13][TIME_ZONE] = desc(7, 0, STR);
    d[1][13][NET_SPEED] = desc(8, 0, STR);
    d[1][13][COLUMN_COUNT_SLOT] = 8;

    // IP2Location DB14
    d[1][14][TAG_SLOT] = 1 << 8 | 14;
    d[1][14][COUNTRY_CODE] = desc(2, 0, STR);
    d[1][14][COUNTRY_NAME] = desc(2, 3, STR);
    d[1][14][REGION] = desc(3, 0, STR);
    d[1][14][CITY] = desc(4, 0, STR);
    d[1][14][LATITUDE] = desc(5, INLINE, F32);
    d[1][14][LONGITUDE] = desc(6, INLINE, F32);
    d[1][14][ZIP_CODE] = desc(7, 0, STR);
    d[1][14][TIME_ZONE] = desc(8, 0, STR);
    d[1][14][ISP] = desc(9, 0, STR);
    d[1][14][DOMAIN] = desc(10, 0, STR);
    d[1][14][NET_SPEED] = desc(11, 0, STR);
    d[1][14][COLUMN_COUNT_SLOT] = 11;

    // IP2Location DB15
    d[1][15][TAG_SLOT] = 1 << 8 | 15;
    d[1][15][COUNTRY_CODE] = desc(2, 0, STR);
    d[1][15][COUNTRY_NAME] = desc(2, 3, STR);
    d[1][15][REGION] = desc(3, 0, STR);
    d[1][15][CITY] = desc(4, 0, STR);
    d[1][15][LATITUDE] = desc(5, INLINE, F32);
    d[1][15][LONGITUDE] = desc(6, INLINE, F32);
    d[1][15][ZIP_CODE] = desc(7, 0, STR);
    d[1][15][TIME_ZONE] = desc(8, 0, STR);
    d[1][15][IDD_CODE] = desc(9, 0, STR);
    d[1][15][AREA_CODE] = desc(10, 0, STR);
    d[1][15][COLUMN_COUNT_SLOT] = 10;

    // IP2Location DB16
    d[1][16][TAG_SLOT] = 1 << 8 | 16;
    d[1][16][COUNTRY_CODE] = desc(2, 0, STR);
    d[1][16][COUNTRY_NAME] = desc(2, 3, STR);
    d[1][16][REGION] = desc(3, 0, STR);
    d[1][16][CITY] = desc(4, 0, STR);
    d[1][16][LATITUDE] = desc(5, INLINE, F32);
    d[1][16][LONGITUDE] = desc(6, INLINE, F32);
    d[1][16][ZIP_CODE] = desc(7, 0, STR);
    d[1][16][TIME_ZONE] = desc(8, 0, STR);
    d[1][16][ISP] = desc(9, 0, STR);
    d[1][16][DOMAIN] = desc(10, 0, STR);
    d[1][16][NET_SPEED] = desc(11, 0, STR);
    d[1][16][IDD_CODE] = desc(12, 0, STR);
    d[1][16][AREA_CODE] = desc(13, 0, STR);
    d[1][16][COLUMN_COUNT_SLOT] = 13;

    // IP2Location DB17
    d[1][17][TAG_SLOT] = 1 << 8 | 17;
    d[1][17][COUNTRY_CODE] = desc(2, 0, STR);
    d[1][17][COUNTRY_NAME] = desc(2, 3, STR);
    d[1][17][REGION] = desc(3, 0, STR);
    d[1][17][CITY] = desc(4, 0, STR);
    d[1][17][LATITUDE] = desc(5, INLINE, F32);
    d[1][17][LONGITUDE] = desc(6, INLINE, F32);
    d[1][17][TIME_ZONE] = desc(7, 0, STR);
    d[1][17][NET_SPEED] = desc(8, 0, STR);
    d[1][17][WEATHER_STATION_CODE] = desc(9, 0, STR);
    d[1][17][WEATHER_STATION_NAME] = desc(10, 0, STR);
    d[1][17][COLUMN_COUNT_SLOT] = 10;

    // IP2Location DB18
    d[1][18][TAG_SLOT] = 1 << 8 | 18;
    d[1][18][COUNTRY_CODE] = desc(2, 0, STR);
    d[1][18][COUNTRY_NAME] = desc(2, 3, STR);
    d[1][18][REGION] = desc(3, 0, STR);
    d[1][18][CITY] = desc(4, 0, STR);
    d[1][18][LATITUDE] = desc(5, INLINE, F32);
    d[1][18][LONGITUDE] = desc(6, INLINE, F32);
    d[1][18][ZIP_CODE] = desc(7, 0, STR);
    d[1][18][TIME_ZONE] = desc(8, 0, STR);
    d[1][18][ISP] = desc(9, 0, STR);
    d[1][18][DOMAIN] = desc(10, 0, STR);
    d[1][18][NET_SPEED] = desc(11, 0, STR);
    d[1][18][IDD_CODE] = desc(12, 0, STR);
    d[1][18][AREA_CODE] = desc(13, 0, STR);
    d[1][18][WEATHER_STATION_CODE] = desc(14, 0, STR);
    d[1][18][WEATHER_STATION_NAME] = desc(15, 0, STR);
    d[1][18][COLUMN_COUNT_SLOT] = 15;

    // IP2Location DB19
    d[1][19][TAG_SLOT] = 1 << 8 | 19;
    d[1][19][COUNTRY_CODE] = desc(2, 0, STR);
    d[1][19][COUNTRY_NAME] = desc(2, 3, STR);
    d[1][19][REGION] = desc(3, 0, STR);
    d[1][19][CITY] = desc(4, 0, STR);
    d[1][19][LATITUDE] = desc(5, INLINE, F32);
    d[1][19][LONGITUDE] = desc(6, INLINE, F32);
    d[1][19][ISP] = desc(7, 0, STR);
    d[1][19][DOMAIN] = desc(8, 0, STR);
    d[1][19][MCC] = desc(9, 0, STR);
    d[1][19][MNC] = desc(10, 0, STR);
    d[1][19][MOBILE_BRAND] = desc(11, 0, STR);
    d[1][19][COLUMN_COUNT_SLOT] = 11;

    // IP2Location DB20
    d[1][20][TAG_SLOT] = 1 << 8 | 20;
    d[1][20][COUNTRY_CODE] = desc(2, 0, STR);
    d[1][20][COUNTRY_NAME] = desc(2, 3, STR);
    d[1][20][REGION] = desc(3, 0, STR);
    d[1][20][CITY] = desc(4, 0, STR);
    d[1][20][LATITUDE] = desc(5, INLINE, F32);
    d[1][20][LONGITUDE] = desc(6, INLINE, F32);
    d[1][20][ZIP_CODE] = desc(7, 0, STR);
    d[1][20][TIME_ZONE] = desc(8, 0, STR);
    d[1][20][ISP] = desc(9, 0, STR);
    d[1][20][DOMAIN] = desc(10, 0, STR);
    d[1][20][NET_SPEED] = desc(11, 0, STR);
    d[1][20][IDD_CODE] = desc(12, 0, STR);
    d[1][20][AREA_CODE] = desc(13, 0, STR);
    d[1][20][WEATHER_STATION_CODE] = desc(14, 0, STR);
    d[1][20][WEATHER_STATION_NAME] = desc(15, 0, STR);
    d[1][20][MCC] = desc(16, 0, STR);
    d[1][20][MNC] = desc(17, 0, STR);
    d[1][20][MOBILE_BRAND] = desc(18, 0, STR);
    d[1][20][COLUMN_COUNT_SLOT] = 18;

    // IP2Location DB21
    d[1][21][TAG_SLOT] = 1 << 8 | 21;
    d[1][21][COUNTRY_CODE] = desc(2, 0, STR);
    d[1][21][COUNTRY_NAME] = desc(2, 3, STR);
    d[1][21][REGION] = desc(3, 0, STR);
    d[1][21][CITY] = desc(4, 0, STR);
    d[1][21][LATITUDE] = desc(5, INLINE, F32);
    d[1][21][LONGITUDE] = desc(6, INLINE, F32);
    d[1][21][ZIP_CODE] = desc(7, 0, STR);
    d[1][21][TIME_ZONE] = desc(8, 0, STR);
    d[1][21][IDD_CODE] = desc(9, 0, STR);
    d[1][21][AREA_CODE] = desc(10, 0, STR);
    d[1][21][ELEVATION] = desc(11, 0, STR);
    d[1][21][COLUMN_COUNT_SLOT] = 11;

    // IP2Location DB22
    d[1][22][TAG_SLOT] = 1 << 8 | 22;
    d[1][22][COUNTRY_CODE] = desc(2, 0, STR);
    d[1][22][COUNTRY_NAME] = desc(2, 3, STR);
    d[1][22][REGION] = desc(3, 0, STR);
    d[1][22][CITY] = desc(4, 0, STR);
    d[1][22][LATITUDE] = desc(5, INLINE, F32);
    d[1][22][LONGITUDE] = desc(6, INLINE, F32);
    d[1][22][ZIP_CODE] = desc(7, 0, STR);
    d[1][22][TIME_ZONE] = desc(8, 0, STR);
    d[1][22][ISP] = desc(9, 0, STR);
    d[1][22][DOMAIN] = desc(10, 0, STR);
    d[1][22][NET_SPEED] = desc(11, 0, STR);
    d[1][22][IDD_CODE] = desc(12, 0, STR);
    d[1][22][AREA_CODE] = desc(13, 0, STR);
    d[1][22][WEATHER_STATION_CODE] = desc(14, 0, STR);
    d[1][22][WEATHER_STATION_NAME] = desc(15, 0, STR);
    d[1][22][MCC] = desc(16, 0, STR);
    d[1][22][MNC] = desc(17, 0, STR);
    d[1][22][MOBILE_BRAND] = desc(18, 0, STR);
    d[1][22][ELEVATION] = desc(19, 0, STR);
    d[1][22][COLUMN_COUNT_SLOT] = 19;

    // IP2Location DB23
    d[1][23][TAG_SLOT] = 1 << 8 | 23;
    d[1][23][COUNTRY_CODE] = desc(2, 0, STR);
    d[1][23][COUNTRY_NAME] = desc(2, 3, STR);
    d[1][23][REGION] = desc(3, 0, STR);
    d[1][23][CITY] = desc(4, 0, STR);
    d[1][23][LATITUDE] = desc(5, INLINE, F32);
    d[1][23][LONGITUDE] = desc(6, INLINE, F32);
    d[1][23][ISP] = desc(7, 0, STR);
    d[1][23][DOMAIN] = desc(8, 0, STR);
    d[1][23][MCC] = desc(9, 0, STR);
    d[1][23][MNC] = desc(10, 0, STR);
    d[1][23][MOBILE_BRAND] = desc(11, 0, STR);
    d[1][23][USAGE_TYPE] = desc(12, 0, STR);
    d[1][23][COLUMN_COUNT_SLOT] = 12;

    // IP2Location DB24
    d[1][24][TAG_SLOT] = 1 << 8 | 24;
    d[1][24][COUNTRY_CODE] = desc(2, 0, STR);
    d[1][24][COUNTRY_NAME] = desc(2, 3, STR);
    d[1][24][REGION] = desc(3, 0, STR);
    d[1][24][CITY] = desc(4, 0, STR);
    d[1][24][LATITUDE] = desc(5, INLINE, F32);
    d[1][24][LONGITUDE] = desc(6, INLINE, F32);
    d[1][24][ZIP_CODE] = desc(7, 0, STR);
    d[1][24][TIME_ZONE] = desc(8, 0, STR);
    d[1][24][ISP] = desc(9, 0, STR);
    d[1][24][DOMAIN] = desc(10, 0, STR);
    d[1][24][NET_SPEED] = desc(11, 0, STR);
    d[1][24][IDD_CODE] = desc(12, 0, STR);
    d[1][24][AREA_CODE] = desc(13, 0, STR);
    d[1][24][WEATHER_STATION_CODE] = desc(14, 0, STR);
    d[1][24][WEATHER_STATION_NAME] = desc(15, 0, STR);
    d[1][24][MCC] = desc(16, 0, STR);
    d[1][24][MNC] = desc(17, 0, STR);
    d[1][24][MOBILE_BRAND] = desc(18, 0, STR);
    d[1][24][ELEVATION] = desc(19, 0, STR);
    d[1][24][USAGE_TYPE] = desc(20, 0, STR);
    d[1][24][COLUMN_COUNT_SLOT] = 20;

    // IP2Location DB25
    d[1][25][TAG_SLOT] = 1 << 8 | 25;
    d[1][25][COUNTRY_CODE] = desc(2, 0, STR);
    d[1][25][COUNTRY_NAME] = desc(2, 3, STR);
    d[1][25][REGION] = desc(3, 0, STR);
    d[1][25][CITY] = desc(4, 0, STR);
    d[1][25][LATITUDE] = desc(5, INLINE, F32);
    d[1][25][LONGITUDE] = desc(6, INLINE, F32);
    d[1][25][ZIP_CODE] = desc(7, 0, STR);
    d[1][25][TIME_ZONE] = desc(8, 0, STR);
    d[1][25][ISP] = desc(9, 0, STR);
    d[1][25][DOMAIN] = desc(10, 0, STR);
    d[1][25][NET_SPEED] = desc(11, 0, STR);
    d[1][25][IDD_CODE] = desc(12, 0, STR);
    d[1][25][AREA_CODE] = desc(13, 0, STR);
    d[1][25][WEATHER_STATION_CODE] = desc(14, 0, STR);
    d[1][25][WEATHER_STATION_NAME] = desc(15, 0, STR);
    d[1][25][MCC] = desc(16, 0, STR);
    d[1][25][MNC] = desc(17, 0, STR);
    d[1][25][MOBILE_BRAND] = desc(18, 0, STR);
    d[1][25][ELEVATION] = desc(19, 0, STR);
    d[1][25][USAGE_TYPE] = desc(20, 0, STR);
    d[1][25][ADDRESS_TYPE] = desc(21, 0, STR);
    d[1][25][CATEGORY] = desc(22, 0, STR);
    d[1][25][COLUMN_COUNT_SLOT] = 22;

    // IP2Proxy PX1
    d[2][1][TAG_SLOT] = 2 << 8 | 1;
    d[2][1][COUNTRY_CODE] = desc(2, 0, STR);
    d[2][1][COUNTRY_NAME] = desc(2, 3, STR);
    d[2][1][COLUMN_COUNT_SLOT] = 2;

    // IP2Proxy PX2
    d[2][2][TAG_SLOT] = 2 << 8 | 2;
    d[2][2][PROXY_TYPE] = desc(2, 0, STR);
    d[2][2][COUNTRY_CODE] = desc(3, 0, STR);
    d[2][2][COUNTRY_NAME] = desc(3, 3, STR);
    d[2][2][COLUMN_COUNT_SLOT] = 3;

    // IP2Proxy PX3
    d[2][3][TAG_SLOT] = 2 << 8 | 3;
    d[2][3][PROXY_TYPE] = desc(2, 0, STR);
    d[2][3][COUNTRY_CODE] = desc(3, 0, STR);
    d[2][3][COUNTRY_NAME] = desc(3, 3, STR);
    d[2][3][REGION] = desc(4, 0, STR);
    d[2][3][CITY] = desc(5, 0, STR);
    d[2][3][COLUMN_COUNT_SLOT] = 5;

    // IP2Proxy PX4
    d[2][4][TAG_SLOT] = 2 << 8 | 4;
    d[2][4][PROXY_TYPE] = desc(2, 0, STR);
    d[2][4][COUNTRY_CODE] = desc(3, 0, STR);
    d[2][4][COUNTRY_NAME] = desc(3, 3, STR);
    d[2][4][REGION] = desc(4, 0, STR);
    d[2][4][CITY] = desc(5, 0, STR);
    d[2][4][ISP] = desc(6, 0, STR);
    d[2][4][COLUMN_COUNT_SLOT] = 6;

    // IP2Proxy PX5
    d[2][5][TAG_SLOT] = 2 << 8 | 5;
    d[2][5][PROXY_TYPE] = desc(2, 0, STR);
    d[2][5][COUNTRY_CODE] = desc(3, 0, STR);
    d[2][5][COUNTRY_NAME] = desc(3, 3, STR);
    d[2][5][REGION] = desc(4, 0, STR);
    d[2][5][CITY] = desc(5, 0, STR);
    d[2][5][ISP] = desc(6, 0, STR);
    d[2][5][DOMAIN] = desc(7, 0, STR);
    d[2][5][COLUMN_COUNT_SLOT] = 7;

    // IP2Proxy PX6
    d[2][6][TAG_SLOT] = 2 << 8 | 6;
    d[2][6][PROXY_TYPE] = desc(2, 0, STR);
    d[2][6][COUNTRY_CODE] = desc(3, 0, STR);
    d[2][6][COUNTRY_NAME] = desc(3, 3, STR);
    d[2][6][REGION] = desc(4, 0, STR);
    d[2][6][CITY] = desc(5, 0, STR);
    d[2][6][ISP] = desc(6, 0, STR);
    d[2][6][DOMAIN] = desc(7, 0, STR);
    d[2][6][USAGE_TYPE] = desc(8, 0, STR);
    d[2][6][COLUMN_COUNT_SLOT] = 8;

    // IP2Proxy PX7
    d[2][7][TAG_SLOT] = 2 << 8 | 7;
    d[2][7][PROXY_TYPE] = desc(2, 0, STR);
    d[2][7][COUNTRY_CODE] = desc(3, 0, STR);
    d[2][7][COUNTRY_NAME] = desc(3, 3, STR);
    d[2][7][REGION] = desc(4, 0, STR);
    d[2][7][CITY] = desc(5, 0, STR);
    d[2][7][ISP] = desc(6, 0, STR);
    d[2][7][DOMAIN] = desc(7, 0, STR);
    d[2][7][USAGE_TYPE] = desc(8, 0, STR);
    d[2][7][ASN] = desc(9, 0, STR);
    d[2][7][AS_NAME] = desc(10, 0, STR);
    d[2][7][COLUMN_COUNT_SLOT] = 10;

    // IP2Proxy PX8
    d[2][8][TAG_SLOT] = 2 << 8 | 8;
    d[2][8][PROXY_TYPE] = desc(2, 0, STR);
    d[2][8][COUNTRY_CODE] = desc(3, 0, STR);
    d[2][8][COUNTRY_NAME] = desc(3, 3, STR);
    d[2][8][REGION] = desc(4, 0, STR);
    d[2][8][CITY] = desc(5, 0, STR);
    d[2][8][ISP] = desc(6, 0, STR);
    d[2][8][DOMAIN] = desc(7, 0, STR);
    d[2][8][USAGE_TYPE] = desc(8, 0, STR);
    d[2][8][ASN] = desc(9, 0, STR);
    d[2][8][AS_NAME] = desc(10, 0, STR);
    d[2][8][LAST_SEEN] = desc(11, 0, STR);
    d[2][8][COLUMN_COUNT_SLOT] = 11;

    // IP2Proxy PX9
    d[2][9][TAG_SLOT] = 2 << 8 | 9;
    d[2][9][PROXY_TYPE] = desc(2, 0, STR);
    d[2][9][COUNTRY_CODE] = desc(3, 0, STR);
    d[2][9][COUNTRY_NAME] = desc(3, 3, STR);
    d[2][9][REGION] = desc(4, 0, STR);
    d[2][9][CITY] = desc(5, 0, STR);
    d[2][9][ISP] = desc(6, 0, STR);
    d[2][9][DOMAIN] = desc(7, 0, STR);
    d[2][9][USAGE_TYPE] = desc(8, 0, STR);
    d[2][9][ASN] = desc(9, 0, STR);
    d[2][9][AS_NAME] = desc(10, 0, STR);
    d[2][9][LAST_SEEN] = desc(11, 0, STR);
    d[2][9][THREAT] = desc(12, 0, STR);
    d[2][9][COLUMN_COUNT_SLOT] = 12;

    // IP2Proxy PX10
    d[2][10][TAG_SLOT] = 2 << 8 | 10;
    d[2][10][PROXY_TYPE] = desc(2, 0, STR);
    d[2][10][COUNTRY_CODE] = desc(3, 0, STR);
    d[2][10][COUNTRY_NAME] = desc(3, 3, STR);
    d[2][10][REGION] = desc(4, 0, STR);
    d[2][10][CITY] = desc(5, 0, STR);
    d[2][10][ISP] = desc(6, 0, STR);
    d[2][10][DOMAIN] = desc(7, 0, STR);
    d[2][10][USAGE_TYPE] = desc(8, 0, STR);
    d[2][10][ASN] = desc(9, 0, STR);
    d[2][10][AS_NAME] = desc(10, 0, STR);
    d[2][10][LAST_SEEN] = desc(11, 0, STR);
    d[2][10][THREAT] = desc(12, 0, STR);
    d[2][10][COLUMN_COUNT_SLOT] = 12;

    // IP2Proxy PX11
    d[2][11][TAG_SLOT] = 2 << 8 | 11;
    d[2][11][PROXY_TYPE] = desc(2, 0, STR);
    d[2][11][COUNTRY_CODE] = desc(3, 0, STR);
    d[2][11][COUNTRY_NAME] = desc(3, 3, STR);
    d[2][11][REGION] = desc(4, 0, STR);
    d[2][11][CITY] = desc(5, 0, STR);
    d[2][11][ISP] = desc(6, 0, STR);
    d[2][11][DOMAIN] = desc(7, 0, STR);
    d[2][11][USAGE_TYPE] = desc(8, 0, STR);
    d[2][11][ASN] = desc(9, 0, STR);
    d[2][11][AS_NAME] = desc(10, 0, STR);
    d[2][11][LAST_SEEN] = desc(11, 0, STR);
    d[2][11][THREAT] = desc(12, 0, STR);
    d[2][11][PROVIDER] = desc(13, 0, STR);
    d[2][11][COLUMN_COUNT_SLOT] = 13;

    d
}
