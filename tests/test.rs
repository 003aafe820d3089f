use std::collections::HashMap;
use std::net::IpAddr;

use ip2bin::{Database, Error, Field, Product, Record, Value};

/// In-memory positional reader backing the synthetic databases.
struct Mem(Vec<u8>);

impl positioned_io::ReadAt for Mem {
    fn read_at(&self, pos: u64, buf: &mut [u8]) -> std::io::Result<usize> {
        let data = &self.0;
        if pos >= data.len() as u64 {
            return Ok(0);
        }
        let start = pos as usize;
        let n = buf.len().min(data.len() - start);
        buf[..n].copy_from_slice(&data[start..start + n]);
        Ok(n)
    }
}

fn open(img: Vec<u8>) -> Database<Mem> {
    Database::new(Mem(img)).unwrap()
}

/// Builds a syntactically valid BIN image in memory: 64-byte header, packed
/// IPv4/IPv6 row arrays each ending in a sentinel row, an optional IPv4
/// index, and a deduplicated string pool.
struct Bin {
    product: u8,
    db_type: u8,
    columns: u8,
    year: u8,
    month: u8,
    day: u8,
    v4: Vec<(u32, Vec<Cell>)>,
    v6: Vec<(u128, Vec<Cell>)>,
    v4_index: bool,
}

#[derive(Clone)]
enum Cell {
    /// Pointer column referencing a lone length-prefixed string.
    Str(String),
    /// Pointer column referencing a country code + name payload; the code
    /// must be two bytes so the name starts at offset 3.
    Pair(String, String),
    /// Inline little-endian float.
    F32(f32),
}

fn s(v: &str) -> Cell {
    Cell::Str(v.to_owned())
}

fn pair(code: &str, name: &str) -> Cell {
    Cell::Pair(code.to_owned(), name.to_owned())
}

impl Bin {
    fn new(product: u8, db_type: u8, columns: u8) -> Bin {
        Bin {
            product,
            db_type,
            columns,
            year: 24,
            month: 5,
            day: 1,
            v4: Vec::new(),
            v6: Vec::new(),
            v4_index: false,
        }
    }

    fn v4_row_size(&self) -> usize {
        4 + (usize::from(self.columns) - 1) * 4
    }

    fn v6_row_size(&self) -> usize {
        16 + (usize::from(self.columns) - 1) * 4
    }

    /// Row index whose range contains the IPv4 address.
    fn v4_row_of(&self, addr: u32) -> u32 {
        self.v4
            .iter()
            .rposition(|(from, _)| *from <= addr)
            .unwrap_or(0) as u32
    }

    fn build(&self) -> Vec<u8> {
        let colbytes = (usize::from(self.columns) - 1) * 4;
        let v4_off = 64usize;
        let v4_len = (self.v4.len() + 1) * self.v4_row_size();
        let v6_off = v4_off + v4_len;
        let v6_len = (self.v6.len() + 1) * self.v6_row_size();
        let idx_off = v6_off + v6_len;
        let idx_len = if self.v4_index { 65536 * 8 } else { 0 };
        let pool_off = idx_off + idx_len;

        let mut pool: Vec<u8> = Vec::new();
        let mut seen: HashMap<Vec<u8>, u32> = HashMap::new();
        let mut cell_bytes = |cell: &Cell| -> [u8; 4] {
            let payload = match cell {
                Cell::F32(v) => return v.to_le_bytes(),
                Cell::Str(v) => {
                    assert!(v.len() <= 255);
                    let mut p = vec![v.len() as u8];
                    p.extend_from_slice(v.as_bytes());
                    p
                }
                Cell::Pair(code, name) => {
                    assert_eq!(code.len(), 2, "country codes are two bytes");
                    assert!(name.len() <= 255);
                    let mut p = vec![2];
                    p.extend_from_slice(code.as_bytes());
                    p.push(name.len() as u8);
                    p.extend_from_slice(name.as_bytes());
                    p
                }
            };
            let off = *seen.entry(payload.clone()).or_insert_with(|| {
                let off = (pool_off + pool.len()) as u32;
                pool.extend_from_slice(&payload);
                off
            });
            off.to_le_bytes()
        };

        let mut img = vec![0u8; 64];
        img[0] = self.db_type;
        img[1] = self.columns;
        img[2] = self.year;
        img[3] = self.month;
        img[4] = self.day;
        img[5..9].copy_from_slice(&(self.v4.len() as u32).to_le_bytes());
        img[9..13].copy_from_slice(&(v4_off as u32 + 1).to_le_bytes());
        img[13..17].copy_from_slice(&(self.v6.len() as u32).to_le_bytes());
        img[17..21].copy_from_slice(&(v6_off as u32 + 1).to_le_bytes());
        if self.v4_index {
            img[21..25].copy_from_slice(&(idx_off as u32 + 1).to_le_bytes());
        }
        img[29] = self.product;
        img[30] = 1;

        for (from, cells) in &self.v4 {
            assert_eq!(cells.len(), usize::from(self.columns) - 1);
            img.extend_from_slice(&from.to_le_bytes());
            for cell in cells {
                img.extend_from_slice(&cell_bytes(cell));
            }
        }
        img.extend_from_slice(&u32::MAX.to_le_bytes());
        img.extend_from_slice(&vec![0u8; colbytes]);

        for (from, cells) in &self.v6 {
            assert_eq!(cells.len(), usize::from(self.columns) - 1);
            img.extend_from_slice(&from.to_le_bytes());
            for cell in cells {
                img.extend_from_slice(&cell_bytes(cell));
            }
        }
        img.extend_from_slice(&u128::MAX.to_le_bytes());
        img.extend_from_slice(&vec![0u8; colbytes]);

        if self.v4_index {
            for prefix in 0u32..65536 {
                let lower = self.v4_row_of(prefix << 16);
                let upper = self.v4_row_of(prefix << 16 | 0xFFFF);
                img.extend_from_slice(&lower.to_le_bytes());
                img.extend_from_slice(&upper.to_le_bytes());
            }
        }

        img.extend_from_slice(&pool);
        let size = (img.len() as u32).to_le_bytes();
        img[31..35].copy_from_slice(&size);
        // slack after the pool so reads that run past the sentinel rows of a
        // tiny image still succeed, as they do in real multi-section files
        img.extend_from_slice(&[0u8; 16]);
        img
    }
}

fn geo11(
    cc: &str,
    cn: &str,
    region: &str,
    city: &str,
    lat: f32,
    lon: f32,
    zip: &str,
    tz: &str,
) -> Vec<Cell> {
    vec![
        pair(cc, cn),
        s(region),
        s(city),
        Cell::F32(lat),
        Cell::F32(lon),
        s(zip),
        s(tz),
    ]
}

fn filler11() -> Vec<Cell> {
    geo11("--", "-", "-", "-", 0.0, 0.0, "-", "-")
}

fn db11() -> Bin {
    let mut bin = Bin::new(1, 11, 8);
    bin.v4 = vec![
        (0, filler11()),
        (
            0x0101_0100, // 1.1.1.0 - 1.1.1.255
            geo11(
                "US",
                "United States of America",
                "California",
                "Los Angeles",
                34.05286,
                -118.24357,
                "90001",
                "-07:00",
            ),
        ),
        (0x0101_0200, filler11()),
        (
            0x0808_0800, // 8.8.8.0 - 8.8.8.255
            geo11(
                "US",
                "United States of America",
                "California",
                "Mountain View",
                37.40599,
                -122.078514,
                "94043",
                "-07:00",
            ),
        ),
        (0x0808_0900, filler11()),
        (
            0xc000_0200, // 192.0.2.0 - 192.0.2.255
            geo11(
                "US",
                "United States of America",
                "California",
                "Example Net",
                34.5,
                -118.25,
                "90002",
                "-07:00",
            ),
        ),
        (0xc000_0300, filler11()),
    ];
    bin.v6 = vec![
        (0, filler11()),
        (
            0x2606_4700_4700_0000_0000_0000_0000_0000,
            geo11(
                "US",
                "United States of America",
                "California",
                "Cloud Anycast",
                37.75,
                -97.8,
                "-",
                "-05:00",
            ),
        ),
        (0x2606_4700_4800_0000_0000_0000_0000_0000, filler11()),
    ];
    bin
}

fn db3(rows: u32) -> Bin {
    let mut bin = Bin::new(1, 3, 4);
    bin.v4.push((0, vec![pair("--", "-"), s("-"), s("-")]));
    for i in 1..rows {
        bin.v4.push((
            i << 24,
            vec![
                pair("US", "United States of America"),
                s(&format!("region-{i}")),
                s(&format!("city-{i}")),
            ],
        ));
    }
    bin
}

fn px3() -> Bin {
    let mut bin = Bin::new(2, 3, 5);
    bin.v4 = vec![
        (0, vec![s("-"), pair("--", "-"), s("-"), s("-")]),
        (
            0x0100_0000, // 1.0.0.0 - 1.0.0.255
            vec![
                s("VPN"),
                pair("AU", "Australia"),
                s("Queensland"),
                s("Brisbane"),
            ],
        ),
        (0x0100_0100, vec![s("-"), pair("--", "-"), s("-"), s("-")]),
    ];
    bin
}

fn lookup<'db>(db: &'db Database<Mem>, addr: &str) -> Record<'db, Mem> {
    db.lookup(addr.parse::<IpAddr>().unwrap())
        .unwrap()
        .unwrap_or_else(|| panic!("no record for {addr}"))
}

fn get_str(db: &Database<Mem>, addr: &str, field: Field) -> Option<String> {
    lookup(db, addr).get_str(field).unwrap()
}

#[test]
fn test_open_info() {
    let db = open(db11().build());

    assert_eq!(db.product(), Product::IP2Location);
    assert_eq!(db.db_type(), 11);
    assert_eq!(db.version(), "2024-05-01");
    assert_eq!((db.year(), db.month(), db.day()), (24, 5, 1));
    assert_eq!(db.column_count(), 8);
    assert_eq!(db.rows_ipv4(), 7);
    assert_eq!(db.rows_ipv6(), 3);
    assert!(db.has_ipv4());
    assert!(db.has_ipv6());

    assert!(db.has(Field::CountryCode));
    assert!(db.has(Field::TimeZone));
    assert!(!db.has(Field::Isp));
    assert!(!db.has(Field::ProxyType));

    assert_eq!(
        db.to_string(),
        "IP2Location DB11 2024-05-01 [city,country_code,country_name,latitude,longitude,\
         region,time_zone,zip_code] (IPv4+IPv6)"
    );
}

#[test]
fn test_lookup_ipv4() {
    let db = open(db11().build());

    let record = lookup(&db, "1.1.1.1");
    assert_eq!(
        record.get(Field::CountryCode).unwrap(),
        Some(Value::Str("US".to_owned()))
    );
    assert_eq!(
        record.get_str(Field::CountryName).unwrap().as_deref(),
        Some("United States of America")
    );
    assert_eq!(
        record.get_str(Field::Region).unwrap().as_deref(),
        Some("California")
    );
    assert_eq!(
        record.get_str(Field::City).unwrap().as_deref(),
        Some("Los Angeles")
    );
    assert_eq!(
        record.get_str(Field::ZipCode).unwrap().as_deref(),
        Some("90001")
    );
    assert_eq!(
        record.get_str(Field::TimeZone).unwrap().as_deref(),
        Some("-07:00")
    );

    let lat = record.get_f32(Field::Latitude).unwrap().unwrap();
    let lon = record.get_f32(Field::Longitude).unwrap().unwrap();
    assert!((lat - 34.05286).abs() < 1e-4, "{lat}");
    assert!((lon + 118.24357).abs() < 1e-4, "{lon}");

    assert_eq!(
        get_str(&db, "8.8.8.8", Field::City).as_deref(),
        Some("Mountain View")
    );
    assert_eq!(
        get_str(&db, "8.8.8.255", Field::City).as_deref(),
        Some("Mountain View")
    );
    assert_eq!(get_str(&db, "8.8.9.0", Field::City).as_deref(), Some("-"));
}

#[test]
fn test_lookup_ipv6() {
    let db = open(db11().build());

    assert_eq!(
        get_str(&db, "2606:4700:4700::1111", Field::City).as_deref(),
        Some("Cloud Anycast")
    );
    assert_eq!(get_str(&db, "::1", Field::City).as_deref(), Some("-"));
}

#[test]
fn test_normalization_identity() {
    let db = open(db11().build());

    // 8.8.8.8 plain, v4-mapped, 6to4, and teredo (the low 32 bits hold the
    // inverted client address)
    let reference = lookup(&db, "8.8.8.8").to_json().unwrap();
    for addr in [
        "::ffff:8.8.8.8",
        "2002:808:808::",
        "2001:0:4136:e378:8000:63bf:f7f7:f7f7",
    ] {
        assert_eq!(lookup(&db, addr).to_json().unwrap(), reference, "{addr}");
    }

    let reference = lookup(&db, "192.0.2.45").to_json().unwrap();
    let teredo = lookup(&db, "2001:0:4136:e378:8000:63bf:3fff:fdd2");
    assert_eq!(teredo.to_json().unwrap(), reference);
    assert_eq!(
        teredo.get_str(Field::City).unwrap().as_deref(),
        Some("Example Net")
    );
}

#[test]
fn test_row_monotonicity() {
    let bin = db11();
    let img = bin.build();
    let row_size = bin.v4_row_size();
    let mut previous = None;
    for i in 0..=bin.v4.len() {
        let off = 64 + i * row_size;
        let from = u32::from_le_bytes(img[off..off + 4].try_into().unwrap());
        if let Some(previous) = previous {
            assert!(previous < from, "row {i} not ascending");
        }
        previous = Some(from);
    }
}

#[test]
fn test_coverage() {
    let bin = db3(40);
    let db = open(bin.build());

    for (i, (from, _)) in bin.v4.iter().enumerate() {
        let to = match bin.v4.get(i + 1) {
            Some((next, _)) => *next,
            None => u32::MAX,
        };
        let expected = match i {
            0 => "-".to_owned(),
            _ => format!("city-{i}"),
        };
        for addr in [*from, to - 1] {
            let addr = IpAddr::from(std::net::Ipv4Addr::from(addr));
            let record = db.lookup(addr).unwrap().unwrap();
            assert_eq!(
                record.get_str(Field::City).unwrap().as_deref(),
                Some(expected.as_str()),
                "row {i}, addr {addr}"
            );
        }
    }
}

#[test]
fn test_index_agreement() {
    let mut bin = db3(40);
    bin.v4_index = true;
    let db = open(bin.build());

    // same coverage property, now narrowed through the 16-bit prefix index
    for (i, (from, _)) in bin.v4.iter().enumerate() {
        let to = match bin.v4.get(i + 1) {
            Some((next, _)) => *next,
            None => u32::MAX,
        };
        let expected = match i {
            0 => "-".to_owned(),
            _ => format!("city-{i}"),
        };
        for addr in [*from, to - 1, from + (to - 1 - from) / 2] {
            let addr = IpAddr::from(std::net::Ipv4Addr::from(addr));
            let record = db.lookup(addr).unwrap().unwrap();
            assert_eq!(
                record.get_str(Field::City).unwrap().as_deref(),
                Some(expected.as_str()),
                "row {i}, addr {addr}"
            );
        }
    }
}

#[test]
fn test_absent_fields() {
    let db = open(db3(4).build());

    assert!(!db.has(Field::Isp));
    let record = lookup(&db, "1.2.3.4");
    assert_eq!(record.get(Field::Isp).unwrap(), None);
    assert_eq!(record.get_str(Field::Isp).unwrap(), None);
    assert_eq!(record.get_f32(Field::Latitude).unwrap(), None);
}

#[test]
fn test_proxy_database() {
    let db = open(px3().build());

    assert_eq!(db.product(), Product::IP2Proxy);
    assert_eq!(db.db_type(), 3);

    let record = lookup(&db, "1.0.0.1");
    assert_eq!(
        record.get_str(Field::ProxyType).unwrap().as_deref(),
        Some("VPN")
    );
    assert_eq!(
        record.get_str(Field::CountryCode).unwrap().as_deref(),
        Some("AU")
    );
    assert_eq!(
        record.get_str(Field::CountryName).unwrap().as_deref(),
        Some("Australia")
    );
    assert_eq!(
        record.get_str(Field::Region).unwrap().as_deref(),
        Some("Queensland")
    );
    assert_eq!(
        record.get_str(Field::City).unwrap().as_deref(),
        Some("Brisbane")
    );

    assert_eq!(
        record.format(false, false),
        "IP2Proxy<PX3>{city=\"Brisbane\" country_code=\"AU\" country_name=\"Australia\" \
         proxy_type=\"VPN\" region=\"Queensland\"}"
    );
}

#[test]
fn test_format() {
    let db = open(db3(4).build());

    let record = lookup(&db, "1.2.3.4");
    assert_eq!(
        record.format(false, false),
        "IP2Location<DB3>{city=\"city-1\" country_code=\"US\" \
         country_name=\"United States of America\" region=\"region-1\"}"
    );
    assert_eq!(
        record.format(false, true),
        "IP2Location<DB3>{\n  city \"city-1\"\n  country_code \"US\"\n  \
         country_name \"United States of America\"\n  region \"region-1\"\n}"
    );
}

#[test]
fn test_json_object() {
    let db = open(db11().build());

    let obj = lookup(&db, "8.8.8.8").to_json().unwrap();
    let keys: Vec<&str> = obj.keys().map(String::as_str).collect();
    assert_eq!(
        keys,
        [
            "city",
            "country_code",
            "country_name",
            "latitude",
            "longitude",
            "region",
            "time_zone",
            "zip_code"
        ]
    );
    assert_eq!(obj["city"], serde_json::json!("Mountain View"));
    assert_eq!(obj["zip_code"], serde_json::json!("94043"));
    let lat = obj["latitude"].as_f64().unwrap();
    assert!((lat - 37.40599).abs() < 1e-4, "{lat}");
}

#[test]
fn test_elevation_parses_as_float() {
    // DB21 stores elevation as a decimal string
    let row = |elevation: &str| {
        vec![
            pair("CH", "Switzerland"),
            s("Zurich"),
            s("Zurich"),
            Cell::F32(47.5),
            Cell::F32(8.5),
            s("8001"),
            s("+01:00"),
            s("41"),
            s("44"),
            s(elevation),
        ]
    };
    let mut bin = Bin::new(1, 21, 11);
    bin.v4 = vec![
        (0, row("408")),
        (0x0100_0000, row("123.5")),
        (0x0200_0000, row("n/a")),
    ];
    let db = open(bin.build());

    let record = lookup(&db, "0.0.0.1");
    assert_eq!(record.get_f32(Field::Elevation).unwrap(), Some(408.0));
    assert_eq!(
        record.get_str(Field::Elevation).unwrap().as_deref(),
        Some("408")
    );

    let record = lookup(&db, "1.0.0.1");
    assert_eq!(record.get_f32(Field::Elevation).unwrap(), Some(123.5));

    // float column as a string uses the shortest round-trip form
    assert_eq!(
        record.get_str(Field::Latitude).unwrap().as_deref(),
        Some("47.5")
    );
    assert_eq!(record.get(Field::Latitude).unwrap(), Some(Value::F32(47.5)));

    let record = lookup(&db, "2.0.0.1");
    assert!(matches!(
        record.get_f32(Field::Elevation),
        Err(Error::Parse(_))
    ));
    assert_eq!(
        record.get_str(Field::Elevation).unwrap().as_deref(),
        Some("n/a")
    );
}

#[test]
fn test_header_errors() {
    let base = db11().build();

    let mut img = base.clone();
    img[0] = b'P';
    img[1] = b'K';
    assert!(matches!(Database::new(Mem(img)), Err(Error::Zipped)));

    let mut img = base.clone();
    img[3] = 13;
    assert!(matches!(Database::new(Mem(img)), Err(Error::Corrupt(_))));

    let mut img = base.clone();
    img[4] = 32;
    assert!(matches!(Database::new(Mem(img)), Err(Error::Corrupt(_))));

    let mut img = base.clone();
    img[2] = 20;
    assert!(matches!(Database::new(Mem(img)), Err(Error::TooOld(_))));

    let mut img = base.clone();
    img[29] = 9;
    assert!(matches!(Database::new(Mem(img)), Err(Error::Unsupported(_))));

    let mut img = base.clone();
    img[0] = 77;
    assert!(matches!(Database::new(Mem(img)), Err(Error::Unsupported(_))));

    // header column count contradicting the descriptor table
    let mut img = base.clone();
    img[1] = 9;
    assert!(matches!(Database::new(Mem(img)), Err(Error::Corrupt(_))));

    let img = base[..10].to_vec();
    assert!(matches!(Database::new(Mem(img)), Err(Error::Corrupt(_))));
}

#[test]
fn test_short_string_payload() {
    let bin = db11();
    let mut img = bin.build();

    // repoint the zip_code cell of the 1.1.1.0 row (row 1, column 7) at a
    // payload whose length byte promises more data than the file holds
    let cell = 64 + bin.v4_row_size() + 4 + (7 - 2) * 4;
    let truncated = img.len() as u32;
    img[cell..cell + 4].copy_from_slice(&truncated.to_le_bytes());
    img.push(200);

    let db = open(img);
    let record = lookup(&db, "1.1.1.1");
    assert!(matches!(record.get(Field::ZipCode), Err(Error::Short)));
    // other fields in the same record still decode
    assert_eq!(
        record.get_str(Field::City).unwrap().as_deref(),
        Some("Los Angeles")
    );
}

#[test]
fn test_missing_ranges() {
    // no row covers the bottom of the space
    let mut bin = Bin::new(1, 3, 4);
    bin.v4 = vec![
        (
            0x0100_0000,
            vec![pair("US", "United States of America"), s("r"), s("c")],
        ),
        (0x0200_0000, vec![pair("--", "-"), s("-"), s("-")]),
    ];
    let db = open(bin.build());

    assert!(db.lookup("0.0.0.1".parse().unwrap()).unwrap().is_none());
    assert!(db.lookup("1.0.0.1".parse().unwrap()).unwrap().is_some());

    // no IPv6 rows at all: IPv6 misses, IPv4 still resolves
    assert!(!db.has_ipv6());
    assert!(db.lookup("2606:4700::1".parse().unwrap()).unwrap().is_none());
    assert!(db
        .lookup("::ffff:1.0.0.1".parse().unwrap())
        .unwrap()
        .is_some());

    // the top of the address space is never contained by a range
    assert!(db
        .lookup("255.255.255.255".parse().unwrap())
        .unwrap()
        .is_none());
}

fn xorshift(state: &mut u64) -> u64 {
    *state ^= *state << 13;
    *state ^= *state >> 7;
    *state ^= *state << 17;
    *state
}

#[test]
fn test_random_addresses_never_fail() {
    let db = open(db11().build());

    let mut state = 0x2545_f491_4f6c_dd1d;
    for _ in 0..500 {
        let hi = xorshift(&mut state);
        let lo = xorshift(&mut state);
        let addr = IpAddr::from(std::net::Ipv6Addr::from(
            u128::from(hi) << 64 | u128::from(lo),
        ));
        db.lookup(addr).unwrap();
        let addr = IpAddr::from(std::net::Ipv4Addr::from(lo as u32));
        db.lookup(addr).unwrap();
    }
}

#[test]
fn test_corrupted_images_never_panic() {
    let base = db11().build();
    let addrs: Vec<IpAddr> = ["1.1.1.1", "8.8.8.8", "2606:4700:4700::1111", "::1"]
        .iter()
        .map(|a| a.parse().unwrap())
        .collect();

    let mut state = 0x9e37_79b9_7f4a_7c15;
    for _ in 0..200 {
        let mut img = base.clone();
        let pos = (xorshift(&mut state) as usize) % img.len();
        img[pos] ^= (xorshift(&mut state) as u8) | 1;
        if let Ok(db) = Database::new(Mem(img)) {
            for addr in &addrs {
                // reads may fail, but must never panic
                if let Ok(Some(record)) = db.lookup(*addr) {
                    for field in Field::ALL {
                        let _ = record.get(field);
                    }
                }
            }
        }
    }
}

#[test]
fn test_shared_handle_across_threads() {
    let db = open(db11().build());

    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                for _ in 0..50 {
                    let record = lookup(&db, "8.8.8.8");
                    assert_eq!(
                        record.get_str(Field::City).unwrap().as_deref(),
                        Some("Mountain View")
                    );
                }
            });
        }
    });
}
