//! Schema parser and code generator for the descriptor tables.
//!
//! The on-disk column layout of every database variant is described by the
//! schema texts in `src/gen/schema/`. This module parses and validates them,
//! builds the descriptor tables in memory, and renders `src/tables.rs`. The
//! committed tables are compared slot-for-slot against a fresh build by the
//! test suite, so the schema text stays the single source of truth.
//!
//! This module is not part of the supported API; it exists for the
//! `tablegen` binary and the tests.

use std::fmt::Write as _;

use thiserror::Error;

use crate::field::{FieldDesc, Storage, INLINE};

/// Field registry schema text.
pub const FIELDS_SCHEMA: &str = include_str!("schema/fields.txt");

/// Per-product schema texts.
pub const PRODUCT_SCHEMAS: [&str; 2] = [
    include_str!("schema/ip2location.txt"),
    include_str!("schema/ip2proxy.txt"),
];

/// A schema validation failure, with the offending line where applicable.
#[derive(Error, Debug)]
#[error("schema error: {0}")]
pub struct SchemaError(String);

fn fail<T>(msg: impl Into<String>) -> Result<T, SchemaError> {
    Err(SchemaError(msg.into()))
}

/// Storage type of a schema column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    /// Length-prefixed string behind a pointer column.
    Str,
    /// Little-endian 32-bit float.
    F32,
}

/// One entry of the field registry.
#[derive(Debug)]
pub struct FieldDef {
    /// Rust identifier, like `CountryCode`.
    pub variant: String,
    /// Column name, like `country_code`.
    pub column: String,
}

/// One column line of a product schema.
#[derive(Debug)]
pub struct ColumnDef {
    /// Storage type.
    pub ty: ColumnType,
    /// Pointer offset; `None` marks an inline column.
    pub ptr: Option<u8>,
    /// 1-based field number in the registry.
    pub field: usize,
    /// Column number per database type, indexed by `type - 1`; 0 = absent.
    pub positions: Vec<u8>,
}

/// A parsed product schema.
#[derive(Debug)]
pub struct ProductDef {
    /// Product code from the file header.
    pub code: u8,
    /// Product name, like `IP2Location`.
    pub name: String,
    /// Type prefix, like `DB`.
    pub prefix: String,
    /// Highest database type.
    pub type_max: u8,
    /// Column definitions.
    pub columns: Vec<ColumnDef>,
}

/// A fully parsed and validated schema.
#[derive(Debug)]
pub struct Schema {
    /// Field registry, in field-number order.
    pub fields: Vec<FieldDef>,
    /// Products, in code order.
    pub products: Vec<ProductDef>,
}

fn valid_variant_name(s: &str) -> bool {
    let mut chars = s.chars();
    chars.next().is_some_and(|c| c.is_ascii_uppercase())
        && chars.all(|c| c.is_ascii_alphanumeric())
}

fn valid_column_name(s: &str) -> bool {
    let mut chars = s.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_lowercase() || c == '_')
        && chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}

fn valid_prefix(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_uppercase())
}

fn data_lines(src: &str) -> impl Iterator<Item = (usize, &str)> {
    src.lines()
        .enumerate()
        .map(|(n, l)| (n + 1, l.trim()))
        .filter(|(_, l)| !l.is_empty() && !l.starts_with('#'))
}

/// Parse the embedded schema texts.
pub fn parse() -> Result<Schema, SchemaError> {
    parse_schema(FIELDS_SCHEMA, &PRODUCT_SCHEMAS)
}

/// Parse and validate a field registry plus product schemas.
pub fn parse_schema(fields_src: &str, product_srcs: &[&str]) -> Result<Schema, SchemaError> {
    let fields = parse_fields(fields_src)?;

    let mut products = Vec::new();
    for src in product_srcs {
        products.push(parse_product(src, &fields)?);
    }
    products.sort_by_key(|p| p.code);
    for (i, p) in products.iter().enumerate() {
        if usize::from(p.code) != i + 1 {
            return fail(format!(
                "product codes must be sequential from 1: expected {}, got {} ({})",
                i + 1,
                p.code,
                p.name
            ));
        }
    }

    Ok(Schema { fields, products })
}

fn parse_fields(src: &str) -> Result<Vec<FieldDef>, SchemaError> {
    let mut fields: Vec<FieldDef> = Vec::new();
    for (lineno, line) in data_lines(src) {
        let mut words = line.split_whitespace();
        let (Some(variant), Some(column), None) = (words.next(), words.next(), words.next())
        else {
            return fail(format!(
                "fields line {lineno}: expected variant name and column name"
            ));
        };
        if !valid_variant_name(variant) {
            return fail(format!("fields line {lineno}: invalid variant name {variant:?}"));
        }
        if !valid_column_name(column) {
            return fail(format!("fields line {lineno}: invalid column name {column:?}"));
        }
        if fields.iter().any(|f| f.variant == variant) {
            return fail(format!("fields line {lineno}: duplicate variant {variant:?}"));
        }
        if fields.iter().any(|f| f.column == column) {
            return fail(format!("fields line {lineno}: duplicate column {column:?}"));
        }
        fields.push(FieldDef {
            variant: variant.to_owned(),
            column: column.to_owned(),
        });
    }
    if fields.is_empty() {
        return fail("field registry is empty");
    }
    Ok(fields)
}

fn parse_product(src: &str, fields: &[FieldDef]) -> Result<ProductDef, SchemaError> {
    let mut lines = data_lines(src);

    let Some((lineno, header)) = lines.next() else {
        return fail("product schema is empty");
    };
    let mut words = header.split_whitespace();
    let code: u8 = match words.next().map(str::parse) {
        Some(Ok(code)) if code >= 1 => code,
        _ => return fail(format!("line {lineno}: expected product code >= 1")),
    };
    let Some(name) = words.next().filter(|n| valid_variant_name(n)) else {
        return fail(format!("line {lineno}: expected product name"));
    };
    let Some(prefix) = words.next().filter(|p| valid_prefix(p)) else {
        return fail(format!("line {lineno}: expected product type prefix"));
    };
    let mut type_max = 0u8;
    for word in words {
        match word.parse::<u8>() {
            Ok(t) if t >= 1 && t == type_max + 1 => type_max = t,
            _ => {
                return fail(format!(
                    "line {lineno}: database types must be sequential from 1, got {word:?}"
                ))
            }
        }
    }
    if type_max == 0 {
        return fail(format!("line {lineno}: product has no database types"));
    }

    let mut columns: Vec<ColumnDef> = Vec::new();
    for (lineno, line) in lines {
        let mut words = line.split_whitespace();

        let Some(ty_word) = words.next() else {
            continue;
        };
        let (ty_name, ptr) = match ty_word.split_once('@') {
            Some((name, rel)) => match rel.parse::<u8>() {
                Ok(rel) if rel < INLINE => (name, Some(rel)),
                _ => return fail(format!("line {lineno}: pointer offset out of range")),
            },
            None => (ty_word, None),
        };
        let ty = match ty_name {
            "str" => ColumnType::Str,
            "f32" => ColumnType::F32,
            _ => return fail(format!("line {lineno}: unknown column type {ty_name:?}")),
        };
        if ty == ColumnType::Str && ptr.is_none() {
            return fail(format!(
                "line {lineno}: str columns must be pointers (use str@N)"
            ));
        }

        let Some(column) = words.next() else {
            return fail(format!("line {lineno}: expected column name"));
        };
        let Some(field) = fields.iter().position(|f| f.column == column) else {
            return fail(format!("line {lineno}: column {column:?} not in the field registry"));
        };
        if columns.iter().any(|c| c.field == field + 1) {
            return fail(format!("line {lineno}: duplicate column {column:?} in product"));
        }

        let mut positions = Vec::with_capacity(usize::from(type_max));
        for word in words.by_ref() {
            match word {
                "." => positions.push(0),
                _ => match word.parse::<u8>() {
                    Ok(pos) if pos >= 2 => positions.push(pos),
                    _ => {
                        return fail(format!(
                            "line {lineno}: column numbers start at 2 (column 1 is IPFrom)"
                        ))
                    }
                },
            }
        }
        if positions.len() != usize::from(type_max) {
            return fail(format!(
                "line {lineno}: expected {type_max} column numbers, got {}",
                positions.len()
            ));
        }

        columns.push(ColumnDef {
            ty,
            ptr,
            field: field + 1,
            positions,
        });
    }

    let product = ProductDef {
        code,
        name: name.to_owned(),
        prefix: prefix.to_owned(),
        type_max,
        columns,
    };
    for t in 1..=type_max {
        validate_type(&product, t, fields)?;
    }
    Ok(product)
}

/// Check one database type: no column clashes except shared pointers with
/// distinct offsets, and a contiguous column range starting at 2.
fn validate_type(product: &ProductDef, db_type: u8, fields: &[FieldDef]) -> Result<(), SchemaError> {
    let label = format!("{}{}", product.prefix, db_type);
    let used: Vec<(&ColumnDef, u8)> = product
        .columns
        .iter()
        .filter_map(|c| match c.positions[usize::from(db_type) - 1] {
            0 => None,
            pos => Some((c, pos)),
        })
        .collect();
    if used.is_empty() {
        return fail(format!("{label}: no columns"));
    }

    for (i, &(a, a_pos)) in used.iter().enumerate() {
        for &(b, b_pos) in &used[i + 1..] {
            if a_pos != b_pos {
                continue;
            }
            let (a_name, b_name) = (
                &fields[a.field - 1].column,
                &fields[b.field - 1].column,
            );
            match (a.ptr, b.ptr) {
                (Some(ra), Some(rb)) if ra != rb => {} // shared pointer
                (Some(_), Some(_)) => {
                    return fail(format!(
                        "{label}: column {a_pos} pointer offset reused by {a_name:?} and {b_name:?}"
                    ))
                }
                _ => {
                    return fail(format!(
                        "{label}: column {a_pos} used as a value by {a_name:?} or {b_name:?} and shared with another field"
                    ))
                }
            }
        }
    }

    let max = used.iter().map(|&(_, pos)| pos).max().unwrap_or(0);
    for pos in 2..=max {
        if !used.iter().any(|&(_, p)| p == pos) {
            return fail(format!(
                "{label}: columns must be contiguous from 2, but column {pos} is unmapped"
            ));
        }
    }
    Ok(())
}

/// In-memory form of the generated tables.
#[derive(Debug)]
pub struct Tables {
    /// Products dimension (max code + 1).
    pub product_slots: usize,
    /// Types dimension (max type + 1).
    pub type_slots: usize,
    /// Slots per `(product, type)`: tag, fields, column count.
    pub field_slots: usize,
    /// Slot index of the column count.
    pub column_count_slot: usize,
    /// `[product][type][slot]` packed descriptors.
    pub desc: Vec<Vec<Vec<u32>>>,
    /// Column names by field number (index 0 empty).
    pub field_columns: Vec<String>,
    /// Product names by code (index 0 empty).
    pub product_names: Vec<String>,
    /// Product prefixes by code (index 0 empty).
    pub product_prefixes: Vec<String>,
}

/// Build the descriptor tables from a parsed schema.
pub fn build(schema: &Schema) -> Tables {
    let product_slots = schema.products.iter().map(|p| p.code).max().unwrap_or(0) as usize + 1;
    let type_slots = schema.products.iter().map(|p| p.type_max).max().unwrap_or(0) as usize + 1;
    let column_count_slot = schema.fields.len() + 1;
    let field_slots = schema.fields.len() + 2;

    let mut desc = vec![vec![vec![0u32; field_slots]; type_slots]; product_slots];
    for product in &schema.products {
        let p = usize::from(product.code);
        for t in 1..=usize::from(product.type_max) {
            let mut cols: Vec<u8> = Vec::new();
            for c in &product.columns {
                let pos = c.positions[t - 1];
                if pos == 0 {
                    continue;
                }
                let storage = match c.ty {
                    ColumnType::Str => Storage::Str,
                    ColumnType::F32 => Storage::F32,
                };
                desc[p][t][c.field] = FieldDesc::pack(pos, c.ptr.unwrap_or(INLINE), storage);
                if !cols.contains(&pos) {
                    cols.push(pos);
                }
            }
            desc[p][t][0] = (product.code as u32) << 8 | t as u32;
            desc[p][t][column_count_slot] = cols.len() as u32 + 1;
        }
    }

    let mut field_columns = vec![String::new()];
    field_columns.extend(schema.fields.iter().map(|f| f.column.clone()));
    let mut product_names = vec![String::new(); product_slots];
    let mut product_prefixes = vec![String::new(); product_slots];
    for product in &schema.products {
        product_names[usize::from(product.code)] = product.name.clone();
        product_prefixes[usize::from(product.code)] = product.prefix.clone();
    }

    Tables {
        product_slots,
        type_slots,
        field_slots,
        column_count_slot,
        desc,
        field_columns,
        product_names,
        product_prefixes,
    }
}

fn screaming(variant: &str) -> String {
    let mut out = String::new();
    for (i, c) in variant.chars().enumerate() {
        if c.is_ascii_uppercase() && i != 0 {
            out.push('_');
        }
        out.push(c.to_ascii_uppercase());
    }
    out
}

/// Render `src/tables.rs` from a schema and its built tables.
pub fn emit(schema: &Schema, tables: &Tables) -> String {
    let mut s = String::new();

    s.push_str("// Generated by tablegen from src/gen/schema. DO NOT EDIT.\n");
    s.push_str("// Regenerate with: cargo run --bin tablegen > src/tables.rs\n\n");
    s.push_str("use crate::field::{FieldDesc, Storage, INLINE};\n");
    s.push_str("use crate::{Field, Product};\n\n");

    let _ = writeln!(
        s,
        "pub(crate) const PRODUCT_SLOTS: usize = {};",
        tables.product_slots
    );
    let _ = writeln!(s, "pub(crate) const TYPE_SLOTS: usize = {};", tables.type_slots);
    let _ = writeln!(s, "pub(crate) const FIELD_SLOTS: usize = {};\n", tables.field_slots);

    s.push_str("/// Slot 0 of each `(product, db_type)` row: `(product << 8) | db_type`.\n");
    s.push_str("pub(crate) const TAG_SLOT: usize = 0;\n");
    s.push_str("/// Slot holding the expected header column count (IPFrom included).\n");
    let _ = writeln!(
        s,
        "pub(crate) const COLUMN_COUNT_SLOT: usize = {};\n",
        tables.column_count_slot
    );

    s.push_str("/// Product display names, indexed by product code.\n");
    s.push_str("pub(crate) const PRODUCT_NAMES: [&str; PRODUCT_SLOTS] = [");
    for name in &tables.product_names {
        let _ = write!(s, "{name:?}, ");
    }
    s.truncate(s.len() - 2);
    s.push_str("];\n\n");

    s.push_str("/// Product type prefixes, indexed by product code.\n");
    s.push_str("pub(crate) const PRODUCT_PREFIXES: [&str; PRODUCT_SLOTS] = [");
    for prefix in &tables.product_prefixes {
        let _ = write!(s, "{prefix:?}, ");
    }
    s.truncate(s.len() - 2);
    s.push_str("];\n\n");

    s.push_str("/// Field column names, indexed by field number.\n");
    let _ = writeln!(
        s,
        "pub(crate) const FIELD_COLUMN_NAMES: [&str; {}] = [",
        tables.field_columns.len()
    );
    for column in &tables.field_columns {
        let _ = writeln!(s, "    {column:?},");
    }
    s.push_str("];\n\n");

    s.push_str(
        "/// Look up the packed descriptor for a field in a database variant.\n\
         pub(crate) fn descriptor(product: Product, db_type: u8, field: Field) -> FieldDesc {\n\
         \x20   match (db_type as usize) < TYPE_SLOTS {\n\
         \x20       true => FieldDesc(DESC[product as usize][db_type as usize][field as usize]),\n\
         \x20       false => FieldDesc::NONE,\n\
         \x20   }\n\
         }\n\n",
    );
    s.push_str(
        "/// Expected column count for a database variant, or 0 if unsupported.\n\
         pub(crate) fn column_count(product: Product, db_type: u8) -> u8 {\n\
         \x20   match (db_type as usize) < TYPE_SLOTS {\n\
         \x20       true => DESC[product as usize][db_type as usize][COLUMN_COUNT_SLOT] as u8,\n\
         \x20       false => 0,\n\
         \x20   }\n\
         }\n\n",
    );

    s.push_str(
        "pub(crate) static DESC: [[[u32; FIELD_SLOTS]; TYPE_SLOTS]; PRODUCT_SLOTS] = build();\n\n",
    );

    for field in &schema.fields {
        let _ = writeln!(
            s,
            "const {}: usize = Field::{} as usize;",
            screaming(&field.variant),
            field.variant
        );
    }
    s.push('\n');
    s.push_str("const STR: Storage = Storage::Str;\n");
    s.push_str("const F32: Storage = Storage::F32;\n\n");
    s.push_str(
        "const fn desc(column: u8, ptr: u8, storage: Storage) -> u32 {\n\
         \x20   FieldDesc::pack(column, ptr, storage)\n\
         }\n\n",
    );

    s.push_str("#[allow(clippy::identity_op)]\n");
    s.push_str("const fn build() -> [[[u32; FIELD_SLOTS]; TYPE_SLOTS]; PRODUCT_SLOTS] {\n");
    s.push_str("    let mut d = [[[0u32; FIELD_SLOTS]; TYPE_SLOTS]; PRODUCT_SLOTS];\n");
    for product in &schema.products {
        let p = usize::from(product.code);
        for t in 1..=usize::from(product.type_max) {
            let mut entries: Vec<(&ColumnDef, u8)> = product
                .columns
                .iter()
                .filter_map(|c| match c.positions[t - 1] {
                    0 => None,
                    pos => Some((c, pos)),
                })
                .collect();
            entries.sort_by_key(|&(c, pos)| (pos, c.ptr.unwrap_or(INLINE)));

            let _ = writeln!(s, "\n    // {} {}{}", product.name, product.prefix, t);
            let _ = writeln!(s, "    d[{p}][{t}][TAG_SLOT] = {p} << 8 | {t};");
            for (c, pos) in &entries {
                let alias = screaming(&schema.fields[c.field - 1].variant);
                let ptr = match c.ptr {
                    Some(rel) => rel.to_string(),
                    None => "INLINE".to_owned(),
                };
                let ty = match c.ty {
                    ColumnType::Str => "STR",
                    ColumnType::F32 => "F32",
                };
                let _ = writeln!(s, "    d[{p}][{t}][{alias}] = desc({pos}, {ptr}, {ty});");
            }
            let _ = writeln!(
                s,
                "    d[{p}][{t}][COLUMN_COUNT_SLOT] = {};",
                tables.desc[p][t][tables.column_count_slot]
            );
        }
    }
    s.push_str("\n    d\n}\n");

    s
}

/// Parse the embedded schema and render the descriptor table source.
pub fn generate() -> Result<String, SchemaError> {
    let schema = parse()?;
    let tables = build(&schema);
    Ok(emit(&schema, &tables))
}
