//! Element type tags of the binary document format.

pub const TAG_DOUBLE: u8 = 0x01;
pub const TAG_STRING: u8 = 0x02;
pub const TAG_DOCUMENT: u8 = 0x03;
pub const TAG_ARRAY: u8 = 0x04;
pub const TAG_BINARY: u8 = 0x05;
pub const TAG_UNDEFINED: u8 = 0x06;
pub const TAG_OBJECT_ID: u8 = 0x07;
pub const TAG_BOOLEAN: u8 = 0x08;
pub const TAG_DATETIME: u8 = 0x09;
pub const TAG_NULL: u8 = 0x0a;
pub const TAG_REGEX: u8 = 0x0b;
pub const TAG_DB_POINTER: u8 = 0x0c;
pub const TAG_CODE: u8 = 0x0d;
pub const TAG_SYMBOL: u8 = 0x0e;
pub const TAG_CODE_WITH_SCOPE: u8 = 0x0f;
pub const TAG_INT32: u8 = 0x10;
pub const TAG_TIMESTAMP: u8 = 0x11;
pub const TAG_INT64: u8 = 0x12;
pub const TAG_DECIMAL128: u8 = 0x13;
pub const TAG_MIN_KEY: u8 = 0xff;
pub const TAG_MAX_KEY: u8 = 0x7f;
