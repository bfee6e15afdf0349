//! Response decoding module
//!
//! Turns a raw HTTP response body into a sequence of JSON records. Numeric
//! literals are kept at arbitrary precision (serde_json's
//! `arbitrary_precision` feature), so a price of `19.10` re-serializes as
//! `19.10` and never as a binary-float approximation.
//!
//! Records are located with a JSONPath-style expression, `$[*]` by default,
//! so response shapes like `{ "data": [...] }` only need a different path,
//! not a different decoder.

mod json;
mod records;

pub use json::JsonDecoder;
pub use records::Records;

#[cfg(test)]
mod tests;
