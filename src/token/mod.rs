//! Token parsing
//!
//! A compact JWT is split into header, payload and signature. Header and payload
//! are Base64URL-decoded into JSON objects; the signature stays encoded.

mod decoded;
mod header;
mod payload;

pub use decoded::{DecodedToken, decode, is_valid_format, parse};
pub use header::TokenHeader;
pub use payload::{Audience, TokenPayload};
