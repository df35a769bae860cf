//! Encoding helpers shared by the parser and the verifier

pub mod base64url;
