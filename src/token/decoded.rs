use crate::error::{Error, Result};
use crate::limits::{MAX_DECODED_HEADER_SIZE, MAX_DECODED_PAYLOAD_SIZE, MAX_TOKEN_LENGTH};
use crate::token::{TokenHeader, TokenPayload};
use crate::utils::base64url;
use serde_json::{Map, Value};

/// A JWT split into its three parts with header and payload decoded
///
/// Decoding says nothing about authenticity: the signature is kept in its
/// encoded form and only checked by [`verify`](crate::verify).
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedToken {
    header: TokenHeader,
    payload: TokenPayload,
    signature: String,
    raw: String,
}

impl DecodedToken {
    /// Parse a JWT from its compact serialization
    ///
    /// # Arguments
    /// * `raw` - The JWT string in format "header.payload.signature"
    ///
    /// # Example
    /// ```ignore
    /// let token = DecodedToken::parse("eyJ...")?;
    /// println!("{:?}", token.header().algorithm());
    /// ```
    pub fn parse(raw: &str) -> Result<Self> {
        if raw.len() > MAX_TOKEN_LENGTH {
            return Err(Error::TokenTooLarge {
                size: raw.len(),
                max: MAX_TOKEN_LENGTH,
            });
        }

        let (header_b64, payload_b64, signature_b64) = split(raw).ok_or(Error::FormatInvalid)?;

        let header_json = base64url::decode_string(header_b64, MAX_DECODED_HEADER_SIZE)?;
        let header = TokenHeader::new(json_object(&header_json, "header")?);

        let payload_json = base64url::decode_string(payload_b64, MAX_DECODED_PAYLOAD_SIZE)?;
        let payload = TokenPayload::new(json_object(&payload_json, "payload")?);

        Ok(Self {
            header,
            payload,
            signature: signature_b64.to_string(),
            raw: raw.to_string(),
        })
    }

    /// Get the token header
    pub fn header(&self) -> &TokenHeader {
        &self.header
    }

    /// Get the token payload
    pub fn payload(&self) -> &TokenPayload {
        &self.payload
    }

    /// Get the Base64URL-encoded signature, exactly as it appears in the token
    pub fn signature(&self) -> &str {
        &self.signature
    }

    /// Get the original token string
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Get the signing input (header.payload) as it appears in the token
    pub fn signing_input(&self) -> &str {
        // The signature is the last segment and never contains '.'
        &self.raw[..self.raw.len() - self.signature.len() - 1]
    }
}

/// Check the compact shape of a JWT: three non-empty parts separated by `.`
///
/// Nothing is decoded.
pub fn is_valid_format(raw: &str) -> bool {
    split(raw).is_some()
}

/// Parse a JWT, see [`DecodedToken::parse`]
pub fn parse(raw: &str) -> Result<DecodedToken> {
    DecodedToken::parse(raw)
}

/// Decode user input that may or may not be a JWT
///
/// Surrounding whitespace is ignored. Blank input and anything that fails to
/// parse yield `None`; a partially decoded token is never returned.
pub fn decode(input: &str) -> Option<DecodedToken> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    match DecodedToken::parse(input) {
        Ok(token) => Some(token),
        Err(error) => {
            tracing::debug!(%error, "discarding input that is not a decodable JWT");
            None
        }
    }
}

fn split(raw: &str) -> Option<(&str, &str, &str)> {
    let mut parts = raw.split('.');
    let header = parts.next()?;
    let payload = parts.next()?;
    let signature = parts.next()?;

    if parts.next().is_some() || header.is_empty() || payload.is_empty() || signature.is_empty()
    {
        return None;
    }

    Some((header, payload, signature))
}

fn json_object(json: &str, part: &str) -> Result<Map<String, Value>> {
    match serde_json::from_str::<Value>(json) {
        Ok(Value::Object(fields)) => Ok(fields),
        Ok(_) => Err(Error::FormatInvalidJson(format!(
            "{part} is not a JSON object"
        ))),
        Err(e) => Err(Error::FormatInvalidJson(format!(
            "Failed to parse {part}: {e}"
        ))),
    }
}
