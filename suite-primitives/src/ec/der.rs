#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! # Strict DER for ECDSA Signatures
//!
//! Encoder and canonical decoder for `SEQUENCE { INTEGER r, INTEGER s }`.
//!
//! The decoder accepts exactly one encoding per `(r, s)` pair. Anything a
//! lenient BER reader would tolerate is a `MalformedSignature`:
//!
//! - trailing bytes after the sequence, or inside it after `s`
//! - indefinite, long-form-when-short-fits, or otherwise non-minimal lengths
//! - empty, negative, or zero-padded integers
//! - a zero `r` or `s`
//!
//! As a final guard the decoded pair is re-encoded and must reproduce the
//! input byte for byte.

use crate::error::{Error, Result};

const TAG_SEQUENCE: u8 = 0x30;
const TAG_INTEGER: u8 = 0x02;

/// `r` and `s` as minimal big-endian magnitudes (no leading zero bytes).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureComponents {
    /// First component
    pub r: Vec<u8>,
    /// Second component
    pub s: Vec<u8>,
}

impl SignatureComponents {
    /// Left-pad both components to `width` bytes.
    ///
    /// # Errors
    /// Returns `MalformedSignature` if either component is wider than `width`.
    pub fn to_fixed_width(&self, width: usize) -> Result<(Vec<u8>, Vec<u8>)> {
        Ok((left_pad(&self.r, width)?, left_pad(&self.s, width)?))
    }
}

fn left_pad(magnitude: &[u8], width: usize) -> Result<Vec<u8>> {
    let pad = width.checked_sub(magnitude.len()).ok_or_else(|| {
        Error::MalformedSignature(format!(
            "component of {} bytes exceeds {width}",
            magnitude.len()
        ))
    })?;
    let mut out = vec![0u8; pad];
    out.extend_from_slice(magnitude);
    Ok(out)
}

fn malformed(reason: &str) -> Error {
    tracing::debug!(reason, "rejected DER signature");
    Error::MalformedSignature(reason.to_string())
}

fn strip_leading_zeros(bytes: &[u8]) -> &[u8] {
    let start = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
    bytes.get(start..).unwrap_or_default()
}

fn push_length(out: &mut Vec<u8>, len: usize) -> Result<()> {
    match len {
        0..=0x7f => out.push(len as u8),
        0x80..=0xff => out.extend_from_slice(&[0x81, len as u8]),
        0x100..=0xffff => out.extend_from_slice(&[0x82, (len >> 8) as u8, len as u8]),
        _ => return Err(Error::MalformedSignature(format!("length {len} too large"))),
    }
    Ok(())
}

fn push_integer(out: &mut Vec<u8>, magnitude: &[u8]) -> Result<()> {
    let magnitude = strip_leading_zeros(magnitude);
    let Some(&first) = magnitude.first() else {
        return Err(malformed("zero component"));
    };
    let needs_pad = first & 0x80 != 0;
    out.push(TAG_INTEGER);
    push_length(out, magnitude.len() + usize::from(needs_pad))?;
    if needs_pad {
        out.push(0x00);
    }
    out.extend_from_slice(magnitude);
    Ok(())
}

/// Encode `(r, s)` as a DER `SEQUENCE { INTEGER r, INTEGER s }`.
///
/// Inputs are unsigned big-endian and may carry leading zeros (e.g. fixed
/// width scalars); the output is always minimal.
///
/// # Errors
/// Returns `MalformedSignature` if either component is zero.
pub fn encode_signature(r: &[u8], s: &[u8]) -> Result<Vec<u8>> {
    let mut body = Vec::with_capacity(r.len() + s.len() + 6);
    push_integer(&mut body, r)?;
    push_integer(&mut body, s)?;

    let mut out = Vec::with_capacity(body.len() + 4);
    out.push(TAG_SEQUENCE);
    push_length(&mut out, body.len())?;
    out.extend_from_slice(&body);
    Ok(out)
}

/// Cursor over DER input.
struct Reader<'a> {
    input: &'a [u8],
}

impl<'a> Reader<'a> {
    fn byte(&mut self) -> Result<u8> {
        let (&first, rest) = self.input.split_first().ok_or_else(|| malformed("truncated"))?;
        self.input = rest;
        Ok(first)
    }

    fn take(&mut self, len: usize) -> Result<&'a [u8]> {
        if len > self.input.len() {
            return Err(malformed("length exceeds input"));
        }
        let (head, rest) = self.input.split_at(len);
        self.input = rest;
        Ok(head)
    }

    fn length(&mut self) -> Result<usize> {
        match self.byte()? {
            short @ 0..=0x7f => Ok(usize::from(short)),
            0x81 => {
                let len = self.byte()?;
                if len < 0x80 {
                    return Err(malformed("non-minimal length"));
                }
                Ok(usize::from(len))
            }
            0x82 => {
                let len = usize::from(self.byte()?) << 8 | usize::from(self.byte()?);
                if len < 0x100 {
                    return Err(malformed("non-minimal length"));
                }
                Ok(len)
            }
            0x80 => Err(malformed("indefinite length")),
            _ => Err(malformed("unsupported length form")),
        }
    }

    fn element(&mut self, tag: u8) -> Result<&'a [u8]> {
        if self.byte()? != tag {
            return Err(malformed("unexpected tag"));
        }
        let len = self.length()?;
        self.take(len)
    }

    /// Read an INTEGER and return its minimal unsigned magnitude.
    fn positive_integer(&mut self) -> Result<Vec<u8>> {
        let content = self.element(TAG_INTEGER)?;
        match content {
            [] => Err(malformed("empty integer")),
            [first, ..] if first & 0x80 != 0 => Err(malformed("negative integer")),
            [0x00] => Err(malformed("zero component")),
            [0x00, second, ..] if second & 0x80 == 0 => Err(malformed("non-minimal integer")),
            [0x00, rest @ ..] => Ok(rest.to_vec()),
            _ => Ok(content.to_vec()),
        }
    }

    fn finish(&self) -> Result<()> {
        if self.input.is_empty() { Ok(()) } else { Err(malformed("trailing data")) }
    }
}

/// Decode a strict-DER ECDSA signature into its components.
///
/// # Errors
/// Returns `MalformedSignature` for any input that is not the unique DER
/// encoding of two positive integers.
pub fn parse_signature_components(der: &[u8]) -> Result<SignatureComponents> {
    let mut outer = Reader { input: der };
    let body = outer.element(TAG_SEQUENCE)?;
    outer.finish()?;

    let mut inner = Reader { input: body };
    let r = inner.positive_integer()?;
    let s = inner.positive_integer()?;
    inner.finish()?;

    if encode_signature(&r, &s)? != der {
        return Err(malformed("re-encoding mismatch"));
    }

    Ok(SignatureComponents { r, s })
}
