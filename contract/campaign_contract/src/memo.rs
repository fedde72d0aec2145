//! Dash-delimited memo strings exchanged with the token ledger:
//! `donate-<donor>`, `transfer-<receiver>` and `refund-<account>`,
//! where each identity is a 56 character Stellar strkey.

use soroban_sdk::{Address, Env, String};

use crate::error::{fail, CampaignError};
use crate::storage_types::DONATE_PREFIX;

pub const SEPARATOR: u8 = b'-';
pub const STRKEY_LEN: usize = 56;
pub const MAX_MEMO_LEN: usize = 128;

/// `<prefix><separator><strkey of subject>`
pub fn join(env: &Env, prefix: &[u8], separator: u8, subject: &Address) -> String {
    let strkey = subject.to_string();
    let key_len = strkey.len() as usize;
    let head = prefix.len();

    let mut buf = [0u8; MAX_MEMO_LEN];
    buf[..head].copy_from_slice(prefix);
    buf[head] = separator;
    strkey.copy_into_slice(&mut buf[head + 1..head + 1 + key_len]);

    String::from_bytes(env, &buf[..head + 1 + key_len])
}

pub fn compose(env: &Env, prefix: &[u8], subject: &Address) -> String {
    join(env, prefix, SEPARATOR, subject)
}

/// Extracts the donor from a `donate-<donor>` memo.
pub fn parse_donation(env: &Env, memo: &String) -> Result<Address, CampaignError> {
    let len = memo.len() as usize;
    if len == 0 || len > MAX_MEMO_LEN {
        return Err(fail(env, CampaignError::MalformedMemo));
    }

    let mut buf = [0u8; MAX_MEMO_LEN];
    memo.copy_into_slice(&mut buf[..len]);
    let text = &buf[..len];

    let split = text
        .iter()
        .position(|b| *b == SEPARATOR)
        .ok_or_else(|| fail(env, CampaignError::MalformedMemo))?;
    if &text[..split] != DONATE_PREFIX {
        return Err(fail(env, CampaignError::MalformedMemo));
    }

    let strkey = &text[split + 1..];
    if !is_strkey(strkey) {
        return Err(fail(env, CampaignError::MalformedMemo));
    }

    Ok(Address::from_string(&String::from_bytes(env, strkey)))
}

const STRKEY_RAW_LEN: usize = 35;
const VERSION_ACCOUNT: u8 = 6 << 3;
const VERSION_CONTRACT: u8 = 2 << 3;

/// Account (`G...`) or contract (`C...`) strkey: base32 of
/// `version | 32-byte key | crc16 (little endian)`.
fn is_strkey(text: &[u8]) -> bool {
    let raw = match decode_base32(text) {
        Some(raw) => raw,
        None => return false,
    };
    let (body, checksum) = raw.split_at(STRKEY_RAW_LEN - 2);
    matches!(body[0], VERSION_ACCOUNT | VERSION_CONTRACT)
        && crc16_xmodem(body) == u16::from_le_bytes([checksum[0], checksum[1]])
}

fn decode_base32(text: &[u8]) -> Option<[u8; STRKEY_RAW_LEN]> {
    if text.len() != STRKEY_LEN {
        return None;
    }

    let mut raw = [0u8; STRKEY_RAW_LEN];
    let mut acc: u32 = 0;
    let mut bits: u32 = 0;
    let mut out = 0;
    for &c in text {
        let value = match c {
            b'A'..=b'Z' => c - b'A',
            b'2'..=b'7' => c - b'2' + 26,
            _ => return None,
        };
        acc = (acc << 5) | value as u32;
        bits += 5;
        if bits >= 8 {
            bits -= 8;
            raw[out] = (acc >> bits) as u8;
            out += 1;
            acc &= (1 << bits) - 1;
        }
    }
    Some(raw)
}

pub(crate) fn crc16_xmodem(data: &[u8]) -> u16 {
    let mut crc: u16 = 0;
    for byte in data {
        crc ^= (*byte as u16) << 8;
        for _ in 0..8 {
            crc = if crc & 0x8000 != 0 {
                (crc << 1) ^ 0x1021
            } else {
                crc << 1
            };
        }
    }
    crc
}
