//! # Phone Input Mask
//!
//! Turns whatever is currently in the phone field into the canonical display
//! form `+(CC) 5XX XXX XX XX`. The formatter is run on the whole field value
//! after every keystroke, so it has to be idempotent: feeding its own output
//! back in gives the same string.
//!
//! Two input shapes are recognised after stripping everything but digits and
//! `+`:
//!
//! - **International** (`+` first): the two characters after the `+` are the
//!   country code, the next position is the operator digit and is always shown
//!   as `5`, and the rest is grouped.
//! - **Local** (anything else): every typed digit is local. The output gets the
//!   default country code and a leading `5`, and the typed digits follow it.
//!
//! Groups are revealed incrementally. The first subscriber group (up to three
//! digits) appears as soon as it has one digit; the two-digit groups only once
//! they are complete.

pub const DEFAULT_COUNTRY_CODE: &str = "90";
pub const OPERATOR_PREFIX: char = '5';

/// What an empty field turns into.
pub const PHONE_SEED: &str = "+(90) 5";

// Sanitized offsets where the subscriber groups start.
const INTERNATIONAL_GROUPS_AT: usize = 6;
const LOCAL_GROUPS_AT: usize = 2;

/// Keeps ASCII digits and `+`, drops everything else.
pub fn sanitize(input: &str) -> String {
    input
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect()
}

/// Formats raw field content into the masked phone representation.
///
/// Never fails: malformed input still produces some formatted string.
pub fn format_phone(input: &str) -> String {
    let raw = sanitize(input);
    if raw.is_empty() || raw == "+" {
        return PHONE_SEED.to_string();
    }

    if raw.starts_with('+') {
        format_international(&raw)
    } else {
        format_local(&raw)
    }
}

fn format_international(raw: &str) -> String {
    // "+9" has no complete country code yet, leave it alone
    if raw.len() < 3 {
        return raw.to_string();
    }

    // Index 3 is the operator digit; it is replaced by the fixed prefix.
    let mut out = format!("+({}) {}", &raw[1..3], OPERATOR_PREFIX);
    out.push_str(span(raw, 4, INTERNATIONAL_GROUPS_AT));
    push_groups(&mut out, raw, INTERNATIONAL_GROUPS_AT);
    out
}

fn format_local(raw: &str) -> String {
    let mut out = format!("+({}) {}", DEFAULT_COUNTRY_CODE, OPERATOR_PREFIX);
    out.push_str(span(raw, 0, LOCAL_GROUPS_AT));
    push_groups(&mut out, raw, LOCAL_GROUPS_AT);
    out
}

/// Appends the `XXX XX XX` tail starting at `start`.
fn push_groups(out: &mut String, raw: &str, start: usize) {
    let len = raw.len();
    if len > start {
        out.push(' ');
        out.push_str(span(raw, start, start + 3));
    }
    if len >= start + 5 {
        out.push(' ');
        out.push_str(&raw[start + 3..start + 5]);
    }
    if len >= start + 7 {
        out.push(' ');
        out.push_str(&raw[start + 5..start + 7]);
    }
}

// `raw` only holds ASCII, so byte offsets are char offsets.
fn span(raw: &str, start: usize, end: usize) -> &str {
    let end = end.min(raw.len());
    if start >= end {
        ""
    } else {
        &raw[start..end]
    }
}
