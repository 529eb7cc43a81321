// Copyright (c) 2026, intl-rs developers
//
// Licensed under the Apache License, Version 2.0 (see LICENSE.Apache in the
// root directory) or MIT license (see LICENSE.MIT in the root directory),
// at your option. This file may be copied, distributed, and modified only
// in accordance with the terms specified by the chosen license.

//! Punycode (RFC 3492).
//!
//! Bootstring with the Punycode parameter set. Both directions reject
//! malformed or overflowing input with `None`; neither attaches or
//! expects the `xn--` ACE prefix, that is the caller's concern.

use smallvec::SmallVec;

const BASE: u32 = 36;
const TMIN: u32 = 1;
const TMAX: u32 = 26;
const SKEW: u32 = 38;
const DAMP: u32 = 700;
const INITIAL_BIAS: u32 = 72;
const INITIAL_N: u32 = 128;

/// A label fits in 63 characters, so decoding avoids the heap.
type Label = SmallVec<[char; 64]>;

/// Encode a label into its Punycode form (without the ACE prefix).
pub fn encode(input: &str) -> Option<String> {
    let mut output = String::with_capacity(input.len());
    for c in input.chars().filter(char::is_ascii) {
        output.push(c);
    }
    let basic_count = output.len() as u32;
    if basic_count > 0 {
        output.push('-');
    }

    let input: Label = input.chars().collect();
    let mut n = INITIAL_N;
    let mut delta: u32 = 0;
    let mut bias = INITIAL_BIAS;
    let mut handled = basic_count;

    while (handled as usize) < input.len() {
        // The next codepoint to represent is the smallest one not yet
        // handled.
        let m = input
            .iter()
            .map(|&c| c as u32)
            .filter(|&cp| cp >= n)
            .min()?;
        delta = delta.checked_add((m - n).checked_mul(handled + 1)?)?;
        n = m;

        for &c in &input {
            let cp = c as u32;
            if cp < n {
                delta = delta.checked_add(1)?;
            }
            if cp == n {
                let mut q = delta;
                let mut k = BASE;
                loop {
                    let t = threshold(k, bias);
                    if q < t {
                        break;
                    }
                    output.push(digit(t + (q - t) % (BASE - t)));
                    q = (q - t) / (BASE - t);
                    k += BASE;
                }
                output.push(digit(q));
                bias = adapt(delta, handled + 1, handled == basic_count);
                delta = 0;
                handled += 1;
            }
        }
        delta = delta.checked_add(1)?;
        n = n.checked_add(1)?;
    }
    Some(output)
}

/// Decode a Punycode label (without the ACE prefix).
pub fn decode(input: &str) -> Option<String> {
    let (basic, extended) = match input.rfind('-') {
        Some(index) => (&input[..index], &input[index + 1..]),
        None => ("", input),
    };
    if !basic.is_ascii() {
        return None;
    }
    let mut output: Label = basic.chars().collect();

    let extended: SmallVec<[char; 64]> = extended.chars().collect();
    let mut position = 0;
    let mut n = INITIAL_N;
    let mut i: u32 = 0;
    let mut bias = INITIAL_BIAS;

    while position < extended.len() {
        let old_i = i;
        let mut weight: u32 = 1;
        let mut k = BASE;
        loop {
            if position == extended.len() {
                return None;
            }
            let value = digit_value(extended[position])?;
            position += 1;
            i = i.checked_add(value.checked_mul(weight)?)?;
            let t = threshold(k, bias);
            if value < t {
                break;
            }
            weight = weight.checked_mul(BASE - t)?;
            k += BASE;
        }
        let length = output.len() as u32 + 1;
        bias = adapt(i - old_i, length, old_i == 0);
        n = n.checked_add(i / length)?;
        i %= length;
        // Basic codepoints must be carried literally, not encoded.
        if n < INITIAL_N {
            return None;
        }
        output.insert(i as usize, char::from_u32(n)?);
        i += 1;
    }
    Some(output.iter().collect())
}

fn threshold(k: u32, bias: u32) -> u32 {
    if k <= bias + TMIN {
        TMIN
    } else if k >= bias + TMAX {
        TMAX
    } else {
        k - bias
    }
}

fn adapt(mut delta: u32, num_points: u32, first_time: bool) -> u32 {
    delta /= if first_time { DAMP } else { 2 };
    delta += delta / num_points;
    let mut k = 0;
    while delta > ((BASE - TMIN) * TMAX) / 2 {
        delta /= BASE - TMIN;
        k += BASE;
    }
    k + (BASE - TMIN + 1) * delta / (delta + SKEW)
}

fn digit(value: u32) -> char {
    debug_assert!(value < BASE);
    if value < 26 {
        (b'a' + value as u8) as char
    } else {
        (b'0' + (value - 26) as u8) as char
    }
}

fn digit_value(c: char) -> Option<u32> {
    match c {
        'a'..='z' => Some(c as u32 - 'a' as u32),
        'A'..='Z' => Some(c as u32 - 'A' as u32),
        '0'..='9' => Some(c as u32 - '0' as u32 + 26),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_reference_labels() {
        assert_eq!(encode("m\u{FC}nchen").as_deref(), Some("mnchen-3ya"));
        assert_eq!(encode("b\u{FC}cher").as_deref(), Some("bcher-kva"));
        assert_eq!(encode("fa\u{DF}").as_deref(), Some("fa-hia"));
        // Pure ASCII encodes to itself plus the delimiter.
        assert_eq!(encode("abc").as_deref(), Some("abc-"));
    }

    #[test]
    fn decodes_reference_labels() {
        assert_eq!(decode("mnchen-3ya").as_deref(), Some("m\u{FC}nchen"));
        assert_eq!(decode("bcher-kva").as_deref(), Some("b\u{FC}cher"));
        assert_eq!(decode("fa-hia").as_deref(), Some("fa\u{DF}"));
    }

    #[test]
    fn round_trips() {
        for label in &["m\u{FC}nchen", "\u{65E5}\u{672C}\u{8A9E}", "\u{5D1}\u{5D3}\u{5D9}\u{5E7}\u{5D4}"] {
            let encoded = encode(label).unwrap();
            assert_eq!(decode(&encoded).as_deref(), Some(*label));
        }
    }

    #[test]
    fn rejects_malformed_input() {
        // Truncated variable-length integer.
        assert_eq!(decode("mnchen-3y"), None);
        // Non-digit in the extended part.
        assert_eq!(decode("abc-+"), None);
        // Non-ASCII in the basic part.
        assert_eq!(decode("m\u{FC}nchen-3ya"), None);
    }
}
