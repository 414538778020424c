//! Network-number addressing for mesh nodes
//!
//! The mesh derives a node's address block from its network number: the
//! number's leading digits become the second octet of a 10.x.y address and
//! the trailing two digits become the third. A three-digit trailing part
//! drops its hundreds digit, and a single trailing digit is zero-padded.

/// Derive the `x.y` octet pair of a node's 10.x.y address block from its
/// network number. Returns `None` for numbers the scheme does not cover
/// (empty, non-digit, or longer than four digits).
pub fn nn_to_ip(nn: &str) -> Option<String> {
    if nn.is_empty() || !nn.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    match nn.len() {
        4 => {
            let x: u32 = nn[..2].parse().ok()?;
            let y: u32 = nn[2..].parse().ok()?;
            Some(format!("{}.{}", x, y))
        }
        3 => {
            let x: u32 = nn[..1].parse().ok()?;
            let y: u32 = nn[1..].parse().ok()?;
            Some(format!("{}.{}", x, y))
        }
        // One and two digit numbers live in the 10.0.0.0/16 block; the
        // trailing part is kept verbatim, zeros included
        1 | 2 => Some(format!("0.{}", nn)),
        _ => None,
    }
}

/// Recover a network number from the `x.y` octet pair of an address.
/// Inverse of [`nn_to_ip`] for the numbers that scheme covers.
pub fn ip_to_nn(ip: &str) -> Option<String> {
    let mut parts = ip.split('.');
    let x = parts.next()?;
    let y = parts.next()?;

    let all_digits = |s: &str| !s.is_empty() && s.chars().all(|c| c.is_ascii_digit());
    if !all_digits(x) || !all_digits(y) {
        return None;
    }

    // The third octet contributes exactly two digits to the number
    let y = match y.len() {
        3 => &y[1..],
        _ => y,
    };
    let y = if y.len() == 1 {
        format!("0{}", y)
    } else {
        y.to_string()
    };

    Some(format!("{}{}", x, y))
}
