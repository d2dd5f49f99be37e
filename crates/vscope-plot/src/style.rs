//! CSS-style color strings.
//!
//! Scope colors are configured as strings. Accepted forms:
//! * `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA`
//! * `rgb(r, g, b)` and `rgba(r, g, b, a)` with `a` in `[0, 1]`

use vscope_core::Rgba;

use crate::error::{PlotError, PlotResult};

/// Parses a color string into a draw color.
///
/// # Example
///
/// ```rust
/// use vscope_core::Rgba;
/// use vscope_plot::parse_color;
///
/// assert_eq!(parse_color("#fdb44e").unwrap(), Rgba::opaque(0xfd, 0xb4, 0x4e));
/// assert_eq!(parse_color("#fff").unwrap(), Rgba::opaque(255, 255, 255));
/// assert_eq!(parse_color("rgba(255, 255, 255, 0.5)").unwrap(), Rgba::white(0.5));
/// ```
pub fn parse_color(value: &str) -> PlotResult<Rgba> {
    let s = value.trim();
    if s.is_empty() {
        return Err(fail(value, "empty color string"));
    }

    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex(hex).map_err(|reason| fail(value, reason));
    }

    let lower = s.to_ascii_lowercase();
    if let Some(body) = lower.strip_prefix("rgba(").and_then(|b| b.strip_suffix(')')) {
        return parse_func(body, true).map_err(|reason| fail(value, reason));
    }
    if let Some(body) = lower.strip_prefix("rgb(").and_then(|b| b.strip_suffix(')')) {
        return parse_func(body, false).map_err(|reason| fail(value, reason));
    }

    Err(fail(value, "expected #hex, rgb() or rgba()"))
}

fn fail(value: &str, reason: &'static str) -> PlotError {
    PlotError::ColorParse {
        value: value.to_string(),
        reason,
    }
}

fn parse_hex(hex: &str) -> Result<Rgba, &'static str> {
    let nibble = |c: u8| -> Result<u8, &'static str> {
        match c {
            b'0'..=b'9' => Ok(c - b'0'),
            b'a'..=b'f' => Ok(c - b'a' + 10),
            b'A'..=b'F' => Ok(c - b'A' + 10),
            _ => Err("invalid hex digits"),
        }
    };
    let byte = |hi: u8, lo: u8| -> Result<u8, &'static str> { Ok(nibble(hi)? << 4 | nibble(lo)?) };

    let b = hex.as_bytes();
    let (r, g, bl, a) = match b.len() {
        3 => (nibble(b[0])? * 17, nibble(b[1])? * 17, nibble(b[2])? * 17, 255),
        4 => (
            nibble(b[0])? * 17,
            nibble(b[1])? * 17,
            nibble(b[2])? * 17,
            nibble(b[3])? * 17,
        ),
        6 => (byte(b[0], b[1])?, byte(b[2], b[3])?, byte(b[4], b[5])?, 255),
        8 => (
            byte(b[0], b[1])?,
            byte(b[2], b[3])?,
            byte(b[4], b[5])?,
            byte(b[6], b[7])?,
        ),
        _ => return Err("invalid hex length"),
    };

    Ok(Rgba::new(r, g, bl, f64::from(a) / 255.0))
}

fn parse_func(body: &str, with_alpha: bool) -> Result<Rgba, &'static str> {
    let parts: Vec<&str> = body.split(',').map(str::trim).collect();
    let expected = if with_alpha { 4 } else { 3 };
    if parts.len() != expected {
        return Err("wrong number of components");
    }

    let channel = |s: &str| -> Result<u8, &'static str> {
        let v: f64 = s.parse().map_err(|_| "invalid number")?;
        if !(0.0..=255.0).contains(&v) {
            return Err("component out of range");
        }
        Ok(v.round() as u8)
    };

    let a = if with_alpha {
        let a: f64 = parts[3].parse().map_err(|_| "invalid number")?;
        if !(0.0..=1.0).contains(&a) {
            return Err("component out of range");
        }
        a
    } else {
        1.0
    };

    Ok(Rgba::new(channel(parts[0])?, channel(parts[1])?, channel(parts[2])?, a))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_forms() {
        assert_eq!(parse_color("#333").unwrap(), Rgba::opaque(0x33, 0x33, 0x33));
        assert_eq!(parse_color("#FDB44E").unwrap(), Rgba::opaque(0xfd, 0xb4, 0x4e));
        assert_eq!(parse_color("#ff000080").unwrap(), Rgba::new(255, 0, 0, 128.0 / 255.0));
        assert_eq!(parse_color("#0f08").unwrap(), Rgba::new(0, 255, 0, 136.0 / 255.0));
    }

    #[test]
    fn test_func_forms() {
        assert_eq!(parse_color("rgb(1, 2, 3)").unwrap(), Rgba::opaque(1, 2, 3));
        assert_eq!(parse_color(" RGBA(0,0,0,0) ").unwrap(), Rgba::TRANSPARENT);
    }

    #[test]
    fn test_invalid() {
        for bad in ["", "#12", "#ggg", "rgb(1,2)", "rgb(1,2,300)", "rgba(1,2,3,2)", "red"] {
            let err = parse_color(bad).unwrap_err();
            assert!(matches!(err, PlotError::ColorParse { .. }), "{bad}");
        }
    }
}
