pub mod config;
pub mod map;
pub mod replay;

use slideview_core::geometry::Size;

/// Parse a `WIDTHxHEIGHT` argument such as `800x600`.
pub fn parse_size(s: &str) -> Result<Size, String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{s}'"))?;
    let width = w
        .trim()
        .parse::<u32>()
        .map_err(|e| format!("invalid width '{w}': {e}"))?;
    let height = h
        .trim()
        .parse::<u32>()
        .map_err(|e| format!("invalid height '{h}': {e}"))?;
    Ok(Size::new(width, height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_size() {
        assert_eq!(parse_size("800x600"), Ok(Size::new(800, 600)));
        assert_eq!(parse_size("32X16"), Ok(Size::new(32, 16)));
        assert!(parse_size("800").is_err());
        assert!(parse_size("axb").is_err());
        assert!(parse_size("-1x5").is_err());
    }
}
