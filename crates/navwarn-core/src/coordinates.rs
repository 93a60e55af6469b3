//! Conversion of bulletin coordinate pairs into decimal degrees.
//!
//! Bulletins print positions as `DD-MM[-SS][.fff]H DDD-MM[-SS][.fff]H`,
//! for example `28-00.5N 090-15W`. The decimal fraction, when present,
//! belongs to the last printed field.

/// A position in decimal degrees. South and west are negative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLon {
    pub latitude: f64,
    pub longitude: f64,
}

/// Converts one matched coordinate-pair substring into a [`LatLon`].
///
/// Returns `None` when either half is malformed: a missing hemisphere
/// letter, a non-numeric field, or minutes/seconds of 60 or more.
#[must_use]
pub fn parse_coordinate_pair(pair: &str) -> Option<LatLon> {
    let pair = pair.trim();
    let split = pair.find(['N', 'S'])?;
    let (lat_text, lon_text) = pair.split_at(split + 1);

    let latitude = parse_component(lat_text.trim(), 'N', 'S')?;
    let longitude = parse_component(lon_text.trim(), 'E', 'W')?;
    Some(LatLon {
        latitude,
        longitude,
    })
}

/// Parses `deg[-min[-sec]]` followed by a hemisphere letter.
fn parse_component(text: &str, positive: char, negative: char) -> Option<f64> {
    let hemisphere = text.chars().last()?;
    let sign = if hemisphere == positive {
        1.0
    } else if hemisphere == negative {
        -1.0
    } else {
        return None;
    };

    let body = text[..text.len() - hemisphere.len_utf8()].trim();
    let mut fields = body.split('-');

    let degrees = parse_field(fields.next()?)?;
    let minutes = fields.next().map(parse_field).unwrap_or(Some(0.0))?;
    let seconds = fields.next().map(parse_field).unwrap_or(Some(0.0))?;
    if fields.next().is_some() || minutes >= 60.0 || seconds >= 60.0 {
        return None;
    }

    Some(sign * (degrees + minutes / 60.0 + seconds / 3600.0))
}

fn parse_field(field: &str) -> Option<f64> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit() || b == b'.') {
        return None;
    }
    field.parse::<f64>().ok()
}
