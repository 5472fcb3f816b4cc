use nalgebra::Vector3;

use super::types::{LineKind, Point, Record};

/// Parse one token as a finite decimal number (`-1`, `.5`, `5.`, `1e-3`).
#[inline]
fn parse_number(token: &str) -> Option<f64> {
    token.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn parse_triple<'a, I>(tokens: &mut I) -> Option<Vector3<f64>>
where
    I: Iterator<Item = &'a str>,
{
    let x = parse_number(tokens.next()?)?;
    let y = parse_number(tokens.next()?)?;
    let z = parse_number(tokens.next()?)?;
    Some(Vector3::new(x, y, z))
}

/// Parse a coordinate line into a `Record`, or `None` if the line is not one.
pub fn parse_record(line: &str) -> Option<Record<'_>> {
    let mut tokens = line.split_whitespace();
    let pos = parse_triple(&mut tokens)?;
    let dir = match tokens.next() {
        None => None,
        Some(first) => {
            let mut rest = std::iter::once(first).chain(&mut tokens);
            let dir = parse_triple(&mut rest)?;
            if rest.next().is_some() {
                return None;
            }
            Some(dir)
        }
    };
    Some(Record {
        text: line,
        point: Point { pos, dir },
    })
}

/// Classify a line: `Some(kind)` for coordinate records, `None` otherwise.
#[inline]
pub fn classify(line: &str) -> Option<LineKind> {
    parse_record(line).map(|r| r.kind())
}

/// Points of all coordinate lines, in file order.
pub fn load_points<'a, I>(lines: I) -> Vec<Point>
where
    I: IntoIterator<Item = &'a str>,
{
    lines
        .into_iter()
        .filter_map(parse_record)
        .map(|r| r.point)
        .collect()
}
