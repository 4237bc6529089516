//! Plain-text persistence for vertices and cost matrices.
//!
//! Both formats start with a line holding `n`. Vertex files follow with one
//! `x y` pair per line; matrix files follow with `n` rows of `n`
//! whitespace-separated costs, the diagonal written as `inf`.

use std::io::{BufRead, Write};

use crate::distance::CostMatrix;
use crate::error::{Result, TspError};
use crate::models::Vertex;

/// Writes vertices as `n` followed by one `x y` line per vertex.
pub fn write_vertices<W: Write>(vertices: &[Vertex], mut out: W) -> Result<()> {
    writeln!(out, "{}", vertices.len())?;
    for v in vertices {
        writeln!(out, "{} {}", v.x(), v.y())?;
    }
    out.flush()?;
    Ok(())
}

/// Reads vertices written by [`write_vertices`].
pub fn read_vertices<R: BufRead>(input: R) -> Result<Vec<Vertex>> {
    let mut lines = numbered_lines(input);
    let n = read_count(&mut lines)?;
    let mut vertices = Vec::new();
    for _ in 0..n {
        let (line_no, line) = next_line(&mut lines, "vertex")?;
        let fields: Vec<i32> = parse_fields(line_no, &line)?;
        match fields.as_slice() {
            [x, y] => vertices.push(Vertex::new(*x, *y)),
            other => {
                return Err(TspError::parse(
                    line_no,
                    format!("expected 2 coordinates, got {}", other.len()),
                ))
            }
        }
    }
    Ok(vertices)
}

/// Writes a cost matrix as `n` followed by `n` rows of costs.
///
/// # Examples
///
/// ```
/// use u_tsp::models::Vertex;
/// use u_tsp::distance::CostMatrix;
/// use u_tsp::persist::{read_matrix, write_matrix};
///
/// let cm = CostMatrix::from_vertices(&[Vertex::new(0, 0), Vertex::new(3, 4)]).unwrap();
/// let mut buf = Vec::new();
/// write_matrix(&cm, &mut buf).unwrap();
/// assert_eq!(String::from_utf8(buf.clone()).unwrap(), "2\ninf 5\n5 inf\n");
/// assert_eq!(read_matrix(buf.as_slice()).unwrap(), cm);
/// ```
pub fn write_matrix<W: Write>(costs: &CostMatrix, mut out: W) -> Result<()> {
    writeln!(out, "{}", costs.size())?;
    for i in 0..costs.size() {
        let row: Vec<String> = costs.row(i).iter().map(|c| c.to_string()).collect();
        writeln!(out, "{}", row.join(" "))?;
    }
    out.flush()?;
    Ok(())
}

/// Reads a cost matrix written by [`write_matrix`].
///
/// The diagonal may hold any value; it is replaced by the unreachable
/// sentinel. Off-diagonal costs must be finite, non-negative, and symmetric.
pub fn read_matrix<R: BufRead>(input: R) -> Result<CostMatrix> {
    let mut lines = numbered_lines(input);
    let n = read_count(&mut lines)?;
    let mut rows = Vec::new();
    for _ in 0..n {
        let (line_no, line) = next_line(&mut lines, "matrix row")?;
        let row: Vec<f64> = parse_fields(line_no, &line)?;
        if row.len() != n {
            return Err(TspError::parse(
                line_no,
                format!("expected {n} costs, got {}", row.len()),
            ));
        }
        rows.push(row);
    }
    CostMatrix::from_rows(rows)
}

type NumberedLines<R> = std::iter::Enumerate<std::io::Lines<R>>;

fn numbered_lines<R: BufRead>(input: R) -> NumberedLines<R> {
    input.lines().enumerate()
}

/// Next non-blank line with its 1-based number.
fn next_line<R: BufRead>(lines: &mut NumberedLines<R>, what: &str) -> Result<(usize, String)> {
    for (idx, line) in lines.by_ref() {
        let line = line?;
        if !line.trim().is_empty() {
            return Ok((idx + 1, line));
        }
    }
    Err(TspError::parse(0, format!("unexpected end of input, expected {what}")))
}

fn read_count<R: BufRead>(lines: &mut NumberedLines<R>) -> Result<usize> {
    let (line_no, line) = next_line(lines, "vertex count")?;
    line.trim()
        .parse()
        .map_err(|e| TspError::parse(line_no, format!("bad vertex count {:?}: {e}", line.trim())))
}

fn parse_fields<T>(line_no: usize, line: &str) -> Result<Vec<T>>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    line.split_whitespace()
        .map(|field| {
            field
                .parse()
                .map_err(|e| TspError::parse(line_no, format!("bad value {field:?}: {e}")))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertices_roundtrip() {
        let vertices = vec![Vertex::new(25, 33), Vertex::new(1001, 745)];
        let mut buf = Vec::new();
        write_vertices(&vertices, &mut buf).expect("write");
        assert_eq!(String::from_utf8(buf.clone()).expect("utf8"), "2\n25 33\n1001 745\n");
        assert_eq!(read_vertices(buf.as_slice()).expect("read"), vertices);
    }

    #[test]
    fn test_matrix_roundtrip_exact() {
        let vertices = vec![Vertex::new(0, 0), Vertex::new(1, 2), Vertex::new(7, 3)];
        let cm = CostMatrix::from_vertices(&vertices).expect("valid");
        let mut buf = Vec::new();
        write_matrix(&cm, &mut buf).expect("write");
        let back = read_matrix(buf.as_slice()).expect("read");
        assert_eq!(back, cm);
    }

    #[test]
    fn test_read_matrix_accepts_finite_diagonal() {
        let text = "2\n99999 3.5\n3.5 99999\n";
        let cm = read_matrix(text.as_bytes()).expect("read");
        assert_eq!(cm.get(0, 1), 3.5);
        assert_eq!(cm.get(0, 0), crate::distance::UNREACHABLE);
    }

    #[test]
    fn test_read_matrix_short_row() {
        let text = "2\n0 1\n1\n";
        let err = read_matrix(text.as_bytes()).unwrap_err();
        assert!(matches!(err, TspError::Parse { line: 3, .. }));
    }

    #[test]
    fn test_read_matrix_truncated() {
        let text = "3\n0 1 2\n";
        assert!(matches!(
            read_matrix(text.as_bytes()),
            Err(TspError::Parse { .. })
        ));
    }

    #[test]
    fn test_read_vertices_bad_number() {
        let text = "1\n12 abc\n";
        let err = read_vertices(text.as_bytes()).unwrap_err();
        assert!(matches!(err, TspError::Parse { line: 2, .. }));
    }

    #[test]
    fn test_oversized_count_is_truncated_input() {
        let err = read_matrix("18446744073709551615\n".as_bytes()).unwrap_err();
        assert!(matches!(err, TspError::Parse { .. }));
        let err = read_vertices("4611686018427387904\n1 2\n".as_bytes()).unwrap_err();
        assert!(matches!(err, TspError::Parse { .. }));
    }

    #[test]
    fn test_read_vertices_bad_count() {
        assert!(read_vertices("many\n".as_bytes()).is_err());
    }
}
