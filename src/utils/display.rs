//! Fixed-format dumps of matrices and vectors
//!
//! Debug/inspection output only; none of the numeric routines depend on
//! these. Format: row-major, four decimals, one trailing space per entry,
//! one line per row, and a blank line after the block.

use std::io::{self, Write};

use crate::{Matrix, Vector};

/// Write a matrix to `out` in the fixed four-decimal format.
pub fn write_matrix<W: Write>(out: &mut W, mat: &Matrix) -> io::Result<()> {
    for row in mat.rows() {
        for val in row.iter() {
            write!(out, "{:.4} ", val)?;
        }
        writeln!(out)?;
    }
    writeln!(out)
}

/// Write a vector to `out` on one line in the fixed four-decimal format.
pub fn write_vector<W: Write>(out: &mut W, vec: &Vector) -> io::Result<()> {
    for val in vec.iter() {
        write!(out, "{:.4} ", val)?;
    }
    writeln!(out)?;
    writeln!(out)
}

/// Print a matrix to standard output.
pub fn print_matrix(mat: &Matrix) {
    let _ = write_matrix(&mut io::stdout(), mat);
}

/// Print a vector to standard output.
pub fn print_vector(vec: &Vector) {
    let _ = write_vector(&mut io::stdout(), vec);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_write_matrix_format() {
        let m = array![[1.0, 2.5], [-3.0, 4.125]];
        let mut buf = Vec::new();
        write_matrix(&mut buf, &m).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, "1.0000 2.5000 \n-3.0000 4.1250 \n\n");
    }

    #[test]
    fn test_write_vector_format() {
        let v = array![0.5, -1.0];
        let mut buf = Vec::new();
        write_vector(&mut buf, &v).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, "0.5000 -1.0000 \n\n");
    }
}
