//! Вывод матриц в текстовом виде

use anyhow::Result;
use ndarray::Array2;
use std::fmt::Display;
use std::io::Write;

/// Печатает матрицу построчно, значения в строке через пробел
pub fn write_rows<W: Write, T: Display>(out: &mut W, matrix: &Array2<T>) -> Result<()> {
    for row in matrix.outer_iter() {
        let cells: Vec<String> = row.iter().map(|v| v.to_string()).collect();
        writeln!(out, "{}", cells.join(" "))?;
    }
    Ok(())
}

/// Печатает все значения одной строкой через пробел
pub fn write_flat<W: Write, T: Display>(out: &mut W, values: &[T]) -> Result<()> {
    let cells: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    writeln!(out, "{}", cells.join(" "))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::Cell;

    #[test]
    fn rows_are_space_separated_and_newline_terminated() {
        let matrix = Array2::from_shape_vec((2, 2), vec![0i64, 5, 7, 0]).unwrap();
        let mut out = Vec::new();
        write_rows(&mut out, &matrix).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "0 5\n7 0\n");
    }

    #[test]
    fn infinity_cells_render_inside_rows() {
        let matrix = Array2::from_shape_vec(
            (2, 2),
            vec![
                Cell::Value(0),
                Cell::Infinity,
                Cell::Value(3),
                Cell::Value(0),
            ],
        )
        .unwrap();
        let mut out = Vec::new();
        write_rows(&mut out, &matrix).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "0 inf\n3 0\n");
    }

    #[test]
    fn flat_output_is_a_single_line() {
        let mut out = Vec::new();
        write_flat(&mut out, &[5i64, 5, 5, 5]).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "5 5 5 5\n");
    }
}
