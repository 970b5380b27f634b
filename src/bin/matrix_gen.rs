//! Генератор случайной квадратной матрицы с нулевой диагональю

use anyhow::Result;
use std::env;
use std::io::{self, BufWriter, Write};

use matrix_gen::matrix::{generate_square, write_rows};
use matrix_gen::utils::parse_size_args;

const USAGE: &str = "Запуск: matrix-gen <power_of_two> <min_val> <max_val>";

fn main() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let (p, min_val, max_val) = match parse_size_args(&args) {
        Some(parsed) => parsed,
        None => {
            println!("{}", USAGE);
            std::process::exit(1);
        }
    };

    let mut rng = rand::thread_rng();
    let matrix = generate_square(p, min_val, max_val, &mut rng)?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    write_rows(&mut out, &matrix)?;
    out.flush()?;
    Ok(())
}
