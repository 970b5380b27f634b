//! Генератор матрицы расстояний для Флойда-Уоршелла
//!
//! Внедиагональные ячейки с настраиваемой долей заменяются на
//! бесконечность (токен "inf").

use anyhow::Result;
use std::env;
use std::io::{self, BufWriter, Write};

use matrix_gen::matrix::{generate_floyd, write_rows};
use matrix_gen::utils::parse_size_args;

const USAGE: &str =
    "Запуск: floyd-matrix-gen <power_of_two> <min_val> <max_val> <infinity_percentage>";

fn parse_args(args: &[String]) -> Option<(u32, i64, i64, f64)> {
    if args.len() != 4 {
        return None;
    }
    let (p, min_val, max_val) = parse_size_args(&args[..3])?;
    let infinity_percent = args[3].parse().ok()?;
    Some((p, min_val, max_val, infinity_percent))
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let (p, min_val, max_val, infinity_percent) = match parse_args(&args) {
        Some(parsed) => parsed,
        None => {
            println!("{}", USAGE);
            std::process::exit(1);
        }
    };

    let mut rng = rand::thread_rng();
    let matrix = generate_floyd(p, min_val, max_val, infinity_percent, &mut rng)?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    write_rows(&mut out, &matrix)?;
    out.flush()?;
    Ok(())
}
