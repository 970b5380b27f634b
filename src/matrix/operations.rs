//! Генерация случайных матриц

use anyhow::{ensure, Result};
use ndarray::Array2;
use rand::Rng;

use super::types::Cell;

/// Вычисляет длину стороны матрицы n = 2^p
fn side_length(p: u32) -> Result<usize> {
    // При p >= 32 произведение n*n не помещается в usize
    ensure!(p < 32, "Показатель степени слишком велик: {}", p);
    Ok(1usize << p)
}

/// Генерирует квадратную матрицу с нулевой диагональю
///
/// Внедиагональные элементы выбираются равномерно из [min_val, max_val].
pub fn generate_square<R: Rng>(
    p: u32,
    min_val: i64,
    max_val: i64,
    rng: &mut R,
) -> Result<Array2<i64>> {
    let n = side_length(p)?;
    ensure!(
        min_val <= max_val,
        "Пустой диапазон значений: [{}, {}]",
        min_val,
        max_val
    );

    let mut matrix = Array2::zeros((n, n));
    for i in 0..n {
        for j in 0..n {
            if i != j {
                matrix[[i, j]] = rng.gen_range(min_val..=max_val);
            }
        }
    }
    Ok(matrix)
}

/// Генерирует матрицу расстояний с бесконечностями для Флойда-Уоршелла
///
/// Диапазон выборки расширяется до ceil(max_val + (max_val - min_val) *
/// infinity_percent); выпавшее значение больше max_val превращается в
/// бесконечность. Чем больше infinity_percent, тем чаще бесконечности.
pub fn generate_floyd<R: Rng>(
    p: u32,
    min_val: i64,
    max_val: i64,
    infinity_percent: f64,
    rng: &mut R,
) -> Result<Array2<Cell>> {
    let n = side_length(p)?;
    ensure!(
        min_val <= max_val,
        "Пустой диапазон значений: [{}, {}]",
        min_val,
        max_val
    );
    ensure!(
        infinity_percent.is_finite() && infinity_percent >= 0.0,
        "Доля бесконечностей должна быть неотрицательной: {}",
        infinity_percent
    );

    let actual_max = extended_upper_bound(min_val, max_val, infinity_percent);

    let mut matrix = Array2::from_elem((n, n), Cell::Value(0));
    for i in 0..n {
        for j in 0..n {
            if i != j {
                // Даем шанс на бесконечное значение
                let choice = rng.gen_range(min_val..=actual_max);
                matrix[[i, j]] = if choice > max_val {
                    Cell::Infinity
                } else {
                    Cell::Value(choice)
                };
            }
        }
    }
    Ok(matrix)
}

/// Генерирует n*n значений одной плоской последовательностью
pub fn generate_flat<R: Rng>(
    p: u32,
    min_val: i64,
    max_val: i64,
    rng: &mut R,
) -> Result<Vec<i64>> {
    let n = side_length(p)?;
    ensure!(
        min_val <= max_val,
        "Пустой диапазон значений: [{}, {}]",
        min_val,
        max_val
    );

    let values = (0..n * n).map(|_| rng.gen_range(min_val..=max_val)).collect();
    Ok(values)
}

/// Расширенная верхняя граница выборки для внедиагональных ячеек
pub fn extended_upper_bound(min_val: i64, max_val: i64, infinity_percent: f64) -> i64 {
    (max_val as f64 + (max_val - min_val) as f64 * infinity_percent).ceil() as i64
}
