//! Генераторы случайных матриц для тестовых входов алгоритмов

pub mod matrix;
pub mod utils;

// Реэкспорт основных типов для удобства
pub use matrix::Cell;
