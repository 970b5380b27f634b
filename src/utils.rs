//! Вспомогательные функции и утилиты

/// Разбирает аргументы вида `<power_of_two> <min_val> <max_val>`
///
/// Возвращает None при любой ошибке разбора; решение о выводе
/// подсказки остается за вызывающей программой.
pub fn parse_size_args(args: &[String]) -> Option<(u32, i64, i64)> {
    if args.len() != 3 {
        return None;
    }
    let p = args[0].parse().ok()?;
    let min_val = args[1].parse().ok()?;
    let max_val = args[2].parse().ok()?;
    Some((p, min_val, max_val))
}
