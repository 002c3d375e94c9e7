use crate::domain::square::Square;

/// Drop squares that left [0, width] x [0, height] entirely. Survivors keep their order.
///
/// Returns how many were removed.
pub fn cull_offscreen(squares: &mut Vec<Square>, width: f32, height: f32) -> u32 {
    let before = squares.len();
    squares.retain(|s| !s.is_offscreen(width, height));
    (before - squares.len()) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_order_of_survivors() {
        let mut squares = vec![
            Square::new("a", false, 0.0, 0.0, 10.0, 1.0).unwrap(),
            Square::new("gone", false, 0.0, 500.0, 10.0, 1.0).unwrap(),
            Square::new("b", true, 90.0, 90.0, 10.0, 1.0).unwrap(),
        ];
        assert_eq!(cull_offscreen(&mut squares, 100.0, 100.0), 1);
        let names: Vec<&str> = squares.iter().map(|s| s.name()).collect();
        assert_eq!(names, ["a", "b"]);
    }
}
