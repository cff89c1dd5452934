pub struct SquaredError;

impl SquaredError {
    /// `(target - output)^2` for the single output unit.
    pub fn loss(target: f64, output: f64) -> f64 {
        (target - output).powi(2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn squares_the_gap() {
        assert_eq!(SquaredError::loss(0.9, 0.4), (0.9f64 - 0.4).powi(2));
        assert_eq!(SquaredError::loss(0.4, 0.9), SquaredError::loss(0.9, 0.4));
        assert_eq!(SquaredError::loss(0.5, 0.5), 0.0);
    }
}
