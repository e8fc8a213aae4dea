//! Pearson correlation.

use crate::features::PreparedOrder;

/// Pearson correlation coefficient of paired values.
///
/// Returns `None` with fewer than two pairs, mismatched lengths, or when
/// either series is constant.
pub fn pearson(x: &[f64], y: &[f64]) -> Option<f64> {
    if x.len() != y.len() || x.len() < 2 {
        return None;
    }
    let n = x.len() as f64;
    let mean_x = x.iter().sum::<f64>() / n;
    let mean_y = y.iter().sum::<f64>() / n;

    let (mut sxy, mut sxx, mut syy) = (0.0, 0.0, 0.0);
    for (a, b) in x.iter().zip(y) {
        let (dx, dy) = (a - mean_x, b - mean_y);
        sxy += dx * dy;
        sxx += dx * dx;
        syy += dy * dy;
    }

    if sxx == 0.0 || syy == 0.0 {
        return None;
    }
    let r = sxy / (sxx * syy).sqrt();
    r.is_finite().then(|| r.clamp(-1.0, 1.0))
}

/// Correlation between order value and delivery delay.
pub fn value_delay_correlation(orders: &[PreparedOrder]) -> Option<f64> {
    let values: Vec<f64> = orders.iter().map(|o| o.record.order_value).collect();
    let delays: Vec<f64> = orders.iter().map(|o| o.delay_minutes()).collect();
    pearson(&values, &delays)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perfect_correlation() {
        let x = [1.0, 2.0, 3.0, 4.0];
        let y = [10.0, 20.0, 30.0, 40.0];
        assert!((pearson(&x, &y).unwrap() - 1.0).abs() < 1e-12);
        let neg: Vec<f64> = y.iter().map(|v| -v).collect();
        assert!((pearson(&x, &neg).unwrap() + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_known_value() {
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        let y = [2.0, 4.0, 5.0, 4.0, 5.0];
        assert!((pearson(&x, &y).unwrap() - 0.774_596_669).abs() < 1e-6);
    }

    #[test]
    fn test_undefined_cases() {
        assert_eq!(pearson(&[1.0], &[2.0]), None);
        assert_eq!(pearson(&[1.0, 2.0], &[3.0, 3.0]), None);
        assert_eq!(pearson(&[1.0, 2.0], &[1.0]), None);
        assert_eq!(pearson(&[1.0, f64::NAN, 3.0], &[2.0, 4.0, 6.0]), None);
        assert_eq!(pearson(&[1.0, f64::INFINITY, 3.0], &[2.0, 4.0, 6.0]), None);
    }
}
