//! Indicator arithmetic over price series.

use rust_decimal::{Decimal, MathematicalOps};
use rust_decimal_macros::dec;

/// Relative Strength Index over the full series.
///
/// Averages gains and losses across every step of the series (no
/// smoothing window). A series with no losses reads 100; fewer than two
/// prices reads neutral.
pub fn rsi(prices: &[Decimal]) -> Decimal {
    if prices.len() < 2 {
        return dec!(50);
    }

    let mut gains = Decimal::ZERO;
    let mut losses = Decimal::ZERO;
    let steps = Decimal::from(prices.len() - 1);

    for pair in prices.windows(2) {
        let difference = pair[1] - pair[0];
        if difference >= Decimal::ZERO {
            gains += difference;
        } else {
            losses += difference.abs();
        }
    }

    let avg_gain = gains / steps;
    let avg_loss = losses / steps;

    if avg_loss.is_zero() {
        return dec!(100);
    }

    let rs = avg_gain / avg_loss;
    dec!(100) - dec!(100) / (Decimal::ONE + rs)
}

/// Human-readable band for an RSI value.
pub fn rsi_interpretation(rsi: Decimal) -> &'static str {
    if rsi > dec!(70) {
        "Overbought"
    } else if rsi < dec!(30) {
        "Oversold"
    } else {
        "Neutral"
    }
}

/// Volatility as the standard deviation of simple returns, in percent.
///
/// Steps with a zero base price are skipped rather than producing an
/// unbounded return.
pub fn volatility(prices: &[Decimal]) -> Decimal {
    let returns: Vec<Decimal> = prices
        .windows(2)
        .filter(|pair| !pair[0].is_zero())
        .map(|pair| (pair[1] - pair[0]) / pair[0])
        .collect();

    if returns.is_empty() {
        return Decimal::ZERO;
    }

    let count = Decimal::from(returns.len());
    let mean = returns.iter().sum::<Decimal>() / count;
    let variance = returns
        .iter()
        .map(|r| (*r - mean) * (*r - mean))
        .sum::<Decimal>()
        / count;

    variance.sqrt().unwrap_or_default() * dec!(100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rsi_of_rising_series_is_100() {
        let prices = vec![dec!(1), dec!(2), dec!(3), dec!(4), dec!(5)];
        assert_eq!(rsi(&prices), dec!(100));
    }

    #[test]
    fn test_rsi_of_falling_series_is_0() {
        let prices = vec![dec!(5), dec!(4), dec!(3), dec!(2), dec!(1)];
        assert_eq!(rsi(&prices), dec!(0));
    }

    #[test]
    fn test_rsi_balanced_series_is_50() {
        // One gain of 10 and one loss of 10: rs = 1, rsi = 50.
        let prices = vec![dec!(100), dec!(110), dec!(100)];
        assert_eq!(rsi(&prices), dec!(50));
    }

    #[test]
    fn test_rsi_short_series_is_neutral() {
        assert_eq!(rsi(&[]), dec!(50));
        assert_eq!(rsi(&[dec!(100)]), dec!(50));
    }

    #[test]
    fn test_rsi_interpretation_bands() {
        assert_eq!(rsi_interpretation(dec!(75)), "Overbought");
        assert_eq!(rsi_interpretation(dec!(25)), "Oversold");
        assert_eq!(rsi_interpretation(dec!(50)), "Neutral");
        assert_eq!(rsi_interpretation(dec!(70)), "Neutral");
        assert_eq!(rsi_interpretation(dec!(30)), "Neutral");
    }

    #[test]
    fn test_volatility_of_constant_series_is_zero() {
        let prices = vec![dec!(100), dec!(100), dec!(100)];
        assert_eq!(volatility(&prices), dec!(0));
    }

    #[test]
    fn test_volatility_of_short_series_is_zero() {
        assert_eq!(volatility(&[]), dec!(0));
        assert_eq!(volatility(&[dec!(100)]), dec!(0));
    }

    #[test]
    fn test_volatility_alternating_series() {
        // Returns are +10% and roughly -9.09%; stdev is well above zero.
        let prices = vec![dec!(100), dec!(110), dec!(100)];
        let vol = volatility(&prices);
        assert!(vol > dec!(9));
        assert!(vol < dec!(10));
    }

    #[test]
    fn test_volatility_skips_zero_base() {
        let prices = vec![dec!(0), dec!(100), dec!(100)];
        assert_eq!(volatility(&prices), dec!(0));
    }
}
