use trading_chart_wasm::domain::chart::{PricePoint, PriceSeries, SurfaceSize};
use trading_chart_wasm::domain::random::SequenceSource;
use trading_chart_wasm::infrastructure::rendering::geometry;

fn series_from_prices(prices: &[f64], width: f64) -> PriceSeries {
    let count = prices.len();
    let points = prices
        .iter()
        .enumerate()
        .map(|(i, price)| PricePoint::at(i as f64 / count as f64 * width, *price))
        .collect();
    PriceSeries::new(points)
}

#[test]
fn one_candle_per_three_points() {
    let series = series_from_prices(&[100.0; 10], 300.0);
    let mut rng = SequenceSource::constant(0.0);
    let glyphs = geometry::candle_glyphs(&series, 300.0, &mut rng);
    assert_eq!(glyphs.len(), 4); // opens at indices 0, 3, 6, 9
}

#[test]
fn down_candle_when_close_not_above_open() {
    let mut rng = SequenceSource::constant(0.0);

    let falling = series_from_prices(&[200.0, 180.0, 190.0], 9.0);
    let glyphs = geometry::candle_glyphs(&falling, 9.0, &mut rng);
    assert!(!glyphs[0].bullish);

    let flat = series_from_prices(&[200.0, 200.0, 200.0], 9.0);
    let glyphs = geometry::candle_glyphs(&flat, 9.0, &mut rng);
    assert!(!glyphs[0].bullish);

    let rising = series_from_prices(&[180.0, 200.0, 190.0], 9.0);
    let glyphs = geometry::candle_glyphs(&rising, 9.0, &mut rng);
    assert!(glyphs[0].bullish);
}

#[test]
fn wick_extends_past_the_body_in_screen_space() {
    // Screen coordinates: the synthetic high is a smaller y than the body
    // top, the synthetic low a larger y than the body bottom.
    let series = series_from_prices(&[200.0, 240.0], 6.0);
    let mut rng = SequenceSource::new(vec![0.0, 0.5, 1.0]);
    let glyphs = geometry::candle_glyphs(&series, 6.0, &mut rng);

    let glyph = &glyphs[0];
    assert!(glyph.high_y <= glyph.body_top - geometry::WICK_GAP);
    assert!(glyph.low_y >= glyph.body_top + glyph.body_height + geometry::WICK_GAP - 1e-9);
    assert!(glyph.high_y >= glyph.body_top - geometry::WICK_GAP - geometry::WICK_EXTENT);
}

#[test]
fn body_has_minimum_height() {
    let series = series_from_prices(&[200.0, 200.5, 200.0], 9.0);
    let mut rng = SequenceSource::constant(0.0);
    let glyphs = geometry::candle_glyphs(&series, 9.0, &mut rng);
    assert_eq!(glyphs[0].body_height, geometry::MIN_BODY_HEIGHT);
}

#[test]
fn trailing_candle_closes_on_itself() {
    let series = series_from_prices(&[100.0, 110.0, 120.0, 130.0], 12.0);
    let mut rng = SequenceSource::constant(0.0);
    let glyphs = geometry::candle_glyphs(&series, 12.0, &mut rng);

    assert_eq!(glyphs.len(), 2);
    let last = &glyphs[1];
    assert!(!last.bullish); // close == open
    assert_eq!(last.body_top, 130.0);
    assert_eq!(last.body_height, geometry::MIN_BODY_HEIGHT);
}

#[test]
fn candle_width_from_point_spacing() {
    assert_eq!(geometry::candle_width(300.0, 100), 2.0); // 1.5 floored to min
    assert_eq!(geometry::candle_width(300.0, 10), 15.0);
    assert_eq!(geometry::candle_width(300.0, 0), geometry::MIN_CANDLE_WIDTH);
}

#[test]
fn grid_density_is_fixed() {
    let layout = geometry::grid_layout(SurfaceSize::new(400, 200));
    assert_eq!(layout.rows.len(), 10);
    assert_eq!(layout.cols.len(), 20);
    assert_eq!(layout.rows[1], 20.0);
    assert_eq!(layout.cols[1], 20.0);
    assert_eq!(layout.rows[0], 0.0);
}

#[test]
fn volume_bars_cover_every_other_point() {
    let series = series_from_prices(&[100.0; 9], 27.0);
    let mut rng = SequenceSource::new(vec![0.0, 0.25, 0.5, 0.75]);
    let bars = geometry::volume_bars(&series, &mut rng);

    assert_eq!(bars.len(), 5); // indices 0, 2, 4, 6, 8
    for bar in &bars {
        assert!(bar.height >= geometry::VOLUME_MIN);
        assert!(bar.height < geometry::VOLUME_MAX);
    }
}
