use trading_chart_wasm::domain::chart::{PricePoint, PriceSeries};

fn window_of(count: usize, width: f64) -> PriceSeries {
    let points = (0..count)
        .map(|i| PricePoint::at(i as f64 / count as f64 * width, 100.0 + i as f64))
        .collect();
    PriceSeries::new(points)
}

#[test]
fn appended_point_sits_at_the_right_edge_before_respacing() {
    let width = 300.0;
    let mut series = window_of(100, width);

    series.scroll(PricePoint::at(width, 222.0));
    assert_eq!(series.len(), 100);
    assert_eq!(series.last().unwrap().x, width);

    series.respace(width);
    assert_eq!(series.last().unwrap().x, width * 99.0 / 100.0);
    assert_eq!(series.first().unwrap().x, 0.0);
}

#[test]
fn scroll_drops_exactly_the_oldest() {
    let mut series = window_of(10, 30.0);
    let second = series.points()[1];

    series.scroll(PricePoint::at(30.0, 500.0));
    assert_eq!(series.len(), 10);
    assert_eq!(series.first().unwrap().price, second.price);
    assert_eq!(series.last().unwrap().price, 500.0);
}

#[test]
fn respace_keeps_order_and_span() {
    let mut series = window_of(25, 75.0);
    series.scroll(PricePoint::at(75.0, 120.0));
    series.respace(75.0);

    let points = series.points();
    for (i, point) in points.iter().enumerate() {
        assert_eq!(point.x, i as f64 / 25.0 * 75.0);
    }
}
