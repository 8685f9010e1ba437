//! Latest data point selection.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use chrono::{TimeZone, Utc};

use ses_exporter_core::{select_latest, ErrorCode, SendDataPoint};

fn point(h: u32, m: u32, bounces: i64) -> SendDataPoint {
    SendDataPoint {
        timestamp: Utc.with_ymd_and_hms(2024, 3, 1, h, m, 0).unwrap(),
        bounces,
        complaints: 0,
        delivery_attempts: 0,
        rejects: 0,
    }
}

#[test]
fn picks_greatest_timestamp_regardless_of_order() {
    let points = vec![point(10, 5, 5), point(9, 45, 2), point(10, 0, 1), point(8, 0, 9)];
    let latest = select_latest(&points).unwrap();
    assert_eq!(latest.bounces, 5);
    assert!(points.iter().all(|p| p.timestamp <= latest.timestamp));
}

#[test]
fn single_point_is_latest() {
    let points = vec![point(12, 0, 3)];
    assert_eq!(select_latest(&points).unwrap(), &points[0]);
}

#[test]
fn empty_series_is_an_error() {
    let err = select_latest(&[]).expect_err("must fail");
    assert_eq!(err.code(), ErrorCode::EmptySeries);
}

#[test]
fn ties_return_one_of_the_tied_points() {
    let points = vec![point(10, 0, 1), point(11, 0, 2), point(11, 0, 3)];
    let latest = select_latest(&points).unwrap();
    assert_eq!(latest.timestamp, points[1].timestamp);
    assert!(latest.bounces == 2 || latest.bounces == 3);
}

#[test]
fn input_order_is_preserved() {
    let points = vec![point(10, 5, 5), point(9, 0, 1), point(10, 0, 2)];
    let before = points.clone();
    let _ = select_latest(&points).unwrap();
    assert_eq!(points, before);
}
