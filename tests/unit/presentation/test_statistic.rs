use crate::common::statistic_closed_json;
use serde_json::{Value, json};
use wm_client::model::decode::decode;
use wm_client::presentation::statistic::{Statistic, StatisticClosed};

#[test]
fn test_statistic_closed_with_mod_rank() {
    let mut value = statistic_closed_json("2024-03-01T00:00:00.000+00:00", json!(12.5));
    value["mod_rank"] = json!(3);
    let entry: StatisticClosed = decode(&value).unwrap();
    assert_eq!(entry.mod_rank, Some(3));
    assert_eq!(entry.moving_avg, Some(12.5));
    assert_eq!(entry.wa_price, 81.25);
}

#[test]
fn test_statistic_closed_fractional_volume_rejected() {
    let mut value = statistic_closed_json("2024-03-01T00:00:00.000+00:00", Value::Null);
    value["volume"] = json!(1.5);
    let err = decode::<StatisticClosed>(&value).unwrap_err();
    assert_eq!(err.path.to_string(), "volume");
}

#[test]
fn test_empty_statistic() {
    let statistic = Statistic::default();
    assert!(statistic.latest_closed().is_none());
    assert!(statistic.closed_48h.is_empty());
}
