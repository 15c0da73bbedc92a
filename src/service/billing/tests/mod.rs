
use chrono::NaiveDate;
use entity::room::RoomCategory;
use roomledger_test_utils::{TestError, TestSetup};
use rust_decimal::Decimal;

pub(crate) fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Room "A-101", category double, rent 5000
pub(crate) async fn seed_room(test: &TestSetup) -> Result<entity::room::Model, TestError> {
    test.fixtures()
        .insert_room("A-101", RoomCategory::Double, Decimal::from(5000))
        .await
}
