
use chrono::NaiveDate;
use roomledger_test_utils::{TestError, TestSetup};
use rust_decimal::Decimal;

pub(crate) fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// A student with a single pending charge of 5000 due 2024-01-01
pub(crate) async fn seed_charge(
    test: &TestSetup,
) -> Result<(entity::student_profile::Model, entity::charge::Model), TestError> {
    let student = test.fixtures().insert_student("ada@example.com").await?;
    let charge = test
        .fixtures()
        .insert_charge(student.id, None, Decimal::from(5000), date(2024, 1, 1))
        .await?;

    Ok((student, charge))
}
