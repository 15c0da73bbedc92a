use chrono::Utc;
use entity::student_profile::{FeeStatus, Role};
use roomledger_test_utils::prelude::*;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ActiveValue};

use crate::service::fees::FeeService;

use super::date;

/// Expect hostel-wide revenue, pending, and overdue aggregates
#[tokio::test]
async fn aggregates_across_students() -> Result<(), TestError> {
    let test = test_setup_with_core_tables!()?;
    let ada = test.fixtures().insert_student("ada@example.com").await?;
    let grace = test.fixtures().insert_student("grace@example.com").await?;

    let ada_charge = test
        .fixtures()
        .insert_charge(ada.id, None, Decimal::from(5000), date(2024, 1, 1))
        .await?;
    test.fixtures()
        .insert_charge(grace.id, None, Decimal::from(3000), date(2024, 6, 1))
        .await?;
    test.fixtures()
        .insert_payment(ada_charge.id, ada.id, Decimal::from(2000))
        .await?;
    test.fixtures()
        .insert_payment(ada_charge.id, ada.id, Decimal::from(1000))
        .await?;

    let fee_service = FeeService::new(&test.db);
    let summary = fee_service.fleet_summary_on(date(2024, 3, 1)).await.unwrap();

    assert_eq!(summary.total_revenue, Decimal::from(3000));
    assert_eq!(summary.total_pending, Decimal::from(8000));
    assert_eq!(summary.overdue_charges, 1);
    assert_eq!(summary.accounts, 2);

    Ok(())
}

/// Expect only student-role profiles in the account count
#[tokio::test]
async fn accounts_exclude_staff_profiles() -> Result<(), TestError> {
    let test = test_setup_with_core_tables!()?;
    test.fixtures().insert_student("ada@example.com").await?;

    let warden = entity::student_profile::ActiveModel {
        email: ActiveValue::Set("warden@example.com".to_string()),
        role: ActiveValue::Set(Role::Warden),
        fee_status: ActiveValue::Set(FeeStatus::Pending),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        updated_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    };
    warden.insert(&test.db).await?;

    let fee_service = FeeService::new(&test.db);
    let summary = fee_service.fleet_summary_on(date(2024, 3, 1)).await.unwrap();

    assert_eq!(summary.accounts, 1);

    Ok(())
}

/// Expect all-zero aggregates on an empty ledger
#[tokio::test]
async fn empty_ledger_yields_zeroes() -> Result<(), TestError> {
    let test = test_setup_with_core_tables!()?;

    let fee_service = FeeService::new(&test.db);
    let summary = fee_service.fleet_summary_on(date(2024, 3, 1)).await.unwrap();

    assert_eq!(summary.total_revenue, Decimal::ZERO);
    assert_eq!(summary.total_pending, Decimal::ZERO);
    assert_eq!(summary.overdue_charges, 0);
    assert_eq!(summary.accounts, 0);

    Ok(())
}
