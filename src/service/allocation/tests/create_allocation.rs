use chrono::Utc;
use entity::charge::ChargeStatus;
use entity::student_profile::{FeeStatus, Role};
use roomledger_test_utils::prelude::*;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ActiveValue, ColumnTrait, EntityTrait, QueryFilter};

use crate::{
    error::{ConflictError, Error, NotFoundError, ValidationError},
    service::allocation::AllocationService,
};

use super::{date, seed_double_room, seed_single_room};

/// Expect the allocation and exactly one pending charge for the room's rent,
/// due on the start date
#[tokio::test]
async fn creates_allocation_with_charge() -> Result<(), TestError> {
    let test = test_setup_with_core_tables!()?;
    let room = seed_double_room(&test).await?;
    let student = test.fixtures().insert_student("ada@example.com").await?;

    let allocation_service = AllocationService::new(&test.db);
    let result = allocation_service
        .create_allocation(student.id, room.id, date(2024, 1, 1), None)
        .await;

    assert!(result.is_ok());
    let (allocation, charge) = result.unwrap();
    assert_eq!(allocation.student_id, student.id);
    assert!(allocation.end_date.is_none());
    assert_eq!(charge.allocation_id, Some(allocation.id));
    assert_eq!(charge.amount, Decimal::from(5000));
    assert_eq!(charge.due_date, date(2024, 1, 1));
    assert_eq!(charge.status, ChargeStatus::Pending);

    let charges = entity::prelude::Charge::find().all(&test.db).await?;
    assert_eq!(charges.len(), 1);

    Ok(())
}

/// Expect a double room to accept two students and conflict on the third
#[tokio::test]
async fn fills_double_room_then_conflicts() -> Result<(), TestError> {
    let test = test_setup_with_core_tables!()?;
    let room = seed_double_room(&test).await?;
    let x = test.fixtures().insert_student("x@example.com").await?;
    let y = test.fixtures().insert_student("y@example.com").await?;
    let z = test.fixtures().insert_student("z@example.com").await?;

    let allocation_service = AllocationService::new(&test.db);

    assert!(allocation_service
        .create_allocation(x.id, room.id, date(2024, 1, 1), None)
        .await
        .is_ok());
    assert!(allocation_service
        .create_allocation(y.id, room.id, date(2024, 1, 1), None)
        .await
        .is_ok());

    let result = allocation_service
        .create_allocation(z.id, room.id, date(2024, 1, 1), None)
        .await;

    assert!(matches!(
        result,
        Err(Error::Conflict(ConflictError::RoomAtFullCapacity))
    ));

    Ok(())
}

/// Expect a single room to conflict on the second student
#[tokio::test]
async fn single_room_holds_one_student() -> Result<(), TestError> {
    let test = test_setup_with_core_tables!()?;
    let room = seed_single_room(&test).await?;
    let ada = test.fixtures().insert_student("ada@example.com").await?;
    let grace = test.fixtures().insert_student("grace@example.com").await?;

    let allocation_service = AllocationService::new(&test.db);
    allocation_service
        .create_allocation(ada.id, room.id, date(2024, 1, 1), None)
        .await
        .unwrap();

    let result = allocation_service
        .create_allocation(grace.id, room.id, date(2024, 3, 1), None)
        .await;

    assert!(matches!(
        result,
        Err(Error::Conflict(ConflictError::RoomAtFullCapacity))
    ));

    Ok(())
}

/// Expect closed historical records to count toward capacity over their interval
#[tokio::test]
async fn closed_overlaps_count_toward_capacity() -> Result<(), TestError> {
    let test = test_setup_with_core_tables!()?;
    let room = seed_single_room(&test).await?;
    let ada = test.fixtures().insert_student("ada@example.com").await?;
    let grace = test.fixtures().insert_student("grace@example.com").await?;

    let allocation_service = AllocationService::new(&test.db);
    allocation_service
        .create_allocation(
            ada.id,
            room.id,
            date(2024, 1, 1),
            Some(date(2024, 6, 1)),
        )
        .await
        .unwrap();

    // overlaps the closed interval, same room
    let result = allocation_service
        .create_allocation(
            grace.id,
            room.id,
            date(2024, 3, 1),
            Some(date(2024, 4, 1)),
        )
        .await;

    assert!(matches!(
        result,
        Err(Error::Conflict(ConflictError::RoomAtFullCapacity))
    ));

    Ok(())
}

/// Expect a second open allocation for the same student to conflict even in
/// another room
#[tokio::test]
async fn rejects_second_active_allocation() -> Result<(), TestError> {
    let test = test_setup_with_core_tables!()?;
    let room_a = seed_double_room(&test).await?;
    let room_b = seed_single_room(&test).await?;
    let student = test.fixtures().insert_student("ada@example.com").await?;

    let allocation_service = AllocationService::new(&test.db);
    allocation_service
        .create_allocation(student.id, room_a.id, date(2024, 1, 1), None)
        .await
        .unwrap();

    let result = allocation_service
        .create_allocation(student.id, room_b.id, date(2024, 2, 1), None)
        .await;

    assert!(matches!(
        result,
        Err(Error::Conflict(ConflictError::ActiveAllocationExists))
    ));

    Ok(())
}

/// Expect a closed historical record to be accepted for a student who also
/// holds an open allocation elsewhere
#[tokio::test]
async fn allows_closed_record_despite_active_allocation() -> Result<(), TestError> {
    let test = test_setup_with_core_tables!()?;
    let room_a = seed_double_room(&test).await?;
    let room_b = seed_single_room(&test).await?;
    let student = test.fixtures().insert_student("ada@example.com").await?;

    let allocation_service = AllocationService::new(&test.db);
    allocation_service
        .create_allocation(student.id, room_a.id, date(2024, 1, 1), None)
        .await
        .unwrap();

    let result = allocation_service
        .create_allocation(
            student.id,
            room_b.id,
            date(2023, 1, 1),
            Some(date(2023, 6, 1)),
        )
        .await;

    assert!(result.is_ok());

    Ok(())
}

/// Expect ValidationError when the end date precedes the start date
#[tokio::test]
async fn rejects_end_before_start() -> Result<(), TestError> {
    let test = test_setup_with_core_tables!()?;
    let room = seed_double_room(&test).await?;
    let student = test.fixtures().insert_student("ada@example.com").await?;

    let allocation_service = AllocationService::new(&test.db);
    let result = allocation_service
        .create_allocation(
            student.id,
            room.id,
            date(2024, 6, 1),
            Some(date(2024, 1, 1)),
        )
        .await;

    assert!(matches!(
        result,
        Err(Error::Validation(ValidationError::EndBeforeStart { .. }))
    ));

    Ok(())
}

/// Expect NotFoundError for a room that does not exist
#[tokio::test]
async fn fails_for_nonexistent_room() -> Result<(), TestError> {
    let test = test_setup_with_core_tables!()?;
    let student = test.fixtures().insert_student("ada@example.com").await?;

    let allocation_service = AllocationService::new(&test.db);
    let result = allocation_service
        .create_allocation(student.id, 99, date(2024, 1, 1), None)
        .await;

    assert!(matches!(
        result,
        Err(Error::NotFound(NotFoundError::Room(99)))
    ));

    Ok(())
}

/// Expect NotFoundError for a student that does not exist
#[tokio::test]
async fn fails_for_nonexistent_student() -> Result<(), TestError> {
    let test = test_setup_with_core_tables!()?;
    let room = seed_double_room(&test).await?;

    let allocation_service = AllocationService::new(&test.db);
    let result = allocation_service
        .create_allocation(99, room.id, date(2024, 1, 1), None)
        .await;

    assert!(matches!(
        result,
        Err(Error::NotFound(NotFoundError::Student(99)))
    ));

    Ok(())
}

/// Expect an inactive room to refuse new open allocations
#[tokio::test]
async fn rejects_inactive_room() -> Result<(), TestError> {
    let test = test_setup_with_core_tables!()?;
    let room = seed_double_room(&test).await?;
    let student = test.fixtures().insert_student("ada@example.com").await?;

    let room_service = crate::service::room::RoomService::new(&test.db);
    room_service.set_active(room.id, false).await.unwrap();

    let allocation_service = AllocationService::new(&test.db);
    let result = allocation_service
        .create_allocation(student.id, room.id, date(2024, 1, 1), None)
        .await;

    assert!(matches!(
        result,
        Err(Error::Conflict(ConflictError::RoomInactive { .. }))
    ));

    Ok(())
}

/// Expect a paid student to be reset to pending when a new open allocation is
/// created for them
#[tokio::test]
async fn resets_paid_fee_status_to_pending() -> Result<(), TestError> {
    let test = test_setup_with_core_tables!()?;
    let room = seed_double_room(&test).await?;
    let student = test
        .fixtures()
        .insert_student_with_status("ada@example.com", FeeStatus::Paid)
        .await?;

    let allocation_service = AllocationService::new(&test.db);
    allocation_service
        .create_allocation(student.id, room.id, date(2024, 1, 1), None)
        .await
        .unwrap();

    let stored = entity::prelude::StudentProfile::find_by_id(student.id)
        .one(&test.db)
        .await?
        .unwrap();
    assert_eq!(stored.fee_status, FeeStatus::Pending);

    Ok(())
}

/// Expect concurrent allocations into one double room to never exceed its
/// capacity
#[tokio::test(flavor = "multi_thread")]
async fn concurrent_creates_respect_capacity() -> Result<(), TestError> {
    let test = test_setup_with_core_tables!()?;
    let room = seed_double_room(&test).await?;

    let mut students = Vec::new();
    for n in 0..6 {
        students.push(
            test.fixtures()
                .insert_student(&format!("student{n}@example.com"))
                .await?,
        );
    }

    let mut handles = Vec::new();
    for student in students {
        let db = test.db.clone();
        let room_id = room.id;
        handles.push(tokio::spawn(async move {
            AllocationService::new(&db)
                .create_allocation(student.id, room_id, date(2024, 1, 1), None)
                .await
        }));
    }

    let mut successes = 0;
    for handle in handles {
        if handle.await.unwrap().is_ok() {
            successes += 1;
        }
    }

    assert!(successes <= 2);

    let stored = entity::prelude::Allocation::find()
        .filter(entity::allocation::Column::RoomId.eq(room.id))
        .all(&test.db)
        .await?;
    assert_eq!(stored.len(), successes);
    assert!(stored.len() <= 2);

    Ok(())
}

/// Expect a staff profile's paid baseline to survive a new open allocation
#[tokio::test]
async fn staff_profile_keeps_fee_status() -> Result<(), TestError> {
    let test = test_setup_with_core_tables!()?;
    let room = seed_double_room(&test).await?;

    let warden = entity::student_profile::ActiveModel {
        email: ActiveValue::Set("warden@example.com".to_string()),
        role: ActiveValue::Set(Role::Warden),
        fee_status: ActiveValue::Set(FeeStatus::Paid),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        updated_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    };
    let warden = warden.insert(&test.db).await?;

    let allocation_service = AllocationService::new(&test.db);
    allocation_service
        .create_allocation(warden.id, room.id, date(2024, 1, 1), None)
        .await
        .unwrap();

    let stored = entity::prelude::StudentProfile::find_by_id(warden.id)
        .one(&test.db)
        .await?
        .unwrap();
    assert_eq!(stored.fee_status, FeeStatus::Paid);

    Ok(())
}

/// Expect a closed historical record not to touch the stored fee status
#[tokio::test]
async fn closed_record_keeps_fee_status() -> Result<(), TestError> {
    let test = test_setup_with_core_tables!()?;
    let room = seed_double_room(&test).await?;
    let student = test
        .fixtures()
        .insert_student_with_status("ada@example.com", FeeStatus::Paid)
        .await?;

    let allocation_service = AllocationService::new(&test.db);
    allocation_service
        .create_allocation(
            student.id,
            room.id,
            date(2023, 1, 1),
            Some(date(2023, 6, 1)),
        )
        .await
        .unwrap();

    let stored = entity::prelude::StudentProfile::find_by_id(student.id)
        .one(&test.db)
        .await?
        .unwrap();
    assert_eq!(stored.fee_status, FeeStatus::Paid);

    Ok(())
}
