use fabcost::{
    errors::EstimateError,
    estimate::{Category, CostField, CostLedger, CostRecord, RecordUpdate},
};

#[test]
fn every_category_starts_zeroed() {
    let ledger = CostLedger::new();
    for category in Category::ALL {
        let record = ledger.record(category);
        assert_eq!(record.material_cost, 0.0);
        assert_eq!(record.labor_hours, 0.0);
        assert_eq!(record.hourly_rate, 0.0);
    }
}

#[test]
fn labor_hours_accumulate_additively() {
    let mut split = CostLedger::new();
    split.add_labor_hours(Category::Laser, 0.75);
    split.add_labor_hours(Category::Laser, 1.25);

    let mut single = CostLedger::new();
    single.add_labor_hours(Category::Laser, 2.0);

    assert_eq!(
        split.record(Category::Laser).labor_hours,
        single.record(Category::Laser).labor_hours
    );
}

#[test]
fn total_is_pure_and_matches_formula() {
    let mut ledger = CostLedger::new();
    ledger.update_record(
        Category::Woodworking,
        RecordUpdate {
            material_cost: Some(100.0),
            labor_hours: Some(2.0),
            hourly_rate: Some(25.0),
        },
    );
    let first = ledger.total(Category::Woodworking);
    let second = ledger.total(Category::Woodworking);
    assert_eq!(first, 150.0);
    assert_eq!(first, second);
}

#[test]
fn partial_update_keeps_other_fields() {
    let mut ledger = CostLedger::new();
    ledger.update_record(
        Category::Print3d,
        RecordUpdate {
            material_cost: Some(20.0),
            labor_hours: Some(3.0),
            hourly_rate: Some(15.0),
        },
    );
    ledger.update_record(
        Category::Print3d,
        RecordUpdate::field(CostField::MaterialCost, 35.0),
    );
    assert_eq!(
        *ledger.record(Category::Print3d),
        CostRecord {
            material_cost: 35.0,
            labor_hours: 3.0,
            hourly_rate: 15.0,
        }
    );
}

#[test]
fn manual_edit_after_commit_replaces_hours() {
    let mut ledger = CostLedger::new();
    ledger.add_labor_hours(Category::Woodworking, 1.0);
    ledger.update_record(
        Category::Woodworking,
        RecordUpdate::field(CostField::LaborHours, 0.5),
    );
    ledger.add_labor_hours(Category::Woodworking, 0.25);
    assert_eq!(ledger.record(Category::Woodworking).labor_hours, 0.75);
}

#[test]
fn unknown_category_key_is_rejected() {
    let ledger = CostLedger::new();
    let err = ledger.record_by_key("ceramics").unwrap_err();
    assert!(matches!(err, EstimateError::InvalidCategory(_)));
    assert!(err.to_string().contains("ceramics"));
}
