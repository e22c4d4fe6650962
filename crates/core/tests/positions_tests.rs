use std::sync::Arc;

use rust_decimal_macros::dec;
use tempfile::TempDir;

use positions_core::db::{self, DbPool};
use positions_core::positions::{
    NewPosition, PositionFilters, PositionPatch, PositionRepository, Sort,
};
use positions_core::Error;

fn setup_db() -> (TempDir, Arc<DbPool>) {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("positions.db");
    let db_path = db_path.to_str().unwrap().to_string();
    db::init(&db_path).unwrap();
    let pool = db::create_pool(&db_path).unwrap();
    db::run_migrations(&pool).unwrap();
    (dir, pool)
}

fn sample(account: &str, value: f64, currency: &str, instrument: &str) -> NewPosition {
    NewPosition {
        partner_id: Some("P1".to_string()),
        account_id: Some(account.to_string()),
        value_amount: rust_decimal::Decimal::try_from(value).ok(),
        value_currency: Some(currency.to_string()),
        instrument_name_short: Some(instrument.to_string()),
        asset_class_description_short: Some("Equities".to_string()),
        ..Default::default()
    }
}

#[test]
fn create_then_get_round_trips() {
    let (_dir, pool) = setup_db();
    let repository = PositionRepository::new(pool);

    let created = repository
        .create_position(sample("ACC-1", 1500.25, "CHF", "Nestle SA"))
        .unwrap();
    assert!(created.id > 0);

    let fetched = repository.get_position(created.id).unwrap();
    assert_eq!(fetched.account_id.as_deref(), Some("ACC-1"));
    assert_eq!(fetched.value_amount, Some(dec!(1500.25)));
}

#[test]
fn get_missing_position_is_not_found() {
    let (_dir, pool) = setup_db();
    let repository = PositionRepository::new(pool);

    let err = repository.get_position(9999).unwrap_err();
    assert!(matches!(err, Error::Position(_)));
}

#[test]
fn update_replaces_every_field() {
    let (_dir, pool) = setup_db();
    let repository = PositionRepository::new(pool);

    let created = repository
        .create_position(sample("ACC-1", 100.0, "CHF", "Nestle SA"))
        .unwrap();

    // The replacement carries no instrument name, so the stored one is gone
    let replacement = NewPosition {
        account_id: Some("ACC-1".to_string()),
        value_amount: Some(dec!(999)),
        value_currency: Some("EUR".to_string()),
        ..Default::default()
    };
    let updated = repository.update_position(created.id, replacement).unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.value_amount, Some(dec!(999)));
    assert_eq!(updated.value_currency.as_deref(), Some("EUR"));
    assert_eq!(updated.instrument_name_short, None);
    assert_eq!(updated.partner_id, None);
}

#[test]
fn patch_changes_only_named_fields() {
    let (_dir, pool) = setup_db();
    let repository = PositionRepository::new(pool);

    let created = repository
        .create_position(sample("ACC-1", 100.0, "CHF", "Nestle SA"))
        .unwrap();

    let patch = PositionPatch {
        value_amount: Some(dec!(123.45)),
        ..Default::default()
    };
    let patched = repository.patch_position(created.id, &patch).unwrap();
    assert_eq!(patched.value_amount, Some(dec!(123.45)));
    assert_eq!(patched.value_currency.as_deref(), Some("CHF"));
    assert_eq!(patched.instrument_name_short.as_deref(), Some("Nestle SA"));
}

#[test]
fn delete_removes_the_row_and_misses_report_not_found() {
    let (_dir, pool) = setup_db();
    let repository = PositionRepository::new(pool);

    let created = repository
        .create_position(sample("ACC-1", 100.0, "CHF", "Nestle SA"))
        .unwrap();
    repository.delete_position(created.id).unwrap();
    assert_eq!(repository.count_positions().unwrap(), 0);
    assert!(repository.delete_position(created.id).is_err());
}

#[test]
fn listing_paginates_with_stable_order() {
    let (_dir, pool) = setup_db();
    let repository = PositionRepository::new(pool);

    for i in 0..5 {
        repository
            .create_position(sample("ACC-1", 100.0 * f64::from(i + 1), "CHF", "Instr"))
            .unwrap();
    }

    let (page_one, total) = repository.list_positions(1, 2, None).unwrap();
    assert_eq!(total, 5);
    assert_eq!(page_one.len(), 2);
    let (page_three, _) = repository.list_positions(3, 2, None).unwrap();
    assert_eq!(page_three.len(), 1);

    let sort = Sort {
        id: "valueAmount".to_string(),
        desc: true,
    };
    let (sorted, _) = repository.list_positions(1, 5, Some(sort)).unwrap();
    assert_eq!(sorted[0].value_amount, Some(dec!(500)));
    assert_eq!(sorted[4].value_amount, Some(dec!(100)));
}

#[test]
fn search_combines_filters() {
    let (_dir, pool) = setup_db();
    let repository = PositionRepository::new(pool);

    repository
        .create_position(sample("ACC-1", 1000.0, "CHF", "Nestle SA"))
        .unwrap();
    repository
        .create_position(sample("ACC-1", 50.0, "CHF", "Novartis AG"))
        .unwrap();
    repository
        .create_position(sample("ACC-2", 2000.0, "USD", "Nestle SA"))
        .unwrap();

    let filters = PositionFilters {
        account_id: Some("ACC-1".to_string()),
        min_value: Some(dec!(100)),
        ..Default::default()
    };
    let hits = repository.search_positions(&filters).unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].instrument_name_short.as_deref(), Some("Nestle SA"));

    let by_name = PositionFilters {
        instrument_name: Some("Nestle".to_string()),
        ..Default::default()
    };
    assert_eq!(repository.search_positions(&by_name).unwrap().len(), 2);
}

#[test]
fn value_queries_order_descending() {
    let (_dir, pool) = setup_db();
    let repository = PositionRepository::new(pool);

    repository.create_position(sample("ACC-1", 100.0, "CHF", "A")).unwrap();
    repository.create_position(sample("ACC-1", 300.0, "CHF", "B")).unwrap();
    repository.create_position(sample("ACC-1", 200.0, "CHF", "C")).unwrap();

    let above = repository.get_positions_above_value(150.0).unwrap();
    assert_eq!(above.len(), 2);
    assert_eq!(above[0].value_amount, Some(dec!(300)));

    let top = repository.get_top_positions_by_value(2).unwrap();
    assert_eq!(top.len(), 2);
    assert_eq!(top[0].value_amount, Some(dec!(300)));
    assert_eq!(top[1].value_amount, Some(dec!(200)));
}

#[test]
fn distinct_listings_are_sorted_and_deduplicated() {
    let (_dir, pool) = setup_db();
    let repository = PositionRepository::new(pool);

    repository.create_position(sample("ACC-2", 1.0, "USD", "A")).unwrap();
    repository.create_position(sample("ACC-1", 2.0, "CHF", "B")).unwrap();
    repository.create_position(sample("ACC-1", 3.0, "CHF", "C")).unwrap();

    assert_eq!(
        repository.get_distinct_account_ids().unwrap(),
        vec!["ACC-1".to_string(), "ACC-2".to_string()]
    );
    assert_eq!(
        repository.get_distinct_currencies().unwrap(),
        vec!["CHF".to_string(), "USD".to_string()]
    );
    assert_eq!(repository.get_distinct_partner_ids().unwrap(), vec!["P1".to_string()]);
}

#[test]
fn counts_by_dimension() {
    let (_dir, pool) = setup_db();
    let repository = PositionRepository::new(pool);

    repository.create_position(sample("ACC-1", 1.0, "CHF", "A")).unwrap();
    repository.create_position(sample("ACC-1", 2.0, "CHF", "B")).unwrap();
    repository.create_position(sample("ACC-2", 3.0, "CHF", "C")).unwrap();

    assert_eq!(repository.count_positions().unwrap(), 3);
    assert_eq!(repository.count_by_account("ACC-1").unwrap(), 2);
    assert_eq!(repository.count_by_partner("P1").unwrap(), 3);
    assert_eq!(repository.count_by_partner("P2").unwrap(), 0);
}

#[test]
fn batch_delete_ignores_missing_ids() {
    let (_dir, pool) = setup_db();
    let repository = PositionRepository::new(pool);

    let a = repository.create_position(sample("ACC-1", 1.0, "CHF", "A")).unwrap();
    let b = repository.create_position(sample("ACC-2", 2.0, "CHF", "B")).unwrap();
    repository.create_position(sample("ACC-3", 3.0, "CHF", "C")).unwrap();

    let deleted = repository.delete_positions(&[a.id, b.id, 99_999]).unwrap();
    assert_eq!(deleted, 2);
    assert_eq!(repository.count_positions().unwrap(), 1);
}

#[test]
fn delete_all_reports_how_many_went() {
    let (_dir, pool) = setup_db();
    let repository = PositionRepository::new(pool);

    repository.create_position(sample("ACC-1", 1.0, "CHF", "A")).unwrap();
    repository.create_position(sample("ACC-2", 2.0, "CHF", "B")).unwrap();

    assert_eq!(repository.delete_all_positions().unwrap(), 2);
    assert_eq!(repository.count_positions().unwrap(), 0);
}
