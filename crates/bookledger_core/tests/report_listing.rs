use bookledger_core::db::open_db_in_memory;
use bookledger_core::db::seed::seed_demo_rows;
use bookledger_core::{
    NewSale, ReportRepository, ReportService, SaleRepository, SqliteReportRepository,
    SqliteSaleRepository,
};
use rusqlite::Connection;

fn seeded_store() -> Connection {
    let mut conn = open_db_in_memory().unwrap();
    seed_demo_rows(&mut conn).unwrap();
    conn
}

#[test]
fn listing_joins_member_and_book_fields() {
    let conn = seeded_store();

    let views = SqliteReportRepository::new(&conn).list_sales().unwrap();
    assert_eq!(views.len(), 4);

    let first = &views[0];
    assert_eq!(first.sale_id, 1);
    assert_eq!(first.sold_on, "2024-01-15");
    assert_eq!(first.member_name, "Alice");
    assert_eq!(first.book_title, "Python Programming");
    assert_eq!(first.unit_price, 600);
    assert_eq!(first.quantity, 2);
    assert_eq!(first.discount, 100);
    assert_eq!(first.total, 1100);
}

#[test]
fn listing_is_ordered_by_sale_id_ascending() {
    let mut conn = seeded_store();

    SqliteSaleRepository::new(&mut conn)
        .create_sale(&NewSale {
            sold_on: "2024-02-01".to_string(),
            member_code: "M003".to_string(),
            book_code: "B001".to_string(),
            quantity: 1,
            discount: 0,
        })
        .unwrap();

    let views = SqliteReportRepository::new(&conn).list_sales().unwrap();
    let ids: Vec<i64> = views.iter().map(|view| view.sale_id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
}

#[test]
fn listing_is_a_snapshot_recomputed_each_call() {
    let mut conn = seeded_store();

    let before = SqliteReportRepository::new(&conn).list_sales().unwrap();
    assert_eq!(before.len(), 4);

    SqliteSaleRepository::new(&mut conn).delete_sale(2).unwrap();

    // The earlier snapshot is untouched; a fresh read reflects the delete.
    assert_eq!(before.len(), 4);
    let after = SqliteReportRepository::new(&conn).list_sales().unwrap();
    assert_eq!(after.len(), 3);
    assert!(after.iter().all(|view| view.sale_id != 2));
}

#[test]
fn report_service_delegates_to_the_repository() {
    let conn = seeded_store();

    let service = ReportService::new(SqliteReportRepository::new(&conn));
    let views = service.list_sales().unwrap();
    assert_eq!(views.len(), 4);
    assert_eq!(views[3].member_name, "Cathy");
    assert_eq!(views[3].book_title, "Python Programming");
}
