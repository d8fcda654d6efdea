//! Interactive menu loop for the bookstore ledger.
//!
//! # Responsibility
//! - Prompt for and validate primitive inputs, re-prompting on bad entry.
//! - Render reports, confirmations and operation errors.
//!
//! # Invariants
//! - All ledger state lives in `bookledger_core`; this binary owns none.
//! - Operation errors are displayed and the menu continues; nothing here
//!   is fatal except failing to open the store.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use bookledger_core::{
    is_valid_sale_date, open_db, seed_demo_rows, CatalogRepository, LedgerError, NewSale,
    ReportService, SaleService, SqliteCatalogRepository, SqliteReportRepository,
    SqliteSaleRepository,
};
use log::warn;
use rusqlite::Connection;

const DB_PATH_ENV: &str = "BOOKLEDGER_DB";
const DEFAULT_DB_FILE: &str = "bookledger.db";

const MENU: &str = "
*************** Menu ***************
1. Add sale record
2. Show sales report
3. Update sale record
4. Delete sale record
5. Quit
************************************
";

fn main() {
    init_logging_best_effort();

    let db_path = db_path();
    let mut conn = match open_db(&db_path) {
        Ok(conn) => conn,
        Err(err) => {
            eprintln!("error: cannot open store at {}: {err}", db_path.display());
            std::process::exit(1);
        }
    };
    if let Err(err) = seed_demo_rows(&mut conn) {
        eprintln!("error: cannot seed store: {err}");
        std::process::exit(1);
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        println!("{MENU}");
        let Some(choice) = prompt(&mut input, "Select an option (Enter to quit): ") else {
            break;
        };
        match choice.as_str() {
            "" | "5" => break,
            "1" => add_sale(&mut input, &mut conn),
            "2" => show_report(&conn),
            "3" => update_sale(&mut input, &mut conn),
            "4" => delete_sale(&mut input, &mut conn),
            _ => println!("=> Please choose a valid option (1-5)"),
        }
    }
}

/// Logging failure should never block ledger use; fall back to stderr.
fn init_logging_best_effort() {
    let log_dir = std::env::current_dir()
        .map(|dir| dir.join("logs"))
        .unwrap_or_default();
    let Some(log_dir) = log_dir.to_str() else {
        eprintln!("warning: log directory path is not valid UTF-8; logging disabled");
        return;
    };
    if let Err(err) = bookledger_core::init_logging(bookledger_core::default_log_level(), log_dir)
    {
        eprintln!("warning: logging disabled: {err}");
    }
}

fn db_path() -> PathBuf {
    std::env::var_os(DB_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_FILE))
}

fn add_sale(input: &mut impl BufRead, conn: &mut Connection) {
    let Some(sold_on) = prompt_date(input) else {
        return;
    };
    let Some(member_code) = prompt_member_code(input, conn) else {
        return;
    };
    let Some(book_code) = prompt_book_code(input, conn) else {
        return;
    };
    let Some(quantity) = prompt_positive_int(input, "Enter quantity: ") else {
        return;
    };
    let Some(discount) = prompt_non_negative_int(input, "Enter discount amount: ") else {
        return;
    };

    let draft = NewSale {
        sold_on,
        member_code,
        book_code,
        quantity,
        discount,
    };
    let mut service = SaleService::new(SqliteSaleRepository::new(conn));
    match service.create_sale(&draft) {
        Ok(created) => println!(
            "=> Sale recorded (id {}, total: {})",
            created.id, created.total
        ),
        Err(err) => print_operation_error(&err),
    }
}

fn show_report(conn: &Connection) {
    let service = ReportService::new(SqliteReportRepository::new(conn));
    let views = match service.list_sales() {
        Ok(views) => views,
        Err(err) => {
            print_operation_error(&err);
            return;
        }
    };

    if views.is_empty() {
        println!("=> No sales recorded yet");
        return;
    }

    for (index, view) in views.iter().enumerate() {
        println!("\n==================== Sales Report ====================");
        println!("Entry #{}", index + 1);
        println!("Sale id:     {}", view.sale_id);
        println!("Date:        {}", view.sold_on);
        println!("Member:      {}", view.member_name);
        println!("Book:        {}", view.book_title);
        println!("------------------------------------------------------");
        println!("Unit price\tQty\tDiscount\tSubtotal");
        println!("------------------------------------------------------");
        println!(
            "{}\t\t{}\t{}\t\t{}",
            view.unit_price, view.quantity, view.discount, view.total
        );
        println!("------------------------------------------------------");
        println!("Sale total:  {}", view.total);
        println!("======================================================");
    }
}

fn update_sale(input: &mut impl BufRead, conn: &mut Connection) {
    let Some(sale_id) = prompt_positive_int(input, "Enter the sale id to update: ") else {
        return;
    };
    let Some(new_quantity) = prompt_positive_int(input, "Enter the new quantity: ") else {
        return;
    };
    let Some(new_discount) = prompt_non_negative_int(input, "Enter the new discount amount: ")
    else {
        return;
    };

    let mut service = SaleService::new(SqliteSaleRepository::new(conn));
    match service.update_sale(sale_id, new_quantity, new_discount) {
        Ok(total) => println!("=> Sale updated (new total: {total})"),
        Err(err) => print_operation_error(&err),
    }
}

fn delete_sale(input: &mut impl BufRead, conn: &mut Connection) {
    let Some(sale_id) = prompt_positive_int(input, "Enter the sale id to delete: ") else {
        return;
    };

    let mut service = SaleService::new(SqliteSaleRepository::new(conn));
    match service.delete_sale(sale_id) {
        Ok(()) => println!("=> Sale deleted"),
        Err(err) => print_operation_error(&err),
    }
}

fn print_operation_error(err: &LedgerError) {
    println!("=> Error: {err}");
    if matches!(err, LedgerError::Db(_)) {
        warn!("event=cli_operation module=cli status=error error={err}");
    }
}

/// Prints `label` and reads one trimmed line. Returns `None` on EOF.
fn prompt(input: &mut impl BufRead, label: &str) -> Option<String> {
    print!("{label}");
    let _ = io::stdout().flush();

    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) => None,
        Ok(_) => Some(line.trim().to_string()),
        Err(err) => {
            eprintln!("error: cannot read input: {err}");
            None
        }
    }
}

fn prompt_date(input: &mut impl BufRead) -> Option<String> {
    loop {
        let value = prompt(input, "Enter sale date (YYYY-MM-DD): ")?;
        if is_valid_sale_date(&value) {
            return Some(value);
        }
        println!("=> Error: invalid date format");
    }
}

fn prompt_member_code(input: &mut impl BufRead, conn: &Connection) -> Option<String> {
    let catalog = SqliteCatalogRepository::new(conn);
    loop {
        let code = prompt(input, "Enter member code: ")?;
        match catalog.find_member(&code) {
            Ok(Some(_)) => return Some(code),
            Ok(None) => println!("=> Error: member code not found, try again"),
            Err(err) => {
                print_operation_error(&err);
                return None;
            }
        }
    }
}

fn prompt_book_code(input: &mut impl BufRead, conn: &Connection) -> Option<String> {
    let catalog = SqliteCatalogRepository::new(conn);
    loop {
        let code = prompt(input, "Enter book code: ")?;
        match catalog.find_book(&code) {
            Ok(Some(_)) => return Some(code),
            Ok(None) => println!("=> Error: book code not found, try again"),
            Err(err) => {
                print_operation_error(&err);
                return None;
            }
        }
    }
}

fn prompt_positive_int(input: &mut impl BufRead, label: &str) -> Option<i64> {
    loop {
        let value = prompt(input, label)?;
        match value.parse::<i64>() {
            Ok(parsed) if parsed > 0 => return Some(parsed),
            _ => println!("=> Error: a positive integer is required, try again"),
        }
    }
}

fn prompt_non_negative_int(input: &mut impl BufRead, label: &str) -> Option<i64> {
    loop {
        let value = prompt(input, label)?;
        match value.parse::<i64>() {
            Ok(parsed) if parsed >= 0 => return Some(parsed),
            _ => println!("=> Error: a non-negative integer is required, try again"),
        }
    }
}
