use std::io::Write;

use mealplanner_shared::shopping::LineItem;
use rust_xlsxwriter::{Workbook, XlsxError};
use serde::Serialize;

use crate::unit::format_quantity;

const HEADER: [&str; 4] = ["name", "quantity", "unit", "purchased"];
const SHEET_NAME: &str = "ShoppingList";

#[derive(Serialize)]
struct CsvRow<'a> {
    name: &'a str,
    quantity: String,
    unit: &'a str,
    purchased: bool,
}

/// Writes the list as CSV with a `name,quantity,unit,purchased` header.
pub fn write_csv<W: Write>(items: &[LineItem], writer: W) -> mealplanner_shared::Result<()> {
    let mut csv = csv::Writer::from_writer(writer);

    if items.is_empty() {
        csv.write_record(HEADER).map_err(anyhow::Error::from)?;
    }

    for item in items {
        csv.serialize(CsvRow {
            name: &item.name,
            quantity: format_quantity(item.quantity),
            unit: &item.unit,
            purchased: item.purchased,
        })
        .map_err(anyhow::Error::from)?;
    }

    csv.flush()?;

    Ok(())
}

pub fn to_csv(items: &[LineItem]) -> mealplanner_shared::Result<String> {
    let mut buffer = Vec::new();
    write_csv(items, &mut buffer)?;

    String::from_utf8(buffer).map_err(|e| anyhow::Error::from(e).into())
}

/// Excel workbook with a single `ShoppingList` sheet, same columns as the CSV.
pub fn to_xlsx(items: &[LineItem]) -> mealplanner_shared::Result<Vec<u8>> {
    write_workbook(items).map_err(|e| anyhow::Error::from(e).into())
}

fn write_workbook(items: &[LineItem]) -> Result<Vec<u8>, XlsxError> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME)?;

    for (col, header) in HEADER.iter().enumerate() {
        sheet.write_string(0, col as u16, *header)?;
    }

    for (index, item) in items.iter().enumerate() {
        let row = index as u32 + 1;
        sheet.write_string(row, 0, &item.name)?;
        sheet.write_number(row, 1, item.quantity)?;
        sheet.write_string(row, 2, &item.unit)?;
        sheet.write_boolean(row, 3, item.purchased)?;
    }

    workbook.save_to_buffer()
}
