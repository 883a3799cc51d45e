use std::io::{self, Write};

use rentals::RentalItem;

const RULE_WIDTH: usize = 60;

/// Fixed-width listing: header, rule, one row per record sorted by id.
/// Column widths count characters, so Cyrillic names line up.
pub fn write_items<W: Write>(out: &mut W, items: &[RentalItem]) -> io::Result<()> {
    writeln!(out, "{:<4} | {:<20} | {:<15} | {:>6} | {}", "ID", "Name", "Warehouse", "Qty", "Price")?;
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;

    let mut rows: Vec<&RentalItem> = items.iter().collect();
    rows.sort_by(|a, b| a.id.cmp(&b.id));
    for item in rows {
        writeln!(
            out,
            "{:<4} | {:<20} | {:<15} | {:>6} | {}",
            item.id, item.name, item.warehouse, item.quantity, item.price
        )?;
    }
    Ok(())
}

/// Caption line followed by the listing, flushed to stdout.
pub fn print_listing(caption: &str, items: &[RentalItem]) -> io::Result<()> {
    let mut out = io::stdout().lock();
    writeln!(out, "{caption}")?;
    write_items(&mut out, items)?;
    out.flush()
}
