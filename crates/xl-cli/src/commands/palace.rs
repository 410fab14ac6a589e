use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use xl_core::interpret::category;
use xl_core::{Palace, lookup_interpretation};

pub fn run(name: &str) -> Result<(), String> {
    let palace = Palace::parse(name).map_err(|e| e.to_string())?;
    let reading = lookup_interpretation(palace);

    let title = format!("{} {}", palace.hanzi(), palace);
    println!(
        "  {} ({})",
        super::paint(&title, reading.category),
        reading.category
    );
    println!("  {}", reading.verdict.italic());
    println!();
    println!("  {}", reading.base_text);
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["With", "Commentary"]);
    for c in &reading.combinations {
        table.add_row(vec![format!("{} {}", c.other.hanzi(), c.other), c.text.clone()]);
    }
    println!("{table}");

    Ok(())
}

pub fn list() -> Result<(), String> {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "Palace", "Element", "Stems", "Category"]);

    for p in Palace::all() {
        let (yang, yin) = p.stem_pair();
        table.add_row(vec![
            (p.index() + 1).to_string(),
            format!("{} {}", p.hanzi(), p),
            format!("{} {}", p.base_element().hanzi(), p.base_element()),
            format!("{yang}{yin}"),
            category(*p).to_string(),
        ]);
    }

    println!("{table}");
    Ok(())
}
