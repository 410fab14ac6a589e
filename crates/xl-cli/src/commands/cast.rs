use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use xl_core::{AnnotatedPalace, DivinationResult};

pub fn run(
    month: u32,
    day: u32,
    hour: Option<u32>,
    at: Option<&str>,
    plain: bool,
    max_day: u32,
) -> Result<(), String> {
    let hour = super::resolve_hour(hour, at)?;
    let result = super::divine(month, day, hour, max_day)?;

    if plain {
        print!("{result}");
    } else {
        print_result(&result);
    }
    Ok(())
}

fn marks(p: &AnnotatedPalace) -> String {
    let m = p.markers();
    if m.is_empty() {
        "—".to_string()
    } else {
        m.join(" ")
    }
}

fn print_result(result: &DivinationResult) {
    let req = result.request;
    println!(
        "  {} month {}, day {}, hour {} ({} {})",
        "Casting".bold(),
        req.month(),
        req.day(),
        req.hour(),
        result.self_branch,
        result.self_element,
    );
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        "Palace", "Ganzhi", "Element", "Kinship", "Spirit", "Star", "Marks",
    ]);

    for p in &result.grid {
        table.add_row(vec![
            format!("{} {}", p.palace.hanzi(), p.palace),
            p.ganzhi.clone(),
            format!("{} {}", p.branch_element.hanzi(), p.branch_element),
            format!("{} {}", p.kinship.hanzi(), p.kinship),
            format!("{} {}", p.spirit_beast.hanzi(), p.spirit_beast),
            format!("{} {}", p.star.hanzi(), p.star),
            marks(p),
        ]);
    }

    println!("{table}");
    println!();

    let reading = &result.interpretation;
    let fin = result.final_palace();
    let title = format!("{} {}", fin.palace.hanzi(), fin.palace);
    println!(
        "  {} {} ({})",
        "Final palace:".bold(),
        super::paint(&title, reading.category),
        reading.category
    );
    println!("  {}", reading.verdict.italic());
    println!();
    println!("  {}", reading.base_text);
    println!();
    for c in &reading.combinations {
        println!("  {} {}: {}", "with".dimmed(), c.other, c.text);
    }
}
