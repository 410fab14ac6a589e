use std::path::Path;

use xl_core::DivinationResult;

pub fn run(
    month: u32,
    day: u32,
    hour: u32,
    format: &str,
    output: Option<&Path>,
    max_day: u32,
) -> Result<(), String> {
    let result = super::divine(month, day, hour, max_day)?;

    let content = match format {
        "json" => export_json(&result)?,
        "markdown" | "md" => export_markdown(&result),
        "text" | "txt" => result.to_string(),
        _ => {
            return Err(format!(
                "unsupported format: \"{format}\". Use: json, markdown, text"
            ));
        }
    };

    if let Some(path) = output {
        std::fs::write(path, &content)
            .map_err(|e| format!("cannot write to {}: {e}", path.display()))?;
        println!("  Exported to {}", path.display());
    } else {
        print!("{content}");
    }

    Ok(())
}

fn export_json(result: &DivinationResult) -> Result<String, String> {
    let mut json = serde_json::to_string_pretty(result)
        .map_err(|e| format!("JSON serialization error: {e}"))?;
    json.push('\n');
    Ok(json)
}

fn export_markdown(result: &DivinationResult) -> String {
    let req = result.request;
    let fin = result.final_palace();
    let reading = &result.interpretation;
    let mut out = String::new();

    out.push_str(&format!(
        "# {} {}\n\n",
        fin.palace.hanzi(),
        fin.palace
    ));
    out.push_str(&format!(
        "**Month:** {} · **Day:** {} · **Hour:** {} ({} {})\n\n",
        req.month(),
        req.day(),
        req.hour(),
        result.self_branch,
        result.self_element,
    ));
    out.push_str(&format!("**Category:** {}\n\n", reading.category));
    out.push_str(&format!("> {}\n\n", reading.verdict));
    out.push_str(&format!("{}\n\n", reading.base_text));

    out.push_str("## Palaces\n\n");
    out.push_str("| Palace | Ganzhi | Element | Kinship | Spirit | Star | Marks |\n");
    out.push_str("|---|---|---|---|---|---|---|\n");
    for p in &result.grid {
        out.push_str(&format!(
            "| {} {} | {} | {} | {} | {} | {} | {} |\n",
            p.palace.hanzi(),
            p.palace,
            p.ganzhi,
            p.branch_element,
            p.kinship,
            p.spirit_beast,
            p.star,
            p.markers().join(" "),
        ));
    }
    out.push('\n');

    out.push_str("## Pairings\n\n");
    for c in &reading.combinations {
        out.push_str(&format!("- **{}:** {}\n", c.other, c.text));
    }

    out
}
