use comfy_table::{ContentArrangement, Table};

use kompass_core::Page;

/// List the fixed result-page surface.
pub fn run() -> Result<(), String> {
    let surface = Page::result_surface();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Page", "Type", "Stability"]);

    for page in &surface {
        let Page::Result {
            typology,
            stability,
        } = page
        else {
            continue;
        };

        let stability_str = match stability {
            Some(s) => s.to_string(),
            None => "—".to_string(),
        };

        table.add_row(vec![page.name(), typology.to_string(), stability_str]);
    }

    println!("{table}");
    println!();
    println!("  {} result pages", surface.len());

    Ok(())
}
