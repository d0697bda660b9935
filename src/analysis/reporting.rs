use crate::models::selection::SiteSelection;

pub fn print_run_summary(selections: &[SiteSelection]) {
    let mut years: Vec<u32> = selections.iter().map(|s| s.year).collect();
    years.dedup();

    println!("\nBest-Site Search Summary");
    println!("----------------------------------------");
    for year in years {
        let rows: Vec<&SiteSelection> = selections.iter().filter(|s| s.year == year).collect();
        let found = rows.iter().filter(|s| s.site_found()).count();
        let satisfied = rows.iter().filter(|s| s.satisfaction >= 1.0).count();
        let mean_satisfaction: f64 =
            rows.iter().map(|s| s.satisfaction).sum::<f64>() / rows.len().max(1) as f64;

        println!("\nYear {}", year);
        println!("  Cities analysed: {}", rows.len());
        println!("  Sites found: {}", found);
        println!("  Demand fully satisfied: {}", satisfied);
        println!("  Mean satisfaction ratio: {:.3}", mean_satisfaction);

        if let Some(best) = rows
            .iter()
            .filter(|s| s.site_found())
            .max_by(|a, b| a.satisfaction.total_cmp(&b.satisfaction))
        {
            println!(
                "  Best served: {} ({:.1} kWh/yr at {:.1} km, ratio {:.3})",
                best.city,
                best.annual_energy_kwh,
                best.distance_km.unwrap_or(0.0),
                best.satisfaction
            );
        }
    }
    println!("----------------------------------------");
}
