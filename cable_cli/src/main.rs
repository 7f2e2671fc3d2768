//! # CableCalc CLI Application
//!
//! Terminal interface for per-segment ampacity verification. Prompts for
//! the common inputs, runs one check against the built-in IEC 60502-2
//! reference data and prints a report with per-factor provenance.

use std::io::{self, BufRead, Write};

use cable_core::calculations::segment_check::{calculate, SegmentCheckInput};
use cable_core::tables::ReferenceData;

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

fn main() {
    println!("CableCalc CLI - MV Cable Ampacity Verification (IEC 60502-2)");
    println!("=============================================================");
    println!();

    let mut input = SegmentCheckInput::default();

    input.design_power_kva = prompt_f64("Design power (kVA) [10120]: ", input.design_power_kva);
    input.segment.section_mm2 = prompt_f64("Cross-section (mm2) [400]: ", input.segment.section_mm2);
    input.site.ground_temp_c = prompt_f64("Ground temperature (degC) [20]: ", input.site.ground_temp_c);
    input.segment.depth_m = prompt_f64("Burial depth (m) [0.8]: ", input.segment.depth_m);
    input.site.soil_resistivity_km_w = prompt_f64(
        "Soil thermal resistivity (K.m/W) [1.5]: ",
        input.site.soil_resistivity_km_w,
    );
    input.segment.parallel_circuits =
        prompt_f64("Parallel circuits [4]: ", input.segment.parallel_circuits as f64) as u32;
    input.segment.spacing_mm = prompt_f64("Circuit spacing (mm) [200]: ", input.segment.spacing_mm);

    println!();
    println!(
        "Checking {} mm2 {} {} {} cable, {}...",
        input.segment.section_mm2,
        input.segment.conductor,
        input.segment.insulation,
        input.segment.core,
        input.segment.installation
    );
    println!();

    if let Err(e) = input.validate() {
        eprintln!("Error: {}", e);
        if let Ok(json) = serde_json::to_string_pretty(&e) {
            eprintln!();
            eprintln!("Error JSON:");
            eprintln!("{}", json);
        }
        std::process::exit(1);
    }

    let result = calculate(ReferenceData::standard(), &input);

    println!("═══════════════════════════════════════════════");
    println!("  AMPACITY VERIFICATION RESULTS");
    println!("═══════════════════════════════════════════════");
    println!();
    println!("Design current:");
    println!(
        "  Ib  = {:.2} A  ({:.0} kVA at {:.0} kV, pf {:.2})",
        result.design_current_a,
        result.design_power_kva,
        input.site.system_voltage_kv,
        input.site.power_factor
    );
    println!();
    println!("Base ampacity:");
    println!(
        "  Iz  = {:.0} A  ({})",
        result.base_ampacity_a, result.base_source
    );
    println!();
    println!("Correction factors:");
    println!("  K1 (temperature):  {:.3}  {}", result.k1.value, result.k1.source);
    println!("  K2 (depth):        {:.3}  {}", result.k2.value, result.k2.source);
    println!("  K3 (resistivity):  {:.3}  {}", result.k3.value, result.k3.source);
    println!("  K4 (grouping):     {:.3}  {}", result.k4.value, result.k4.source);
    println!();
    println!(
        "Corrected ampacity:\n  Iz' = {:.2} A   (margin {:+.2} A)",
        result.corrected_ampacity_a,
        result.margin_a()
    );
    println!();
    println!("═══════════════════════════════════════════════");
    println!(
        "  RESULT: {}",
        if result.passes { "PASS (Ib <= Iz')" } else { "FAIL (Ib > Iz')" }
    );
    println!("═══════════════════════════════════════════════");

    if result.has_data_gap() {
        println!();
        println!("WARNING: the verdict rests on missing published data");
        println!("(unknown base ampacity or estimated grouping factor).");
    }

    println!();
    println!("JSON Output (for API use):");
    if let Ok(json) = serde_json::to_string_pretty(&result) {
        println!("{}", json);
    }
}
