//! # Solar Sizer CLI Application
//!
//! Prompt-driven frontend for the sizing engine. Collects the form inputs,
//! displays the sizing summary, writes the PDF report, and exercises the
//! email stub. All computation and formatting lives in `solar_core`; this
//! binary is presentation glue only.

use std::io::{self, BufRead, Write};

use chrono::Utc;
use solar_core::battery::BatteryType;
use solar_core::email;
use solar_core::format::{format_kw, format_money, group_thousands};
use solar_core::pdf::render_report_pdf;
use solar_core::report::{SizingReport, REPORT_FILENAME};
use solar_core::sizing::{compute, SizingInput, SUPPORTED_PANEL_WATTAGES, SUPPORTED_VOLTAGES};

fn read_line() -> Option<String> {
    let mut input = String::new();
    io::stdin().lock().read_line(&mut input).ok()?;
    Some(input.trim().to_string())
}

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }
    read_line()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

fn prompt_u32(prompt: &str, default: u32) -> u32 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }
    read_line()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

fn prompt_i64(prompt: &str, default: i64) -> i64 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }
    read_line()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

fn prompt_string(prompt: &str) -> String {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return String::new();
    }
    read_line().unwrap_or_default()
}

fn prompt_battery_type(default: BatteryType) -> BatteryType {
    println!("Battery type:");
    for (i, bt) in BatteryType::ALL.iter().enumerate() {
        println!("  {}. {}", i + 1, bt.display_name());
    }
    let input = prompt_string(&format!("Select [{}]: ", default.display_name()));
    if input.is_empty() {
        return default;
    }
    match input.as_str() {
        "1" => BatteryType::LeadAcid,
        "2" => BatteryType::Lithium,
        other => other.parse().unwrap_or_else(|e| {
            eprintln!("{} - using {}", e, default.display_name());
            default
        }),
    }
}

fn main() {
    println!("Solar Sizer CLI - Panel + Battery Sizing Tool");
    println!("=============================================");
    println!();

    let defaults = SizingInput::default();

    println!("-- Basic Configuration --");
    let daily_load_kwh = prompt_f64("Daily energy use (kWh) [6.0]: ", defaults.daily_load_kwh);
    let backup_days = prompt_u32("Backup days [2]: ", defaults.backup_days);
    let battery_voltage = prompt_u32(
        &format!("Battery voltage (V) {:?} [48]: ", SUPPORTED_VOLTAGES),
        defaults.battery_voltage,
    );
    let battery_type = prompt_battery_type(defaults.battery_type);
    println!("{}", battery_type.dod_note());
    let sun_hours = prompt_f64("Sunlight hours/day [6.0]: ", defaults.sun_hours);
    let panel_wattage = prompt_u32(
        &format!("Panel wattage (W) {:?} [330]: ", SUPPORTED_PANEL_WATTAGES),
        defaults.panel_wattage,
    );
    let peak_load_kw = prompt_f64("Peak load (kW) [2.0]: ", defaults.peak_load_kw);

    println!();
    println!("-- Advanced Efficiency Settings --");
    let panel_efficiency = prompt_f64("Panel efficiency (0-1) [0.8]: ", defaults.panel_efficiency);
    let inverter_efficiency =
        prompt_f64("Inverter efficiency (0-1) [0.9]: ", defaults.inverter_efficiency);

    println!();
    println!("-- Cost Settings --");
    let cost_per_panel = prompt_i64("Cost per panel (Rs.) [13000]: ", defaults.cost_per_panel);
    let default_cost_per_ah = battery_type.profile().default_cost_per_ah;
    let cost_per_ah = prompt_i64(
        &format!("Cost per Ah (Rs.) [{}]: ", default_cost_per_ah),
        default_cost_per_ah,
    );

    let input = SizingInput {
        daily_load_kwh,
        backup_days,
        battery_voltage,
        battery_type,
        sun_hours,
        panel_wattage,
        peak_load_kw,
        panel_efficiency,
        inverter_efficiency,
        cost_per_panel,
        cost_per_ah,
    };

    let result = match compute(&input) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            std::process::exit(1);
        }
    };

    println!();
    println!("═══════════════════════════════════════");
    println!("  SIZING RESULTS");
    println!("═══════════════════════════════════════");
    println!();
    println!("  Panel Capacity:   {} kW", format_kw(result.panel_array_kw));
    println!("  Number of Panels: {}", result.panel_count);
    println!(
        "  Battery Capacity: {} Ah @ {}V",
        result.battery_capacity_ah, input.battery_voltage
    );
    println!("  Inverter Size:    {} kW", format_kw(result.inverter_kw));
    println!();
    println!(
        "  Panel Cost:   {} x Rs. {} = {}",
        result.panel_count,
        group_thousands(input.cost_per_panel),
        format_money(result.panel_cost)
    );
    println!(
        "  Battery Cost: {} x Rs. {} = {}",
        result.battery_capacity_ah,
        group_thousands(input.cost_per_ah),
        format_money(result.battery_cost)
    );
    println!();
    println!("  Total Estimated Cost: {}", format_money(result.total_cost));
    println!("═══════════════════════════════════════");

    println!();
    println!("JSON Output (for API use):");
    if let Ok(json) = serde_json::to_string_pretty(&result) {
        println!("{}", json);
    }

    // PDF export
    let report = SizingReport::new(&input, &result, Utc::now());
    match render_report_pdf(&report) {
        Ok(pdf_bytes) => match std::fs::write(REPORT_FILENAME, &pdf_bytes) {
            Ok(()) => println!("\nReport written to {}", REPORT_FILENAME),
            Err(e) => eprintln!("\nCould not write {}: {}", REPORT_FILENAME, e),
        },
        Err(e) => eprintln!("\nPDF generation failed: {}", e),
    }

    // Email stub
    println!();
    let address = prompt_string("Email the report to (blank to skip): ");
    if !address.is_empty() {
        if let Err(e) = email::send_report(&address) {
            println!("{}", e);
        }
    }
}
