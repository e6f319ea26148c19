use anyhow::{Context, Result};
use chrono::Local;
use colored::Colorize;
use std::time::Instant;
use tracing::info;

use crate::args::{Args, OutputFormat};
use crate::input::DateInput;
use crate::result::DateReport;
use crate::utils::hex_to_rgb;

const SWATCH_WIDTH: usize = 12;

pub fn analyze_date(args: &Args) -> Result<DateReport> {
    let start_time = Instant::now();
    info!(
        action = "start",
        component = "date_analysis",
        "Starting date analysis"
    );

    let date = resolve_date(args)?;
    info!(action = "resolve", component = "date_input", date = %date, "Date accepted");

    let report = DateReport::new(date);

    info!(
        action = "complete",
        component = "date_analysis",
        digit_string = %report.digit_string,
        duration_us = start_time.elapsed().as_micros(),
        "Analysis completed"
    );
    Ok(report)
}

fn resolve_date(args: &Args) -> Result<DateInput> {
    if args.today {
        let today = Local::now().date_naive();
        info!(action = "resolve", component = "local_clock", today = %today, "Using today's date");
        return DateInput::from_naive_date(today)
            .context("Today's date is outside the supported range");
    }

    match (&args.month, &args.day, &args.year) {
        (Some(month), Some(day), Some(year)) => {
            DateInput::parse(month, day, year).context("Invalid date")
        }
        _ => anyhow::bail!("Provide MONTH DAY YEAR, or pass --today"),
    }
}

pub fn render(report: &DateReport, format: OutputFormat, color: bool) -> Result<String> {
    match format {
        OutputFormat::Human => Ok(render_human(report, color)),
        OutputFormat::Json => {
            serde_json::to_string_pretty(report).context("Failed to serialize analysis result")
        }
    }
}

pub fn render_human(report: &DateReport, color: bool) -> String {
    let result = &report.result;

    let title = format!("--- Date Check: {} ---", report.date);
    let mut lines = vec![
        if color {
            title.bold().to_string()
        } else {
            title
        },
        format!("Digit string: {}", report.digit_string),
    ];

    let checks = [
        ("Prime", result.is_prime),
        ("Palindrome", result.is_palindrome),
        ("Pythagorean", result.is_pythagorean),
        ("Perfect Power", result.is_perfect_power),
        ("Armstrong", result.is_armstrong),
        ("Equation", result.is_equation),
    ];
    lines.extend(
        checks
            .iter()
            .map(|(label, hit)| format!("{label}: {}", indicator(*hit))),
    );

    lines.push(format!("Hex #MMDDYY: {}", result.hex_codes.0));
    lines.push(format!("Hex #DDMMYY: {}", result.hex_codes.1));
    lines.push(format!("HSL (MM,DD%,YY%): {}", result.hsl_codes.0));
    lines.push(format!("HSL (DD,MM%,YY%): {}", result.hsl_codes.1));

    if color {
        if let Some((r, g, b)) = hex_to_rgb(&result.hex_codes.0) {
            let swatch = " ".repeat(SWATCH_WIDTH);
            lines.push(format!("Swatch: {}", swatch.on_truecolor(r, g, b)));
        }
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn indicator(hit: bool) -> &'static str {
    if hit {
        "✅"
    } else {
        "❌"
    }
}

/// Colour is used only when asked for and when the terminal takes it
/// (`NO_COLOR`, piped stdout and `CLICOLOR` all switch it off).
pub fn use_color(args: &Args) -> bool {
    !args.no_color && colored::control::SHOULD_COLORIZE.should_colorize()
}

pub fn print_report(report: &DateReport, args: &Args) -> Result<()> {
    let rendered = render(report, args.format, use_color(args))?;
    print!("{rendered}");
    if args.format == OutputFormat::Json {
        println!();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn report(month: i64, day: i64, year: i64) -> DateReport {
        DateReport::new(DateInput::new(month, day, year).unwrap())
    }

    #[test]
    fn human_output_without_color() {
        let text = render_human(&report(3, 14, 2024), false);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "--- Date Check: 3/14/2024 ---",
                "Digit string: 3142024",
                "Prime: ❌",
                "Palindrome: ❌",
                "Pythagorean: ❌",
                "Perfect Power: ❌",
                "Armstrong: ❌",
                "Equation: ❌",
                "Hex #MMDDYY: #031424",
                "Hex #DDMMYY: #140324",
                "HSL (MM,DD%,YY%): hsl(3, 14%, 24%)",
                "HSL (DD,MM%,YY%): hsl(14, 3%, 24%)",
            ]
        );
    }

    #[test]
    fn human_output_marks_hits() {
        // "111": palindrome, and 1 * 1 == 1
        let text = render_human(&report(1, 1, 1), false);
        assert!(text.contains("Palindrome: ✅"));
        assert!(text.contains("Equation: ✅"));
        assert!(text.contains("Prime: ❌"));
    }

    #[test]
    fn swatch_only_with_color() {
        assert!(!render_human(&report(3, 14, 2024), false).contains("Swatch"));
        assert!(render_human(&report(3, 14, 2024), true).contains("Swatch"));
    }

    #[test]
    fn no_color_flag_disables_color() {
        let args = Args::parse_from(["datecheck", "--no-color", "3", "14", "2024"]);
        assert!(!use_color(&args));
    }

    #[test]
    fn json_output_shape() {
        let json = render(&report(3, 14, 2024), OutputFormat::Json, false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["date"]["month"], 3);
        assert_eq!(value["date"]["day"], 14);
        assert_eq!(value["date"]["year"], 2024);
        assert_eq!(value["digit_string"], "3142024");
        assert_eq!(value["result"]["hex_codes"][0], "#031424");
        assert_eq!(value["result"]["is_palindrome"], false);
    }

    #[test]
    fn analyze_date_from_positional_args() {
        let args = Args::parse_from(["datecheck", "3", "14", "2024"]);
        let report = analyze_date(&args).unwrap();
        assert_eq!(report.digit_string, "3142024");
    }

    #[test]
    fn analyze_date_rejects_bad_input() {
        let args = Args::parse_from(["datecheck", "13", "1", "2000"]);
        let err = analyze_date(&args).unwrap_err();
        assert!(format!("{err:#}").contains("month must be between 1 and 12"));

        let args = Args::parse_from(["datecheck", "x", "1", "2000"]);
        assert!(analyze_date(&args).is_err());
    }

    #[test]
    fn analyze_date_today() {
        let args = Args::parse_from(["datecheck", "--today"]);
        let report = analyze_date(&args).unwrap();
        let today = Local::now().date_naive();
        assert_eq!(report.date, DateInput::from_naive_date(today).unwrap());
    }
}
