//! Tests for currency/date formatting and the progress clamp + color bands.

mod common;

use common::*;
use govtrack::core::format::{format_crore, format_date, format_inr};
use time::macros::date;

#[test]
fn inr_uses_indian_digit_grouping_with_no_fraction() {
    assert_eq!(format_inr(0), "₹0");
    assert_eq!(format_inr(999), "₹999");
    assert_eq!(format_inr(1_000), "₹1,000");
    assert_eq!(format_inr(100_000), "₹1,00,000");
    assert_eq!(format_inr(45_000_000), "₹4,50,00,000");
    assert_eq!(format_inr(125_000_000), "₹12,50,00,000");
    assert_eq!(format_inr(610_000_000), "₹61,00,00,000");
}

#[test]
fn crore_formatting_keeps_one_decimal() {
    assert_eq!(format_crore(125_000_000), "₹12.5Cr");
    assert_eq!(format_crore(375_000_000), "₹37.5Cr");
    assert_eq!(format_crore(123_000_000), "₹12.3Cr");
}

#[test]
fn dates_render_day_short_month_year() {
    assert_eq!(format_date(date!(2024 - 11 - 28)), "28 Nov 2024");
    assert_eq!(format_date(date!(2024 - 01 - 15)), "15 Jan 2024");
    assert_eq!(format_date(date!(2025 - 06 - 30)), "30 Jun 2025");
    // No zero padding on single-digit days.
    assert_eq!(format_date(date!(2024 - 12 - 01)), "1 Dec 2024");
}

#[tokio::test]
async fn stored_progress_is_clamped_at_render_time() -> anyhow::Result<()> {
    let mut project = all_projects().await.remove(0);
    project.progress = 250;
    assert_eq!(project.clamped_progress(), 100);
    project.progress = 68;
    assert_eq!(project.clamped_progress(), 68);
    Ok(())
}

#[test]
fn progress_color_bands_split_at_the_quartile_thresholds() {
    assert_eq!(ProgressBand::for_progress(100), ProgressBand::Success);
    assert_eq!(ProgressBand::for_progress(75), ProgressBand::Success);
    assert_eq!(ProgressBand::for_progress(74), ProgressBand::Info);
    assert_eq!(ProgressBand::for_progress(50), ProgressBand::Info);
    assert_eq!(ProgressBand::for_progress(49), ProgressBand::Warning);
    assert_eq!(ProgressBand::for_progress(25), ProgressBand::Warning);
    assert_eq!(ProgressBand::for_progress(24), ProgressBand::Critical);
    assert_eq!(ProgressBand::for_progress(0), ProgressBand::Critical);
    // Out-of-range stored values clamp into the top band.
    assert_eq!(ProgressBand::for_progress(250), ProgressBand::Success);
}
