//! Plain-text rendering of printed pages.

use super::classify::PrintCategory;
use super::paginate::{PrintPage, PrintPlan};
use crate::config::{CM_PER_M, COMPANY_NAME, COMPANY_TAGLINE};
use crate::model::{LineItem, OrderHeader};
use crate::order::OrderTotals;
use std::fmt;

const PAGE_WIDTH: usize = 96;

/// Centimeters as meters with two decimals and a decimal comma ("1,25").
pub fn format_meters(cm: f64) -> String {
    format!("{:.2}", cm / CM_PER_M).replace('.', ",")
}

/// Square meters with two decimals.
pub fn format_area(m2: f64) -> String {
    format!("{:.2}", m2)
}

/// A page together with everything it needs to print.
struct PageView<'p, 'a> {
    page: &'p PrintPage<'a>,
    header: &'p OrderHeader,
    totals: &'p OrderTotals,
}

impl fmt::Display for PageView<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_header(f)?;
        writeln!(f, "{}", "-".repeat(PAGE_WIDTH))?;
        writeln!(f, "{}", self.page.category.title())?;
        writeln!(f)?;

        match self.page.category {
            PrintCategory::Regular => self.write_table(f)?,
            PrintCategory::Trapezoid => self.write_trapezoids(f)?,
            PrintCategory::Ellipse | PrintCategory::RoundDiameter => self.write_schemas(f)?,
        }

        writeln!(f, "{}", "-".repeat(PAGE_WIDTH))?;
        if self.page.is_last_page {
            writeln!(f, "Genel Toplam")?;
            writeln!(f, "Toplam Adet: {}", self.totals.quantity)?;
            writeln!(f, "Toplam m²: {}", format_area(self.totals.area))?;
        }
        writeln!(
            f,
            "Sayfa {} / {}",
            self.page.page_number, self.page.total_pages
        )
    }
}

impl PageView<'_, '_> {
    fn write_header(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let h = self.header;
        writeln!(f, "{}", "=".repeat(PAGE_WIDTH))?;
        writeln!(f, "{:<60}Sipariş No: {}", COMPANY_NAME, h.order_number)?;
        writeln!(f, "{:<60}Tarih: {}", COMPANY_TAGLINE, h.date)?;
        writeln!(
            f,
            "{:<60}{}",
            format!("Cari Ünvan: {}", h.account_display()),
            h.address
        )?;
        writeln!(f, "Müşteri: {}", h.customer_display())
    }

    fn write_table(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "  {:<44} {:>13} {:>14} {:>5} {:>6} {:>10}",
            "Cins", "Genişlik (m)", "Yükseklik (m)", "Adet", "m²", "Toplam m²"
        )?;
        for item in &self.page.items {
            let marker = if item.below_minimum_area() { '*' } else { ' ' };
            writeln!(
                f,
                "{} {:<44} {:>13} {:>14} {:>5} {:>6} {:>10}",
                marker,
                item.label,
                format_meters(item.width),
                format_meters(item.height),
                item.quantity,
                format_area(item.area()),
                format_area(item.total_area())
            )?;
        }
        if self.page.items.iter().any(|i| i.below_minimum_area()) {
            writeln!(f)?;
            writeln!(f, "* Minimum 0,25 m² üzerinden hesaplanmıştır.")?;
        }
        Ok(())
    }

    fn write_trapezoids(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for item in &self.page.items {
            let delta = item.trapezoid_delta.unwrap_or_default();
            writeln!(
                f,
                "{} x {} cm - Fark: {} cm ({} Adet)",
                item.width, item.height, delta, item.quantity
            )?;
            writeln!(
                f,
                "    {} | Alt: {} cm, Üst: {} cm, Yükseklik: {} cm",
                item.label,
                item.width,
                item.width - delta,
                item.height
            )?;
        }
        Ok(())
    }

    fn write_schemas(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for item in &self.page.items {
            write_schema_line(f, item)?;
        }
        Ok(())
    }
}

fn write_schema_line(f: &mut fmt::Formatter<'_>, item: &LineItem) -> fmt::Result {
    writeln!(
        f,
        "{} x {} cm ({} Adet)",
        item.width, item.height, item.quantity
    )?;
    writeln!(f, "    {}", item.label)
}

/// Render a single page.
pub fn render_page(page: &PrintPage<'_>, header: &OrderHeader, totals: &OrderTotals) -> String {
    PageView {
        page,
        header,
        totals,
    }
    .to_string()
}

/// Render every page of a plan, separated by form feeds.
pub fn render_plan(plan: &PrintPlan<'_>, header: &OrderHeader, totals: &OrderTotals) -> String {
    plan.pages
        .iter()
        .map(|page| render_page(page, header, totals))
        .collect::<Vec<_>>()
        .join("\u{c}\n")
}
