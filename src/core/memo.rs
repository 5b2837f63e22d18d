//! Memo generation: aggregate the day sheet into per-vehicle totals and
//! render the payment-request document.

use crate::config::Config;
use crate::core::groups::build_groups;
use crate::doc::MemoDocument;
use crate::errors::{AppError, AppResult};
use crate::store::audit;
use crate::store::day_sheet::{DAY_HEADERS, load_sheet};
use crate::store::sheet::Grid;
use crate::ui::messages::success;
use crate::utils::date;
use crate::utils::money::{format_thousands, number_in_words};
use crate::utils::path::{ensure_parent_dir, is_absolute};
use std::fs;
use std::path::PathBuf;

const SUMMARY_HEADERS: [&str; 5] = ["No.", "Area", "Vehicle ID", "Date", "Total Cost (ugx)"];

pub struct MemoLogic;

/// The aggregated view of one day sheet the memo is built from.
pub struct MemoSummary {
    pub grand_total: i64,
    pub vehicle_count: usize,
    pub subject: String,
    pub summary_rows: Vec<Vec<String>>,
    pub detail_rows: Vec<Vec<String>>,
}

impl MemoLogic {
    /// Aggregate the sheet: one summary row per vehicle group joined on the
    /// sequence number, a grand total over the group totals, and the detail
    /// table reproducing every row.
    pub fn summarize(body: &Grid) -> AppResult<MemoSummary> {
        let groups = build_groups(body)?;

        let grand_total: i64 = groups.iter().map(|g| g.reported_total()).sum();

        let mut vehicles: Vec<&str> = Vec::new();
        for group in &groups {
            let id = group.vehicle_id.as_str();
            if !id.is_empty() && !vehicles.contains(&id) {
                vehicles.push(id);
            }
        }
        let vehicle_count = vehicles.len();

        let mut summary_rows: Vec<Vec<String>> = groups
            .iter()
            .map(|g| {
                vec![
                    g.seq.to_string(),
                    g.area.clone(),
                    g.vehicle_id.clone(),
                    g.date.clone(),
                    format_thousands(g.reported_total()),
                ]
            })
            .collect();

        summary_rows.push(vec![
            String::new(),
            String::new(),
            String::new(),
            "Grand Total (ugx)".to_string(),
            format_thousands(grand_total),
        ]);

        let detail_rows: Vec<Vec<String>> = body
            .iter()
            .map(|row| {
                (0..DAY_HEADERS.len())
                    .map(|i| row.get(i).map(|c| c.display()).unwrap_or_default())
                    .collect()
            })
            .collect();

        Ok(MemoSummary {
            grand_total,
            vehicle_count,
            subject: Self::build_subject(grand_total, vehicle_count),
            summary_rows,
            detail_rows,
        })
    }

    pub fn build_subject(total_cost: i64, vehicle_count: usize) -> String {
        format!(
            "RE: REQUEST FOR UGSHS {} ({} UGANDA SHILLINGS ONLY) BEING PAYMENT FOR REPAIR OF VEHICLES FOR NO. {} ({}) MOTORCYCLES",
            format_thousands(total_cost),
            number_in_words(total_cost.unsigned_abs()).to_uppercase(),
            vehicle_count,
            number_in_words(vehicle_count as u64).to_uppercase(),
        )
    }

    /// Generate the memo for one day sheet and write it to the output
    /// directory; `copy_to` adds a second copy at an explicit path.
    pub fn generate(
        cfg: &Config,
        sheet: &str,
        copy_to: Option<&str>,
    ) -> AppResult<PathBuf> {
        let body = load_sheet(&cfg.repairs_file(), sheet)?
            .ok_or_else(|| AppError::EmptySheet(sheet.to_string()))?;

        if body.is_empty() {
            return Err(AppError::EmptySheet(sheet.to_string()));
        }

        let summary = Self::summarize(&body)?;
        let today = date::today();

        let narrative = format!(
            "Reference is made to the above subject. The repairs listed below were \
             carried out on {} motorcycle(s) across the operational areas, at a total \
             cost of UGX {}. Kindly approve the payment of the amount indicated; the \
             itemized schedule of works is attached below.",
            summary.vehicle_count,
            format_thousands(summary.grand_total),
        );

        let document = MemoDocument {
            organization: cfg.organization.clone(),
            recipient: cfg.recipient.clone(),
            through: cfg.through.clone(),
            author: cfg.author.clone(),
            date_line: date::long_date(today),
            subject: summary.subject.clone(),
            narrative,
            summary_headers: SUMMARY_HEADERS.to_vec(),
            summary_rows: summary.summary_rows.clone(),
            detail_headers: DAY_HEADERS.to_vec(),
            detail_rows: summary.detail_rows.clone(),
        };

        let out_dir = cfg.memo_dir();
        fs::create_dir_all(&out_dir)?;

        let out_path = out_dir.join(format!("repair_request_{}.pdf", date::cell_date(today)));
        document.write_to(&out_path)?;

        if let Some(extra) = copy_to {
            if !is_absolute(extra) {
                return Err(AppError::Document(format!(
                    "Output file path must be absolute: {extra}"
                )));
            }
            let extra_path = PathBuf::from(extra);
            ensure_parent_dir(&extra_path)?;
            fs::copy(&out_path, &extra_path)?;
        }

        audit::record(
            cfg,
            "memo",
            sheet,
            &format!(
                "Memo for {} vehicle(s), total UGX {}",
                summary.vehicle_count,
                format_thousands(summary.grand_total)
            ),
        );

        success(format!("Memo written: {}", out_path.display()));

        Ok(out_path)
    }
}
