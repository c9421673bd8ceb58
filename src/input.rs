//! Income and deduction input, from the command line or from request files

use crate::tax::error::{checked_sum, ensure_non_negative, TaxError};
use crate::tax::FiscalYear;
use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

/// Old regime deduction categories, summed into a single deduction amount.
/// No statutory caps are applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Deductions {
    /// 80C (PPF, EPF, LIC, etc.)
    pub section_80c: Decimal,
    /// 80D (health insurance premium)
    pub section_80d: Decimal,
    pub home_loan_interest: Decimal,
    /// House Rent Allowance
    pub hra: Decimal,
}

impl Deductions {
    pub fn total(&self) -> Result<Decimal, TaxError> {
        checked_sum(
            "total deductions",
            [
                ensure_non_negative("80C deduction", self.section_80c)?,
                ensure_non_negative("80D deduction", self.section_80d)?,
                ensure_non_negative("home loan interest", self.home_loan_interest)?,
                ensure_non_negative("HRA", self.hra)?,
            ],
        )
    }

    pub fn is_empty(&self) -> bool {
        self.section_80c.is_zero()
            && self.section_80d.is_zero()
            && self.home_loan_interest.is_zero()
            && self.hra.is_zero()
    }
}

/// Annual income plus any GST amount, which is added on top
pub fn total_income(income: Decimal, gst_amount: Decimal) -> Result<Decimal, TaxError> {
    checked_sum(
        "total income",
        [
            ensure_non_negative("income", income)?,
            ensure_non_negative("GST amount", gst_amount)?,
        ],
    )
}

/// Input root for request JSON
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct TaxInput {
    pub requests: Vec<TaxRequest>,
}

/// One calculation request (a row of CSV input, or an entry of JSON input)
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct TaxRequest {
    /// Optional identifier echoed back in the output
    #[serde(default)]
    pub id: Option<String>,
    /// Financial year, "2024-25" or "2025-26"
    pub fiscal_year: FiscalYear,
    /// Annual income in rupees
    #[schemars(with = "f64")]
    pub income: Decimal,
    /// GST amount added to income
    #[serde(default)]
    #[schemars(with = "Option<f64>")]
    pub gst: Option<Decimal>,
    /// 80C deduction (old regime only)
    #[serde(default)]
    #[schemars(with = "Option<f64>")]
    pub deduction_80c: Option<Decimal>,
    /// 80D deduction (old regime only)
    #[serde(default)]
    #[schemars(with = "Option<f64>")]
    pub deduction_80d: Option<Decimal>,
    /// Home loan interest (old regime only)
    #[serde(default)]
    #[schemars(with = "Option<f64>")]
    pub home_loan_interest: Option<Decimal>,
    /// House Rent Allowance (old regime only)
    #[serde(default)]
    #[schemars(with = "Option<f64>")]
    pub hra: Option<Decimal>,
}

impl TaxRequest {
    pub fn total_income(&self) -> Result<Decimal, TaxError> {
        total_income(self.income, self.gst.unwrap_or_default())
    }

    pub fn deductions(&self) -> Deductions {
        Deductions {
            section_80c: self.deduction_80c.unwrap_or_default(),
            section_80d: self.deduction_80d.unwrap_or_default(),
            home_loan_interest: self.home_loan_interest.unwrap_or_default(),
            hra: self.hra.unwrap_or_default(),
        }
    }
}

/// CSV column names, in the order the header is expected
pub const CSV_COLUMNS: &[&str] = &[
    "id",
    "fiscal_year",
    "income",
    "gst",
    "deduction_80c",
    "deduction_80d",
    "home_loan_interest",
    "hra",
];

pub fn read_csv<R: Read>(reader: R) -> anyhow::Result<Vec<TaxRequest>> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let requests: Result<Vec<TaxRequest>, _> = rdr.deserialize::<TaxRequest>().collect();
    Ok(requests?)
}

pub fn read_json<R: Read>(reader: R) -> anyhow::Result<Vec<TaxRequest>> {
    let input: TaxInput = serde_json::from_reader(reader)?;
    Ok(input.requests)
}

/// Read requests from a JSON or CSV file (by extension), or JSON from stdin with "-"
pub fn read_requests(path: &Path) -> anyhow::Result<Vec<TaxRequest>> {
    if path.as_os_str() == "-" {
        let mut buffer = Vec::new();
        io::stdin().lock().read_to_end(&mut buffer)?;
        if buffer.is_empty() {
            anyhow::bail!("No input received. Provide a file or pipe data to stdin.");
        }
        return read_json(io::Cursor::new(buffer));
    }

    let extension = path.extension().and_then(|s| s.to_str()).unwrap_or("");
    if !matches!(extension, "json" | "csv") {
        anyhow::bail!(
            "Unsupported input file extension '{}', expected .json or .csv",
            extension
        );
    }

    let reader = BufReader::new(File::open(path)?);
    let requests = if extension == "json" {
        read_json(reader)?
    } else {
        read_csv(reader)?
    };
    log::info!("Read {} requests from {}", requests.len(), path.display());
    Ok(requests)
}
