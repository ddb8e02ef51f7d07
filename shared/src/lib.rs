use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single debt entry: money owed by a named debtor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Debt {
    /// Row id assigned by the database, immutable once created
    pub id: i64,
    /// Free-form debtor label
    pub name: String,
    /// Amount owed (no fixed-point guarantee)
    pub amount: f64,
    /// Free-form borrow date, expected to approximate MM/DD/YYYY
    pub date: String,
    /// Payment status
    pub status: DebtStatus,
}

/// Payment status of a debt. Stored and serialized as the literal
/// strings "Pending" / "Paid".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DebtStatus {
    Pending,
    Paid,
}

impl DebtStatus {
    /// The other status value.
    pub fn toggled(self) -> Self {
        match self {
            DebtStatus::Pending => DebtStatus::Paid,
            DebtStatus::Paid => DebtStatus::Pending,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DebtStatus::Pending => "Pending",
            DebtStatus::Paid => "Paid",
        }
    }
}

impl fmt::Display for DebtStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DebtStatus {
    type Err = DebtStatusParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(DebtStatus::Pending),
            "Paid" => Ok(DebtStatus::Paid),
            other => Err(DebtStatusParseError(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DebtStatusParseError(pub String);

impl fmt::Display for DebtStatusParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid debt status: {:?}", self.0)
    }
}

impl std::error::Error for DebtStatusParseError {}

/// Request to create a new debt entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateDebtRequest {
    pub name: String,
    pub amount: f64,
    pub date: String,
    /// Defaults to Pending when not provided
    pub status: Option<DebtStatus>,
}

/// Request to overwrite all mutable fields of an existing debt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateDebtRequest {
    pub name: String,
    pub amount: f64,
    pub date: String,
    pub status: DebtStatus,
}

/// Response containing the full debt list snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebtListResponse {
    pub debts: Vec<Debt>,
}

/// Response after deleting a debt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteDebtResponse {
    pub id: i64,
    pub success_message: String,
}

/// Specific form validation errors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DebtFormError {
    EmptyName,
    NameTooLong(usize),
    EmptyAmount,
    InvalidAmount(String),
    AmountTooLong(usize),
    EmptyDate,
    DateTooLong(usize),
}

impl fmt::Display for DebtFormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DebtFormError::EmptyName => write!(f, "Debtor's name is required"),
            DebtFormError::NameTooLong(len) => {
                write!(f, "Name is {} characters (max {})", len, MAX_NAME_LEN)
            }
            DebtFormError::EmptyAmount => write!(f, "Amount owed is required"),
            DebtFormError::InvalidAmount(raw) => {
                write!(f, "{:?} is not a valid amount", raw)
            }
            DebtFormError::AmountTooLong(len) => {
                write!(f, "Amount is {} characters (max {})", len, MAX_AMOUNT_LEN)
            }
            DebtFormError::EmptyDate => write!(f, "Borrowed date is required"),
            DebtFormError::DateTooLong(len) => {
                write!(f, "Date is {} characters (max {})", len, MAX_DATE_LEN)
            }
        }
    }
}

/// Validation result for the debt entry form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebtFormValidation {
    pub is_valid: bool,
    pub errors: Vec<DebtFormError>,
    /// Parsed amount when the raw input was a valid number
    pub cleaned_amount: Option<f64>,
}

// Input caps matching the original entry form
pub const MAX_NAME_LEN: usize = 25;
pub const MAX_AMOUNT_LEN: usize = 10;
pub const MAX_DATE_LEN: usize = 16;

/// Validate raw form input before submitting to the backend.
///
/// Presence checks plus amount parseability; the date is only checked for
/// presence and length, never parsed structurally.
pub fn validate_debt_form(name: &str, amount: &str, date: &str) -> DebtFormValidation {
    let mut errors = Vec::new();

    // Caps count characters, matching what the form's maxlength admits
    let name = name.trim();
    let name_len = name.chars().count();
    if name.is_empty() {
        errors.push(DebtFormError::EmptyName);
    } else if name_len > MAX_NAME_LEN {
        errors.push(DebtFormError::NameTooLong(name_len));
    }

    let amount = amount.trim();
    let amount_len = amount.chars().count();
    let mut cleaned_amount = None;
    if amount.is_empty() {
        errors.push(DebtFormError::EmptyAmount);
    } else if amount_len > MAX_AMOUNT_LEN {
        errors.push(DebtFormError::AmountTooLong(amount_len));
    } else {
        match amount.parse::<f64>() {
            Ok(value) if value.is_finite() => cleaned_amount = Some(value),
            _ => errors.push(DebtFormError::InvalidAmount(amount.to_string())),
        }
    }

    let date = date.trim();
    let date_len = date.chars().count();
    if date.is_empty() {
        errors.push(DebtFormError::EmptyDate);
    } else if date_len > MAX_DATE_LEN {
        errors.push(DebtFormError::DateTooLong(date_len));
    }

    DebtFormValidation {
        is_valid: errors.is_empty(),
        errors,
        cleaned_amount,
    }
}

/// Format an amount for display with a peso sign and thousands separators,
/// e.g. 1500.5 -> "₱1,500.50".
pub fn format_amount(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = format!("{:.2}", amount.abs());
    let (whole, frac) = cents.split_once('.').unwrap_or((cents.as_str(), "00"));

    let mut grouped = String::new();
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if negative {
        format!("-₱{}.{}", grouped, frac)
    } else {
        format!("₱{}.{}", grouped, frac)
    }
}
