//! Create forms: field editing and conversion into complete records.

use chrono::NaiveDate;

use crate::error::{DashError, Result};
use crate::state::records::{Collection, Tabular, Transaction, TxnStatus, TxnType};
use crate::util::{format_display_date, next_id};

/// Icons offered by the New collection form.
pub const COLLECTION_ICONS: [&str; 12] = [
    "🎨", "📚", "🚀", "👩‍💻", "📊", "📝", "🔍", "💡", "🎯", "🧩", "🎬", "📌",
];

/// Payment methods offered by the New payment form.
pub const PAYMENT_METHODS: [&str; 4] = ["Visa", "Mastercard", "PayPal", "Bank transfer"];

/// One form input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    /// Label shown left of the input.
    pub label: &'static str,
    /// Current text.
    pub value: String,
    /// Allowed values; empty for free text.
    pub options: &'static [&'static str],
    /// Whether an empty value is rejected.
    pub required: bool,
}

impl FormField {
    fn text(label: &'static str, required: bool) -> Self {
        Self {
            label,
            value: String::new(),
            options: &[],
            required,
        }
    }

    fn choice(label: &'static str, options: &'static [&'static str]) -> Self {
        Self {
            label,
            value: options.first().map(|s| (*s).to_string()).unwrap_or_default(),
            options,
            required: true,
        }
    }

    /// Whether the field cycles through fixed values.
    pub const fn is_choice(&self) -> bool {
        !self.options.is_empty()
    }
}

/// Which record a form creates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    /// New collection (Collections page).
    Collection,
    /// New payment (Transactions page).
    Payment,
}

impl FormKind {
    /// Modal title.
    pub const fn title(self) -> &'static str {
        match self {
            Self::Collection => "Create Collection",
            Self::Payment => "New Payment",
        }
    }
}

/// State of an open create form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    /// Record kind being created.
    pub kind: FormKind,
    /// Inputs in display order.
    pub fields: Vec<FormField>,
    /// Index of the focused input.
    pub focus: usize,
    /// Id the record will receive.
    pub preview_id: String,
    /// Last validation error.
    pub error: Option<String>,
}

impl FormState {
    /// What: Empty New collection form.
    ///
    /// Inputs:
    /// - `preview_id`: Id the record will receive
    ///
    /// Output:
    /// - Form with title, type, visibility, icon and owner inputs
    pub fn new_collection(preview_id: String) -> Self {
        Self {
            kind: FormKind::Collection,
            fields: vec![
                FormField::text("Title", true),
                FormField::choice("Type", &["Collection", "Bookmark"]),
                FormField::choice("Visibility", &["Public", "Private", "Featured"]),
                FormField::choice("Icon", &COLLECTION_ICONS),
                FormField::text("Owner", false),
            ],
            focus: 0,
            preview_id,
            error: None,
        }
    }

    /// What: Empty New payment form.
    ///
    /// Inputs:
    /// - `preview_id`: Id the record will receive
    ///
    /// Output:
    /// - Form with user, amount, method and type inputs
    pub fn new_payment(preview_id: String) -> Self {
        Self {
            kind: FormKind::Payment,
            fields: vec![
                FormField::text("User", true),
                FormField::text("Amount", true),
                FormField::choice("Method", &PAYMENT_METHODS),
                FormField::choice("Type", &["Credit", "Debit"]),
            ],
            focus: 0,
            preview_id,
            error: None,
        }
    }

    /// Value of the input labelled `label` (trimmed).
    pub fn value(&self, label: &str) -> &str {
        self.fields
            .iter()
            .find(|f| f.label == label)
            .map_or("", |f| f.value.trim())
    }

    /// Move focus by `delta` inputs, wrapping around.
    pub fn move_focus(&mut self, delta: isize) {
        let n = self.fields.len();
        if n == 0 {
            return;
        }
        let step = delta.unsigned_abs() % n;
        self.focus = if delta < 0 {
            (self.focus + n - step) % n
        } else {
            (self.focus + step) % n
        };
    }

    /// Type a character into the focused text input.
    pub fn push_char(&mut self, c: char) {
        if let Some(f) = self.fields.get_mut(self.focus)
            && !f.is_choice()
        {
            f.value.push(c);
            self.error = None;
        }
    }

    /// Delete the last character of the focused text input.
    pub fn pop_char(&mut self) {
        if let Some(f) = self.fields.get_mut(self.focus)
            && !f.is_choice()
        {
            f.value.pop();
        }
    }

    /// What: Step the focused choice input to its next or previous value.
    ///
    /// Inputs:
    /// - `forward`: Direction
    ///
    /// Output:
    /// - Updates the value; text inputs are left unchanged
    pub fn cycle_choice(&mut self, forward: bool) {
        let Some(f) = self.fields.get_mut(self.focus) else {
            return;
        };
        if !f.is_choice() {
            return;
        }
        let n = f.options.len();
        let cur = f.options.iter().position(|o| *o == f.value).unwrap_or(0);
        let next = if forward { (cur + 1) % n } else { (cur + n - 1) % n };
        f.value = f.options[next].to_string();
    }

    /// Fail with `InvalidField` on the first empty required input.
    fn check_required(&self) -> Result<()> {
        match self
            .fields
            .iter()
            .find(|f| f.required && f.value.trim().is_empty())
        {
            Some(f) => Err(DashError::invalid(f.label, "is required")),
            None => Ok(()),
        }
    }
}

/// What: Parse a money amount typed by a user.
///
/// Inputs:
/// - `s`: Text such as `1200`, `$1,200.50`
///
/// Output:
/// - Positive finite amount; `InvalidField` otherwise
pub fn parse_amount(s: &str) -> Result<f64> {
    let cleaned: String = s
        .trim()
        .chars()
        .filter(|c| !matches!(c, '$' | ',' | ' '))
        .collect();
    match cleaned.parse::<f64>() {
        Ok(v) if v.is_finite() && v > 0.0 => Ok((v * 100.0).round() / 100.0),
        Ok(_) => Err(DashError::invalid("Amount", "must be greater than zero")),
        Err(_) => Err(DashError::invalid("Amount", "is not a number")),
    }
}

/// What: Build a collection from a filled form.
///
/// Inputs:
/// - `form`: New collection form
/// - `existing`: Ids already in the collection
/// - `today`: Creation and modification date
///
/// Output:
/// - Complete `Collection` with a fresh `C-####` id and zero items
pub fn build_collection<'a>(
    form: &FormState,
    existing: impl IntoIterator<Item = &'a str>,
    today: NaiveDate,
) -> Result<Collection> {
    form.check_required()?;
    let date = format_display_date(today);
    Ok(Collection {
        id: next_id(Collection::ID_PREFIX, Collection::ID_WIDTH, existing),
        icon: form.value("Icon").to_string(),
        title: form.value("Title").to_string(),
        kind: form.value("Type").to_string(),
        owner: form.value("Owner").to_string(),
        visibility: form.value("Visibility").to_string(),
        created: date.clone(),
        count: 0,
        modified: date,
        linked_to: String::new(),
    })
}

/// What: Build a transaction from a filled form.
///
/// Inputs:
/// - `form`: New payment form
/// - `existing`: Ids already in the collection
/// - `today`: Transaction date
///
/// Output:
/// - Pending `Transaction` with a fresh `TXN-###` id
pub fn build_payment<'a>(
    form: &FormState,
    existing: impl IntoIterator<Item = &'a str>,
    today: NaiveDate,
) -> Result<Transaction> {
    form.check_required()?;
    let amount = parse_amount(form.value("Amount"))?;
    let kind = TxnType::from_input(form.value("Type"))
        .ok_or_else(|| DashError::invalid("Type", "must be Credit or Debit"))?;
    Ok(Transaction {
        id: next_id(Transaction::ID_PREFIX, Transaction::ID_WIDTH, existing),
        user: form.value("User").to_string(),
        amount,
        kind,
        status: TxnStatus::Pending,
        date: format_display_date(today),
        method: form.value("Method").to_string(),
        card_number: String::new(),
        next_bill: String::new(),
        linked_to: String::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 9, 14).expect("valid date")
    }

    fn type_text(form: &mut FormState, s: &str) {
        for c in s.chars() {
            form.push_char(c);
        }
    }

    #[test]
    /// What: Collection form validation and id assignment
    ///
    /// - Input: Submit empty; then fill title and cycle visibility
    /// - Output: Title required error; then `C-0003` skipping taken ids
    fn collection_form() {
        let mut form = FormState::new_collection("C-0003".into());
        let err = build_collection(&form, ["C-0001", "C-0002"], today());
        assert!(matches!(err, Err(DashError::InvalidField { ref field, .. }) if field == "Title"));

        type_text(&mut form, "Reading list");
        form.move_focus(2);
        form.cycle_choice(true);
        form.push_char('x');
        let c = build_collection(&form, ["C-0001", "C-0002"], today()).expect("valid form");
        assert_eq!(c.id, "C-0003");
        assert_eq!(c.title, "Reading list");
        assert_eq!(c.visibility, "Private");
        assert_eq!(c.created, "Sep 14, 2025");
        assert_eq!(c.count, 0);
    }

    #[test]
    /// What: Payment form amount parsing
    ///
    /// - Input: Amounts "abc", "0", "$1,250.5"
    /// - Output: Two errors, then a pending 1250.50 payment
    fn payment_form() {
        let mut form = FormState::new_payment("TXN-004".into());
        type_text(&mut form, "Priya Nguyen");
        form.move_focus(1);
        type_text(&mut form, "abc");
        assert!(build_payment(&form, ["TXN-001"], today()).is_err());
        form.fields[1].value = "0".into();
        assert!(build_payment(&form, ["TXN-001"], today()).is_err());
        form.fields[1].value = "$1,250.5".into();
        form.move_focus(-1);
        assert_eq!(form.focus, 0);
        let t = build_payment(&form, ["TXN-001", "TXN-002"], today()).expect("valid form");
        assert_eq!(t.id, "TXN-003");
        assert!((t.amount - 1250.5).abs() < f64::EPSILON);
        assert_eq!(t.status, TxnStatus::Pending);
        assert_eq!(t.method, "Visa");
    }
}
