use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use shoplens_catalog::Catalog;
use shoplens_core::{CurrencyCode, DomainError, DomainResult, Money, OrderId, Sku, UserId};

/// User-editable, not-yet-validated line item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItemDraft {
    pub sku: Sku,
    pub quantity: i64,
}

impl LineItemDraft {
    /// Blank line as shown when the form opens: no SKU, quantity 1.
    pub fn blank() -> Self {
        Self {
            sku: Sku::new(""),
            quantity: 1,
        }
    }

    /// A line survives composition when it has a SKU and a positive quantity.
    fn is_submittable(&self) -> bool {
        !self.sku.is_empty() && self.quantity > 0
    }
}

/// Single-field edit applied to one draft line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineItemEdit {
    Sku(Sku),
    Quantity(i64),
}

/// Order-level fields collected alongside the line items.
///
/// `created_at` is optional here because the form can be submitted before the
/// field is filled in; [`OrderComposer::compose`] re-validates presence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderHeaderDraft {
    pub order_id: OrderId,
    pub user_id: UserId,
    pub created_at: Option<DateTime<Utc>>,
    pub currency: CurrencyCode,
}

/// Validated line item carried on a composed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub sku: Sku,
    pub quantity: i64,
}

/// Finalized order payload, ready for the submission client.
///
/// Serializes to the bulk-ingest order shape (`items`, `total_amount`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComposedOrder {
    pub order_id: OrderId,
    pub user_id: UserId,
    #[serde(rename = "items")]
    pub line_items: Vec<OrderLine>,
    pub total_amount: Money,
    pub currency: CurrencyCode,
    pub created_at: DateTime<Utc>,
}

/// Validation failures raised by [`OrderComposer::compose`].
///
/// All are synchronous and recoverable: the caller renders them and may
/// recompose after the user edits the drafts. Nothing here is retried
/// internally.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ComposeError {
    /// An order-level field was left empty.
    #[error("missing required field: {0}")]
    MissingRequiredField(&'static str),

    /// Every draft line was blank or had a non-positive quantity.
    #[error("no valid line items: each line needs a SKU and a positive quantity")]
    NoValidLineItems,

    /// One or more SKUs are not in the session catalog, in draft order.
    #[error("unknown SKUs: {}", join_skus(.0))]
    UnknownSkus(Vec<Sku>),
}

fn join_skus(skus: &[Sku]) -> String {
    skus.iter()
        .map(Sku::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Owned state for one order-entry session.
///
/// Holds the catalog snapshot taken at session start and the mutable draft
/// lines. All mutation goes through the methods here; `compose` and
/// `running_total` are read-only. Single-owner, single-session: exactly one
/// caller drives a composer at a time.
#[derive(Debug, Clone)]
pub struct OrderComposer {
    catalog: Catalog,
    drafts: Vec<LineItemDraft>,
}

impl OrderComposer {
    /// Start a session with one blank draft line.
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            drafts: vec![LineItemDraft::blank()],
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn drafts(&self) -> &[LineItemDraft] {
        &self.drafts
    }

    /// Append a blank line. Existing lines keep their order and values.
    pub fn add_line(&mut self) {
        self.drafts.push(LineItemDraft::blank());
    }

    /// Remove the line at `index`, preserving the order of the rest.
    ///
    /// The last remaining line is never removed: a session always shows at
    /// least one draft line, so removing it is a no-op rather than an error.
    pub fn remove_line(&mut self, index: usize) -> DomainResult<()> {
        if index >= self.drafts.len() {
            return Err(DomainError::validation(format!(
                "line index {index} out of range"
            )));
        }
        if self.drafts.len() == 1 {
            return Ok(());
        }
        self.drafts.remove(index);
        Ok(())
    }

    /// Apply a single-field edit to the line at `index`.
    ///
    /// No field validation happens here: unmatched SKUs and non-positive
    /// quantities are legal transient states, checked only by `compose`.
    pub fn update_line(&mut self, index: usize, edit: LineItemEdit) -> DomainResult<()> {
        let line = self.drafts.get_mut(index).ok_or_else(|| {
            DomainError::validation(format!("line index {index} out of range"))
        })?;

        match edit {
            LineItemEdit::Sku(sku) => line.sku = sku,
            LineItemEdit::Quantity(quantity) => line.quantity = quantity,
        }
        Ok(())
    }

    /// Live total for display.
    ///
    /// Lines that do not resolve to a catalog price (unknown SKU, empty SKU,
    /// non-positive quantity) contribute zero. Never fails.
    pub fn running_total(&self) -> Money {
        self.total_of(self.drafts.iter())
    }

    fn total_of<'a>(&self, lines: impl Iterator<Item = &'a LineItemDraft>) -> Money {
        lines.fold(Money::ZERO, |total, line| {
            let contribution = self
                .catalog
                .unit_price_of(&line.sku)
                .and_then(|price| price.line_total(line.quantity))
                .unwrap_or(Money::ZERO);
            total.saturating_add(contribution)
        })
    }

    /// Validate the drafts against the catalog and produce the final payload.
    ///
    /// The draft list is left untouched; callers discard the session only
    /// after the submission client confirms acceptance. See [`ComposeError`]
    /// for the failure cases.
    pub fn compose(&self, header: &OrderHeaderDraft) -> Result<ComposedOrder, ComposeError> {
        if header.order_id.is_empty() {
            return Err(ComposeError::MissingRequiredField("order_id"));
        }
        if header.user_id.is_empty() {
            return Err(ComposeError::MissingRequiredField("user_id"));
        }
        let created_at = header
            .created_at
            .ok_or(ComposeError::MissingRequiredField("created_at"))?;

        let retained: Vec<&LineItemDraft> = self
            .drafts
            .iter()
            .filter(|line| line.is_submittable())
            .collect();
        if retained.is_empty() {
            return Err(ComposeError::NoValidLineItems);
        }

        let unknown: Vec<Sku> = retained
            .iter()
            .filter(|line| !self.catalog.contains(&line.sku))
            .map(|line| line.sku.clone())
            .collect();
        if !unknown.is_empty() {
            return Err(ComposeError::UnknownSkus(unknown));
        }

        // Same formula as the running total, now over lines whose lookups are
        // all guaranteed to succeed.
        let total_amount = self.total_of(retained.iter().copied());

        Ok(ComposedOrder {
            order_id: header.order_id.clone(),
            user_id: header.user_id.clone(),
            line_items: retained
                .iter()
                .map(|line| OrderLine {
                    sku: line.sku.clone(),
                    quantity: line.quantity,
                })
                .collect(),
            total_amount,
            currency: header.currency.clone(),
            created_at,
        })
    }

    /// Discard the session drafts, back to a single blank line.
    pub fn reset(&mut self) {
        self.drafts = vec![LineItemDraft::blank()];
    }
}
