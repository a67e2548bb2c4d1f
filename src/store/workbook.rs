use chrono::{DateTime, NaiveDate, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::sample::{sample_clients, sample_invoices};
use super::{
    ALL_KEYS, BUSINESS_PROFILE_KEY, CLIENTS_KEY, INVOICES_KEY, SETTINGS_KEY, StorageBackend,
};
use crate::core::*;

/// Format version written into exports.
pub const EXPORT_VERSION: &str = "1.0";

/// Full data snapshot for backup and transfer.
///
/// On import, a missing section leaves the stored data untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportBundle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invoices: Option<Vec<Invoice>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clients: Option<Vec<Client>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_profile: Option<BusinessProfile>,
    pub exported_at: DateTime<Utc>,
    pub version: String,
}

/// Invoicing data kept in a [`StorageBackend`].
///
/// Every mutation loads the affected collection, changes it and writes the
/// whole collection back.
///
/// ```
/// use billbook::core::*;
/// use billbook::store::{MemoryBackend, Workbook};
/// use chrono::{NaiveDate, TimeZone, Utc};
/// use rust_decimal_macros::dec;
///
/// let now = Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap();
/// let mut book = Workbook::new(MemoryBackend::new());
///
/// let invoice = book
///     .new_invoice("client-1", NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(), now)
///     .unwrap()
///     .add_item(InvoiceItem::new("Consulting", dec!(8), dec!(150), dec!(0)))
///     .build()
///     .unwrap();
/// book.save_invoice(&invoice).unwrap();
///
/// assert_eq!(invoice.invoice_number, "INV-2024-0001");
/// assert_eq!(book.next_invoice_number(now).unwrap(), "INV-2024-0002");
/// ```
#[derive(Debug)]
pub struct Workbook<B> {
    backend: B,
}

impl<B: StorageBackend> Workbook<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn into_inner(self) -> B {
        self.backend
    }

    // ── Invoices ────────────────────────────────────────────────────────────

    /// All stored invoices, exactly as persisted. Status is not reconciled.
    pub fn invoices(&self) -> Result<Vec<Invoice>, BillbookError> {
        Ok(self.load(INVOICES_KEY)?.unwrap_or_default())
    }

    /// Replace the whole invoice collection.
    pub fn save_invoices(&mut self, invoices: &[Invoice]) -> Result<(), BillbookError> {
        self.store(INVOICES_KEY, invoices)
    }

    pub fn invoice_by_id(&self, id: &str) -> Result<Option<Invoice>, BillbookError> {
        Ok(self.invoices()?.into_iter().find(|inv| inv.id == id))
    }

    pub fn invoice_by_number(&self, number: &str) -> Result<Option<Invoice>, BillbookError> {
        Ok(self
            .invoices()?
            .into_iter()
            .find(|inv| inv.invoice_number == number))
    }

    /// Insert or replace (by id) one invoice.
    pub fn save_invoice(&mut self, invoice: &Invoice) -> Result<(), BillbookError> {
        let mut invoices = self.invoices()?;
        match invoices.iter_mut().find(|inv| inv.id == invoice.id) {
            Some(existing) => *existing = invoice.clone(),
            None => invoices.push(invoice.clone()),
        }
        self.save_invoices(&invoices)?;
        tracing::info!(invoice = %invoice.invoice_number, id = %invoice.id, "invoice saved");
        Ok(())
    }

    /// Delete an invoice by id. Returns whether it existed.
    pub fn delete_invoice(&mut self, id: &str) -> Result<bool, BillbookError> {
        let mut invoices = self.invoices()?;
        let before = invoices.len();
        invoices.retain(|inv| inv.id != id);
        if invoices.len() == before {
            return Ok(false);
        }
        self.save_invoices(&invoices)?;
        tracing::info!(id, "invoice deleted");
        Ok(true)
    }

    /// Next number in the configured prefix for the year of `now`.
    pub fn next_invoice_number(&self, now: DateTime<Utc>) -> Result<String, BillbookError> {
        let settings = self.settings()?;
        let invoices = self.invoices()?;
        let seq = InvoiceNumberSequence::from_existing(
            format!("{}-", settings.invoice_prefix),
            chrono::Datelike::year(&now),
            invoices.iter().map(|inv| inv.invoice_number.as_str()),
        );
        Ok(seq.peek())
    }

    /// Start a new invoice with the next number and the business profile's
    /// default payment terms and terms text. Nothing is saved until
    /// [`save_invoice`](Self::save_invoice).
    pub fn new_invoice(
        &self,
        client_id: &str,
        issue_date: NaiveDate,
        now: DateTime<Utc>,
    ) -> Result<InvoiceBuilder, BillbookError> {
        let profile = self.business_profile()?;
        let number = self.next_invoice_number(now)?;
        Ok(InvoiceBuilder::new(number, client_id, issue_date)
            .payment_terms(profile.payment_terms)
            .terms(profile.invoice_terms)
            .created_at(now))
    }

    /// Apply a user-triggered status change and persist it.
    pub fn update_status(
        &mut self,
        id: &str,
        status: InvoiceStatus,
        now: DateTime<Utc>,
    ) -> Result<Invoice, BillbookError> {
        let mut invoices = self.invoices()?;
        let invoice = invoices
            .iter_mut()
            .find(|inv| inv.id == id)
            .ok_or_else(|| BillbookError::NotFound(format!("invoice '{id}'")))?;
        let from = invoice.status;
        invoice.transition_to(status, now)?;
        let updated = invoice.clone();
        self.save_invoices(&invoices)?;
        tracing::info!(
            invoice = %updated.invoice_number,
            from = %from,
            to = %status,
            "invoice status changed"
        );
        Ok(updated)
    }

    /// Mark every past-due sent invoice overdue and persist the change.
    /// Writes nothing when no invoice changed. Returns the number changed.
    pub fn reconcile_overdue(&mut self, now: DateTime<Utc>) -> Result<usize, BillbookError> {
        let mut invoices = self.invoices()?;
        let changed = reconcile_overdue(&mut invoices, now);
        if changed > 0 {
            self.save_invoices(&invoices)?;
            tracing::info!(changed, "overdue invoices reconciled");
        }
        Ok(changed)
    }

    /// Statistics over the stored invoices as of `now`.
    #[cfg(feature = "dashboard")]
    pub fn dashboard(
        &self,
        now: DateTime<Utc>,
    ) -> Result<crate::dashboard::DashboardStats, BillbookError> {
        Ok(crate::dashboard::calculate_dashboard_stats(
            &self.invoices()?,
            now,
        ))
    }

    // ── Clients ─────────────────────────────────────────────────────────────

    pub fn clients(&self) -> Result<Vec<Client>, BillbookError> {
        Ok(self.load(CLIENTS_KEY)?.unwrap_or_default())
    }

    pub fn save_clients(&mut self, clients: &[Client]) -> Result<(), BillbookError> {
        self.store(CLIENTS_KEY, clients)
    }

    pub fn client_by_id(&self, id: &str) -> Result<Option<Client>, BillbookError> {
        Ok(self.clients()?.into_iter().find(|c| c.id == id))
    }

    /// Insert or replace (by id) one client.
    pub fn save_client(&mut self, client: &Client) -> Result<(), BillbookError> {
        let mut clients = self.clients()?;
        match clients.iter_mut().find(|c| c.id == client.id) {
            Some(existing) => *existing = client.clone(),
            None => clients.push(client.clone()),
        }
        self.save_clients(&clients)?;
        tracing::info!(client = %client.id, "client saved");
        Ok(())
    }

    /// Delete a client by id. Invoices referencing it are kept.
    pub fn delete_client(&mut self, id: &str) -> Result<bool, BillbookError> {
        let mut clients = self.clients()?;
        let before = clients.len();
        clients.retain(|c| c.id != id);
        if clients.len() == before {
            return Ok(false);
        }
        self.save_clients(&clients)?;
        tracing::info!(id, "client deleted");
        Ok(true)
    }

    pub fn search_clients(&self, term: &str) -> Result<Vec<Client>, BillbookError> {
        let clients = self.clients()?;
        Ok(search_clients(&clients, term).into_iter().cloned().collect())
    }

    // ── Business profile and settings ───────────────────────────────────────

    /// The stored profile, if one was ever saved.
    pub fn stored_business_profile(&self) -> Result<Option<BusinessProfile>, BillbookError> {
        self.load(BUSINESS_PROFILE_KEY)
    }

    /// The stored profile, or [`BusinessProfile::default`] if none exists.
    pub fn business_profile(&self) -> Result<BusinessProfile, BillbookError> {
        Ok(self.stored_business_profile()?.unwrap_or_default())
    }

    pub fn save_business_profile(&mut self, profile: &BusinessProfile) -> Result<(), BillbookError> {
        let errors = validate_business_profile(profile);
        if !errors.is_empty() {
            return Err(BillbookError::Validation(join_errors(&errors)));
        }
        self.store(BUSINESS_PROFILE_KEY, profile)
    }

    /// Stored settings, or defaults.
    pub fn settings(&self) -> Result<Settings, BillbookError> {
        Ok(self.load(SETTINGS_KEY)?.unwrap_or_default())
    }

    pub fn save_settings(&mut self, settings: &Settings) -> Result<(), BillbookError> {
        let errors = validate_settings(settings);
        if !errors.is_empty() {
            return Err(BillbookError::Validation(join_errors(&errors)));
        }
        self.store(SETTINGS_KEY, settings)
    }

    // ── Export / import ─────────────────────────────────────────────────────

    pub fn export(&self, now: DateTime<Utc>) -> Result<ExportBundle, BillbookError> {
        Ok(ExportBundle {
            invoices: Some(self.invoices()?),
            clients: Some(self.clients()?),
            business_profile: self.stored_business_profile()?,
            exported_at: now,
            version: EXPORT_VERSION.to_string(),
        })
    }

    /// Write every section present in `bundle`, replacing what is stored.
    pub fn import(&mut self, bundle: &ExportBundle) -> Result<(), BillbookError> {
        if bundle.version != EXPORT_VERSION {
            tracing::warn!(version = %bundle.version, "importing data from unknown export version");
        }
        if let Some(invoices) = &bundle.invoices {
            self.save_invoices(invoices)?;
        }
        if let Some(clients) = &bundle.clients {
            self.save_clients(clients)?;
        }
        // Imported data is restored as-is, like invoices and clients.
        if let Some(profile) = &bundle.business_profile {
            self.store(BUSINESS_PROFILE_KEY, profile)?;
        }
        tracing::info!(
            invoices = bundle.invoices.as_ref().map_or(0, Vec::len),
            clients = bundle.clients.as_ref().map_or(0, Vec::len),
            "data imported"
        );
        Ok(())
    }

    pub fn export_json(&self, now: DateTime<Utc>) -> Result<String, BillbookError> {
        serde_json::to_string_pretty(&self.export(now)?).map_err(|source| {
            BillbookError::Serialization {
                key: "export".into(),
                source,
            }
        })
    }

    pub fn import_json(&mut self, json: &str) -> Result<(), BillbookError> {
        let bundle: ExportBundle =
            serde_json::from_str(json).map_err(|source| BillbookError::Serialization {
                key: "import".into(),
                source,
            })?;
        self.import(&bundle)
    }

    /// Remove every stored collection.
    pub fn clear(&mut self) -> Result<(), BillbookError> {
        for key in ALL_KEYS {
            self.backend.remove(key)?;
        }
        tracing::info!("all data cleared");
        Ok(())
    }

    /// Store two sample clients and invoices if there are no invoices and no
    /// clients yet. Returns whether anything was written.
    pub fn seed_sample_data(&mut self) -> Result<bool, BillbookError> {
        if !self.invoices()?.is_empty() || !self.clients()?.is_empty() {
            return Ok(false);
        }
        self.save_clients(&sample_clients())?;
        self.save_invoices(&sample_invoices())?;
        tracing::info!("sample data created");
        Ok(true)
    }

    // ── Serialization helpers ───────────────────────────────────────────────

    fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, BillbookError> {
        let Some(raw) = self.backend.get(key)? else {
            return Ok(None);
        };
        tracing::debug!(key, bytes = raw.len(), "loading collection");
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| BillbookError::Serialization {
                key: key.to_string(),
                source,
            })
    }

    fn store<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> Result<(), BillbookError> {
        let raw = serde_json::to_string(value).map_err(|source| BillbookError::Serialization {
            key: key.to_string(),
            source,
        })?;
        self.backend.set(key, raw)
    }
}
