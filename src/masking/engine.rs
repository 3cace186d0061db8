//! Main masking engine
//!
//! This module provides the [`MaskingEngine`] that classifies column headers,
//! applies the per-category transform to every value of the selected columns
//! and records the run in the audit log.
//!
//! # Examples
//!
//! ```
//! use std::collections::HashSet;
//! use tabmask::domain::{CellValue, Column, Record};
//! use tabmask::masking::{MaskingConfig, MaskingEngine};
//!
//! # fn example() -> anyhow::Result<()> {
//! let config = MaskingConfig {
//!     seed: Some(7),
//!     ..MaskingConfig::default()
//! };
//! let engine = MaskingEngine::new(config)?;
//!
//! let record = Record::new(vec![
//!     Column::new("Gender", vec![CellValue::from("Male"), CellValue::from("Female")]),
//!     Column::new("Notes", vec![CellValue::from("hello"), CellValue::Missing]),
//! ])?;
//! let selected: HashSet<String> = ["Gender".to_string()].into_iter().collect();
//!
//! let outcome = engine.apply_masking(&record, &selected)?;
//! assert_eq!(outcome.record.column("Gender").unwrap().values[0], CellValue::from("Gender1"));
//! assert_eq!(outcome.record.column("Notes").unwrap().values[0], CellValue::from("hello"));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

use crate::domain::{CellValue, Column, Record};
use crate::masking::{
    audit::AuditLogger,
    classifier::{keyword::KeywordClassifier, keywords::KeywordRegistry, ColumnClassifier},
    config::{GenericPolicy, MaskingConfig},
    generators,
    maskers::{
        bucket_range, format_range, mask_date, BucketSpec, DateKind, Masker, AGE_BUCKET,
        SALARY_BUCKET,
    },
    models::{Classification, PiiCategory},
    pseudonym::PseudonymRegistry,
    report::{ColumnResult, DetectionReport, MaskingOutcome},
};
use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use std::time::Instant;
use tokio::task::JoinSet;
use uuid::Uuid;

/// Main masking engine
///
/// # Thread Safety
///
/// The engine is `Send + Sync` and can be shared through an `Arc`. The
/// pseudonym registry is shared by every column, so a value pseudonymized in
/// one run keeps its label for the lifetime of the engine. The run RNG sits
/// behind a mutex; the concurrent entry point gives each column task its own
/// RNG seeded from it.
pub struct MaskingEngine {
    config: MaskingConfig,
    classifier: Arc<dyn ColumnClassifier>,
    registry: Arc<PseudonymRegistry>,
    masker: Masker,
    rng: Mutex<StdRng>,
    audit_logger: Option<AuditLogger>,
}

impl MaskingEngine {
    /// Create a new masking engine
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration validation fails
    /// - The keyword library cannot be loaded
    /// - Audit logger initialization fails
    pub fn new(config: MaskingConfig) -> Result<Self> {
        config
            .validate()
            .context("Invalid masking configuration")?;

        let classifier: Arc<dyn ColumnClassifier> = match config.keyword_library {
            Some(ref path) => {
                let registry = KeywordRegistry::from_file(path, config.fuzzy_threshold)?;
                Arc::new(KeywordClassifier::with_registry(registry))
            }
            None => Arc::new(KeywordClassifier::new(config.fuzzy_threshold)?),
        };

        Self::with_classifier(config, classifier)
    }

    /// Create an engine around a custom classifier
    pub fn with_classifier(
        config: MaskingConfig,
        classifier: Arc<dyn ColumnClassifier>,
    ) -> Result<Self> {
        config
            .validate()
            .context("Invalid masking configuration")?;

        let audit_logger = if config.audit.enabled {
            Some(AuditLogger::new(
                config.audit.log_path.clone(),
                config.audit.json_format,
            )?)
        } else {
            None
        };

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Ok(Self {
            masker: Masker::new(config.mask_char),
            config,
            classifier,
            registry: Arc::new(PseudonymRegistry::new()),
            rng: Mutex::new(rng),
            audit_logger,
        })
    }

    pub fn config(&self) -> &MaskingConfig {
        &self.config
    }

    pub fn registry(&self) -> &PseudonymRegistry {
        &self.registry
    }

    /// Classify a single header
    pub fn classify(&self, header: &str) -> Classification {
        self.classifier.classify(header)
    }

    /// Classify headers, preserving their order
    pub fn classify_columns(&self, headers: &[&str]) -> DetectionReport {
        DetectionReport::new(self.classifier.classify_all(headers))
    }

    /// Mask one column's values according to its header
    ///
    /// The header is classified once; the returned vector has the same length
    /// as `values`.
    pub fn mask_column(&self, header: &str, values: &[CellValue]) -> Vec<CellValue> {
        let category = self.classify(header).category;
        let today = Utc::now().date_naive();
        let mut rng = self.lock_rng();
        self.mask_values(category, values, &mut *rng, today).0
    }

    /// Mask the selected columns of a record
    ///
    /// Unselected columns pass through unchanged. Selected headers that are
    /// not in the record are skipped with a warning and listed in the outcome.
    pub fn apply_masking(&self, record: &Record, selected: &HashSet<String>) -> Result<MaskingOutcome> {
        let start = Instant::now();
        let run_id = Uuid::new_v4();
        let today = Utc::now().date_naive();

        crate::log_masking_start!(run_id, selected.len(), record.row_count());
        let skipped = self.skipped_headers(record, selected);

        let mut results = Vec::new();
        let mut columns = Vec::with_capacity(record.column_count());
        {
            let mut rng = self.lock_rng();
            for column in record.columns() {
                if selected.contains(&column.header) {
                    let (masked, result) = self.mask_one(column, &mut *rng, today);
                    results.push(result);
                    columns.push(masked);
                } else {
                    columns.push(column.clone());
                }
            }
        }

        self.finish(record, columns, results, skipped, run_id, start)
    }

    /// Mask the selected columns in parallel on the blocking thread pool
    ///
    /// Each column task gets its own RNG seeded from the run RNG in column
    /// order, so a seeded engine produces the same synthetic values as long
    /// as no two columns share a pseudonymized category.
    pub async fn apply_masking_concurrent(
        self: Arc<Self>,
        record: Record,
        selected: HashSet<String>,
    ) -> Result<MaskingOutcome> {
        let start = Instant::now();
        let run_id = Uuid::new_v4();
        let today = Utc::now().date_naive();

        crate::log_masking_start!(run_id, selected.len(), record.row_count());
        let skipped = self.skipped_headers(&record, &selected);

        let mut tasks = JoinSet::new();
        {
            let mut rng = self.lock_rng();
            for (index, column) in record.columns().iter().enumerate() {
                if !selected.contains(&column.header) {
                    continue;
                }
                let seed: u64 = rng.gen();
                let engine = Arc::clone(&self);
                let column = column.clone();
                tasks.spawn_blocking(move || {
                    let mut column_rng = StdRng::seed_from_u64(seed);
                    (index, engine.mask_one(&column, &mut column_rng, today))
                });
            }
        }

        let mut masked: Vec<Option<(Column, ColumnResult)>> = vec![None; record.column_count()];
        while let Some(joined) = tasks.join_next().await {
            let (index, output) = joined.context("Column masking task failed")?;
            masked[index] = Some(output);
        }

        let mut results = Vec::new();
        let mut columns = Vec::with_capacity(record.column_count());
        for (column, output) in record.columns().iter().zip(masked) {
            match output {
                Some((masked_column, result)) => {
                    results.push(result);
                    columns.push(masked_column);
                }
                None => columns.push(column.clone()),
            }
        }

        self.finish(&record, columns, results, skipped, run_id, start)
    }

    fn finish(
        &self,
        original: &Record,
        columns: Vec<Column>,
        results: Vec<ColumnResult>,
        skipped: Vec<String>,
        run_id: Uuid,
        start: Instant,
    ) -> Result<MaskingOutcome> {
        let masked = Record::new(columns).context("Masked record is malformed")?;
        let outcome = MaskingOutcome {
            record: masked,
            columns: results,
            skipped,
            run_id,
            timestamp: Utc::now(),
            processing_time_ms: start.elapsed().as_millis() as u64,
        };

        if let Some(ref logger) = self.audit_logger {
            logger.log_run(original, &outcome)?;
        }

        crate::log_masking_complete!(run_id, outcome.columns.len(), start.elapsed());
        Ok(outcome)
    }

    fn skipped_headers(&self, record: &Record, selected: &HashSet<String>) -> Vec<String> {
        let mut skipped: Vec<String> = selected
            .iter()
            .filter(|header| !record.has_column(header))
            .cloned()
            .collect();
        skipped.sort();
        for header in &skipped {
            crate::log_column_skipped!(header);
        }
        skipped
    }

    fn lock_rng(&self) -> std::sync::MutexGuard<'_, StdRng> {
        self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn mask_one<R: Rng>(&self, column: &Column, rng: &mut R, today: NaiveDate) -> (Column, ColumnResult) {
        let category = self.classify(&column.header).category;
        let (values, rows_masked) = self.mask_values(category, &column.values, rng, today);

        tracing::debug!(
            header = %column.header,
            category = %category,
            rows = rows_masked,
            "Masked column"
        );

        let result = ColumnResult {
            header: column.header.clone(),
            category,
            rows_masked,
        };
        (Column::new(column.header.clone(), values), result)
    }

    /// Transform every value; returns the new values and the count of
    /// non-missing cells
    fn mask_values<R: Rng>(
        &self,
        category: PiiCategory,
        values: &[CellValue],
        rng: &mut R,
        today: NaiveDate,
    ) -> (Vec<CellValue>, usize) {
        let masked = values
            .iter()
            .map(|value| self.mask_value(category, value, rng, today))
            .collect();
        let rows = values.iter().filter(|v| !v.is_missing()).count();
        (masked, rows)
    }

    fn mask_value<R: Rng>(
        &self,
        category: PiiCategory,
        value: &CellValue,
        rng: &mut R,
        today: NaiveDate,
    ) -> CellValue {
        if value.is_missing() {
            return CellValue::Missing;
        }

        let m = &self.masker;
        match category {
            PiiCategory::Name => CellValue::Text(m.partial_words(&generators::person_name(rng))),
            PiiCategory::Address => CellValue::Text(m.address(&generators::postal_address(rng))),
            PiiCategory::PlaceOfBirth => {
                CellValue::Text(m.partial_words(&generators::place_of_birth(rng)))
            }
            PiiCategory::Email => CellValue::Text(m.email(&generators::email_address(rng))),
            PiiCategory::Phone => CellValue::Text(m.phone(&generators::phone_number(rng))),
            PiiCategory::NationalId => {
                CellValue::Text(m.partial(&generators::national_id(rng, today)))
            }
            PiiCategory::Age => bucket_value(value, &AGE_BUCKET, generators::fake_age(rng)),
            PiiCategory::Salary => bucket_value(value, &SALARY_BUCKET, generators::fake_salary(rng)),
            PiiCategory::BirthDate => date_value(value, DateKind::Birth, rng, today),
            PiiCategory::ExpirationDate => date_value(value, DateKind::Expiration, rng, today),
            PiiCategory::Gender | PiiCategory::Religion | PiiCategory::Race => self
                .registry
                .pseudonymize(category, value)
                .map(CellValue::Text)
                .unwrap_or_else(|| value.clone()),
            PiiCategory::HealthStatus => CellValue::Text(generators::health_status(rng)),
            PiiCategory::CreditCard => match value {
                CellValue::Text(s) => CellValue::Text(m.credit_card(s)),
                CellValue::Integer(n) => CellValue::Text(m.credit_card(&n.to_string())),
                other => other.clone(),
            },
            PiiCategory::Generic => self.generic_value(value, rng, today),
        }
    }

    fn generic_value<R: Rng>(&self, value: &CellValue, rng: &mut R, today: NaiveDate) -> CellValue {
        let synthetic = self.config.generic_policy == GenericPolicy::Synthetic;
        match value {
            CellValue::Missing => CellValue::Missing,
            CellValue::Text(_) if synthetic => CellValue::Text(generators::short_text(rng)),
            CellValue::Text(_) => CellValue::Text(self.config.generic_placeholder.clone()),
            CellValue::Integer(_) if synthetic => CellValue::Integer(generators::small_integer(rng)),
            CellValue::Integer(_) => CellValue::Integer(0),
            CellValue::Float(_) if synthetic => CellValue::Float(generators::small_float(rng)),
            CellValue::Float(_) => CellValue::Float(0.0),
            CellValue::Date(_) => CellValue::Date(DateKind::Birth.generate(rng, today)),
        }
    }
}

/// Replace a numeric cell with the bucket around a freshly drawn value;
/// non-numeric cells pass through
fn bucket_value(value: &CellValue, spec: &BucketSpec, fake: i64) -> CellValue {
    match value.as_f64() {
        Some(_) => CellValue::Text(format_range(bucket_range(fake, spec))),
        None => value.clone(),
    }
}

fn date_value<R: Rng>(value: &CellValue, kind: DateKind, rng: &mut R, today: NaiveDate) -> CellValue {
    match value {
        CellValue::Date(_) => CellValue::Date(kind.generate(rng, today)),
        CellValue::Text(s) => CellValue::Text(mask_date(s, kind, rng, today)),
        other => other.clone(),
    }
}
