//! Core data types for doc-number extraction.

use serde::Serialize;

/// Priority bucket derived from a `document-id` format attribute.
///
/// Variant order is the output order: `Epo` < `PatentOffice` < `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum FormatBucket {
    /// `format="epo"`.
    #[serde(rename = "epo")]
    Epo,

    /// `format="patent-office"`.
    #[serde(rename = "patent-office")]
    PatentOffice,

    /// Any other format value, including an absent or empty attribute.
    #[serde(rename = "other")]
    Other,
}

impl FormatBucket {
    /// All buckets in priority order.
    pub const ALL: [FormatBucket; 3] = [Self::Epo, Self::PatentOffice, Self::Other];

    /// Classify a format attribute value. Matching is exact and case-sensitive.
    ///
    /// # Examples
    /// ```
    /// use docnumber_extractor::types::FormatBucket;
    ///
    /// assert_eq!(FormatBucket::from_format("epo"), FormatBucket::Epo);
    /// assert_eq!(FormatBucket::from_format("patent-office"), FormatBucket::PatentOffice);
    /// assert_eq!(FormatBucket::from_format("EPO"), FormatBucket::Other);
    /// assert_eq!(FormatBucket::from_format(""), FormatBucket::Other);
    /// ```
    #[must_use]
    pub fn from_format(format: &str) -> Self {
        match format {
            "epo" => Self::Epo,
            "patent-office" => Self::PatentOffice,
            _ => Self::Other,
        }
    }

    /// Get the bucket name as used in output.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Epo => "epo",
            Self::PatentOffice => "patent-office",
            Self::Other => "other",
        }
    }
}

impl std::fmt::Display for FormatBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One extracted doc-number with the format it was classified by.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocNumberEntry {
    /// Trimmed doc-number text.
    pub value: String,

    /// Raw `format` attribute value, empty when absent.
    pub format: String,

    /// Bucket derived from `format`.
    pub bucket: FormatBucket,
}

impl DocNumberEntry {
    /// Create an entry, deriving the bucket from the format value.
    pub fn new(value: impl Into<String>, format: impl Into<String>) -> Self {
        let format = format.into();
        let bucket = FormatBucket::from_format(&format);
        Self {
            value: value.into(),
            format,
            bucket,
        }
    }
}

/// Per-bucket accumulator preserving encounter order within each bucket.
///
/// Merging two accumulators appends bucket-by-bucket, so everything ends up
/// bucket-major and insertion-order-minor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BucketedDocNumbers {
    epo: Vec<DocNumberEntry>,
    patent_office: Vec<DocNumberEntry>,
    other: Vec<DocNumberEntry>,
}

impl BucketedDocNumbers {
    /// Create an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an entry under its bucket.
    pub fn push(&mut self, entry: DocNumberEntry) {
        self.bucket_mut(entry.bucket).push(entry);
    }

    /// Append every bucket of `other` after the matching bucket of `self`.
    pub fn append(&mut self, other: BucketedDocNumbers) {
        let BucketedDocNumbers {
            epo,
            patent_office,
            other,
        } = other;
        self.epo.extend(epo);
        self.patent_office.extend(patent_office);
        self.other.extend(other);
    }

    /// Entries recorded under one bucket, in encounter order.
    pub fn bucket(&self, bucket: FormatBucket) -> &[DocNumberEntry] {
        match bucket {
            FormatBucket::Epo => &self.epo,
            FormatBucket::PatentOffice => &self.patent_office,
            FormatBucket::Other => &self.other,
        }
    }

    fn bucket_mut(&mut self, bucket: FormatBucket) -> &mut Vec<DocNumberEntry> {
        match bucket {
            FormatBucket::Epo => &mut self.epo,
            FormatBucket::PatentOffice => &mut self.patent_office,
            FormatBucket::Other => &mut self.other,
        }
    }

    /// Total number of entries across all buckets.
    pub fn len(&self) -> usize {
        self.epo.len() + self.patent_office.len() + self.other.len()
    }

    /// Returns `true` if no entry has been recorded.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Flatten into priority order: epo, then patent-office, then other.
    pub fn into_ordered(mut self) -> Vec<DocNumberEntry> {
        let mut ordered = Vec::with_capacity(self.len());
        for bucket in FormatBucket::ALL {
            ordered.append(self.bucket_mut(bucket));
        }
        ordered
    }
}
