//! Jurisdictions, chat-native transaction fields and compliance policy versions
//!
//! Chat-native transactions carry a chat context id (UUID), a transcript
//! hash (SHA-256 hex) and a list of jurisdiction tags. Admission checks those
//! fields against the limits held by a [`ProtocolConstants`] registry.

use crate::error::MetadataError;
use crate::ProtocolConstants;
use serde::{Deserialize, Serialize};

/// Maximum length for chat context ID (UUID format)
pub const MAX_CHAT_CONTEXT_ID_LENGTH: usize = 36;

/// Maximum length for transcript hash (SHA-256 hex)
pub const MAX_TRANSCRIPT_HASH_LENGTH: usize = 64;

/// Maximum number of jurisdiction tags per transaction
pub const MAX_JURISDICTION_TAGS: usize = 10;

/// Supported jurisdiction tags
pub const JURISDICTIONS: [&str; 9] = [
    "US_federal",
    "EU",
    "UK",
    "cross_border",
    "US_state_CA",
    "US_state_NY",
    "GDPR",
    "CCPA",
    "JFMIP",
];

/// Audit log retention period in milliseconds (7 years)
pub const AUDIT_RETENTION_MS: u64 = 220_752_000_000;

/// Exact, case-sensitive membership in [`JURISDICTIONS`]
pub fn is_valid_jurisdiction(tag: &str) -> bool {
    JURISDICTIONS.contains(&tag)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatFieldLimits {
    pub max_chat_context_id_length: usize,
    pub max_transcript_hash_length: usize,
    pub max_jurisdiction_tags: usize,
}

impl Default for ChatFieldLimits {
    fn default() -> Self {
        Self {
            max_chat_context_id_length: MAX_CHAT_CONTEXT_ID_LENGTH,
            max_transcript_hash_length: MAX_TRANSCRIPT_HASH_LENGTH,
            max_jurisdiction_tags: MAX_JURISDICTION_TAGS,
        }
    }
}

/// Fixed set of jurisdiction tags; membership is the only query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JurisdictionSet(Vec<String>);

impl JurisdictionSet {
    pub fn new<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(tags.into_iter().map(Into::into).collect())
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.0.iter().any(|t| t == tag)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for JurisdictionSet {
    fn default() -> Self {
        Self::new(JURISDICTIONS)
    }
}

keyed_enum! {
    /// Regulatory regimes with a pinned policy version
    pub enum RegulatoryRegime: "regulatory regime" {
        Jfmip => "JFMIP",
        Gdpr => "GDPR",
        Mica => "MICA",
        Fatf => "FATF",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyVersions {
    pub jfmip: String,
    pub gdpr: String,
    pub mica: String,
    pub fatf: String,
}

impl Default for PolicyVersions {
    fn default() -> Self {
        Self {
            jfmip: "24-01".to_string(),
            gdpr: "2016/679".to_string(),
            mica: "2023/1114".to_string(),
            fatf: "R16-2019".to_string(),
        }
    }
}

impl PolicyVersions {
    pub fn policy_version(&self, regime: RegulatoryRegime) -> &str {
        match regime {
            RegulatoryRegime::Jfmip => &self.jfmip,
            RegulatoryRegime::Gdpr => &self.gdpr,
            RegulatoryRegime::Mica => &self.mica,
            RegulatoryRegime::Fatf => &self.fatf,
        }
    }
}

keyed_enum! {
    /// Transaction operation codes that carry chat metadata
    pub enum TransactionKind: "transaction kind" {
        Transfer => "transfer",
        GovernanceProposal => "governance_proposal",
        GovernanceVote => "governance_vote",
        MigrationIngest => "migration_ingest",
    }
}

/// Chat-native fields attached to a transaction header
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chat_context_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transcript_hash: Option<String>,
    #[serde(default)]
    pub jurisdiction_tags: Vec<String>,
}

impl ChatMetadata {
    /// Check field lengths, tag count and tag membership
    ///
    /// Lengths are counted in Unicode scalar values (`chars()`), not UTF-16
    /// code units. The two only disagree for input outside the Basic
    /// Multilingual Plane.
    pub fn validate(&self, registry: &ProtocolConstants) -> Result<(), MetadataError> {
        let limits = &registry.chat_limits;

        if let Some(id) = &self.chat_context_id {
            let len = id.chars().count();
            if len > limits.max_chat_context_id_length {
                return Err(MetadataError::ContextIdTooLong {
                    len,
                    max: limits.max_chat_context_id_length,
                });
            }
        }

        if let Some(hash) = &self.transcript_hash {
            let len = hash.chars().count();
            if len > limits.max_transcript_hash_length {
                return Err(MetadataError::TranscriptHashTooLong {
                    len,
                    max: limits.max_transcript_hash_length,
                });
            }
        }

        if self.jurisdiction_tags.len() > limits.max_jurisdiction_tags {
            return Err(MetadataError::TooManyJurisdictionTags {
                count: self.jurisdiction_tags.len(),
                max: limits.max_jurisdiction_tags,
            });
        }

        if let Some(tag) = self
            .jurisdiction_tags
            .iter()
            .find(|tag| !registry.is_valid_jurisdiction(tag))
        {
            return Err(MetadataError::UnknownJurisdiction { tag: tag.clone() });
        }

        Ok(())
    }

    /// [`validate`](Self::validate) plus the fields `kind` requires
    pub fn validate_for(
        &self,
        kind: TransactionKind,
        registry: &ProtocolConstants,
    ) -> Result<(), MetadataError> {
        self.validate(registry)?;

        let missing = |field: &'static str| MetadataError::MissingField {
            field,
            kind: kind.to_string(),
        };
        // An empty string counts as absent
        let absent = |value: &Option<String>| value.as_deref().map_or(true, str::is_empty);

        match kind {
            TransactionKind::GovernanceVote | TransactionKind::GovernanceProposal => {
                if absent(&self.chat_context_id) {
                    return Err(missing("chat_context_id"));
                }
                if absent(&self.transcript_hash) {
                    return Err(missing("transcript_hash"));
                }
            }
            TransactionKind::MigrationIngest => {
                if absent(&self.transcript_hash) {
                    return Err(missing("transcript_hash"));
                }
            }
            TransactionKind::Transfer => {}
        }

        Ok(())
    }
}

/// Split a comma-separated tag list, trimming whitespace and dropping empties
pub fn parse_jurisdiction_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONTEXT_ID: &str = "3f2b8c1e-9a4d-4e7f-8b21-0c5d6e7f8a9b";
    const TRANSCRIPT: &str = "9f86d081884c7d659a2feaa0c55ad015a3bf4f1b2b0b822cd15d6c15b0f00a08";

    fn registry() -> ProtocolConstants {
        ProtocolConstants::default()
    }

    #[test]
    fn test_jurisdiction_membership() {
        assert!(is_valid_jurisdiction("GDPR"));
        assert!(is_valid_jurisdiction("US_federal"));
        assert!(!is_valid_jurisdiction("gdpr"));
        assert!(!is_valid_jurisdiction("us_federal"));
        assert!(!is_valid_jurisdiction("US_"));
        assert!(!is_valid_jurisdiction(" EU"));
    }

    #[test]
    fn test_policy_versions() {
        let versions = PolicyVersions::default();
        assert_eq!(versions.policy_version(RegulatoryRegime::Jfmip), "24-01");
        assert_eq!(versions.policy_version(RegulatoryRegime::Gdpr), "2016/679");
        assert_eq!(versions.policy_version(RegulatoryRegime::Mica), "2023/1114");
        assert_eq!(versions.policy_version(RegulatoryRegime::Fatf), "R16-2019");
    }

    #[test]
    fn test_metadata_accepts_limits() {
        let meta = ChatMetadata {
            chat_context_id: Some(CONTEXT_ID.to_string()),
            transcript_hash: Some(TRANSCRIPT.to_string()),
            jurisdiction_tags: vec!["GDPR".to_string(), "EU".to_string()],
        };
        assert_eq!(meta.validate(&registry()), Ok(()));
        assert_eq!(
            meta.validate_for(TransactionKind::GovernanceVote, &registry()),
            Ok(())
        );
    }

    #[test]
    fn test_metadata_rejects_long_fields() {
        let meta = ChatMetadata {
            chat_context_id: Some(format!("{}x", CONTEXT_ID)),
            ..Default::default()
        };
        assert_eq!(
            meta.validate(&registry()),
            Err(MetadataError::ContextIdTooLong { len: 37, max: 36 })
        );

        let meta = ChatMetadata {
            transcript_hash: Some(format!("{}0", TRANSCRIPT)),
            ..Default::default()
        };
        assert_eq!(
            meta.validate(&registry()),
            Err(MetadataError::TranscriptHashTooLong { len: 65, max: 64 })
        );
    }

    #[test]
    fn test_metadata_rejects_tags() {
        let meta = ChatMetadata {
            jurisdiction_tags: vec!["EU".to_string(); 11],
            ..Default::default()
        };
        assert_eq!(
            meta.validate(&registry()),
            Err(MetadataError::TooManyJurisdictionTags { count: 11, max: 10 })
        );

        let meta = ChatMetadata {
            jurisdiction_tags: vec!["EU".to_string(), "gdpr".to_string()],
            ..Default::default()
        };
        assert_eq!(
            meta.validate(&registry()),
            Err(MetadataError::UnknownJurisdiction {
                tag: "gdpr".to_string()
            })
        );
    }

    #[test]
    fn test_required_fields_by_kind() {
        let bare = ChatMetadata::default();
        assert_eq!(bare.validate_for(TransactionKind::Transfer, &registry()), Ok(()));
        assert_eq!(
            bare.validate_for(TransactionKind::GovernanceProposal, &registry()),
            Err(MetadataError::MissingField {
                field: "chat_context_id",
                kind: "governance_proposal".to_string(),
            })
        );

        let context_only = ChatMetadata {
            chat_context_id: Some(CONTEXT_ID.to_string()),
            ..Default::default()
        };
        assert_eq!(
            context_only.validate_for(TransactionKind::GovernanceVote, &registry()),
            Err(MetadataError::MissingField {
                field: "transcript_hash",
                kind: "governance_vote".to_string(),
            })
        );
        assert!(context_only
            .validate_for(TransactionKind::MigrationIngest, &registry())
            .is_err());
    }

    #[test]
    fn test_empty_required_fields_are_missing() {
        let empty = ChatMetadata {
            chat_context_id: Some(String::new()),
            transcript_hash: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(empty.validate(&registry()), Ok(()));
        assert_eq!(
            empty.validate_for(TransactionKind::GovernanceVote, &registry()),
            Err(MetadataError::MissingField {
                field: "chat_context_id",
                kind: "governance_vote".to_string(),
            })
        );

        let empty_hash = ChatMetadata {
            chat_context_id: Some(CONTEXT_ID.to_string()),
            transcript_hash: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(
            empty_hash.validate_for(TransactionKind::MigrationIngest, &registry()),
            Err(MetadataError::MissingField {
                field: "transcript_hash",
                kind: "migration_ingest".to_string(),
            })
        );
        assert_eq!(
            empty_hash.validate_for(TransactionKind::Transfer, &registry()),
            Ok(())
        );
    }

    #[test]
    fn test_lengths_count_chars_not_bytes() {
        // 36 two-byte characters
        let meta = ChatMetadata {
            chat_context_id: Some("é".repeat(36)),
            ..Default::default()
        };
        assert_eq!(meta.validate(&registry()), Ok(()));

        let meta = ChatMetadata {
            chat_context_id: Some("é".repeat(37)),
            ..Default::default()
        };
        assert_eq!(
            meta.validate(&registry()),
            Err(MetadataError::ContextIdTooLong { len: 37, max: 36 })
        );
    }

    #[test]
    fn test_parse_tags() {
        assert_eq!(
            parse_jurisdiction_tags("GDPR, EU,,  UK ,"),
            vec!["GDPR", "EU", "UK"]
        );
        assert!(parse_jurisdiction_tags(" , ").is_empty());
    }
}
