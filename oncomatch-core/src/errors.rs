use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum AlterationError {
    #[error("Unknown reference genome: {0}")]
    UnknownReferenceGenome(String),

    #[error("Unknown oncogenicity: {0}")]
    UnknownOncogenicity(String),

    #[error("Unknown evidence type: {0}")]
    UnknownEvidenceType(String),

    #[error("Unknown alteration type: {0}")]
    UnknownAlterationType(String),

    #[error("Unknown variant consequence term: {0}")]
    UnknownConsequence(String),
}
