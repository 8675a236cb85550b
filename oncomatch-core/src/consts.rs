//! Fixed vocabulary shared by every crate in the workspace.

/// Start of the protein range given to alterations without a position.
pub const POSITION_BOUNDARY_START: i32 = -1;
/// End of the protein range given to alterations without a position.
pub const POSITION_BOUNDARY_END: i32 = 100_000;

// consequence terms
pub const ANY: &str = "any";
pub const FEATURE_TRUNCATION: &str = "feature_truncation";
pub const FRAMESHIFT_VARIANT: &str = "frameshift_variant";
pub const FUSION: &str = "fusion";
pub const IN_FRAME_DELETION: &str = "in_frame_deletion";
pub const IN_FRAME_INSERTION: &str = "in_frame_insertion";
pub const MISSENSE_VARIANT: &str = "missense_variant";
pub const NON_TRUNCATING_VARIANT: &str = "non_truncating_variant";
pub const SPLICE_REGION_VARIANT: &str = "splice_region_variant";
pub const SPLICE_DONOR_VARIANT: &str = "splice_donor_variant";
pub const SPLICE_ACCEPTOR_VARIANT: &str = "splice_acceptor_variant";
pub const START_LOST: &str = "start_lost";
pub const STOP_GAINED: &str = "stop_gained";
pub const STOP_LOST: &str = "stop_lost";
pub const SYNONYMOUS_VARIANT: &str = "synonymous_variant";
pub const NA: &str = "NA";

pub const SPLICE_SITE_VARIANTS: [&str; 3] = [
    SPLICE_REGION_VARIANT,
    SPLICE_DONOR_VARIANT,
    SPLICE_ACCEPTOR_VARIANT,
];

// umbrella and catalogue entry names
pub const ONCOGENIC_MUTATIONS: &str = "Oncogenic Mutations";
pub const TRUNCATING_MUTATIONS: &str = "Truncating Mutations";
pub const FUSIONS: &str = "Fusions";
pub const GAIN_OF_FUNCTION_MUTATIONS: &str = "Gain-of-function Mutations";
pub const LOSS_OF_FUNCTION_MUTATIONS: &str = "Loss-of-function Mutations";
pub const SWITCH_OF_FUNCTION_MUTATIONS: &str = "Switch-of-function Mutations";
pub const VUS: &str = "VUS";
pub const DELETION: &str = "Deletion";
pub const AMPLIFICATION: &str = "Amplification";

// gene specific special cases
pub const EGFR: &str = "EGFR";
pub const EGFR_CTD: &str = "CTD";
pub const EGFR_INS_FQEA: &str = "A763_Y764insFQEA";
pub const EGFR_762_823_INS: &str = "762_823ins";
